use decaymap_core::BackgroundModel;

pub fn run(model: &BackgroundModel, filter: Option<&str>) {
    println!("{:<42} {:>14} {:>10}", "source", "events/s", "per job");

    let mut shown = 0usize;
    for (key, entry) in model.rates.iter() {
        if let Some(needle) = filter {
            if !key.contains(needle) {
                continue;
            }
        }
        println!(
            "{:<42} {:>14.6e} {:>10}",
            key, entry.events_per_sec, entry.events_per_job
        );
        shown += 1;
    }

    if shown == 0 {
        println!("  (no matching sources)");
    } else {
        println!("\n{shown} source(s)");
    }
}
