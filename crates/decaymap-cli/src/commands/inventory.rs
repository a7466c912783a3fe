use decaymap_core::BackgroundModel;

pub fn run(model: &BackgroundModel) {
    println!("Profile: {}\n", model.profile);

    for (process, locations) in &model.topology.process_locations {
        for location in locations {
            let isotopes = &model.topology.chain_map[process][location];
            println!("{process}: {location}: {isotopes:?}");
        }
        println!();
    }

    let pairs: usize = model.topology.process_locations.values().map(Vec::len).sum();
    println!(
        "{} process(es), {} active (process, location) pair(s)",
        model.topology.process_locations.len(),
        pairs
    );
}
