use std::fs;

use decaymap_core::BackgroundModel;

pub fn run(model: &BackgroundModel, output: Option<&str>) {
    let json = match serde_json::to_string_pretty(model) {
        Ok(json) => json,
        Err(err) => {
            eprintln!("error: failed to serialize model: {err}");
            std::process::exit(1);
        }
    };

    match output {
        Some(path) => {
            if let Err(err) = fs::write(path, &json) {
                eprintln!("error: failed to write {path}: {err}");
                std::process::exit(1);
            }
            log::info!("wrote {} model to {path}", model.profile);
            println!("Wrote model to {path}");
        }
        None => println!("{json}"),
    }
}
