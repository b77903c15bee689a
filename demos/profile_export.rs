use std::path::Path;

use isa_atmosphere::io::{csv, json};
use isa_atmosphere::{sample_profile, AtmosphereModel};

fn main() {
    let model = AtmosphereModel::default();

    println!("Sampling standard atmosphere 0-85 km ...");
    let profile = sample_profile(&model, 0.0, model.ceiling(), 500.0)
        .expect("Invalid profile range");

    for b in model.boundaries() {
        println!(
            "  {:<12} base {:>6.1} km  T={:>7.2} K  P={:>10.3} Pa",
            model.layer_name(b.altitude),
            b.altitude / 1000.0,
            b.temperature,
            b.pressure
        );
    }

    csv::write_profile_file(Path::new("isa_profile.csv"), &profile)
        .expect("Failed to write CSV");
    json::write_profile_file(Path::new("isa_profile.json"), &profile)
        .expect("Failed to write JSON");

    println!("Exported {} samples: isa_profile.csv, isa_profile.json", profile.len());
}
