//! CSV dump example.
//!
//! Generates a jerk-limited profile and writes it as CSV.
//!
//! ```text
//! cargo run --example csv_dump                          # built-in move, stdout
//! cargo run --example csv_dump -- points.csv            # built-in move, file
//! cargo run --example csv_dump -- points.csv demos/profile.toml short
//! ```

use std::fs::File;
use std::io::{self, BufWriter};

use scurve_profile::{load_config, write_csv, ProfileGenerator, ProfileSampler};

fn builtin_move() -> scurve_profile::Result<ProfileSampler> {
    let generator = ProfileGenerator::new(0.6, 0.5, 1.0);
    generator.sampler(1.6, 0.01)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let sampler = match (args.get(1), args.get(2)) {
        (Some(path), Some(name)) => load_config(path)?.sampler(name)?,
        (Some(path), None) => load_config(path)?.sampler("demo")?,
        _ => builtin_move()?,
    };

    eprintln!("time to complete: {}", sampler.timing().total_duration());
    eprintln!("samples: {}", sampler.len());

    let lines = match args.first() {
        Some(path) => write_csv(BufWriter::new(File::create(path)?), sampler)?,
        None => write_csv(io::stdout().lock(), sampler)?,
    };

    eprintln!("wrote {} rows", lines);
    Ok(())
}
