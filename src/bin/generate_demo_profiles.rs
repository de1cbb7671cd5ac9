//! Synthetic profile snapshot generator.
//!
//! Writes a JSON array of profile cards for seeding local search demos and
//! benchmark fixtures. Requires the `data-gen` feature.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::{Context, Result};
use cardseek::demo_data::{demo_profiles, synthetic_profile};
use cardseek::ProfileCard;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of synthetic profiles to generate
    #[arg(short, long, default_value_t = 1000)]
    count: usize,

    /// RNG seed for reproducible output
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// Output path for the JSON snapshot
    #[arg(short, long, default_value = "profiles.json")]
    out: PathBuf,

    /// Prepend the curated demo profiles to the batch
    #[arg(long)]
    demo: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let pb = ProgressBar::new(args.count as u64);
    pb.set_style(
        ProgressStyle::with_template("{bar:40} {pos}/{len} {msg}")
            .context("invalid progress template")?,
    );

    let mut profiles: Vec<ProfileCard> = if args.demo { demo_profiles() } else { Vec::new() };
    let mut rng = StdRng::seed_from_u64(args.seed);
    for i in 0..args.count {
        profiles.push(synthetic_profile(&mut rng, i));
        pb.inc(1);
    }
    pb.finish_with_message("generated");

    let file = File::create(&args.out)
        .with_context(|| format!("failed to create {}", args.out.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), &profiles)
        .context("failed to serialize profiles")?;

    println!("wrote {} profiles to {}", profiles.len(), args.out.display());
    Ok(())
}
