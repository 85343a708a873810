use anyhow::{Context, Result};
use clap::Parser;
use partitioner::{Mode, PartitionConfig};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Split the lines of a text file across N partition files.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// File to partition
    input: PathBuf,

    /// Existing directory receiving `<input name>.<index>` files
    dest_dir: PathBuf,

    /// rr (round-robin), ln (linear) or rd (random)
    mode: Mode,

    /// Number of partitions
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    partitions: u32,

    /// Seed for random partitioning; taken from the clock when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Print the run summary as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = PartitionConfig::new(cli.input, cli.dest_dir, cli.mode, cli.partitions);
    config.seed = cli.seed;

    let summary = partitioner::run(&config)
        .with_context(|| format!("{} partitioning of {:?} failed", config.mode, config.input))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        info!(
            lines = summary.total_lines,
            partitions = summary.partitions.len(),
            dest_dir = %config.dest_dir.display(),
            seed = ?summary.seed,
            "done"
        );
    }

    Ok(())
}
