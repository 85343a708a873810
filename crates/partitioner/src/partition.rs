use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, info, warn};

use crate::config::PartitionConfig;
use crate::error::{PartitionError, Result};
use crate::lines::LineReader;
use crate::mode::Mode;
use crate::sinks::PartitionSet;
use crate::strategy::{Linear, Random, RoundRobin, Selector};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionInfo {
    pub index: usize,
    pub path: PathBuf,
    pub lines: u64,
}

/// Outcome of a completed run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartitionSummary {
    pub mode: Mode,
    pub total_lines: u64,
    /// Seed actually used, only set for [`Mode::Random`].
    pub seed: Option<u64>,
    pub partitions: Vec<PartitionInfo>,
}

impl PartitionSummary {
    pub fn sizes(&self) -> Vec<u64> {
        self.partitions.iter().map(|p| p.lines).collect()
    }
}

/// Run the strategy selected by `config.mode`.
pub fn run(config: &PartitionConfig) -> Result<PartitionSummary> {
    let PartitionConfig {
        input,
        dest_dir,
        mode,
        partitions,
        seed,
    } = config;

    if seed.is_some() && *mode != Mode::Random {
        warn!(mode = %mode, "seed is only used by random partitioning, ignoring it");
    }

    match mode {
        Mode::RoundRobin => round_robin(input, dest_dir, *partitions),
        Mode::Linear => linear(input, dest_dir, *partitions),
        Mode::Random => random(input, dest_dir, *partitions, *seed),
    }
}

/// Each partition receives one line from the input in turn.
pub fn round_robin(input: &Path, dest_dir: &Path, partitions: u32) -> Result<PartitionSummary> {
    check_partitions(partitions)?;
    info!(input = %input.display(), partitions, "starting round-robin partitioning");

    let reader = LineReader::open(input)?;
    let selector = RoundRobin::new(partitions as usize);
    distribute(Mode::RoundRobin, reader, input, dest_dir, partitions, selector, None)
}

/// Each partition receives one contiguous chunk of the input; the last
/// partition also receives the lines left over by the integer division.
///
/// The input is read twice: once to count lines, once to distribute them.
/// With more partitions than lines, partition `i` gets line `i` and the
/// remaining partitions stay empty.
pub fn linear(input: &Path, dest_dir: &Path, partitions: u32) -> Result<PartitionSummary> {
    check_partitions(partitions)?;
    info!(input = %input.display(), partitions, "starting linear partitioning");

    let total_lines = LineReader::open(input)?.count()?;
    let selector = Linear::new(partitions as usize, total_lines);
    debug!(total_lines, quota = selector.quota(), "counted input lines");
    if u64::from(partitions) > total_lines {
        warn!(
            total_lines,
            partitions, "more partitions than lines, trailing partitions will be empty"
        );
    }

    let reader = LineReader::open(input)?;
    distribute(Mode::Linear, reader, input, dest_dir, partitions, selector, None)
}

/// Each line goes to a uniformly drawn partition. Partition sizes are only
/// equal in expectation. Without a `seed`, one is derived from the clock.
pub fn random(
    input: &Path,
    dest_dir: &Path,
    partitions: u32,
    seed: Option<u64>,
) -> Result<PartitionSummary> {
    check_partitions(partitions)?;
    let seed = seed.unwrap_or_else(clock_seed);
    info!(input = %input.display(), partitions, seed, "starting random partitioning");

    let reader = LineReader::open(input)?;
    let selector = Random::new(partitions as usize, seed);
    distribute(Mode::Random, reader, input, dest_dir, partitions, selector, Some(seed))
}

fn check_partitions(partitions: u32) -> Result<()> {
    if partitions == 0 {
        return Err(PartitionError::ZeroPartitions);
    }
    Ok(())
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

fn distribute<S: Selector>(
    mode: Mode,
    mut reader: LineReader<std::io::BufReader<std::fs::File>>,
    input: &Path,
    dest_dir: &Path,
    partitions: u32,
    mut selector: S,
    seed: Option<u64>,
) -> Result<PartitionSummary> {
    let mut sinks = PartitionSet::create(input, dest_dir, partitions)?;

    let mut total_lines = 0u64;
    while let Some(line) = reader.next_line()? {
        sinks.write_line(selector.next_partition(), line)?;
        total_lines += 1;
    }

    let partitions: Vec<PartitionInfo> = sinks
        .finish()?
        .into_iter()
        .enumerate()
        .map(|(index, (path, lines))| PartitionInfo { index, path, lines })
        .collect();

    info!(mode = %mode, total_lines, "partitioning complete");
    Ok(PartitionSummary {
        mode,
        total_lines,
        seed,
        partitions,
    })
}
