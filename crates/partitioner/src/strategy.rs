use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Picks the partition index for each successive input line.
pub trait Selector {
    /// Index in `0..n` of the partition that receives the next line.
    fn next_partition(&mut self) -> usize;
}

/// Cyclic assignment: line `i` lands in partition `i % n`.
#[derive(Debug, Clone)]
pub struct RoundRobin {
    partitions: usize,
    cursor: usize,
}

impl RoundRobin {
    pub(crate) fn new(partitions: usize) -> Self {
        assert!(partitions > 0, "partition count must be positive");
        Self {
            partitions,
            cursor: 0,
        }
    }
}

impl Selector for RoundRobin {
    fn next_partition(&mut self) -> usize {
        let current = self.cursor;
        self.cursor = (self.cursor + 1) % self.partitions;
        current
    }
}

/// Contiguous chunks of `quota = total_lines / n` lines.
///
/// The cursor moves on once `written >= (cursor + 1) * quota` and never past
/// the last partition, which therefore absorbs the `total_lines % n` remainder.
///
/// When `n > total_lines` the quota is zero and the condition holds after
/// every write: the cursor advances one partition per line, so partition `i`
/// receives line `i` and the trailing partitions stay empty.
#[derive(Debug, Clone)]
pub struct Linear {
    partitions: usize,
    quota: u64,
    cursor: usize,
    written: u64,
}

impl Linear {
    pub(crate) fn new(partitions: usize, total_lines: u64) -> Self {
        assert!(partitions > 0, "partition count must be positive");
        Self {
            partitions,
            quota: total_lines / partitions as u64,
            cursor: 0,
            written: 0,
        }
    }

    pub fn quota(&self) -> u64 {
        self.quota
    }
}

impl Selector for Linear {
    fn next_partition(&mut self) -> usize {
        let current = self.cursor;
        self.written += 1;
        let filled = self.written >= (self.cursor as u64 + 1) * self.quota;
        if filled && self.cursor < self.partitions - 1 {
            self.cursor += 1;
        }
        current
    }
}

/// Independent uniform draw over `0..n` for every line.
#[derive(Debug, Clone)]
pub struct Random {
    partitions: usize,
    rng: StdRng,
}

impl Random {
    pub(crate) fn new(partitions: usize, seed: u64) -> Self {
        assert!(partitions > 0, "partition count must be positive");
        Self {
            partitions,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Selector for Random {
    fn next_partition(&mut self) -> usize {
        self.rng.gen_range(0..self.partitions)
    }
}
