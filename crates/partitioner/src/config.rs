use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::mode::Mode;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartitionConfig {
    /// File whose lines are distributed.
    pub input: PathBuf,
    /// Existing directory that receives `<input name>.<index>` files.
    pub dest_dir: PathBuf,
    pub mode: Mode,
    /// Number of output partitions, must be at least 1.
    pub partitions: u32,
    /// Seed for [`Mode::Random`]. Taken from the wall clock when unset.
    pub seed: Option<u64>,
}

impl PartitionConfig {
    pub fn new(
        input: impl Into<PathBuf>,
        dest_dir: impl Into<PathBuf>,
        mode: Mode,
        partitions: u32,
    ) -> Self {
        Self {
            input: input.into(),
            dest_dir: dest_dir.into(),
            mode,
            partitions,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
