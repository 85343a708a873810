use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PartitionError;

/// Rule used to pick the destination partition of each line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// Line `i` goes to partition `i % n`.
    #[serde(rename = "rr")]
    RoundRobin,
    /// Each partition receives one contiguous chunk; the last one takes the remainder.
    #[serde(rename = "ln")]
    Linear,
    /// Each line goes to a uniformly drawn partition.
    #[serde(rename = "rd")]
    Random,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mode::RoundRobin => "round-robin",
            Mode::Linear => "linear",
            Mode::Random => "random",
        };
        f.write_str(name)
    }
}

impl FromStr for Mode {
    type Err = PartitionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rr" | "round-robin" => Ok(Mode::RoundRobin),
            "ln" | "linear" => Ok(Mode::Linear),
            "rd" | "random" => Ok(Mode::Random),
            other => Err(PartitionError::UnknownMode(other.to_string())),
        }
    }
}
