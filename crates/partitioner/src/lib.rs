pub mod config;
pub mod error;
pub mod lines;
pub mod mode;
pub mod partition;
pub mod sinks;
pub mod strategy;

pub use config::PartitionConfig;
pub use error::PartitionError;
pub use mode::Mode;
pub use partition::{linear, random, round_robin, run, PartitionInfo, PartitionSummary};
pub use sinks::PartitionSet;
