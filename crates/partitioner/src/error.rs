use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PartitionError {
    #[error("failed to open input {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read input {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create partition file {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write partition file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("number of partitions must be at least 1")]
    ZeroPartitions,

    #[error("input path has no file name: {0}")]
    NoFileName(PathBuf),

    #[error("unknown mode '{0}', expected rr, ln or rd")]
    UnknownMode(String),
}

pub type Result<T> = std::result::Result<T, PartitionError>;
