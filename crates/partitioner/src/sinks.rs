use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{PartitionError, Result};

#[cfg(windows)]
const LINE_ENDING: &[u8] = b"\r\n";
#[cfg(not(windows))]
const LINE_ENDING: &[u8] = b"\n";

/// The N open output files of a run, named `<input file name>.<index>`.
///
/// Every sink is created up front. Dropping the set closes all files, so an
/// error halfway through a run never leaks handles; call [`PartitionSet::finish`]
/// on the success path to surface flush errors.
pub struct PartitionSet {
    sinks: Vec<BufWriter<File>>,
    paths: Vec<PathBuf>,
    counts: Vec<u64>,
}

impl PartitionSet {
    pub fn create(input: &Path, dest_dir: &Path, partitions: u32) -> Result<Self> {
        if partitions == 0 {
            return Err(PartitionError::ZeroPartitions);
        }
        let paths = partition_paths(input, dest_dir, partitions)?;

        let mut sinks = Vec::with_capacity(paths.len());
        for path in &paths {
            let file = File::create(path).map_err(|source| PartitionError::Create {
                path: path.clone(),
                source,
            })?;
            debug!(path = %path.display(), "created partition file");
            sinks.push(BufWriter::new(file));
        }

        Ok(Self {
            sinks,
            counts: vec![0; paths.len()],
            paths,
        })
    }

    /// Append one line (without its terminator) to partition `index`.
    pub fn write_line(&mut self, index: usize, line: &[u8]) -> Result<()> {
        let sink = &mut self.sinks[index];
        sink.write_all(line)
            .and_then(|()| sink.write_all(LINE_ENDING))
            .map_err(|source| PartitionError::Write {
                path: self.paths[index].clone(),
                source,
            })?;
        self.counts[index] += 1;
        Ok(())
    }

    /// Flush and close every sink, returning `(path, lines written)` per partition.
    pub fn finish(self) -> Result<Vec<(PathBuf, u64)>> {
        for (sink, path) in self.sinks.into_iter().zip(&self.paths) {
            sink.into_inner().map_err(|e| PartitionError::Write {
                path: path.clone(),
                source: e.into_error(),
            })?;
        }
        Ok(self.paths.into_iter().zip(self.counts).collect())
    }
}

/// Output paths for `partitions` shards of `input` inside `dest_dir`.
pub fn partition_paths(input: &Path, dest_dir: &Path, partitions: u32) -> Result<Vec<PathBuf>> {
    let name = input
        .file_name()
        .ok_or_else(|| PartitionError::NoFileName(input.to_path_buf()))?;

    Ok((0..partitions)
        .map(|i| {
            let mut file_name = name.to_os_string();
            file_name.push(format!(".{}", i));
            dest_dir.join(file_name)
        })
        .collect())
}
