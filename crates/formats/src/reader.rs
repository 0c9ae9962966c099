//! Record source abstraction
//!
//! A restartable stream of sequence records. Engines that need a second
//! traversal call `restart()` to reopen the input rather than consuming
//! it destructively.

use crate::{FastaReader, Result, SeqRecord};
use std::path::Path;
use tracing::info;

/// Trait for restartable record streams
pub trait RecordSource: Iterator<Item = Result<SeqRecord>> {
    /// Reopen the underlying stream so records can be traversed again
    fn restart(&mut self) -> Result<()>;

    /// Get total input size in bytes if known
    fn total_bytes(&self) -> Option<u64>;

    /// Get number of bytes processed so far
    fn bytes_processed(&self) -> u64;

    /// Get the number of records processed
    fn records_processed(&self) -> usize;
}

impl RecordSource for FastaReader {
    fn restart(&mut self) -> Result<()> {
        FastaReader::restart(self)
    }

    fn total_bytes(&self) -> Option<u64> {
        FastaReader::total_bytes(self)
    }

    fn bytes_processed(&self) -> u64 {
        FastaReader::bytes_processed(self)
    }

    fn records_processed(&self) -> usize {
        FastaReader::records_processed(self)
    }
}

/// Open a FASTA file (plain or gzip-compressed) as a record source.
pub fn open_fasta<P: AsRef<Path>>(path: P) -> Result<Box<dyn RecordSource>> {
    let path = path.as_ref();
    info!("Opening sequence file: {:?}", path);
    let reader = FastaReader::open(path)?;
    Ok(Box::new(reader))
}

/// In-memory record source, used by tests and library callers.
///
/// Progress is reported in records only; byte counters stay at zero.
pub struct MemorySource {
    records: Vec<SeqRecord>,
    position: usize,
}

impl MemorySource {
    /// Create a source yielding the given records in order.
    pub fn new(records: Vec<SeqRecord>) -> Self {
        Self {
            records,
            position: 0,
        }
    }
}

impl Iterator for MemorySource {
    type Item = Result<SeqRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = self.records.get(self.position)?.clone();
        self.position += 1;
        Some(Ok(record))
    }
}

impl RecordSource for MemorySource {
    fn restart(&mut self) -> Result<()> {
        self.position = 0;
        Ok(())
    }

    fn total_bytes(&self) -> Option<u64> {
        None
    }

    fn bytes_processed(&self) -> u64 {
        0
    }

    fn records_processed(&self) -> usize {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_open_fasta_source() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, ">a x\nAC\n>b y\nGT").unwrap();
        temp_file.flush().unwrap();

        let mut source = open_fasta(temp_file.path()).unwrap();
        let records: Vec<_> = source.by_ref().collect::<Result<Vec<_>>>().unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(source.records_processed(), 2);

        source.restart().unwrap();
        assert_eq!(source.records_processed(), 0);
        let again: Vec<_> = source.by_ref().collect::<Result<Vec<_>>>().unwrap();
        assert_eq!(records, again);
    }

    #[test]
    fn test_open_fasta_missing_file() {
        let result = open_fasta("/nonexistent/input.fasta");
        assert!(result.is_err());
    }
}
