//! FASTA writer and record sink
//!
//! Serializes surviving records back to FASTA text, one header line and
//! one sequence line per record. Output is buffered; call `finish()`
//! when done so the last buffer reaches disk.

use crate::{Result, SeqRecord};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Sink accepting kept records in order
pub trait RecordSink {
    /// Write one record to the sink
    fn write_record(&mut self, record: &SeqRecord) -> Result<()>;
}

/// Buffered FASTA file writer
pub struct FastaWriter {
    writer: BufWriter<File>,
    records_written: usize,
}

impl FastaWriter {
    /// Create the output file at `path`, truncating any existing file.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            writer: BufWriter::new(file),
            records_written: 0,
        })
    }

    /// Get the number of records written so far
    pub fn records_written(&self) -> usize {
        self.records_written
    }

    /// Flush buffered output to disk.
    pub fn finish(mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

impl RecordSink for FastaWriter {
    fn write_record(&mut self, record: &SeqRecord) -> Result<()> {
        writeln!(self.writer, ">{}", record.header)?;
        writeln!(self.writer, "{}", record.sequence)?;
        self.records_written += 1;
        Ok(())
    }
}

/// In-memory sink, used by tests and library callers
impl RecordSink for Vec<SeqRecord> {
    fn write_record(&mut self, record: &SeqRecord) -> Result<()> {
        self.push(record.clone());
        Ok(())
    }
}
