//! Streaming FASTA reader
//!
//! Reads records one at a time without loading the whole file into
//! memory, with automatic gzip decompression support. The reader can be
//! restarted to traverse the same file a second time.

use crate::{Error, Result, SeqRecord};
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};
use tracing::debug;

const BUFFER_SIZE: usize = 64 * 1024; // 64KB buffer

/// Streaming FASTA reader yielding one record per `>` header line.
///
/// Multi-line sequence bodies are folded into a single string. Blank
/// lines are skipped and trailing `\r` is stripped, so CRLF files parse
/// the same as LF files.
pub struct FastaReader {
    reader: BufReader<Box<dyn Read>>,
    path: PathBuf,
    /// Header of the next record, stashed when its `>` line is reached
    /// while reading the previous record's body.
    pending_header: Option<String>,
    records_read: usize,
    bytes_read: u64,
    total_bytes: Option<u64>,
}

impl FastaReader {
    /// Open a FASTA file, auto-detecting gzip compression by extension.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let (reader, total_bytes) = open_stream(&path)?;
        Ok(Self {
            reader: BufReader::with_capacity(BUFFER_SIZE, reader),
            path,
            pending_header: None,
            records_read: 0,
            bytes_read: 0,
            total_bytes,
        })
    }

    /// Reopen the file so the records can be traversed again from the start.
    pub fn restart(&mut self) -> Result<()> {
        debug!("Restarting FASTA reader: {:?}", self.path);
        let (reader, total_bytes) = open_stream(&self.path)?;
        self.reader = BufReader::with_capacity(BUFFER_SIZE, reader);
        self.pending_header = None;
        self.records_read = 0;
        self.bytes_read = 0;
        self.total_bytes = total_bytes;
        Ok(())
    }

    /// Get total file size if known (unknown for compressed input)
    pub fn total_bytes(&self) -> Option<u64> {
        self.total_bytes
    }

    /// Get the number of bytes read so far
    pub fn bytes_processed(&self) -> u64 {
        self.bytes_read
    }

    /// Get the number of records read so far
    pub fn records_processed(&self) -> usize {
        self.records_read
    }

    /// Read the next line without its terminator. `Ok(None)` at EOF.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let n = self.reader.read_line(&mut line)?;
        if n == 0 {
            return Ok(None);
        }
        self.bytes_read += n as u64;
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }
}

impl Iterator for FastaReader {
    type Item = Result<SeqRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        // Find this record's header: stashed by the previous record, or
        // the first `>` line in the file.
        let header = match self.pending_header.take() {
            Some(header) => header,
            None => loop {
                match self.read_line() {
                    Ok(Some(line)) => {
                        if let Some(header) = line.strip_prefix('>') {
                            break header.to_string();
                        }
                        if line.trim().is_empty() {
                            continue;
                        }
                        return Some(Err(Error::InvalidFile(format!(
                            "expected a '>' header line, found: {}",
                            line
                        ))));
                    }
                    Ok(None) => return None,
                    Err(e) => return Some(Err(e)),
                }
            },
        };

        // Accumulate body lines until the next header or EOF.
        let mut sequence = String::new();
        loop {
            match self.read_line() {
                Ok(Some(line)) => {
                    if let Some(next_header) = line.strip_prefix('>') {
                        self.pending_header = Some(next_header.to_string());
                        break;
                    }
                    sequence.push_str(line.trim());
                }
                Ok(None) => break,
                Err(e) => return Some(Err(e)),
            }
        }

        self.records_read += 1;
        Some(Ok(SeqRecord::new(header, sequence)))
    }
}

fn open_stream(path: &Path) -> Result<(Box<dyn Read>, Option<u64>)> {
    let file = File::open(path)?;
    let total_bytes = file.metadata()?.len();

    match path.extension().and_then(|e| e.to_str()) {
        Some("gz") => {
            debug!("Opening gzip-compressed FASTA file: {:?}", path);
            Ok((Box::new(GzDecoder::new(file)), None))
        }
        _ => {
            debug!("Opening plain FASTA file: {:?}", path);
            Ok((Box::new(file), Some(total_bytes)))
        }
    }
}
