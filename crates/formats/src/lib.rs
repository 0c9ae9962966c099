//! FASTA record reading and writing
//!
//! This crate provides the sequence record type plus streaming readers
//! and writers used by the deduplication engines.

pub mod error;
pub mod fasta;
pub mod reader;
pub mod record;
pub mod writer;

pub use error::{Error, Result};
pub use fasta::FastaReader;
pub use reader::{open_fasta, MemorySource, RecordSource};
pub use record::SeqRecord;
pub use writer::{FastaWriter, RecordSink};
