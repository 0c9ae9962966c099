//! Equivalence key extraction
//!
//! The duplicate-type rule decides which parts of a record make up its
//! comparison key. Two records are duplicates when their keys are
//! byte-identical.

use crate::{Error, Result};
use seqdedup_formats::SeqRecord;
use std::borrow::Cow;

/// What counts as a duplicate.
///
/// Each variant names the parts of a record that must match exactly
/// (case sensitive) for two records to be the same. Selected on the
/// command line by its numeric tag (1-5).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicateType {
    /// The entire header must match; the sequence may differ
    HeaderExact,
    /// The header id (up to the first whitespace) must match
    IdExact,
    /// The entire sequence must match; the header may differ
    SequenceExact,
    /// Both the entire header and the entire sequence must match
    HeaderAndSequence,
    /// Both the header id and the entire sequence must match
    IdAndSequence,
}

impl DuplicateType {
    /// Parse the numeric command-line tag.
    pub fn from_flag(value: u8) -> Result<Self> {
        match value {
            1 => Ok(Self::HeaderExact),
            2 => Ok(Self::IdExact),
            3 => Ok(Self::SequenceExact),
            4 => Ok(Self::HeaderAndSequence),
            5 => Ok(Self::IdAndSequence),
            _ => Err(Error::InvalidDuplicateType(value)),
        }
    }

    /// Compose the comparison key for a record under this rule.
    ///
    /// Concatenation order is fixed per variant.
    pub fn compute_key<'a>(&self, record: &'a SeqRecord) -> Cow<'a, str> {
        match self {
            Self::HeaderExact => Cow::Borrowed(record.header.as_str()),
            Self::IdExact => Cow::Borrowed(record.id.as_str()),
            Self::SequenceExact => Cow::Borrowed(record.sequence.as_str()),
            Self::HeaderAndSequence => {
                Cow::Owned(format!("{}{}", record.header, record.sequence))
            }
            Self::IdAndSequence => Cow::Owned(format!("{}{}", record.id, record.sequence)),
        }
    }
}
