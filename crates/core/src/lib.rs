//! Core deduplication logic for sequence records
//!
//! This crate provides the equivalence rules and the two engines that
//! decide which records are first occurrences: exact (full keys, one
//! pass) and approximate (fixed-width digests, two passes, bounded
//! per-key memory).

pub mod approx_dedup;
pub mod dedup;
pub mod error;
pub mod exact_dedup;
pub mod hash;
pub mod key;

pub use approx_dedup::ApproxDeduplicator;
pub use dedup::{DedupStats, Deduplicator};
pub use error::{Error, Result};
pub use exact_dedup::ExactDeduplicator;
pub use key::DuplicateType;
