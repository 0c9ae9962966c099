//! Digest-based deduplication for constrained memory
//!
//! Stores a fixed-width 64-bit digest of each key instead of the key
//! itself, bounding memory at eight bytes per distinct key. Requires
//! two passes over the input: the collect pass records every digest,
//! the filter pass emits the first record bearing each digest. A digest
//! collision between two distinct keys drops the later record, which is
//! the accepted trade for the bounded memory.

use ahash::AHashSet;
use seqdedup_formats::{RecordSink, RecordSource, SeqRecord};
use tracing::{debug, info};

use crate::dedup::{DedupStats, Deduplicator};
use crate::hash::digest_key;
use crate::key::DuplicateType;
use crate::Result;

/// Two-pass deduplicator over key digests
pub struct ApproxDeduplicator {
    /// Digests collected in the first pass, consumed in the second
    digests: AHashSet<u64>,
    duplicate_type: DuplicateType,
    stats: DedupStats,
}

impl ApproxDeduplicator {
    /// Create a new digest-based deduplicator
    pub fn new(duplicate_type: DuplicateType) -> Self {
        Self {
            digests: AHashSet::new(),
            duplicate_type,
            stats: DedupStats::default(),
        }
    }

    /// Create a new digest-based deduplicator with a pre-sized set
    pub fn with_capacity(duplicate_type: DuplicateType, capacity: usize) -> Self {
        Self {
            digests: AHashSet::with_capacity(capacity),
            duplicate_type,
            stats: DedupStats::default(),
        }
    }

    /// Collect pass: record the digest of this record's key.
    ///
    /// Insertion is unconditional; re-inserting a digest is a no-op.
    pub fn observe(&mut self, record: &SeqRecord) {
        let key = self.duplicate_type.compute_key(record);
        self.digests.insert(digest_key(key.as_ref()));
    }

    /// Filter pass: claim this record's digest.
    ///
    /// Returns `true` exactly once per digest, on its first occurrence
    /// in the pass; the digest is consumed, so every later record
    /// mapping to it returns `false`.
    pub fn take_first(&mut self, record: &SeqRecord) -> bool {
        self.stats.total_seen += 1;

        let key = self.duplicate_type.compute_key(record);
        if self.digests.remove(&digest_key(key.as_ref())) {
            self.stats.unique_count += 1;
            true
        } else {
            self.stats.duplicates_found += 1;
            false
        }
    }

    /// Get the number of digests currently held
    pub fn distinct_digests(&self) -> usize {
        self.digests.len()
    }

    /// Get current statistics
    pub fn stats(&self) -> &DedupStats {
        &self.stats
    }

    /// Clear all digests and reset statistics
    pub fn clear(&mut self) {
        self.digests.clear();
        self.stats = DedupStats::default();
    }
}

impl Deduplicator for ApproxDeduplicator {
    fn process(
        &mut self,
        source: &mut dyn RecordSource,
        sink: &mut dyn RecordSink,
    ) -> Result<DedupStats> {
        info!(
            "Starting low-memory deduplication, rule {:?}",
            self.duplicate_type
        );

        while let Some(result) = source.next() {
            self.observe(&result?);
        }
        debug!("Collect pass complete: {} distinct digests", self.digests.len());

        source.restart()?;

        while let Some(result) = source.next() {
            let record = result?;
            if self.take_first(&record) {
                sink.write_record(&record)?;
            }
        }

        debug!(
            "Filter pass complete: {} kept, {} dropped",
            self.stats.unique_count, self.stats.duplicates_found
        );
        Ok(self.stats.clone())
    }
}
