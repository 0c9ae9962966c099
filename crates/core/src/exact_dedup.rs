//! Exact first-occurrence deduplication
//!
//! Retains the full comparison key of every record seen, so detection
//! is collision-free: a record is dropped only when an earlier record
//! produced an identical key. Memory grows with the total size of
//! distinct keys.

use ahash::AHashSet;
use seqdedup_formats::{RecordSink, RecordSource, SeqRecord};
use tracing::{debug, info};

use crate::dedup::{DedupStats, Deduplicator};
use crate::key::DuplicateType;
use crate::Result;

/// Single-pass deduplicator over full keys
pub struct ExactDeduplicator {
    /// Set of keys seen so far
    seen_keys: AHashSet<String>,
    duplicate_type: DuplicateType,
    stats: DedupStats,
}

impl ExactDeduplicator {
    /// Create a new exact deduplicator
    pub fn new(duplicate_type: DuplicateType) -> Self {
        Self {
            seen_keys: AHashSet::new(),
            duplicate_type,
            stats: DedupStats::default(),
        }
    }

    /// Create a new exact deduplicator with a pre-sized key store
    pub fn with_capacity(duplicate_type: DuplicateType, capacity: usize) -> Self {
        Self {
            seen_keys: AHashSet::with_capacity(capacity),
            duplicate_type,
            stats: DedupStats::default(),
        }
    }

    /// Check if a record is a duplicate of one seen earlier.
    ///
    /// The first record bearing a key claims it; every later record
    /// with the same key returns `true`. A key is inserted at most once.
    pub fn is_duplicate(&mut self, record: &SeqRecord) -> bool {
        self.stats.total_seen += 1;

        let key = self.duplicate_type.compute_key(record);
        if self.seen_keys.contains(key.as_ref()) {
            self.stats.duplicates_found += 1;
            true
        } else {
            self.seen_keys.insert(key.into_owned());
            self.stats.unique_count += 1;
            false
        }
    }

    /// Get current statistics
    pub fn stats(&self) -> &DedupStats {
        &self.stats
    }

    /// Get the number of distinct keys stored
    pub fn unique_count(&self) -> usize {
        self.seen_keys.len()
    }

    /// Clear all seen keys and reset statistics
    pub fn clear(&mut self) {
        self.seen_keys.clear();
        self.stats = DedupStats::default();
    }
}

impl Deduplicator for ExactDeduplicator {
    fn process(
        &mut self,
        source: &mut dyn RecordSource,
        sink: &mut dyn RecordSink,
    ) -> Result<DedupStats> {
        info!(
            "Starting exact deduplication, rule {:?}",
            self.duplicate_type
        );

        while let Some(result) = source.next() {
            let record = result?;
            if !self.is_duplicate(&record) {
                sink.write_record(&record)?;
            }
        }

        debug!(
            "Exact pass complete: {} kept, {} dropped",
            self.stats.unique_count, self.stats.duplicates_found
        );
        Ok(self.stats.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seqdedup_formats::MemorySource;

    fn run(records: Vec<SeqRecord>, duplicate_type: DuplicateType) -> Vec<SeqRecord> {
        let mut source = MemorySource::new(records);
        let mut kept: Vec<SeqRecord> = Vec::new();
        let mut dedup = ExactDeduplicator::new(duplicate_type);
        dedup.process(&mut source, &mut kept).unwrap();
        kept
    }

    #[test]
    fn test_id_match_keeps_first_per_id() {
        let records = vec![
            SeqRecord::new("a x", "AC"),
            SeqRecord::new("a y", "AC"),
            SeqRecord::new("b x", "AC"),
            SeqRecord::new("a x", "GG"),
        ];

        let kept = run(records, DuplicateType::IdExact);
        assert_eq!(
            kept,
            vec![SeqRecord::new("a x", "AC"), SeqRecord::new("b x", "AC")]
        );
    }

    #[test]
    fn test_sequence_match_keeps_first_per_sequence() {
        let records = vec![
            SeqRecord::new("a x", "AC"),
            SeqRecord::new("a y", "AC"),
            SeqRecord::new("b x", "AC"),
            SeqRecord::new("a x", "GG"),
        ];

        let kept = run(records, DuplicateType::SequenceExact);
        assert_eq!(
            kept,
            vec![SeqRecord::new("a x", "AC"), SeqRecord::new("a x", "GG")]
        );
    }

    #[test]
    fn test_header_match_ignores_sequence() {
        let mut dedup = ExactDeduplicator::new(DuplicateType::HeaderExact);

        assert!(!dedup.is_duplicate(&SeqRecord::new("seq_1 apple", "AC")));
        assert!(dedup.is_duplicate(&SeqRecord::new("seq_1 apple", "GG")));
        assert!(!dedup.is_duplicate(&SeqRecord::new("seq_1 pie", "AC")));

        assert_eq!(dedup.stats().unique_count, 2);
        assert_eq!(dedup.stats().duplicates_found, 1);
        assert_eq!(dedup.stats().total_seen, 3);
    }

    #[test]
    fn test_header_and_sequence_requires_both() {
        let mut dedup = ExactDeduplicator::new(DuplicateType::HeaderAndSequence);

        assert!(!dedup.is_duplicate(&SeqRecord::new("s1", "AC")));
        assert!(!dedup.is_duplicate(&SeqRecord::new("s1", "GG")));
        assert!(!dedup.is_duplicate(&SeqRecord::new("s2", "AC")));
        assert!(dedup.is_duplicate(&SeqRecord::new("s1", "AC")));
    }

    #[test]
    fn test_id_and_sequence_matches_across_descriptions() {
        let mut dedup = ExactDeduplicator::new(DuplicateType::IdAndSequence);

        assert!(!dedup.is_duplicate(&SeqRecord::new("s1 apple", "AC")));
        assert!(dedup.is_duplicate(&SeqRecord::new("s1 pie", "AC")));
        assert!(!dedup.is_duplicate(&SeqRecord::new("s1 apple", "GG")));
    }

    #[test]
    fn test_output_order_is_stable() {
        let records: Vec<SeqRecord> = (0..100)
            .map(|i| SeqRecord::new(format!("s{} d", i % 10), format!("SEQ{}", i % 10)))
            .collect();

        let kept = run(records.clone(), DuplicateType::HeaderExact);
        assert_eq!(kept, records[..10].to_vec());
    }

    #[test]
    fn test_idempotent_on_own_output() {
        let records = vec![
            SeqRecord::new("a x", "AC"),
            SeqRecord::new("a y", "AC"),
            SeqRecord::new("b x", "GG"),
            SeqRecord::new("a x", "AC"),
        ];

        let once = run(records, DuplicateType::HeaderExact);
        let twice = run(once.clone(), DuplicateType::HeaderExact);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_input() {
        let kept = run(Vec::new(), DuplicateType::HeaderExact);
        assert!(kept.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut dedup = ExactDeduplicator::new(DuplicateType::SequenceExact);
        dedup.is_duplicate(&SeqRecord::new("a", "AC"));
        assert_eq!(dedup.unique_count(), 1);

        dedup.clear();
        assert_eq!(dedup.unique_count(), 0);
        assert_eq!(dedup.stats().total_seen, 0);
        assert!(!dedup.is_duplicate(&SeqRecord::new("a", "AC")));
    }
}
