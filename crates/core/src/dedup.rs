//! Deduplication strategy interface

use crate::Result;
use seqdedup_formats::{RecordSink, RecordSource};

/// Statistics for deduplication operations
#[derive(Debug, Clone, Default)]
pub struct DedupStats {
    /// Number of records scanned in the deciding pass
    pub total_seen: usize,
    /// Number of duplicates dropped
    pub duplicates_found: usize,
    /// Number of unique records kept
    pub unique_count: usize,
}

impl DedupStats {
    /// Get the deduplication rate as a percentage
    pub fn dedup_rate(&self) -> f64 {
        if self.total_seen == 0 {
            0.0
        } else {
            (self.duplicates_found as f64 / self.total_seen as f64) * 100.0
        }
    }
}

/// A deduplication strategy.
///
/// Streams records from the source and writes the first occurrence of
/// each equivalence class to the sink, in input order. Implementations
/// are selected at configuration time; the per-record iteration lives
/// here so callers pick a strategy and call `process` once.
pub trait Deduplicator {
    /// Run the full deduplication over the source.
    fn process(
        &mut self,
        source: &mut dyn RecordSource,
        sink: &mut dyn RecordSink,
    ) -> Result<DedupStats>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedup_rate_calculation() {
        let stats = DedupStats {
            total_seen: 3,
            duplicates_found: 1,
            unique_count: 2,
        };
        assert!((stats.dedup_rate() - 33.333333333333336).abs() < 0.0001);
    }

    #[test]
    fn test_dedup_rate_empty() {
        let stats = DedupStats::default();
        assert_eq!(stats.dedup_rate(), 0.0);
    }
}
