//! Progress reporting and visualization for CLI

use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};
use seqdedup_core::DedupStats;
use seqdedup_formats::{RecordSource, Result, SeqRecord};

/// How often the bar position is refreshed, in records
const UPDATE_EVERY: usize = 1000;

/// Progress bar over the input stream
pub struct ProgressReporter {
    bar: ProgressBar,
    mode: ProgressMode,
}

/// Progress tracking mode
enum ProgressMode {
    /// Track progress by bytes processed
    Bytes,
    /// Track progress by records processed (input size unknown)
    Records,
}

impl ProgressReporter {
    /// Create a progress reporter sized to the input if known.
    ///
    /// Compressed input has no known size; records are counted instead.
    pub fn new(total_bytes: Option<u64>) -> Self {
        match total_bytes {
            Some(total) => {
                let bar = ProgressBar::new(total);
                bar.set_style(
                    ProgressStyle::default_bar()
                        .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({bytes_per_sec}) {msg}")
                        .unwrap()
                        .progress_chars("█▓▒░-"),
                );
                Self {
                    bar,
                    mode: ProgressMode::Bytes,
                }
            }
            None => {
                let bar = ProgressBar::new_spinner();
                bar.set_style(
                    ProgressStyle::default_spinner()
                        .template("[{elapsed_precise}] {spinner} {human_pos} records {msg}")
                        .unwrap(),
                );
                Self {
                    bar,
                    mode: ProgressMode::Records,
                }
            }
        }
    }

    /// Update the bar with current reader position
    pub fn update(&self, bytes: u64, records: usize) {
        match self.mode {
            ProgressMode::Bytes => self.bar.set_position(bytes),
            ProgressMode::Records => self.bar.set_position(records as u64),
        }
    }

    /// Reset the bar for another traversal of the input
    pub fn next_pass(&self) {
        self.bar.reset();
        self.bar.set_message("second pass");
    }

    /// Finish progress reporting
    pub fn finish(&self) {
        self.bar.finish_with_message("Complete!");
    }
}

/// Record source wrapper that feeds the progress bar as records stream
/// through the engine.
pub struct ProgressSource {
    inner: Box<dyn RecordSource>,
    reporter: ProgressReporter,
}

impl ProgressSource {
    /// Wrap a record source with progress reporting.
    pub fn new(inner: Box<dyn RecordSource>) -> Self {
        let reporter = ProgressReporter::new(inner.total_bytes());
        Self { inner, reporter }
    }

    /// Finish the underlying progress bar.
    pub fn finish(&self) {
        self.reporter.finish();
    }
}

impl Iterator for ProgressSource {
    type Item = Result<SeqRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.inner.next();
        let records = self.inner.records_processed();
        if item.is_none() || records % UPDATE_EVERY == 0 {
            self.reporter
                .update(self.inner.bytes_processed(), records);
        }
        item
    }
}

impl RecordSource for ProgressSource {
    fn restart(&mut self) -> Result<()> {
        self.inner.restart()?;
        self.reporter.next_pass();
        Ok(())
    }

    fn total_bytes(&self) -> Option<u64> {
        self.inner.total_bytes()
    }

    fn bytes_processed(&self) -> u64 {
        self.inner.bytes_processed()
    }

    fn records_processed(&self) -> usize {
        self.inner.records_processed()
    }
}

/// Print a formatted summary report
pub fn print_summary_report(input: &Path, output: &Path, stats: &DedupStats) {
    let kept_rate = if stats.total_seen == 0 {
        100.0
    } else {
        (stats.unique_count as f64 / stats.total_seen as f64) * 100.0
    };

    println!("\n{}", "═".repeat(60));
    println!("Sequence Deduplication Complete");
    println!("{}", "═".repeat(60));
    println!("Input:              {}", input.display());
    println!("Output:             {}", output.display());
    println!("Total records:      {}", format_with_commas(stats.total_seen));

    if stats.duplicates_found > 0 {
        println!(
            "Duplicates removed: {} ({:.1}%)",
            format_with_commas(stats.duplicates_found),
            stats.dedup_rate()
        );
    }

    println!(
        "Final records:      {} ({:.1}%)",
        format_with_commas(stats.unique_count),
        kept_rate
    );

    println!("{}", "═".repeat(60));
}

/// Format number with thousand separators
fn format_with_commas(n: usize) -> String {
    n.to_string()
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(std::str::from_utf8)
        .collect::<std::result::Result<Vec<&str>, _>>()
        .unwrap()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use seqdedup_formats::MemorySource;

    #[test]
    fn test_format_with_commas() {
        assert_eq!(format_with_commas(42), "42");
        assert_eq!(format_with_commas(1234), "1,234");
        assert_eq!(format_with_commas(1234567), "1,234,567");
    }

    #[test]
    fn test_progress_source_passes_records_through() {
        let records = vec![SeqRecord::new("a", "AC"), SeqRecord::new("b", "GT")];
        let mut source = ProgressSource::new(Box::new(MemorySource::new(records.clone())));

        let streamed: Vec<_> = source.by_ref().collect::<Result<Vec<_>>>().unwrap();
        assert_eq!(streamed, records);
        assert_eq!(source.records_processed(), 2);

        source.restart().unwrap();
        assert_eq!(source.records_processed(), 0);
    }
}
