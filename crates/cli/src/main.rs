//! seqdedup CLI
//!
//! Removes duplicate records from FASTA files, keeping the first
//! occurrence of each record under the selected duplicate rule.

mod progress;

use anyhow::{bail, Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use seqdedup_core::{
    ApproxDeduplicator, Deduplicator, DuplicateType, ExactDeduplicator,
};
use seqdedup_formats::{open_fasta, FastaWriter};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use progress::ProgressSource;

/// Version and license banner shown by --version
const VERSION_BANNER: &str = concat!(env!("CARGO_PKG_VERSION"), " (License: MIT)");

const DUPLICATE_TYPE_HELP: &str = "\
Duplicate types:

  1  Whole header match (case sensitive). The entire header must match
     exactly; the sequence may or may not match.

  2  Header ID match (case sensitive). Everything up to the first
     whitespace must match, so 'seq_1 apple' matches 'seq_1 pie'.

  3  Whole sequence match (case sensitive). The entire sequence must
     match; the header may or may not match.

  4  Whole header + whole sequence (case sensitive). Both must match.

  5  Header ID + whole sequence (case sensitive). Both must match.

Whichever rule is chosen, only the first record of a duplicated set is
kept. By default full comparison keys are held in memory; --low-memory
holds a 64-bit digest per key instead and reads the input twice, at the
cost of a record being wrongly dropped if two distinct keys share a
digest.";

#[derive(Parser)]
#[command(name = "seqdedup")]
#[command(version = VERSION_BANNER)]
#[command(about = "Remove duplicate sequence records from FASTA files")]
#[command(after_long_help = DUPLICATE_TYPE_HELP)]
struct Cli {
    /// Input FASTA file (plain or gzip-compressed)
    #[arg(short, long)]
    infile: Option<PathBuf>,

    /// Output directory, created if missing
    #[arg(short, long, default_value = ".")]
    outdir: PathBuf,

    /// What counts as a duplicate, 1-5 (see --help)
    #[arg(short, long, default_value_t = 1)]
    duplicate_type: u8,

    /// Store fixed-width key digests instead of full keys (reads the input twice)
    #[arg(long)]
    low_memory: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Output statistics in JSON format
    #[arg(long)]
    json: bool,

    /// Generate shell completion scripts and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    completions: Option<Shell>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        generate_completions(shell);
        return Ok(());
    }

    // Setup logging
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_ansi(!cli.json) // Disable colors if JSON output
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    let Some(infile) = cli.infile else {
        bail!("--infile is a required argument");
    };
    if !infile.is_file() {
        bail!("{} does not exist", infile.display());
    }
    let duplicate_type = DuplicateType::from_flag(cli.duplicate_type)?;

    fs::create_dir_all(&cli.outdir).with_context(|| {
        format!("Failed to create output directory: {}", cli.outdir.display())
    })?;
    let outfile = no_duplicates_path(&infile, &cli.outdir);

    info!("Starting deduplication");
    info!("  Input:  {:?}", infile);
    info!("  Output: {:?}", outfile);
    info!("  Rule:   {:?}", duplicate_type);
    info!(
        "  Mode:   {}",
        if cli.low_memory {
            "low-memory (digests, two passes)"
        } else {
            "exact (full keys)"
        }
    );

    let mut source = ProgressSource::new(open_fasta(&infile)?);
    let mut sink = FastaWriter::create(&outfile)
        .with_context(|| format!("Failed to create output file: {}", outfile.display()))?;

    let mut engine: Box<dyn Deduplicator> = if cli.low_memory {
        Box::new(ApproxDeduplicator::new(duplicate_type))
    } else {
        Box::new(ExactDeduplicator::new(duplicate_type))
    };

    let stats = engine.process(&mut source, &mut sink)?;
    sink.finish()?;
    source.finish();

    if cli.json {
        let report = serde_json::json!({
            "input": infile.to_string_lossy().to_string(),
            "output": outfile.to_string_lossy().to_string(),
            "duplicate_type": cli.duplicate_type,
            "low_memory": cli.low_memory,
            "total_records": stats.total_seen,
            "unique_records": stats.unique_count,
            "duplicates_removed": stats.duplicates_found,
            "deduplication_rate": stats.dedup_rate(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        progress::print_summary_report(&infile, &outfile, &stats);
    }

    Ok(())
}

/// Derive the output path from the input file's base name.
///
/// Examples:
///   seqs.fasta → <outdir>/seqs.no_duplicates.fasta
///   seqs       → <outdir>/seqs.no_duplicates
fn no_duplicates_path(infile: &Path, outdir: &Path) -> PathBuf {
    let stem = infile.file_stem().unwrap_or_default().to_string_lossy();
    match infile.extension().and_then(|e| e.to_str()) {
        Some(ext) => outdir.join(format!("{}.no_duplicates.{}", stem, ext)),
        None => outdir.join(format!("{}.no_duplicates", stem)),
    }
}

fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, &mut std::io::stdout());
}
