use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use simscan::engine::{calculate_similarity, SimilarityReport};
use simscan::matcher::AlgorithmKind;
use simscan::reader::load_document;
use simscan::report::RunStats;

#[derive(Parser, Debug)]
#[command(name = "simscan")]
#[command(about = "Sentence-level exact-overlap detector with comparative algorithm timing")]
#[command(version)]
struct Args {
    /// Suspect document (plain UTF-8 text)
    suspect: PathBuf,

    /// Reference document (plain UTF-8 text)
    reference: PathBuf,

    /// Run a single algorithm instead of both
    #[arg(long, value_enum)]
    algorithm: Option<AlgorithmKind>,

    /// Write comparative run stats as JSON to this path
    #[arg(long)]
    stats_out: Option<PathBuf>,

    /// Suppress the flagged-sentence listing
    #[arg(long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .json()
        .init();

    let args = Args::parse();
    info!(?args, "Parsed CLI arguments");

    let (suspect, reference) = tokio::try_join!(
        load_document(&args.suspect),
        load_document(&args.reference),
    )?;
    info!(
        suspect_bytes = suspect.len(),
        reference_bytes = reference.len(),
        "Documents loaded"
    );

    let algorithms = match args.algorithm {
        Some(kind) => vec![kind],
        None => vec![AlgorithmKind::PrefixFunction, AlgorithmKind::LastOccurrence],
    };

    // Runs stay sequential so each elapsed measurement is taken in
    // isolation; concurrent runs would skew the timing comparison.
    let mut runs: Vec<(AlgorithmKind, SimilarityReport)> = Vec::new();
    for algorithm in algorithms {
        info!(algorithm = algorithm.label(), "Starting similarity pass");
        let report = calculate_similarity(&suspect, &reference, algorithm);
        info!(
            algorithm = algorithm.label(),
            percentage = report.percentage,
            elapsed_seconds = report.elapsed_seconds,
            matches = report.matches.len(),
            "Similarity pass complete"
        );
        runs.push((algorithm, report));
    }

    let primary = &runs[0].1;

    println!("simscan v{} - Similarity analysis complete", env!("CARGO_PKG_VERSION"));
    println!(
        "Similarity: {:.2}% ({})",
        primary.percentage,
        classify(primary.percentage)
    );
    println!("Flagged sentences: {}", primary.matches.len());

    println!();
    println!("Algorithm timing:");
    for (algorithm, report) in &runs {
        println!("  {:<16} {:.6}s", algorithm.label(), report.elapsed_seconds);
    }

    let stats = RunStats::from_runs(&runs);
    if let Some(agreement) = stats.agreement {
        if agreement {
            println!("  both algorithms produced identical results");
        } else {
            println!("  WARNING: algorithms disagree on the match set");
        }
    }
    if let Some(fastest) = stats.fastest {
        println!("  fastest: {fastest}");
    }

    if !args.quiet && !primary.matches.is_empty() {
        println!();
        println!("Flagged sentences:");
        for record in &primary.matches {
            println!("  [{}] {}", record.status, record.sentence);
        }
    }

    if let Some(stats_path) = args.stats_out {
        let json = serde_json::to_string_pretty(&stats)?;
        tokio::fs::write(&stats_path, json).await?;
        info!("Run stats written to: {}", stats_path.display());
        println!();
        println!("Run stats written to: {}", stats_path.display());
    }

    Ok(())
}

/// Presentation-side classification of the similarity percentage.
fn classify(percentage: f64) -> &'static str {
    if percentage > 70.0 {
        "heavy overlap"
    } else if percentage > 30.0 {
        "light overlap"
    } else {
        "clean"
    }
}
