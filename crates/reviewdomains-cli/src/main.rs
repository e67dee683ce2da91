//! reviewdomains — builds per-category sentiment datasets from a business
//! review dump.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use reviewdomains_core::{OutputPaths, PipelineConfig};
use reviewdomains_ingest::{load_businesses, load_reviews};
use reviewdomains_runtime::{format_count, CategoryOutcome, PipelineDriver, RunReport};
use reviewdomains_store::JsonlDatasetWriter;

/// Multi-domain business review parser.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Newline-delimited JSON of businesses.
    #[arg(short = 'b', long = "business-file")]
    business_file: PathBuf,

    /// Newline-delimited JSON of reviews.
    #[arg(short = 'r', long = "reviews-file")]
    reviews_file: PathBuf,

    /// Directory to save datasets to.
    #[arg(short = 'o', long = "output-dir")]
    output_dir: PathBuf,

    /// Categories processed concurrently (default: $REVIEWDOMAINS_JOBS or 1).
    #[arg(short = 'j', long)]
    jobs: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut config =
        PipelineConfig::from_env(&args.business_file, &args.reviews_file, &args.output_dir);
    if let Some(jobs) = args.jobs {
        config = config.with_jobs(jobs);
    }
    config.validate()?;

    let paths = OutputPaths::new(&config.output_dir).with_context(|| {
        format!(
            "Failed to create output directory {}",
            config.output_dir.display()
        )
    })?;
    info!("Output directory: {}", paths.root.display());

    let businesses = load_businesses(&config.business_file).with_context(|| {
        format!(
            "Failed to load businesses from {}",
            config.business_file.display()
        )
    })?;
    let reviews = load_reviews(&config.reviews_file).with_context(|| {
        format!(
            "Failed to load reviews from {}",
            config.reviews_file.display()
        )
    })?;

    let driver = PipelineDriver::new(Arc::new(JsonlDatasetWriter::new()), &paths.root)
        .with_jobs(config.jobs);
    let report = driver.run(&businesses, &reviews);

    let json = serde_json::to_string_pretty(&report)?;
    std::fs::write(&paths.report_file, json).with_context(|| {
        format!("Failed to write {}", paths.report_file.display())
    })?;

    print_summary(&report);
    Ok(())
}

fn print_summary(report: &RunReport) {
    println!();
    println!(
        "Processed {} reviews across {} businesses in {}ms",
        format_count(report.reviews),
        format_count(report.businesses),
        report.duration_ms
    );
    println!();

    for entry in &report.categories {
        match &entry.outcome {
            CategoryOutcome::Written {
                rows,
                negative,
                positive,
                ..
            } => println!(
                "  {:<30} {:>12} rows  (neg={}, pos={})",
                entry.category.as_str(),
                format_count(*rows),
                format_count(*negative),
                format_count(*positive)
            ),
            CategoryOutcome::NoBusinesses => {
                println!("  {:<30} skipped (no businesses)", entry.category.as_str())
            }
            CategoryOutcome::NoReviews => {
                println!("  {:<30} skipped (no reviews)", entry.category.as_str())
            }
            CategoryOutcome::Empty => println!(
                "  {:<30} skipped (nothing left after filtering)",
                entry.category.as_str()
            ),
            CategoryOutcome::Failed { error } => {
                println!("  {:<30} FAILED: {}", entry.category.as_str(), error)
            }
        }
    }

    let failed = report.failed().count();
    println!();
    if failed > 0 {
        println!("{} categories failed; see log for details", failed);
    } else {
        println!(
            "{} datasets written, {} rows total",
            report.written().count(),
            format_count(report.total_rows())
        );
    }
}
