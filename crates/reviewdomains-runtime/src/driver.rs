//! Per-category pipeline driver.

use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;
use std::sync::Arc;

use rayon::prelude::*;
use tracing::{error, info, warn};

use reviewdomains_core::{BusinessRecord, HighLevelCategory, LabeledRecord, Result, ReviewRecord};
use reviewdomains_ingest::{binarize, filter_extreme, normalize};
use reviewdomains_partition::{dedupe, select, CategoryIndex};
use reviewdomains_store::DatasetWriter;

use crate::types::*;

/// Builds one labeled dataset per high-level category.
pub struct PipelineDriver {
    writer: Arc<dyn DatasetWriter>,
    output_root: PathBuf,
    categories: Vec<HighLevelCategory>,
    jobs: usize,
}

impl PipelineDriver {
    /// Driver over every high-level category, run sequentially.
    pub fn new(writer: Arc<dyn DatasetWriter>, output_root: impl Into<PathBuf>) -> Self {
        Self {
            writer,
            output_root: output_root.into(),
            categories: HighLevelCategory::ALL.to_vec(),
            jobs: 1,
        }
    }

    /// Process up to `jobs` categories at once.
    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs.max(1);
        self
    }

    /// Restrict the run to a subset of categories (for testing).
    pub fn with_categories(mut self, categories: &[HighLevelCategory]) -> Self {
        self.categories = categories.to_vec();
        self
    }

    /// Run every category. Per-category failures are recorded in the report,
    /// never propagated.
    pub fn run(&self, businesses: &[BusinessRecord], reviews: &[ReviewRecord]) -> RunReport {
        let start = std::time::Instant::now();
        let index = CategoryIndex::build(businesses, &self.categories);

        info!(
            "Starting pipeline: {} businesses, {} reviews, {}/{} categories present, jobs={}",
            businesses.len(),
            reviews.len(),
            index.len(),
            self.categories.len(),
            self.jobs
        );

        let categories = self.run_categories(&index, reviews);

        let report = RunReport {
            businesses: businesses.len(),
            reviews: reviews.len(),
            categories,
            duration_ms: start.elapsed().as_millis() as u64,
        };

        info!(
            "Pipeline complete: written={}, failed={}, rows={}, duration={}ms",
            report.written().count(),
            report.failed().count(),
            report.total_rows(),
            report.duration_ms
        );

        report
    }

    fn run_categories(
        &self,
        index: &CategoryIndex,
        reviews: &[ReviewRecord],
    ) -> Vec<CategoryReport> {
        if self.jobs > 1 {
            match rayon::ThreadPoolBuilder::new().num_threads(self.jobs).build() {
                Ok(pool) => {
                    return pool.install(|| {
                        self.categories
                            .par_iter()
                            .map(|&c| self.run_isolated(c, index, reviews))
                            .collect()
                    });
                }
                Err(e) => warn!("Failed to build worker pool, running sequentially: {}", e),
            }
        }

        self.categories
            .iter()
            .map(|&c| self.run_isolated(c, index, reviews))
            .collect()
    }

    /// Run one category, converting errors and panics into a `Failed` outcome.
    fn run_isolated(
        &self,
        category: HighLevelCategory,
        index: &CategoryIndex,
        reviews: &[ReviewRecord],
    ) -> CategoryReport {
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            self.run_category(category, index, reviews)
        }));

        let outcome = match result {
            Ok(Ok(outcome)) => outcome,
            Ok(Err(e)) => {
                error!("Category {} failed: {}", category, e);
                CategoryOutcome::Failed {
                    error: e.to_string(),
                }
            }
            Err(payload) => {
                let msg = panic_message(payload.as_ref());
                error!("Category {} panicked: {}", category, msg);
                CategoryOutcome::Failed { error: msg }
            }
        };

        CategoryReport {
            category,
            slug: category.slug(),
            outcome,
        }
    }

    fn run_category(
        &self,
        category: HighLevelCategory,
        index: &CategoryIndex,
        reviews: &[ReviewRecord],
    ) -> Result<CategoryOutcome> {
        let Some(business_ids) = index.get(category) else {
            info!("{}: 0 businesses, skipping", category);
            return Ok(CategoryOutcome::NoBusinesses);
        };

        let selected = select(reviews, business_ids);
        if selected.is_empty() {
            info!(
                "{}: {} businesses but 0 reviews, skipping",
                category,
                format_count(business_ids.len())
            );
            return Ok(CategoryOutcome::NoReviews);
        }

        let slug = category.slug();
        info!("{} -> {} {}", category, slug, format_count(selected.len()));

        let labeled = label_category(selected, &slug);
        if labeled.records.is_empty() {
            info!("{}: no reviews left after filtering", category);
            return Ok(CategoryOutcome::Empty);
        }

        let path = self.output_root.join(category.as_str());
        let Some(saved) = self.writer.save(&labeled.records, &path)? else {
            return Ok(CategoryOutcome::Empty);
        };

        Ok(CategoryOutcome::Written {
            rows: saved.num_rows,
            selected: labeled.selected,
            duplicates_removed: labeled.duplicates_removed,
            five_star_removed: labeled.five_star_removed,
            negative: saved.label_counts.negative,
            positive: saved.label_counts.positive,
            path,
        })
    }
}

/// Labeled rows of one category plus what was dropped on the way.
#[derive(Debug)]
pub struct LabeledCategory {
    pub records: Vec<LabeledRecord>,
    pub selected: usize,
    pub duplicates_removed: usize,
    pub five_star_removed: usize,
}

/// Dedupe, drop five-star reviews, label, and normalize the selected reviews.
pub fn label_category(selected: Vec<&ReviewRecord>, slug: &str) -> LabeledCategory {
    let total = selected.len();
    let unique = dedupe(selected);
    let duplicates_removed = total - unique.len();

    let kept: Vec<&ReviewRecord> = unique
        .iter()
        .copied()
        .filter(|r| filter_extreme(r))
        .collect();
    let five_star_removed = unique.len() - kept.len();

    let records = kept
        .into_iter()
        .map(|r| LabeledRecord {
            text: normalize(&r.text),
            category: slug.to_string(),
            label: binarize(r),
        })
        .collect();

    LabeledCategory {
        records,
        selected: total,
        duplicates_removed,
        five_star_removed,
    }
}

/// Format with thousands separators, e.g. `1234567` → `1,234,567`.
pub fn format_count(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
