//! Run report types.

use std::path::PathBuf;

use serde::Serialize;

use reviewdomains_core::HighLevelCategory;

/// What happened to one category during a run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CategoryOutcome {
    /// Dataset persisted.
    Written {
        rows: usize,
        selected: usize,
        duplicates_removed: usize,
        five_star_removed: usize,
        negative: usize,
        positive: usize,
        path: PathBuf,
    },
    /// No business carries this category.
    NoBusinesses,
    /// Businesses exist but none has a review.
    NoReviews,
    /// Every selected review was filtered out.
    Empty,
    /// Processing failed; other categories were unaffected.
    Failed { error: String },
}

impl CategoryOutcome {
    pub fn is_written(&self) -> bool {
        matches!(self, Self::Written { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Per-category entry of the run report.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryReport {
    pub category: HighLevelCategory,
    pub slug: String,
    #[serde(flatten)]
    pub outcome: CategoryOutcome,
}

/// Summary of a full pipeline run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunReport {
    pub businesses: usize,
    pub reviews: usize,
    pub categories: Vec<CategoryReport>,
    pub duration_ms: u64,
}

impl RunReport {
    pub fn written(&self) -> impl Iterator<Item = &CategoryReport> {
        self.categories.iter().filter(|c| c.outcome.is_written())
    }

    pub fn failed(&self) -> impl Iterator<Item = &CategoryReport> {
        self.categories.iter().filter(|c| c.outcome.is_failed())
    }

    pub fn outcome(&self, category: HighLevelCategory) -> Option<&CategoryOutcome> {
        self.categories
            .iter()
            .find(|c| c.category == category)
            .map(|c| &c.outcome)
    }

    /// Total rows persisted across all categories.
    pub fn total_rows(&self) -> usize {
        self.categories
            .iter()
            .map(|c| match c.outcome {
                CategoryOutcome::Written { rows, .. } => rows,
                _ => 0,
            })
            .sum()
    }
}
