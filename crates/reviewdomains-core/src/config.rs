//! Run configuration and output directory management.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Environment variable overriding the default worker count.
pub const JOBS_ENV: &str = "REVIEWDOMAINS_JOBS";

/// Paths under the output directory.
#[derive(Debug, Clone)]
pub struct OutputPaths {
    /// Root output directory.
    pub root: PathBuf,
    /// Run summary (`<root>/run_report.json`).
    pub report_file: PathBuf,
}

impl OutputPaths {
    /// Create output paths from a root directory. Creates the root if needed.
    pub fn new(root: impl AsRef<Path>) -> std::io::Result<Self> {
        let root = root.as_ref().to_path_buf();
        std::fs::create_dir_all(&root)?;
        Ok(Self {
            report_file: root.join("run_report.json"),
            root,
        })
    }
}

/// Top-level configuration for one pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Newline-delimited business JSON.
    pub business_file: PathBuf,
    /// Newline-delimited review JSON.
    pub reviews_file: PathBuf,
    /// Directory receiving one dataset per category.
    pub output_dir: PathBuf,
    /// Number of categories processed concurrently (1 = sequential).
    pub jobs: usize,
}

impl PipelineConfig {
    pub fn new(
        business_file: impl Into<PathBuf>,
        reviews_file: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            business_file: business_file.into(),
            reviews_file: reviews_file.into(),
            output_dir: output_dir.into(),
            jobs: 1,
        }
    }

    /// Create configuration, taking the worker count from `REVIEWDOMAINS_JOBS`
    /// when set and parseable.
    pub fn from_env(
        business_file: impl Into<PathBuf>,
        reviews_file: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        let jobs = std::env::var(JOBS_ENV)
            .ok()
            .and_then(|j| j.parse().ok())
            .unwrap_or(1);
        Self::new(business_file, reviews_file, output_dir).with_jobs(jobs)
    }

    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs.max(1);
        self
    }

    /// Check that both input files exist before any work starts.
    pub fn validate(&self) -> Result<()> {
        for (what, path) in [
            ("business file", &self.business_file),
            ("reviews file", &self.reviews_file),
        ] {
            if !path.is_file() {
                return Err(Error::Config(format!(
                    "{} not found: {}",
                    what,
                    path.display()
                )));
            }
        }
        Ok(())
    }
}
