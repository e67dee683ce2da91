//! JSON-lines dataset writer and reader.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use sha2::{Digest, Sha256};
use tracing::{debug, info};

use reviewdomains_core::{Error, LabeledRecord, Result, Sentiment};

use crate::types::{default_features, DatasetInfo, LabelCounts, DATA_FILE, INFO_FILE};

/// Persistence seam for category datasets.
pub trait DatasetWriter: Send + Sync {
    /// Save `records` into the directory `dir`.
    ///
    /// Saving an empty collection is a no-op and returns `None`.
    fn save(&self, records: &[LabeledRecord], dir: &Path) -> Result<Option<DatasetInfo>>;
}

/// Writes `data.jsonl` plus a `dataset_info.json` manifest.
#[derive(Debug, Clone, Default)]
pub struct JsonlDatasetWriter;

impl JsonlDatasetWriter {
    pub fn new() -> Self {
        Self
    }
}

impl DatasetWriter for JsonlDatasetWriter {
    fn save(&self, records: &[LabeledRecord], dir: &Path) -> Result<Option<DatasetInfo>> {
        if records.is_empty() {
            debug!("Nothing to save for {}", dir.display());
            return Ok(None);
        }

        std::fs::create_dir_all(dir)?;

        let mut hasher = Sha256::new();
        let mut counts = LabelCounts::default();
        let mut out = BufWriter::new(File::create(dir.join(DATA_FILE))?);

        for record in records {
            let mut line = serde_json::to_vec(record)?;
            line.push(b'\n');
            hasher.update(&line);
            out.write_all(&line)?;

            match record.label {
                Sentiment::Negative => counts.negative += 1,
                Sentiment::Positive => counts.positive += 1,
            }
        }
        out.flush()?;

        let dataset_info = DatasetInfo {
            num_rows: records.len(),
            features: default_features(),
            label_counts: counts,
            sha256: hex::encode(hasher.finalize()),
            created_at: chrono::Utc::now().to_rfc3339(),
        };
        let json = serde_json::to_string_pretty(&dataset_info)?;
        std::fs::write(dir.join(INFO_FILE), json)?;

        info!(
            "Saved {} rows to {} (neg={}, pos={})",
            dataset_info.num_rows,
            dir.display(),
            counts.negative,
            counts.positive
        );
        Ok(Some(dataset_info))
    }
}

/// Read a dataset saved by [`JsonlDatasetWriter`].
pub fn load_dataset(dir: &Path) -> Result<Vec<LabeledRecord>> {
    let path = dir.join(DATA_FILE);
    let reader = BufReader::new(File::open(&path)?);
    let mut records = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        let record = serde_json::from_str(&line).map_err(|source| Error::Parse {
            path: path.clone(),
            line: idx + 1,
            source,
        })?;
        records.push(record);
    }

    Ok(records)
}

/// Read the manifest of a saved dataset.
pub fn read_info(dir: &Path) -> Result<DatasetInfo> {
    let content = std::fs::read_to_string(dir.join(INFO_FILE))?;
    Ok(serde_json::from_str(&content)?)
}
