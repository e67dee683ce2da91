//! Newline-delimited JSON loading for business and review dumps.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, info};

use reviewdomains_core::{BusinessRecord, Error, Result, ReviewRecord};

/// Business row as it appears on disk; `categories` may be null or absent.
#[derive(Debug, Deserialize)]
struct RawBusiness {
    business_id: String,
    #[serde(default)]
    categories: Option<String>,
}

/// Read every non-blank line of `path` as a `T`.
///
/// All-or-nothing: the first malformed line aborts with its 1-based line number.
pub fn read_ndjson<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let reader = BufReader::new(File::open(path)?);
    let mut rows = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let row = serde_json::from_str(&line).map_err(|source| Error::Parse {
            path: path.to_path_buf(),
            line: idx + 1,
            source,
        })?;
        rows.push(row);
    }

    Ok(rows)
}

/// Load business records, dropping rows without categories.
pub fn load_businesses(path: &Path) -> Result<Vec<BusinessRecord>> {
    let raw: Vec<RawBusiness> = read_ndjson(path)?;
    let total = raw.len();

    let businesses: Vec<BusinessRecord> = raw
        .into_iter()
        .filter_map(|b| {
            b.categories.map(|categories| BusinessRecord {
                business_id: b.business_id,
                categories,
            })
        })
        .collect();

    debug!(
        "Excluded {} businesses without categories",
        total - businesses.len()
    );
    info!(
        "Loaded {} businesses from {}",
        businesses.len(),
        path.display()
    );
    Ok(businesses)
}

/// Load review records.
pub fn load_reviews(path: &Path) -> Result<Vec<ReviewRecord>> {
    let reviews: Vec<ReviewRecord> = read_ndjson(path)?;
    info!("Loaded {} reviews from {}", reviews.len(), path.display());
    Ok(reviews)
}
