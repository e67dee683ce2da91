//! Dataset manifest types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Data file inside a dataset directory.
pub const DATA_FILE: &str = "data.jsonl";
/// Manifest file inside a dataset directory.
pub const INFO_FILE: &str = "dataset_info.json";

/// Label distribution of a saved dataset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelCounts {
    pub negative: usize,
    pub positive: usize,
}

/// Manifest written next to every dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetInfo {
    pub num_rows: usize,
    /// Column name → value type.
    pub features: BTreeMap<String, String>,
    pub label_counts: LabelCounts,
    /// SHA-256 of `data.jsonl`, hex encoded.
    pub sha256: String,
    /// RFC 3339 timestamp.
    pub created_at: String,
}

/// Column schema shared by every dataset.
pub fn default_features() -> BTreeMap<String, String> {
    [
        ("text", "string"),
        ("category", "string"),
        ("label", "class_label(0=negative,1=positive)"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}
