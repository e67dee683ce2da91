//! reviewdomains store — per-category dataset persistence.
//!
//! Each dataset is a directory holding `data.jsonl` (one labeled record per
//! line) and `dataset_info.json` (row counts, features, checksum).

pub mod jsonl;
pub mod types;

pub use jsonl::{load_dataset, read_info, DatasetWriter, JsonlDatasetWriter};
pub use types::*;
