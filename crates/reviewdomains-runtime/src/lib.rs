//! Pipeline runtime — runs the select → dedupe → label → normalize → save
//! sequence for every high-level category and reports per-category outcomes.
//!
//! A failing category is logged and recorded; the remaining categories still run.

pub mod driver;
pub mod types;

pub use driver::{format_count, label_category, LabeledCategory, PipelineDriver};
pub use types::*;
