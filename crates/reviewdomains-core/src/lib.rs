//! reviewdomains core — category enumeration, record types, configuration, errors.

pub mod category;
pub mod config;
pub mod error;
pub mod types;

pub use category::{category_slug, HighLevelCategory};
pub use config::{OutputPaths, PipelineConfig};
pub use error::{Error, Result};
pub use types::{BusinessRecord, LabeledRecord, ReviewRecord, Sentiment};
