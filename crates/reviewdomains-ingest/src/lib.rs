//! reviewdomains ingest — NDJSON loading, review text normalization, star-rating labels.

pub mod labels;
pub mod loader;
pub mod normalize;

pub use labels::{binarize, binarize_stars, filter_extreme};
pub use loader::{load_businesses, load_reviews, read_ndjson};
pub use normalize::normalize;
