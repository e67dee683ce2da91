//! reviewdomains partition — category → business-id index, review selection,
//! review-id deduplication.

pub mod dedup;
pub mod index;
pub mod select;

pub use dedup::dedupe;
pub use index::CategoryIndex;
pub use select::select;
