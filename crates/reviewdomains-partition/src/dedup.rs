//! Review-id deduplication.

use std::borrow::Borrow;
use std::collections::HashSet;

use reviewdomains_core::ReviewRecord;

/// Drop every review whose `review_id` was already seen. The first occurrence
/// wins and survivors keep their relative order.
///
/// Works on owned records or on references into a shared review slice.
pub fn dedupe<R: Borrow<ReviewRecord>>(records: Vec<R>) -> Vec<R> {
    let mut seen: HashSet<String> = HashSet::with_capacity(records.len());
    records
        .into_iter()
        .filter(|r| seen.insert(r.borrow().review_id.clone()))
        .collect()
}
