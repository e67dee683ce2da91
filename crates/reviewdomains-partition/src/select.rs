//! Review selection by business id.

use std::collections::HashSet;

use reviewdomains_core::ReviewRecord;

/// Reviews whose `business_id` is in `business_ids`, in their original order.
///
/// Borrows from `reviews` so the shared review set is never copied per category.
pub fn select<'a>(
    reviews: &'a [ReviewRecord],
    business_ids: &HashSet<String>,
) -> Vec<&'a ReviewRecord> {
    reviews
        .iter()
        .filter(|r| business_ids.contains(&r.business_id))
        .collect()
}
