//! Star-rating filtering and binary sentiment labels.
//!
//! Five-star reviews are dropped outright; the rest map {1, 2} → negative and
//! {3, 4} → positive. Both rules are fixed, not configurable.

use reviewdomains_core::{ReviewRecord, Sentiment};

/// Ratings at or above this value are excluded from every dataset.
pub const EXCLUDED_STARS: f64 = 5.0;

/// Highest rating still labeled negative.
pub const NEGATIVE_MAX_STARS: f64 = 2.0;

/// Keep the review iff it is not a five-star rating.
pub fn filter_extreme(review: &ReviewRecord) -> bool {
    review.stars < EXCLUDED_STARS
}

pub fn binarize(review: &ReviewRecord) -> Sentiment {
    binarize_stars(review.stars)
}

pub fn binarize_stars(stars: f64) -> Sentiment {
    if stars <= NEGATIVE_MAX_STARS {
        Sentiment::Negative
    } else {
        Sentiment::Positive
    }
}
