//! Record types flowing through the pipeline.

use serde::{Deserialize, Serialize};

/// A business row. Rows without categories never become a `BusinessRecord`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessRecord {
    pub business_id: String,
    /// Comma-separated category tags, e.g. `"Gyms, Active Life, Fitness & Instruction"`.
    pub categories: String,
}

/// A source review row. Fields the pipeline never reads (`user_id`, `useful`,
/// `funny`, `cool`, `date`) are ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewRecord {
    pub review_id: String,
    pub business_id: String,
    /// Star rating, 1 to 5.
    pub stars: f64,
    pub text: String,
}

/// Binary sentiment derived from a star rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Sentiment {
    Negative = 0,
    Positive = 1,
}

impl From<Sentiment> for u8 {
    fn from(s: Sentiment) -> u8 {
        s as u8
    }
}

impl TryFrom<u8> for Sentiment {
    type Error = String;

    fn try_from(v: u8) -> std::result::Result<Self, Self::Error> {
        match v {
            0 => Ok(Self::Negative),
            1 => Ok(Self::Positive),
            other => Err(format!("invalid sentiment label: {}", other)),
        }
    }
}

/// Output row of a category dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledRecord {
    pub text: String,
    pub category: String,
    pub label: Sentiment,
}
