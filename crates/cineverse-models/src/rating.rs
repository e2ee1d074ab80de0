use serde::{Deserialize, Serialize};

/// One `{source, value}` pair from the detail lookup, e.g. ("Rotten Tomatoes", "91%").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RatingPair {
    pub source: String,
    pub value: String,
}

impl RatingPair {
    pub fn new(source: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            value: value.into(),
        }
    }
}
