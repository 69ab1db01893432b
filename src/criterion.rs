use serde::{Deserialize, Serialize};

/// Optimization objective for a graph build: what a segment's weight
/// measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Criterion {
    Duration,
    Price,
    Blended,
}

impl Criterion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Criterion::Duration => "duration",
            Criterion::Price => "price",
            Criterion::Blended => "blended",
        }
    }
}

impl Default for Criterion {
    fn default() -> Self {
        Criterion::Duration
    }
}

impl From<&str> for Criterion {
    fn from(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "price" => Criterion::Price,
            "blended" | "both" => Criterion::Blended,
            _ => Criterion::Duration, // Default to duration
        }
    }
}

impl From<String> for Criterion {
    fn from(value: String) -> Self {
        Criterion::from(value.as_str())
    }
}
