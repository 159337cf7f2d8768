//! Probability bands.

use serde::{Deserialize, Serialize};

/// Human-readable band of a confirmation probability.
///
/// Variants are declared from lowest to highest so the derived ordering
/// follows the probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ProbabilityCategory {
    /// Below 0.2.
    #[serde(rename = "Very Low")]
    VeryLow,
    /// From 0.2 up to 0.4.
    #[serde(rename = "Low")]
    Low,
    /// From 0.4 up to 0.6.
    #[serde(rename = "Medium")]
    Medium,
    /// From 0.6 up to 0.8.
    #[serde(rename = "High")]
    High,
    /// 0.8 and above.
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl ProbabilityCategory {
    /// Maps a probability to its band.
    ///
    /// Each band includes its lower bound.
    #[must_use]
    pub fn from_probability(probability: f64) -> Self {
        if probability >= 0.8 {
            Self::VeryHigh
        } else if probability >= 0.6 {
            Self::High
        } else if probability >= 0.4 {
            Self::Medium
        } else if probability >= 0.2 {
            Self::Low
        } else {
            Self::VeryLow
        }
    }

    /// Returns the category label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::VeryLow => "Very Low",
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::VeryHigh => "Very High",
        }
    }
}

impl std::fmt::Display for ProbabilityCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
