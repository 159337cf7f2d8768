//! Reservation class definitions.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::ValidationError;

/// Reservation class of a ticket.
///
/// The discriminant order is the ordinal encoding used for feature
/// derivation. It is not ordered by comfort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TravelClass {
    /// Sleeper class.
    #[serde(rename = "SL")]
    Sleeper,
    /// AC three tier.
    #[serde(rename = "3A")]
    ThirdAc,
    /// AC two tier.
    #[serde(rename = "2A")]
    SecondAc,
    /// AC first class.
    #[serde(rename = "1A")]
    FirstAc,
    /// AC chair car.
    #[serde(rename = "CC")]
    ChairCar,
    /// Executive chair car.
    #[serde(rename = "EC")]
    ExecutiveChairCar,
    /// Second sitting.
    #[serde(rename = "2S")]
    SecondSitting,
}

impl TravelClass {
    /// Returns the class code as used on tickets (e.g., "3A").
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Sleeper => "SL",
            Self::ThirdAc => "3A",
            Self::SecondAc => "2A",
            Self::FirstAc => "1A",
            Self::ChairCar => "CC",
            Self::ExecutiveChairCar => "EC",
            Self::SecondSitting => "2S",
        }
    }

    /// Returns the ordinal rank of the class, starting at 1 for sleeper.
    #[must_use]
    pub const fn rank(&self) -> u8 {
        match self {
            Self::Sleeper => 1,
            Self::ThirdAc => 2,
            Self::SecondAc => 3,
            Self::FirstAc => 4,
            Self::ChairCar => 5,
            Self::ExecutiveChairCar => 6,
            Self::SecondSitting => 7,
        }
    }

    /// Returns a human-readable description of the class.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Sleeper => "Sleeper",
            Self::ThirdAc => "AC 3 Tier",
            Self::SecondAc => "AC 2 Tier",
            Self::FirstAc => "AC First Class",
            Self::ChairCar => "AC Chair Car",
            Self::ExecutiveChairCar => "Executive Chair Car",
            Self::SecondSitting => "Second Sitting",
        }
    }

    /// Looks up a class by its exact code, returning `None` for unknown codes.
    #[must_use]
    pub fn lookup(code: &str) -> Option<Self> {
        code.parse().ok()
    }

    /// Returns all reservation classes in rank order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Sleeper,
            Self::ThirdAc,
            Self::SecondAc,
            Self::FirstAc,
            Self::ChairCar,
            Self::ExecutiveChairCar,
            Self::SecondSitting,
        ]
    }
}

impl std::fmt::Display for TravelClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for TravelClass {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SL" => Ok(Self::Sleeper),
            "3A" => Ok(Self::ThirdAc),
            "2A" => Ok(Self::SecondAc),
            "1A" => Ok(Self::FirstAc),
            "CC" => Ok(Self::ChairCar),
            "EC" => Ok(Self::ExecutiveChairCar),
            "2S" => Ok(Self::SecondSitting),
            _ => Err(ValidationError::ClassCode(s.to_string())),
        }
    }
}
