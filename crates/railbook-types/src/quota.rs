//! Booking quota definitions.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::ValidationError;

/// Reservation quota a ticket was booked under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Quota {
    /// General quota.
    #[default]
    General,
    /// Ladies quota.
    Ladies,
    /// Senior citizen quota.
    SeniorCitizen,
    /// Tatkal (short-notice) quota.
    Tatkal,
}

impl Quota {
    /// Returns the quota as it appears on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::General => "GENERAL",
            Self::Ladies => "LADIES",
            Self::SeniorCitizen => "SENIOR_CITIZEN",
            Self::Tatkal => "TATKAL",
        }
    }

    /// Returns the ordinal rank of the quota, starting at 1 for general.
    #[must_use]
    pub const fn rank(&self) -> u8 {
        match self {
            Self::General => 1,
            Self::Ladies => 2,
            Self::SeniorCitizen => 3,
            Self::Tatkal => 4,
        }
    }

    /// Looks up a quota by its exact name, returning `None` for unknown names.
    #[must_use]
    pub fn lookup(name: &str) -> Option<Self> {
        name.parse().ok()
    }
}

impl std::fmt::Display for Quota {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Quota {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GENERAL" => Ok(Self::General),
            "LADIES" => Ok(Self::Ladies),
            "SENIOR_CITIZEN" => Ok(Self::SeniorCitizen),
            "TATKAL" => Ok(Self::Tatkal),
            _ => Err(ValidationError::Quota(s.to_string())),
        }
    }
}
