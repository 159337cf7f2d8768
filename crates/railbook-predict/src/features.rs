//! Feature derivation.

use chrono::{Datelike, NaiveDate, Weekday};
use railbook_types::{PredictionRequest, Quota, TravelClass};
use serde::{Deserialize, Serialize};

/// Rank assigned to class codes outside the lookup table.
const DEFAULT_CLASS_RANK: u8 = 1;

/// Rank assigned to quotas outside the lookup table.
const DEFAULT_QUOTA_RANK: u8 = 1;

/// Normalized inputs derived from a [`PredictionRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Train number as an integer, if it is numeric.
    pub train_number: Option<u32>,
    /// The recognized class, if any.
    pub travel_class: Option<TravelClass>,
    /// Ordinal encoding of the class code.
    pub class_rank: u8,
    /// Signed days from the evaluation date to the journey date.
    pub days_to_journey: i64,
    /// Current waitlist position.
    pub waitlist_position: u32,
    /// Ordinal encoding of the quota.
    pub quota_rank: u8,
    /// Whether the journey falls on a Saturday or Sunday.
    pub is_weekend: bool,
    /// Journey month, 1 to 12.
    pub month: u32,
    /// Journey weekday, 0 for Monday through 6 for Sunday.
    pub day_of_week: u32,
}

impl FeatureVector {
    /// Derives features for `request` as seen on `evaluation_date`.
    ///
    /// Unknown class codes and quotas fall back to default ranks.
    #[must_use]
    pub fn derive(request: &PredictionRequest, evaluation_date: NaiveDate) -> Self {
        let journey_date = request.journey_date();
        let travel_class = request.travel_class();
        let weekday = journey_date.weekday();

        Self {
            train_number: request.train_number().parse().ok(),
            travel_class,
            class_rank: travel_class.map_or(DEFAULT_CLASS_RANK, |c| c.rank()),
            days_to_journey: (journey_date - evaluation_date).num_days(),
            waitlist_position: request.waitlist_position(),
            quota_rank: Quota::lookup(request.quota()).map_or(DEFAULT_QUOTA_RANK, |q| q.rank()),
            is_weekend: matches!(weekday, Weekday::Sat | Weekday::Sun),
            month: journey_date.month(),
            day_of_week: weekday.num_days_from_monday(),
        }
    }
}
