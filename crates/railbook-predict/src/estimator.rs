//! Waitlist confirmation estimation logic.

use std::sync::OnceLock;

use chrono::{DateTime, Days, NaiveDate, Utc};
use railbook_types::{PredictionRequest, TravelClass};

use crate::category::ProbabilityCategory;
use crate::features::FeatureVector;
use crate::response::WaitlistPrediction;

/// Version string reported alongside every prediction.
///
/// Opaque compatibility value for API consumers; there is no model artifact
/// behind it.
pub const MODEL_VERSION: &str = "v2.0.0";

/// Probability before any adjustment.
const BASE_PROBABILITY: f64 = 0.7;

/// Probability lost per waitlist slot.
const POSITION_DECAY: f64 = 0.02;

/// Lower bound of the position factor.
const MIN_POSITION_FACTOR: f64 = 0.1;

/// Probability gained per day of lead time.
const LEAD_TIME_GAIN: f64 = 0.01;

/// Upper bound of the lead-time factor.
const MAX_LEAD_TIME_FACTOR: f64 = 1.2;

/// Multiplier applied to journeys on Saturday or Sunday.
const WEEKEND_FACTOR: f64 = 0.9;

/// Final probability clamp.
const MIN_PROBABILITY: f64 = 0.05;
const MAX_PROBABILITY: f64 = 0.95;

/// Half-width of the confidence interval.
const INTERVAL_MARGIN: f64 = 0.1;

/// Below this probability no confirmation date is estimated.
const MIN_DATED_PROBABILITY: f64 = 0.3;

/// Static estimator instance.
static ESTIMATOR: OnceLock<WaitlistEstimator> = OnceLock::new();

/// Returns the per-class multiplier. Classes without a dedicated factor,
/// and unknown codes, are neutral.
#[must_use]
pub const fn class_factor(class: Option<TravelClass>) -> f64 {
    match class {
        Some(TravelClass::Sleeper) => 1.1,
        Some(TravelClass::ThirdAc) => 0.9,
        Some(TravelClass::SecondAc) => 0.8,
        Some(TravelClass::FirstAc) => 0.7,
        _ => 1.0,
    }
}

/// The individual factors behind a confirmation probability.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    /// `max(0.1, 1 - position * 0.02)`.
    pub position_factor: f64,
    /// `min(1.2, 1 + days_to_journey * 0.01)`, not floored.
    pub lead_time_factor: f64,
    /// Per-class multiplier.
    pub class_factor: f64,
    /// 0.9 on weekends, 1.0 otherwise.
    pub weekend_factor: f64,
    /// Product of the base probability and all factors, before clamping.
    pub raw_probability: f64,
}

impl ScoreBreakdown {
    /// Scores a feature vector.
    #[must_use]
    pub fn score(features: &FeatureVector) -> Self {
        let position_factor =
            (1.0 - f64::from(features.waitlist_position) * POSITION_DECAY).max(MIN_POSITION_FACTOR);
        // A negative lead time shrinks the factor below 1.0 without bound;
        // past journeys are rejected at the request boundary.
        let lead_time_factor =
            (1.0 + features.days_to_journey as f64 * LEAD_TIME_GAIN).min(MAX_LEAD_TIME_FACTOR);
        let class_factor = class_factor(features.travel_class);
        let weekend_factor = if features.is_weekend {
            WEEKEND_FACTOR
        } else {
            1.0
        };

        let raw_probability =
            BASE_PROBABILITY * position_factor * lead_time_factor * class_factor * weekend_factor;

        Self {
            position_factor,
            lead_time_factor,
            class_factor,
            weekend_factor,
            raw_probability,
        }
    }

    /// Returns the raw probability clamped to `[0.05, 0.95]`.
    #[must_use]
    pub const fn probability(&self) -> f64 {
        self.raw_probability.clamp(MIN_PROBABILITY, MAX_PROBABILITY)
    }
}

/// Interval around a confirmation probability.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceInterval {
    /// Lower bound, at least 0.0.
    pub lower: f64,
    /// Upper bound, at most 1.0.
    pub upper: f64,
}

impl ConfidenceInterval {
    /// Builds the fixed-margin interval around `probability`.
    #[must_use]
    pub const fn around(probability: f64) -> Self {
        Self {
            lower: (probability - INTERVAL_MARGIN).max(0.0),
            upper: (probability + INTERVAL_MARGIN).min(1.0),
        }
    }

    /// Returns the width of the interval.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Returns true if `value` lies within the interval.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    /// Returns the bounds as `[lower, upper]`.
    #[must_use]
    pub const fn to_array(&self) -> [f64; 2] {
        [self.lower, self.upper]
    }
}

/// Outcome of a waitlist estimate.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionResult {
    /// Probability the ticket confirms, in `[0.05, 0.95]`.
    pub confirmation_probability: f64,
    /// Band of the probability.
    pub probability_category: ProbabilityCategory,
    /// Fixed-margin interval around the probability.
    pub confidence_interval: ConfidenceInterval,
    /// Date the ticket may confirm by, if one can be estimated.
    pub estimated_confirmation_date: Option<NaiveDate>,
}

/// Waitlist confirmation estimator.
#[derive(Debug, Clone)]
pub struct WaitlistEstimator {
    /// Version string reported with predictions.
    model_version: String,
}

impl WaitlistEstimator {
    /// Creates a new estimator reporting the given version string.
    #[must_use]
    pub fn new(model_version: impl Into<String>) -> Self {
        Self {
            model_version: model_version.into(),
        }
    }

    /// Returns the global estimator instance with default settings.
    #[must_use]
    pub fn global() -> &'static Self {
        ESTIMATOR.get_or_init(Self::default)
    }

    /// Returns the reported version string.
    #[must_use]
    pub fn model_version(&self) -> &str {
        &self.model_version
    }

    /// Derives the feature vector for a request.
    #[must_use]
    pub fn features(
        &self,
        request: &PredictionRequest,
        evaluation_date: NaiveDate,
    ) -> FeatureVector {
        FeatureVector::derive(request, evaluation_date)
    }

    /// Estimates confirmation for a request as seen on `evaluation_date`.
    ///
    /// The result depends only on the arguments.
    #[must_use]
    pub fn estimate(
        &self,
        request: &PredictionRequest,
        evaluation_date: NaiveDate,
    ) -> PredictionResult {
        tracing::info!(
            train = request.train_number(),
            class_code = request.class_code(),
            waitlist_pos = request.waitlist_position(),
            "Waitlist prediction request"
        );

        let features = self.features(request, evaluation_date);
        let score = ScoreBreakdown::score(&features);
        let probability = score.probability();

        tracing::debug!(
            days_to_journey = features.days_to_journey,
            position_factor = score.position_factor,
            lead_time_factor = score.lead_time_factor,
            class_factor = score.class_factor,
            weekend_factor = score.weekend_factor,
            raw_probability = score.raw_probability,
            probability,
            "Scored waitlist request"
        );

        PredictionResult {
            confirmation_probability: probability,
            probability_category: ProbabilityCategory::from_probability(probability),
            confidence_interval: ConfidenceInterval::around(probability),
            estimated_confirmation_date: Self::estimate_confirmation_date(
                request.journey_date(),
                probability,
                request.waitlist_position(),
                evaluation_date,
            ),
        }
    }

    /// Estimates a request and wraps the result in the JSON response shape.
    #[must_use]
    pub fn predict(
        &self,
        request: &PredictionRequest,
        evaluation_date: NaiveDate,
        timestamp: DateTime<Utc>,
    ) -> WaitlistPrediction {
        let result = self.estimate(request, evaluation_date);
        WaitlistPrediction::new(request, &result, &self.model_version, timestamp)
    }

    /// Estimates when a ticket may confirm.
    ///
    /// Returns `None` when `probability` is below 0.3, or when the estimate
    /// would fall before `evaluation_date`.
    #[must_use]
    pub fn estimate_confirmation_date(
        journey_date: NaiveDate,
        probability: f64,
        waitlist_position: u32,
        evaluation_date: NaiveDate,
    ) -> Option<NaiveDate> {
        if probability < MIN_DATED_PROBABILITY {
            return None;
        }

        let days_before = if probability > 0.8 {
            (waitlist_position / 2).min(15)
        } else if probability > 0.6 {
            (waitlist_position / 3).min(10)
        } else {
            (waitlist_position / 5).min(5)
        };

        journey_date
            .checked_sub_days(Days::new(u64::from(days_before)))
            .filter(|date| *date >= evaluation_date)
    }

    /// Formats a result as a human-readable summary.
    #[must_use]
    pub fn format_prediction(result: &PredictionResult) -> String {
        let estimated_date = result
            .estimated_confirmation_date
            .map_or_else(|| "not estimated".to_string(), |d| d.to_string());

        format!(
            "Confirmation: {} ({})\n\
             Interval: {} to {}\n\
             Expected by: {}",
            Self::format_probability(result.confirmation_probability),
            result.probability_category,
            Self::format_probability(result.confidence_interval.lower),
            Self::format_probability(result.confidence_interval.upper),
            estimated_date,
        )
    }

    /// Formats a probability as a percentage (e.g., "37.8%").
    #[must_use]
    pub fn format_probability(probability: f64) -> String {
        format!("{:.1}%", probability * 100.0)
    }
}

impl Default for WaitlistEstimator {
    fn default() -> Self {
        Self::new(MODEL_VERSION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    /// A Monday.
    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
    }

    fn in_days(days: i64) -> NaiveDate {
        today() + chrono::TimeDelta::days(days)
    }

    fn request(class: &str, days: i64, position: i64) -> PredictionRequest {
        PredictionRequest::from_parts("12951", class, in_days(days), position, "GENERAL").unwrap()
    }

    #[test]
    fn test_third_ac_month_ahead() {
        // 2026-04-01 is a Wednesday.
        let estimator = WaitlistEstimator::default();
        let result = estimator.estimate(&request("3A", 30, 25), today());

        assert_relative_eq!(result.confirmation_probability, 0.378, epsilon = 1e-12);
        assert_eq!(result.probability_category, ProbabilityCategory::Low);
        assert_relative_eq!(result.confidence_interval.width(), 0.2, epsilon = 1e-12);
        // Lowest tier: min(5, 25 / 5) days before the journey.
        assert_eq!(result.estimated_confirmation_date, Some(in_days(25)));
    }

    #[test]
    fn test_last_waitlist_slot_floors_position_factor() {
        let features = FeatureVector::derive(&request("SL", 30, 500), today());
        let score = ScoreBreakdown::score(&features);

        assert_relative_eq!(score.position_factor, 0.1);
        assert_relative_eq!(score.probability(), 0.0924, epsilon = 1e-12);
        assert!(score.probability() >= 0.05 && score.probability() <= 0.15);
    }

    #[test]
    fn test_front_of_queue_sleeper() {
        let estimator = WaitlistEstimator::default();
        let result = estimator.estimate(&request("SL", 60, 1), today());

        assert_relative_eq!(result.confirmation_probability, 0.90552, epsilon = 1e-12);
        assert_eq!(result.probability_category, ProbabilityCategory::VeryHigh);
        // Top tier: min(15, 1 / 2) = 0 days before.
        assert_eq!(result.estimated_confirmation_date, Some(in_days(60)));
    }

    #[test]
    fn test_probability_is_clamped() {
        let high = ScoreBreakdown {
            position_factor: 1.0,
            lead_time_factor: 1.2,
            class_factor: 1.2,
            weekend_factor: 1.0,
            raw_probability: 1.008,
        };
        assert_relative_eq!(high.probability(), 0.95);

        let features = FeatureVector::derive(&request("SL", -200, 5), today());
        let score = ScoreBreakdown::score(&features);
        assert!(score.raw_probability < 0.0);
        assert_relative_eq!(score.probability(), 0.05);
    }

    #[test]
    fn test_weekend_applies_fixed_multiplier() {
        // 2026-03-27 is a Friday, 2026-03-28 a Saturday. Both are far enough
        // out for the lead-time factor to sit at its cap.
        let friday = ScoreBreakdown::score(&FeatureVector::derive(&request("2A", 25, 10), today()));
        let saturday =
            ScoreBreakdown::score(&FeatureVector::derive(&request("2A", 26, 10), today()));

        assert_relative_eq!(friday.weekend_factor, 1.0);
        assert_relative_eq!(saturday.weekend_factor, 0.9);
        assert_relative_eq!(
            saturday.raw_probability,
            friday.raw_probability * 0.9,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_unknown_class_is_neutral() {
        let estimator = WaitlistEstimator::default();
        let result = estimator.estimate(&request("XX", 10, 5), today());

        assert_relative_eq!(result.confirmation_probability, 0.693, epsilon = 1e-12);
        let features = estimator.features(&request("XX", 10, 5), today());
        assert_relative_eq!(ScoreBreakdown::score(&features).class_factor, 1.0);
    }

    #[test]
    fn test_date_tiers() {
        let journey = in_days(30);

        // > 0.8: min(15, position / 2)
        assert_eq!(
            WaitlistEstimator::estimate_confirmation_date(journey, 0.85, 40, today()),
            Some(in_days(15))
        );
        // > 0.6: min(10, position / 3)
        assert_eq!(
            WaitlistEstimator::estimate_confirmation_date(journey, 0.7, 10, today()),
            Some(in_days(27))
        );
        // 0.8 itself falls into the middle tier.
        assert_eq!(
            WaitlistEstimator::estimate_confirmation_date(journey, 0.8, 60, today()),
            Some(in_days(20))
        );
        // otherwise: min(5, position / 5)
        assert_eq!(
            WaitlistEstimator::estimate_confirmation_date(journey, 0.5, 100, today()),
            Some(in_days(25))
        );
    }

    #[test]
    fn test_date_threshold_is_exclusive_below() {
        let journey = in_days(30);
        assert_eq!(
            WaitlistEstimator::estimate_confirmation_date(journey, 0.3, 10, today()),
            Some(in_days(28))
        );
        assert_eq!(
            WaitlistEstimator::estimate_confirmation_date(journey, 0.299, 10, today()),
            None
        );
    }

    #[test]
    fn test_date_never_in_the_past() {
        // Journey tomorrow, lowest tier wants 5 days of notice.
        let estimator = WaitlistEstimator::default();
        let result = estimator.estimate(&request("SL", 1, 30), today());
        assert!(result.confirmation_probability >= 0.3);
        assert_eq!(result.estimated_confirmation_date, None);

        // An estimate landing on the evaluation date itself is kept.
        let result = estimator.estimate(&request("1A", 0, 3), today());
        assert_eq!(result.estimated_confirmation_date, Some(today()));
    }

    #[test]
    fn test_predict_response() {
        let estimator = WaitlistEstimator::default();
        let timestamp = DateTime::parse_from_rfc3339("2026-03-02T10:30:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let prediction = estimator.predict(&request("CC", 30, 10), today(), timestamp);

        assert_eq!(prediction.ml_model_version, MODEL_VERSION);
        assert_eq!(prediction.current_waitlist_position, 10);
        assert_relative_eq!(prediction.confirmation_probability, 0.672, epsilon = 1e-12);
        assert_eq!(prediction.probability_category, ProbabilityCategory::High);
        assert_eq!(prediction.estimated_confirmation_date, Some(in_days(27)));
        assert_eq!(prediction.prediction_timestamp, timestamp);
    }

    #[test]
    fn test_format_prediction() {
        let estimator = WaitlistEstimator::default();
        let result = estimator.estimate(&request("3A", 30, 25), today());
        let text = WaitlistEstimator::format_prediction(&result);

        assert_eq!(
            text,
            "Confirmation: 37.8% (Low)\nInterval: 27.8% to 47.8%\nExpected by: 2026-03-27"
        );
        assert_eq!(WaitlistEstimator::format_probability(0.05), "5.0%");
    }

    #[test]
    fn test_global_estimator() {
        assert_eq!(WaitlistEstimator::global().model_version(), MODEL_VERSION);
        let custom = WaitlistEstimator::new("v2.0.0-canary");
        assert_eq!(custom.model_version(), "v2.0.0-canary");
    }

    fn class_code() -> impl Strategy<Value = &'static str> {
        prop::sample::select(vec!["SL", "3A", "2A", "1A", "CC", "EC", "2S", "XX"])
    }

    proptest! {
        #[test]
        fn probability_and_interval_bounds(
            class in class_code(),
            days in -400i64..400,
            position in 1i64..=500,
        ) {
            let result = WaitlistEstimator::default().estimate(&request(class, days, position), today());
            let p = result.confirmation_probability;
            let interval = result.confidence_interval;

            prop_assert!((0.05..=0.95).contains(&p));
            prop_assert!(interval.lower <= p && p <= interval.upper);
            prop_assert!(interval.lower >= 0.0 && interval.upper <= 1.0);
            prop_assert_eq!(
                result.probability_category,
                ProbabilityCategory::from_probability(p)
            );
        }

        #[test]
        fn later_position_never_helps(
            class in class_code(),
            days in 0i64..365,
            position in 1i64..500,
        ) {
            let estimator = WaitlistEstimator::default();
            let ahead = estimator.estimate(&request(class, days, position), today());
            let behind = estimator.estimate(&request(class, days, position + 1), today());
            prop_assert!(behind.confirmation_probability <= ahead.confirmation_probability);
        }

        #[test]
        fn estimated_date_rules(
            class in class_code(),
            days in -30i64..365,
            position in 1i64..=500,
        ) {
            let result = WaitlistEstimator::default().estimate(&request(class, days, position), today());
            if result.confirmation_probability < 0.3 {
                prop_assert_eq!(result.estimated_confirmation_date, None);
            }
            if let Some(date) = result.estimated_confirmation_date {
                prop_assert!(date >= today());
                prop_assert!(date <= in_days(days));
            }
        }

        #[test]
        fn estimate_is_idempotent(
            class in class_code(),
            days in 0i64..365,
            position in 1i64..=500,
        ) {
            let estimator = WaitlistEstimator::default();
            let req = request(class, days, position);
            let first = estimator.estimate(&req, today());
            let second = estimator.estimate(&req, today());
            prop_assert_eq!(
                first.confirmation_probability.to_bits(),
                second.confirmation_probability.to_bits()
            );
            prop_assert_eq!(first, second);
        }
    }
}
