//! JSON response for waitlist predictions.

use chrono::{DateTime, NaiveDate, Utc};
use railbook_types::{PredictionRequest, RailbookError};
use serde::{Deserialize, Serialize};

use crate::category::ProbabilityCategory;
use crate::estimator::PredictionResult;

/// Response body of a waitlist prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaitlistPrediction {
    /// Train number from the request.
    pub train_number: String,
    /// Class code from the request.
    pub class_code: String,
    /// Journey date from the request.
    pub journey_date: NaiveDate,
    /// Waitlist position from the request.
    pub current_waitlist_position: u32,
    /// Probability the ticket confirms.
    pub confirmation_probability: f64,
    /// Band of the probability.
    pub probability_category: ProbabilityCategory,
    /// Date the ticket may confirm by, or `null`.
    pub estimated_confirmation_date: Option<NaiveDate>,
    /// `[lower, upper]` bounds around the probability.
    pub confidence_interval: [f64; 2],
    /// Opaque version string of the estimator.
    pub ml_model_version: String,
    /// When the prediction was made.
    pub prediction_timestamp: DateTime<Utc>,
}

impl WaitlistPrediction {
    /// Assembles a response from a request and its estimate.
    #[must_use]
    pub fn new(
        request: &PredictionRequest,
        result: &PredictionResult,
        model_version: &str,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            train_number: request.train_number().to_string(),
            class_code: request.class_code().to_string(),
            journey_date: request.journey_date(),
            current_waitlist_position: request.waitlist_position(),
            confirmation_probability: result.confirmation_probability,
            probability_category: result.probability_category,
            estimated_confirmation_date: result.estimated_confirmation_date,
            confidence_interval: result.confidence_interval.to_array(),
            ml_model_version: model_version.to_string(),
            prediction_timestamp: timestamp,
        }
    }

    /// Serializes the response as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`RailbookError::Json`] if serialization fails.
    pub fn to_json(&self, pretty: bool) -> Result<String, RailbookError> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WaitlistEstimator;
    use serde_json::Value;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
    }

    fn timestamp() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2026-03-02T10:30:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_wire_field_names() {
        let request = PredictionRequest::new("12951", "3A", "2026-04-01", 25, "GENERAL").unwrap();
        let prediction = WaitlistEstimator::default().predict(&request, today(), timestamp());
        let value: Value = serde_json::from_str(&prediction.to_json(false).unwrap()).unwrap();

        assert_eq!(value["train_number"], "12951");
        assert_eq!(value["class_code"], "3A");
        assert_eq!(value["journey_date"], "2026-04-01");
        assert_eq!(value["current_waitlist_position"], 25);
        assert_eq!(value["probability_category"], "Low");
        assert_eq!(value["estimated_confirmation_date"], "2026-03-27");
        assert_eq!(value["confidence_interval"].as_array().unwrap().len(), 2);
        assert_eq!(value["ml_model_version"], "v2.0.0");
        assert!(
            value["prediction_timestamp"]
                .as_str()
                .unwrap()
                .starts_with("2026-03-02T10:30:00")
        );
    }

    #[test]
    fn test_missing_date_serializes_as_null() {
        let request = PredictionRequest::new("12951", "SL", "2026-04-01", 500, "GENERAL").unwrap();
        let prediction = WaitlistEstimator::default().predict(&request, today(), timestamp());
        let value: Value = serde_json::to_value(&prediction).unwrap();

        assert!(value["estimated_confirmation_date"].is_null());
    }

    #[test]
    fn test_pretty_json_parses_back() {
        let request = PredictionRequest::new("22691", "2A", "2026-03-20", 7, "LADIES").unwrap();
        let prediction = WaitlistEstimator::default().predict(&request, today(), timestamp());
        let json = prediction.to_json(true).unwrap();
        let back: WaitlistPrediction = serde_json::from_str(&json).unwrap();

        assert_eq!(back.class_code, prediction.class_code);
        assert_eq!(back.probability_category, prediction.probability_category);
        assert_eq!(
            back.estimated_confirmation_date,
            prediction.estimated_confirmation_date
        );
        assert_eq!(back.prediction_timestamp, prediction.prediction_timestamp);
    }
}
