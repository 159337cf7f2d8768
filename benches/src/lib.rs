//! Benchmark workloads for the railbook estimator and assistant.

use chrono::{Days, NaiveDate};
use railbook_lib::{PredictionRequest, TravelClass};

/// Evaluation date used by every benchmark.
#[must_use]
pub fn evaluation_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 2).unwrap_or_default()
}

/// Builds `count` valid requests spread over classes, positions and lead times.
#[must_use]
pub fn sample_requests(count: usize) -> Vec<PredictionRequest> {
    let today = evaluation_date();
    let classes = TravelClass::all();

    (0..count)
        .filter_map(|i| {
            let class = classes[i % classes.len()];
            let journey_date = today.checked_add_days(Days::new((i % 120) as u64))?;
            let position = (i % 500) as i64 + 1;
            PredictionRequest::from_parts("12951", class.code(), journey_date, position, "GENERAL")
                .ok()
        })
        .collect()
}

/// Chat messages covering every intent.
pub const SAMPLE_MESSAGES: &[&str] = &[
    "Book 2 tickets from Delhi to Mumbai tomorrow in sleeper",
    "Check PNR status 4512378901",
    "I want a refund, please cancel my booking",
    "What is the schedule and route of train 12951?",
    "Are seats available in the ladies quota?",
    "hello",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_requests_are_valid() {
        assert_eq!(sample_requests(1_000).len(), 1_000);
    }
}
