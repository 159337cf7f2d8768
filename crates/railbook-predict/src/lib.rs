//! Waitlist confirmation estimation for railbook.
//!
//! This crate turns a [`PredictionRequest`](railbook_types::PredictionRequest)
//! into a confirmation estimate:
//!
//! - [`FeatureVector`] - Normalized inputs derived from a request
//! - [`ScoreBreakdown`] - The individual factors behind a probability
//! - [`WaitlistEstimator`] - Computes estimates for requests
//! - [`PredictionResult`] - Probability, interval, category and date
//! - [`ProbabilityCategory`] - Human-readable probability band
//! - [`WaitlistPrediction`] - JSON response for a prediction

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/railbook/railbook/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod category;
mod estimator;
mod features;
mod response;

pub use category::ProbabilityCategory;
pub use estimator::{
    ConfidenceInterval, MODEL_VERSION, PredictionResult, ScoreBreakdown, WaitlistEstimator,
    class_factor,
};
pub use features::FeatureVector;
pub use response::WaitlistPrediction;
