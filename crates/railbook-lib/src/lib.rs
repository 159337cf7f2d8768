//! Waitlist confirmation prediction and booking assistant rules.
//!
//! This is a facade crate that re-exports functionality from the railbook
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```
//! use railbook_lib::prelude::*;
//!
//! let today = chrono::NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
//! let query = WaitlistQuery {
//!     train_number: "12951".to_string(),
//!     class_code: "3A".to_string(),
//!     journey_date: "2025-08-31".to_string(),
//!     current_waitlist_position: 25,
//!     quota: "GENERAL".to_string(),
//! };
//!
//! let request = query.validate(today)?;
//! let result = WaitlistEstimator::global().estimate(&request, today);
//! assert!(result.confidence_interval.contains(result.confirmation_probability));
//! # Ok::<(), RailbookError>(())
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/railbook/railbook/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use railbook_types::*;

// Re-export the estimator
#[cfg(feature = "predict")]
pub use railbook_predict::{
    ConfidenceInterval, FeatureVector, MODEL_VERSION, PredictionResult, ProbabilityCategory,
    ScoreBreakdown, WaitlistEstimator, WaitlistPrediction, class_factor,
};

// Re-export the language layer
#[cfg(feature = "nlp")]
pub use railbook_nlp::{
    ConversationReply, Entities, INTENT_CONFIDENCE_THRESHOLD, INTENT_MODEL_VERSION, Intent,
    IntentClassification, NER_MODEL_VERSION, SuggestedAction, classify, extract_entities,
    follow_ups, respond,
};

/// Prelude module for convenient imports.
///
/// ```
/// use railbook_lib::prelude::*;
/// ```
pub mod prelude {
    pub use railbook_types::{
        PredictionRequest, Quota, RailbookError, Result, TravelClass, ValidationError,
        WaitlistQuery,
    };

    #[cfg(feature = "predict")]
    pub use railbook_predict::{
        PredictionResult, ProbabilityCategory, WaitlistEstimator, WaitlistPrediction,
    };

    #[cfg(feature = "nlp")]
    pub use railbook_nlp::{Intent, IntentClassification, classify, extract_entities, respond};
}
