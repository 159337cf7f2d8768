//! Core types for the railbook waitlist predictor.
//!
//! This crate provides the data structures shared across railbook:
//!
//! - [`TravelClass`] - Reservation class (SL, 3A, 2A, ...)
//! - [`Quota`] - Booking quota (GENERAL, LADIES, ...)
//! - [`PredictionRequest`] - A validated waitlist prediction request
//! - [`WaitlistQuery`] - The JSON wire form of a prediction request
//! - [`RailbookError`] - Errors raised at the request boundary

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/railbook/railbook/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod class;
mod error;
mod quota;
mod request;

pub use class::TravelClass;
pub use error::{ParseError, RailbookError, Result, ValidationError};
pub use quota::Quota;
pub use request::{
    MAX_WAITLIST_POSITION, MIN_WAITLIST_POSITION, PredictionRequest, WaitlistQuery,
};
