//! Rule-based intent classification and entity extraction for railbook.
//!
//! - [`extract_entities`] - Pulls stations, dates, class, passenger count
//!   and PNR out of free text
//! - [`classify`] - Scores keyword lists to pick an [`Intent`]
//! - [`respond`] - Builds a conversational reply with follow-ups
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use railbook_nlp::{Intent, classify};
//!
//! let today = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
//! let result = classify("Book a sleeper ticket from Delhi to Mumbai tomorrow", today);
//! assert_eq!(result.intent, Intent::BookTicket);
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/railbook/railbook/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod conversation;
mod entities;
mod intent;

pub use conversation::{ConversationReply, follow_ups, respond};
pub use entities::{Entities, NER_MODEL_VERSION, extract_entities};
pub use intent::{
    INTENT_CONFIDENCE_THRESHOLD, INTENT_MODEL_VERSION, Intent, IntentClassification,
    SuggestedAction, classify,
};
