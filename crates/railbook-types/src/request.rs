//! Waitlist prediction requests and boundary validation.

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{ParseError, Quota, RailbookError, TravelClass, ValidationError};

/// Smallest accepted waitlist position.
pub const MIN_WAITLIST_POSITION: u32 = 1;

/// Largest accepted waitlist position.
pub const MAX_WAITLIST_POSITION: u32 = 500;

/// Wire format of journey dates.
const DATE_FORMAT: &str = "%Y-%m-%d";

static TRAIN_NUMBER_RE: OnceLock<Regex> = OnceLock::new();
static DATE_SHAPE_RE: OnceLock<Regex> = OnceLock::new();

fn train_number_re() -> &'static Regex {
    TRAIN_NUMBER_RE.get_or_init(|| Regex::new(r"^[0-9]{5}$").expect("valid train number regex"))
}

fn date_shape_re() -> &'static Regex {
    DATE_SHAPE_RE
        .get_or_init(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("valid date regex"))
}

/// Parses a `YYYY-MM-DD` journey date.
fn parse_date(input: &str) -> Result<NaiveDate, ParseError> {
    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|source| ParseError::Date {
        input: input.to_string(),
        source,
    })
}

/// A waitlisted ticket to estimate confirmation for.
///
/// Construction parses the journey date and checks the waitlist position.
/// Class code and quota are kept verbatim: the estimator degrades unknown
/// codes to default ranks instead of rejecting them. Use
/// [`WaitlistQuery::validate`] for the strict boundary checks.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PredictionRequest {
    train_number: String,
    class_code: String,
    journey_date: NaiveDate,
    waitlist_position: u32,
    quota: String,
}

impl PredictionRequest {
    /// Creates a request from wire-level strings.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Date`] if `journey_date` is not a valid
    /// `YYYY-MM-DD` date, or [`ValidationError::WaitlistPosition`] if the
    /// position is outside `1..=500`.
    pub fn new(
        train_number: impl Into<String>,
        class_code: impl Into<String>,
        journey_date: &str,
        waitlist_position: i64,
        quota: impl Into<String>,
    ) -> Result<Self, RailbookError> {
        let journey_date = parse_date(journey_date)?;
        Ok(Self::from_parts(
            train_number,
            class_code,
            journey_date,
            waitlist_position,
            quota,
        )?)
    }

    /// Creates a request from an already parsed journey date.
    ///
    /// # Errors
    ///
    /// Returns an error if the position is outside `1..=500`.
    pub fn from_parts(
        train_number: impl Into<String>,
        class_code: impl Into<String>,
        journey_date: NaiveDate,
        waitlist_position: i64,
        quota: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let waitlist_position = u32::try_from(waitlist_position)
            .ok()
            .filter(|p| (MIN_WAITLIST_POSITION..=MAX_WAITLIST_POSITION).contains(p))
            .ok_or(ValidationError::WaitlistPosition(waitlist_position))?;

        Ok(Self {
            train_number: train_number.into(),
            class_code: class_code.into(),
            journey_date,
            waitlist_position,
            quota: quota.into(),
        })
    }

    /// Returns the train number.
    #[must_use]
    pub fn train_number(&self) -> &str {
        &self.train_number
    }

    /// Returns the raw class code.
    #[must_use]
    pub fn class_code(&self) -> &str {
        &self.class_code
    }

    /// Returns the class, or `None` if the code is not a known class.
    #[must_use]
    pub fn travel_class(&self) -> Option<TravelClass> {
        TravelClass::lookup(&self.class_code)
    }

    /// Returns the journey date.
    #[must_use]
    pub const fn journey_date(&self) -> NaiveDate {
        self.journey_date
    }

    /// Returns the current waitlist position.
    #[must_use]
    pub const fn waitlist_position(&self) -> u32 {
        self.waitlist_position
    }

    /// Returns the raw quota name.
    #[must_use]
    pub fn quota(&self) -> &str {
        &self.quota
    }

    /// Returns the quota, or `None` if the name is not a known quota.
    #[must_use]
    pub fn known_quota(&self) -> Option<Quota> {
        Quota::lookup(&self.quota)
    }
}

fn default_quota() -> String {
    Quota::default().as_str().to_string()
}

/// JSON body of a waitlist prediction request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitlistQuery {
    /// Five-digit train number.
    pub train_number: String,
    /// Reservation class code.
    pub class_code: String,
    /// Journey date as `YYYY-MM-DD`.
    pub journey_date: String,
    /// Current waitlist position.
    pub current_waitlist_position: i64,
    /// Booking quota, `GENERAL` when omitted.
    #[serde(default = "default_quota")]
    pub quota: String,
}

impl WaitlistQuery {
    /// Applies the boundary rules and builds a [`PredictionRequest`].
    ///
    /// Checks run in field order: train number, class code, date shape,
    /// date validity, journey not before `today`, waitlist position. The
    /// quota is passed through unchecked.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] or [`ParseError`] encountered.
    pub fn validate(&self, today: NaiveDate) -> Result<PredictionRequest, RailbookError> {
        if !train_number_re().is_match(&self.train_number) {
            return Err(ValidationError::TrainNumber(self.train_number.clone()).into());
        }

        self.class_code.parse::<TravelClass>()?;

        if !date_shape_re().is_match(&self.journey_date) {
            return Err(ValidationError::DateFormat(self.journey_date.clone()).into());
        }
        let journey_date = parse_date(&self.journey_date)?;
        if journey_date < today {
            return Err(ValidationError::PastJourneyDate {
                journey_date,
                today,
            }
            .into());
        }

        Ok(PredictionRequest::from_parts(
            self.train_number.clone(),
            self.class_code.clone(),
            journey_date,
            self.current_waitlist_position,
            self.quota.clone(),
        )?)
    }
}
