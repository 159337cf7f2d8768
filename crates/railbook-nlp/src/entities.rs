//! Entity extraction.

use std::sync::OnceLock;

use chrono::{Days, NaiveDate};
use railbook_types::TravelClass;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Version string reported for entity extraction.
pub const NER_MODEL_VERSION: &str = "v1.1.0";

/// Largest passenger count a single booking may carry.
const MAX_PASSENGERS: u8 = 6;

/// City keywords and the station names they resolve to, in match order.
const CITIES: &[(&str, &str)] = &[
    ("delhi", "New Delhi"),
    ("mumbai", "Mumbai"),
    ("chennai", "Chennai"),
    ("kolkata", "Kolkata"),
    ("bangalore", "Bangalore"),
    ("hyderabad", "Hyderabad"),
    ("pune", "Pune"),
    ("ahmedabad", "Ahmedabad"),
    ("jaipur", "Jaipur"),
    ("lucknow", "Lucknow"),
    ("kanpur", "Kanpur"),
    ("nagpur", "Nagpur"),
];

/// Class keywords in match order. The first keyword found wins.
const CLASS_KEYWORDS: &[(&str, TravelClass)] = &[
    ("sleeper", TravelClass::Sleeper),
    ("sl", TravelClass::Sleeper),
    ("3ac", TravelClass::ThirdAc),
    ("3a", TravelClass::ThirdAc),
    ("third ac", TravelClass::ThirdAc),
    ("2ac", TravelClass::SecondAc),
    ("2a", TravelClass::SecondAc),
    ("second ac", TravelClass::SecondAc),
    ("1ac", TravelClass::FirstAc),
    ("1a", TravelClass::FirstAc),
    ("first ac", TravelClass::FirstAc),
    ("cc", TravelClass::ChairCar),
    ("chair car", TravelClass::ChairCar),
    ("ec", TravelClass::ExecutiveChairCar),
    ("executive", TravelClass::ExecutiveChairCar),
];

/// Compiled extraction patterns.
#[derive(Debug)]
struct Patterns {
    pnr: Regex,
    numeric_date: Regex,
    passengers: Vec<Regex>,
}

static PATTERNS: OnceLock<Patterns> = OnceLock::new();

impl Patterns {
    fn global() -> &'static Self {
        PATTERNS.get_or_init(Self::compile)
    }

    fn compile() -> Self {
        let re = |pattern: &str| Regex::new(pattern).expect("valid entity pattern");
        Self {
            pnr: re(r"\b[0-9]{10}\b"),
            // Covers both d/m/yyyy and m/d/yy orderings; the text is kept verbatim.
            numeric_date: re(r"\b[0-9]{1,2}[/-][0-9]{1,2}[/-][0-9]{2,4}\b"),
            passengers: [
                r"([0-9]+)\s+passenger",
                r"([0-9]+)\s+ticket",
                r"([0-9]+)\s+seat",
                r"([0-9]+)\s+person",
                r"for\s+([0-9]+)",
            ]
            .into_iter()
            .map(re)
            .collect(),
        }
    }
}

/// Entities found in a piece of text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entities {
    /// Origin station, when two or more stations are mentioned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_station: Option<String>,
    /// Destination station, when two or more stations are mentioned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_station: Option<String>,
    /// The only station mentioned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub station: Option<String>,
    /// Journey date resolved from a relative expression.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub journey_date: Option<NaiveDate>,
    /// A numeric date as written, e.g. `15/08/2025`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_date: Option<String>,
    /// Requested reservation class.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub train_class: Option<TravelClass>,
    /// Number of travellers, 1 to 6.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passenger_count: Option<u8>,
    /// Ten-digit PNR number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pnr_number: Option<String>,
}

impl Entities {
    /// Returns true if nothing was extracted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Returns the number of extracted entities.
    #[must_use]
    pub fn len(&self) -> usize {
        [
            self.source_station.is_some(),
            self.destination_station.is_some(),
            self.station.is_some(),
            self.journey_date.is_some(),
            self.raw_date.is_some(),
            self.train_class.is_some(),
            self.passenger_count.is_some(),
            self.pnr_number.is_some(),
        ]
        .into_iter()
        .filter(|found| *found)
        .count()
    }

    /// Returns the source and destination, if both are known.
    #[must_use]
    pub fn route(&self) -> Option<(&str, &str)> {
        Some((
            self.source_station.as_deref()?,
            self.destination_station.as_deref()?,
        ))
    }
}

/// Extracts entities from `text`, resolving relative dates against `today`.
#[must_use]
pub fn extract_entities(text: &str, today: NaiveDate) -> Entities {
    tracing::debug!(text_length = text.len(), "Extracting entities");

    let lower = text.to_lowercase();
    let patterns = Patterns::global();
    let mut entities = Entities::default();

    let stations: Vec<&str> = CITIES
        .iter()
        .filter(|(keyword, _)| lower.contains(keyword))
        .map(|(_, name)| *name)
        .collect();
    match stations.as_slice() {
        [] => {}
        [only] => entities.station = Some((*only).to_string()),
        [source, destination, ..] => {
            entities.source_station = Some((*source).to_string());
            entities.destination_station = Some((*destination).to_string());
        }
    }

    entities.journey_date = relative_date(&lower, today);
    entities.raw_date = patterns
        .numeric_date
        .find(text)
        .map(|m| m.as_str().to_string());

    entities.train_class = CLASS_KEYWORDS
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map(|(_, class)| *class);

    // Only the first pattern that matches at all is consulted.
    entities.passenger_count = patterns
        .passengers
        .iter()
        .find_map(|re| re.captures(&lower))
        .and_then(|caps| caps[1].parse::<u8>().ok())
        .filter(|count| (1..=MAX_PASSENGERS).contains(count));

    entities.pnr_number = patterns.pnr.find(text).map(|m| m.as_str().to_string());

    entities
}

/// Resolves "today", "day after tomorrow" and "tomorrow", in that order.
fn relative_date(lower: &str, today: NaiveDate) -> Option<NaiveDate> {
    let offset = if lower.contains("today") {
        0
    } else if lower.contains("day after tomorrow") {
        2
    } else if lower.contains("tomorrow") {
        1
    } else {
        return None;
    };
    today.checked_add_days(Days::new(offset))
}
