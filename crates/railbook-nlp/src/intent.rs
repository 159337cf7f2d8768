//! Keyword-based intent classification.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entities::{Entities, extract_entities};

/// Version string reported for intent classification.
pub const INTENT_MODEL_VERSION: &str = "v1.2.0";

/// Confidence at or above which a classification is considered reliable.
pub const INTENT_CONFIDENCE_THRESHOLD: f64 = 0.7;

/// Score of the fallback intent. Another intent must beat it strictly.
const FALLBACK_CONFIDENCE: f64 = 0.5;

/// What a user is trying to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Book a new ticket.
    BookTicket,
    /// Check the status of an existing booking.
    CheckStatus,
    /// Cancel a booking or ask for a refund.
    CancelBooking,
    /// Ask about schedules, routes or stops.
    GetTrainInfo,
    /// Ask about seat availability.
    CheckAvailability,
    /// Anything else.
    GeneralInquiry,
}

impl Intent {
    /// Intents with keyword lists, in scoring order.
    const SCORED: [Self; 5] = [
        Self::BookTicket,
        Self::CheckStatus,
        Self::CancelBooking,
        Self::GetTrainInfo,
        Self::CheckAvailability,
    ];

    /// Returns the intent identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BookTicket => "book_ticket",
            Self::CheckStatus => "check_status",
            Self::CancelBooking => "cancel_booking",
            Self::GetTrainInfo => "get_train_info",
            Self::CheckAvailability => "check_availability",
            Self::GeneralInquiry => "general_inquiry",
        }
    }

    /// Returns the keywords that vote for this intent.
    #[must_use]
    pub const fn keywords(&self) -> &'static [&'static str] {
        match self {
            Self::BookTicket => &[
                "book",
                "ticket",
                "train",
                "reservation",
                "reserve",
                "journey",
                "travel",
                "seat",
                "berth",
                "coach",
            ],
            Self::CheckStatus => &[
                "status",
                "pnr",
                "check",
                "confirm",
                "booking",
                "ticket status",
                "reservation status",
                "confirm ticket",
            ],
            Self::CancelBooking => &[
                "cancel",
                "refund",
                "cancellation",
                "cancel ticket",
                "cancel booking",
                "refund ticket",
            ],
            Self::GetTrainInfo => &[
                "train",
                "schedule",
                "timing",
                "arrival",
                "departure",
                "train number",
                "route",
                "stops",
            ],
            Self::CheckAvailability => &[
                "availability",
                "available",
                "seats",
                "berths",
                "quota",
                "vacant",
                "waiting list",
                "confirm availability",
            ],
            Self::GeneralInquiry => &[],
        }
    }

    /// Scores lowercased text: `min(0.95, 0.3 + 0.15 * matches)`.
    fn score(&self, lower: &str) -> f64 {
        let matches = self
            .keywords()
            .iter()
            .filter(|keyword| lower.contains(*keyword))
            .count();
        (0.3 + matches as f64 * 0.15).min(0.95)
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A follow-up the client can offer the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "parameters", rename_all = "snake_case")]
pub enum SuggestedAction {
    /// Search trains on a route.
    SearchTrains {
        /// Origin station.
        source: String,
        /// Destination station.
        destination: String,
        /// Journey date, if known.
        date: Option<NaiveDate>,
    },
    /// Look up a PNR.
    GetPnrStatus {
        /// The PNR number.
        pnr: String,
    },
}

/// Result of classifying a message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentClassification {
    /// The winning intent.
    pub intent: Intent,
    /// Score of the winning intent.
    pub confidence: f64,
    /// Entities found in the message.
    pub entities: Entities,
    /// Reply text for the user.
    pub response: String,
    /// Follow-up actions.
    pub suggested_actions: Vec<SuggestedAction>,
}

impl IntentClassification {
    /// Returns true if the confidence reaches [`INTENT_CONFIDENCE_THRESHOLD`].
    #[must_use]
    pub fn is_confident(&self) -> bool {
        self.confidence >= INTENT_CONFIDENCE_THRESHOLD
    }
}

/// Classifies a message, resolving relative dates against `today`.
#[must_use]
pub fn classify(text: &str, today: NaiveDate) -> IntentClassification {
    tracing::info!(text_length = text.len(), "Classifying intent");

    let lower = text.to_lowercase();
    let mut intent = Intent::GeneralInquiry;
    let mut confidence = FALLBACK_CONFIDENCE;
    for candidate in Intent::SCORED {
        let score = candidate.score(&lower);
        if score > confidence {
            intent = candidate;
            confidence = score;
        }
    }

    let entities = extract_entities(text, today);
    let response = response_text(intent, &entities);
    let suggested_actions = suggested_actions(intent, &entities);

    IntentClassification {
        intent,
        confidence,
        entities,
        response,
        suggested_actions,
    }
}

/// Builds the reply text for an intent.
fn response_text(intent: Intent, entities: &Entities) -> String {
    match intent {
        Intent::BookTicket => booking_response(entities),
        Intent::CheckStatus => {
            "I'll help you check your booking status. Please provide your PNR number.".to_string()
        }
        Intent::CancelBooking => {
            "I can help you cancel your booking. Please provide your PNR number.".to_string()
        }
        Intent::GetTrainInfo => {
            "I can provide train information. Please specify the train number or route."
                .to_string()
        }
        Intent::CheckAvailability => {
            "I'll check seat availability for you. Please provide the route and date.".to_string()
        }
        Intent::GeneralInquiry => {
            "I'm here to help with your railway booking needs. What would you like to do?"
                .to_string()
        }
    }
}

fn booking_response(entities: &Entities) -> String {
    let mut response = String::from("I'll help you book train tickets");

    if let Some((source, destination)) = entities.route() {
        response.push_str(&format!(" from {source} to {destination}"));
    }
    if let Some(date) = entities.journey_date {
        response.push_str(&format!(" on {}", date.format("%Y-%m-%d")));
    }
    if let Some(class) = entities.train_class {
        response.push_str(&format!(" in {class} class"));
    }
    if let Some(count) = entities.passenger_count {
        let plural = if count > 1 { "s" } else { "" };
        response.push_str(&format!(" for {count} passenger{plural}"));
    }

    response.push_str(". Let me search for available trains.");
    response
}

fn suggested_actions(intent: Intent, entities: &Entities) -> Vec<SuggestedAction> {
    match intent {
        Intent::BookTicket => entities
            .route()
            .map(|(source, destination)| SuggestedAction::SearchTrains {
                source: source.to_string(),
                destination: destination.to_string(),
                date: entities.journey_date,
            })
            .into_iter()
            .collect(),
        Intent::CheckStatus => entities
            .pnr_number
            .as_ref()
            .map(|pnr| SuggestedAction::GetPnrStatus { pnr: pnr.clone() })
            .into_iter()
            .collect(),
        _ => Vec::new(),
    }
}
