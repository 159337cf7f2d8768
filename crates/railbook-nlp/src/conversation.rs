//! Conversational replies.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::intent::{Intent, classify};

/// Reply to a chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationReply {
    /// Reply text.
    pub response: String,
    /// Whether the conversation context changed.
    pub context_updated: bool,
    /// Prompts the client can offer next.
    pub follow_up_suggestions: Vec<String>,
    /// Session the reply belongs to.
    pub session_id: Option<String>,
}

/// Returns the follow-up prompts offered after an intent.
#[must_use]
pub const fn follow_ups(intent: Intent) -> &'static [&'static str] {
    match intent {
        Intent::BookTicket => &[
            "Search for trains",
            "Check seat availability",
            "View train schedule",
        ],
        Intent::CheckStatus => &[
            "Enter PNR number",
            "Check another booking",
            "Get refund information",
        ],
        _ => &[
            "Book train tickets",
            "Check PNR status",
            "Get train information",
        ],
    }
}

/// Classifies `message` and wraps the reply with follow-up suggestions.
#[must_use]
pub fn respond(message: &str, session_id: Option<&str>, today: NaiveDate) -> ConversationReply {
    tracing::info!(session = session_id, "Response generation request");

    let classification = classify(message, today);

    ConversationReply {
        response: classification.response,
        context_updated: true,
        follow_up_suggestions: follow_ups(classification.intent)
            .iter()
            .map(|s| (*s).to_string())
            .collect(),
        session_id: session_id.map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, 1).unwrap()
    }

    #[test]
    fn test_booking_follow_ups() {
        let reply = respond("book a ticket to Chennai", Some("sess_12345"), today());

        assert!(reply.context_updated);
        assert_eq!(reply.session_id.as_deref(), Some("sess_12345"));
        assert_eq!(reply.follow_up_suggestions[0], "Search for trains");
        assert!(reply.response.starts_with("I'll help you book train tickets"));
    }

    #[test]
    fn test_fallback_follow_ups() {
        let reply = respond("hello", None, today());
        assert_eq!(reply.session_id, None);
        assert_eq!(
            reply.follow_up_suggestions,
            vec!["Book train tickets", "Check PNR status", "Get train information"]
        );
    }

    #[test]
    fn test_cancel_uses_fallback_follow_ups() {
        assert_eq!(follow_ups(Intent::CancelBooking), follow_ups(Intent::GeneralInquiry));
        assert_eq!(follow_ups(Intent::CheckStatus)[0], "Enter PNR number");
    }
}
