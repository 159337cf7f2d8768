//! Booking assistant commands: intent classification, entity extraction
//! and conversational replies.

use anyhow::Result;
use railbook_lib::{
    INTENT_MODEL_VERSION, SuggestedAction, classify as classify_intent,
    extract_entities, respond as respond_to,
};

use crate::display::{evaluation_date, print_json};

/// Classify a message and print the intent with its reply.
pub(crate) fn classify(message: &str, today: Option<&str>, json: bool) -> Result<()> {
    let today = evaluation_date(today)?;
    let result = classify_intent(message, today);

    if json {
        return print_json(&result);
    }

    println!("Intent:     {}", result.intent);
    println!(
        "Confidence: {:.2}{}",
        result.confidence,
        if result.is_confident() { "" } else { " (low)" }
    );
    println!("Model:      {INTENT_MODEL_VERSION}");
    println!("Response:   {}", result.response);

    if !result.suggested_actions.is_empty() {
        println!("\nSuggested actions:");
        for action in &result.suggested_actions {
            match action {
                SuggestedAction::SearchTrains {
                    source,
                    destination,
                    date,
                } => match date {
                    Some(date) => println!("  search trains {source} -> {destination} on {date}"),
                    None => println!("  search trains {source} -> {destination}"),
                },
                SuggestedAction::GetPnrStatus { pnr } => println!("  get PNR status {pnr}"),
            }
        }
    }

    Ok(())
}

/// Extract entities from text and print them as JSON.
pub(crate) fn entities(text: &str, today: Option<&str>) -> Result<()> {
    let today = evaluation_date(today)?;
    print_json(&extract_entities(text, today))
}

/// Reply to a chat message.
pub(crate) fn respond(message: &str, session: Option<&str>, json: bool) -> Result<()> {
    let reply = respond_to(message, session, evaluation_date(None)?);

    if json {
        return print_json(&reply);
    }

    println!("{}", reply.response);
    println!("\nYou can also:");
    for suggestion in &reply.follow_up_suggestions {
        println!("  - {suggestion}");
    }

    Ok(())
}
