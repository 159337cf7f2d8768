//! Predict command implementation.
//!
//! Validates the request the same way the JSON endpoint does, then prints
//! either a summary or the full prediction response.

use anyhow::{Context, Result};
use railbook_lib::prelude::*;

use crate::display::evaluation_date;

/// Predict confirmation for a waitlisted ticket.
pub(crate) fn predict(
    train_number: &str,
    class_code: &str,
    journey_date: &str,
    position: i64,
    quota: &str,
    today: Option<&str>,
    json: bool,
) -> Result<()> {
    let today = evaluation_date(today)?;
    let query = WaitlistQuery {
        train_number: train_number.to_string(),
        class_code: class_code.to_string(),
        journey_date: journey_date.to_string(),
        current_waitlist_position: position,
        quota: quota.to_string(),
    };
    let request = query.validate(today).context("Invalid prediction request")?;

    let estimator = WaitlistEstimator::global();
    let result = estimator.estimate(&request, today);

    if json {
        let prediction = WaitlistPrediction::new(
            &request,
            &result,
            estimator.model_version(),
            chrono::Utc::now(),
        );
        println!("{}", prediction.to_json(true)?);
        return Ok(());
    }

    let class = request
        .travel_class()
        .map_or("unknown class", |c| c.description());

    println!("Train:    {}", request.train_number());
    println!("Class:    {} ({})", request.class_code(), class);
    println!("Journey:  {}", request.journey_date().format("%Y-%m-%d"));
    println!("Waitlist: WL {} ({})", request.waitlist_position(), request.quota());
    println!();
    println!("{}", WaitlistEstimator::format_prediction(&result));
    println!();
    println!("Model: {}", estimator.model_version());

    Ok(())
}
