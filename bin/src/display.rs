//! Display utilities and shared argument parsing for the railbook CLI.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Serialize;

/// Resolves the evaluation date: the given `YYYY-MM-DD` string, or today (UTC).
pub(crate) fn evaluation_date(today: Option<&str>) -> Result<NaiveDate> {
    match today {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .with_context(|| format!("Invalid date: {s}. Expected YYYY-MM-DD")),
        None => Ok(chrono::Utc::now().date_naive()),
    }
}

/// Prints a value as pretty JSON on stdout.
pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
