//! Classes command implementation.

use anyhow::Result;
use railbook_lib::{TravelClass, class_factor};

/// List the supported reservation classes with their rank and score factor.
pub(crate) fn list_classes() -> Result<()> {
    println!("{:<6} {:<22} {:>6} {:>8}", "CODE", "CLASS", "RANK", "FACTOR");
    println!("{}", "-".repeat(45));

    for class in TravelClass::all() {
        println!(
            "{:<6} {:<22} {:>6} {:>8.2}",
            class.code(),
            class.description(),
            class.rank(),
            class_factor(Some(*class)),
        );
    }

    println!("\nUnknown class codes score with a factor of 1.00.");
    Ok(())
}
