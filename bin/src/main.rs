//! railbook CLI - Waitlist confirmation predictions and booking assistant rules.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};

mod commands;
mod config;
mod display;

use config::Settings;

#[derive(Parser)]
#[command(name = "railbook")]
#[command(about = "Railway waitlist predictions and booking assistant", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (only log errors)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Predict whether a waitlisted ticket will confirm
    Predict {
        /// Five-digit train number (e.g., 12951)
        train_number: String,

        /// Class code (SL, 3A, 2A, 1A, CC, EC, 2S)
        class_code: String,

        /// Journey date (YYYY-MM-DD)
        journey_date: String,

        /// Current waitlist position (1-500)
        #[arg(allow_negative_numbers = true)]
        position: i64,

        /// Booking quota
        #[arg(long, default_value = "GENERAL")]
        quota: String,

        /// Evaluate as of this date (YYYY-MM-DD). Defaults to today.
        #[arg(long)]
        today: Option<String>,

        /// Print the JSON response instead of a summary
        #[arg(long)]
        json: bool,
    },

    /// Classify the intent of a message
    Classify {
        /// Message text
        message: String,

        /// Resolve relative dates as of this date (YYYY-MM-DD). Defaults to today.
        #[arg(long)]
        today: Option<String>,

        /// Print the full classification as JSON
        #[arg(long)]
        json: bool,
    },

    /// Extract entities from text
    Entities {
        /// Text to analyze
        text: String,

        /// Resolve relative dates as of this date (YYYY-MM-DD). Defaults to today.
        #[arg(long)]
        today: Option<String>,
    },

    /// Reply to a chat message with follow-up suggestions
    Respond {
        /// Message text
        message: String,

        /// Conversation session ID
        #[arg(short, long)]
        session: Option<String>,

        /// Print the reply as JSON
        #[arg(long)]
        json: bool,
    },

    /// List supported reservation classes
    Classes,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = Settings::from_env()?;
    config::init_tracing(&settings, cli.verbose, cli.quiet);
    tracing::debug!(environment = %settings.environment, "Settings loaded");

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Predict {
            train_number,
            class_code,
            journey_date,
            position,
            quota,
            today,
            json,
        } => commands::predict::predict(
            &train_number,
            &class_code,
            &journey_date,
            position,
            &quota,
            today.as_deref(),
            json,
        ),
        Commands::Classify {
            message,
            today,
            json,
        } => commands::assistant::classify(&message, today.as_deref(), json),
        Commands::Entities { text, today } => {
            commands::assistant::entities(&text, today.as_deref())
        }
        Commands::Respond {
            message,
            session,
            json,
        } => commands::assistant::respond(&message, session.as_deref(), json),
        Commands::Classes => commands::classes::list_classes(),
    }
}
