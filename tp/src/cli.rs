//! CLI command definitions and subcommands

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Tripplan - AI travel planner for students
#[derive(Parser)]
#[command(
    name = "tp",
    about = "AI-powered, budget-friendly travel plans with maps, stays and transport info",
    version
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(
        short = 'l',
        long = "log-level",
        global = true,
        help = "Log level (TRACE, DEBUG, INFO, WARN, ERROR)"
    )]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a full day-wise travel plan
    Plan {
        /// Destination city (e.g. Delhi, Goa, Paris)
        destination: String,

        /// Number of days (1-30)
        #[arg(short, long, default_value = "3")]
        days: u32,

        /// Budget in INR
        #[arg(short, long, default_value = "3000")]
        budget: u32,

        /// Interest tag (repeatable; see `tp interests`)
        #[arg(short, long = "interest", value_name = "TAG")]
        interests: Vec<String>,

        /// Select every interest from the catalog
        #[arg(long, conflicts_with = "interests")]
        all: bool,

        /// Where to write the plan document
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Skip writing the plan document
        #[arg(long)]
        no_report: bool,
    },

    /// List budget-friendly hostels and stays for a city
    Stays {
        /// City to search in
        city: String,
    },

    /// Show student travel options for a city
    Travel {
        /// City to explain travel for
        city: String,
    },

    /// List the supported interest tags
    Interests,
}

/// Get the log file path
pub fn get_log_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tripplan")
        .join("logs")
        .join("tripplan.log")
}
