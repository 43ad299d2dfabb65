use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for postwatch
/// CLI application to review guard attendance per duty post with SQLite
#[derive(Parser)]
#[command(
    name = "postwatch",
    version = env!("CARGO_PKG_VERSION"),
    about = "Review security-guard badge scans per duty post, classify shift coverage, and export weekly hour reports",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or check)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration for obvious mistakes")]
        check: bool,
    },

    /// Record a badge event (or a supervisor correction of a missing scan)
    Add {
        /// Event date (YYYY-MM-DD)
        date: String,

        /// Duty post code (e.g. Gate, CCTV, Command)
        post: String,

        /// Employee badge code
        employee: String,

        /// Scan direction: in | out
        action: String,

        /// Event time (HH:MM)
        time: String,

        #[arg(long = "invalid", help = "Flag the scan as invalid (kept, surfaced in reports)")]
        invalid: bool,
    },

    /// List raw badge events
    List {
        #[arg(
            long = "range",
            help = "Restrict to a period: YYYY, YYYY-MM, YYYY-MM-DD or start:end"
        )]
        range: Option<String>,
    },

    /// Show the per-post day report (slots, status, hours, diagnostics)
    Day {
        #[arg(long = "date", help = "Day to report (YYYY-MM-DD, default today)")]
        date: Option<String>,
    },

    /// Show the weekly hour matrix (Monday-based week)
    Week {
        #[arg(
            long = "date",
            help = "Any day of the week to report (YYYY-MM-DD, default today)"
        )]
        date: Option<String>,
    },

    /// Export the weekly report (xlsx) or raw events (csv, json)
    Export {
        /// Output format
        format: ExportFormat,

        #[arg(long = "file", help = "Absolute path of the output file")]
        file: String,

        #[arg(
            long = "date",
            help = "Any day of the week to export (YYYY-MM-DD, default today)"
        )]
        date: Option<String>,

        #[arg(long = "force", help = "Overwrite the output file without asking")]
        force: bool,
    },
}
