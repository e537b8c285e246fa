//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`OutputFormat`] - Report format options
//!
//! ```rust
//! use clap::Parser;
//! use whatstat::cli::{Args, OutputFormat};
//!
//! let args = Args::parse_from(["whatstat", "chat.txt", "--user", "Alice", "-f", "json"]);
//! assert_eq!(args.user.as_deref(), Some("Alice"));
//! assert_eq!(args.format, OutputFormat::Json);
//! ```

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::AnalysisConfig;
use crate::core::filter::OVERALL;
use crate::format::ReportFormat;

/// Statistics for WhatsApp chat exports: timelines, activity maps,
/// busiest users, common words and emoji.
#[derive(Parser, Debug, Clone)]
#[command(name = "whatstat")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    whatstat chat.txt
    whatstat chat.txt --list-users
    whatstat chat.txt -u Alice
    whatstat chat.txt -f json --top-words 50
    whatstat chat.txt --export-csv records.csv")]
pub struct Args {
    /// Path to the exported chat (.txt)
    pub input: PathBuf,

    /// Show statistics for one participant instead of the whole chat
    #[arg(short, long, value_name = "NAME")]
    pub user: Option<String>,

    /// Report format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Stop-word list, one word per line (defaults to the built-in list)
    #[arg(long, value_name = "PATH")]
    pub stop_words: Option<PathBuf>,

    /// Number of entries in the most-common-words table
    #[arg(long, value_name = "N", default_value_t = 20)]
    pub top_words: usize,

    /// Number of entries in the busiest-users chart
    #[arg(long, value_name = "N", default_value_t = 5)]
    pub top_senders: usize,

    /// Print the selectable views and exit
    #[arg(long)]
    pub list_users: bool,

    /// Also write every parsed record to a CSV file
    #[arg(long, value_name = "PATH")]
    pub export_csv: Option<PathBuf>,

    /// Log parser and report details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// The view to report on; `Overall` unless `--user` was given.
    pub fn view(&self) -> &str {
        self.user.as_deref().unwrap_or(OVERALL)
    }

    /// Table sizes requested on the command line.
    pub fn analysis_config(&self) -> AnalysisConfig {
        AnalysisConfig::new()
            .with_top_words(self.top_words)
            .with_top_senders(self.top_senders)
    }
}

/// Report format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned text tables (default)
    #[default]
    #[value(alias = "txt")]
    Text,

    /// Pretty-printed JSON
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", ReportFormat::from(*self))
    }
}

// Conversion to library format type
impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> ReportFormat {
        match format {
            OutputFormat::Text => ReportFormat::Text,
            OutputFormat::Json => ReportFormat::Json,
        }
    }
}
