//! # whatstat
//!
//! A Rust library for parsing WhatsApp chat exports and computing the
//! statistics people usually want from them.
//!
//! ## Overview
//!
//! A WhatsApp "export chat" file is plain text in which every message starts
//! with a `d/m/yy, h:mm am - ` header. whatstat turns that text into typed
//! [`MessageRecord`]s and offers read-only aggregations over them:
//! - summary counts (messages, words, media, links)
//! - monthly and daily timelines
//! - weekday, month and hour-of-day activity
//! - the busiest participants
//! - word-cloud source, most common words and emoji usage
//!
//! Each aggregation takes a [`SenderFilter`](core::SenderFilter): the whole
//! chat (`Overall`) or a single participant. Group notifications count toward
//! `Overall` only.
//!
//! ## Quick Start
//!
//! ```rust
//! use whatstat::prelude::*;
//!
//! let session = Session::from_transcript(
//!     "1/1/23, 10:00 am - Alice: hello\n\
//!      1/1/23, 10:01 am - Bob: hi there\n\
//!      1/1/23, 10:02 am - Alice: <Media omitted>\n",
//! )?;
//!
//! let report = session.report(
//!     &SenderFilter::Overall,
//!     &StopWords::default(),
//!     &AnalysisConfig::default(),
//! );
//! assert_eq!(report.summary.messages, 3);
//! assert_eq!(report.summary.words, 3);
//! assert_eq!(report.summary.media, 1);
//! # Ok::<(), whatstat::WhatstatError>(())
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - transcript to records ([`parse`](parser::parse),
//!   [`TranscriptParser`](parser::TranscriptParser))
//! - [`parsing`] - timestamp and sender patterns shared by the parser
//! - [`message`] - [`MessageRecord`], [`Sender`], [`HourBucket`]
//! - [`core`] - aggregations, filtering and CSV export
//! - [`session`] - [`Session`](session::Session) and its
//!   [`Report`](session::Report)
//! - [`format`] - text and JSON rendering of reports
//! - [`config`] - [`AnalysisConfig`](config::AnalysisConfig)
//! - [`cli`] - CLI argument types (feature `cli`)
//! - [`error`] - [`WhatstatError`] and [`Result`]
//! - [`prelude`] - Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod message;
pub mod parser;
pub mod parsing;
pub mod session;

// Re-export the main types at the crate root for convenience
pub use error::{Result, WhatstatError};
pub use message::{HourBucket, MessageRecord, Sender};

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use whatstat::prelude::*;
/// ```
pub mod prelude {
    // Records
    pub use crate::{HourBucket, MessageRecord, Sender};

    // Error types
    pub use crate::error::{Result, WhatstatError};

    // Parsing
    pub use crate::parser::{TranscriptParser, parse};

    // Session and configuration
    pub use crate::config::AnalysisConfig;
    pub use crate::session::{Report, Session};

    // Aggregations
    pub use crate::core::{
        SenderFilter, StopWords, activity_heatmap, daily_timeline, emoji_frequency,
        month_activity, monthly_timeline, most_busy_senders, most_common_words, summarize,
        week_activity, word_cloud_source,
    };

    // Output
    #[cfg(feature = "csv-output")]
    pub use crate::core::{records_to_csv, write_records_csv};
    pub use crate::format::{ReportFormat, render_report};
}
