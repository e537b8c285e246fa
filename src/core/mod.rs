//! Aggregations over parsed records.
//!
//! This module contains:
//! - [`filter`] - Choosing the overall view or one participant
//! - [`stats`] - Summary counts and the busiest senders
//! - [`timeline`] - Monthly and daily message counts
//! - [`activity`] - Weekday, month and hour-of-day activity
//! - [`words`] - Stop-words, word-cloud source and most common words
//! - [`emoji`] - Emoji frequency
//! - [`output`] - CSV export of records
//!
//! Every function borrows the record slice and returns a fresh value; none
//! of them mutate their input, so they can run in any order.
//!
//! # Quick Start
//!
//! ```rust
//! use whatstat::core::{SenderFilter, monthly_timeline, summarize};
//! use whatstat::parser::parse;
//!
//! let records = parse("1/1/23, 10:00 am - Alice: hello\n")?;
//! let filter = SenderFilter::participant("Alice");
//!
//! assert_eq!(summarize(&records, &filter).messages, 1);
//! assert_eq!(monthly_timeline(&records, &filter)[0].label, "January-2023");
//! # Ok::<(), whatstat::WhatstatError>(())
//! ```

pub mod activity;
pub mod emoji;
pub mod filter;
pub mod output;
pub mod rank;
pub mod stats;
pub mod timeline;
pub mod words;

// Re-export main types for convenience
pub use activity::{ActivityCount, Heatmap, activity_heatmap, month_activity, week_activity};
pub use emoji::{EmojiCount, emoji_frequency};
pub use filter::SenderFilter;
pub use stats::{BusySenders, SenderCount, SenderShare, Summary, most_busy_senders, summarize};
pub use timeline::{DailyCount, MonthlyCount, daily_timeline, monthly_timeline};
pub use words::{StopWords, WordCloud, WordCount, most_common_words, word_cloud_source};

// Re-export MessageRecord from the crate root
pub use crate::MessageRecord;

#[cfg(feature = "csv-output")]
pub use output::{records_to_csv, write_records_csv};
