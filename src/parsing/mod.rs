//! Low-level parsing utilities.
//!
//! This module holds the export patterns and helpers used by the
//! [`parser`](crate::parser) to split a transcript into records.

pub mod whatsapp;

// Re-export commonly used items
pub use whatsapp::{
    SENDER_PATTERN, TIMESTAMP_PATTERN, TimestampMatch, TimestampParts, find_timestamps,
    split_sender, strip_line_break,
};
