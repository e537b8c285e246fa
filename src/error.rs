//! Unified error types for whatstat.
//!
//! This module provides a single [`WhatstatError`] enum that covers all error
//! cases in the library.
//!
//! # Error Handling Philosophy
//!
//! - **Library users** get typed errors they can match on
//! - **Application users** get clear, actionable error messages
//! - **Developers** get source error chains for debugging
//!
//! Degenerate input is never an error: a transcript without a single
//! timestamp parses to an empty record list, and every aggregation over an
//! empty selection returns an empty or zero-valued result.

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for whatstat operations.
///
/// # Example
///
/// ```rust
/// use whatstat::error::Result;
/// use whatstat::MessageRecord;
///
/// fn my_function() -> Result<Vec<MessageRecord>> {
///     // ... operations that may fail
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, WhatstatError>;

/// The error type for all whatstat operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum WhatstatError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The transcript or stop-word file doesn't exist
    /// - Permission denied
    /// - Disk is full (when writing an export)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A located timestamp could not be turned into a calendar date-time.
    ///
    /// The export format is trusted, so a single bad timestamp (day 32,
    /// month 13, hour 13 on a 12-hour clock) fails the whole transcript.
    #[error("Invalid timestamp '{raw}' at byte {offset}: {source}")]
    InvalidTimestamp {
        /// The matched timestamp text, delimiter included
        raw: String,
        /// Byte offset of the match in the transcript
        offset: usize,
        /// The underlying chrono error
        #[source]
        source: chrono::ParseError,
    },

    /// A sender was selected that does not occur in the transcript.
    #[error("Unknown participant '{0}'")]
    UnknownParticipant(String),

    /// A report format was requested that this build cannot produce.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// What kind of format (e.g., "report")
        format: &'static str,
        /// What went wrong
        message: String,
    },

    /// UTF-8 encoding error.
    ///
    /// Occurs when transcript bytes are not valid UTF-8.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<std::string::FromUtf8Error> for WhatstatError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        WhatstatError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl WhatstatError {
    /// Creates an invalid timestamp error.
    pub fn invalid_timestamp(
        raw: impl Into<String>,
        offset: usize,
        source: chrono::ParseError,
    ) -> Self {
        WhatstatError::InvalidTimestamp {
            raw: raw.into(),
            offset,
            source,
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        WhatstatError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Creates a UTF-8 error with a description of what was being decoded.
    pub fn utf8(context: impl Into<String>, source: std::string::FromUtf8Error) -> Self {
        WhatstatError::Utf8 {
            context: context.into(),
            source,
        }
    }

    /// Creates an unknown participant error.
    pub fn unknown_participant(name: impl Into<String>) -> Self {
        WhatstatError::UnknownParticipant(name.into())
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, WhatstatError::Io(_))
    }

    /// Returns `true` if this is a timestamp parse error.
    pub fn is_invalid_timestamp(&self) -> bool {
        matches!(self, WhatstatError::InvalidTimestamp { .. })
    }

    /// Returns `true` if this is an unknown participant error.
    pub fn is_unknown_participant(&self) -> bool {
        matches!(self, WhatstatError::UnknownParticipant(_))
    }
}

// ============================================================================
// Tests
// ============================================================================
