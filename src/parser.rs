//! Transcript parser.
//!
//! Turns a raw WhatsApp export into an ordered list of [`MessageRecord`]s.
//!
//! Parsing runs in two passes:
//!
//! 1. Every timestamp header is located and its byte span recorded.
//! 2. Each header is paired with the text between its end and the start of
//!    the next header (or end of input). That text is split into sender and
//!    body, and the record's calendar fields are derived.
//!
//! Anything before the first header is not a message and is dropped.
//!
//! # Example
//!
//! ```rust
//! use whatstat::parser::parse;
//! use whatstat::Sender;
//!
//! let raw = "1/1/23, 10:00 am - Alice: hello\n\
//!            1/1/23, 10:01 am - Bob: hi there\n\
//!            1/1/23, 10:02 am - Alice added Carol\n";
//!
//! let records = parse(raw)?;
//! assert_eq!(records.len(), 3);
//! assert_eq!(records[1].sender(), &Sender::participant("Bob"));
//! assert_eq!(records[1].text(), "hi there");
//! assert!(records[2].is_notification());
//! # Ok::<(), whatstat::WhatstatError>(())
//! ```

use std::fs;
use std::path::Path;

use tracing::{debug, trace};

use crate::error::{Result, WhatstatError};
use crate::message::MessageRecord;
use crate::parsing::whatsapp::{TimestampMatch, find_timestamps, split_sender, strip_line_break};

/// Parses a transcript held in memory.
///
/// Returns an empty list when the text contains no timestamp header. Fails
/// with [`WhatstatError::InvalidTimestamp`] if any header does not form a
/// valid calendar date-time; no partial result is returned.
pub fn parse(raw: &str) -> Result<Vec<MessageRecord>> {
    TranscriptParser::new().parse_str(raw)
}

/// Parser for WhatsApp TXT exports.
///
/// # Example
///
/// ```rust,no_run
/// use whatstat::parser::TranscriptParser;
///
/// let parser = TranscriptParser::new();
/// let records = parser.parse_file("whatsapp_chat.txt".as_ref())?;
/// # Ok::<(), whatstat::WhatstatError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TranscriptParser;

impl TranscriptParser {
    /// Creates a new parser.
    pub fn new() -> Self {
        Self
    }

    /// Reads and parses a transcript file.
    ///
    /// The file must be UTF-8; other encodings fail with
    /// [`WhatstatError::Utf8`].
    pub fn parse_file(&self, path: &Path) -> Result<Vec<MessageRecord>> {
        let bytes = fs::read(path)?;
        let content = String::from_utf8(bytes)
            .map_err(|e| WhatstatError::utf8(format!("reading {}", path.display()), e))?;
        self.parse_str(&content)
    }

    /// Parses transcript text.
    pub fn parse_str(&self, raw: &str) -> Result<Vec<MessageRecord>> {
        // Pass 1: header spans
        let headers: Vec<TimestampMatch<'_>> = find_timestamps(raw).collect();

        let Some(first) = headers.first() else {
            debug!(bytes = raw.len(), "no timestamp headers found");
            return Ok(Vec::new());
        };
        if first.start > 0 {
            debug!(bytes = first.start, "discarding text before first timestamp");
        }

        // Pass 2: bodies between consecutive headers
        let mut records = Vec::with_capacity(headers.len());
        for (i, header) in headers.iter().enumerate() {
            let body_end = headers.get(i + 1).map_or(raw.len(), |next| next.start);
            let body = &raw[header.end..body_end];
            records.push(build_record(header, body)?);
        }

        debug!(records = records.len(), "parsed transcript");
        Ok(records)
    }
}

fn build_record(header: &TimestampMatch<'_>, body: &str) -> Result<MessageRecord> {
    let timestamp = header
        .parts
        .to_datetime()
        .map_err(|e| WhatstatError::invalid_timestamp(header.raw, header.start, e))?;

    let (sender, text) = split_sender(body);
    if sender.is_notification() {
        trace!(offset = header.start, "group notification");
    }

    Ok(MessageRecord::new(timestamp, sender, strip_line_break(text)))
}
