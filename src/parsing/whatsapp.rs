//! WhatsApp export patterns.
//!
//! The supported export writes one header per message:
//!
//! ```text
//! 15/01/23, 10:30 pm - Alice: Hello
//! ```
//!
//! i.e. `D/M/YY, H:MM am - ` followed by either `Sender: text` or a bare
//! group notification. Newer Android exports put a narrow no-break space
//! (U+202F) before `am`/`pm`; both spellings are accepted.

use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::{Captures, Regex};

use crate::message::Sender;

/// Pattern for the timestamp header that starts every message.
///
/// Groups: day, month, two-digit year, hour, minute, meridiem. Digits are
/// ASCII only; `\d` would also take other scripts' digits.
pub const TIMESTAMP_PATTERN: &str =
    r"(?i)([0-9]{1,2})/([0-9]{1,2})/([0-9]{2}),\s([0-9]{1,2}):([0-9]{2})\s?(am|pm)\s-\s";

/// Pattern for the `name: ` prefix of a participant message.
///
/// The name is the shortest non-empty run (newlines included) before the
/// first colon that is followed by whitespace.
pub const SENDER_PATTERN: &str = r"^([\s\S]+?):\s";

/// chrono format for a normalized timestamp header.
const TIMESTAMP_FORMAT: &str = "%d/%m/%y, %I:%M %p";

static TIMESTAMP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(TIMESTAMP_PATTERN).expect("timestamp pattern is valid"));

static SENDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SENDER_PATTERN).expect("sender pattern is valid"));

/// Compiled timestamp header regex.
pub fn timestamp_regex() -> &'static Regex {
    &TIMESTAMP_RE
}

/// The numeric parts of one timestamp header, as written in the export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimestampParts<'a> {
    pub day: &'a str,
    pub month: &'a str,
    pub year: &'a str,
    pub hour: &'a str,
    pub minute: &'a str,
    pub meridiem: &'a str,
}

impl<'a> TimestampParts<'a> {
    fn from_captures(caps: &Captures<'a>) -> Self {
        let group = |i| caps.get(i).map_or("", |m| m.as_str());
        Self {
            day: group(1),
            month: group(2),
            year: group(3),
            hour: group(4),
            minute: group(5),
            meridiem: group(6),
        }
    }

    /// Converts the parts into a calendar date-time.
    ///
    /// Two-digit years use chrono's pivot (`00`-`69` → 2000s, `70`-`99` →
    /// 1900s). Out-of-range fields (day 32, month 13, hour 0 or 13 on the
    /// 12-hour clock) are rejected.
    pub fn to_datetime(&self) -> Result<NaiveDateTime, chrono::ParseError> {
        let normalized = format!(
            "{}/{}/{}, {}:{} {}",
            self.day,
            self.month,
            self.year,
            self.hour,
            self.minute,
            self.meridiem.to_ascii_uppercase()
        );
        NaiveDateTime::parse_from_str(&normalized, TIMESTAMP_FORMAT)
    }
}

/// One timestamp header located in a transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimestampMatch<'a> {
    /// Byte offset where the header starts.
    pub start: usize,
    /// Byte offset just past the trailing `" - "`.
    pub end: usize,
    /// The header text, delimiter included.
    pub raw: &'a str,
    pub parts: TimestampParts<'a>,
}

/// Finds every timestamp header in `text`, in order.
pub fn find_timestamps(text: &str) -> impl Iterator<Item = TimestampMatch<'_>> {
    TIMESTAMP_RE.captures_iter(text).filter_map(|caps| {
        let whole = caps.get(0)?;
        Some(TimestampMatch {
            start: whole.start(),
            end: whole.end(),
            raw: whole.as_str(),
            parts: TimestampParts::from_captures(&caps),
        })
    })
}

/// Splits a message body into its sender and text.
///
/// Bodies with a `name: ` prefix belong to that participant; anything else
/// is a group notification and keeps the whole body as text.
pub fn split_sender(body: &str) -> (Sender, &str) {
    match SENDER_RE.captures(body) {
        Some(caps) => {
            let name = caps.get(1).map_or("", |m| m.as_str());
            let rest = caps.get(0).map_or(body.len(), |m| m.end());
            (Sender::participant(name), &body[rest..])
        }
        None => (Sender::SystemNotification, body),
    }
}

/// Removes the single line break that separates a body from the next header.
pub fn strip_line_break(text: &str) -> &str {
    let text = text.strip_suffix('\n').unwrap_or(text);
    text.strip_suffix('\r').unwrap_or(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    fn first(text: &str) -> TimestampMatch<'_> {
        find_timestamps(text).next().expect("timestamp")
    }

    #[test]
    fn test_find_timestamps_basic() {
        let text = "1/1/23, 10:00 am - Alice: hello\n12/11/23, 9:05 pm - Bob: hi";
        let found: Vec<_> = find_timestamps(text).collect();
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].start, 0);
        assert_eq!(found[0].raw, "1/1/23, 10:00 am - ");
        assert_eq!(found[1].parts.day, "12");
        assert_eq!(found[1].parts.month, "11");
        assert_eq!(found[1].parts.meridiem, "pm");
    }

    #[test]
    fn test_find_timestamps_case_insensitive_and_no_space() {
        assert_eq!(find_timestamps("1/1/23, 10:00 AM - x").count(), 1);
        assert_eq!(find_timestamps("1/1/23, 10:00pm - x").count(), 1);
        assert_eq!(find_timestamps("1/1/23, 10:00\u{202f}pm - x").count(), 1);
    }

    #[test]
    fn test_find_timestamps_rejects_other_formats() {
        assert_eq!(find_timestamps("[1/15/24, 10:30:45 AM] Alice: Hello").count(), 0);
        assert_eq!(find_timestamps("15.01.2024, 10:30 - Alice: Hello").count(), 0);
        assert_eq!(find_timestamps("15/01/2024, 10:30 - Alice: Hello").count(), 0);
    }

    #[test]
    fn test_find_timestamps_ascii_digits_only() {
        assert_eq!(find_timestamps("١/١/٢٣, ١٠:٠٠ am - x").count(), 0);
        assert_eq!(find_timestamps("１/１/２３, １０:００ am - x").count(), 0);
    }

    #[test]
    fn test_to_datetime_pm() {
        let dt = first("25/12/22, 11:45 pm - ").parts.to_datetime().unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2022, 12, 25));
        assert_eq!((dt.hour(), dt.minute()), (23, 45));
    }

    #[test]
    fn test_to_datetime_midnight_and_noon() {
        let midnight = first("1/1/23, 12:05 am - ").parts.to_datetime().unwrap();
        assert_eq!(midnight.hour(), 0);

        let noon = first("1/1/23, 12:05 pm - ").parts.to_datetime().unwrap();
        assert_eq!(noon.hour(), 12);
    }

    #[test]
    fn test_to_datetime_invalid_calendar() {
        assert!(first("32/1/23, 10:00 am - ").parts.to_datetime().is_err());
        assert!(first("1/13/23, 10:00 am - ").parts.to_datetime().is_err());
        assert!(first("30/2/23, 10:00 am - ").parts.to_datetime().is_err());
        assert!(first("1/1/23, 13:00 pm - ").parts.to_datetime().is_err());
        assert!(first("1/1/23, 10:61 am - ").parts.to_datetime().is_err());
    }

    #[test]
    fn test_split_sender_participant() {
        let (sender, text) = split_sender("Alice: hello: world\n");
        assert_eq!(sender, Sender::participant("Alice"));
        assert_eq!(text, "hello: world\n");
    }

    #[test]
    fn test_split_sender_phone_number() {
        let (sender, text) = split_sender("+91 98765 43210: ok");
        assert_eq!(sender, Sender::participant("+91 98765 43210"));
        assert_eq!(text, "ok");
    }

    #[test]
    fn test_split_sender_notification() {
        let (sender, text) = split_sender("Alice added Bob\n");
        assert_eq!(sender, Sender::SystemNotification);
        assert_eq!(text, "Alice added Bob\n");

        let (sender, _) = split_sender("Meeting at 10:30 today");
        assert!(sender.is_notification());
    }

    #[test]
    fn test_split_sender_requires_name() {
        let (sender, text) = split_sender(": nothing before the colon");
        assert!(sender.is_notification());
        assert_eq!(text, ": nothing before the colon");
    }

    #[test]
    fn test_strip_line_break() {
        assert_eq!(strip_line_break("hi\n"), "hi");
        assert_eq!(strip_line_break("hi\r\n"), "hi");
        assert_eq!(strip_line_break("hi\n\n"), "hi\n");
        assert_eq!(strip_line_break("hi"), "hi");
    }
}
