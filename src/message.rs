//! Parsed message records.
//!
//! This module provides [`MessageRecord`], one message from a WhatsApp
//! transcript, together with the [`Sender`] that wrote it and the
//! [`HourBucket`] it falls into.
//!
//! Every calendar field used by the aggregations is derived once, when the
//! record is built, and never changes afterwards.
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use whatstat::{HourBucket, MessageRecord, Sender};
//!
//! let ts = NaiveDate::from_ymd_opt(2023, 1, 1)
//!     .unwrap()
//!     .and_hms_opt(23, 15, 0)
//!     .unwrap();
//! let record = MessageRecord::new(ts, Sender::participant("Alice"), "late night");
//!
//! assert_eq!(record.day_name(), "Sunday");
//! assert_eq!(record.month_name(), "January");
//! assert_eq!(record.hour_bucket(), HourBucket::new(23));
//! assert_eq!(record.hour_bucket().to_string(), "11PM-12AM");
//! ```

use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike, Weekday};

/// Display name used for group notifications in tabular output.
pub const NOTIFICATION_LABEL: &str = "group_notification";

/// Text WhatsApp writes in place of an attachment when media is left out of
/// the export.
pub const MEDIA_OMITTED: &str = "<Media omitted>";

/// English day names, Monday first.
pub const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// English month names, January first.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Returns the English name of a weekday.
pub fn day_name(weekday: Weekday) -> &'static str {
    DAY_NAMES[weekday.num_days_from_monday() as usize]
}

/// Returns the English name of a month number (1-12).
///
/// # Panics
///
/// Panics if `month` is outside 1..=12.
pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES[(month - 1) as usize]
}

/// Who wrote a message.
///
/// Group events such as "Alice added Bob" carry no `name: ` prefix in the
/// export and are represented by [`Sender::SystemNotification`]. Keeping the
/// sentinel as its own variant means a participant whose display name happens
/// to be `group_notification` is still a participant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sender {
    /// A human participant, identified by the name or phone number shown in
    /// the export.
    Participant(String),
    /// A system or group event with no human sender.
    SystemNotification,
}

impl Sender {
    /// Creates a participant sender.
    pub fn participant(name: impl Into<String>) -> Self {
        Sender::Participant(name.into())
    }

    /// Returns the participant name, or `None` for notifications.
    pub fn name(&self) -> Option<&str> {
        match self {
            Sender::Participant(name) => Some(name),
            Sender::SystemNotification => None,
        }
    }

    /// Returns `true` for system notifications.
    pub fn is_notification(&self) -> bool {
        matches!(self, Sender::SystemNotification)
    }
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sender::Participant(name) => f.write_str(name),
            Sender::SystemNotification => f.write_str(NOTIFICATION_LABEL),
        }
    }
}

/// A one-hour time-of-day range, such as `11PM-12AM`.
///
/// The bucket is identified by its starting hour (0-23). The end label is
/// `(hour + 1) mod 24`, so hour 23 closes at `12AM` rather than hour 24.
/// Buckets order by starting hour.
///
/// Hours are not zero-padded (`9AM-10AM`, `12AM-1AM`, never `12AM-01AM`), so
/// every label reads the same way as the midnight and noon buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HourBucket(u32);

impl HourBucket {
    /// Creates the bucket starting at `hour`. Hours wrap modulo 24.
    pub fn new(hour: u32) -> Self {
        Self(hour % 24)
    }

    /// Starting hour on a 24-hour clock.
    pub fn start_hour(self) -> u32 {
        self.0
    }

    /// Ending hour on a 24-hour clock.
    pub fn end_hour(self) -> u32 {
        (self.0 + 1) % 24
    }

    /// The `{start}-{end}` label.
    pub fn label(self) -> String {
        self.to_string()
    }
}

fn twelve_hour(hour: u32) -> (u32, &'static str) {
    match hour {
        0 => (12, "AM"),
        1..=11 => (hour, "AM"),
        12 => (12, "PM"),
        _ => (hour - 12, "PM"),
    }
}

impl fmt::Display for HourBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (start, start_meridiem) = twelve_hour(self.start_hour());
        let (end, end_meridiem) = twelve_hour(self.end_hour());
        write!(f, "{start}{start_meridiem}-{end}{end_meridiem}")
    }
}

/// One message parsed from a transcript.
///
/// Records are built by [`parse`](crate::parser::parse) and are read-only
/// afterwards: the derived calendar fields always agree with
/// [`timestamp`](Self::timestamp).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageRecord {
    timestamp: NaiveDateTime,
    sender: Sender,
    text: String,
    date: NaiveDate,
    weekday: Weekday,
    hour_bucket: HourBucket,
}

impl MessageRecord {
    /// Creates a record and derives its calendar fields.
    pub fn new(timestamp: NaiveDateTime, sender: Sender, text: impl Into<String>) -> Self {
        Self {
            timestamp,
            sender,
            text: text.into(),
            date: timestamp.date(),
            weekday: timestamp.weekday(),
            hour_bucket: HourBucket::new(timestamp.hour()),
        }
    }

    /// When the message was sent, in the exporter's local time.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Who sent the message.
    pub fn sender(&self) -> &Sender {
        &self.sender
    }

    /// Message body without the timestamp and sender prefix.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Calendar date without the time of day.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// Month number, 1-12.
    pub fn month(&self) -> u32 {
        self.date.month()
    }

    pub fn month_name(&self) -> &'static str {
        month_name(self.month())
    }

    /// Day of month, 1-31.
    pub fn day(&self) -> u32 {
        self.date.day()
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    pub fn day_name(&self) -> &'static str {
        day_name(self.weekday)
    }

    /// Hour on a 24-hour clock.
    pub fn hour(&self) -> u32 {
        self.timestamp.hour()
    }

    pub fn minute(&self) -> u32 {
        self.timestamp.minute()
    }

    pub fn hour_bucket(&self) -> HourBucket {
        self.hour_bucket
    }

    /// Returns `true` if the record is a group notification.
    pub fn is_notification(&self) -> bool {
        self.sender.is_notification()
    }

    /// Returns `true` if the text is the media placeholder.
    pub fn is_media(&self) -> bool {
        self.text.trim() == MEDIA_OMITTED
    }
}
