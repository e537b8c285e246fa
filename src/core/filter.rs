//! Select the records an analysis looks at.
//!
//! Every aggregation runs either over the whole chat ([`SenderFilter::Overall`])
//! or over one participant ([`SenderFilter::Participant`]).
//!
//! # Examples
//!
//! ```
//! use whatstat::core::filter::SenderFilter;
//! use whatstat::parser::parse;
//!
//! let records = parse(
//!     "1/1/23, 10:00 am - Alice: hello\n\
//!      1/1/23, 10:01 am - Bob: hi\n\
//!      1/1/23, 10:02 am - Alice added Carol\n",
//! )?;
//!
//! assert_eq!(SenderFilter::Overall.select(&records).count(), 3);
//! assert_eq!(SenderFilter::participant("Alice").select(&records).count(), 1);
//! # Ok::<(), whatstat::WhatstatError>(())
//! ```
//!
//! # Behavior Notes
//!
//! - `Overall` includes group notifications
//! - `Participant` matches the sender name exactly (case-sensitive) and
//!   never selects a notification

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::message::{MessageRecord, Sender};

/// Label for the whole-chat view.
pub const OVERALL: &str = "Overall";

/// Which sender an analysis covers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SenderFilter {
    /// Every record, notifications included.
    #[default]
    Overall,
    /// Only messages written by this participant.
    Participant(String),
}

impl SenderFilter {
    /// Creates a filter for a single participant.
    pub fn participant(name: impl Into<String>) -> Self {
        SenderFilter::Participant(name.into())
    }

    /// Returns `true` for the whole-chat view.
    pub fn is_overall(&self) -> bool {
        matches!(self, SenderFilter::Overall)
    }

    /// Returns `true` if `record` belongs to this view.
    pub fn matches(&self, record: &MessageRecord) -> bool {
        match self {
            SenderFilter::Overall => true,
            SenderFilter::Participant(name) => match record.sender() {
                Sender::Participant(sender) => sender == name,
                Sender::SystemNotification => false,
            },
        }
    }

    /// Iterates over the records in this view, in transcript order.
    pub fn select<'a>(
        &'a self,
        records: &'a [MessageRecord],
    ) -> impl Iterator<Item = &'a MessageRecord> + 'a {
        records.iter().filter(move |record| self.matches(record))
    }
}

impl fmt::Display for SenderFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SenderFilter::Overall => f.write_str(OVERALL),
            SenderFilter::Participant(name) => f.write_str(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::NOTIFICATION_LABEL;
    use chrono::NaiveDate;

    fn make_record(sender: Sender) -> MessageRecord {
        let ts = NaiveDate::from_ymd_opt(2023, 1, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        MessageRecord::new(ts, sender, "text")
    }

    #[test]
    fn test_overall_includes_notifications() {
        let records = vec![
            make_record(Sender::participant("Alice")),
            make_record(Sender::SystemNotification),
        ];
        assert_eq!(SenderFilter::Overall.select(&records).count(), 2);
    }

    #[test]
    fn test_participant_filter() {
        let records = vec![
            make_record(Sender::participant("Alice")),
            make_record(Sender::participant("Bob")),
            make_record(Sender::participant("Alice")),
        ];
        let filter = SenderFilter::participant("Alice");
        assert_eq!(filter.select(&records).count(), 2);
        assert_eq!(SenderFilter::participant("alice").select(&records).count(), 0);
    }

    #[test]
    fn test_participant_filter_never_selects_notification() {
        let records = vec![
            make_record(Sender::SystemNotification),
            make_record(Sender::participant(NOTIFICATION_LABEL)),
        ];
        let filter = SenderFilter::participant(NOTIFICATION_LABEL);
        let selected: Vec<_> = filter.select(&records).collect();
        assert_eq!(selected.len(), 1);
        assert!(!selected[0].is_notification());
    }

    #[test]
    fn test_display() {
        assert_eq!(SenderFilter::Overall.to_string(), "Overall");
        assert_eq!(SenderFilter::participant("Bob").to_string(), "Bob");
        assert!(SenderFilter::default().is_overall());
    }
}
