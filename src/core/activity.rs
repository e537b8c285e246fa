//! When people talk: busiest days, months and hours.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::filter::SenderFilter;
use crate::message::{DAY_NAMES, HourBucket, MONTH_NAMES, MessageRecord};

/// Messages attributed to one named period (a weekday or a month).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityCount {
    pub name: String,
    pub messages: usize,
}

/// Counts messages per day of the week.
///
/// All seven days are listed, busiest first; days without messages count 0.
/// Equal counts keep calendar order, Monday first.
pub fn week_activity(records: &[MessageRecord], filter: &SenderFilter) -> Vec<ActivityCount> {
    let mut counts = [0usize; 7];
    for record in filter.select(records) {
        counts[record.weekday().num_days_from_monday() as usize] += 1;
    }
    ranked(&DAY_NAMES, &counts, true)
}

/// Counts messages per month name, across all years.
///
/// Only months with at least one message are listed, busiest first. Equal
/// counts keep calendar order.
pub fn month_activity(records: &[MessageRecord], filter: &SenderFilter) -> Vec<ActivityCount> {
    let mut counts = [0usize; 12];
    for record in filter.select(records) {
        counts[(record.month() - 1) as usize] += 1;
    }
    ranked(&MONTH_NAMES, &counts, false)
}

fn ranked(names: &[&str], counts: &[usize], keep_empty: bool) -> Vec<ActivityCount> {
    let mut rows: Vec<ActivityCount> = names
        .iter()
        .zip(counts)
        .filter(|&(_, &messages)| keep_empty || messages > 0)
        .map(|(name, &messages)| ActivityCount {
            name: (*name).to_string(),
            messages,
        })
        .collect();
    rows.sort_by(|a, b| b.messages.cmp(&a.messages));
    rows
}

/// Message counts by day of week and hour of day.
///
/// Rows are the weekdays that have messages (Monday first), columns the hour
/// buckets that have messages (midnight first). Every row/column pair has a
/// cell; pairs with no messages hold 0.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Heatmap {
    /// Row labels, e.g. `Monday`.
    pub days: Vec<String>,
    /// Column labels, e.g. `11PM-12AM`.
    pub buckets: Vec<String>,
    /// `cells[row][column]`.
    pub cells: Vec<Vec<usize>>,
}

impl Heatmap {
    /// Returns the count for a day/bucket pair, or `None` if either label is
    /// not part of the table.
    pub fn get(&self, day: &str, bucket: &str) -> Option<usize> {
        let row = self.days.iter().position(|d| d == day)?;
        let column = self.buckets.iter().position(|b| b == bucket)?;
        Some(self.cells[row][column])
    }

    /// Returns `true` if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Sum of all cells.
    pub fn total(&self) -> usize {
        self.cells.iter().flatten().sum()
    }
}

/// Builds the weekday × hour-bucket activity table.
///
/// ```
/// use whatstat::core::{SenderFilter, activity_heatmap};
/// use whatstat::parser::parse;
///
/// let records = parse(
///     "2/1/23, 11:30 pm - Alice: monday night\n\
///      3/1/23, 9:00 am - Bob: tuesday morning\n",
/// )?;
/// let heatmap = activity_heatmap(&records, &SenderFilter::Overall);
///
/// assert_eq!(heatmap.days, ["Monday", "Tuesday"]);
/// assert_eq!(heatmap.buckets, ["9AM-10AM", "11PM-12AM"]);
/// assert_eq!(heatmap.get("Monday", "11PM-12AM"), Some(1));
/// assert_eq!(heatmap.get("Monday", "9AM-10AM"), Some(0));
/// # Ok::<(), whatstat::WhatstatError>(())
/// ```
pub fn activity_heatmap(records: &[MessageRecord], filter: &SenderFilter) -> Heatmap {
    let mut grid = [[0usize; 24]; 7];
    let mut days: BTreeSet<usize> = BTreeSet::new();
    let mut buckets: BTreeSet<HourBucket> = BTreeSet::new();

    for record in filter.select(records) {
        let day = record.weekday().num_days_from_monday() as usize;
        let bucket = record.hour_bucket();
        grid[day][bucket.start_hour() as usize] += 1;
        days.insert(day);
        buckets.insert(bucket);
    }

    let cells = days
        .iter()
        .map(|&day| {
            buckets
                .iter()
                .map(|bucket| grid[day][bucket.start_hour() as usize])
                .collect()
        })
        .collect();

    Heatmap {
        days: days.iter().map(|&day| DAY_NAMES[day].to_string()).collect(),
        buckets: buckets.iter().map(|bucket| bucket.label()).collect(),
        cells,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    // 2 Jan 2023 is a Monday
    const CHAT: &str = "2/1/23, 10:00 am - Alice: one\n\
                        2/1/23, 10:30 am - Bob: two\n\
                        4/1/23, 11:15 pm - Alice: three\n\
                        8/3/23, 12:10 am - Alice: four\n";

    #[test]
    fn test_week_activity_zero_filled() {
        let records = parse(CHAT).unwrap();
        let week = week_activity(&records, &SenderFilter::Overall);
        assert_eq!(week.len(), 7);
        assert_eq!(week[0].name, "Monday");
        assert_eq!(week[0].messages, 2);
        // Wednesday ties with Monday (4 Jan, 8 Mar) and follows it
        assert_eq!(week[1].name, "Wednesday");
        assert_eq!(week[1].messages, 2);
        let zeros: Vec<&str> = week
            .iter()
            .filter(|d| d.messages == 0)
            .map(|d| d.name.as_str())
            .collect();
        assert_eq!(zeros, ["Tuesday", "Thursday", "Friday", "Saturday", "Sunday"]);
    }

    #[test]
    fn test_week_activity_empty_view() {
        let week = week_activity(&[], &SenderFilter::Overall);
        assert_eq!(week.len(), 7);
        assert!(week.iter().all(|d| d.messages == 0));
        assert_eq!(week[0].name, "Monday");
    }

    #[test]
    fn test_month_activity() {
        let records = parse(CHAT).unwrap();
        let months = month_activity(&records, &SenderFilter::Overall);
        assert_eq!(
            months,
            vec![
                ActivityCount {
                    name: "January".into(),
                    messages: 3
                },
                ActivityCount {
                    name: "March".into(),
                    messages: 1
                },
            ]
        );
        assert!(month_activity(&records, &SenderFilter::participant("Zed")).is_empty());
    }

    #[test]
    fn test_heatmap_fills_missing_with_zero() {
        let records = parse(CHAT).unwrap();
        let heatmap = activity_heatmap(&records, &SenderFilter::Overall);
        assert_eq!(heatmap.days, ["Monday", "Wednesday"]);
        assert_eq!(heatmap.buckets, ["12AM-1AM", "10AM-11AM", "11PM-12AM"]);
        assert_eq!(heatmap.get("Monday", "10AM-11AM"), Some(2));
        assert_eq!(heatmap.get("Monday", "11PM-12AM"), Some(0));
        assert_eq!(heatmap.get("Wednesday", "12AM-1AM"), Some(1));
        assert_eq!(heatmap.get("Sunday", "12AM-1AM"), None);
        assert_eq!(heatmap.total(), 4);
        assert!(heatmap.cells.iter().all(|row| row.len() == heatmap.buckets.len()));
    }

    #[test]
    fn test_heatmap_empty() {
        let heatmap = activity_heatmap(&[], &SenderFilter::Overall);
        assert!(heatmap.is_empty());
        assert!(heatmap.buckets.is_empty());
        assert_eq!(heatmap.total(), 0);
    }
}
