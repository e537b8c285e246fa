//! Message counts over time.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::filter::SenderFilter;
use crate::message::{MessageRecord, month_name};

/// Messages sent in one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyCount {
    pub year: i32,
    /// Month number, 1-12.
    pub month: u32,
    /// `"MonthName-Year"`, e.g. `January-2023`.
    pub label: String,
    pub messages: usize,
}

/// Messages sent on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub messages: usize,
}

/// Counts messages per month, oldest month first.
///
/// Months without messages are not listed.
///
/// ```
/// use whatstat::core::{SenderFilter, monthly_timeline};
/// use whatstat::parser::parse;
///
/// let records = parse(
///     "3/2/23, 9:00 am - Bob: later\n\
///      15/1/23, 9:00 am - Alice: earlier\n",
/// )?;
/// let labels: Vec<_> = monthly_timeline(&records, &SenderFilter::Overall)
///     .into_iter()
///     .map(|m| m.label)
///     .collect();
/// assert_eq!(labels, ["January-2023", "February-2023"]);
/// # Ok::<(), whatstat::WhatstatError>(())
/// ```
pub fn monthly_timeline(records: &[MessageRecord], filter: &SenderFilter) -> Vec<MonthlyCount> {
    let mut months: BTreeMap<(i32, u32), usize> = BTreeMap::new();
    for record in filter.select(records) {
        *months.entry((record.year(), record.month())).or_default() += 1;
    }

    months
        .into_iter()
        .map(|((year, month), messages)| MonthlyCount {
            year,
            month,
            label: format!("{}-{}", month_name(month), year),
            messages,
        })
        .collect()
}

/// Counts messages per day, oldest day first.
///
/// Days without messages are not listed.
pub fn daily_timeline(records: &[MessageRecord], filter: &SenderFilter) -> Vec<DailyCount> {
    let mut days: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for record in filter.select(records) {
        *days.entry(record.date()).or_default() += 1;
    }

    days.into_iter()
        .map(|(date, messages)| DailyCount { date, messages })
        .collect()
}
