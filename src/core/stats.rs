//! Headline counts and sender rankings.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::filter::SenderFilter;
use super::rank::rank_by_frequency;
use crate::message::MessageRecord;

/// Pattern for links shared in message text.
pub const LINK_PATTERN: &str = r"(?i)\b(?:https?://|www\.)\S+";

static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(LINK_PATTERN).expect("link pattern is valid"));

/// Headline numbers for one view of the chat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Summary {
    /// Number of messages, notifications included in the overall view.
    pub messages: usize,
    /// Whitespace-separated tokens across all text, media placeholders
    /// excluded.
    pub words: usize,
    /// Messages that are only the media placeholder.
    pub media: usize,
    /// URLs found anywhere in the text.
    pub links: usize,
}

/// Counts messages, words, media placeholders and links.
///
/// # Example
///
/// ```
/// use whatstat::core::{SenderFilter, summarize};
/// use whatstat::parser::parse;
///
/// let records = parse(
///     "1/1/23, 10:00 am - Alice: see https://example.com\n\
///      1/1/23, 10:02 am - Alice: <Media omitted>\n",
/// )?;
/// let summary = summarize(&records, &SenderFilter::Overall);
///
/// assert_eq!(summary.messages, 2);
/// assert_eq!(summary.words, 2);
/// assert_eq!(summary.media, 1);
/// assert_eq!(summary.links, 1);
/// # Ok::<(), whatstat::WhatstatError>(())
/// ```
pub fn summarize(records: &[MessageRecord], filter: &SenderFilter) -> Summary {
    filter
        .select(records)
        .fold(Summary::default(), |mut summary, record| {
            summary.messages += 1;
            if record.is_media() {
                summary.media += 1;
            } else {
                summary.words += word_count(record.text());
            }
            summary.links += count_links(record.text());
            summary
        })
}

/// Number of whitespace-separated tokens in `text`.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Number of URLs in `text`.
pub fn count_links(text: &str) -> usize {
    LINK_RE.find_iter(text).count()
}

/// Messages sent by one participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SenderCount {
    pub name: String,
    pub messages: usize,
}

/// One participant's share of all participant messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SenderShare {
    pub name: String,
    /// Percentage rounded to two decimals.
    pub percent: f64,
}

/// The most active participants of a chat.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BusySenders {
    /// The busiest participants, at most `limit` of them.
    pub top: Vec<SenderCount>,
    /// Every participant with their share of messages.
    pub shares: Vec<SenderShare>,
}

/// Ranks participants by message count.
///
/// Only meaningful for the overall view, so it takes no filter. Group
/// notifications are not counted, and percentages are relative to
/// participant messages only. Equal counts keep the order in which the
/// senders first appear.
pub fn most_busy_senders(records: &[MessageRecord], limit: usize) -> BusySenders {
    let ranked = rank_by_frequency(records.iter().filter_map(|r| r.sender().name()));
    let total: usize = ranked.iter().map(|(_, count)| count).sum();

    let shares = ranked
        .iter()
        .map(|&(name, count)| SenderShare {
            name: name.to_string(),
            percent: round2(count as f64 / total as f64 * 100.0),
        })
        .collect();

    let top = ranked
        .into_iter()
        .take(limit)
        .map(|(name, messages)| SenderCount {
            name: name.to_string(),
            messages,
        })
        .collect();

    BusySenders { top, shares }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
