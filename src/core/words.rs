//! Word frequencies.
//!
//! Both the word-cloud source and the most-common-words table look at the
//! same tokens: lower-cased, whitespace-separated words from participant
//! messages, with group notifications, media placeholders and stop-words
//! removed.
//!
//! # Example
//!
//! ```
//! use whatstat::core::{SenderFilter, StopWords, most_common_words};
//! use whatstat::parser::parse;
//!
//! let records = parse(
//!     "1/1/23, 10:00 am - Alice: Pizza tonight?\n\
//!      1/1/23, 10:01 am - Bob: pizza pizza\n",
//! )?;
//! let stop_words = StopWords::from_list("tonight?");
//! let top = most_common_words(&records, &SenderFilter::Overall, &stop_words, 20);
//!
//! assert_eq!(top[0].word, "pizza");
//! assert_eq!(top[0].count, 3);
//! # Ok::<(), whatstat::WhatstatError>(())
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::filter::SenderFilter;
use super::rank::rank_by_frequency;
use crate::error::Result;
use crate::message::MessageRecord;

/// Default stop-word list, one word per line.
const DEFAULT_STOP_WORDS: &str = include_str!("../../resources/stop_words.txt");

/// Words left out of frequency statistics.
///
/// Lists are plain text with one word per line. Words are compared
/// lower-cased; blank lines are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// Creates an empty list: every word counts.
    pub fn none() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    /// Parses a newline-separated list.
    pub fn from_list(list: &str) -> Self {
        Self {
            words: list
                .lines()
                .map(str::trim)
                .filter(|word| !word.is_empty())
                .map(str::to_lowercase)
                .collect(),
        }
    }

    /// Reads a list from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let list = fs::read_to_string(path)?;
        Ok(Self::from_list(&list))
    }

    /// Returns `true` if `word` (already lower-cased) is a stop-word.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopWords {
    /// The built-in English and Hinglish list.
    fn default() -> Self {
        Self::from_list(DEFAULT_STOP_WORDS)
    }
}

/// How often a word occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Token frequencies for rendering a word cloud.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCloud {
    /// Every distinct token, most frequent first.
    pub frequencies: Vec<WordCount>,
}

impl WordCloud {
    /// Total number of tokens, counting repeats.
    pub fn total_tokens(&self) -> usize {
        self.frequencies.iter().map(|w| w.count).sum()
    }
}

fn tokens<'a>(
    records: &'a [MessageRecord],
    filter: &'a SenderFilter,
    stop_words: &'a StopWords,
) -> impl Iterator<Item = String> + 'a {
    filter
        .select(records)
        .filter(|record| !record.is_notification() && !record.is_media())
        .flat_map(|record| {
            record
                .text()
                .to_lowercase()
                .split_whitespace()
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .filter(move |word| !stop_words.contains(word))
}

fn ranked_words(
    records: &[MessageRecord],
    filter: &SenderFilter,
    stop_words: &StopWords,
) -> Vec<WordCount> {
    rank_by_frequency(tokens(records, filter, stop_words))
        .into_iter()
        .map(|(word, count)| WordCount { word, count })
        .collect()
}

/// Collects the tokens for a word cloud.
///
/// Returns `None` when the view has nothing to draw: no eligible messages,
/// or every token was a stop-word. An empty cloud is never returned.
pub fn word_cloud_source(
    records: &[MessageRecord],
    filter: &SenderFilter,
    stop_words: &StopWords,
) -> Option<WordCloud> {
    let frequencies = ranked_words(records, filter, stop_words);
    if frequencies.is_empty() {
        return None;
    }
    Some(WordCloud { frequencies })
}

/// The `limit` most frequent words, most frequent first.
///
/// Equal counts keep the order in which the words first appear.
pub fn most_common_words(
    records: &[MessageRecord],
    filter: &SenderFilter,
    stop_words: &StopWords,
    limit: usize,
) -> Vec<WordCount> {
    let mut words = ranked_words(records, filter, stop_words);
    words.truncate(limit);
    words
}
