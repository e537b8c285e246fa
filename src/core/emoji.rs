//! Emoji usage.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::filter::SenderFilter;
use super::rank::rank_by_frequency;
use crate::message::MessageRecord;

/// One emoji codepoint: pictographs, skin-tone modifiers and the regional
/// indicator letters that make up flags.
///
/// Keycap bases (`0-9`, `#`, `*`) carry the `Emoji` property too, so the
/// narrower `Extended_Pictographic` class is used instead.
pub const EMOJI_PATTERN: &str =
    r"[\p{Extended_Pictographic}\p{Emoji_Modifier}\p{Regional_Indicator}]";

static EMOJI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMOJI_PATTERN).expect("emoji pattern is valid"));

/// How often an emoji was used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiCount {
    pub emoji: String,
    pub count: usize,
}

/// Returns `true` if `c` is an emoji on its own.
///
/// Multi-codepoint sequences (skin tones, ZWJ families) are counted per
/// codepoint, so their parts show up separately.
pub fn is_emoji(c: char) -> bool {
    let mut buf = [0u8; 4];
    EMOJI_RE.is_match(c.encode_utf8(&mut buf))
}

/// Counts every emoji in the view, most used first.
///
/// Equal counts keep the order in which the emoji first appear.
///
/// ```
/// use whatstat::core::{SenderFilter, emoji_frequency};
/// use whatstat::parser::parse;
///
/// let records = parse("1/1/23, 10:00 am - Alice: 🎉 party 😀🎉\n")?;
/// let emoji = emoji_frequency(&records, &SenderFilter::Overall);
///
/// assert_eq!(emoji[0].emoji, "🎉");
/// assert_eq!(emoji[0].count, 2);
/// assert_eq!(emoji[1].emoji, "😀");
/// # Ok::<(), whatstat::WhatstatError>(())
/// ```
pub fn emoji_frequency(records: &[MessageRecord], filter: &SenderFilter) -> Vec<EmojiCount> {
    let found = filter
        .select(records)
        .flat_map(|record| EMOJI_RE.find_iter(record.text()))
        .map(|m| m.as_str());

    rank_by_frequency(found)
        .into_iter()
        .map(|(emoji, count)| EmojiCount {
            emoji: emoji.to_string(),
            count,
        })
        .collect()
}
