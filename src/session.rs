//! One analysis session: a parsed transcript and the reports built from it.
//!
//! A [`Session`] owns the records of a single transcript. It is built once,
//! never modified, and handed by reference to every aggregation. Loading a
//! new transcript means building a new session.
//!
//! # Example
//!
//! ```rust
//! use whatstat::config::AnalysisConfig;
//! use whatstat::core::StopWords;
//! use whatstat::session::Session;
//!
//! let session = Session::from_transcript(
//!     "1/1/23, 10:00 am - Alice: hello\n\
//!      1/1/23, 10:01 am - Bob: hi there\n",
//! )?;
//! assert_eq!(session.participants(), ["Alice", "Bob"]);
//!
//! let filter = session.select("Bob")?;
//! let report = session.report(&filter, &StopWords::none(), &AnalysisConfig::default());
//! assert_eq!(report.summary.messages, 1);
//! assert!(report.busy_senders.is_none());
//! # Ok::<(), whatstat::WhatstatError>(())
//! ```

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::AnalysisConfig;
use crate::core::filter::OVERALL;
use crate::core::{
    ActivityCount, BusySenders, DailyCount, EmojiCount, Heatmap, MonthlyCount, SenderFilter,
    StopWords, Summary, WordCloud, WordCount, activity_heatmap, daily_timeline, emoji_frequency,
    month_activity, monthly_timeline, most_busy_senders, most_common_words, summarize,
    week_activity, word_cloud_source,
};
use crate::error::{Result, WhatstatError};
use crate::message::MessageRecord;
use crate::parser::{TranscriptParser, parse};

/// Parsed records of one transcript.
#[derive(Debug, Clone, Default)]
pub struct Session {
    records: Vec<MessageRecord>,
}

impl Session {
    /// Wraps already-parsed records.
    pub fn new(records: Vec<MessageRecord>) -> Self {
        Self { records }
    }

    /// Parses transcript text into a session.
    pub fn from_transcript(raw: &str) -> Result<Self> {
        Ok(Self::new(parse(raw)?))
    }

    /// Reads and parses a transcript file.
    pub fn open(path: &Path) -> Result<Self> {
        Ok(Self::new(TranscriptParser::new().parse_file(path)?))
    }

    pub fn records(&self) -> &[MessageRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct participant names, sorted. Notifications are not listed.
    pub fn participants(&self) -> Vec<&str> {
        self.records
            .iter()
            .filter_map(|record| record.sender().name())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// The views a user can pick from: overall first, then each participant.
    pub fn sender_options(&self) -> Vec<SenderFilter> {
        std::iter::once(SenderFilter::Overall)
            .chain(self.participants().into_iter().map(SenderFilter::participant))
            .collect()
    }

    /// Resolves a view name chosen by the user.
    ///
    /// `"Overall"` selects the whole chat; any other name must be a
    /// participant of this transcript. `"Overall"` always wins, so a
    /// participant whose display name is literally `Overall` has no view of
    /// their own.
    pub fn select(&self, name: &str) -> Result<SenderFilter> {
        if name == OVERALL {
            return Ok(SenderFilter::Overall);
        }
        if self.participants().contains(&name) {
            Ok(SenderFilter::participant(name))
        } else {
            Err(WhatstatError::unknown_participant(name))
        }
    }

    /// Runs every aggregation for one view.
    pub fn report(
        &self,
        filter: &SenderFilter,
        stop_words: &StopWords,
        config: &AnalysisConfig,
    ) -> Report {
        let records = self.records();
        debug!(view = %filter, records = records.len(), "building report");

        Report {
            view: filter.to_string(),
            summary: summarize(records, filter),
            monthly_timeline: monthly_timeline(records, filter),
            daily_timeline: daily_timeline(records, filter),
            week_activity: week_activity(records, filter),
            month_activity: month_activity(records, filter),
            heatmap: activity_heatmap(records, filter),
            busy_senders: filter
                .is_overall()
                .then(|| most_busy_senders(records, config.top_senders)),
            word_cloud: word_cloud_source(records, filter, stop_words),
            common_words: most_common_words(records, filter, stop_words, config.top_words),
            emoji: emoji_frequency(records, filter),
        }
    }
}

/// Every statistic for one view of a chat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// `Overall` or the participant name.
    pub view: String,
    pub summary: Summary,
    pub monthly_timeline: Vec<MonthlyCount>,
    pub daily_timeline: Vec<DailyCount>,
    pub week_activity: Vec<ActivityCount>,
    pub month_activity: Vec<ActivityCount>,
    pub heatmap: Heatmap,
    /// Only present for the overall view.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub busy_senders: Option<BusySenders>,
    /// `None` when there are no words to draw.
    pub word_cloud: Option<WordCloud>,
    pub common_words: Vec<WordCount>,
    pub emoji: Vec<EmojiCount>,
}
