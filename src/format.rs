//! Report rendering.
//!
//! This module turns a [`Report`] into text for a terminal or into JSON for
//! other programs. It has no CLI dependencies, so library users can render
//! reports the same way the `whatstat` binary does.
//!
//! # Example
//!
//! ```rust
//! use whatstat::config::AnalysisConfig;
//! use whatstat::core::{SenderFilter, StopWords};
//! use whatstat::format::{ReportFormat, render_report};
//! use whatstat::session::Session;
//!
//! let session = Session::from_transcript("1/1/23, 10:00 am - Alice: hello\n")?;
//! let report = session.report(
//!     &SenderFilter::Overall,
//!     &StopWords::none(),
//!     &AnalysisConfig::default(),
//! );
//!
//! let text = render_report(&report, ReportFormat::Text)?;
//! assert!(text.contains("January-2023"));
//! # Ok::<(), whatstat::WhatstatError>(())
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{ActivityCount, BusySenders, Heatmap};
use crate::error::{Result, WhatstatError};
use crate::session::Report;

/// How a report is printed.
///
/// ```rust
/// use whatstat::format::ReportFormat;
/// use std::str::FromStr;
///
/// assert_eq!(ReportFormat::from_str("JSON").unwrap(), ReportFormat::Json);
/// assert_eq!(ReportFormat::default(), ReportFormat::Text);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum ReportFormat {
    /// Aligned plain-text tables (default)
    #[default]
    Text,

    /// Pretty-printed JSON of the whole [`Report`]
    Json,
}

impl ReportFormat {
    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["text", "json"]
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "Text"),
            ReportFormat::Json => write!(f, "JSON"),
        }
    }
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                ReportFormat::all_names().join(", ")
            )),
        }
    }
}

/// Renders a report in the given format.
///
/// # Errors
///
/// Returns an error if JSON is requested without the `json-output` feature,
/// or if serialization fails.
pub fn render_report(report: &Report, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(TextReport(report).to_string()),
        #[cfg(feature = "json-output")]
        ReportFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        #[allow(unreachable_patterns)]
        _ => Err(WhatstatError::invalid_format(
            "report",
            format!("{format} output requires the 'json-output' feature to be enabled"),
        )),
    }
}

/// Plain-text view of a [`Report`].
struct TextReport<'a>(&'a Report);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;

        writeln!(f, "{}", report.view)?;
        writeln!(f, "{}", "=".repeat(report.view.chars().count()))?;
        let summary = &report.summary;
        write_table(
            f,
            None,
            &[
                ("Messages", summary.messages.to_string()),
                ("Words", summary.words.to_string()),
                ("Media shared", summary.media.to_string()),
                ("Links shared", summary.links.to_string()),
            ],
        )?;

        let monthly: Vec<_> = report
            .monthly_timeline
            .iter()
            .map(|m| (m.label.as_str(), m.messages.to_string()))
            .collect();
        write_table(f, Some("Monthly timeline"), &monthly)?;

        let daily: Vec<_> = report
            .daily_timeline
            .iter()
            .map(|d| (d.date.format("%Y-%m-%d").to_string(), d.messages.to_string()))
            .collect();
        write_table(f, Some("Daily timeline"), &daily)?;

        write_activity(f, "Most busy days", &report.week_activity)?;
        write_activity(f, "Most busy months", &report.month_activity)?;
        write_heatmap(f, &report.heatmap)?;

        if let Some(busy) = &report.busy_senders {
            write_busy_senders(f, busy)?;
        }

        writeln!(f)?;
        writeln!(f, "Word cloud")?;
        match &report.word_cloud {
            Some(cloud) => writeln!(
                f,
                "  {} distinct words, {} in total",
                cloud.frequencies.len(),
                cloud.total_tokens()
            )?,
            None => writeln!(f, "  (no words)")?,
        }

        let words: Vec<_> = report
            .common_words
            .iter()
            .map(|w| (w.word.as_str(), w.count.to_string()))
            .collect();
        write_table(f, Some("Most common words"), &words)?;

        let emoji: Vec<_> = report
            .emoji
            .iter()
            .map(|e| (e.emoji.as_str(), e.count.to_string()))
            .collect();
        write_table(f, Some("Emoji"), &emoji)
    }
}

/// Two aligned columns under an optional title.
fn write_table<K: AsRef<str>>(
    f: &mut fmt::Formatter<'_>,
    title: Option<&str>,
    rows: &[(K, String)],
) -> fmt::Result {
    writeln!(f)?;
    if let Some(title) = title {
        writeln!(f, "{title}")?;
    }
    if rows.is_empty() {
        return writeln!(f, "  (none)");
    }
    let width = rows
        .iter()
        .map(|(k, _)| k.as_ref().chars().count())
        .max()
        .unwrap_or(0);
    for (key, value) in rows {
        writeln!(f, "  {:<width$}  {value:>6}", key.as_ref())?;
    }
    Ok(())
}

fn write_activity(f: &mut fmt::Formatter<'_>, title: &str, counts: &[ActivityCount]) -> fmt::Result {
    let rows: Vec<_> = counts
        .iter()
        .map(|c| (c.name.as_str(), c.messages.to_string()))
        .collect();
    write_table(f, Some(title), &rows)
}

fn write_heatmap(f: &mut fmt::Formatter<'_>, heatmap: &Heatmap) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "Weekly activity map")?;
    if heatmap.is_empty() {
        return writeln!(f, "  (none)");
    }

    let day_width = heatmap.days.iter().map(|d| d.len()).max().unwrap_or(0);
    write!(f, "  {:day_width$}", "")?;
    for bucket in &heatmap.buckets {
        write!(f, "  {bucket}")?;
    }
    writeln!(f)?;

    for (day, row) in heatmap.days.iter().zip(&heatmap.cells) {
        write!(f, "  {day:<day_width$}")?;
        for (bucket, count) in heatmap.buckets.iter().zip(row) {
            write!(f, "  {count:>width$}", width = bucket.len())?;
        }
        writeln!(f)?;
    }
    Ok(())
}

fn write_busy_senders(f: &mut fmt::Formatter<'_>, busy: &BusySenders) -> fmt::Result {
    let top: Vec<_> = busy
        .top
        .iter()
        .map(|s| (s.name.as_str(), s.messages.to_string()))
        .collect();
    write_table(f, Some("Most busy users"), &top)?;

    let shares: Vec<_> = busy
        .shares
        .iter()
        .map(|s| (s.name.as_str(), format!("{:.2}%", s.percent)))
        .collect();
    write_table(f, Some("Share of messages"), &shares)
}
