//! Configuration for building reports.
//!
//! # Example
//!
//! ```rust
//! use whatstat::config::AnalysisConfig;
//!
//! let config = AnalysisConfig::new()
//!     .with_top_words(10)
//!     .with_top_senders(3);
//!
//! assert_eq!(config.top_words, 10);
//! ```

use serde::{Deserialize, Serialize};

/// Size limits for the ranked tables in a [`Report`](crate::session::Report).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Number of entries in the most-common-words table (default: 20)
    pub top_words: usize,

    /// Number of entries in the busiest-senders chart (default: 5)
    pub top_senders: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_words: 20,
            top_senders: 5,
        }
    }
}

impl AnalysisConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the size of the most-common-words table.
    #[must_use]
    pub fn with_top_words(mut self, count: usize) -> Self {
        self.top_words = count;
        self
    }

    /// Sets the size of the busiest-senders chart.
    #[must_use]
    pub fn with_top_senders(mut self, count: usize) -> Self {
        self.top_senders = count;
        self
    }
}
