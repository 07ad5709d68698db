//! Slot-suggestion configuration.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::{EventFlowError, Result};
use crate::time::parse_time;

/// Hourly starts from 09:00 through 17:00, a typical campus operating day.
pub const DEFAULT_SLOT_STARTS: [&str; 9] = [
    "09:00", "10:00", "11:00", "12:00", "13:00", "14:00", "15:00", "16:00", "17:00",
];

pub const DEFAULT_MAX_SUGGESTIONS: usize = 3;

/// Candidate start times and result cap for the slot suggester.
///
/// Loaded from TOML:
///
/// ```toml
/// slot_starts = ["08:00", "12:00", "18:00"]
/// max_suggestions = 2
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// `HH:MM` start times, tried in the order given.
    #[serde(default = "default_slot_starts")]
    pub slot_starts: Vec<String>,

    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,
}

fn default_slot_starts() -> Vec<String> {
    DEFAULT_SLOT_STARTS.iter().map(|s| s.to_string()).collect()
}

fn default_max_suggestions() -> usize {
    DEFAULT_MAX_SUGGESTIONS
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            slot_starts: default_slot_starts(),
            max_suggestions: default_max_suggestions(),
        }
    }
}

impl SchedulerConfig {
    /// Parse and validate a TOML document. Missing keys fall back to defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: SchedulerConfig =
            toml::from_str(s).map_err(|e| EventFlowError::Config(e.to_string()))?;
        config.slot_grid()?;
        Ok(config)
    }

    /// Builder: replace the candidate start times.
    pub fn with_slot_starts<I, S>(mut self, starts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.slot_starts = starts.into_iter().map(Into::into).collect();
        self
    }

    /// Builder: set the suggestion cap.
    pub fn with_max_suggestions(mut self, max: usize) -> Self {
        self.max_suggestions = max;
        self
    }

    /// The configured start times, parsed.
    pub fn slot_grid(&self) -> Result<Vec<NaiveTime>> {
        self.slot_starts.iter().map(|s| parse_time(s)).collect()
    }
}
