//! Rule policy settings.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Tunable constants of the ward rules.
///
/// Defaults are the ward policy. Missing JSON fields fall back to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    /// Days blacked out after a 12h block (0 disables).
    pub twelve_hour_rest_days: usize,
    /// Days blacked out after a 24h block (0 disables).
    pub twenty_four_blackout_days: usize,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            twelve_hour_rest_days: 1,
            twenty_four_blackout_days: 3,
        }
    }
}

impl RuleConfig {
    /// Parses settings from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Sets the 12h blackout length.
    pub fn with_twelve_hour_rest_days(mut self, days: usize) -> Self {
        self.twelve_hour_rest_days = days;
        self
    }

    /// Sets the 24h blackout length.
    pub fn with_twenty_four_blackout_days(mut self, days: usize) -> Self {
        self.twenty_four_blackout_days = days;
        self
    }
}
