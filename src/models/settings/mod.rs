// Settings module
// Persisted viewer settings, loaded from TOML

use serde::{Deserialize, Serialize};

use crate::models::config::TimelineConfig;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub timeline: TimelineConfig,
    /// Roster rows shown even when fewer clients/carers have visits.
    pub min_rows: usize,
    /// "compact" ("8h 30m") or "verbose" ("8 hrs 30 mins").
    pub duration_format: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            timeline: TimelineConfig::default(),
            min_rows: 30,
            duration_format: "compact".to_string(),
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), String> {
        self.timeline.validate()?;

        if self.min_rows > 500 {
            return Err(format!("min_rows must be at most 500, got {}", self.min_rows));
        }

        if self.duration_format != "compact" && self.duration_format != "verbose" {
            return Err(format!(
                "duration_format must be 'compact' or 'verbose', got '{}'",
                self.duration_format
            ));
        }

        Ok(())
    }
}
