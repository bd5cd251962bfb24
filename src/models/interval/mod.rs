// Interval module
// Visit, availability slot or attendance record placed on a track

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::services::timeline::error::TimelineError;
use crate::services::timeline::mapper::parse_clock;

/// Visual category of an interval.
///
/// Parsing never fails: unknown status strings are kept as `Other` and
/// render with the neutral style.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum IntervalStatus {
    Available,
    Absent,
    Completed,
    InProgress,
    Upcoming,
    Other(String),
}

impl IntervalStatus {
    pub fn parse(value: &str) -> Self {
        let normalized = value.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        match normalized.as_str() {
            "available" => Self::Available,
            "absent" => Self::Absent,
            "completed" => Self::Completed,
            "in-progress" | "inprogress" => Self::InProgress,
            "upcoming" => Self::Upcoming,
            _ => Self::Other(value.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Available => "available",
            Self::Absent => "absent",
            Self::Completed => "completed",
            Self::InProgress => "in-progress",
            Self::Upcoming => "upcoming",
            Self::Other(value) => value,
        }
    }

    /// Title-cased label, e.g. "In progress".
    pub fn display_name(&self) -> String {
        let text = self.as_str().replace('-', " ");
        let mut chars = text.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        }
    }
}

impl From<String> for IntervalStatus {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<IntervalStatus> for String {
    fn from(value: IntervalStatus) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for IntervalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One time interval on a track, in minutes of day.
///
/// `start_minute < end_minute` is expected but not enforced here; the
/// placement engine suppresses intervals that break it. Intervals on the
/// same track are assumed not to overlap, see
/// [`crate::services::timeline::overlap`] for the opt-in check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeInterval {
    pub track_id: String,
    pub start_minute: i32,
    pub end_minute: i32,
    pub status: IntervalStatus,
    #[serde(default)]
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<serde_json::Value>,
}

impl TimeInterval {
    pub fn new(
        track_id: impl Into<String>,
        start_minute: i32,
        end_minute: i32,
        status: IntervalStatus,
    ) -> Self {
        Self {
            track_id: track_id.into(),
            start_minute,
            end_minute,
            status,
            label: String::new(),
            payload: None,
        }
    }

    /// Build an interval from "HH:MM" clock strings.
    ///
    /// # Examples
    /// ```
    /// use roster_timeline::models::interval::{IntervalStatus, TimeInterval};
    ///
    /// let shift = TimeInterval::from_clock("carer-1", "09:00", "17:30", IntervalStatus::Upcoming).unwrap();
    /// assert_eq!(shift.start_minute, 540);
    /// assert_eq!(shift.end_minute, 1050);
    /// ```
    pub fn from_clock(
        track_id: impl Into<String>,
        start: &str,
        end: &str,
        status: IntervalStatus,
    ) -> Result<Self, TimelineError> {
        Ok(Self::new(track_id, parse_clock(start)?, parse_clock(end)?, status))
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_payload(mut self, payload: serde_json::Value) -> Self {
        self.payload = Some(payload);
        self
    }

    pub fn is_well_formed(&self) -> bool {
        self.start_minute < self.end_minute
    }

    pub fn duration_minutes(&self) -> i32 {
        self.end_minute.saturating_sub(self.start_minute).max(0)
    }

    /// Strict overlap; touching intervals do not overlap.
    pub fn overlaps(&self, other: &TimeInterval) -> bool {
        self.start_minute < other.end_minute && other.start_minute < self.end_minute
    }
}
