// Visit module
// Roster visits and weekly availability as delivered by the host screens

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::interval::IntervalStatus;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Carer {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
}

impl Carer {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A scheduled care visit, timestamps carry their own UTC offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Visit {
    pub id: String,
    pub client_id: String,
    pub client_name: String,
    #[serde(default)]
    pub assignees: Vec<String>,
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
    pub status: IntervalStatus,
}

impl Visit {
    pub fn date(&self) -> NaiveDate {
        self.start.date_naive()
    }
}

/// Availability for a single weekday.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayAvailability {
    pub available: bool,
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub end: String,
}

/// Recurring Monday-first availability pattern of one employee.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeeklyAvailability {
    pub monday: Option<DayAvailability>,
    pub tuesday: Option<DayAvailability>,
    pub wednesday: Option<DayAvailability>,
    pub thursday: Option<DayAvailability>,
    pub friday: Option<DayAvailability>,
    pub saturday: Option<DayAvailability>,
    pub sunday: Option<DayAvailability>,
}

impl WeeklyAvailability {
    pub const DAY_NAMES: [&'static str; 7] = [
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
        "Sunday",
    ];

    /// Days in Monday-first order.
    pub fn days(&self) -> [Option<&DayAvailability>; 7] {
        [
            self.monday.as_ref(),
            self.tuesday.as_ref(),
            self.wednesday.as_ref(),
            self.thursday.as_ref(),
            self.friday.as_ref(),
            self.saturday.as_ref(),
            self.sunday.as_ref(),
        ]
    }
}

/// Everything the desktop viewer loads from a roster JSON file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterData {
    pub carers: Vec<Carer>,
    pub visits: Vec<Visit>,
    pub availability: Option<WeeklyAvailability>,
}
