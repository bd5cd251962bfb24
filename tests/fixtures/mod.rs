// Test fixtures - reusable test data
// Provides consistent tracks, intervals and roster data across test files

#![allow(dead_code)]

use chrono::NaiveDate;
use roster_timeline::models::interval::{IntervalStatus, TimeInterval};
use roster_timeline::models::track::Track;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Monday Mar 10, 2025
    pub fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    /// Tuesday Mar 11, 2025
    pub fn tuesday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 11).unwrap()
    }
}

/// Sample tracks for testing
pub mod tracks {
    use super::*;

    /// Three employees in display order
    pub fn employees() -> Vec<Track> {
        vec![
            Track::new("emp-1", "Amara Okafor", 0),
            Track::new("emp-2", "Liam Byrne", 1),
            Track::new("emp-3", "Sofia Marin", 2),
        ]
    }
}

/// Sample intervals for testing
pub mod intervals {
    use super::*;

    /// One shift per employee, the second one starting earliest
    pub fn shifts() -> Vec<TimeInterval> {
        vec![
            TimeInterval::new("emp-1", 540, 1020, IntervalStatus::Available).with_label("Day shift"),
            TimeInterval::new("emp-2", 450, 720, IntervalStatus::Completed).with_label("Early"),
            TimeInterval::new("emp-3", 780, 1260, IntervalStatus::Upcoming).with_label("Late"),
        ]
    }

    /// Nine to five on `track`
    pub fn nine_to_five(track: &str) -> TimeInterval {
        TimeInterval::new(track, 540, 1020, IntervalStatus::Available)
    }

    /// End before start
    pub fn malformed(track: &str) -> TimeInterval {
        TimeInterval::new(track, 600, 300, IntervalStatus::Upcoming)
    }
}

/// Roster JSON as the host screens deliver it
pub const ROSTER_JSON: &str = r#"{
    "carers": [
        { "id": "k1", "first_name": "Grace", "last_name": "Hopper" },
        { "id": "k2", "first_name": "Alan", "last_name": "Turing" }
    ],
    "visits": [
        {
            "id": "v1",
            "client_id": "c1",
            "client_name": "Margaret Hale",
            "assignees": ["k1", "k2"],
            "start": "2025-03-10T07:30:00+00:00",
            "end": "2025-03-10T08:15:00+00:00",
            "status": "completed"
        },
        {
            "id": "v2",
            "client_id": "c2",
            "client_name": "Tom Reilly",
            "assignees": ["k2"],
            "start": "2025-03-10T10:00:00+01:00",
            "end": "2025-03-10T11:30:00+01:00",
            "status": "In-Progress"
        },
        {
            "id": "v3",
            "client_id": "c1",
            "client_name": "Margaret Hale",
            "start": "2025-03-11T09:00:00+00:00",
            "end": "2025-03-11T09:30:00+00:00",
            "status": "cancelled"
        }
    ],
    "availability": {
        "monday": { "available": true, "start": "08:00", "end": "16:00" },
        "tuesday": { "available": false }
    }
}"#;
