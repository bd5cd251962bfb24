// Roster service module
// Loads the roster JSON handed over by the host, or builds a demo roster

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset, NaiveDate, Offset, Utc};

use crate::models::interval::IntervalStatus;
use crate::models::visit::{Carer, DayAvailability, RosterData, Visit, WeeklyAvailability};

/// Read a roster JSON file.
pub fn load_roster(path: &Path) -> Result<RosterData> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read roster file {}", path.display()))?;
    let roster: RosterData = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse roster file {}", path.display()))?;

    log::info!(
        "Loaded roster from {}: {} carers, {} visits",
        path.display(),
        roster.carers.len(),
        roster.visits.len()
    );
    Ok(roster)
}

fn at(date: NaiveDate, hour: u32, minute: u32) -> Option<DateTime<FixedOffset>> {
    date.and_hms_opt(hour, minute, 0)?
        .and_local_timezone(Utc.fix())
        .single()
}

fn carer(id: &str, first_name: &str, last_name: &str) -> Carer {
    Carer {
        id: id.to_string(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
    }
}

fn day(start: &str, end: &str) -> Option<DayAvailability> {
    Some(DayAvailability {
        available: true,
        start: start.to_string(),
        end: end.to_string(),
    })
}

/// A small roster around `date` for running the viewer without a file.
pub fn sample_roster(date: NaiveDate) -> RosterData {
    let carers = vec![
        carer("k1", "Amara", "Okafor"),
        carer("k2", "Liam", "Byrne"),
        carer("k3", "Sofia", "Marin"),
    ];

    // (id, client, client name, assignees, day offset, start, end, status)
    let plan: [(&str, &str, &str, &[&str], i64, (u32, u32), (u32, u32), IntervalStatus); 9] = [
        ("v1", "c1", "Margaret Hale", &["k1"], 0, (7, 30), (8, 15), IntervalStatus::Completed),
        ("v2", "c1", "Margaret Hale", &["k1", "k2"], 0, (12, 0), (12, 45), IntervalStatus::InProgress),
        ("v3", "c1", "Margaret Hale", &["k2"], 0, (18, 0), (18, 30), IntervalStatus::Upcoming),
        ("v4", "c2", "Tom Reilly", &["k3"], 0, (9, 0), (10, 30), IntervalStatus::Upcoming),
        ("v5", "c2", "Tom Reilly", &[], 0, (21, 0), (21, 30), IntervalStatus::Upcoming),
        ("v6", "c3", "Edith Crane", &["k2"], 0, (14, 15), (15, 0), IntervalStatus::Upcoming),
        ("v7", "c3", "Edith Crane", &["k1"], 1, (10, 0), (11, 0), IntervalStatus::Upcoming),
        ("v8", "c2", "Tom Reilly", &["k3"], 1, (6, 45), (7, 30), IntervalStatus::Upcoming),
        ("v9", "c1", "Margaret Hale", &["k2"], -1, (8, 0), (9, 0), IntervalStatus::Completed),
    ];

    let visits = plan
        .into_iter()
        .filter_map(|(id, client_id, client_name, assignees, offset, start, end, status)| {
            let visit_day = date + chrono::Duration::days(offset);
            Some(Visit {
                id: id.to_string(),
                client_id: client_id.to_string(),
                client_name: client_name.to_string(),
                assignees: assignees.iter().map(|a| a.to_string()).collect(),
                start: at(visit_day, start.0, start.1)?,
                end: at(visit_day, end.0, end.1)?,
                status,
            })
        })
        .collect();

    let availability = WeeklyAvailability {
        monday: day("07:30", "15:30"),
        tuesday: day("09:00", "17:00"),
        wednesday: Some(DayAvailability {
            available: false,
            start: String::new(),
            end: String::new(),
        }),
        thursday: day("12:00", "20:00"),
        friday: day("06:00", "14:00"),
        saturday: None,
        sunday: None,
    };

    RosterData {
        carers,
        visits,
        availability: Some(availability),
    }
}
