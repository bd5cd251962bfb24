//! Track building from roster data.
//!
//! Groups visits into one track per client or per carer, and expands a weekly
//! availability pattern into seven day tracks. Bad records are skipped with a
//! log line; they never stop the rest of the roster from being built.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde_json::json;

use crate::models::interval::{IntervalStatus, TimeInterval};
use crate::models::track::Track;
use crate::models::visit::{Carer, Visit, WeeklyAvailability};
use crate::services::timeline::mapper::{minute_of_day, parse_clock};
use crate::utils::date::{day_label, week_days};

/// Minimum row count the roster calendar shows.
pub const ROSTER_MIN_ROWS: usize = 30;

const ABSENT_START: i32 = 9 * 60;
const ABSENT_END: i32 = 17 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroupingMode {
    #[default]
    ByClient,
    ByCarer,
}

impl GroupingMode {
    pub fn label(&self) -> &'static str {
        match self {
            Self::ByClient => "Client",
            Self::ByCarer => "Carer",
        }
    }
}

/// Tracks plus the intervals placed on them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupedRoster {
    pub tracks: Vec<Track>,
    pub intervals: Vec<TimeInterval>,
}

/// Visits whose start falls on `date`.
pub fn visits_on(visits: &[Visit], date: NaiveDate) -> Vec<Visit> {
    visits.iter().filter(|visit| visit.date() == date).cloned().collect()
}

/// Longest visit length kept, in minutes. Anything past the next day is
/// off the canvas anyway.
const MAX_VISIT_MINUTES: i64 = 2 * 24 * 60;

/// Start and end minute of a visit on its start day. A visit running past
/// midnight keeps its real length (capped at two days) and is truncated
/// later by the mapper.
pub fn visit_minutes(visit: &Visit) -> (i32, i32) {
    let start = minute_of_day(visit.start.time());
    let length = (visit.end - visit.start)
        .num_minutes()
        .clamp(0, MAX_VISIT_MINUTES) as i32;
    (start, start + length)
}

fn carer_names(visit: &Visit, carers: &HashMap<&str, &Carer>) -> String {
    let names: Vec<String> = visit
        .assignees
        .iter()
        .map(|id| match carers.get(id.as_str()) {
            Some(carer) => carer.full_name(),
            None => "Unassigned".to_string(),
        })
        .collect();

    match names.as_slice() {
        [] => "Unassigned".to_string(),
        [only] => only.clone(),
        [first, second, ..] => format!("{} & {}", first, second),
    }
}

fn visit_interval(visit: &Visit, track_id: &str, label: String) -> TimeInterval {
    let (start, end) = visit_minutes(visit);
    TimeInterval::new(track_id, start, end, visit.status.clone())
        .with_label(label)
        .with_payload(json!({
            "visit_id": visit.id,
            "client_id": visit.client_id,
            "assignees": visit.assignees,
        }))
}

/// One track per client or per known carer, in order of first appearance.
pub fn group_visits(visits: &[Visit], carers: &[Carer], mode: GroupingMode) -> GroupedRoster {
    let carer_index: HashMap<&str, &Carer> =
        carers.iter().map(|carer| (carer.id.as_str(), carer)).collect();

    let mut roster = GroupedRoster::default();
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut add_track = |roster: &mut GroupedRoster, id: &str, label: String| {
        if !seen.contains_key(id) {
            let order = roster.tracks.len();
            seen.insert(id.to_string(), order);
            roster.tracks.push(Track::new(id, label, order as u32));
        }
    };

    for visit in visits {
        match mode {
            GroupingMode::ByClient => {
                if visit.client_id.is_empty() {
                    log::debug!("Visit {} has no client, skipped", visit.id);
                    continue;
                }
                add_track(&mut roster, &visit.client_id, visit.client_name.clone());
                let label = carer_names(visit, &carer_index);
                roster
                    .intervals
                    .push(visit_interval(visit, &visit.client_id, label));
            }
            GroupingMode::ByCarer => {
                for carer_id in &visit.assignees {
                    let Some(carer) = carer_index.get(carer_id.as_str()) else {
                        log::debug!("Visit {} assigned to unknown carer {}", visit.id, carer_id);
                        continue;
                    };
                    add_track(&mut roster, carer_id, carer.full_name());
                    roster
                        .intervals
                        .push(visit_interval(visit, carer_id, visit.client_name.clone()));
                }
            }
        }
    }

    roster
}

/// Append empty placeholder rows until there are at least `min_rows`.
pub fn pad_tracks(tracks: &mut Vec<Track>, min_rows: usize) {
    let next_order = tracks.iter().map(|track| track.order + 1).max().unwrap_or(0);
    let missing = min_rows.saturating_sub(tracks.len());
    tracks.extend((0..missing).map(|offset| Track::placeholder(next_order + offset as u32)));
}

/// Seven day tracks (Monday first) for the week containing `date`.
///
/// Unavailable days get an absent block from 09:00 to 17:00; days without
/// any entry get no interval at all.
pub fn availability_tracks(week: &WeeklyAvailability, date: NaiveDate) -> GroupedRoster {
    let mut roster = GroupedRoster::default();

    for (index, (day, entry)) in week_days(date).into_iter().zip(week.days()).enumerate() {
        let track_id = day.format("%Y-%m-%d").to_string();
        roster
            .tracks
            .push(Track::new(track_id.as_str(), day_label(day), index as u32));

        let Some(entry) = entry else {
            continue;
        };

        if !entry.available {
            roster.intervals.push(
                TimeInterval::new(track_id.as_str(), ABSENT_START, ABSENT_END, IntervalStatus::Absent)
                    .with_label("Not available"),
            );
            continue;
        }

        match (parse_clock(&entry.start), parse_clock(&entry.end)) {
            (Ok(start), Ok(end)) => roster.intervals.push(
                TimeInterval::new(track_id.as_str(), start, end, IntervalStatus::Available)
                    .with_label(WeeklyAvailability::DAY_NAMES[index]),
            ),
            (Err(err), _) | (_, Err(err)) => {
                log::warn!(
                    "Skipping availability for {}: {}",
                    WeeklyAvailability::DAY_NAMES[index],
                    err
                );
            }
        }
    }

    roster
}
