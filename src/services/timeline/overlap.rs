//! Opt-in overlap detection.
//!
//! Placement assumes intervals on one track never overlap and does not check.
//! Hosts that cannot guarantee it run their data through [`IntervalSet::validated`]
//! first; overlaps are reported and logged, never rejected.

use std::collections::HashMap;

use crate::models::interval::TimeInterval;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlapReport {
    pub track_id: String,
    /// Indices into the validated slice, `first` starts no later than `second`.
    pub first: usize,
    pub second: usize,
    pub overlap_minutes: i32,
}

/// All overlapping pairs per track. Malformed intervals are skipped and
/// touching intervals (`a.end == b.start`) do not count.
pub fn find_overlaps(intervals: &[TimeInterval]) -> Vec<OverlapReport> {
    let mut by_track: HashMap<&str, Vec<usize>> = HashMap::new();
    for (index, interval) in intervals.iter().enumerate() {
        if interval.is_well_formed() {
            by_track.entry(interval.track_id.as_str()).or_default().push(index);
        }
    }

    let mut reports = Vec::new();
    for (track_id, mut indices) in by_track {
        indices.sort_by_key(|&index| (intervals[index].start_minute, index));

        for (position, &first) in indices.iter().enumerate() {
            let a = &intervals[first];
            for &second in &indices[position + 1..] {
                let b = &intervals[second];
                if b.start_minute >= a.end_minute {
                    break;
                }
                reports.push(OverlapReport {
                    track_id: track_id.to_string(),
                    first,
                    second,
                    overlap_minutes: a
                        .end_minute
                        .min(b.end_minute)
                        .saturating_sub(b.start_minute),
                });
            }
        }
    }

    reports.sort_by(|a, b| {
        a.track_id
            .cmp(&b.track_id)
            .then(a.first.cmp(&b.first))
            .then(a.second.cmp(&b.second))
    });
    reports
}

/// Intervals tagged with whether they went through overlap validation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IntervalSet {
    intervals: Vec<TimeInterval>,
    validated: bool,
}

impl IntervalSet {
    /// Wrap intervals without checking them.
    pub fn unchecked(intervals: Vec<TimeInterval>) -> Self {
        Self {
            intervals,
            validated: false,
        }
    }

    /// Run the overlap check, log every finding, and tag the set.
    pub fn validated(intervals: Vec<TimeInterval>) -> (Self, Vec<OverlapReport>) {
        let reports = find_overlaps(&intervals);
        for report in &reports {
            log::warn!(
                "Overlapping intervals on track '{}': #{} and #{} share {} minutes",
                report.track_id,
                report.first,
                report.second,
                report.overlap_minutes
            );
        }
        (
            Self {
                intervals,
                validated: true,
            },
            reports,
        )
    }

    pub fn is_validated(&self) -> bool {
        self.validated
    }

    pub fn as_slice(&self) -> &[TimeInterval] {
        &self.intervals
    }

    pub fn into_inner(self) -> Vec<TimeInterval> {
        self.intervals
    }
}
