//! Interval placement.
//!
//! Turns the intervals of each track into positioned, styled chips. Labels are
//! built from minute counts only, never from parsed locale strings.

use std::collections::HashMap;

use super::mapper::{self, RulerCell};
use super::style::{style_for_status, ChipStyle};
use crate::models::config::{TimelineConfig, MINUTES_PER_HOUR};
use crate::models::interval::{IntervalStatus, TimeInterval};
use crate::models::track::{sort_tracks, Track};

/// Rendered form of one interval.
#[derive(Debug, Clone, PartialEq)]
pub struct Chip {
    pub track_id: String,
    /// Index of the interval in the caller's slice.
    pub source_index: usize,
    pub start_minute: i32,
    pub end_minute: i32,
    pub left: f32,
    pub width: f32,
    pub status: IntervalStatus,
    pub style: ChipStyle,
    pub label: String,
    pub time_label: String,
    pub duration_label: String,
}

impl Chip {
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn contains_offset(&self, offset: f32) -> bool {
        offset >= self.left && offset < self.right()
    }
}

/// Chips of one track, ordered by start.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackLayout {
    pub track: Track,
    pub chips: Vec<Chip>,
    /// Intervals dropped because they were malformed or off the canvas.
    pub suppressed: usize,
}

impl TrackLayout {
    pub fn is_empty(&self) -> bool {
        self.chips.is_empty()
    }

    pub fn chip_at(&self, offset: f32) -> Option<&Chip> {
        self.chips.iter().find(|chip| chip.contains_offset(offset))
    }
}

/// Everything needed to draw one timeline frame.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineLayout {
    pub ruler: Vec<RulerCell>,
    pub rows: Vec<TrackLayout>,
    pub content_width: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DurationStyle {
    /// "8h 30m"
    #[default]
    Compact,
    /// "8 hrs 30 mins"
    Verbose,
}

pub fn format_duration(minutes: i32, style: DurationStyle) -> String {
    let minutes = minutes.max(0);
    let hours = minutes / MINUTES_PER_HOUR;
    let mins = minutes % MINUTES_PER_HOUR;

    match style {
        DurationStyle::Compact => format!("{}h {}m", hours, mins),
        DurationStyle::Verbose => {
            if hours == 0 {
                format!("{} mins", mins)
            } else if mins == 0 {
                format!("{} hrs", hours)
            } else {
                format!("{} hrs {} mins", hours, mins)
            }
        }
    }
}

/// "09:00–17:00"
pub fn time_label(start_minute: i32, end_minute: i32) -> String {
    format!(
        "{}\u{2013}{}",
        mapper::format_clock(start_minute),
        mapper::format_clock(end_minute)
    )
}

/// Place one interval, `None` when it would not be visible.
pub fn place_interval(
    source_index: usize,
    interval: &TimeInterval,
    config: &TimelineConfig,
    duration_style: DurationStyle,
) -> Option<Chip> {
    if !interval.is_well_formed() {
        log::debug!(
            "Skipping malformed interval on track '{}': {} >= {}",
            interval.track_id,
            interval.start_minute,
            interval.end_minute
        );
        return None;
    }

    let width = mapper::pixel_width(interval.start_minute, interval.end_minute, config);
    if width <= 0.0 {
        log::debug!(
            "Skipping interval on track '{}' outside the visible day",
            interval.track_id
        );
        return None;
    }

    Some(Chip {
        track_id: interval.track_id.clone(),
        source_index,
        start_minute: interval.start_minute,
        end_minute: interval.end_minute,
        left: mapper::pixel_offset(interval.start_minute, config),
        width,
        status: interval.status.clone(),
        style: style_for_status(&interval.status),
        label: interval.label.clone(),
        time_label: time_label(interval.start_minute, interval.end_minute),
        duration_label: format_duration(interval.duration_minutes(), duration_style),
    })
}

fn place_indexed<'a>(
    track: &Track,
    intervals: impl IntoIterator<Item = (usize, &'a TimeInterval)>,
    config: &TimelineConfig,
    duration_style: DurationStyle,
) -> TrackLayout {
    let mut chips = Vec::new();
    let mut suppressed = 0;

    for (index, interval) in intervals {
        match place_interval(index, interval, config, duration_style) {
            Some(chip) => chips.push(chip),
            None => suppressed += 1,
        }
    }

    chips.sort_by_key(|chip| chip.start_minute);

    TrackLayout {
        track: track.clone(),
        chips,
        suppressed,
    }
}

/// Chips for a single track. Intervals that belong to other tracks are
/// ignored; the input is never modified.
pub fn place_track(
    track: &Track,
    intervals: &[TimeInterval],
    config: &TimelineConfig,
    duration_style: DurationStyle,
) -> TrackLayout {
    place_indexed(
        track,
        intervals
            .iter()
            .enumerate()
            .filter(|(_, interval)| interval.track_id == track.id),
        config,
        duration_style,
    )
}

/// Lay out every track plus the ruler. Rows follow `Track::order`.
pub fn layout_timeline(
    tracks: &[Track],
    intervals: &[TimeInterval],
    config: &TimelineConfig,
    duration_style: DurationStyle,
) -> TimelineLayout {
    let mut by_track: HashMap<&str, Vec<(usize, &TimeInterval)>> = HashMap::new();
    for (index, interval) in intervals.iter().enumerate() {
        by_track
            .entry(interval.track_id.as_str())
            .or_default()
            .push((index, interval));
    }

    let mut ordered = tracks.to_vec();
    sort_tracks(&mut ordered);

    let rows: Vec<TrackLayout> = ordered
        .iter()
        .map(|track| {
            let bucket = by_track.remove(track.id.as_str()).unwrap_or_default();
            place_indexed(track, bucket, config, duration_style)
        })
        .collect();

    let orphaned: usize = by_track.values().map(Vec::len).sum();
    if orphaned > 0 {
        log::debug!("{} intervals reference tracks that are not shown", orphaned);
    }

    TimelineLayout {
        ruler: mapper::ruler_cells(config),
        rows,
        content_width: mapper::content_width(config),
    }
}
