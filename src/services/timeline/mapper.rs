//! Minute-of-day to pixel conversion.
//!
//! Everything here is pure. Minutes outside the visible canvas are clamped to
//! its edges, so an interval that starts before midnight or runs past the end
//! of the day is truncated rather than rejected.

use chrono::{DateTime, NaiveDateTime, NaiveTime, Timelike};

use super::error::{TimelineError, TimelineResult};
use crate::models::config::{TimelineConfig, MINUTES_PER_HOUR};

/// One hour column of the ruler header.
#[derive(Debug, Clone, PartialEq)]
pub struct RulerCell {
    pub hour: u32,
    pub left: f32,
    pub width: f32,
    pub label: String,
}

/// Canvas-relative minute, clamped to `[0, minutes_per_day]`.
pub fn clamp_minute(minute_of_day: i32, config: &TimelineConfig) -> i32 {
    minute_of_day
        .saturating_sub(config.day_start_minute())
        .clamp(0, config.minutes_per_day())
}

/// Horizontal offset of a minute of day.
pub fn pixel_offset(minute_of_day: i32, config: &TimelineConfig) -> f32 {
    clamp_minute(minute_of_day, config) as f32 / MINUTES_PER_HOUR as f32 * config.hour_width
}

/// Width between two minutes of day; 0 when `end <= start` after clamping.
pub fn pixel_width(start_minute: i32, end_minute: i32, config: &TimelineConfig) -> f32 {
    let start = clamp_minute(start_minute, config);
    let end = clamp_minute(end_minute, config);
    if end <= start {
        return 0.0;
    }
    (end - start) as f32 / MINUTES_PER_HOUR as f32 * config.hour_width
}

pub fn hour_column_width(config: &TimelineConfig) -> f32 {
    config.hour_width
}

/// Full canvas width.
pub fn content_width(config: &TimelineConfig) -> f32 {
    config.hours_per_day as f32 * config.hour_width
}

/// Minute of day under a horizontal content offset.
pub fn minute_at_offset(offset: f32, config: &TimelineConfig) -> i32 {
    let canvas_minute = (offset / config.hour_width * MINUTES_PER_HOUR as f32).floor() as i32;
    canvas_minute.clamp(0, config.minutes_per_day()) + config.day_start_minute()
}

pub fn minute_of_day(time: NaiveTime) -> i32 {
    time.hour() as i32 * MINUTES_PER_HOUR + time.minute() as i32
}

/// Offset of the "now" line, `None` when the time is off the canvas.
pub fn now_indicator_offset(time: NaiveTime, config: &TimelineConfig) -> Option<f32> {
    let minutes = time.hour() as f32 * MINUTES_PER_HOUR as f32
        + time.minute() as f32
        + time.second() as f32 / 60.0
        - config.day_start_minute() as f32;
    if minutes < 0.0 || minutes > config.minutes_per_day() as f32 {
        return None;
    }
    Some(minutes / MINUTES_PER_HOUR as f32 * config.hour_width)
}

/// Parse "HH:MM" (seconds optional) into a minute of day. "24:00" is
/// accepted as the end of the day.
pub fn parse_clock(value: &str) -> TimelineResult<i32> {
    let invalid = || TimelineError::InvalidClock(value.to_string());
    let mut parts = value.trim().split(':');

    let hour: i32 = parts
        .next()
        .and_then(|h| h.trim().parse().ok())
        .ok_or_else(invalid)?;
    let minute: i32 = parts
        .next()
        .and_then(|m| m.trim().parse().ok())
        .ok_or_else(invalid)?;
    if let Some(seconds) = parts.next() {
        let seconds: i32 = seconds.trim().parse().map_err(|_| invalid())?;
        if !(0..60).contains(&seconds) {
            return Err(invalid());
        }
    }
    if parts.next().is_some() {
        return Err(invalid());
    }

    if !(0..60).contains(&minute) || !(0..=24).contains(&hour) || (hour == 24 && minute != 0) {
        return Err(invalid());
    }

    Ok(hour * MINUTES_PER_HOUR + minute)
}

/// Minute of day of an ISO-8601 timestamp, read in the timestamp's own
/// offset. Timestamps without an offset are read as written.
pub fn minute_of_day_from_iso(value: &str) -> TimelineResult<i32> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value.trim()) {
        return Ok(minute_of_day(parsed.time()));
    }

    NaiveDateTime::parse_from_str(value.trim(), "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(value.trim(), "%Y-%m-%dT%H:%M"))
        .map(|parsed| minute_of_day(parsed.time()))
        .map_err(|err| TimelineError::InvalidTimestamp {
            value: value.to_string(),
            reason: err.to_string(),
        })
}

/// "HH:MM" for a minute of day; 1440 renders as "24:00".
pub fn format_clock(minute_of_day: i32) -> String {
    let minute_of_day = minute_of_day.clamp(0, 24 * MINUTES_PER_HOUR);
    format!(
        "{:02}:{:02}",
        minute_of_day / MINUTES_PER_HOUR,
        minute_of_day % MINUTES_PER_HOUR
    )
}

/// One identically sized cell per canvas hour.
pub fn ruler_cells(config: &TimelineConfig) -> Vec<RulerCell> {
    let width = hour_column_width(config);
    (0..config.hours_per_day)
        .map(|index| {
            let hour = (config.day_start_hour + index) % 24;
            RulerCell {
                hour,
                left: index as f32 * width,
                width,
                label: format!("{:02}:00", hour),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn config() -> TimelineConfig {
        TimelineConfig::default()
    }

    #[test]
    fn test_offset_of_day_bounds() {
        assert_eq!(pixel_offset(0, &config()), 0.0);
        assert_eq!(pixel_offset(1440, &config()), 2400.0);
        assert_eq!(content_width(&config()), 2400.0);
    }

    #[test]
    fn test_offset_clamps_out_of_range_minutes() {
        assert_eq!(pixel_offset(-90, &config()), 0.0);
        assert_eq!(pixel_offset(1500, &config()), 2400.0);
    }

    #[test]
    fn test_extreme_minutes_clamp() {
        let shifted = TimelineConfig {
            day_start_hour: 6,
            hours_per_day: 18,
            ..TimelineConfig::default()
        };
        assert_eq!(clamp_minute(i32::MIN, &shifted), 0);
        assert_eq!(clamp_minute(i32::MAX, &shifted), 1080);
        assert_eq!(pixel_width(i32::MIN, i32::MAX, &config()), 2400.0);
    }

    #[test]
    fn test_nine_to_five() {
        let config = config();
        assert_eq!(pixel_offset(540, &config), 900.0);
        assert_eq!(pixel_width(540, 1020, &config), 800.0);
    }

    #[test]
    fn test_width_of_reversed_interval_is_zero() {
        assert_eq!(pixel_width(600, 300, &config()), 0.0);
        assert_eq!(pixel_width(600, 600, &config()), 0.0);
    }

    #[test]
    fn test_width_truncated_at_midnight() {
        // 23:00 to 01:00 next day is cut at the canvas edge
        assert_eq!(pixel_width(1380, 1500, &config()), 100.0);
    }

    #[test]
    fn test_day_start_hour_shifts_canvas() {
        let config = TimelineConfig {
            day_start_hour: 6,
            hours_per_day: 18,
            ..TimelineConfig::default()
        };
        assert_eq!(pixel_offset(360, &config), 0.0);
        assert_eq!(pixel_offset(480, &config), 200.0);
        assert_eq!(minute_at_offset(200.0, &config), 480);
        let cells = ruler_cells(&config);
        assert_eq!(cells.len(), 18);
        assert_eq!(cells[0].label, "06:00");
    }

    #[test]
    fn test_ruler_cells_are_uniform() {
        let cells = ruler_cells(&config());
        assert_eq!(cells.len(), 24);
        assert!(cells.iter().all(|cell| cell.width == 100.0));
        assert_eq!(cells[13].left, 1300.0);
        assert_eq!(cells[13].label, "13:00");
    }

    #[test]
    fn test_minute_at_offset_inverts_offset() {
        let config = config();
        assert_eq!(minute_at_offset(pixel_offset(450, &config), &config), 450);
        assert_eq!(minute_at_offset(-20.0, &config), 0);
    }

    #[test_case("09:00", 540)]
    #[test_case("7:30", 450)]
    #[test_case("17:45:00", 1065)]
    #[test_case("00:00", 0)]
    #[test_case("24:00", 1440)]
    fn test_parse_clock(input: &str, expected: i32) {
        assert_eq!(parse_clock(input), Ok(expected));
    }

    #[test_case("")]
    #[test_case("9")]
    #[test_case("nine:00")]
    #[test_case("12:60")]
    #[test_case("24:30")]
    #[test_case("25:00")]
    #[test_case("10:00:00:00")]
    fn test_parse_clock_rejects(input: &str) {
        assert!(matches!(parse_clock(input), Err(TimelineError::InvalidClock(_))));
    }

    #[test]
    fn test_iso_uses_own_offset() {
        assert_eq!(minute_of_day_from_iso("2025-03-10T07:30:00+05:00"), Ok(450));
        assert_eq!(minute_of_day_from_iso("2025-03-10T07:30:00Z"), Ok(450));
        assert_eq!(minute_of_day_from_iso("2025-03-10T18:05:00"), Ok(1085));
        assert!(minute_of_day_from_iso("yesterday").is_err());
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(545), "09:05");
        assert_eq!(format_clock(1440), "24:00");
    }

    #[test]
    fn test_now_indicator() {
        let config = config();
        let noon = NaiveTime::from_hms_opt(12, 30, 0).unwrap();
        assert_eq!(now_indicator_offset(noon, &config), Some(1250.0));

        let late_start = TimelineConfig {
            day_start_hour: 14,
            hours_per_day: 10,
            ..TimelineConfig::default()
        };
        assert_eq!(now_indicator_offset(noon, &late_start), None);
    }
}
