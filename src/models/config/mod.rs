// Timeline configuration module
// Geometry and interaction constants for one rendered timeline

use serde::{Deserialize, Serialize};

pub const MINUTES_PER_HOUR: i32 = 60;

/// Geometry and interaction settings for one timeline render pass.
///
/// Owned by the host screen and treated as immutable while a frame is being
/// laid out. Every field has a serde default so partial TOML files load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    /// Pixels per hour column.
    pub hour_width: f32,
    /// Hours on the canvas.
    pub hours_per_day: u32,
    /// Hour shown at the left edge of the canvas.
    pub day_start_hour: u32,
    /// Gap left of the earliest event when auto-scrolling.
    pub scroll_margin: f32,
    /// Clock hour to show when a selection has no events.
    pub fallback_hour: u32,
    /// Scroll pixels per pointer pixel while dragging.
    pub drag_multiplier: f32,
    /// Keep the scroll offset inside the content bounds.
    pub clamp_scroll: bool,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            hour_width: 100.0,
            hours_per_day: 24,
            day_start_hour: 0,
            scroll_margin: 60.0,
            fallback_hour: 8,
            drag_multiplier: 2.0,
            clamp_scroll: true,
        }
    }
}

impl TimelineConfig {
    /// Config with a custom hour width and defaults for everything else.
    pub fn with_hour_width(hour_width: f32) -> Self {
        Self {
            hour_width,
            ..Self::default()
        }
    }

    /// Number of minutes spanned by the canvas.
    pub fn minutes_per_day(&self) -> i32 {
        self.hours_per_day as i32 * MINUTES_PER_HOUR
    }

    /// Minute of day at the left edge of the canvas.
    pub fn day_start_minute(&self) -> i32 {
        self.day_start_hour as i32 * MINUTES_PER_HOUR
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !(self.hour_width.is_finite() && self.hour_width > 0.0) {
            return Err(format!("hour_width must be positive, got {}", self.hour_width));
        }

        if self.hours_per_day == 0 || self.hours_per_day > 24 {
            return Err(format!(
                "hours_per_day must be between 1 and 24, got {}",
                self.hours_per_day
            ));
        }

        if self.day_start_hour >= 24 {
            return Err(format!(
                "day_start_hour must be below 24, got {}",
                self.day_start_hour
            ));
        }

        let last_hour = self.day_start_hour + self.hours_per_day;
        if self.fallback_hour < self.day_start_hour || self.fallback_hour >= last_hour {
            return Err(format!(
                "fallback_hour must be on the canvas ({}..{}), got {}",
                self.day_start_hour, last_hour, self.fallback_hour
            ));
        }

        if !(self.scroll_margin.is_finite() && self.scroll_margin >= 0.0) {
            return Err("scroll_margin cannot be negative".to_string());
        }

        if !(self.drag_multiplier.is_finite() && self.drag_multiplier > 0.0) {
            return Err("drag_multiplier must be positive".to_string());
        }

        Ok(())
    }
}
