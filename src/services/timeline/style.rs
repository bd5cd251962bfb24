//! Status colours for interval chips.
//!
//! A closed table keyed by [`IntervalStatus`]; anything outside it renders
//! with the neutral style instead of failing.

use serde::{Deserialize, Serialize};

use crate::models::interval::IntervalStatus;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RgbaColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl RgbaColor {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }
}

/// Background, border and text colour of one chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChipStyle {
    pub background: RgbaColor,
    pub border: RgbaColor,
    pub text: RgbaColor,
}

impl ChipStyle {
    const fn new(background: RgbaColor, border: RgbaColor, text: RgbaColor) -> Self {
        Self {
            background,
            border,
            text,
        }
    }
}

// Green
pub const AVAILABLE_STYLE: ChipStyle = ChipStyle::new(
    RgbaColor::rgb(0xd4, 0xed, 0xda),
    RgbaColor::rgb(0x28, 0xa7, 0x45),
    RgbaColor::rgb(0x15, 0x57, 0x24),
);

// Amber
pub const ABSENT_STYLE: ChipStyle = ChipStyle::new(
    RgbaColor::rgb(0xff, 0xf8, 0xe6),
    RgbaColor::rgb(0xff, 0xe2, 0x9a),
    RgbaColor::rgb(0xb0, 0x93, 0x4a),
);

// Violet
pub const COMPLETED_STYLE: ChipStyle = ChipStyle::new(
    RgbaColor::rgb(0xf0, 0xe9, 0xff),
    RgbaColor::rgb(0x8b, 0x4c, 0xff),
    RgbaColor::rgb(0x8b, 0x4c, 0xff),
);

// Magenta
pub const IN_PROGRESS_STYLE: ChipStyle = ChipStyle::new(
    RgbaColor::rgb(0xfe, 0xef, 0xff),
    RgbaColor::rgb(0xf0, 0x42, 0xff),
    RgbaColor::rgb(0xf0, 0x42, 0xff),
);

// Blue
pub const UPCOMING_STYLE: ChipStyle = ChipStyle::new(
    RgbaColor::rgb(0xdb, 0xea, 0xfe),
    RgbaColor::rgb(0x3b, 0x82, 0xf6),
    RgbaColor::rgb(0x1e, 0x40, 0xaf),
);

// Grey
pub const NEUTRAL_STYLE: ChipStyle = ChipStyle::new(
    RgbaColor::rgb(0xf3, 0xf4, 0xf6),
    RgbaColor::rgb(0x9c, 0xa3, 0xaf),
    RgbaColor::rgb(0x37, 0x41, 0x51),
);

pub fn style_for_status(status: &IntervalStatus) -> ChipStyle {
    match status {
        IntervalStatus::Available => AVAILABLE_STYLE,
        IntervalStatus::Absent => ABSENT_STYLE,
        IntervalStatus::Completed => COMPLETED_STYLE,
        IntervalStatus::InProgress => IN_PROGRESS_STYLE,
        IntervalStatus::Upcoming => UPCOMING_STYLE,
        IntervalStatus::Other(_) => NEUTRAL_STYLE,
    }
}
