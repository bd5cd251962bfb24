use egui::Color32;

use crate::services::timeline::{ChipStyle, RgbaColor};

fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

fn blend(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let lerp = |c1: u8, c2: u8| -> u8 { ((c1 as f32 * (1.0 - t)) + (c2 as f32 * t)).round() as u8 };
    Color32::from_rgb(lerp(a.r(), b.r()), lerp(a.g(), b.g()), lerp(a.b(), b.b()))
}

pub(crate) fn color32(color: RgbaColor) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}

#[derive(Clone, Copy)]
pub(crate) struct ChipPalette {
    pub fill: Color32,
    pub border: Color32,
    pub text: Color32,
}

impl ChipPalette {
    /// Status colours are tuned for a light background; dark mode mutes the
    /// fill towards the panel colour and keeps the border as the accent.
    pub fn from_style(style: &ChipStyle, visuals: &egui::Visuals) -> Self {
        let fill = color32(style.background);
        let border = color32(style.border);
        if visuals.dark_mode {
            Self {
                fill: blend(visuals.panel_fill, border, 0.35),
                border,
                text: Color32::WHITE,
            }
        } else {
            Self {
                fill,
                border,
                text: color32(style.text),
            }
        }
    }
}

#[derive(Clone, Copy)]
pub(crate) struct TimelinePalette {
    pub ruler_bg: Color32,
    pub ruler_text: Color32,
    pub grid_line: Color32,
    pub row_bg: Color32,
    pub row_alt_bg: Color32,
    pub active_row_bg: Color32,
    pub label_text: Color32,
    pub placeholder_text: Color32,
    pub now_line: Color32,
    pub drag_hint: Color32,
}

impl TimelinePalette {
    pub fn from_visuals(visuals: &egui::Visuals) -> Self {
        let base = visuals.panel_fill;
        let text = visuals.text_color();
        let accent = visuals.selection.bg_fill;

        Self {
            ruler_bg: blend(base, text, 0.06),
            ruler_text: blend(text, base, 0.3),
            grid_line: with_alpha(text, if visuals.dark_mode { 40 } else { 28 }),
            row_bg: base,
            row_alt_bg: blend(base, text, 0.03),
            active_row_bg: with_alpha(accent, 60),
            label_text: text,
            placeholder_text: blend(text, base, 0.6),
            now_line: Color32::from_rgb(255, 100, 100),
            drag_hint: with_alpha(accent, 200),
        }
    }
}
