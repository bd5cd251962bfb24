//! Horizontal multi-track timeline widget.
//!
//! The ruler and every row read their own offset back from the engine's
//! synchronizer before painting. Pointer drags and wheel scrolls are turned
//! into engine events; nothing here writes an offset directly.

use egui::{pos2, vec2, Align2, FontId, Pos2, Rect, Response, Sense, Stroke};

use super::palette::{ChipPalette, TimelinePalette};
use crate::models::scroll::DragDirection;
use crate::services::timeline::{
    PointerEvent, PointerKind, TargetKey, TimelineEngine, TimelineLayout, TrackLayout,
};

pub const LABEL_WIDTH: f32 = 170.0;
pub const RULER_HEIGHT: f32 = 26.0;
pub const ROW_HEIGHT: f32 = 34.0;
const CHIP_PADDING: f32 = 4.0;

#[derive(Debug, Default)]
pub struct TimelineViewResponse {
    /// Row (in layout order) the user clicked this frame.
    pub clicked_row: Option<usize>,
}

pub struct TimelineView<'a> {
    engine: &'a mut TimelineEngine,
    layout: &'a TimelineLayout,
    active_index: Option<usize>,
    now_offset: Option<f32>,
}

impl<'a> TimelineView<'a> {
    pub fn new(engine: &'a mut TimelineEngine, layout: &'a TimelineLayout) -> Self {
        Self {
            engine,
            layout,
            active_index: None,
            now_offset: None,
        }
    }

    pub fn active_index(mut self, active_index: Option<usize>) -> Self {
        self.active_index = active_index;
        self
    }

    /// Content offset of the current-time line, if it should be drawn.
    pub fn now_offset(mut self, now_offset: Option<f32>) -> Self {
        self.now_offset = now_offset;
        self
    }

    pub fn show(mut self, ui: &mut egui::Ui) -> TimelineViewResponse {
        let mut result = TimelineViewResponse::default();
        let layout = self.layout;
        let palette = TimelinePalette::from_visuals(ui.visuals());
        let panel_rect = ui.max_rect();
        let kind = if ui.input(|i| i.any_touches()) {
            PointerKind::Touch
        } else {
            PointerKind::Mouse
        };

        self.engine
            .set_viewport_width((ui.available_width() - LABEL_WIDTH).max(0.0));
        ui.spacing_mut().item_spacing.y = 0.0;

        let (ruler_rect, ruler_response) = ui.allocate_exact_size(
            vec2(ui.available_width(), RULER_HEIGHT),
            Sense::click_and_drag(),
        );
        self.paint_ruler(ui, ruler_rect, &palette);
        self.handle_pan(ui, &ruler_response, &TargetKey::Ruler, track_area(ruler_rect), kind);

        egui::ScrollArea::vertical()
            .id_source("timeline_rows")
            .auto_shrink([false, false])
            .drag_to_scroll(false)
            .show(ui, |ui| {
                ui.spacing_mut().item_spacing.y = 0.0;

                for (index, row) in layout.rows.iter().enumerate() {
                    let (rect, response) = ui.allocate_exact_size(
                        vec2(ui.available_width(), ROW_HEIGHT),
                        Sense::click_and_drag(),
                    );
                    let key = TargetKey::track(row.track.id.as_str());
                    let response = self.paint_row(ui, index, row, &key, rect, response, &palette);

                    if response.clicked() {
                        result.clicked_row = Some(index);
                    }
                    self.handle_pan(ui, &response, &key, track_area(rect), kind);
                }
            });

        self.end_drag_outside(ui, panel_rect);
        result
    }

    fn offset_for(&self, key: &TargetKey) -> f32 {
        self.engine
            .offset_of(key)
            .unwrap_or_else(|| self.engine.scroll_left())
    }

    fn handle_pan(
        &mut self,
        ui: &egui::Ui,
        response: &Response,
        key: &TargetKey,
        area: Rect,
        kind: PointerKind,
    ) {
        if response.drag_started() {
            let origin = ui.input(|i| i.pointer.press_origin());
            if let Some(origin) = origin.filter(|pos| area.contains(*pos)) {
                self.engine.on_pointer_down(origin.x, kind);
            }
        }

        if response.dragged() && self.engine.is_dragging() {
            if let Some(pos) = response.interact_pointer_pos() {
                self.engine.on_pointer_move(pos.x);
            }
        }

        if response.drag_stopped() && self.engine.is_dragging() {
            self.engine.on_pointer_up();
        }

        if response.hovered() && !self.engine.is_dragging() {
            let delta = ui.input(|i| i.smooth_scroll_delta.x);
            if delta != 0.0 {
                let current = self.offset_for(key);
                self.engine.on_native_scroll(key, current - delta);
            }
        }
    }

    /// Leaving the timeline or losing the button ends a drag.
    fn end_drag_outside(&mut self, ui: &egui::Ui, panel_rect: Rect) {
        if !self.engine.is_dragging() {
            return;
        }

        let (hover, primary_down) =
            ui.input(|i| (i.pointer.hover_pos(), i.pointer.primary_down()));
        if !hover.is_some_and(|pos| panel_rect.contains(pos)) {
            self.engine.on_pointer(PointerEvent::Leave);
        } else if !primary_down && !ui.input(|i| i.any_touches()) {
            self.engine.on_pointer_up();
        }
    }

    fn paint_ruler(&self, ui: &egui::Ui, rect: Rect, palette: &TimelinePalette) {
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0.0, palette.ruler_bg);

        let arrow = match self.engine.state().drag_direction {
            DragDirection::Left => Some("◀"),
            DragDirection::Right => Some("▶"),
            DragDirection::None => None,
        };
        if let Some(arrow) = arrow.filter(|_| self.engine.is_dragging()) {
            painter.text(
                pos2(rect.left() + LABEL_WIDTH - 12.0, rect.center().y),
                Align2::RIGHT_CENTER,
                arrow,
                FontId::proportional(14.0),
                palette.drag_hint,
            );
        }

        let area = track_area(rect);
        let clipped = painter.with_clip_rect(area);
        let origin_x = area.left() - self.offset_for(&TargetKey::Ruler);

        for cell in &self.layout.ruler {
            let x = origin_x + cell.left;
            clipped.vline(x, area.y_range(), Stroke::new(1.0, palette.grid_line));
            clipped.text(
                pos2(x + 4.0, area.center().y),
                Align2::LEFT_CENTER,
                &cell.label,
                FontId::proportional(11.0),
                palette.ruler_text,
            );
        }

        if let Some(now) = self.now_offset {
            clipped.circle_filled(pos2(origin_x + now, area.bottom() - 3.0), 3.0, palette.now_line);
        }

        painter.hline(rect.x_range(), rect.bottom() - 0.5, Stroke::new(1.0, palette.grid_line));
    }

    #[allow(clippy::too_many_arguments)]
    fn paint_row(
        &self,
        ui: &egui::Ui,
        index: usize,
        row: &TrackLayout,
        key: &TargetKey,
        rect: Rect,
        response: Response,
        palette: &TimelinePalette,
    ) -> Response {
        let painter = ui.painter_at(rect);
        let background = if self.active_index == Some(index) {
            palette.active_row_bg
        } else if index % 2 == 1 {
            palette.row_alt_bg
        } else {
            palette.row_bg
        };
        painter.rect_filled(rect, 0.0, background);

        let label_color = if row.track.is_placeholder() {
            palette.placeholder_text
        } else {
            palette.label_text
        };
        painter
            .with_clip_rect(Rect::from_min_size(rect.min, vec2(LABEL_WIDTH - 4.0, rect.height())))
            .text(
                pos2(rect.left() + 8.0, rect.center().y),
                Align2::LEFT_CENTER,
                &row.track.label,
                FontId::proportional(13.0),
                label_color,
            );

        let area = track_area(rect);
        let clipped = painter.with_clip_rect(area);
        let origin_x = area.left() - self.offset_for(key);

        for cell in &self.layout.ruler {
            clipped.vline(
                origin_x + cell.left,
                area.y_range(),
                Stroke::new(1.0, palette.grid_line),
            );
        }

        for chip in &row.chips {
            let chip_rect = Rect::from_min_size(
                pos2(origin_x + chip.left, area.top() + CHIP_PADDING),
                vec2(chip.width.max(1.0), ROW_HEIGHT - 2.0 * CHIP_PADDING),
            );
            if !chip_rect.intersects(area) {
                continue;
            }

            let colors = ChipPalette::from_style(&chip.style, ui.visuals());
            clipped.rect(chip_rect, 4.0, colors.fill, Stroke::new(1.0, colors.border));

            let text = if chip.label.is_empty() {
                chip.time_label.clone()
            } else {
                format!("{}  {}", chip.label, chip.time_label)
            };
            painter
                .with_clip_rect(chip_rect.shrink(2.0).intersect(area))
                .text(
                    chip_rect.left_center() + vec2(6.0, 0.0),
                    Align2::LEFT_CENTER,
                    text,
                    FontId::proportional(11.5),
                    colors.text,
                );
        }

        if let Some(now) = self.now_offset {
            let x = origin_x + now;
            clipped.line_segment(
                [pos2(x, area.top()), pos2(x, area.bottom())],
                Stroke::new(2.0, palette.now_line),
            );
        }

        painter.hline(rect.x_range(), rect.bottom() - 0.5, Stroke::new(1.0, palette.grid_line));

        self.chip_tooltip(row, origin_x, area, response)
    }

    fn chip_tooltip(&self, row: &TrackLayout, origin_x: f32, area: Rect, response: Response) -> Response {
        if self.engine.is_dragging() {
            return response;
        }

        let hovered = response
            .hover_pos()
            .filter(|pos: &Pos2| area.contains(*pos))
            .and_then(|pos| row.chip_at(pos.x - origin_x));

        match hovered {
            Some(chip) => {
                let title = if chip.label.is_empty() {
                    row.track.label.as_str()
                } else {
                    chip.label.as_str()
                };
                response.on_hover_text_at_pointer(format!(
                    "{}\n{} ({})\n{}",
                    title,
                    chip.time_label,
                    chip.duration_label,
                    chip.status.display_name()
                ))
            }
            None => response,
        }
    }
}

/// Part of a row right of the label column.
fn track_area(rect: Rect) -> Rect {
    Rect::from_min_max(pos2(rect.left() + LABEL_WIDTH, rect.top()), rect.max)
}
