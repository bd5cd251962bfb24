//! Status bar: date, row and chip counts, scroll position and auto-scroll
//! state.

use super::TimelineApp;
use crate::services::timeline::TimelineLayout;
use egui::RichText;

impl TimelineApp {
    pub(super) fn render_status_bar(&self, ui: &mut egui::Ui, layout: &TimelineLayout) {
        let rows = layout
            .rows
            .iter()
            .filter(|row| !row.track.is_placeholder())
            .count();
        let chips: usize = layout.rows.iter().map(|row| row.chips.len()).sum();
        let hidden: usize = layout.rows.iter().map(|row| row.suppressed).sum();

        ui.horizontal(|ui| {
            ui.label(self.current_date.format("%A %-d %B %Y").to_string());
            ui.separator();
            ui.label(format!("{} rows, {} visits", rows, chips));
            if hidden > 0 {
                ui.label(RichText::new(format!("{} hidden", hidden)).weak())
                    .on_hover_text("Intervals that are malformed or outside the day");
            }
            ui.separator();
            ui.label(format!("{:.0}px", self.engine.scroll_left()));
            if !self.engine.anchor().is_enabled() {
                ui.weak("auto-scroll paused");
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.weak("Drag or ←/→ to pan, Home/End to jump");
            });
        });
    }
}
