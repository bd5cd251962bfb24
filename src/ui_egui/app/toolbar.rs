use super::{TimelineApp, ViewMode};
use crate::services::grouping::GroupingMode;
use egui_extras::DatePickerButton;

impl TimelineApp {
    pub(super) fn render_toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let (previous_hint, next_hint) = match self.view_mode {
                ViewMode::Roster => ("Previous day (Ctrl+←)", "Next day (Ctrl+→)"),
                ViewMode::Availability => ("Previous week (Ctrl+←)", "Next week (Ctrl+→)"),
            };

            if ui.button("◀").on_hover_text(previous_hint).clicked() {
                self.navigate_previous();
            }
            if ui.button("Today").on_hover_text("Ctrl+T").clicked() {
                self.jump_to_today();
            }
            if ui.button("▶").on_hover_text(next_hint).clicked() {
                self.navigate_next();
            }
            ui.add(DatePickerButton::new(&mut self.current_date).id_source("timeline_date"));

            ui.separator();

            let mut view_mode = self.view_mode;
            ui.selectable_value(&mut view_mode, ViewMode::Roster, "Roster");
            ui.add_enabled_ui(self.roster.availability.is_some(), |ui| {
                ui.selectable_value(&mut view_mode, ViewMode::Availability, "Availability");
            });
            self.set_view_mode(view_mode);

            if self.view_mode == ViewMode::Roster {
                ui.separator();
                ui.label("Group by");
                for mode in [GroupingMode::ByClient, GroupingMode::ByCarer] {
                    if ui
                        .selectable_label(self.grouping == mode, mode.label())
                        .clicked()
                        && self.grouping != mode
                    {
                        self.grouping = mode;
                        self.active_index = None;
                    }
                }
            }

            ui.separator();
            match self.active_index {
                Some(index) => {
                    ui.label(format!("Row {}", index + 1));
                    if ui.small_button("✕").on_hover_text("Show all rows (Esc)").clicked() {
                        self.active_index = None;
                    }
                }
                None => {
                    ui.weak("All rows");
                }
            }
        });
    }
}
