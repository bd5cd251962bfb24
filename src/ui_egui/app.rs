mod navigation;
mod shortcuts;
mod status_bar;
mod toolbar;

use chrono::{Local, NaiveDate};

use crate::models::config::TimelineConfig;
use crate::models::settings::Settings;
use crate::models::visit::RosterData;
use crate::services::grouping::{
    availability_tracks, group_visits, pad_tracks, visits_on, GroupedRoster, GroupingMode,
};
use crate::services::timeline::mapper::now_indicator_offset;
use crate::services::timeline::placement::DurationStyle;
use crate::services::timeline::{Selection, TimelineEngine};
use crate::ui_egui::views::timeline_view::TimelineView;

/// Idle repaint interval so the current-time line keeps moving.
const NOW_LINE_REFRESH: std::time::Duration = std::time::Duration::from_secs(30);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Roster,
    Availability,
}

pub struct TimelineApp {
    settings: Settings,
    roster: RosterData,
    engine: TimelineEngine,
    current_date: NaiveDate,
    view_mode: ViewMode,
    grouping: GroupingMode,
    /// Selected row in layout order; `None` means all rows.
    active_index: Option<usize>,
    /// Last inputs the auto-scroll anchor saw.
    anchored: Option<(Selection, ViewMode, GroupingMode)>,
    window_focused: bool,
}

impl eframe::App for TimelineApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.track_window_focus(ctx);
        self.handle_keyboard_shortcuts(ctx);

        let rows = self.current_rows();
        let layout = self.engine.layout(&rows.tracks, &rows.intervals);
        if self.active_index.is_some_and(|index| index >= layout.rows.len()) {
            self.active_index = None;
        }
        self.anchor_selection(&rows);
        self.engine.on_frame();

        egui::TopBottomPanel::top("timeline_toolbar").show(ctx, |ui| {
            self.render_toolbar(ui);
        });

        egui::TopBottomPanel::bottom("timeline_status_bar").show(ctx, |ui| {
            self.render_status_bar(ui, &layout);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let now = Local::now();
            let now_offset = if now.date_naive() == self.current_date {
                now_indicator_offset(now.time(), self.engine.config())
            } else {
                None
            };

            let response = TimelineView::new(&mut self.engine, &layout)
                .active_index(self.active_index)
                .now_offset(now_offset)
                .show(ui);

            if let Some(row) = response.clicked_row {
                self.toggle_active_row(row);
            }
        });

        if self.engine.is_dragging() || self.engine.synchronizer().has_pending_frame() {
            ctx.request_repaint();
        } else {
            ctx.request_repaint_after(NOW_LINE_REFRESH);
        }
    }
}

impl TimelineApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, settings: Settings, roster: RosterData) -> Self {
        let engine = match TimelineEngine::try_new(settings.timeline.clone()) {
            Ok(engine) => engine,
            Err(e) => {
                log::warn!("{}, using the default timeline configuration", e);
                TimelineEngine::new(TimelineConfig::default())
            }
        }
        .with_duration_style(duration_style(&settings.duration_format));

        Self {
            settings,
            roster,
            engine,
            current_date: Local::now().date_naive(),
            view_mode: ViewMode::default(),
            grouping: GroupingMode::default(),
            active_index: None,
            anchored: None,
            window_focused: true,
        }
    }

    /// Tracks and intervals for the current date and view.
    fn current_rows(&self) -> GroupedRoster {
        match self.view_mode {
            ViewMode::Roster => {
                let visits = visits_on(&self.roster.visits, self.current_date);
                let mut grouped = group_visits(&visits, &self.roster.carers, self.grouping);
                pad_tracks(&mut grouped.tracks, self.settings.min_rows);
                grouped
            }
            ViewMode::Availability => match &self.roster.availability {
                Some(week) => availability_tracks(week, self.current_date),
                None => GroupedRoster::default(),
            },
        }
    }

    fn anchor_selection(&mut self, rows: &GroupedRoster) {
        let selection = Selection::new(self.current_date, self.active_index);
        let key = (selection, self.view_mode, self.grouping);
        if self.anchored == Some(key) {
            return;
        }

        let context = (self.view_mode, self.grouping);
        let context_changed = self
            .anchored
            .is_some_and(|(_, view_mode, grouping)| (view_mode, grouping) != context);
        if context_changed {
            self.engine.reset_anchor();
        }

        self.anchored = Some(key);
        self.engine
            .on_selection_change(selection, &rows.tracks, &rows.intervals);
    }

    fn toggle_active_row(&mut self, row: usize) {
        self.active_index = if self.active_index == Some(row) {
            None
        } else {
            Some(row)
        };
    }

    /// A window losing focus mid-drag never delivers the button release.
    fn track_window_focus(&mut self, ctx: &egui::Context) {
        let focused = ctx.input(|i| i.focused);
        if self.window_focused && !focused && self.engine.is_dragging() {
            log::debug!("Window lost focus during a drag");
            self.engine.on_blur();
        }
        self.window_focused = focused;
    }
}

fn duration_style(format: &str) -> DurationStyle {
    match format {
        "verbose" => DurationStyle::Verbose,
        _ => DurationStyle::Compact,
    }
}
