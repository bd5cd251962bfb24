use super::{TimelineApp, ViewMode};
use chrono::{Duration, Local};

impl TimelineApp {
    /// Roster view steps by day, availability view by week.
    fn step(&self) -> Duration {
        match self.view_mode {
            ViewMode::Roster => Duration::days(1),
            ViewMode::Availability => Duration::weeks(1),
        }
    }

    pub(super) fn navigate_previous(&mut self) {
        self.current_date = self.current_date - self.step();
    }

    pub(super) fn navigate_next(&mut self) {
        self.current_date = self.current_date + self.step();
    }

    pub(super) fn jump_to_today(&mut self) {
        self.current_date = Local::now().date_naive();
    }

    pub(super) fn set_view_mode(&mut self, view_mode: ViewMode) {
        if self.view_mode != view_mode {
            self.view_mode = view_mode;
            self.active_index = None;
        }
    }
}
