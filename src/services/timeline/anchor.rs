//! Auto-scroll onto the first relevant event.
//!
//! When the selection (date, active row) changes the viewport jumps to the
//! earliest interval minus a margin, or to the fallback hour when there is
//! nothing to show. A manual pan switches this off until the selection
//! changes again, and nothing happens while a drag is in progress.

use chrono::NaiveDate;

use super::mapper::pixel_offset;
use super::sync::TrackScrollSynchronizer;
use crate::models::config::{TimelineConfig, MINUTES_PER_HOUR};
use crate::models::interval::TimeInterval;

/// What the user is currently looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Selection {
    pub date: NaiveDate,
    pub active_index: Option<usize>,
}

impl Selection {
    pub fn new(date: NaiveDate, active_index: Option<usize>) -> Self {
        Self { date, active_index }
    }
}

/// Earliest start among well-formed intervals.
pub fn earliest_minute<'a>(intervals: impl IntoIterator<Item = &'a TimeInterval>) -> Option<i32> {
    intervals
        .into_iter()
        .filter(|interval| interval.is_well_formed())
        .map(|interval| interval.start_minute)
        .min()
}

/// Offset that brings `earliest` into view, never negative.
pub fn anchor_offset(earliest: Option<i32>, config: &TimelineConfig) -> f32 {
    let offset = match earliest {
        Some(minute) => pixel_offset(minute, config) - config.scroll_margin,
        None => pixel_offset(config.fallback_hour as i32 * MINUTES_PER_HOUR, config),
    };
    offset.max(0.0)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoScrollAnchor {
    last_selection: Option<Selection>,
    should_auto_scroll: bool,
}

impl Default for AutoScrollAnchor {
    fn default() -> Self {
        Self::new()
    }
}

impl AutoScrollAnchor {
    pub fn new() -> Self {
        Self {
            last_selection: None,
            should_auto_scroll: true,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.should_auto_scroll
    }

    pub fn last_selection(&self) -> Option<Selection> {
        self.last_selection
    }

    /// Called when the user pans by hand.
    pub fn suppress(&mut self) {
        if self.should_auto_scroll {
            log::debug!("Auto-scroll suppressed by manual pan");
        }
        self.should_auto_scroll = false;
    }

    /// Forget the last selection so the next call anchors again, even for
    /// the same selection after a manual pan. Used when the rows behind a
    /// selection are replaced.
    pub fn reset(&mut self) {
        self.last_selection = None;
        self.should_auto_scroll = true;
    }

    /// Position the viewport for `selection`. Returns the applied offset, or
    /// `None` when auto-scroll is suppressed or a drag is active.
    pub fn on_selection_change<'a>(
        &mut self,
        selection: Selection,
        intervals: impl IntoIterator<Item = &'a TimeInterval>,
        sync: &mut TrackScrollSynchronizer,
        config: &TimelineConfig,
    ) -> Option<f32> {
        if self.last_selection != Some(selection) {
            self.last_selection = Some(selection);
            self.should_auto_scroll = true;
        }

        if !self.should_auto_scroll || sync.state().is_dragging {
            return None;
        }

        let earliest = earliest_minute(intervals);
        let target = anchor_offset(earliest, config);
        log::debug!(
            "Auto-scroll for {} (row {:?}): earliest={:?} target={}",
            selection.date,
            selection.active_index,
            earliest,
            target
        );

        // A stale drag frame must not overwrite the anchor position
        sync.cancel_frame();
        Some(sync.set_scroll_left(target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::interval::IntervalStatus;
    use crate::services::timeline::drag::{DragGestureController, PointerKind};
    use crate::services::timeline::sync::{ScrollOffset, TargetKey};

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, day).unwrap()
    }

    fn synchronizer() -> TrackScrollSynchronizer {
        let mut sync = TrackScrollSynchronizer::new(2400.0, true);
        sync.register(TargetKey::Ruler, Box::new(ScrollOffset::default()));
        sync
    }

    fn visits() -> Vec<TimeInterval> {
        vec![
            TimeInterval::new("a", 600, 660, IntervalStatus::Upcoming),
            TimeInterval::new("b", 450, 500, IntervalStatus::Upcoming),
            TimeInterval::new("b", 300, 200, IntervalStatus::Upcoming),
        ]
    }

    #[test]
    fn test_earliest_ignores_malformed() {
        assert_eq!(earliest_minute(&visits()), Some(450));
        assert_eq!(earliest_minute(&[] as &[TimeInterval]), None);
    }

    #[test]
    fn test_scrolls_to_earliest_minus_margin() {
        let mut sync = synchronizer();
        let mut anchor = AutoScrollAnchor::new();
        let config = TimelineConfig::default();

        let applied = anchor.on_selection_change(Selection::new(date(10), None), &visits(), &mut sync, &config);
        assert_eq!(applied, Some(690.0));
        assert_eq!(sync.offset_of(&TargetKey::Ruler), Some(690.0));
    }

    #[test]
    fn test_empty_selection_uses_fallback_hour() {
        let mut sync = synchronizer();
        let mut anchor = AutoScrollAnchor::new();
        let config = TimelineConfig::default();

        let applied = anchor.on_selection_change(Selection::new(date(11), Some(2)), &[] as &[TimeInterval], &mut sync, &config);
        assert_eq!(applied, Some(800.0));
    }

    #[test]
    fn test_early_event_does_not_go_negative() {
        let config = TimelineConfig::default();
        assert_eq!(anchor_offset(Some(15), &config), 0.0);
    }

    #[test]
    fn test_repeat_call_is_idempotent() {
        let mut sync = synchronizer();
        let mut anchor = AutoScrollAnchor::new();
        let config = TimelineConfig::default();
        let selection = Selection::new(date(10), Some(0));

        let first = anchor.on_selection_change(selection, &visits(), &mut sync, &config);
        let second = anchor.on_selection_change(selection, &visits(), &mut sync, &config);
        assert_eq!(first, second);
        assert_eq!(sync.scroll_left(), 690.0);
    }

    #[test]
    fn test_no_op_while_dragging() {
        let mut sync = synchronizer();
        let mut anchor = AutoScrollAnchor::new();
        let mut drag = DragGestureController::default();
        let config = TimelineConfig::default();

        drag.pointer_down(100.0, PointerKind::Touch, true, &mut sync);
        let applied = anchor.on_selection_change(Selection::new(date(12), None), &visits(), &mut sync, &config);
        assert_eq!(applied, None);
        assert_eq!(sync.scroll_left(), 0.0);
    }

    #[test]
    fn test_manual_pan_suppresses_until_selection_changes() {
        let mut sync = synchronizer();
        let mut anchor = AutoScrollAnchor::new();
        let config = TimelineConfig::default();
        let selection = Selection::new(date(10), None);

        anchor.on_selection_change(selection, &visits(), &mut sync, &config);
        anchor.suppress();
        sync.set_scroll_left(1500.0);

        assert_eq!(anchor.on_selection_change(selection, &visits(), &mut sync, &config), None);
        assert_eq!(sync.scroll_left(), 1500.0);

        let next_day = Selection::new(date(11), None);
        assert_eq!(anchor.on_selection_change(next_day, &[] as &[TimeInterval], &mut sync, &config), Some(800.0));
        assert!(anchor.is_enabled());
    }

    #[test]
    fn test_active_row_change_reenables() {
        let mut sync = synchronizer();
        let mut anchor = AutoScrollAnchor::new();
        let config = TimelineConfig::default();

        anchor.on_selection_change(Selection::new(date(10), Some(0)), &[] as &[TimeInterval], &mut sync, &config);
        anchor.suppress();
        let applied = anchor.on_selection_change(Selection::new(date(10), Some(1)), &visits(), &mut sync, &config);
        assert_eq!(applied, Some(690.0));
    }

    #[test]
    fn test_reset_reanchors_same_selection() {
        let mut sync = synchronizer();
        let mut anchor = AutoScrollAnchor::new();
        let config = TimelineConfig::default();
        let selection = Selection::new(date(10), None);

        anchor.on_selection_change(selection, &visits(), &mut sync, &config);
        anchor.suppress();
        sync.set_scroll_left(1500.0);

        anchor.reset();
        assert!(anchor.is_enabled());
        assert_eq!(anchor.last_selection(), None);
        assert_eq!(anchor.on_selection_change(selection, &visits(), &mut sync, &config), Some(690.0));
        assert_eq!(sync.scroll_left(), 690.0);
    }
}
