//! One mounted timeline.
//!
//! Wires the drag controller, the synchronizer and the auto-scroll anchor
//! around a single [`ScrollState`]. Hosts feed it pointer, keyboard, frame and
//! selection events and read back a [`TimelineLayout`] plus per-surface
//! offsets.

use super::anchor::{AutoScrollAnchor, Selection};
use super::drag::{DragGestureController, DragOutcome, PointerEvent, PointerKind};
use super::error::{TimelineError, TimelineResult};
use super::mapper;
use super::placement::{layout_timeline, DurationStyle, TimelineLayout};
use super::sync::{ScrollOffset, TargetKey, TrackScrollSynchronizer};
use crate::models::config::TimelineConfig;
use crate::models::interval::TimeInterval;
use crate::models::scroll::ScrollState;
use crate::models::track::{sort_tracks, Track};

/// Keyboard equivalents of panning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    PanLeft,
    PanRight,
    Start,
    End,
}

pub struct TimelineEngine {
    config: TimelineConfig,
    duration_style: DurationStyle,
    sync: TrackScrollSynchronizer,
    drag: DragGestureController,
    anchor: AutoScrollAnchor,
}

impl TimelineEngine {
    pub fn new(config: TimelineConfig) -> Self {
        let mut sync = TrackScrollSynchronizer::new(mapper::content_width(&config), config.clamp_scroll);
        sync.register(TargetKey::Ruler, Box::new(ScrollOffset::default()));

        Self {
            drag: DragGestureController::new(config.drag_multiplier),
            duration_style: DurationStyle::default(),
            anchor: AutoScrollAnchor::new(),
            sync,
            config,
        }
    }

    /// Like [`TimelineEngine::new`] but rejects an invalid configuration.
    pub fn try_new(config: TimelineConfig) -> TimelineResult<Self> {
        config.validate().map_err(TimelineError::InvalidConfig)?;
        Ok(Self::new(config))
    }

    pub fn with_duration_style(mut self, style: DurationStyle) -> Self {
        self.duration_style = style;
        self
    }

    pub fn config(&self) -> &TimelineConfig {
        &self.config
    }

    /// Swap the configuration, keeping the scroll position and drag state.
    pub fn set_config(&mut self, config: TimelineConfig) -> TimelineResult<()> {
        config.validate().map_err(TimelineError::InvalidConfig)?;
        self.sync.set_content_width(mapper::content_width(&config));
        if !self.drag.is_dragging() {
            self.drag = DragGestureController::new(config.drag_multiplier);
        }
        self.config = config;
        Ok(())
    }

    pub fn state(&self) -> &ScrollState {
        self.sync.state()
    }

    pub fn scroll_left(&self) -> f32 {
        self.sync.scroll_left()
    }

    pub fn synchronizer(&self) -> &TrackScrollSynchronizer {
        &self.sync
    }

    pub fn synchronizer_mut(&mut self) -> &mut TrackScrollSynchronizer {
        &mut self.sync
    }

    pub fn anchor(&self) -> &AutoScrollAnchor {
        &self.anchor
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn set_viewport_width(&mut self, viewport_width: f32) {
        self.sync.set_viewport_width(viewport_width);
    }

    /// Register a scroll target for every shown track and drop the ones that
    /// went away (e.g. switching between client and carer grouping).
    pub fn mount_tracks(&mut self, tracks: &[Track]) {
        let ids: Vec<&str> = tracks.iter().map(|track| track.id.as_str()).collect();
        let before = self.sync.target_count();
        self.sync.retain_tracks(&ids);

        for id in ids {
            let key = TargetKey::track(id);
            if !self.sync.is_registered(&key) {
                self.sync.register(key, Box::new(ScrollOffset::default()));
            }
        }

        if before != self.sync.target_count() {
            log::debug!("Timeline now has {} scroll targets", self.sync.target_count());
        }
    }

    /// Mount the tracks and lay out one frame.
    pub fn layout(&mut self, tracks: &[Track], intervals: &[TimeInterval]) -> TimelineLayout {
        self.mount_tracks(tracks);
        layout_timeline(tracks, intervals, &self.config, self.duration_style)
    }

    pub fn on_pointer(&mut self, event: PointerEvent) -> DragOutcome {
        let outcome = self.drag.handle(event, &mut self.sync);
        if outcome == DragOutcome::Started {
            self.anchor.suppress();
        }
        outcome
    }

    pub fn on_pointer_down(&mut self, x: f32, kind: PointerKind) -> DragOutcome {
        self.on_pointer(PointerEvent::Down {
            x,
            kind,
            primary: true,
        })
    }

    pub fn on_pointer_move(&mut self, x: f32) -> DragOutcome {
        self.on_pointer(PointerEvent::Move { x })
    }

    pub fn on_pointer_up(&mut self) -> DragOutcome {
        self.on_pointer(PointerEvent::Up)
    }

    /// Window lost focus or pointer capture.
    pub fn on_blur(&mut self) -> DragOutcome {
        self.on_pointer(PointerEvent::Cancel)
    }

    /// Apply the coalesced drag offset. Call once per frame.
    pub fn on_frame(&mut self) -> Option<f32> {
        self.sync.flush_frame()
    }

    pub fn on_key(&mut self, command: KeyCommand) -> Option<f32> {
        if self.drag.is_dragging() {
            return None;
        }

        let current = self.sync.target_scroll_left();
        let target = match command {
            KeyCommand::PanLeft => current - mapper::hour_column_width(&self.config),
            KeyCommand::PanRight => current + mapper::hour_column_width(&self.config),
            KeyCommand::Start => 0.0,
            KeyCommand::End => self
                .sync
                .max_scroll_left()
                .unwrap_or_else(|| mapper::content_width(&self.config)),
        };

        self.anchor.suppress();
        self.sync.cancel_frame();
        Some(self.sync.set_scroll_left(target))
    }

    /// A surface scrolled on its own (mouse wheel); treated as a manual pan.
    pub fn on_native_scroll(&mut self, key: &TargetKey, px: f32) -> bool {
        if self.drag.is_dragging() {
            return false;
        }
        let changed = self.sync.sync_from(key, px);
        if changed {
            self.anchor.suppress();
        }
        changed
    }

    /// Auto-scroll for `selection`. With an active row only that row's
    /// intervals are considered, otherwise every interval.
    pub fn on_selection_change(
        &mut self,
        selection: Selection,
        tracks: &[Track],
        intervals: &[TimeInterval],
    ) -> Option<f32> {
        let relevant = relevant_intervals(selection, tracks, intervals);
        self.anchor
            .on_selection_change(selection, relevant, &mut self.sync, &self.config)
    }

    /// The rows were replaced (view or grouping switch); the next selection
    /// change anchors again even if the selection itself is unchanged.
    pub fn reset_anchor(&mut self) {
        log::debug!("Auto-scroll anchor reset");
        self.anchor.reset();
    }

    pub fn offset_of(&self, key: &TargetKey) -> Option<f32> {
        self.sync.offset_of(key)
    }
}

/// Intervals that matter for auto-scrolling `selection`.
pub fn relevant_intervals<'a>(
    selection: Selection,
    tracks: &[Track],
    intervals: &'a [TimeInterval],
) -> Vec<&'a TimeInterval> {
    let mut ordered = tracks.to_vec();
    sort_tracks(&mut ordered);

    match selection.active_index.and_then(|index| ordered.get(index)) {
        Some(track) => intervals
            .iter()
            .filter(|interval| interval.track_id == track.id)
            .collect(),
        None => intervals.iter().collect(),
    }
}
