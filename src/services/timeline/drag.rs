//! Grab-and-pan gesture handling.
//!
//! Mouse and touch input share one pointer notion. A session starts on a
//! primary press, turns every move into a scroll target relative to where it
//! started, and ends on release, leave, or cancel (lost capture, window
//! blur). Only one session exists at a time.

use super::sync::TrackScrollSynchronizer;
use crate::models::scroll::{DragDirection, DragSession};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Touch,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down {
        x: f32,
        kind: PointerKind,
        primary: bool,
    },
    Move {
        x: f32,
    },
    Up,
    Leave,
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragOutcome {
    Started,
    /// New scroll target queued for the next frame.
    Moved(f32),
    Ended,
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
enum DragPhase {
    #[default]
    Idle,
    Dragging { session: DragSession },
}

#[derive(Debug, Clone, PartialEq)]
pub struct DragGestureController {
    phase: DragPhase,
    multiplier: f32,
}

impl DragGestureController {
    pub fn new(multiplier: f32) -> Self {
        Self {
            phase: DragPhase::Idle,
            multiplier,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging { .. })
    }

    pub fn session(&self) -> Option<DragSession> {
        match self.phase {
            DragPhase::Dragging { session } => Some(session),
            DragPhase::Idle => None,
        }
    }

    pub fn handle(&mut self, event: PointerEvent, sync: &mut TrackScrollSynchronizer) -> DragOutcome {
        match event {
            PointerEvent::Down { x, kind, primary } => {
                if self.pointer_down(x, kind, primary, sync) {
                    DragOutcome::Started
                } else {
                    DragOutcome::Ignored
                }
            }
            PointerEvent::Move { x } => self
                .pointer_move(x, sync)
                .map_or(DragOutcome::Ignored, DragOutcome::Moved),
            PointerEvent::Up | PointerEvent::Leave | PointerEvent::Cancel => {
                if self.end(sync) {
                    DragOutcome::Ended
                } else {
                    DragOutcome::Ignored
                }
            }
        }
    }

    /// Start a session. Secondary buttons and presses during an active
    /// session are ignored.
    pub fn pointer_down(
        &mut self,
        x: f32,
        kind: PointerKind,
        primary: bool,
        sync: &mut TrackScrollSynchronizer,
    ) -> bool {
        if !primary || self.is_dragging() {
            return false;
        }

        let session = DragSession {
            origin_x: x,
            origin_scroll_left: sync.target_scroll_left(),
        };
        self.phase = DragPhase::Dragging { session };

        let state = sync.state_mut();
        state.is_dragging = true;
        log::trace!(
            "{:?} drag started at x={} scroll_left={}",
            kind,
            x,
            session.origin_scroll_left
        );
        true
    }

    /// Queue the scroll offset for pointer position `x`.
    pub fn pointer_move(&mut self, x: f32, sync: &mut TrackScrollSynchronizer) -> Option<f32> {
        let session = self.session()?;

        let delta = (session.origin_x - x) * self.multiplier;
        let target = session.origin_scroll_left + delta;

        if let Some(direction) = DragDirection::from_delta(delta) {
            sync.state_mut().drag_direction = direction;
        }
        sync.schedule_scroll_left(target);
        Some(target)
    }

    /// End the session. A queued frame still lands so the final offset is
    /// the last move's target.
    pub fn end(&mut self, sync: &mut TrackScrollSynchronizer) -> bool {
        if !self.is_dragging() {
            return false;
        }
        self.phase = DragPhase::Idle;

        let state = sync.state_mut();
        state.is_dragging = false;
        state.drag_direction = DragDirection::None;
        log::trace!("Drag ended");
        true
    }
}

impl Default for DragGestureController {
    fn default() -> Self {
        Self::new(2.0)
    }
}
