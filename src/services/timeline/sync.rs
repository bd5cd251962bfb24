//! Scroll synchronisation across the ruler and every track row.
//!
//! The synchronizer owns the timeline's single [`ScrollState`]. Targets are
//! registered as rows mount and removed as they unmount; after every write all
//! registered targets hold the same `scroll_left`.

use super::frame::FrameCoalescer;
use crate::models::scroll::ScrollState;

/// Identity of a scrollable surface.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TargetKey {
    Ruler,
    Track(String),
}

impl TargetKey {
    pub fn track(id: impl Into<String>) -> Self {
        Self::Track(id.into())
    }
}

/// Anything with a horizontal scroll position.
#[cfg_attr(test, mockall::automock)]
pub trait ScrollTarget {
    fn set_scroll_left(&mut self, px: f32);
    fn scroll_left(&self) -> f32;
}

/// Plain offset cell for immediate-mode hosts that read the offset back
/// while building the frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollOffset {
    value: f32,
}

impl ScrollTarget for ScrollOffset {
    fn set_scroll_left(&mut self, px: f32) {
        self.value = px;
    }

    fn scroll_left(&self) -> f32 {
        self.value
    }
}

pub struct TrackScrollSynchronizer {
    state: ScrollState,
    targets: Vec<(TargetKey, Box<dyn ScrollTarget>)>,
    frame: FrameCoalescer,
    content_width: f32,
    viewport_width: Option<f32>,
    clamp: bool,
}

impl TrackScrollSynchronizer {
    pub fn new(content_width: f32, clamp: bool) -> Self {
        Self {
            state: ScrollState::default(),
            targets: Vec::new(),
            frame: FrameCoalescer::new(),
            content_width,
            viewport_width: None,
            clamp,
        }
    }

    pub fn state(&self) -> &ScrollState {
        &self.state
    }

    pub(crate) fn state_mut(&mut self) -> &mut ScrollState {
        &mut self.state
    }

    pub fn scroll_left(&self) -> f32 {
        self.state.scroll_left
    }

    pub fn set_content_width(&mut self, content_width: f32) {
        self.content_width = content_width;
    }

    pub fn set_viewport_width(&mut self, viewport_width: f32) {
        self.viewport_width = Some(viewport_width);
    }

    /// Largest offset that still fills the viewport, if the viewport is known.
    pub fn max_scroll_left(&self) -> Option<f32> {
        self.viewport_width
            .map(|viewport| (self.content_width - viewport).max(0.0))
    }

    pub fn clamp_offset(&self, px: f32) -> f32 {
        if !self.clamp {
            return px;
        }
        let px = px.max(0.0);
        match self.max_scroll_left() {
            Some(max) => px.min(max),
            None => px,
        }
    }

    /// Register a surface. It immediately takes the current offset. A target
    /// already registered under `key` is replaced.
    pub fn register(&mut self, key: TargetKey, mut target: Box<dyn ScrollTarget>) {
        target.set_scroll_left(self.state.scroll_left);
        match self.targets.iter_mut().find(|(existing, _)| *existing == key) {
            Some(slot) => slot.1 = target,
            None => self.targets.push((key, target)),
        }
    }

    pub fn unregister(&mut self, key: &TargetKey) -> Option<Box<dyn ScrollTarget>> {
        let index = self.targets.iter().position(|(existing, _)| existing == key)?;
        Some(self.targets.remove(index).1)
    }

    /// Drop every track target whose id is not in `track_ids`; the ruler
    /// stays registered.
    pub fn retain_tracks(&mut self, track_ids: &[&str]) {
        self.targets.retain(|(key, _)| match key {
            TargetKey::Ruler => true,
            TargetKey::Track(id) => track_ids.contains(&id.as_str()),
        });
    }

    pub fn is_registered(&self, key: &TargetKey) -> bool {
        self.targets.iter().any(|(existing, _)| existing == key)
    }

    pub fn target_count(&self) -> usize {
        self.targets.len()
    }

    pub fn offset_of(&self, key: &TargetKey) -> Option<f32> {
        self.targets
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, target)| target.scroll_left())
    }

    /// Clamp (when enabled) and broadcast. Returns the applied offset.
    pub fn set_scroll_left(&mut self, px: f32) -> f32 {
        let px = self.clamp_offset(px);
        self.apply_to_all(px);
        px
    }

    /// Write `px` verbatim to the state and every target.
    pub fn apply_to_all(&mut self, px: f32) {
        self.state.scroll_left = px;
        for (_, target) in self.targets.iter_mut() {
            target.set_scroll_left(px);
        }
    }

    /// Queue an offset for the next frame; a later call replaces it.
    pub fn schedule_scroll_left(&mut self, px: f32) {
        self.frame.schedule(px);
    }

    /// Offset the surfaces will show after the next frame.
    pub fn target_scroll_left(&self) -> f32 {
        self.frame.peek().unwrap_or(self.state.scroll_left)
    }

    pub fn has_pending_frame(&self) -> bool {
        self.frame.is_pending()
    }

    /// Apply the pending offset, if any. Called once per frame by the host.
    pub fn flush_frame(&mut self) -> Option<f32> {
        let px = self.frame.take()?;
        Some(self.set_scroll_left(px))
    }

    pub fn cancel_frame(&mut self) {
        self.frame.cancel();
    }

    /// A surface scrolled by itself (wheel, scrollbar); bring the rest along.
    pub fn sync_from(&mut self, key: &TargetKey, px: f32) -> bool {
        if !self.is_registered(key) || px.to_bits() == self.state.scroll_left.to_bits() {
            return false;
        }
        self.set_scroll_left(px);
        true
    }

    /// True when every target reports exactly the state's offset.
    pub fn is_in_sync(&self) -> bool {
        let expected = self.state.scroll_left.to_bits();
        self.targets
            .iter()
            .all(|(_, target)| target.scroll_left().to_bits() == expected)
    }
}
