//! Next-frame coalescing of scroll writes.
//!
//! Pointer moves arrive faster than frames are drawn. At most one value is
//! pending; a newer move replaces it in place, and the host flushes it once
//! per frame.

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameCoalescer {
    pending: Option<f32>,
}

impl FrameCoalescer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `value` for the next frame, replacing any pending value.
    /// Returns true when this call opened a new frame request.
    pub fn schedule(&mut self, value: f32) -> bool {
        let opened = self.pending.is_none();
        self.pending = Some(value);
        opened
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn peek(&self) -> Option<f32> {
        self.pending
    }

    /// Take the value for this frame.
    pub fn take(&mut self) -> Option<f32> {
        self.pending.take()
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
