// Scroll module
// Shared horizontal scroll state of one mounted timeline

/// Direction of the current pan, used for the drag arrow hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragDirection {
    #[default]
    None,
    Left,
    Right,
}

impl DragDirection {
    /// Direction for a scroll delta; `None` when the delta is zero.
    pub fn from_delta(delta: f32) -> Option<Self> {
        if delta > 0.0 {
            Some(Self::Right)
        } else if delta < 0.0 {
            Some(Self::Left)
        } else {
            None
        }
    }
}

/// The one authoritative scroll value, broadcast to every surface.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollState {
    pub scroll_left: f32,
    pub is_dragging: bool,
    pub drag_direction: DragDirection,
}

/// Captured on pointer-down, dropped on pointer-up/leave/cancel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub origin_x: f32,
    pub origin_scroll_left: f32,
}
