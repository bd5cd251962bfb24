//! Timeline engine.
//!
//! Maps minutes of day onto horizontal pixels, places interval chips on
//! tracks, and keeps every scrollable surface of one timeline on the same
//! `scroll_left` while the user pans or the selection changes.

pub mod anchor;
pub mod drag;
pub mod engine;
pub mod error;
pub mod frame;
pub mod mapper;
pub mod overlap;
pub mod placement;
pub mod style;
pub mod sync;

pub use anchor::{AutoScrollAnchor, Selection};
pub use drag::{DragGestureController, PointerEvent, PointerKind};
pub use engine::{KeyCommand, TimelineEngine};
pub use error::{TimelineError, TimelineResult};
pub use placement::{Chip, TimelineLayout, TrackLayout};
pub use style::{ChipStyle, RgbaColor};
pub use sync::{ScrollTarget, TargetKey, TrackScrollSynchronizer};
