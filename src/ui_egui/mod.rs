mod app;
mod views;

pub use app::{TimelineApp, ViewMode};
pub use views::timeline_view::{TimelineView, TimelineViewResponse};
