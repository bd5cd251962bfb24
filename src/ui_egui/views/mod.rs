mod palette;
pub mod timeline_view;
