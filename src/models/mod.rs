// Module exports for models

pub mod config;
pub mod interval;
pub mod scroll;
pub mod settings;
pub mod track;
pub mod visit;
