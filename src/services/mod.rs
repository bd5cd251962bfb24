// Service module exports

pub mod grouping;
pub mod roster;
pub mod settings;
pub mod timeline;
