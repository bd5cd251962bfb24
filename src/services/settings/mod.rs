mod service;

pub use service::{load_settings_or_default, SettingsService, CONFIG_ENV_VAR};
