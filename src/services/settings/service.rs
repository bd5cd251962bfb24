use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::models::settings::Settings;

/// Environment variable that points at an explicit settings file.
pub const CONFIG_ENV_VAR: &str = "ROSTER_TIMELINE_CONFIG";

const CONFIG_FILE_NAME: &str = "timeline.toml";

pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `$ROSTER_TIMELINE_CONFIG`, else `timeline.toml` in the platform
    /// config directory.
    pub fn default_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
            if !path.is_empty() {
                return Some(PathBuf::from(path));
            }
        }

        ProjectDirs::from("com", "RosterTimeline", "RosterTimeline")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    pub fn from_environment() -> Option<Self> {
        Self::default_path().map(Self::new)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings; a missing file yields the defaults.
    pub fn get(&self) -> Result<Settings> {
        if !self.path.exists() {
            log::debug!("No settings file at {}, using defaults", self.path.display());
            return Ok(Settings::default());
        }

        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read settings from {}", self.path.display()))?;
        let settings: Settings = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse settings file {}", self.path.display()))?;

        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings in {}: {}", self.path.display(), e))?;

        Ok(settings)
    }

    /// Write settings, creating the parent directory if needed.
    pub fn update(&self, settings: &Settings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create settings directory {}", parent.display())
                })?;
            }
        }

        let raw = toml::to_string_pretty(settings).context("Failed to serialize settings")?;
        fs::write(&self.path, raw)
            .with_context(|| format!("Failed to write settings to {}", self.path.display()))?;

        log::info!("Settings saved to {}", self.path.display());
        Ok(())
    }

    /// Reset settings to defaults
    pub fn reset(&self) -> Result<()> {
        self.update(&Settings::default())
    }
}

/// Load settings, logging and falling back to defaults on any error.
pub fn load_settings_or_default(service: Option<&SettingsService>) -> Settings {
    let Some(service) = service else {
        log::warn!("No configuration directory available, using default settings");
        return Settings::default();
    };

    match service.get() {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!("Failed to load settings: {:#}, using defaults", e);
            Settings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    fn setup_service() -> (TempDir, SettingsService) {
        let dir = TempDir::new().unwrap();
        let service = SettingsService::new(dir.path().join("nested").join(CONFIG_FILE_NAME));
        (dir, service)
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let (_dir, service) = setup_service();
        let settings = service.get().unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_update_settings() {
        let (_dir, service) = setup_service();

        let mut settings = service.get().unwrap();
        settings.timeline.hour_width = 80.0;
        settings.timeline.fallback_hour = 7;
        settings.min_rows = 12;

        service.update(&settings).unwrap();

        let updated = service.get().unwrap();
        assert_eq!(updated.timeline.hour_width, 80.0);
        assert_eq!(updated.timeline.fallback_hour, 7);
        assert_eq!(updated.min_rows, 12);
    }

    #[test]
    fn test_update_invalid_settings() {
        let (_dir, service) = setup_service();

        let mut settings = service.get().unwrap();
        settings.timeline.hour_width = -1.0;

        assert!(service.update(&settings).is_err());
        assert!(!service.path().exists());
    }

    #[test]
    fn test_partial_file_merges_with_defaults() {
        let (dir, _) = setup_service();
        let path = dir.path().join("partial.toml");
        fs::write(&path, "min_rows = 5\n\n[timeline]\nscroll_margin = 30.0\n").unwrap();

        let settings = SettingsService::new(&path).get().unwrap();
        assert_eq!(settings.min_rows, 5);
        assert_eq!(settings.timeline.scroll_margin, 30.0);
        assert_eq!(settings.timeline.hour_width, 100.0);
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let (dir, _) = setup_service();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "[timeline]\nhour_width = 0.0\n").unwrap();
        assert!(SettingsService::new(&path).get().is_err());

        fs::write(&path, "this is = = not toml").unwrap();
        let service = SettingsService::new(&path);
        assert!(service.get().is_err());
        assert_eq!(load_settings_or_default(Some(&service)), Settings::default());
    }

    #[test]
    fn test_reset_settings() {
        let (_dir, service) = setup_service();

        let mut settings = Settings::default();
        settings.duration_format = "verbose".to_string();
        service.update(&settings).unwrap();

        service.reset().unwrap();
        assert_eq!(service.get().unwrap(), Settings::default());
    }

    #[test]
    #[serial]
    fn test_env_var_overrides_location() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        std::env::set_var(CONFIG_ENV_VAR, &path);

        assert_eq!(SettingsService::default_path(), Some(path.clone()));
        let service = SettingsService::from_environment().unwrap();
        assert_eq!(service.path(), path.as_path());

        std::env::remove_var(CONFIG_ENV_VAR);
    }
}
