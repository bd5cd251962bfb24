// Roster Timeline Application
// Main entry point

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use chrono::Local;

use roster_timeline::services::roster::{load_roster, sample_roster};
use roster_timeline::services::settings::{load_settings_or_default, SettingsService};
use roster_timeline::ui_egui::TimelineApp;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Roster Timeline");

    let settings_service = SettingsService::from_environment();
    let settings = load_settings_or_default(settings_service.as_ref());
    log::info!(
        "Loaded settings: hour_width={}, min_rows={}, duration_format={}",
        settings.timeline.hour_width,
        settings.min_rows,
        settings.duration_format
    );

    let roster = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => load_roster(&path)?,
        None => {
            log::info!("No roster file given, showing the sample roster");
            sample_roster(Local::now().date_naive())
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Roster Timeline")
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([640.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Roster Timeline",
        options,
        Box::new(move |cc| Ok(Box::new(TimelineApp::new(cc, settings, roster)))),
    )
    .map_err(|e| anyhow!("Failed to run the timeline viewer: {}", e))
}
