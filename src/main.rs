mod app;
mod chart;
mod cli;
mod color;
mod config;
mod dashboard;
mod data;
mod state;
mod ui;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use eframe::egui;

use app::StudyProgressApp;
use cli::Args;
use state::AppState;

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = args.resolve_config()?;

    // Corrupt source data has no recovery path: abort before opening a window.
    let data_path = config.data_path.clone();
    let mut state = AppState::new(config);
    if let Err(e) = state.load(&data_path) {
        log::error!("Failed to load {}: {e}", data_path.display());
        return Err(e).with_context(|| format!("loading {}", data_path.display()));
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 800.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Study Progress – ECTS per Semester",
        options,
        Box::new(move |_cc| Ok(Box::new(StudyProgressApp::new(state)))),
    )
    .map_err(|e| anyhow!("running UI: {e}"))
}
