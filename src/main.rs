use log::{debug, info};
use std::sync::{Arc, Mutex};

use trackscope::config::AnalyzerConfig;
use trackscope::controller::AnalysisController;
use trackscope::gui;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Starting up...");

    // === Shared State ===
    let config = Arc::new(Mutex::new(AnalyzerConfig::default()));
    let controller = AnalysisController::new(config.clone());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([520.0, 760.0])
            .with_drag_and_drop(true)
            .with_title("Trackscope"),
        ..Default::default()
    };

    debug!("Launching GUI...");
    eframe::run_native(
        "Trackscope audio inspector",
        options,
        Box::new(move |_cc| Ok(Box::new(gui::AppState::new(config, controller)))),
    )
    .map_err(|e| anyhow::anyhow!("GUI error: {e}"))?;

    info!("Clean shutdown complete");
    Ok(())
}
