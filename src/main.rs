//! Gomoku GUI
//!
//! Two players share the mouse and take turns on a 15x15 board.

use gomoku::ui::{BoardGeometry, GomokuApp};
use gomoku::GomokuConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), eframe::Error> {
    // Logging comes up before config so config problems are reported;
    // RUST_LOG wins over the config's filter when set.
    let config = init_config_and_logging();

    let geometry = BoardGeometry::from_config(&config);
    let canvas = geometry.canvas_size();
    info!(canvas, title = %config.title, "starting gomoku");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            // Room for the menu bar, status bar and panel margins
            .with_inner_size([canvas + 16.0, canvas + 76.0])
            .with_resizable(false)
            .with_title(config.title.clone()),
        ..Default::default()
    };

    eframe::run_native(
        "Gomoku",
        options,
        Box::new(move |cc| Ok(Box::new(GomokuApp::new(cc, &config)))),
    )
}

fn init_config_and_logging() -> GomokuConfig {
    // Fallback subscriber for the config load itself
    let default_filter = || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let config = tracing::subscriber::with_default(
        tracing_subscriber::fmt().with_env_filter(default_filter()).finish(),
        GomokuConfig::from_env,
    );

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    config
}
