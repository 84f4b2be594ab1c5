//! Reversi GUI
//!
//! Play Black against a random opponent. Settings come from `REVERSI_*`
//! environment variables, log level from `RUST_LOG`.

use reversi::ui::{layout, ReversiApp};
use reversi::GameConfig;
use tracing_subscriber::EnvFilter;

const PANEL_WIDTH: f32 = 240.0;
const CHROME: f32 = 60.0;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = GameConfig::from_env();
    let board = layout::board_extent(config.cell_size);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([board + PANEL_WIDTH + CHROME, board + CHROME])
            .with_min_inner_size([PANEL_WIDTH + 320.0, 360.0])
            .with_title("Reversi"),
        ..Default::default()
    };

    eframe::run_native(
        "Reversi",
        options,
        Box::new(move |cc| Ok(Box::new(ReversiApp::new(cc, config)))),
    )
}
