// SPDX-License-Identifier: MIT OR Apache-2.0

//! Main entry point for the egui UI

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;
use space_tictactoe_ui_egui::{headless, SpaceTicTacToeApp, UiConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "space-tictactoe")]
#[command(about = "Tic-tac-toe under an animated starfield")]
struct Args {
    #[arg(long, help = "JSON file with UI configuration")]
    config: Option<PathBuf>,

    #[arg(long)]
    debug: bool,

    #[arg(long, help = "Replay comma separated cell indices (0-8) without a window")]
    moves: Option<String>,
}

fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}

fn load_config(path: Option<&PathBuf>) -> UiConfig {
    match path {
        Some(path) => match UiConfig::load_from_file(path) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "Loaded UI config");
                config
            }
            Err(e) => {
                tracing::warn!("{:#}; using defaults", e);
                UiConfig::default()
            }
        },
        None => UiConfig::default(),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.debug);

    if let Some(moves) = args.moves.as_deref() {
        return headless::run(moves);
    }

    let config = load_config(args.config.as_ref());
    let window = config.window.clone();
    tracing::info!(title = %window.title, "Starting UI");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(window.title.clone())
            .with_inner_size([window.initial_size.0, window.initial_size.1])
            .with_min_inner_size([window.min_size.0, window.min_size.1]),
        centered: true,
        ..Default::default()
    };

    eframe::run_native(
        &window.title,
        options,
        Box::new(move |cc| Box::new(SpaceTicTacToeApp::new(cc, config))),
    )
    .map_err(|e| anyhow!("UI error: {}", e))
}
