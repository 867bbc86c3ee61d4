// SPDX-License-Identifier: MIT OR Apache-2.0

//! Main entry point for the egui UI

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;
use dotbox_ui_egui::{app::DotboxApp, ui_config::UiConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "dotbox")]
#[command(about = "Dots and boxes with an egui UI")]
struct Args {
    /// JSON UI configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Points per row (overrides the config file)
    #[arg(long)]
    width: Option<usize>,

    /// Points per column (overrides the config file)
    #[arg(long)]
    height: Option<usize>,

    #[arg(long)]
    debug: bool,
}

// Initialize logging functionality first thing in the program
fn init_logging(debug: bool) -> Result<()> {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Err(e) = init_logging(args.debug) {
        eprintln!("Warning: {}", e);
    }

    let mut config = match &args.config {
        Some(path) => UiConfig::load_from_file(path)?,
        None => UiConfig::default(),
    };
    if let Some(width) = args.width {
        config.board.width = width;
    }
    if let Some(height) = args.height {
        config.board.height = height;
    }

    let title = config.window.title.clone();
    let options = eframe::NativeOptions {
        initial_window_size: Some(egui::vec2(
            config.window.initial_size.0,
            config.window.initial_size.1,
        )),
        min_window_size: Some(egui::vec2(config.window.min_size.0, config.window.min_size.1)),
        centered: true,
        resizable: true,
        ..Default::default()
    };

    let app = DotboxApp::new(config)?;
    info!("Launching window");

    eframe::run_native(&title, options, Box::new(move |_cc| Box::new(app)))
        .map_err(|e| anyhow!("Failed to run eframe: {}", e))
}
