mod app;
mod color;
mod config;
mod data;
mod logos;
mod state;
mod ui;

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use app::AuctionBoardApp;
use clap::Parser;
use config::DashboardConfig;
use eframe::egui;
use state::AppState;

/// Desktop dashboard for player auction results.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Auction table to open (.csv, .json or .parquet).
    data: Option<PathBuf>,

    /// JSON file overriding roster limits, labels and logo locations.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory holding team logo images.
    #[arg(long)]
    logo_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("auction_board=info"))
        .init();

    let cli = Cli::parse();
    let state = match build_state(&cli) {
        Ok(state) => state,
        Err(e) => {
            log::error!("{e:#}");
            return Err(e);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Auction Board",
        options,
        Box::new(|cc| {
            // Install image loaders so egui can render team logos.
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(AuctionBoardApp::new(state)))
        }),
    )
    .map_err(|e| anyhow!("running the UI: {e}"))
}

/// Config and input problems are fatal here, before any window opens.
fn build_state(cli: &Cli) -> Result<AppState> {
    let mut config = match &cli.config {
        Some(path) => DashboardConfig::load(path)?,
        None => DashboardConfig::default(),
    };
    if let Some(dir) = &cli.logo_dir {
        config.logo_dir = dir.clone();
    }

    let mut state = AppState::new(config);
    if let Some(path) = &cli.data {
        state
            .load_path(path)
            .with_context(|| format!("cannot start without {}", path.display()))?;
    }
    Ok(state)
}
