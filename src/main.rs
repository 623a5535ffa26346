//! Connect-N GUI
//!
//! Play "N in a row" against the search-backed computer or another player.

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use connect_n::config::{GameConfig, GameMode};
use connect_n::ui::ConnectApp;

/// Connect-N: drop tokens, line up N in a row.
#[derive(Parser)]
#[command(name = "connect_n", about = "Play Connect-N against the computer or a friend")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_n.toml")]
    config: PathBuf,

    /// Override grid rows
    #[arg(long)]
    rows: Option<usize>,

    /// Override grid columns
    #[arg(long)]
    columns: Option<usize>,

    /// Override the run length needed to win
    #[arg(long)]
    line_length: Option<usize>,

    /// Override the computer's search depth
    #[arg(long)]
    depth: Option<u32>,

    /// Override the game mode shown in the menu bar
    #[arg(long, value_enum)]
    mode: Option<GameMode>,

    /// Let the computer take the first turn
    #[arg(long)]
    computer_first: bool,

    /// Search exhaustively, without alpha-beta pruning
    #[arg(long)]
    no_alpha_beta: bool,
}

impl Cli {
    fn apply(&self, config: &mut GameConfig) {
        if let Some(rows) = self.rows {
            config.rows = rows;
        }
        if let Some(columns) = self.columns {
            config.columns = columns;
        }
        if let Some(line_length) = self.line_length {
            config.line_length = line_length;
        }
        if let Some(depth) = self.depth {
            config.search_depth = depth;
        }
        if let Some(mode) = self.mode {
            config.mode = mode;
        }
        if self.computer_first {
            config.computer_first = true;
        }
        if self.no_alpha_beta {
            config.alpha_beta = false;
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let mut config = GameConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    cli.apply(&mut config);
    config.validate().context("invalid command line override")?;

    info!(
        rows = config.rows,
        columns = config.columns,
        line_length = config.line_length,
        depth = config.search_depth,
        alpha_beta = config.alpha_beta,
        "starting"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Connect-N"),
        ..Default::default()
    };

    eframe::run_native(
        "Connect-N",
        options,
        Box::new(move |cc| Ok(Box::new(ConnectApp::new(cc, config)))),
    )
    .map_err(|e| anyhow!("GUI failed: {e}"))
}
