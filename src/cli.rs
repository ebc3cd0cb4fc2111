use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use crate::config::AppConfig;

/// Config file and per-run overrides shared by the binaries.
#[derive(Debug, Clone, Args)]
pub struct ConfigArgs {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect-four.toml")]
    pub config: PathBuf,

    /// Override player one's color
    #[arg(long)]
    pub player_one_color: Option<String>,

    /// Override player two's color
    #[arg(long)]
    pub player_two_color: Option<String>,

    /// Override board height (rows)
    #[arg(long)]
    pub height: Option<usize>,

    /// Override board width (columns)
    #[arg(long)]
    pub width: Option<usize>,
}

impl ConfigArgs {
    /// Load the config file (or defaults) and apply command-line overrides.
    pub fn resolve(&self) -> Result<AppConfig> {
        let mut config = AppConfig::load_or_default(&self.config)
            .with_context(|| format!("loading config from {}", self.config.display()))?;

        if let Some(color) = &self.player_one_color {
            config.players.one_color = color.clone();
        }
        if let Some(color) = &self.player_two_color {
            config.players.two_color = color.clone();
        }
        if let Some(height) = self.height {
            config.board.height = height;
        }
        if let Some(width) = self.width {
            config.board.width = width;
        }

        config.validate().context("invalid settings")?;
        Ok(config)
    }
}
