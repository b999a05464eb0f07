//! Optional TOML configuration supplying CLI defaults.
//!
//! The config file covers only caller-side choices — matte threshold, icon
//! edge list, fit mode, worker threads. Core pipeline parameters (the
//! sharpening tiers, the resampling kernel) are deliberately not here: they
//! are selected deterministically inside the pipeline and stay out of user
//! reach.
//!
//! Loading is forgiving about absence and strict about content: a missing
//! file falls back to stock defaults, a present-but-invalid file is an
//! error, never silently ignored.

use crate::batch::ICON_SIZES;
use crate::imaging::{DEFAULT_MATTE_THRESHOLD, FitMode};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// File name probed in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "iconsmith.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// CLI defaults. Every field has a stock value, so an empty file is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Default threshold for the `matte` subcommand.
    pub matte_threshold: u8,
    /// Default square edges for the `icons` subcommand.
    pub icon_sizes: Vec<u32>,
    /// Default fit mode for `resize` and `icons`.
    pub fit_mode: FitMode,
    /// Worker thread cap; absent means one per core.
    pub threads: Option<usize>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            matte_threshold: DEFAULT_MATTE_THRESHOLD,
            icon_sizes: ICON_SIZES.to_vec(),
            fit_mode: FitMode::Contain,
            threads: None,
        }
    }
}

impl CliConfig {
    /// Load from an explicit path. The file must exist and parse.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    /// Load `iconsmith.toml` from `dir` if present, else stock defaults.
    pub fn load_or_default(dir: &Path) -> Result<Self, ConfigError> {
        let path = dir.join(DEFAULT_CONFIG_FILE);
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }
}

/// A documented stock config, printable via the `gen-config` subcommand.
pub fn stock_config_toml() -> String {
    let stock = CliConfig::default();
    format!(
        "\
# iconsmith configuration — all values optional, shown at their defaults.

# Matte threshold for `iconsmith matte`: a pixel turns transparent when all
# of its RGB channels exceed 255 minus this value.
matte_threshold = {threshold}

# Square edges generated by `iconsmith icons`, in output order.
icon_sizes = {sizes:?}

# Fit mode for `resize` and `icons`: \"contain\" or \"fill\".
fit_mode = \"contain\"

# Worker threads for batch export. Omit to use one per core.
# threads = 4
",
        threshold = stock.matte_threshold,
        sizes = stock.icon_sizes,
    )
}
