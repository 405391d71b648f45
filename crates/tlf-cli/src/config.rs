//! Configuration loading and management.

use std::path::{Path, PathBuf};

use chrono::Duration;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use tlf_core::{Algorithm, DEFAULT_MARGIN_MS};

/// Narrowest lane the text renderer will draw.
pub const MIN_LANE_WIDTH: usize = 10;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Padding on each side of the display window, in milliseconds.
    pub margin_ms: i64,

    /// Algorithm used when `--algorithm` is not given.
    pub algorithm: Algorithm,

    /// Number of character cells in a rendered lane.
    pub lane_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            margin_ms: DEFAULT_MARGIN_MS,
            algorithm: Algorithm::default(),
            lane_width: 60,
        }
    }
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (TLF_*)
        figment = figment.merge(Env::prefixed("TLF_"));

        figment.extract()
    }

    /// The configured margin, or `None` if it does not fit a duration.
    pub fn margin(&self) -> Option<Duration> {
        Duration::try_milliseconds(self.margin_ms)
    }

    /// Lane width, raised to [`MIN_LANE_WIDTH`] if configured smaller.
    pub fn lane_width(&self) -> usize {
        self.lane_width.max(MIN_LANE_WIDTH)
    }
}

/// Returns the platform-specific config directory for tlf.
///
/// On Linux: `~/.config/tlf`
pub fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("tlf"))
}
