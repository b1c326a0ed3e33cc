use config::{Config, ConfigError, File};
use etcetera::base_strategy::{BaseStrategy, choose_base_strategy};
use serde::Deserialize;
use std::path::PathBuf;

use crate::styling::HighlightColor;

/// Glyph shown in front of the checked-out branch when none is configured.
pub const DEFAULT_CURRENT_MARKER: &str = "⭕️";

/// User configuration for the branch listing.
///
/// # Examples
///
/// ```toml
/// # Glyph for the checked-out branch (default: ⭕️)
/// symbol = "*"
///
/// # Color of the checked-out branch's line:
/// # red (default), bright-red, blue, bright-blue, yellow, bright-yellow,
/// # black, bright-black
/// fg = "bright-blue"
/// ```
///
/// Config file location:
/// - Linux: `$XDG_CONFIG_HOME/gbranch/config.toml` or `~/.config/gbranch/config.toml`
/// - macOS: `$XDG_CONFIG_HOME/gbranch/config.toml` or `~/.config/gbranch/config.toml`
/// - Windows: `%APPDATA%\gbranch\config.toml`
///
/// Environment variables: `GBRANCH_SYMBOL`, `GBRANCH_FG`
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct GbranchConfig {
    /// Current-branch marker override, used verbatim when non-empty
    #[serde(default)]
    pub symbol: Option<String>,

    /// Highlight color name for the current branch
    #[serde(default)]
    pub fg: Option<String>,
}

/// Resolved settings handed to parsing, layout and presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayConfig {
    pub current_marker: String,
    pub highlight: HighlightColor,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            current_marker: DEFAULT_CURRENT_MARKER.to_string(),
            highlight: HighlightColor::default(),
        }
    }
}

impl GbranchConfig {
    /// Load configuration from config file and environment variables.
    ///
    /// Configuration is loaded in the following order (later sources override earlier ones):
    /// 1. Default values
    /// 2. Config file (see struct documentation for platform-specific paths)
    /// 3. Environment variables (GBRANCH_*)
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        // Add config file if it exists
        if let Some(config_path) = get_config_path()
            && config_path.exists()
        {
            log::debug!("Loading config from {}", config_path.display());
            builder = builder.add_source(File::from(config_path));
        }

        // Add environment variables with GBRANCH prefix
        builder = builder.add_source(config::Environment::with_prefix("GBRANCH"));

        builder.build()?.try_deserialize()
    }

    /// Resolve the raw settings, applying fallbacks for empty or unknown values.
    pub fn display(&self) -> DisplayConfig {
        let current_marker = self
            .symbol
            .as_deref()
            .filter(|symbol| !symbol.is_empty())
            .unwrap_or(DEFAULT_CURRENT_MARKER)
            .to_string();

        DisplayConfig {
            current_marker,
            highlight: HighlightColor::from_setting(self.fg.as_deref()),
        }
    }
}

fn get_config_path() -> Option<PathBuf> {
    // Explicit override (also used by the integration tests for isolation)
    if let Ok(path) = std::env::var("GBRANCH_CONFIG_PATH") {
        return Some(PathBuf::from(path));
    }

    // Unit tests never read the user's config
    if cfg!(test) {
        return None;
    }

    // choose_base_strategy uses:
    // - XDG on Linux (respects XDG_CONFIG_HOME, falls back to ~/.config)
    // - XDG on macOS (~/.config instead of ~/Library/Application Support)
    // - Windows conventions on Windows (%APPDATA%)
    let strategy = choose_base_strategy().ok()?;
    Some(strategy.config_dir().join("gbranch").join("config.toml"))
}
