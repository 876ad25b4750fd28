//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.config/toot/tui.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use simplelog::LevelFilter;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TootConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub overlay: OverlayConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub log_level: Option<String>,
    pub log_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct OverlayConfig {
    pub width_percent: Option<u16>,
    pub height_percent: Option<u16>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_FILE: &str = "toot-tui.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;
pub const DEFAULT_OVERLAY_PERCENT: u16 = 80;
const MIN_OVERLAY_PERCENT: u16 = 10;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
    pub overlay_width_percent: u16,
    pub overlay_height_percent: u16,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        resolve(&TootConfig::default(), None)
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
        }
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.config/toot/tui.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("toot").join("tui.toml"))
}

/// Load config from `~/.config/toot/tui.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `TootConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<TootConfig, ConfigError> {
    let Some(path) = config_path() else {
        warn!("Could not determine config directory, using default config");
        return Ok(TootConfig::default());
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(TootConfig::default());
    }

    load_config_from(&path)
}

/// Load and parse a config file at an explicit path.
pub fn load_config_from(path: &Path) -> Result<TootConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: TootConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

fn generate_default_config(path: &Path) {
    let default_content = r#"# toot TUI configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# log_level = "info"                 # "off", "error", "warn", "info", "debug", "trace"
# log_file = "toot-tui.log"          # Or set TOOT_LOG_FILE env var

# [overlay]
# width_percent = 80                 # Overlay size relative to the terminal
# height_percent = 80
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_log_level` comes from the `--log-level` flag (None = not specified).
pub fn resolve(config: &TootConfig, cli_log_level: Option<&str>) -> ResolvedConfig {
    // Log level: CLI → env → config → default
    let log_level = cli_log_level
        .map(|s| s.to_string())
        .or_else(|| std::env::var("TOOT_LOG_LEVEL").ok())
        .or_else(|| config.general.log_level.clone())
        .and_then(|s| parse_level(&s))
        .unwrap_or(DEFAULT_LOG_LEVEL);

    // Log file: env → config → default
    let log_file = std::env::var("TOOT_LOG_FILE")
        .ok()
        .or_else(|| config.general.log_file.clone())
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());

    ResolvedConfig {
        log_level,
        log_file: PathBuf::from(log_file),
        overlay_width_percent: clamp_percent(config.overlay.width_percent),
        overlay_height_percent: clamp_percent(config.overlay.height_percent),
    }
}

fn parse_level(s: &str) -> Option<LevelFilter> {
    match LevelFilter::from_str(s) {
        Ok(level) => Some(level),
        Err(_) => {
            warn!("Ignoring unknown log level {:?}", s);
            None
        }
    }
}

fn clamp_percent(value: Option<u16>) -> u16 {
    value
        .unwrap_or(DEFAULT_OVERLAY_PERCENT)
        .clamp(MIN_OVERLAY_PERCENT, 100)
}
