//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.skimmer/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//!
//! Both modes are build-a-controller-time choices: nothing rereads them
//! after startup.

use clap::ValueEnum;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::{OpenMode, StartupMode};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SkimmerConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub feed: FeedConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub startup_mode: Option<StartupMode>,
    pub open_strategy: Option<OpenMode>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FeedConfig {
    /// JSON file of pre-fetched items for the local host to serve.
    pub items_path: Option<PathBuf>,
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub startup_mode: StartupMode,
    pub open_strategy: OpenMode,
    pub items_path: Option<PathBuf>,
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

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.skimmer/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".skimmer").join("config.toml"))
}

/// Load config from `~/.skimmer/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `SkimmerConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<SkimmerConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(SkimmerConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(SkimmerConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: SkimmerConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Skimmer Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# startup_mode = "explicit-init"     # "explicit-init" or "immediate-request"
# open_strategy = "host-mediated"    # "host-mediated" or "direct"

# [feed]
# items_path = "items.json"          # Pre-fetched items for the local host
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
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
/// The CLI arguments are `None` when the flag was not given.
pub fn resolve(
    config: &SkimmerConfig,
    cli_startup: Option<StartupMode>,
    cli_open: Option<OpenMode>,
    cli_items: Option<PathBuf>,
) -> ResolvedConfig {
    // Startup mode: CLI → env → config → default
    let startup_mode = cli_startup
        .or_else(|| env_mode::<StartupMode>("SKIMMER_STARTUP_MODE"))
        .or(config.general.startup_mode)
        .unwrap_or_default();

    // Open strategy: CLI → env → config → default
    let open_strategy = cli_open
        .or_else(|| env_mode::<OpenMode>("SKIMMER_OPEN_STRATEGY"))
        .or(config.general.open_strategy)
        .unwrap_or_default();

    // Items file: CLI → env → config (no default; an absent file means an
    // empty feed, which the host reports as done)
    let items_path = cli_items
        .or_else(|| std::env::var("SKIMMER_ITEMS").ok().map(PathBuf::from))
        .or_else(|| config.feed.items_path.clone());

    ResolvedConfig {
        startup_mode,
        open_strategy,
        items_path,
    }
}

/// Parses a kebab-case mode name from an env var, warning on junk.
fn env_mode<T: ValueEnum>(var: &str) -> Option<T> {
    let raw = std::env::var(var).ok()?;
    match T::from_str(&raw, true) {
        Ok(mode) => Some(mode),
        Err(_) => {
            warn!("Ignoring unrecognized {var}={raw}");
            None
        }
    }
}
