//! TOML config file support.
//!
//! Config location: `~/.config/humanssh/config.toml`

use anyhow::{Context, Result};
use serde::Deserialize;
use shell_integration::{FeatureSet, RenderMode};
use std::path::{Path, PathBuf};

use crate::constants::shell_integration::{FEATURES_ENV_VAR, FEATURES_KEY};

/// User-facing config parsed from TOML.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Inject the shell integration scripts into spawned shells.
    pub shell_integration: bool,
    /// What the shell integration scripts should do once loaded.
    pub shell_integration_features: FeatureSet,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            shell_integration: true,
            shell_integration_features: FeatureSet::default(),
        }
    }
}

/// Default config file content with comments (generated on first launch).
const DEFAULT_CONFIG: &str = r#"# HumanSSH Configuration

# Load the shell integration scripts into new shells
shell-integration = true

# Shell integration features, comma separated. Prefix a feature with "no-"
# to turn it off, or use "true" / "false" alone to toggle everything.
#
#   cursor[:shape[:style]]  shape: bar, block, underline, disabled
#                           style: default, blink, steady
#   no-cursor               leave the cursor shape alone
#   path                    report the working directory
#   ssh-env                 forward TERM and friends over SSH
#   ssh-terminfo            install terminfo on SSH hosts
#   sudo                    mark sudo sessions
#   title                   report the window title
shell-integration-features = "cursor,path,title"
"#;

/// Return the config file path.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("humanssh").join("config.toml"))
}

/// Ensure the config file exists at `path`, creating a default if missing.
pub fn ensure_config_file_at(path: &Path) -> Result<()> {
    if path.exists() {
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
    }
    std::fs::write(path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write default config: {:?}", path))?;
    tracing::info!("Created default config at {:?}", path);
    Ok(())
}

/// Parse config text, surfacing the TOML or feature-list error.
pub fn parse_config(content: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(content)
}

/// Load and parse the config file. Returns default on any error.
pub fn load_config() -> Config {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => Config::default(),
    }
}

/// Load and parse the config file at `path`. Returns default on any error.
pub fn load_config_from(path: &Path) -> Config {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!("Failed to read config: {}", e);
            }
            return Config::default();
        }
    };

    // Size guard
    if content.len() > crate::constants::settings::MAX_FILE_SIZE as usize {
        tracing::warn!(
            "Config file too large ({} bytes), using defaults",
            content.len()
        );
        return Config::default();
    }

    match parse_config(&content) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::warn!("Failed to parse config.toml: {}", e);
            Config::default()
        }
    }
}

/// Update the feature list in the config file (preserving comments/formatting).
pub fn save_shell_integration_features(path: &Path, features: &FeatureSet) -> Result<()> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(e) => return Err(e).with_context(|| format!("Failed to read config: {:?}", path)),
    };
    let mut doc = content
        .parse::<toml_edit::DocumentMut>()
        .with_context(|| format!("Failed to parse config: {:?}", path))?;

    doc[FEATURES_KEY] = toml_edit::value(features.setting().to_string());

    std::fs::write(path, doc.to_string())
        .with_context(|| format!("Failed to save config: {:?}", path))?;
    tracing::debug!("Saved {} = {}", FEATURES_KEY, features.setting());
    Ok(())
}

/// Environment entry for spawned shells, or `None` when shell integration is off.
pub fn shell_env(config: &Config) -> Option<(&'static str, String)> {
    if !config.shell_integration {
        return None;
    }
    Some((
        FEATURES_ENV_VAR,
        config
            .shell_integration_features
            .render(RenderMode::Env),
    ))
}
