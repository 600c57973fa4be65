//! Configuration system for HumanSSH shell integration.
//!
//! Provides compile-time constants and TOML config file support.

pub mod constants;
pub mod file;

pub use file::{
    config_path, ensure_config_file_at, load_config, load_config_from, parse_config,
    save_shell_integration_features, shell_env, Config,
};
