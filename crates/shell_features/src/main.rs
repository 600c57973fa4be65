//! HumanSSH shell integration feature tool.
//!
//! Resolves the `shell-integration-features` setting (from the command line or
//! the config file) and prints it in config or environment form.
//!
//! Usage: `humanssh-shell-features [--shell-integration-features <VALUE>] [--mode env]`

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use settings::Config;
use shell_integration::{parse_cli, FeatureSet, RenderMode};
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "humanssh-shell-features")]
#[command(about = "Resolve HumanSSH shell integration features")]
#[command(version)]
struct Cli {
    /// Feature list overriding the config file (e.g. "cursor:block,sudo,no-title")
    #[arg(long, num_args = 0..=1)]
    shell_integration_features: Option<Option<String>>,

    /// Output form
    #[arg(long, value_enum, default_value_t = Mode::Config)]
    mode: Mode,

    /// Config file to read (defaults to ~/.config/humanssh/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Create the config file with defaults if it does not exist
    #[arg(long)]
    init: bool,

    /// Write the resolved features back to the config file
    #[arg(long)]
    write: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Human-readable config form
    Config,
    /// `HUMANSSH_SHELL_FEATURES=...` for the shell integration scripts
    Env,
}

/// Check if debug mode is enabled via environment variable.
fn is_debug_mode() -> bool {
    std::env::var("HUMANSSH_DEBUG").is_ok()
}

/// Initialize the logging system. Logs go to stderr so stdout stays parseable.
fn init_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let default_filter = if is_debug_mode() {
        "shell_features=trace,shell_integration=trace,settings=trace,info"
    } else {
        "warn"
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_line_number(true),
        )
        .with(filter)
        .init();

    debug!("humanssh-shell-features v{}", env!("CARGO_PKG_VERSION"));
}

/// Command-line value wins over the config file. A flag given without a
/// value is an error rather than a fallback.
fn resolve_features(cli_value: Option<Option<&str>>, config: &Config) -> Result<FeatureSet> {
    match cli_value {
        Some(value) => parse_cli(value).context("Invalid --shell-integration-features"),
        None => Ok(config.shell_integration_features),
    }
}

/// Produce the line to print, if any.
fn render(features: FeatureSet, config: &Config, mode: Mode) -> Option<String> {
    match mode {
        Mode::Config => Some(features.render(RenderMode::Config)),
        Mode::Env => {
            let config = Config {
                shell_integration_features: features,
                ..config.clone()
            };
            settings::shell_env(&config).map(|(name, value)| format!("{name}={value}"))
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config_path = match cli.config {
        Some(path) => path,
        None => settings::config_path().context("Could not determine config directory")?,
    };

    if cli.init {
        settings::ensure_config_file_at(&config_path)?;
    }

    let config = settings::load_config_from(&config_path);
    let features = resolve_features(
        cli.shell_integration_features
            .as_ref()
            .map(|value| value.as_deref()),
        &config,
    )?;

    if cli.write {
        settings::save_shell_integration_features(&config_path, &features)?;
        info!("Saved shell integration features to {:?}", config_path);
    }

    match render(features, &config, cli.mode) {
        Some(line) => println!("{line}"),
        None => info!("Shell integration is disabled; nothing to export"),
    }
    Ok(())
}

fn main() -> Result<()> {
    init_logging();
    run(Cli::parse())
}
