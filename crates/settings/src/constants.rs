//! Centralized configuration constants for HumanSSH shell integration.

/// Shell integration environment.
pub mod shell_integration {
    /// Environment variable read by the shell integration scripts.
    pub const FEATURES_ENV_VAR: &str = "HUMANSSH_SHELL_FEATURES";

    /// Config key holding the feature list.
    pub const FEATURES_KEY: &str = "shell-integration-features";
}

/// Settings file validation limits.
pub mod settings {
    /// Maximum settings file size in bytes (64 KB).
    /// Settings files should be tiny; anything larger is suspicious.
    pub const MAX_FILE_SIZE: u64 = 64 * 1024;
}
