//! CLI configuration
//!
//! Sources, later ones winning:
//! 1. Built-in defaults
//! 2. `vellum.toml` in the working directory (or the file given with `--config`)
//! 3. `VELLUM__*` environment variables, e.g. `VELLUM__LOGGING__LEVEL=debug`

use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_FILE: &str = "vellum";

#[derive(Debug, Clone, Deserialize)]
pub struct CliConfig {
    pub logging: LoggingConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Default filter level, overridden by `RUST_LOG`
    pub level: String,
    /// Emit JSON log lines instead of human-readable ones
    pub json: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Indent JSON output
    pub pretty: bool,
}

impl CliConfig {
    /// Load configuration. An explicit `path` must exist; the default
    /// `vellum.toml` is optional.
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_FILE).required(false),
        };

        Config::builder()
            .set_default("logging.level", "warn")?
            .set_default("logging.json", false)?
            .set_default("output.pretty", true)?
            .add_source(file)
            .add_source(
                Environment::with_prefix("VELLUM")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
