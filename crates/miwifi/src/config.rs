//! CLI configuration: an optional TOML file layered with `MIWIFI_*`
//! environment variables, then overridden by command-line flags.

use std::path::PathBuf;

use clap::ValueEnum;
use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::cli::{ColorMode, GlobalOpts, OutputFormat};
use crate::error::CliError;

// ── TOML config struct ───────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Default output format: table, json, json-compact, yaml, debug.
    #[serde(default = "default_output")]
    pub output: String,

    /// Color mode: auto, always, never.
    #[serde(default = "default_color")]
    pub color: String,

    /// Treat a non-zero envelope `code` as a failure.
    #[serde(default)]
    pub strict_code: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
            strict_code: false,
        }
    }
}

fn default_output() -> String {
    "json".into()
}
fn default_color() -> String {
    "auto".into()
}

// ── Config file path ─────────────────────────────────────────────────

/// Config file path: `--config` / `MIWIFI_CONFIG`, else the platform config dir.
pub fn config_path(global: &GlobalOpts) -> PathBuf {
    if let Some(path) = &global.config {
        return path.clone();
    }
    ProjectDirs::from("dev", "miwifi", "miwifi")
        .map(|dirs| dirs.config_dir().join("config.toml"))
        .unwrap_or_else(|| {
            let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
            p.push(".config");
            p.push("miwifi");
            p.push("config.toml");
            p
        })
}

// ── Config loading ───────────────────────────────────────────────────

/// Load the config from defaults, file, and environment. A missing file is
/// not an error.
pub fn load_config(global: &GlobalOpts) -> Result<Config, CliError> {
    let path = config_path(global);
    tracing::debug!(path = %path.display(), "loading config");

    let config: Config = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(&path))
        .merge(Env::prefixed("MIWIFI_").only(&["output", "color", "strict_code"]))
        .extract()?;
    Ok(config)
}

// ── Effective settings ───────────────────────────────────────────────

/// Settings after applying flag overrides to the loaded config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub output: OutputFormat,
    pub color: ColorMode,
    pub strict_code: bool,
    pub quiet: bool,
}

impl Settings {
    /// Flags win over config values.
    pub fn resolve(global: &GlobalOpts, config: &Config) -> Result<Self, CliError> {
        let output = match global.output {
            Some(output) => output,
            None => parse_choice("output", &config.output)?,
        };
        let color = match global.color {
            Some(color) => color,
            None => parse_choice("color", &config.color)?,
        };
        Ok(Self {
            output,
            color,
            strict_code: global.strict_code || config.strict_code,
            quiet: global.quiet,
        })
    }
}

fn parse_choice<T: ValueEnum>(field: &str, value: &str) -> Result<T, CliError> {
    T::from_str(value, true).map_err(|reason| CliError::InvalidArgument {
        field: field.into(),
        reason,
    })
}
