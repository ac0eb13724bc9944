//! Configuration loading for the radix CLI
//!
//! Priority (highest to lowest):
//! 1. Command-line flags (applied by the caller)
//! 2. Environment variables prefixed `RADIX_`, nested keys split on `__`
//! 3. Config file passed with `--config` (TOML, YAML or JSON)
//! 4. Default values

use anyhow::{bail, Context, Result};
use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use radix_convert::ConverterOptions;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const ENV_PREFIX: &str = "RADIX_";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RadixConfig {
    /// `EnvFilter` directive, e.g. `debug` or `radix_convert=trace`
    pub log_level: Option<String>,
    pub output: OutputFormat,
    /// Colored text output
    pub color: bool,
    pub converter: ConverterOptions,
}

impl Default for RadixConfig {
    fn default() -> Self {
        Self {
            log_level: None,
            output: OutputFormat::Text,
            color: true,
            converter: ConverterOptions::default(),
        }
    }
}

/// Load configuration from defaults, an optional file and `RADIX_*` variables
pub fn load_config(path: Option<&Path>) -> Result<RadixConfig> {
    load_config_with_prefix(path, ENV_PREFIX)
}

fn load_config_with_prefix(path: Option<&Path>, env_prefix: &str) -> Result<RadixConfig> {
    let mut figment = Figment::from(Serialized::defaults(RadixConfig::default()));

    if let Some(path) = path {
        figment = merge_file(figment, path)?;
    }

    figment
        .merge(Env::prefixed(env_prefix).split("__"))
        .extract()
        .context("Failed to load configuration")
}

fn merge_file(figment: Figment, path: &Path) -> Result<Figment> {
    if !path.exists() {
        bail!("Config file not found: {}", path.display());
    }

    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .context("Config file must have an extension")?;

    let figment = match extension {
        "toml" => figment.merge(Toml::file(path)),
        "yaml" | "yml" => figment.merge(Yaml::file(path)),
        "json" => figment.merge(Json::file(path)),
        _ => bail!("Unsupported config file format: {}", extension),
    };
    Ok(figment)
}
