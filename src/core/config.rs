//! Run configuration.
//!
//! Settings come from an optional `addon-validator.toml` and are then
//! overridden by command-line flags.

use crate::core::error::AddonError;
use crate::core::harness::ExecutionMode;
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "addon-validator.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Result<Self, AddonError> {
        match value {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(AddonError::ConfigError(format!(
                "unknown output format '{}' (expected 'text' or 'json')",
                other
            ))),
        }
    }
}

/// On-disk configuration; every key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidatorConfig {
    pub disabled: Vec<String>,
    pub enabled: Vec<String>,
    pub format: Option<String>,
    pub parallel: Option<bool>,
}

/// Command-line values that take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub disabled: Option<String>,
    pub enabled: Option<String>,
    pub format: Option<String>,
    pub sequential: bool,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, Default)]
pub struct RunSettings {
    pub disabled: Vec<String>,
    pub enabled: Vec<String>,
    pub format: OutputFormat,
    pub mode: ExecutionMode,
}

/// Load configuration from an explicit path, or from the default file in
/// `dir` when no path is given. A missing default file is not an error.
pub fn load_config(explicit: Option<&Path>, dir: &Path) -> Result<ValidatorConfig, AddonError> {
    let path = match explicit {
        Some(p) => {
            if !p.exists() {
                return Err(AddonError::ConfigError(format!(
                    "config file {} does not exist",
                    p.display()
                )));
            }
            p.to_path_buf()
        }
        None => {
            let p = dir.join(DEFAULT_CONFIG_FILE);
            if !p.exists() {
                return Ok(ValidatorConfig::default());
            }
            p
        }
    };

    let content = fs::read_to_string(&path)?;
    toml::from_str(&content)
        .map_err(|e| AddonError::ConfigError(format!("{}: {}", path.display(), e)))
}

impl ValidatorConfig {
    /// Merge command-line overrides. Either filter flag replaces both file
    /// lists, so a file `disabled` never collides with a flag `--enabled`.
    pub fn resolve(self, overrides: &Overrides) -> Result<RunSettings, AddonError> {
        let (disabled, enabled) = if overrides.disabled.is_some() || overrides.enabled.is_some() {
            (
                crate::core::filter::parse_codes(overrides.disabled.as_deref().unwrap_or("")),
                crate::core::filter::parse_codes(overrides.enabled.as_deref().unwrap_or("")),
            )
        } else {
            (self.disabled, self.enabled)
        };

        let format = match overrides.format.as_deref().or(self.format.as_deref()) {
            Some(f) => OutputFormat::parse(f)?,
            None => OutputFormat::Text,
        };

        let mode = if overrides.sequential || self.parallel == Some(false) {
            ExecutionMode::Sequential
        } else {
            ExecutionMode::Parallel
        };

        Ok(RunSettings {
            disabled,
            enabled,
            format,
            mode,
        })
    }
}
