//! Addon metadata bundles.
//!
//! A [`MetaBundle`] is the already-parsed input every validator inspects.
//! Loading accepts JSON or TOML files; field names follow the camelCase
//! layout of addon metadata documents.

use crate::core::error::AddonError;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(
        rename = "currentCSV",
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub current_csv: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddonMetadata {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub label: String,
    /// Base64-encoded PNG.
    #[serde(deserialize_with = "null_as_default")]
    pub icon: String,
    #[serde(deserialize_with = "null_as_default")]
    pub default_channel: String,
    #[serde(deserialize_with = "null_as_default")]
    pub channels: Vec<Channel>,
    #[serde(deserialize_with = "null_as_default")]
    pub target_namespace: String,
    #[serde(deserialize_with = "null_as_default")]
    pub namespaces: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub operator_name: String,
    /// Fields no built-in validator reads, kept verbatim.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// An explicit `null` reads as the field's empty value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetaBundle {
    pub addon_meta: AddonMetadata,
}

impl MetaBundle {
    pub fn new(addon_meta: AddonMetadata) -> Self {
        Self { addon_meta }
    }

    pub fn addon_id(&self) -> &str {
        &self.addon_meta.id
    }
}

/// Parse a single addon metadata file into a bundle.
pub fn load_bundle(path: &Path) -> Result<MetaBundle, AddonError> {
    let content = fs::read_to_string(path).map_err(|e| bundle_error(path, e.to_string()))?;
    let is_toml = path.extension().and_then(|e| e.to_str()) == Some("toml");
    let addon_meta: AddonMetadata = if is_toml {
        toml::from_str(&content).map_err(|e| bundle_error(path, e.to_string()))?
    } else {
        serde_json::from_str(&content).map_err(|e| bundle_error(path, e.to_string()))?
    };
    Ok(MetaBundle::new(addon_meta))
}

/// Load every path in order, stopping at the first unreadable bundle.
pub fn load_bundles(paths: &[PathBuf]) -> Result<Vec<MetaBundle>, AddonError> {
    paths.iter().map(|p| load_bundle(p)).collect()
}

fn bundle_error(path: &Path, message: String) -> AddonError {
    AddonError::BundleError {
        path: path.to_path_buf(),
        message,
    }
}
