use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::module::SdkModule;

/// The parsed representation of a `Shipkit.toml` file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub project: ProjectMetadata,

    #[serde(default)]
    pub android: Option<AndroidTarget>,

    /// SDK modules in declaration order. Order is preserved because it
    /// becomes classpath ordering in the generated build files.
    #[serde(default)]
    pub modules: Vec<SdkModule>,
}

/// Project identity and metadata from the `[project]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMetadata {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub authors: Vec<String>,
}

/// Android target configuration from the `[android]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AndroidTarget {
    /// Application package, e.g. `com.example.mygame`.
    pub package: String,

    #[serde(default = "default_min_sdk", rename = "min-sdk")]
    pub min_sdk: u32,

    #[serde(default = "default_target_sdk", rename = "target-sdk")]
    pub target_sdk: u32,

    /// Screen orientation: `landscape` or `portrait`.
    #[serde(default)]
    pub orientation: Option<String>,
}

fn default_min_sdk() -> u32 {
    21
}

fn default_target_sdk() -> u32 {
    34
}

impl Manifest {
    /// Load and parse a `Shipkit.toml` file from the given path.
    pub fn from_path(path: &Path) -> miette::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            shipkit_util::errors::ShipkitError::Manifest {
                message: format!("Failed to read {}: {e}", path.display()),
            }
        })?;
        Self::from_str(&content)
    }

    /// Parse a `Shipkit.toml` from a string.
    pub fn from_str(content: &str) -> miette::Result<Self> {
        toml::from_str(content).map_err(|e| {
            shipkit_util::errors::ShipkitError::Manifest {
                message: format!("Failed to parse Shipkit.toml: {e}"),
            }
            .into()
        })
    }

    /// SDK modules that are enabled for this deployment, in declaration order.
    pub fn enabled_modules(&self) -> impl Iterator<Item = &SdkModule> {
        self.modules.iter().filter(|m| m.enabled)
    }
}
