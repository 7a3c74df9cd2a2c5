//! Project options and loading them from YAML or JSON.
//!
//! ```yaml
//! name: my-project
//! outdir: packages/my-project
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Options a [`Project`](super::Project) is created with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectOptions {
    /// Project name.
    pub name: String,
    /// Output directory. Defaults to `"."`.
    #[serde(default = "default_outdir")]
    pub outdir: String,
}

fn default_outdir() -> String {
    ".".to_string()
}

impl ProjectOptions {
    /// Options with the given name and the default output directory.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            outdir: default_outdir(),
        }
    }

    /// Set the output directory.
    pub fn with_outdir(mut self, outdir: impl Into<String>) -> Self {
        self.outdir = outdir.into();
        self
    }

    /// Parse options from a YAML document.
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        let options: Self = serde_yaml::from_str(content)?;
        options.validate()?;
        Ok(options)
    }

    /// Parse options from a JSON document.
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        let options: Self = serde_json::from_str(content)?;
        options.validate()?;
        Ok(options)
    }

    /// Load options from a `.yaml`, `.yml` or `.json` file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_lowercase();

        match extension.as_str() {
            "yaml" | "yml" => Self::from_yaml_str(&std::fs::read_to_string(path)?),
            "json" => Self::from_json_str(&std::fs::read_to_string(path)?),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Check the options are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "project name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
