//! Registry configuration and its YAML persistence.
//!
//! Covers:
//! - `FontsConfig` with serde defaults for every field
//! - `from_yaml_str` / `load` / `save` (YAML file I/O with atomic write)
//! - `validate` for semantic checks that serde cannot express

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// What `add` does when the font subsystem rejects the staged bytes.
///
/// In both modes the logical name is registered, so a rejected add still
/// makes `contains(name)` true with zero usable variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvalidFontPolicy {
    /// Return `FontError::InvalidFontData` to the caller.
    #[default]
    Report,
    /// Log a warning and report success (legacy behaviour).
    Ignore,
}

/// Tunables for the private font registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontsConfig {
    /// How rejected font data is surfaced to callers of `add`.
    #[serde(default)]
    pub invalid_font_policy: InvalidFontPolicy,

    /// Largest byte blob accepted for staging.
    #[serde(default = "crate::defaults::max_font_bytes")]
    pub max_font_bytes: usize,

    /// Faces with a weight at or above this value satisfy the bold style.
    #[serde(default = "crate::defaults::bold_weight_threshold")]
    pub bold_weight_threshold: u16,

    /// Point size used when a caller asks for a font without a size.
    #[serde(default = "crate::defaults::default_font_size")]
    pub default_font_size: f32,
}

impl Default for FontsConfig {
    fn default() -> Self {
        Self {
            invalid_font_policy: InvalidFontPolicy::default(),
            max_font_bytes: crate::defaults::max_font_bytes(),
            bold_weight_threshold: crate::defaults::bold_weight_threshold(),
            default_font_size: crate::defaults::default_font_size(),
        }
    }
}

impl FontsConfig {
    /// Parse and validate a YAML document. Missing fields take their defaults.
    pub fn from_yaml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: FontsConfig = serde_yaml_ng::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        log::info!("Loading font config from {:?}", path);
        let contents = fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Save configuration to a YAML file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        self.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml_ng::to_string(self)?;

        // Atomic save: write to temp file then rename to prevent corruption on crash
        let temp_path = path.with_extension("yaml.tmp");
        fs::write(&temp_path, &yaml)?;
        fs::rename(&temp_path, path)?;

        Ok(())
    }

    /// Check field values that serde accepts but the registry cannot use.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=1000).contains(&self.bold_weight_threshold) {
            return Err(ConfigError::Validation(format!(
                "bold_weight_threshold must be within 1..=1000, got {}",
                self.bold_weight_threshold
            )));
        }
        if !self.default_font_size.is_finite() || self.default_font_size <= 0.0 {
            return Err(ConfigError::Validation(format!(
                "default_font_size must be a positive number, got {}",
                self.default_font_size
            )));
        }
        if self.max_font_bytes == 0 {
            return Err(ConfigError::Validation(
                "max_font_bytes must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
