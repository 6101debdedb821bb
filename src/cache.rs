//! `FontCache`: the public entry point UI code uses to register and look up
//! private fonts.
//!
//! Every operation delegates to a `FontRegistry`. The host owns the cache,
//! shares it across threads as needed, and calls `dispose_all` at shutdown.

use anyhow::{Context, Result};
use privfont_config::{ConfigError, FontsConfig};
use privfont_fonts::{Font, FontError, FontRegistry, FontStyle};

use crate::provider::FontProvider;

/// Outcome of loading every source from a `FontProvider`.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Sources added without error.
    pub loaded: usize,
    /// Sources that failed, with the logical name they were added under.
    pub failures: Vec<(String, FontError)>,
}

impl LoadReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Private font cache keyed by logical name.
#[derive(Debug, Default)]
pub struct FontCache {
    registry: FontRegistry,
}

impl FontCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// # Errors
    /// `ConfigError::Validation` if `config` fails `FontsConfig::validate`.
    pub fn with_config(config: FontsConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            registry: FontRegistry::with_config(config)?,
        })
    }

    /// Add one font file's bytes under `name`. See [`FontRegistry::add`].
    pub fn add(&self, name: &str, data: &[u8]) -> Result<(), FontError> {
        self.registry.add(name, data)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.registry.contains(name)
    }

    /// Resolve `name` at `size` points. `Ok(None)` means the caller should
    /// fall back to its own default font.
    pub fn get_font(
        &self,
        name: &str,
        size: f32,
        style: FontStyle,
    ) -> Result<Option<Font>, FontError> {
        self.registry.get_font(name, size, style)
    }

    /// Resolve `name` at the configured `default_font_size`.
    pub fn get_default_size_font(
        &self,
        name: &str,
        style: FontStyle,
    ) -> Result<Option<Font>, FontError> {
        self.registry
            .get_font(name, self.registry.config().default_font_size, style)
    }

    pub fn dispose_all(&self) {
        self.registry.dispose_all();
    }

    /// Underlying registry, for introspection.
    pub fn registry(&self) -> &FontRegistry {
        &self.registry
    }

    /// Add every source a provider yields, in order.
    ///
    /// Individual failures are collected in the report rather than aborting
    /// the batch.
    ///
    /// # Errors
    /// Returns an error only if the provider itself cannot produce sources.
    pub fn load_from(&self, provider: &dyn FontProvider) -> Result<LoadReport> {
        let sources = provider
            .fonts()
            .context("Failed to collect fonts from provider")?;

        let mut report = LoadReport::default();
        for source in sources {
            match self.registry.add(&source.name, &source.data) {
                Ok(()) => report.loaded += 1,
                Err(e) => {
                    log::warn!("Skipping font '{}': {}", source.name, e);
                    report.failures.push((source.name, e));
                }
            }
        }

        log::info!(
            "Loaded {} font source(s), {} failed",
            report.loaded,
            report.failures.len()
        );
        Ok(report)
    }
}
