//! Process-wide registry of font family groups keyed by logical name.
//!
//! The registry is an ordinary value: the host creates one, shares it (it is
//! `Send + Sync`) and calls `dispose_all` at shutdown. Locking is two-level:
//! - the name map is guarded by one mutex, held only for lookup/insert
//! - each group guards its own collection, held for registration/resolution
//!
//! `dispose_all` is expected to run once, after the last `add`/`get_font`.
//! Calling it while other threads are still adding or resolving is a misuse;
//! in-flight operations on a group that gets disposed see `Disposed` or
//! `None`, but which side wins is unspecified.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use privfont_config::{ConfigError, FontsConfig, InvalidFontPolicy};

use crate::error::FontError;
use crate::group::FontFamilyGroup;
use crate::staging::{StagedFontBuffer, StagingLedger};
use crate::types::{Font, FontStyle};

/// Whether the registry holds any groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryState {
    /// No groups: freshly created or just disposed.
    Empty,
    /// At least one group.
    Populated,
}

/// Mapping from logical name to the group of variants registered under it.
pub struct FontRegistry {
    config: FontsConfig,
    groups: Mutex<HashMap<String, Arc<FontFamilyGroup>>>,
    ledger: Arc<StagingLedger>,
}

impl std::fmt::Debug for FontRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontRegistry")
            .field("names", &self.names())
            .field("config", &self.config)
            .finish()
    }
}

impl Default for FontRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl FontRegistry {
    /// Create an empty registry with default configuration.
    pub fn new() -> Self {
        Self::from_valid_config(FontsConfig::default())
    }

    /// Create an empty registry with `config`.
    ///
    /// # Errors
    /// `ConfigError::Validation` if `config` fails `FontsConfig::validate`.
    pub fn with_config(config: FontsConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: FontsConfig) -> Self {
        Self {
            config,
            groups: Mutex::new(HashMap::new()),
            ledger: Arc::new(StagingLedger::default()),
        }
    }

    pub fn config(&self) -> &FontsConfig {
        &self.config
    }

    /// Staging counters; `outstanding()` is zero whenever no `add` is running.
    pub fn staging(&self) -> &StagingLedger {
        &self.ledger
    }

    /// Add font bytes under `name`, creating the group on first use.
    ///
    /// Repeated names accumulate variants. `data` is copied; the caller may
    /// drop it as soon as this returns.
    ///
    /// # Errors
    /// - `FontTooLarge` / `Allocation` if the bytes cannot be staged. The
    ///   registry is left untouched.
    /// - `InvalidFontData` if no face could be read and the policy is
    ///   `Report`. The name is registered either way.
    pub fn add(&self, name: &str, data: &[u8]) -> Result<(), FontError> {
        let buffer = StagedFontBuffer::stage(data, self.config.max_font_bytes, &self.ledger)?;
        let group = self.group_or_insert(name);

        match group.register_variant(buffer) {
            Ok(faces) => {
                log::debug!("Added {} face(s) to '{}'", faces, name);
                Ok(())
            }
            Err(FontError::InvalidFontData { len, .. })
                if self.config.invalid_font_policy == InvalidFontPolicy::Ignore =>
            {
                log::warn!(
                    "Ignoring invalid font data for '{}' ({} bytes)",
                    name,
                    len
                );
                Ok(())
            }
            Err(e) => {
                log::warn!("Failed to add font data for '{}': {}", name, e);
                Err(e)
            }
        }
    }

    /// Whether a group exists for `name`, usable variants or not.
    pub fn contains(&self, name: &str) -> bool {
        self.groups.lock().contains_key(name)
    }

    /// Resolve `name` at `size` points in `style`.
    ///
    /// Returns `Ok(None)` for unknown names and for groups without a face
    /// matching `style`.
    ///
    /// # Errors
    /// `InvalidSize` if the name is known but `size` is not a finite,
    /// positive number.
    pub fn get_font(
        &self,
        name: &str,
        size: f32,
        style: FontStyle,
    ) -> Result<Option<Font>, FontError> {
        let Some(group) = self.group(name) else {
            return Ok(None);
        };
        if !size.is_finite() || size <= 0.0 {
            return Err(FontError::InvalidSize(size));
        }
        Ok(group.resolve(size, style))
    }

    /// Whether the group for `name` has a face matching `style`.
    pub fn has_style(&self, name: &str, style: FontStyle) -> bool {
        self.group(name)
            .is_some_and(|group| group.is_style_available(style))
    }

    /// Look up the group registered under `name`.
    pub fn group(&self, name: &str) -> Option<Arc<FontFamilyGroup>> {
        self.groups.lock().get(name).cloned()
    }

    /// Registered logical names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.groups.lock().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.groups.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.lock().is_empty()
    }

    pub fn state(&self) -> RegistryState {
        if self.is_empty() {
            RegistryState::Empty
        } else {
            RegistryState::Populated
        }
    }

    /// Dispose every group and return to the empty state.
    ///
    /// The map is emptied in one step, so no name is visible once this
    /// starts; the groups are then released one by one. The registry can
    /// be used again afterwards.
    pub fn dispose_all(&self) {
        let groups = std::mem::take(&mut *self.groups.lock());
        let count = groups.len();
        for group in groups.into_values() {
            group.dispose();
        }
        log::info!("Disposed {} font group(s)", count);
    }

    /// Fetch the group for `name`, creating it if absent.
    ///
    /// Check and insert happen under one lock so concurrent adds of the same
    /// name share a single group.
    fn group_or_insert(&self, name: &str) -> Arc<FontFamilyGroup> {
        let mut groups = self.groups.lock();
        if let Some(group) = groups.get(name) {
            return Arc::clone(group);
        }

        log::info!("Created font group '{}'", name);
        let group = Arc::new(FontFamilyGroup::new(
            name,
            self.config.bold_weight_threshold,
        ));
        groups.insert(name.to_string(), Arc::clone(&group));
        group
    }
}
