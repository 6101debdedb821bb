//! Default value functions for configuration.
//!
//! Used as `#[serde(default = "crate::defaults::...")]` attributes on
//! `FontsConfig` fields.

/// Largest font blob accepted for staging (64 MiB).
pub fn max_font_bytes() -> usize {
    64 * 1024 * 1024
}

pub fn bold_weight_threshold() -> u16 {
    600 // SemiBold and heavier count as bold
}

pub fn default_font_size() -> f32 {
    12.0
}
