//! Shared integration test helpers for privfont-fonts.
//!
//! Include with `mod common;` at the top of each test file.

#![allow(dead_code)]

use privfont_config::{FontsConfig, InvalidFontPolicy};
use privfont_fonts::FontRegistry;
use privfont_fonts::testing;

/// Registry using the given invalid-data policy and otherwise default settings.
pub fn registry_with_policy(policy: InvalidFontPolicy) -> FontRegistry {
    FontRegistry::with_config(FontsConfig {
        invalid_font_policy: policy,
        ..FontsConfig::default()
    })
    .expect("policy-only config should validate")
}

/// Registry with "Brand" holding a regular and a bold Roboto face.
pub fn brand_registry() -> FontRegistry {
    let registry = FontRegistry::new();
    registry
        .add("Brand", &testing::regular_font("Roboto"))
        .expect("regular face should load");
    registry
        .add("Brand", &testing::bold_font("Roboto"))
        .expect("bold face should load");
    registry
}

/// Bytes the font database cannot read.
pub fn garbage_bytes() -> Vec<u8> {
    (0..256u32).map(|i| (i * 31 % 251) as u8).collect()
}
