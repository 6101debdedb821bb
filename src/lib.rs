//! Private font cache for fonts supplied as raw bytes.
//!
//! `FontCache` is the surface UI code depends on:
//! - `add(name, bytes)` registers a font file under a logical name
//! - `contains(name)` checks whether the name was ever added
//! - `get_font(name, size, style)` resolves a renderable font or `None`
//! - `dispose_all()` tears down every group and empties the cache
//!
//! Repeated adds under one name accumulate variants (regular, bold, ...).
//! Resolution prefers the variant registered first. `None` is a routine
//! result; callers fall back to a default font of their choosing.
//!
//! Fonts can also be bulk-loaded from a [`provider::FontProvider`].

pub mod cache;
pub mod provider;

// Re-export main types for convenience
pub use cache::{FontCache, LoadReport};
pub use privfont_config::{ConfigError, FontsConfig, InvalidFontPolicy};
pub use privfont_fonts::{Font, FontError, FontStyle, RegistryState};
pub use provider::{DirectoryFontProvider, FontProvider, FontSource, StaticFontProvider};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
