//! Configuration system for the privfont private-font registry.
//!
//! This crate provides the tunables that shape how font bytes are staged and
//! registered:
//!
//! - How rejected font data is surfaced (`InvalidFontPolicy`)
//! - Staging limits for incoming font blobs
//! - The weight threshold that decides whether a face counts as bold
//! - YAML loading and saving with validation

pub mod config;
pub mod defaults;
pub mod error;

// Re-export main types for convenience
pub use config::{FontsConfig, InvalidFontPolicy};
pub use error::ConfigError;
