//! Private font registry for fonts supplied as raw bytes.
//!
//! This crate provides:
//! - Scoped staging of caller bytes with a guaranteed, observable release
//! - Family groups that accumulate font variants under one logical name
//! - A thread-safe registry keyed by logical name with whole-registry disposal
//! - Style-aware resolution of a concrete font at a requested point size
//!
//! # Architecture
//!
//! `FontRegistry` owns one `FontFamilyGroup` per logical name. Each `add`
//! stages the bytes in a `StagedFontBuffer`, registers them into the group's
//! font collection and releases the buffer before returning. Resolution
//! scans a group's families in registration order and returns the first
//! face that carries the requested style:
//! 1. Families in the order they were first registered
//! 2. Faces within a family in the order they were registered
//!
//! There is no cross-group or system-font fallback; callers pick their own
//! default when resolution finds nothing.

pub mod error;
pub mod group;
pub mod registry;
pub mod staging;
#[cfg(any(test, feature = "test-support"))]
pub mod testing;
pub mod types;

// Re-export main types for convenience
pub use error::FontError;
pub use group::FontFamilyGroup;
pub use registry::{FontRegistry, RegistryState};
pub use staging::StagingLedger;
pub use types::{Font, FontStyle};
