//! Typed error types for privfont-fonts.
//!
//! Unknown names and unmatched styles are not errors: resolution reports
//! them as `None`. Everything here is a failure the caller may want to
//! act on.

use std::collections::TryReserveError;
use thiserror::Error;

/// Errors produced while staging, registering or resolving fonts.
#[derive(Debug, Error)]
pub enum FontError {
    /// The font subsystem found no usable face in the supplied bytes.
    #[error("Font data for '{name}' was rejected: no usable face in {len} bytes")]
    InvalidFontData {
        /// Logical name the bytes were added under.
        name: String,
        /// Length of the rejected byte blob.
        len: usize,
    },

    /// The staging buffer could not be allocated.
    #[error("Failed to allocate {requested} bytes for font staging: {source}")]
    Allocation {
        /// Number of bytes requested.
        requested: usize,
        /// Underlying allocator error.
        #[source]
        source: TryReserveError,
    },

    /// The byte blob exceeds the configured staging limit.
    #[error("Font data is {len} bytes, exceeding the {limit} byte staging limit")]
    FontTooLarge {
        /// Length of the supplied byte blob.
        len: usize,
        /// Configured `max_font_bytes`.
        limit: usize,
    },

    /// A font was requested at a size that cannot be rendered.
    #[error("Invalid font size: {0} (must be finite and greater than zero)")]
    InvalidSize(f32),

    /// The family group was disposed while the operation was in flight.
    #[error("Font group '{0}' has been disposed")]
    Disposed(String),
}

impl FontError {
    /// Whether this error reports memory or size exhaustion during staging.
    pub fn is_resource_exhaustion(&self) -> bool {
        matches!(
            self,
            FontError::Allocation { .. } | FontError::FontTooLarge { .. }
        )
    }
}
