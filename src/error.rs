//! Error types for stencil evaluation and scheme selection.

use thiserror::Error;

/// Errors raised at the stencil call boundary.
///
/// A wrong-length window is a caller bug. It is reported, never repaired:
/// the window is not truncated, padded or reinterpreted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StencilError {
    /// The window does not hold exactly `stencil_size` values.
    #[error("{scheme}: window length mismatch: expected {expected} cells, got {actual}")]
    WindowLength {
        scheme: &'static str,
        expected: usize,
        actual: usize,
    },

    /// No reconstruction scheme matches the requested name.
    #[error("Unknown reconstruction scheme: {0}")]
    UnknownScheme(String),

    /// A padded line holds fewer cells than a single stencil window.
    #[error("{scheme}: line too short: need at least {required} cells, got {actual}")]
    LineTooShort {
        scheme: &'static str,
        required: usize,
        actual: usize,
    },
}

impl StencilError {
    /// Create a window length mismatch error.
    pub fn window_length(scheme: &'static str, expected: usize, actual: usize) -> Self {
        Self::WindowLength {
            scheme,
            expected,
            actual,
        }
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, StencilError>;
