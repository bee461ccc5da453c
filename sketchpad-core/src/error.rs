//! Error types for scene operations.

use thiserror::Error;

/// Result type for scene operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur while building scene content.
///
/// Lookups by identity never fail: an absent shape is a no-op, not an error.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    /// A shape dimension or origin is negative, NaN or infinite.
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// A shape with this identity is already in the scene.
    #[error("Duplicate shape identity: {0}")]
    DuplicateId(String),

    /// A fill color string could not be parsed.
    #[error("Invalid color: {0}")]
    InvalidColor(String),
}
