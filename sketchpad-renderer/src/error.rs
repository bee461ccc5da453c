//! Renderer error types.

use thiserror::Error;

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors that can occur during rendering.
///
/// The headless surfaces never produce [`RenderError::Surface`]; it exists for
/// surfaces backed by a real display tree.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A surface rejected a mutation.
    #[error("Surface error: {0}")]
    Surface(String),

    /// Encoding a surface snapshot failed.
    #[error("Export failed: {0}")]
    Export(String),
}
