//! Error types for the editor host.

use sketchpad_core::CoreError;
use sketchpad_renderer::RenderError;
use thiserror::Error;

/// Errors raised while driving an editor.
#[derive(Debug, Error)]
pub enum EditorError {
    /// Shape construction was rejected.
    #[error("Scene error: {0}")]
    Core(#[from] CoreError),

    /// A render surface failed.
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// An event script could not be parsed.
    #[error("Script error: {0}")]
    Script(#[from] serde_json::Error),

    /// Reading a script or writing an output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for editor operations.
pub type EditorResult<T> = Result<T, EditorError>;
