//! Error types for mh-render

use thiserror::Error;

/// Instruction rendering errors
#[derive(Error, Debug)]
pub enum RenderError {
    /// Template render error (R001)
    #[error("[R001] Template render error: {0}")]
    RenderError(String),

    /// Custom template could not be read (R002)
    #[error("[R002] Failed to read template '{path}': {source}")]
    TemplateRead {
        path: String,
        source: std::io::Error,
    },
}

/// Result type alias for RenderError
pub type RenderResult<T> = Result<T, RenderError>;

impl From<minijinja::Error> for RenderError {
    fn from(err: minijinja::Error) -> Self {
        RenderError::RenderError(err.to_string())
    }
}
