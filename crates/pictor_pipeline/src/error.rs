//! Composite error for the generation pipeline.

use pictor_error::{FetchError, GeminiError, RetryableError, StorageError};

/// Failures surfaced by the generation pipeline.
///
/// Wraps the collaborator errors and exposes the HTTP status the façade
/// should report. Retryability delegates to the wrapped kind; only model
/// errors are ever retryable.
#[derive(Debug, Clone, derive_more::Display, derive_more::From)]
pub enum PipelineError {
    /// Asset download failed
    #[display("{}", _0)]
    Fetch(FetchError),
    /// Model call failed
    #[display("{}", _0)]
    Gemini(GeminiError),
    /// Artifact upload failed
    #[display("{}", _0)]
    Storage(StorageError),
}

impl PipelineError {
    /// HTTP status reported to the caller for this failure.
    pub fn status_code(&self) -> u16 {
        match self {
            PipelineError::Fetch(e) => e.kind.status_code(),
            PipelineError::Gemini(e) => e.kind.status_code(),
            PipelineError::Storage(_) => 500,
        }
    }

    /// Human-readable detail for the error response body.
    pub fn detail(&self) -> String {
        match self {
            PipelineError::Fetch(e) => e.kind.to_string(),
            PipelineError::Gemini(e) => e.kind.to_string(),
            PipelineError::Storage(e) => e.kind.to_string(),
        }
    }
}

impl std::error::Error for PipelineError {}

impl RetryableError for PipelineError {
    fn is_retryable(&self) -> bool {
        match self {
            PipelineError::Gemini(e) => e.is_retryable(),
            PipelineError::Fetch(_) | PipelineError::Storage(_) => false,
        }
    }
}
