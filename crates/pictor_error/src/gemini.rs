//! Gemini-specific error types and retry classification.

/// Gemini-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GeminiErrorKind {
    /// No access token available for the API call
    MissingToken,
    /// Request rejected before reaching the model
    InvalidRequest(String),
    /// API returned a non-success status
    Api {
        /// HTTP status code
        status_code: u16,
        /// Error message
        message: String,
    },
    /// API rate limit hit (HTTP 429)
    RateLimited(String),
    /// Stream completed without producing the requested artifact
    EmptyGeneration,
    /// Failed to decode a streamed chunk
    ResponseParsing(String),
    /// Transport-level failure
    Http(String),
}

impl std::fmt::Display for GeminiErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeminiErrorKind::MissingToken => {
                write!(f, "No access token configured for Vertex AI")
            }
            GeminiErrorKind::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
            GeminiErrorKind::Api {
                status_code,
                message,
            } => write!(f, "Gemini API error {}: {}", status_code, message),
            GeminiErrorKind::RateLimited(msg) => write!(f, "Gemini API rate limited: {}", msg),
            GeminiErrorKind::EmptyGeneration => {
                write!(f, "Model stream produced no generated content")
            }
            GeminiErrorKind::ResponseParsing(msg) => {
                write!(f, "Failed to parse stream chunk: {}", msg)
            }
            GeminiErrorKind::Http(msg) => write!(f, "HTTP request failed: {}", msg),
        }
    }
}

impl GeminiErrorKind {
    /// Check if this error should trigger another generation attempt.
    ///
    /// Only rate limiting and an empty generation stream are worth retrying;
    /// everything else is either a caller mistake or a hard upstream failure.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            GeminiErrorKind::RateLimited(_) | GeminiErrorKind::EmptyGeneration
        )
    }

    /// HTTP status reported to the caller for this failure.
    pub fn status_code(&self) -> u16 {
        match self {
            GeminiErrorKind::MissingToken => 500,
            GeminiErrorKind::InvalidRequest(_) => 400,
            GeminiErrorKind::Api { status_code, .. } => *status_code,
            GeminiErrorKind::RateLimited(_) => 429,
            GeminiErrorKind::EmptyGeneration => 500,
            GeminiErrorKind::ResponseParsing(_) => 500,
            GeminiErrorKind::Http(_) => 500,
        }
    }
}

/// Gemini error with source location tracking.
///
/// # Examples
///
/// ```
/// use pictor_error::{GeminiError, GeminiErrorKind, RetryableError};
///
/// let err = GeminiError::new(GeminiErrorKind::RateLimited("quota".to_string()));
/// assert!(err.is_retryable());
/// assert_eq!(err.kind.status_code(), 429);
/// ```
#[derive(Debug, Clone)]
pub struct GeminiError {
    /// The kind of error that occurred
    pub kind: GeminiErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GeminiError {
    /// Create a new GeminiError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GeminiErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for GeminiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Gemini Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for GeminiError {}

/// Trait for errors that support retry logic.
///
/// Transient conditions like rate limits should return true. Permanent
/// failures like bad requests should return false so callers fail fast.
pub trait RetryableError {
    /// Returns true if this error should trigger a retry.
    fn is_retryable(&self) -> bool;
}

impl RetryableError for GeminiError {
    fn is_retryable(&self) -> bool {
        self.kind.is_retryable()
    }
}
