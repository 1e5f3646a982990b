//! Object storage error types.

/// Kinds of storage errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum StorageErrorKind {
    /// Upload rejected by the storage backend
    #[display("Upload rejected with status {}: {}", status_code, message)]
    Upload {
        /// HTTP status returned by the backend
        status_code: u16,
        /// Error message
        message: String,
    },
    /// Transport-level failure talking to the backend
    #[display("Storage request failed: {}", _0)]
    Http(String),
    /// Invalid storage configuration
    #[display("Invalid storage configuration: {}", _0)]
    InvalidConfig(String),
}

/// Storage error with location tracking.
///
/// Always surfaced to callers as a 500-class failure; the orchestrator does
/// not retry uploads.
///
/// # Examples
///
/// ```
/// use pictor_error::{StorageError, StorageErrorKind};
///
/// let err = StorageError::new(StorageErrorKind::Http("connection reset".to_string()));
/// assert!(format!("{}", err).contains("connection reset"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Storage Error: {} at line {} in {}", kind, line, file)]
pub struct StorageError {
    /// The kind of error that occurred
    pub kind: StorageErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StorageError {
    /// Create a new storage error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StorageErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
