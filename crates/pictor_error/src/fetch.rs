//! Asset download error types.

/// Kinds of download failures.
///
/// Each variant carries the URL that triggered it so callers can log the
/// offending source without reparsing the message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum FetchErrorKind {
    /// Download exceeded the per-request timeout
    #[display("Download timed out: {}", _0)]
    Timeout(String),
    /// Network or HTTP-level failure
    #[display("Download failed for {}: {}", url, message)]
    Network {
        /// URL that failed to download
        url: String,
        /// Transport or status error message
        message: String,
    },
    /// Failure that fits neither of the above
    #[display("Unexpected download error for {}: {}", url, message)]
    Unknown {
        /// URL that failed to download
        url: String,
        /// Error message
        message: String,
    },
}

impl FetchErrorKind {
    /// HTTP status reported to the caller for this failure.
    pub fn status_code(&self) -> u16 {
        match self {
            FetchErrorKind::Timeout(_) => 408,
            FetchErrorKind::Network { .. } => 400,
            FetchErrorKind::Unknown { .. } => 500,
        }
    }

    /// The URL whose download triggered this error.
    pub fn url(&self) -> &str {
        match self {
            FetchErrorKind::Timeout(url) => url,
            FetchErrorKind::Network { url, .. } => url,
            FetchErrorKind::Unknown { url, .. } => url,
        }
    }
}

/// Download error with source location tracking.
///
/// # Examples
///
/// ```
/// use pictor_error::{FetchError, FetchErrorKind};
///
/// let err = FetchError::new(FetchErrorKind::Timeout(
///     "https://example.com/cat.png".to_string(),
/// ));
/// assert_eq!(err.kind.status_code(), 408);
/// assert!(format!("{}", err).contains("timed out"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Fetch Error: {} at line {} in {}", kind, line, file)]
pub struct FetchError {
    /// The kind of error that occurred
    pub kind: FetchErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl FetchError {
    /// Create a new FetchError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: FetchErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
