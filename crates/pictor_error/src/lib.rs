//! Error types for the pictor generation relay.
//!
//! Each collaborator gets its own kind enum plus an error struct that records
//! the source location where the error was raised. Retryability is a property
//! of the kind, exposed through [`RetryableError`], never derived from
//! message text.

mod config;
mod fetch;
mod gemini;
mod storage;

pub use config::ConfigError;
pub use fetch::{FetchError, FetchErrorKind};
pub use gemini::{GeminiError, GeminiErrorKind, RetryableError};
pub use storage::{StorageError, StorageErrorKind};
