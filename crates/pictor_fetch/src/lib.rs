//! Concurrent asset downloading for the pictor generation relay.
//!
//! The fetcher retrieves every URL of a request concurrently and returns the
//! assets in input order, or the first error in input order. There is no
//! caching and no per-download retry; retries happen at the orchestrator
//! level for the generation as a whole.

mod fetcher;
mod mime;

pub use fetcher::{ContentFetcher, DOWNLOAD_TIMEOUT};
pub use mime::{DEFAULT_MIME, normalize_mime};
