//! Object store trait.

use async_trait::async_trait;
use pictor_error::StorageError;

/// An object storage backend that persists bytes and returns a fetchable URL.
///
/// Idempotent per distinct path; callers generate a fresh random path per
/// upload so collisions are not a practical concern.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Upload `data` to `bucket` under `path` with the given MIME type,
    /// returning a publicly fetchable URL.
    async fn store(
        &self,
        data: &[u8],
        bucket: &str,
        path: &str,
        mime: &str,
    ) -> Result<String, StorageError>;
}
