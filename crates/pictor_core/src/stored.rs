//! Reference to an uploaded object.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Reference to a successfully stored object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct StoredObject {
    /// Bucket the object was written to
    bucket: String,
    /// Object path inside the bucket
    path: String,
    /// Publicly fetchable URL for the object
    url: String,
}

impl StoredObject {
    /// Creates a new stored object reference.
    pub fn new(
        bucket: impl Into<String>,
        path: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            bucket: bucket.into(),
            path: path.into(),
            url: url.into(),
        }
    }
}
