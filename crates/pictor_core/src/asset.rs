//! Downloaded asset type produced by the content fetcher.

use derive_getters::Getters;

/// A downloaded asset: raw bytes plus the normalized MIME type.
///
/// Produced by the content fetcher and consumed exactly once by the
/// orchestrator when building prompt parts. Scoped to a single request.
///
/// # Examples
///
/// ```
/// use pictor_core::FetchedAsset;
///
/// let asset = FetchedAsset::new(vec![0x89, 0x50], "image/png");
/// assert_eq!(asset.mime(), "image/png");
/// assert_eq!(asset.data().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct FetchedAsset {
    /// Raw downloaded bytes
    data: Vec<u8>,
    /// Normalized MIME type (no parameter suffix)
    mime: String,
}

impl FetchedAsset {
    /// Creates a new asset from downloaded bytes and a MIME type.
    pub fn new(data: Vec<u8>, mime: impl Into<String>) -> Self {
        Self {
            data,
            mime: mime.into(),
        }
    }

    /// Consumes the asset, returning its parts.
    pub fn into_parts(self) -> (Vec<u8>, String) {
        (self.data, self.mime)
    }
}
