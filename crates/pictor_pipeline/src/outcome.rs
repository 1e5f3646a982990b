//! Successful image generation result.

use derive_getters::Getters;
use pictor_core::StoredObject;
use serde::Serialize;

/// Result of a successful image generation, shaped for the response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct ImageOutcome {
    /// Success marker, always "success"
    status: String,
    /// Publicly fetchable URL of the stored image
    image_url: String,
    /// Object path inside the bucket
    filename: String,
    /// Model identifier the image was generated with
    model_used: String,
    /// MIME type of the generated image
    mime_type: String,
}

impl ImageOutcome {
    /// Builds an outcome from a stored object reference.
    pub fn new(stored: StoredObject, model: impl Into<String>, mime: impl Into<String>) -> Self {
        Self {
            status: "success".to_string(),
            image_url: stored.url().clone(),
            filename: stored.path().clone(),
            model_used: model.into(),
            mime_type: mime.into(),
        }
    }
}
