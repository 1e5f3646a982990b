//! Generated output types from the model stream.

use serde::{Deserialize, Serialize};

/// A single generated output unit assembled from a model stream.
///
/// For image generation exactly one artifact is selected (the first
/// inline-data part encountered in the stream); for text generation all
/// chunks are concatenated in arrival order and trimmed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum GeneratedArtifact {
    /// Generated image output.
    Image {
        /// MIME type of the image
        mime: String,
        /// Binary image data
        data: Vec<u8>,
    },

    /// Assembled text output.
    Text(String),
}

impl GeneratedArtifact {
    /// MIME type of the artifact, `text/plain` for text.
    pub fn mime(&self) -> &str {
        match self {
            GeneratedArtifact::Image { mime, .. } => mime,
            GeneratedArtifact::Text(_) => "text/plain",
        }
    }
}
