//! Inbound generation request types.
//!
//! Field defaults match what the chat-bot integration sends when a field is
//! omitted, so these types deserialize directly from the HTTP body.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

fn default_image_model() -> String {
    "gemini-3-pro-image-preview".to_string()
}

fn default_text_model() -> String {
    "gemini-3-pro-preview".to_string()
}

fn default_aspect_ratio() -> String {
    "1:1".to_string()
}

fn default_image_size() -> String {
    "1K".to_string()
}

fn default_folder() -> String {
    "relay-image-results".to_string()
}

fn default_thinking_level() -> String {
    "LOW".to_string()
}

/// Image generation request.
///
/// Immutable once constructed; one instance per inbound call.
///
/// # Examples
///
/// ```
/// use pictor_core::ImageRequest;
///
/// let req: ImageRequest = serde_json::from_str(r#"{"prompt": "a red fox"}"#).unwrap();
/// assert_eq!(req.model(), "gemini-3-pro-image-preview");
/// assert_eq!(req.aspect_ratio(), "1:1");
/// assert!(req.image_urls().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct ImageRequest {
    /// Model identifier
    #[serde(default = "default_image_model")]
    #[builder(default = "default_image_model()")]
    model: String,
    /// Prompt text
    prompt: String,
    /// Ordered list of image URLs to attach to the prompt
    #[serde(default)]
    #[builder(default)]
    image_urls: Option<Vec<String>>,
    /// Requested aspect ratio, e.g. "1:1" or "16:9"
    #[serde(default = "default_aspect_ratio")]
    #[builder(default = "default_aspect_ratio()")]
    aspect_ratio: String,
    /// Requested image size, e.g. "1K" or "2K"
    #[serde(default = "default_image_size")]
    #[builder(default = "default_image_size()")]
    image_size: String,
    /// Storage folder for the generated image
    #[serde(default = "default_folder")]
    #[builder(default = "default_folder()")]
    folder: String,
}

impl ImageRequest {
    /// Returns a builder for constructing an ImageRequest.
    pub fn builder() -> ImageRequestBuilder {
        ImageRequestBuilder::default()
    }
}

/// Text generation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct TextRequest {
    /// Model identifier
    #[serde(default = "default_text_model")]
    #[builder(default = "default_text_model()")]
    model: String,
    /// Prompt text
    prompt: String,
    /// Ordered list of image URLs to attach to the prompt
    #[serde(default)]
    #[builder(default)]
    image_urls: Option<Vec<String>>,
    /// Thinking level for models that support it ("LOW", "MEDIUM", "HIGH")
    #[serde(default = "default_thinking_level")]
    #[builder(default = "default_thinking_level()")]
    thinking_level: String,
}

impl TextRequest {
    /// Returns a builder for constructing a TextRequest.
    pub fn builder() -> TextRequestBuilder {
        TextRequestBuilder::default()
    }

    /// Whether the target model family accepts a thinking configuration.
    pub fn supports_thinking(&self) -> bool {
        self.model.contains("gemini-3") && !self.thinking_level.is_empty()
    }
}
