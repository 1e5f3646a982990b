//! Wire types for the Vertex AI `generateContent` API.

use pictor_core::Modality;
use serde::{Deserialize, Serialize};

/// Content container used in both requests and responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    /// Content role ("user" in requests, "model" in responses)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Ordered content parts
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// Untagged union of text and inline media content parts.
///
/// Variant order matters for `#[serde(untagged)]` decoding.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Part {
    /// Text fragment
    Text {
        /// The text payload
        text: String,
    },
    /// Inline binary payload
    InlineData {
        /// Base64-encoded payload with MIME type
        #[serde(rename = "inlineData", alias = "inline_data")]
        inline_data: InlineData,
    },
}

/// Base64 inline payload used for media parts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    /// MIME type of the payload
    pub mime_type: String,
    /// Base64-encoded bytes
    pub data: String,
}

/// Generation configuration block.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Requested response modalities
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub response_modalities: Vec<Modality>,
    /// Image sizing options (image mode only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_config: Option<ImageConfig>,
    /// Thinking options (supported model families only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thinking_config: Option<ThinkingConfig>,
}

/// Image sizing options.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageConfig {
    /// Requested aspect ratio, e.g. "1:1"
    pub aspect_ratio: String,
    /// Requested image size, e.g. "1K"
    pub image_size: String,
}

/// Thinking configuration.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThinkingConfig {
    /// Thinking level ("LOW", "MEDIUM", "HIGH")
    pub thinking_level: String,
}

/// A safety category threshold override.
#[derive(Debug, Clone, Serialize)]
pub struct SafetySetting {
    /// Harm category identifier
    pub category: String,
    /// Threshold value
    pub threshold: String,
}

impl SafetySetting {
    /// The four harm-category thresholds relaxed to OFF for image requests.
    pub fn all_off() -> Vec<SafetySetting> {
        [
            "HARM_CATEGORY_HATE_SPEECH",
            "HARM_CATEGORY_DANGEROUS_CONTENT",
            "HARM_CATEGORY_SEXUALLY_EXPLICIT",
            "HARM_CATEGORY_HARASSMENT",
        ]
        .iter()
        .map(|category| SafetySetting {
            category: category.to_string(),
            threshold: "OFF".to_string(),
        })
        .collect()
    }
}

/// Request body for the `streamGenerateContent` call.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Prompt contents
    pub contents: Vec<Content>,
    /// Generation configuration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
    /// Safety threshold overrides
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub safety_settings: Vec<SafetySetting>,
}

/// One streamed response chunk.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StreamChunk {
    /// Candidate completions (usually exactly one)
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// Candidate completion item returned by the model.
#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    /// Generated content for this candidate
    #[serde(default)]
    pub content: Option<Content>,
}
