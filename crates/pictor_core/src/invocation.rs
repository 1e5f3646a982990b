//! Provider-neutral model invocation description.

use crate::{FetchedAsset, Modality};
use derive_getters::Getters;

/// Image sizing options forwarded to the model (image mode only).
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct ImageOptions {
    /// Requested aspect ratio, e.g. "1:1"
    aspect_ratio: String,
    /// Requested image size, e.g. "1K"
    image_size: String,
}

impl ImageOptions {
    /// Creates new image options.
    pub fn new(aspect_ratio: impl Into<String>, image_size: impl Into<String>) -> Self {
        Self {
            aspect_ratio: aspect_ratio.into(),
            image_size: image_size.into(),
        }
    }
}

/// Everything a driver needs for one streaming generation call.
///
/// Built by the orchestrator after asset fetching has completed, so a spec
/// always carries the full asset set (never a partial one).
#[derive(Debug, Clone, PartialEq, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct InvocationSpec {
    /// Model identifier
    model: String,
    /// Prompt text (always the first content part)
    prompt: String,
    /// Fetched assets appended after the prompt, in input order
    #[builder(default)]
    assets: Vec<FetchedAsset>,
    /// Requested response modalities
    modalities: Vec<Modality>,
    /// Image sizing options (image mode only)
    #[builder(default)]
    image_options: Option<ImageOptions>,
    /// Thinking level (text mode, supporting model families only)
    #[builder(default)]
    thinking_level: Option<String>,
    /// Relax safety thresholds to OFF (image mode only)
    #[builder(default)]
    relax_safety: bool,
}

impl InvocationSpec {
    /// Returns a builder for constructing an InvocationSpec.
    pub fn builder() -> InvocationSpecBuilder {
        InvocationSpecBuilder::default()
    }
}
