//! Conversions between core types and the Vertex AI wire format.

use crate::gemini::dto::{
    Content, GenerateContentRequest, GenerationConfig, ImageConfig, InlineData, Part,
    SafetySetting, StreamChunk, ThinkingConfig,
};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use pictor_core::{ChunkPart, GenerationChunk, InvocationSpec};
use pictor_error::{GeminiError, GeminiErrorKind};

/// Build the wire request for an invocation.
///
/// The prompt text is always the first part, followed by one inline-data
/// part per fetched asset in input order.
pub(crate) fn build_request(spec: &InvocationSpec) -> GenerateContentRequest {
    let mut parts = vec![Part::Text {
        text: spec.prompt().clone(),
    }];
    for asset in spec.assets() {
        parts.push(Part::InlineData {
            inline_data: InlineData {
                mime_type: asset.mime().clone(),
                data: STANDARD.encode(asset.data()),
            },
        });
    }

    let generation_config = GenerationConfig {
        response_modalities: spec.modalities().clone(),
        image_config: spec.image_options().as_ref().map(|opts| ImageConfig {
            aspect_ratio: opts.aspect_ratio().clone(),
            image_size: opts.image_size().clone(),
        }),
        thinking_config: spec
            .thinking_level()
            .as_ref()
            .map(|level| ThinkingConfig {
                thinking_level: level.clone(),
            }),
    };

    let safety_settings = if *spec.relax_safety() {
        SafetySetting::all_off()
    } else {
        Vec::new()
    };

    GenerateContentRequest {
        contents: vec![Content {
            role: Some("user".to_string()),
            parts,
        }],
        generation_config: Some(generation_config),
        safety_settings,
    }
}

/// Decode a wire chunk into core chunk parts.
///
/// Only the first candidate is inspected, matching how the upstream SDKs
/// surface streamed content. Inline payloads are base64-decoded here so the
/// orchestrator deals in raw bytes only.
pub(crate) fn decode_chunk(wire: StreamChunk) -> Result<GenerationChunk, GeminiError> {
    let Some(candidate) = wire.candidates.into_iter().next() else {
        return Ok(GenerationChunk::default());
    };
    let Some(content) = candidate.content else {
        return Ok(GenerationChunk::default());
    };

    let mut parts = Vec::with_capacity(content.parts.len());
    for part in content.parts {
        match part {
            Part::Text { text } => parts.push(ChunkPart::Text(text)),
            Part::InlineData { inline_data } => {
                let data = STANDARD.decode(&inline_data.data).map_err(|e| {
                    GeminiError::new(GeminiErrorKind::ResponseParsing(format!(
                        "invalid base64 inline data: {}",
                        e
                    )))
                })?;
                parts.push(ChunkPart::InlineData {
                    mime: inline_data.mime_type,
                    data,
                });
            }
        }
    }
    Ok(GenerationChunk::new(parts))
}
