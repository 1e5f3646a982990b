//! Gemini provider integration for the pictor generation relay.
//!
//! Wraps the Vertex AI `streamGenerateContent` REST API behind the
//! [`pictor_interface::GenerationDriver`] seam.

mod gemini;

pub use gemini::{
    Candidate, Content, GeminiClient, GenerateContentRequest, GenerationConfig, ImageConfig,
    InlineData, Part, SafetySetting, SseBuffer, StreamChunk, ThinkingConfig,
};
