//! Gemini Vertex AI client modules.

mod client;
mod conversions;
mod dto;
mod sse;

pub use client::GeminiClient;
pub use dto::{
    Candidate, Content, GenerateContentRequest, GenerationConfig, ImageConfig, InlineData, Part,
    SafetySetting, StreamChunk, ThinkingConfig,
};
pub use sse::SseBuffer;

pub(crate) use conversions::{build_request, decode_chunk};
