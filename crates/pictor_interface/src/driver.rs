//! Streaming model driver trait.

use async_trait::async_trait;
use futures::stream::BoxStream;
use pictor_core::{GenerationChunk, InvocationSpec};
use pictor_error::GeminiError;

/// Stream of decoded chunks produced by one generation call.
pub type ChunkStream = BoxStream<'static, Result<GenerationChunk, GeminiError>>;

/// A streaming generative model backend.
///
/// Implementations wrap one provider API. The returned stream yields decoded
/// chunks in arrival order; stream items may carry errors for mid-stream
/// failures (e.g. a malformed chunk).
#[async_trait]
pub trait GenerationDriver: Send + Sync {
    /// Start a streaming generation call for the given invocation.
    ///
    /// Errors returned here cover request construction and connection
    /// establishment; once a stream is returned, failures surface as stream
    /// items.
    async fn stream_generate(&self, spec: &InvocationSpec) -> Result<ChunkStream, GeminiError>;
}
