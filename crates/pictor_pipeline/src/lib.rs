//! Generation orchestration for the pictor relay.
//!
//! The pipeline assembles multi-part prompts (text plus fetched images),
//! invokes the model driver in streaming mode, assembles the streamed
//! output, applies the retry policy, and pipes generated images through the
//! object store.

mod error;
mod outcome;
mod pipeline;
mod retry;

pub use error::PipelineError;
pub use outcome::ImageOutcome;
pub use pipeline::GenerationPipeline;
pub use retry::{RetryConfig, retry_with_backoff};
