//! Core data types for the pictor generation relay.
//!
//! This crate provides the foundation data types passed between the fetcher,
//! the model client, the orchestrator, and the storage client.

mod artifact;
mod asset;
mod chunk;
mod invocation;
mod modality;
mod observability;
mod request;
mod stored;

pub use artifact::GeneratedArtifact;
pub use asset::FetchedAsset;
pub use chunk::{ChunkPart, GenerationChunk};
pub use invocation::{ImageOptions, InvocationSpec, InvocationSpecBuilder};
pub use modality::Modality;
pub use observability::init_tracing;
pub use request::{ImageRequest, ImageRequestBuilder, TextRequest, TextRequestBuilder};
pub use stored::StoredObject;
