//! Trait seams between the orchestrator and its collaborators.
//!
//! The orchestrator is generic over these traits so the model client and the
//! object store are explicitly constructed long-lived handles rather than
//! process-wide singletons, and so tests can script both collaborators.

mod driver;
mod store;

pub use driver::{ChunkStream, GenerationDriver};
pub use store::ObjectStore;
