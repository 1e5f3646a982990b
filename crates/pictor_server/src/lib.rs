//! HTTP facade for the pictor generation relay.
//!
//! Request validation, the shared-secret authentication gate, and route
//! dispatch into the generation pipeline.

mod api;
mod config;
mod response;

pub use api::{ApiState, create_router};
pub use config::{RelayConfig, RelayConfigBuilder};
pub use response::TextGenResponse;
