//! Environment-sourced relay configuration.

use derive_getters::Getters;
use tracing::warn;

/// Shared-secret default used when `RELAY_API_KEY` is unset. Development
/// only.
const DEV_API_KEY: &str = "sk-dev-relay-key";

/// Relay configuration.
///
/// Every field has a hardcoded default suitable only for development, so
/// `from_env` never fails; production deployments are expected to set all
/// variables.
#[derive(Debug, Clone, PartialEq, Eq, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct RelayConfig {
    /// Google Cloud project identifier
    project: String,
    /// Region, or "global" for the global endpoint
    location: String,
    /// GCS bucket generated images are uploaded to
    bucket: String,
    /// Shared secret expected in the x-api-key header
    api_key: String,
    /// OAuth2 bearer token for Vertex AI and GCS calls
    access_token: String,
    /// Socket address the server binds to
    bind_addr: String,
}

impl RelayConfig {
    /// Create config from environment variables.
    ///
    /// Reads:
    /// - `GOOGLE_CLOUD_PROJECT` (default: empty)
    /// - `GOOGLE_CLOUD_LOCATION` (default: "global")
    /// - `GOOGLE_CLOUD_GCS_BUCKET` (default: empty)
    /// - `RELAY_API_KEY` (default: development key)
    /// - `GOOGLE_ACCESS_TOKEN` (default: empty)
    /// - `RELAY_BIND_ADDR` (default: "0.0.0.0:8000")
    pub fn from_env() -> Self {
        let project = std::env::var("GOOGLE_CLOUD_PROJECT").unwrap_or_default();
        let location =
            std::env::var("GOOGLE_CLOUD_LOCATION").unwrap_or_else(|_| "global".to_string());
        let bucket = std::env::var("GOOGLE_CLOUD_GCS_BUCKET").unwrap_or_default();
        let api_key = std::env::var("RELAY_API_KEY").unwrap_or_else(|_| {
            warn!("RELAY_API_KEY not set, using the development key");
            DEV_API_KEY.to_string()
        });
        let access_token = std::env::var("GOOGLE_ACCESS_TOKEN").unwrap_or_default();
        let bind_addr =
            std::env::var("RELAY_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string());

        RelayConfigBuilder::default()
            .project(project)
            .location(location)
            .bucket(bucket)
            .api_key(api_key)
            .access_token(access_token)
            .bind_addr(bind_addr)
            .build()
            .expect("Valid RelayConfig")
    }
}
