//! Streaming client for Gemini on Vertex AI.

use crate::gemini::sse::SseBuffer;
use crate::gemini::{build_request, decode_chunk};
use async_trait::async_trait;
use futures_util::StreamExt;
use pictor_core::InvocationSpec;
use pictor_error::{GeminiError, GeminiErrorKind};
use pictor_interface::{ChunkStream, GenerationDriver};
use reqwest::Client;
use tracing::{debug, error, instrument};

/// Client for the Vertex AI `streamGenerateContent` endpoint.
///
/// Constructed once at startup and shared read-only across requests; it
/// holds no per-request mutable state.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    project: String,
    location: String,
    token: String,
}

impl GeminiClient {
    /// Creates a new Vertex AI client.
    ///
    /// # Arguments
    ///
    /// * `project` - Google Cloud project identifier
    /// * `location` - Region, or "global" for the global endpoint
    /// * `token` - OAuth2 bearer token for the API calls
    #[instrument(skip_all)]
    pub fn new(project: impl Into<String>, location: impl Into<String>, token: String) -> Self {
        let project = project.into();
        let location = location.into();
        debug!(project = %project, location = %location, "Created Gemini client");

        Self {
            client: Client::new(),
            project,
            location,
            token,
        }
    }

    /// Endpoint URL for a streaming generation call against `model`.
    fn endpoint(&self, model: &str) -> String {
        let host = if self.location == "global" {
            "aiplatform.googleapis.com".to_string()
        } else {
            format!("{}-aiplatform.googleapis.com", self.location)
        };
        format!(
            "https://{}/v1/projects/{}/locations/{}/publishers/google/models/{}:streamGenerateContent?alt=sse",
            host, self.project, self.location, model
        )
    }
}

#[async_trait]
impl GenerationDriver for GeminiClient {
    #[instrument(skip_all, fields(model = %spec.model()))]
    async fn stream_generate(&self, spec: &InvocationSpec) -> Result<ChunkStream, GeminiError> {
        if self.token.is_empty() {
            return Err(GeminiError::new(GeminiErrorKind::MissingToken));
        }

        let request = build_request(spec);
        debug!(
            model = %spec.model(),
            parts = request.contents[0].parts.len(),
            "Sending streaming generation request"
        );

        let response = self
            .client
            .post(self.endpoint(spec.model()))
            .bearer_auth(&self.token)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "HTTP request failed");
                GeminiError::new(GeminiErrorKind::Http(e.to_string()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            error!(status = %status, message = %message, "Gemini API error");
            if status.as_u16() == 429 {
                return Err(GeminiError::new(GeminiErrorKind::RateLimited(message)));
            }
            return Err(GeminiError::new(GeminiErrorKind::Api {
                status_code: status.as_u16(),
                message,
            }));
        }

        let mut bytes = response.bytes_stream();
        let stream = async_stream::try_stream! {
            let mut buffer = SseBuffer::new();
            while let Some(chunk) = bytes.next().await {
                let chunk = chunk
                    .map_err(|e| GeminiError::new(GeminiErrorKind::Http(e.to_string())))?;
                for payload in buffer.push(&chunk) {
                    let wire = serde_json::from_str(&payload).map_err(|e| {
                        GeminiError::new(GeminiErrorKind::ResponseParsing(e.to_string()))
                    })?;
                    yield decode_chunk(wire)?;
                }
            }
        };

        Ok(Box::pin(stream))
    }
}
