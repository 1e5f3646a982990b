//! Routes, authentication gate, and error mapping.

use crate::response::TextGenResponse;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use pictor_core::{ImageRequest, TextRequest};
use pictor_interface::{GenerationDriver, ObjectStore};
use pictor_pipeline::{GenerationPipeline, PipelineError};
use serde_json::json;
use std::sync::Arc;
use tracing::{error, info, instrument};

/// Longest error detail ever sent to a caller; the full error is logged
/// server-side only.
const MAX_DETAIL_LEN: usize = 100;

/// Shared state for the API routes.
pub struct ApiState<D, S> {
    /// Generation pipeline handle.
    pub pipeline: Arc<GenerationPipeline<D, S>>,
    /// Shared secret expected in the x-api-key header.
    pub api_key: String,
}

impl<D, S> ApiState<D, S> {
    /// Creates a new API state.
    pub fn new(pipeline: Arc<GenerationPipeline<D, S>>, api_key: impl Into<String>) -> Self {
        Self {
            pipeline,
            api_key: api_key.into(),
        }
    }
}

impl<D, S> Clone for ApiState<D, S> {
    fn clone(&self) -> Self {
        Self {
            pipeline: self.pipeline.clone(),
            api_key: self.api_key.clone(),
        }
    }
}

/// Creates the API router.
///
/// The health route is registered after the auth layer so it stays exempt.
pub fn create_router<D, S>(state: ApiState<D, S>) -> Router
where
    D: GenerationDriver + 'static,
    S: ObjectStore + 'static,
{
    Router::new()
        .route("/api/generate-image", post(generate_image::<D, S>))
        .route("/api/generate-text", post(generate_text::<D, S>))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_api_key::<D, S>,
        ))
        .route("/api/health", get(health_check))
        .with_state(state)
}

/// Shared-secret authentication gate.
async fn require_api_key<D, S>(
    State(state): State<ApiState<D, S>>,
    request: Request,
    next: Next,
) -> Response
where
    D: GenerationDriver + 'static,
    S: ObjectStore + 'static,
{
    let provided = request
        .headers()
        .get("x-api-key")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    if provided != state.api_key {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "detail": "Invalid or missing API Key" })),
        )
            .into_response();
    }

    next.run(request).await
}

/// Health check endpoint.
#[instrument(skip_all)]
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Generate an image, store it, and return the stored reference.
#[instrument(skip_all, fields(model = %request.model()))]
async fn generate_image<D, S>(
    State(state): State<ApiState<D, S>>,
    Json(request): Json<ImageRequest>,
) -> Response
where
    D: GenerationDriver + 'static,
    S: ObjectStore + 'static,
{
    info!(model = %request.model(), folder = %request.folder(), "Processing image generation request");
    match state.pipeline.generate_image(&request).await {
        Ok(outcome) => (StatusCode::OK, Json(outcome)).into_response(),
        Err(err) => error_response(&err),
    }
}

/// Generate text from the prompt and optional images.
#[instrument(skip_all, fields(model = %request.model()))]
async fn generate_text<D, S>(
    State(state): State<ApiState<D, S>>,
    Json(request): Json<TextRequest>,
) -> Response
where
    D: GenerationDriver + 'static,
    S: ObjectStore + 'static,
{
    info!(model = %request.model(), "Processing text generation request");
    match state.pipeline.generate_text(&request).await {
        Ok(text) => (StatusCode::OK, Json(TextGenResponse { text })).into_response(),
        Err(err) => error_response(&err),
    }
}

/// Map a pipeline error to a JSON error body with its classified status.
fn error_response(err: &PipelineError) -> Response {
    let status = StatusCode::from_u16(err.status_code())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    error!(status = %status, error = %err, "Request failed");

    let detail = truncate_detail(err.detail());
    (status, Json(json!({ "detail": detail }))).into_response()
}

/// Truncate an error detail on a char boundary.
fn truncate_detail(detail: String) -> String {
    if detail.chars().count() <= MAX_DETAIL_LEN {
        detail
    } else {
        detail.chars().take(MAX_DETAIL_LEN).collect()
    }
}
