//! Relay server entry point.

use pictor_core::init_tracing;
use pictor_models::GeminiClient;
use pictor_pipeline::GenerationPipeline;
use pictor_server::{ApiState, RelayConfig, create_router};
use pictor_storage::GcsClient;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    init_tracing("pictor=info,pictor_server=info")?;

    let config = RelayConfig::from_env();
    info!(
        project = %config.project(),
        location = %config.location(),
        bucket = %config.bucket(),
        "Loaded relay configuration"
    );

    let driver = Arc::new(GeminiClient::new(
        config.project().clone(),
        config.location().clone(),
        config.access_token().clone(),
    ));
    let store = Arc::new(GcsClient::new(config.access_token().clone()));
    let pipeline = Arc::new(GenerationPipeline::new(
        driver,
        store,
        config.bucket().clone(),
    ));

    let state = ApiState::new(pipeline, config.api_key().clone());
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!(addr = %config.bind_addr(), "Relay server listening");
    axum::serve(listener, router).await?;

    Ok(())
}
