//! The generation orchestrator.

use crate::retry::{RetryConfig, retry_with_backoff};
use crate::{ImageOutcome, PipelineError};
use futures_util::StreamExt;
use pictor_core::{
    ChunkPart, FetchedAsset, GeneratedArtifact, ImageOptions, ImageRequest, InvocationSpec,
    Modality, StoredObject, TextRequest,
};
use pictor_error::{GeminiError, GeminiErrorKind};
use pictor_fetch::ContentFetcher;
use pictor_interface::{GenerationDriver, ObjectStore};
use pictor_storage::object_path;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Orchestrates one generation request end to end.
///
/// Generic over the model driver and the object store so both arrive as
/// explicitly constructed long-lived handles. A pipeline holds no
/// per-request state and is shared across all concurrent requests.
pub struct GenerationPipeline<D, S> {
    driver: Arc<D>,
    store: Arc<S>,
    fetcher: ContentFetcher,
    bucket: String,
    retry: RetryConfig,
}

impl<D: GenerationDriver, S: ObjectStore> GenerationPipeline<D, S> {
    /// Creates a new pipeline over the given collaborators.
    pub fn new(driver: Arc<D>, store: Arc<S>, bucket: impl Into<String>) -> Self {
        Self {
            driver,
            store,
            fetcher: ContentFetcher::new(),
            bucket: bucket.into(),
            retry: RetryConfig::default(),
        }
    }

    /// Generate an image, upload it, and return the stored reference.
    ///
    /// The whole fetch-generate-assemble sequence is retried on retryable
    /// model errors (rate limit, empty generation); the upload happens once,
    /// after a successful attempt.
    #[instrument(skip_all, fields(model = %request.model()))]
    pub async fn generate_image(
        &self,
        request: &ImageRequest,
    ) -> Result<ImageOutcome, PipelineError> {
        let artifact =
            retry_with_backoff(&self.retry, || self.attempt_image(request)).await?;

        let (mime, data) = match artifact {
            GeneratedArtifact::Image { mime, data } => (mime, data),
            GeneratedArtifact::Text(_) => {
                return Err(GeminiError::new(GeminiErrorKind::EmptyGeneration).into());
            }
        };

        let path = object_path(request.folder(), &mime);
        let url = self.store.store(&data, &self.bucket, &path, &mime).await?;
        let stored = StoredObject::new(self.bucket.clone(), path, url);

        info!(
            url = %stored.url(),
            path = %stored.path(),
            mime = %mime,
            "Image generated and stored"
        );
        Ok(ImageOutcome::new(stored, request.model(), mime))
    }

    /// Generate text, concatenating streamed chunks in arrival order.
    ///
    /// No retry on this path; any model failure propagates directly.
    #[instrument(skip_all, fields(model = %request.model()))]
    pub async fn generate_text(&self, request: &TextRequest) -> Result<String, PipelineError> {
        let assets = self.fetch_assets(request.image_urls()).await?;

        let spec = InvocationSpec::builder()
            .model(request.model().clone())
            .prompt(request.prompt().clone())
            .assets(assets)
            .modalities(vec![Modality::Text])
            .thinking_level(
                request
                    .supports_thinking()
                    .then(|| request.thinking_level().clone()),
            )
            .build()
            .expect("Valid InvocationSpec");

        let mut stream = self.driver.stream_generate(&spec).await?;
        let mut text = String::new();
        while let Some(chunk) = stream.next().await {
            text.push_str(&chunk?.text());
        }

        Ok(text.trim().to_string())
    }

    /// One image generation attempt: fetch assets, stream, select artifact.
    async fn attempt_image(
        &self,
        request: &ImageRequest,
    ) -> Result<GeneratedArtifact, PipelineError> {
        let assets = self.fetch_assets(request.image_urls()).await?;

        let spec = InvocationSpec::builder()
            .model(request.model().clone())
            .prompt(request.prompt().clone())
            .assets(assets)
            .modalities(vec![Modality::Image, Modality::Text])
            .image_options(Some(ImageOptions::new(
                request.aspect_ratio(),
                request.image_size(),
            )))
            .relax_safety(true)
            .build()
            .expect("Valid InvocationSpec");

        let mut stream = self.driver.stream_generate(&spec).await?;
        let mut images: Vec<(String, Vec<u8>)> = Vec::new();
        while let Some(chunk) = stream.next().await {
            for part in chunk?.parts {
                if let ChunkPart::InlineData { mime, data } = part {
                    images.push((mime, data));
                }
            }
        }

        if images.is_empty() {
            return Err(GeminiError::new(GeminiErrorKind::EmptyGeneration).into());
        }
        if images.len() > 1 {
            // Documented behavior: only the first generated image is kept.
            debug!(
                discarded = images.len() - 1,
                "Multiple images in stream, keeping the first"
            );
        }

        let (mime, data) = images.swap_remove(0);
        Ok(GeneratedArtifact::Image { mime, data })
    }

    /// Fetch every requested asset, or nothing when no URLs were supplied.
    ///
    /// A fetch failure aborts the request before the model is called, so a
    /// partial asset set is never forwarded.
    async fn fetch_assets(
        &self,
        urls: &Option<Vec<String>>,
    ) -> Result<Vec<FetchedAsset>, PipelineError> {
        match urls {
            Some(urls) if !urls.is_empty() => Ok(self.fetcher.fetch_all(urls).await?),
            _ => Ok(Vec::new()),
        }
    }
}
