//! Orchestrator tests against scripted collaborators.
//!
//! Time is paused so backoff sleeps between retry attempts resolve
//! instantly.

use async_trait::async_trait;
use pictor_core::{
    ChunkPart, GenerationChunk, ImageRequest, InvocationSpec, TextRequest,
};
use pictor_error::{GeminiError, GeminiErrorKind, StorageError};
use pictor_interface::{ChunkStream, GenerationDriver, ObjectStore};
use pictor_pipeline::GenerationPipeline;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// One scripted driver response.
enum Script {
    Fail(GeminiErrorKind),
    Chunks(Vec<GenerationChunk>),
}

/// Driver that plays back scripted responses and counts invocations.
struct ScriptedDriver {
    script: Mutex<VecDeque<Script>>,
    calls: AtomicUsize,
}

impl ScriptedDriver {
    fn new(script: Vec<Script>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GenerationDriver for ScriptedDriver {
    async fn stream_generate(&self, _spec: &InvocationSpec) -> Result<ChunkStream, GeminiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let next = self.script.lock().unwrap().pop_front();
        match next {
            Some(Script::Fail(kind)) => Err(GeminiError::new(kind)),
            Some(Script::Chunks(chunks)) => {
                Ok(Box::pin(futures::stream::iter(chunks.into_iter().map(Ok))))
            }
            None => panic!("driver called more times than scripted"),
        }
    }
}

/// Store that records uploads and returns a public-style URL.
#[derive(Default)]
struct RecordingStore {
    uploads: Mutex<Vec<(Vec<u8>, String, String, String)>>,
}

impl RecordingStore {
    fn uploads(&self) -> Vec<(Vec<u8>, String, String, String)> {
        self.uploads.lock().unwrap().clone()
    }
}

#[async_trait]
impl ObjectStore for RecordingStore {
    async fn store(
        &self,
        data: &[u8],
        bucket: &str,
        path: &str,
        mime: &str,
    ) -> Result<String, StorageError> {
        self.uploads.lock().unwrap().push((
            data.to_vec(),
            bucket.to_string(),
            path.to_string(),
            mime.to_string(),
        ));
        Ok(format!("https://storage.googleapis.com/{}/{}", bucket, path))
    }
}

fn image_chunk(mime: &str, data: &[u8]) -> GenerationChunk {
    GenerationChunk::new(vec![ChunkPart::InlineData {
        mime: mime.to_string(),
        data: data.to_vec(),
    }])
}

fn text_chunk(text: &str) -> GenerationChunk {
    GenerationChunk::new(vec![ChunkPart::Text(text.to_string())])
}

fn image_request() -> ImageRequest {
    serde_json::from_str(r#"{"prompt": "a red fox", "folder": "results"}"#).unwrap()
}

fn text_request() -> TextRequest {
    serde_json::from_str(r#"{"prompt": "say hello"}"#).unwrap()
}

fn pipeline<D: GenerationDriver>(
    driver: Arc<D>,
    store: Arc<RecordingStore>,
) -> GenerationPipeline<D, RecordingStore> {
    GenerationPipeline::new(driver, store, "test-bucket")
}

#[tokio::test(start_paused = true)]
async fn rate_limited_twice_then_success_takes_three_calls() {
    let driver = Arc::new(ScriptedDriver::new(vec![
        Script::Fail(GeminiErrorKind::RateLimited("quota".to_string())),
        Script::Fail(GeminiErrorKind::RateLimited("quota".to_string())),
        Script::Chunks(vec![image_chunk("image/webp", &[1, 2, 3])]),
    ]));
    let store = Arc::new(RecordingStore::default());

    let outcome = pipeline(driver.clone(), store.clone())
        .generate_image(&image_request())
        .await
        .unwrap();

    assert_eq!(driver.calls(), 3);
    assert_eq!(outcome.status(), "success");
    assert_eq!(outcome.mime_type(), "image/webp");
    assert!(outcome.filename().starts_with("results/"));
    assert!(outcome.filename().ends_with(".webp"));
    assert_eq!(
        outcome.image_url(),
        &format!("https://storage.googleapis.com/test-bucket/{}", outcome.filename())
    );

    let uploads = store.uploads();
    assert_eq!(uploads.len(), 1);
    assert_eq!(uploads[0].0, vec![1, 2, 3]);
    assert_eq!(uploads[0].1, "test-bucket");
}

#[tokio::test(start_paused = true)]
async fn non_retryable_error_fails_after_one_call() {
    let driver = Arc::new(ScriptedDriver::new(vec![Script::Fail(
        GeminiErrorKind::Api {
            status_code: 400,
            message: "malformed".to_string(),
        },
    )]));
    let store = Arc::new(RecordingStore::default());

    let err = pipeline(driver.clone(), store.clone())
        .generate_image(&image_request())
        .await
        .unwrap_err();

    assert_eq!(driver.calls(), 1);
    assert_eq!(err.status_code(), 400);
    assert!(store.uploads().is_empty());
}

#[tokio::test(start_paused = true)]
async fn empty_stream_is_retried_to_exhaustion() {
    let driver = Arc::new(ScriptedDriver::new(vec![
        Script::Chunks(vec![text_chunk("no image here")]),
        Script::Chunks(vec![]),
        Script::Chunks(vec![GenerationChunk::default()]),
    ]));
    let store = Arc::new(RecordingStore::default());

    let err = pipeline(driver.clone(), store.clone())
        .generate_image(&image_request())
        .await
        .unwrap_err();

    assert_eq!(driver.calls(), 3);
    assert_eq!(err.status_code(), 500);
    assert!(store.uploads().is_empty());
}

#[tokio::test(start_paused = true)]
async fn retry_exhaustion_reports_the_last_error() {
    let driver = Arc::new(ScriptedDriver::new(vec![
        Script::Fail(GeminiErrorKind::RateLimited("quota".to_string())),
        Script::Fail(GeminiErrorKind::RateLimited("quota".to_string())),
        Script::Fail(GeminiErrorKind::RateLimited("quota".to_string())),
    ]));
    let store = Arc::new(RecordingStore::default());

    let err = pipeline(driver.clone(), store.clone())
        .generate_image(&image_request())
        .await
        .unwrap_err();

    assert_eq!(driver.calls(), 3);
    assert_eq!(err.status_code(), 429);
}

#[tokio::test(start_paused = true)]
async fn first_generated_image_wins() {
    let driver = Arc::new(ScriptedDriver::new(vec![Script::Chunks(vec![
        text_chunk("rendering"),
        image_chunk("image/png", &[10, 11]),
        image_chunk("image/jpeg", &[20, 21]),
    ])]));
    let store = Arc::new(RecordingStore::default());

    let outcome = pipeline(driver.clone(), store.clone())
        .generate_image(&image_request())
        .await
        .unwrap();

    assert_eq!(outcome.mime_type(), "image/png");
    let uploads = store.uploads();
    assert_eq!(uploads.len(), 1);
    assert_eq!(uploads[0].0, vec![10, 11]);
}

#[tokio::test(start_paused = true)]
async fn text_chunks_concatenate_in_order_and_trim() {
    let driver = Arc::new(ScriptedDriver::new(vec![Script::Chunks(vec![
        text_chunk("Hello"),
        text_chunk(" world  "),
    ])]));
    let store = Arc::new(RecordingStore::default());

    let text = pipeline(driver.clone(), store.clone())
        .generate_text(&text_request())
        .await
        .unwrap();

    assert_eq!(text, "Hello world");
    assert_eq!(driver.calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn text_generation_does_not_retry() {
    let driver = Arc::new(ScriptedDriver::new(vec![Script::Fail(
        GeminiErrorKind::RateLimited("quota".to_string()),
    )]));
    let store = Arc::new(RecordingStore::default());

    let err = pipeline(driver.clone(), store.clone())
        .generate_text(&text_request())
        .await
        .unwrap_err();

    assert_eq!(driver.calls(), 1);
    assert_eq!(err.status_code(), 429);
}

#[tokio::test(start_paused = true)]
async fn mid_stream_error_propagates() {
    struct MidStreamFailDriver;

    #[async_trait]
    impl GenerationDriver for MidStreamFailDriver {
        async fn stream_generate(
            &self,
            _spec: &InvocationSpec,
        ) -> Result<ChunkStream, GeminiError> {
            Ok(Box::pin(futures::stream::iter(vec![
                Ok(GenerationChunk::new(vec![ChunkPart::Text(
                    "partial".to_string(),
                )])),
                Err(GeminiError::new(GeminiErrorKind::ResponseParsing(
                    "truncated chunk".to_string(),
                ))),
            ])))
        }
    }

    let store = Arc::new(RecordingStore::default());
    let err = GenerationPipeline::new(Arc::new(MidStreamFailDriver), store, "test-bucket")
        .generate_text(&text_request())
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), 500);
}
