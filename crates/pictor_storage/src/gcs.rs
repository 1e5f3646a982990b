//! GCS upload client.

use async_trait::async_trait;
use pictor_error::{StorageError, StorageErrorKind};
use pictor_interface::ObjectStore;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Url};
use tracing::{error, info, instrument};

/// Public URL for an object in a bucket.
pub fn public_url(bucket: &str, path: &str) -> String {
    format!("https://storage.googleapis.com/{}/{}", bucket, path)
}

/// Client for the GCS JSON upload API.
///
/// Constructed once at startup and shared read-only across requests.
#[derive(Debug, Clone)]
pub struct GcsClient {
    client: Client,
    token: String,
}

impl GcsClient {
    /// Creates a new GCS client with an OAuth2 bearer token.
    pub fn new(token: String) -> Self {
        Self {
            client: Client::new(),
            token,
        }
    }
}

#[async_trait]
impl ObjectStore for GcsClient {
    #[instrument(skip(self, data), fields(size = data.len()))]
    async fn store(
        &self,
        data: &[u8],
        bucket: &str,
        path: &str,
        mime: &str,
    ) -> Result<String, StorageError> {
        if self.token.is_empty() {
            return Err(StorageError::new(StorageErrorKind::InvalidConfig(
                "no access token configured for storage uploads".to_string(),
            )));
        }

        // uploadType=media puts the object name in the query string, where
        // slashes in the path must be percent-encoded.
        let endpoint = format!(
            "https://storage.googleapis.com/upload/storage/v1/b/{}/o",
            bucket
        );
        let url = Url::parse_with_params(&endpoint, &[("uploadType", "media"), ("name", path)])
            .map_err(|e| StorageError::new(StorageErrorKind::InvalidConfig(e.to_string())))?;

        let response = self
            .client
            .post(url)
            .bearer_auth(&self.token)
            .header(CONTENT_TYPE, mime)
            .body(data.to_vec())
            .send()
            .await
            .map_err(|e| {
                error!(bucket, path, error = %e, "Storage upload request failed");
                StorageError::new(StorageErrorKind::Http(e.to_string()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            error!(bucket, path, status = %status, message = %message, "Storage upload rejected");
            return Err(StorageError::new(StorageErrorKind::Upload {
                status_code: status.as_u16(),
                message,
            }));
        }

        info!(bucket, path, mime, size = data.len(), "Uploaded object");
        Ok(public_url(bucket, path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_url_is_bucket_then_path() {
        assert_eq!(
            public_url("my-bucket", "results/abc.png"),
            "https://storage.googleapis.com/my-bucket/results/abc.png"
        );
    }

    #[tokio::test]
    async fn empty_token_fails_before_any_request() {
        let client = GcsClient::new(String::new());
        let err = client
            .store(b"bytes", "bucket", "results/x.png", "image/png")
            .await
            .unwrap_err();
        assert!(matches!(err.kind, StorageErrorKind::InvalidConfig(_)));
    }
}
