//! Concurrent download of request assets.

use crate::mime::normalize_mime;
use futures::future::join_all;
use pictor_core::FetchedAsset;
use pictor_error::{FetchError, FetchErrorKind};
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;
use tracing::{debug, error, instrument};

/// Fixed per-download timeout.
pub const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(10);

/// Downloads a batch of URLs concurrently, preserving input order.
#[derive(Debug, Clone, Default)]
pub struct ContentFetcher {
    client: Client,
}

impl ContentFetcher {
    /// Creates a new content fetcher with its own HTTP client.
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Download every URL concurrently and return the assets in input order.
    ///
    /// Fails on the first error encountered during result collection; since
    /// results are collected in input order, the reported error follows the
    /// input list, not completion order. No partial asset set is ever
    /// returned.
    #[instrument(skip_all, fields(count = urls.len()))]
    pub async fn fetch_all(&self, urls: &[String]) -> Result<Vec<FetchedAsset>, FetchError> {
        let downloads = urls.iter().map(|url| self.fetch_one(url));
        let results = join_all(downloads).await;

        let mut assets = Vec::with_capacity(urls.len());
        for result in results {
            assets.push(result?);
        }
        Ok(assets)
    }

    /// Download a single URL and normalize its MIME type.
    async fn fetch_one(&self, url: &str) -> Result<FetchedAsset, FetchError> {
        let response = self
            .client
            .get(url)
            .timeout(DOWNLOAD_TIMEOUT)
            .send()
            .await
            .map_err(|e| classify(url, &e))?
            .error_for_status()
            .map_err(|e| classify(url, &e))?;

        let mime = normalize_mime(
            response
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|v| v.to_str().ok()),
        );

        let bytes = response.bytes().await.map_err(|e| classify(url, &e))?;
        debug!(url, mime, size = bytes.len(), "Downloaded asset");

        Ok(FetchedAsset::new(bytes.to_vec(), mime))
    }
}

/// Map a reqwest error to a download error kind, logging the offending URL.
fn classify(url: &str, err: &reqwest::Error) -> FetchError {
    let kind = if err.is_timeout() {
        error!(url, "Asset download timed out");
        FetchErrorKind::Timeout(url.to_string())
    } else if err.is_status() || err.is_connect() || err.is_redirect() || err.is_request() {
        error!(url, error = %err, "Asset download failed");
        FetchErrorKind::Network {
            url: url.to_string(),
            message: err.to_string(),
        }
    } else {
        error!(url, error = %err, "Unexpected asset download error");
        FetchErrorKind::Unknown {
            url: url.to_string(),
            message: err.to_string(),
        }
    };
    FetchError::new(kind)
}
