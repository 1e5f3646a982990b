//! Retry with exponential backoff for generation attempts.

use pictor_error::RetryableError;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};

/// Retry configuration for generation attempts.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of attempts, including the first.
    pub max_attempts: usize,
    /// Initial backoff duration.
    pub initial_backoff: Duration,
    /// Maximum backoff duration.
    pub max_backoff: Duration,
    /// Backoff multiplier.
    pub backoff_multiplier: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_backoff: Duration::from_millis(1000),
            max_backoff: Duration::from_millis(10000),
            backoff_multiplier: 2.0,
        }
    }
}

/// Retries an operation with exponential backoff.
///
/// Runs the operation up to `config.max_attempts` times, sleeping between
/// attempts. Errors whose [`RetryableError::is_retryable`] returns false
/// propagate immediately.
pub async fn retry_with_backoff<F, Fut, T, E>(config: &RetryConfig, mut operation: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = Result<T, E>>,
    E: RetryableError + std::fmt::Display,
{
    let mut attempt = 0;
    let mut backoff = config.initial_backoff;

    loop {
        attempt += 1;
        debug!(attempt, "Executing generation attempt");

        match operation().await {
            Ok(result) => {
                if attempt > 1 {
                    debug!(attempt, "Attempt succeeded after retry");
                }
                return Ok(result);
            }
            Err(err) => {
                if !err.is_retryable() {
                    warn!(attempt, error = %err, "Error is not retryable, failing immediately");
                    return Err(err);
                }

                if attempt >= config.max_attempts {
                    warn!(attempt, error = %err, "All retry attempts exhausted");
                    return Err(err);
                }

                debug!(
                    attempt,
                    backoff_ms = backoff.as_millis(),
                    error = %err,
                    "Retrying after backoff"
                );
                sleep(backoff).await;

                // Exponential backoff with cap
                backoff = std::cmp::min(
                    Duration::from_secs_f64(backoff.as_secs_f64() * config.backoff_multiplier),
                    config.max_backoff,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pictor_error::{GeminiError, GeminiErrorKind};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test(start_paused = true)]
    async fn retryable_error_is_retried_until_success() {
        let calls = AtomicUsize::new(0);
        let config = RetryConfig::default();

        let result: Result<u32, GeminiError> = retry_with_backoff(&config, || {
            let n = calls.fetch_add(1, Ordering::SeqCst);
            async move {
                if n < 2 {
                    Err(GeminiError::new(GeminiErrorKind::RateLimited(
                        "quota".to_string(),
                    )))
                } else {
                    Ok(7)
                }
            }
        })
        .await;

        assert_eq!(result.unwrap(), 7);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn non_retryable_error_fails_on_first_attempt() {
        let calls = AtomicUsize::new(0);
        let config = RetryConfig::default();

        let result: Result<u32, GeminiError> = retry_with_backoff(&config, || {
            calls.fetch_add(1, Ordering::SeqCst);
            async {
                Err(GeminiError::new(GeminiErrorKind::Api {
                    status_code: 400,
                    message: "bad".to_string(),
                }))
            }
        })
        .await;

        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn attempts_are_bounded() {
        let calls = AtomicUsize::new(0);
        let config = RetryConfig::default();

        let result: Result<u32, GeminiError> = retry_with_backoff(&config, || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err(GeminiError::new(GeminiErrorKind::EmptyGeneration)) }
        })
        .await;

        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }
}
