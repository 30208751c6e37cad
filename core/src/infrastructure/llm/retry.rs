use std::{future::Future, time::Duration};

use crate::domain::common::entities::app_errors::CoreError;

/// Why a single request attempt failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptError {
    /// HTTP 429.
    RateLimited,
    /// Any other non-success status.
    Status { status: u16, body: String },
    /// The request never produced a response.
    Transport(String),
    /// A response arrived but could not be understood. Never retried.
    Malformed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(1000),
        }
    }
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, base_delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            base_delay,
        }
    }

    /// Exponential: `base × 2^attempt`.
    pub fn rate_limit_delay(&self, attempt: u32) -> Duration {
        self.base_delay.saturating_mul(2u32.saturating_pow(attempt))
    }

    /// Linear: `base × attempt`.
    pub fn transient_delay(&self, attempt: u32) -> Duration {
        self.base_delay.saturating_mul(attempt)
    }
}

/// Runs `operation` until it succeeds or the policy gives up.
///
/// The closure receives the 1-based attempt number. Rate limiting backs off
/// exponentially and ends in [`CoreError::RateLimitExceeded`]; other status
/// and transport failures back off linearly and end in
/// [`CoreError::ExternalServiceError`]; malformed responses fail at once.
/// Sleeping suspends only the calling task.
pub async fn with_retry<T, F, Fut>(policy: &RetryPolicy, mut operation: F) -> Result<T, CoreError>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, AttemptError>>,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 1;

    loop {
        let error = match operation(attempt).await {
            Ok(value) => return Ok(value),
            Err(error) => error,
        };

        let delay = match &error {
            AttemptError::Malformed(message) => {
                tracing::error!("Failed to parse LLM response: {}", message);
                return Err(CoreError::ExternalServiceError(format!(
                    "Failed to parse LLM response: {}",
                    message
                )));
            }
            AttemptError::RateLimited if attempt >= max_attempts => {
                tracing::error!("LLM rate limit still exceeded after {} attempts", attempt);
                return Err(CoreError::RateLimitExceeded);
            }
            AttemptError::RateLimited => policy.rate_limit_delay(attempt),
            AttemptError::Status { status, body } if attempt >= max_attempts => {
                tracing::error!("LLM API error: {} - {}", status, body);
                return Err(CoreError::ExternalServiceError(format!(
                    "LLM API returned error: {} - {}",
                    status, body
                )));
            }
            AttemptError::Transport(message) if attempt >= max_attempts => {
                tracing::error!("LLM API request failed: {}", message);
                return Err(CoreError::ExternalServiceError(format!(
                    "LLM API error: {}",
                    message
                )));
            }
            AttemptError::Status { .. } | AttemptError::Transport(_) => {
                policy.transient_delay(attempt)
            }
        };

        tracing::warn!(
            attempt,
            max_attempts,
            delay_ms = delay.as_millis() as u64,
            error = ?error,
            "LLM request failed, retrying"
        );
        tokio::time::sleep(delay).await;
        attempt += 1;
    }
}
