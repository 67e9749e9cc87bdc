//! Retry configuration, delay calculation, and the generator decorator.
//!
//! Provides [`RetryConfig`] for controlling retry behaviour and
//! [`RetryingGenerator`], which wraps a [`TextGenerator`] with automatic
//! retry on failure.
//!
//! The backoff is a fixed exponential curve with no jitter: the sleep
//! before retry `n` is `initial_delay * 2^n` (0-indexed, capped at
//! `max_delay`). Every failure classification is retried by default, a
//! quota error and an unknown error identically; set
//! [`fail_fast`](RetryConfig::fail_fast) to stop early on classifications
//! that cannot heal.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::warn;

use crate::telemetry;

use super::traits::TextGenerator;
use crate::types::GenerationRequest;
use crate::{CurriculaError, Result};

/// Configuration for retry behaviour on failed generation calls.
///
/// ```rust
/// # use curricula::RetryConfig;
/// # use std::time::Duration;
/// let config = RetryConfig::new()
///     .max_attempts(5)
///     .initial_delay(Duration::from_millis(200))
///     .fail_fast(true);
/// ```
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of attempts (including the initial request).
    /// 1 = no retry. Default: 3.
    pub max_attempts: u32,
    /// Base delay before the first retry. Default: 1s.
    pub initial_delay: Duration,
    /// Maximum delay between retries (caps exponential growth). Default: 30s.
    pub max_delay: Duration,
    /// Stop retrying when the failure classification is permanent
    /// (bad credential, unknown model, malformed payload). Default: false.
    pub fail_fast: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(30),
            fail_fast: false,
        }
    }
}

impl RetryConfig {
    /// Create a new config with sensible defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a config that disables retries (single attempt).
    pub fn disabled() -> Self {
        Self {
            max_attempts: 1,
            ..Self::default()
        }
    }

    /// Set maximum attempts (including the initial request).
    pub fn max_attempts(mut self, n: u32) -> Self {
        self.max_attempts = n;
        self
    }

    /// Set the base delay before the first retry.
    pub fn initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = delay;
        self
    }

    /// Set the maximum delay between retries.
    pub fn max_delay(mut self, delay: Duration) -> Self {
        self.max_delay = delay;
        self
    }

    /// Enable or disable short-circuiting on permanent failures.
    pub fn fail_fast(mut self, enabled: bool) -> Self {
        self.fail_fast = enabled;
        self
    }

    /// Calculate the delay for a given attempt number (0-indexed).
    ///
    /// Uses exponential backoff: `initial_delay * 2^attempt`, capped at
    /// `max_delay`. No jitter is applied.
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let delay = self
            .initial_delay
            .saturating_mul(2u32.saturating_pow(attempt));
        delay.min(self.max_delay)
    }
}

// ============================================================================
// Shared retry helper
// ============================================================================

/// Execute an async operation with retry logic.
///
/// Retries every failure up to `config.max_attempts`, sleeping
/// `delay_for_attempt` between attempts. On exhaustion the last failure is
/// propagated unchanged. When `config.fail_fast` is set, failures that
/// [`CurriculaError::is_permanent`] classifies as unhealable are returned
/// immediately.
pub(crate) async fn with_retry<F, Fut, T>(
    config: &RetryConfig,
    provider_name: &str,
    operation: &str,
    f: F,
) -> Result<T>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let mut last_err = None;
    for attempt in 0..config.max_attempts {
        match f().await {
            Ok(result) => return Ok(result),
            Err(e) if config.fail_fast && e.is_permanent() => return Err(e),
            Err(e) => {
                metrics::counter!(telemetry::RETRIES_TOTAL,
                    "provider" => provider_name.to_owned(),
                    "operation" => operation.to_owned(),
                )
                .increment(1);
                if attempt + 1 < config.max_attempts {
                    let delay = config.delay_for_attempt(attempt);
                    warn!(
                        provider = provider_name,
                        operation,
                        attempt = attempt + 1,
                        max_attempts = config.max_attempts,
                        delay_ms = delay.as_millis() as u64,
                        error = %e,
                        "retrying after failed attempt"
                    );
                    tokio::time::sleep(delay).await;
                }
                last_err = Some(e);
            }
        }
    }
    Err(last_err
        .unwrap_or_else(|| CurriculaError::Configuration("retry budget is zero".to_string())))
}

// ============================================================================
// RetryingGenerator
// ============================================================================

/// Decorator that wraps a [`TextGenerator`] with retry logic.
///
/// All failures are retried with fixed exponential backoff up to
/// `config.max_attempts`; the last failure propagates unchanged after
/// exhaustion. With `fail_fast` enabled, permanent classifications return
/// immediately instead of consuming the budget.
pub struct RetryingGenerator {
    inner: Arc<dyn TextGenerator>,
    config: RetryConfig,
}

impl RetryingGenerator {
    /// Wrap a generator with retry logic.
    pub fn new(inner: Arc<dyn TextGenerator>, config: RetryConfig) -> Self {
        Self { inner, config }
    }

    /// The wrapped generator's retry configuration.
    pub fn config(&self) -> &RetryConfig {
        &self.config
    }
}

#[async_trait]
impl TextGenerator for RetryingGenerator {
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<String> {
        with_retry(&self.config, self.inner.name(), "generate", || {
            self.inner.generate(request)
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delay_doubles_per_attempt() {
        let config = RetryConfig::new();
        assert_eq!(config.delay_for_attempt(0), Duration::from_secs(1));
        assert_eq!(config.delay_for_attempt(1), Duration::from_secs(2));
        assert_eq!(config.delay_for_attempt(2), Duration::from_secs(4));
        assert_eq!(config.delay_for_attempt(3), Duration::from_secs(8));
    }

    #[test]
    fn delay_is_capped_at_max() {
        let config = RetryConfig::new()
            .initial_delay(Duration::from_secs(1))
            .max_delay(Duration::from_secs(5));
        assert_eq!(config.delay_for_attempt(10), Duration::from_secs(5));
    }

    #[test]
    fn huge_attempt_numbers_saturate() {
        let config = RetryConfig::new();
        // 2^40 overflows u32; saturating arithmetic must land on the cap.
        assert_eq!(config.delay_for_attempt(40), config.max_delay);
    }

    #[test]
    fn disabled_makes_a_single_attempt() {
        let config = RetryConfig::disabled();
        assert_eq!(config.max_attempts, 1);
    }
}
