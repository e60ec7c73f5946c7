//! Fixed-delay retry for async operations
//!
//! An operation is attempted up to `max_attempts` times. Between two attempts
//! the loop sleeps for a constant `delay`; there is no backoff curve and no
//! jitter. The first success ends the loop.

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;
use tracing::{error, info, warn};

use crate::logging::format_duration;

/// How many times to attempt an operation and how long to wait in between
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetryPolicy {
    /// Maximum number of attempts, including the first (always at least 1)
    pub max_attempts: u32,

    /// Constant pause between two attempts
    pub delay: Duration,
}

impl RetryPolicy {
    /// Create a policy; a `max_attempts` of zero is raised to one
    ///
    /// ```rust
    /// use tooling::async_utils::retry::RetryPolicy;
    /// use std::time::Duration;
    ///
    /// let policy = RetryPolicy::new(0, Duration::from_secs(1));
    /// assert_eq!(policy.max_attempts, 1);
    /// ```
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            delay,
        }
    }

    /// Create a policy from a delay in (possibly fractional) seconds
    ///
    /// Negative, NaN or overflowing delays become zero.
    pub fn from_secs_f64(max_attempts: u32, delay_seconds: f64) -> Self {
        let delay = Duration::try_from_secs_f64(delay_seconds).unwrap_or(Duration::ZERO);
        Self::new(max_attempts, delay)
    }

    /// Whether another attempt is allowed after `attempt` (1-indexed) failed
    pub fn should_retry(&self, attempt: u32) -> bool {
        attempt < self.max_attempts
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(3, Duration::from_secs(1))
    }
}

/// Result of a retried operation together with the number of attempts made
#[derive(Debug)]
pub struct RetryOutcome<T, E> {
    /// Value of the successful attempt, or the error of the last one
    pub result: Result<T, E>,

    /// Attempts actually made (1..=max_attempts)
    pub attempts: u32,
}

impl<T, E> RetryOutcome<T, E> {
    /// Whether the operation eventually succeeded
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Execute an async operation under a fixed-delay retry policy
///
/// `operation` receives the 1-indexed attempt number. Every attempt, failure
/// and wait is logged under the given `name`.
///
/// ```rust,ignore
/// let outcome = with_retry(&policy, "document_processing", |attempt| async move {
///     provider.generate_text(&prompt, 100).await
/// })
/// .await;
/// ```
pub async fn with_retry<F, Fut, T, E>(
    policy: &RetryPolicy,
    name: &str,
    mut operation: F,
) -> RetryOutcome<T, E>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 1;

    loop {
        info!(
            operation = name,
            attempt,
            max_attempts,
            "Executing {} (attempt {}/{})",
            name,
            attempt,
            max_attempts
        );

        match operation(attempt).await {
            Ok(value) => {
                info!(operation = name, attempt, "{} completed successfully", name);
                return RetryOutcome {
                    result: Ok(value),
                    attempts: attempt,
                };
            }
            Err(err) => {
                warn!(operation = name, attempt, error = %err, "{} failed: {}", name, err);

                if !policy.should_retry(attempt) {
                    error!(
                        operation = name,
                        attempts = attempt,
                        "{} failed after {} attempts",
                        name,
                        attempt
                    );
                    return RetryOutcome {
                        result: Err(err),
                        attempts: attempt,
                    };
                }

                info!(
                    operation = name,
                    delay = ?policy.delay,
                    "Retrying in {}...",
                    format_duration(policy.delay)
                );
                if !policy.delay.is_zero() {
                    tokio::time::sleep(policy.delay).await;
                }
                attempt += 1;
            }
        }
    }
}
