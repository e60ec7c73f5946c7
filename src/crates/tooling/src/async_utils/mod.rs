//! Async utilities
//!
//! - `retry` - bounded, fixed-delay retry loop with per-attempt logging
//!
//! # Example
//!
//! ```rust,ignore
//! use tooling::async_utils::retry::{RetryPolicy, with_retry};
//!
//! let policy = RetryPolicy::from_secs_f64(3, 1.0);
//! let outcome = with_retry(&policy, "skip_trace", |_attempt| async {
//!     call_provider().await
//! })
//! .await;
//!
//! println!("finished after {} attempt(s)", outcome.attempts);
//! ```

pub mod retry;
