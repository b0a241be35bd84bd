//! Bounded retry for side-channel fetches.
//!
//! Carriers often generate documents asynchronously, so the first fetch of
//! a quote letter may fail even though the quote itself succeeded.
//! [`fetch_with_retry`] gives such a call a fixed budget and, when the
//! budget runs out, reports "no artifact" instead of an error: a missing
//! side document degrades a result, it never turns a success into a failure.

use crate::config::RetryPolicy;
use std::fmt::Display;
use std::future::Future;
use tracing::{debug, warn};

/// Run `operation` up to `policy.max_attempts` times.
///
/// The closure receives the 1-based attempt number. Between failed attempts
/// the task sleeps for [`RetryPolicy::delay_after`]. Returns `None` once the
/// budget is exhausted; never panics or propagates the error.
pub async fn fetch_with_retry<T, E, F, Fut>(
    label: &str,
    policy: &RetryPolicy,
    mut operation: F,
) -> Option<T>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    let max_attempts = policy.max_attempts.max(1);

    for attempt in 1..=max_attempts {
        match operation(attempt).await {
            Ok(value) => {
                if attempt > 1 {
                    debug!("{} succeeded on attempt {}/{}", label, attempt, max_attempts);
                }
                return Some(value);
            }
            Err(e) if attempt < max_attempts => {
                let delay = policy.delay_after(attempt);
                debug!(
                    "{} failed on attempt {}/{} ({}), retrying in {:?}",
                    label, attempt, max_attempts, e, delay
                );
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
            }
            Err(e) => {
                warn!(
                    "{} gave up after {} attempts, continuing without it: {}",
                    label, max_attempts, e
                );
            }
        }
    }

    None
}
