// ==============================
// src/retry.rs
// ==============================
#![forbid(unsafe_code)]

use std::cmp;
use std::future::Future;
use std::time::Duration;

use log::warn;
use tokio::time::sleep;

/// Upper bound on the random jitter mixed into each delay.
pub const MAX_JITTER_MS: u64 = 1_000;

/// Backoff schedule for transient failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the first attempt.
    pub max_retries: u64,
    pub base_delay_ms: u64,
    pub max_delay_ms: u64,
    /// Growth factor between delays; 1 keeps the delay flat.
    pub exponential_factor: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay_ms: 3_000,
            max_delay_ms: 3_000,
            exponential_factor: 1,
        }
    }
}

/// Next delay from the previous one, clamped to the policy maximum.
pub fn next_delay_ms(policy: &RetryPolicy, previous_delay_ms: u64, jitter_ms: u64) -> u64 {
    let grown = previous_delay_ms
        .saturating_mul(u64::from(policy.exponential_factor))
        .saturating_add(jitter_ms);
    cmp::min(grown, policy.max_delay_ms)
}

/// Runs `operation` until it succeeds or the retry budget is spent. The
/// final error is returned as-is.
pub async fn execute_with_retry<F, Fut, T, E>(
    mut operation: F,
    retry_policy: RetryPolicy,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let mut retries: u64 = 0;
    let mut delay_ms = retry_policy.base_delay_ms;

    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(e) if retries < retry_policy.max_retries => {
                retries += 1;
                let jitter_ms = rand::random::<u64>() % MAX_JITTER_MS;
                delay_ms = next_delay_ms(&retry_policy, delay_ms, jitter_ms);
                warn!(
                    "attempt {retries}/{max} failed ({e}); retrying in {delay_ms} ms",
                    max = retry_policy.max_retries
                );
                sleep(Duration::from_millis(delay_ms)).await;
            }
            Err(e) => return Err(e),
        }
    }
}
