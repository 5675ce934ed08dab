//! Exponential-backoff retry for provider calls.

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

/// Run `operation` up to `max_attempts` times, doubling the delay after
/// each failure starting from `initial_delay`. The last error propagates;
/// there is no sleep after the final attempt.
pub async fn retry_with_backoff<T, E, F, Fut>(
    max_attempts: u32,
    initial_delay: Duration,
    mut operation: F,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    let mut delay = initial_delay;
    let mut attempt = 1;

    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(error) if attempt >= max_attempts => {
                tracing::error!("Attempt {attempt} failed: {error}. Giving up");
                return Err(error);
            }
            Err(error) => {
                tracing::warn!(
                    "Attempt {attempt} failed: {error}. Retrying in {}ms",
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
                delay *= 2;
                attempt += 1;
            }
        }
    }
}
