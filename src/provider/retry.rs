use std::{fmt::Display, future::Future, time::Duration};
use tokio::time::sleep;
use tracing::warn;

/// Run `operation` up to `max_attempts` times.
///
/// After failed attempt `n` (0-based) the wrapper sleeps `base * 2^n` before
/// trying again. The last error is returned unchanged. Zero attempts is
/// treated as one.
///
/// # Errors
/// Returns the error of the final attempt.
pub async fn retry<T, E, F, Fut>(mut operation: F, max_attempts: u32, base: Duration) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    let max_attempts = max_attempts.max(1);
    let mut attempt: u32 = 0;

    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                attempt += 1;
                if attempt >= max_attempts {
                    return Err(err);
                }

                let delay = backoff_delay(attempt - 1, base);
                warn!(
                    attempt,
                    max_attempts,
                    delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                    "attempt failed, retrying: {err}"
                );
                sleep(delay).await;
            }
        }
    }
}

fn backoff_delay(attempt: u32, base: Duration) -> Duration {
    let factor = 1u32 << attempt.min(31);
    base.checked_mul(factor).unwrap_or(Duration::MAX)
}
