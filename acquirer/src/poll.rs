//! Bounded polling for a value set by someone else.

use std::time::Duration;
use tokio::time::Instant;

/// Shortest wait between probes; a zero interval would spin the executor.
const MIN_POLL_INTERVAL: Duration = Duration::from_millis(1);

/// Probe every `interval` until `probe` yields a value or `timeout` elapses.
///
/// The first probe happens one interval after the call. The wait suspends
/// rather than blocks, and returns as soon as a probe succeeds. Total time
/// never exceeds `timeout` plus one interval. A zero `timeout` disables
/// polling entirely.
pub async fn poll_until<T>(
    interval: Duration,
    timeout: Duration,
    mut probe: impl FnMut() -> Option<T>,
) -> Option<T> {
    if timeout.is_zero() {
        return None;
    }
    let interval = interval.max(MIN_POLL_INTERVAL);
    let deadline = Instant::now() + timeout;

    loop {
        tokio::time::sleep(interval).await;
        if let Some(value) = probe() {
            return Some(value);
        }
        if Instant::now() >= deadline {
            return None;
        }
    }
}
