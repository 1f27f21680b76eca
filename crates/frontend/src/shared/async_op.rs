//! Simulated backend operations.
//!
//! There is no server; anything that would be a network call resolves
//! locally after a fixed delay. The UI awaits the returned `Result` and maps
//! both arms to its success/failure state, so swapping the timer for a real
//! request later does not change any caller. A component unmounting while
//! the delay is pending just drops the future's result.

use gloo_timers::future::TimeoutFuture;

/// Resolve `result` after `delay_ms` of simulated latency.
pub async fn with_latency<T>(delay_ms: u32, result: Result<T, String>) -> Result<T, String> {
    TimeoutFuture::new(delay_ms).await;
    result
}
