use std::time::Duration;
use tokio::time::sleep;

use crate::config::constants::DEFAULT_API_DELAY_MS;

/// Hold `value` for `delay`, then yield it unchanged. The suspension is
/// a plain timer: other tasks keep running, and dropping the returned
/// future cancels the timer entry.
pub async fn delayed<T>(value: T, delay: Duration) -> T {
    sleep(delay).await;
    value
}

/// `delayed` with the stock network-latency default.
pub async fn simulate_api_call<T>(value: T) -> T {
    delayed(value, Duration::from_millis(DEFAULT_API_DELAY_MS)).await
}
