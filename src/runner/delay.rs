use std::time::Duration;

/// Resolve after `ms` milliseconds. Does not touch any counters.
pub async fn delay(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}
