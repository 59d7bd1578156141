//! Delay primitives.
//!
//! Two flavours: [`delay`] suspends the current task and lets other work
//! run, while [`blocking_delay`] parks the calling thread. Prefer the async
//! form anywhere a runtime is available; the blocking form exists for
//! synchronous call sites and reports the time actually spent asleep.

use std::time::{Duration, Instant};

/// Suspend the current task for `ms` milliseconds.
///
/// Other tasks on the runtime continue to make progress while this one
/// sleeps.
///
/// # Example
///
/// ```
/// # tokio_test::block_on(async {
/// oxbow::delay::delay(10).await;
/// # });
/// ```
pub async fn delay(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

/// Block the calling thread for `ms` milliseconds and return the elapsed
/// time in milliseconds.
///
/// Uses the platform's thread parking rather than spinning, so the thread
/// consumes no CPU while waiting. The return value is measured, so it may
/// slightly exceed `ms`.
pub fn blocking_delay(ms: u64) -> u64 {
    let start = Instant::now();
    std::thread::sleep(Duration::from_millis(ms));
    start.elapsed().as_millis() as u64
}
