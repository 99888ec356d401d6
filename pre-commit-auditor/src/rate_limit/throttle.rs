//! Fixed pacing between API calls.

use std::future::Future;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

/// Enforces a minimum delay between consecutive API calls.
///
/// The first call is never delayed.
#[derive(Debug)]
pub struct Throttle {
    delay: Duration,
    last_call: Mutex<Option<Instant>>,
}

impl Throttle {
    /// Creates a throttle with the given minimum spacing.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            last_call: Mutex::new(None),
        }
    }

    /// Returns the configured spacing.
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Waits until at least `delay` has passed since the previous call.
    pub async fn pause(&self) {
        let mut last_call = self.last_call.lock().await;
        if let Some(previous) = *last_call {
            let ready_at = previous + self.delay;
            if ready_at > Instant::now() {
                tokio::time::sleep_until(ready_at).await;
            }
        }
        *last_call = Some(Instant::now());
    }

    /// Spaces `call` like any other API call, then awaits it.
    pub async fn paced<F: Future>(&self, call: F) -> F::Output {
        self.pause().await;
        call.await
    }
}
