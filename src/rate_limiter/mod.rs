use std::time::Duration;
use tokio::time::{Instant, sleep_until};

/// Keeps a minimum gap between consecutive requests to the same site
pub struct RateLimiter {
    delay: Duration,
    last_request: Option<Instant>,
}

impl RateLimiter {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            last_request: None,
        }
    }

    /// Sleeps only for what is left of the delay since the previous request
    pub async fn wait(&mut self) {
        if let Some(last) = self.last_request {
            sleep_until(last + self.delay).await;
        }
        self.last_request = Some(Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_first_request_is_not_delayed() {
        let mut limiter = RateLimiter::new(500);
        let start = Instant::now();

        limiter.wait().await;

        assert!(start.elapsed() < Duration::from_millis(500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_request_waits_for_delay() {
        let mut limiter = RateLimiter::new(500);
        let start = Instant::now();

        limiter.wait().await;
        limiter.wait().await;

        assert!(start.elapsed() >= Duration::from_millis(500));
    }
}
