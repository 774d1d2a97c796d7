use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::time::{sleep, Duration, Instant};

/// Caps concurrent calls to the generation endpoint and spaces them out.
/// The free tier throttles aggressively, so we stay polite on our side.
#[derive(Clone)]
pub struct RateLimiter {
    semaphore: Arc<Semaphore>,
    min_gap: Duration,
    last_call: Arc<tokio::sync::Mutex<Option<Instant>>>,
}

impl RateLimiter {
    pub fn new(max_concurrent: usize, min_gap_ms: u64) -> Self {
        RateLimiter {
            semaphore: Arc::new(Semaphore::new(max_concurrent)),
            min_gap: Duration::from_millis(min_gap_ms),
            last_call: Arc::new(tokio::sync::Mutex::new(None)),
        }
    }

    /// Wait for a slot, honoring the minimum gap since the previous call.
    /// The returned guard frees the slot on drop.
    pub async fn acquire(&self) -> RateLimitGuard {
        let permit = self
            .semaphore
            .clone()
            .acquire_owned()
            .await
            .expect("Semaphore closed");

        let mut last_call = self.last_call.lock().await;
        if let Some(last) = *last_call {
            let elapsed = last.elapsed();
            if elapsed < self.min_gap {
                sleep(self.min_gap - elapsed).await;
            }
        }
        *last_call = Some(Instant::now());
        drop(last_call);

        RateLimitGuard { _permit: permit }
    }
}

pub struct RateLimitGuard {
    _permit: tokio::sync::OwnedSemaphorePermit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn enforces_minimum_gap() {
        let limiter = RateLimiter::new(1, 50);
        let start = Instant::now();
        drop(limiter.acquire().await);
        drop(limiter.acquire().await);
        assert!(start.elapsed() >= Duration::from_millis(50));
    }
}
