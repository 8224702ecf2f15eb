use std::time::Duration;

use tokio::time::Instant;

/// Default spacing between provider calls
pub const DEFAULT_SPACING: Duration = Duration::from_secs(5);

/// Spacing applied after the provider pushes back
pub const PENALTY_SPACING: Duration = Duration::from_secs(60);

/// Enforces a minimum gap between outbound provider calls.
///
/// The provider hands out a small per-minute quota; one call every few
/// seconds stays inside it. After a failure the gap widens to the penalty
/// spacing until the limiter is reset.
#[derive(Debug)]
pub struct RateLimiter {
    spacing: Duration,
    penalty: Duration,
    base_spacing: Duration,
    last_call: Option<Instant>,
}

impl RateLimiter {
    /// Limiter with the default and penalty spacing
    pub fn new() -> Self {
        Self::with_spacing(DEFAULT_SPACING, PENALTY_SPACING)
    }

    /// Limiter with custom spacing
    pub fn with_spacing(spacing: Duration, penalty: Duration) -> Self {
        Self {
            spacing,
            penalty,
            base_spacing: spacing,
            last_call: None,
        }
    }

    /// Sleep until the spacing since the previous call has elapsed, then
    /// mark the new call.
    ///
    /// The extra second on top of the computed remainder keeps us clear of
    /// the quota boundary on clock jitter.
    pub async fn wait_if_needed(&mut self) {
        if let Some(last) = self.last_call {
            let elapsed = last.elapsed();
            if elapsed < self.spacing {
                let interval = self.spacing - elapsed + Duration::from_secs(1);
                tracing::info!("Throttling: sleeping for {:?}", interval);
                tokio::time::sleep(interval).await;
            }
        }
        self.last_call = Some(Instant::now());
    }

    /// Widen the gap to the penalty spacing after a provider failure
    pub fn penalize(&mut self) {
        if self.spacing < self.penalty {
            tracing::warn!(
                "Provider pushed back, spacing raised from {:?} to {:?}",
                self.spacing,
                self.penalty
            );
        }
        self.spacing = self.penalty;
    }

    /// Restore the configured base spacing after a successful call
    pub fn reset(&mut self) {
        self.spacing = self.base_spacing;
    }

    /// Current spacing between calls
    pub fn spacing(&self) -> Duration {
        self.spacing
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_first_call_does_not_wait() {
        let mut limiter = RateLimiter::new();

        let before = Instant::now();
        limiter.wait_if_needed().await;
        assert_eq!(before.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_back_to_back_calls_are_spaced() {
        let mut limiter = RateLimiter::with_spacing(
            Duration::from_secs(5),
            Duration::from_secs(60),
        );

        limiter.wait_if_needed().await;
        let before = Instant::now();
        limiter.wait_if_needed().await;

        // 5s remaining + 1s cushion
        assert_eq!(before.elapsed(), Duration::from_secs(6));
    }

    #[tokio::test(start_paused = true)]
    async fn test_spaced_out_calls_do_not_wait() {
        let mut limiter = RateLimiter::with_spacing(
            Duration::from_secs(5),
            Duration::from_secs(60),
        );

        limiter.wait_if_needed().await;
        tokio::time::sleep(Duration::from_secs(10)).await;

        let before = Instant::now();
        limiter.wait_if_needed().await;
        assert_eq!(before.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_penalize_and_reset() {
        let mut limiter = RateLimiter::with_spacing(
            Duration::from_secs(5),
            Duration::from_secs(60),
        );

        limiter.penalize();
        assert_eq!(limiter.spacing(), Duration::from_secs(60));

        limiter.wait_if_needed().await;
        let before = Instant::now();
        limiter.wait_if_needed().await;
        assert_eq!(before.elapsed(), Duration::from_secs(61));

        limiter.reset();
        assert_eq!(limiter.spacing(), Duration::from_secs(5));
    }
}
