use std::collections::HashMap;
use std::sync::Arc;

use crate::core::InterestSeries;
use crate::error::{Result, TrendRankError};
use crate::providers::TrendProvider;
use crate::ratelimit::RateLimiter;

/// Default retry budget per provider call
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

/// Comparison interface over a rate-limited trend provider.
///
/// Owns the rate limiter and the retry policy, so callers just ask for
/// scores. Transient provider failures are retried with penalty spacing up
/// to the attempt cap; after that the error surfaces instead of looping
/// forever.
pub struct InterestOracle {
    provider: Arc<dyn TrendProvider>,
    limiter: RateLimiter,
    max_attempts: u32,
}

impl InterestOracle {
    /// Oracle with default spacing and retry budget
    pub fn new(provider: Arc<dyn TrendProvider>) -> Self {
        Self::with_limits(provider, RateLimiter::new(), DEFAULT_MAX_ATTEMPTS)
    }

    /// Oracle with a custom limiter and retry budget
    pub fn with_limits(
        provider: Arc<dyn TrendProvider>,
        limiter: RateLimiter,
        max_attempts: u32,
    ) -> Self {
        Self {
            provider,
            limiter,
            max_attempts: max_attempts.max(1),
        }
    }

    /// Fetch series for a batch, retrying transient failures
    async fn fetch_batch(&mut self, names: &[String]) -> Result<HashMap<String, InterestSeries>> {
        let mut last_error = String::new();

        for attempt in 1..=self.max_attempts {
            self.limiter.wait_if_needed().await;

            match self.provider.interest_over_time(names).await {
                Ok(series) => {
                    self.limiter.reset();
                    return Ok(series);
                }
                Err(e) if e.is_transient() => {
                    tracing::warn!(
                        "Provider {} failed (attempt {}/{}): {}",
                        self.provider.name(),
                        attempt,
                        self.max_attempts,
                        e
                    );
                    self.limiter.penalize();
                    last_error = e.to_string();
                }
                Err(e) => return Err(e),
            }
        }

        Err(TrendRankError::RetriesExhausted {
            attempts: self.max_attempts,
            last_error,
        })
    }

    /// Averaged interest for every name in a window, in window order.
    ///
    /// One batched provider call covers the whole window. A name absent
    /// from the response scores 0.0 instead of failing the run.
    pub async fn window_scores(&mut self, names: &[String]) -> Result<Vec<f64>> {
        let series = self.fetch_batch(names).await?;

        let scores = names
            .iter()
            .map(|name| match series.get(name) {
                Some(s) => s.average(),
                None => {
                    tracing::warn!("No interest data for '{}', scoring as tied", name);
                    0.0
                }
            })
            .collect();

        Ok(scores)
    }

    /// Signed comparison of two names.
    ///
    /// Positive means `b` drew more interest, negative means `a` did;
    /// magnitude is the difference of the averaged series.
    pub async fn compare(&mut self, a: &str, b: &str) -> Result<f64> {
        let names = [a.to_string(), b.to_string()];
        let scores = self.window_scores(&names).await?;
        Ok(scores[1] - scores[0])
    }
}
