use async_trait::async_trait;

use crate::error::Result;
use crate::oracle::InterestOracle;

/// Trait for per-window scoring backends
///
/// A scorer turns one window of names into comparable values; the relation
/// accumulator only ever sees those values. Calls arrive strictly
/// sequentially, one window at a time.
#[async_trait]
pub trait WindowScorer: Send {
    /// Score every name in the window, in window order
    async fn scores(&mut self, window: &[String]) -> Result<Vec<f64>>;

    /// Get scorer name for logging and output metadata
    fn name(&self) -> &str;
}

/// Trend-backed scorer: one batched oracle call per window
pub struct TrendScorer {
    oracle: InterestOracle,
}

impl TrendScorer {
    pub fn new(oracle: InterestOracle) -> Self {
        Self { oracle }
    }
}

#[async_trait]
impl WindowScorer for TrendScorer {
    async fn scores(&mut self, window: &[String]) -> Result<Vec<f64>> {
        self.oracle.window_scores(window).await
    }

    fn name(&self) -> &str {
        "trends"
    }
}

/// Name-length proxy scorer: scores a name by its character count.
///
/// Needs no network at all, which makes it useful for dry runs and tests,
/// but the order it produces has nothing to do with actual interest.
pub struct NameLengthScorer;

impl NameLengthScorer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NameLengthScorer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WindowScorer for NameLengthScorer {
    async fn scores(&mut self, window: &[String]) -> Result<Vec<f64>> {
        Ok(window.iter().map(|n| n.chars().count() as f64).collect())
    }

    fn name(&self) -> &str {
        "length"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::MockTrendProvider;
    use crate::ratelimit::RateLimiter;
    use std::sync::Arc;
    use std::time::Duration;

    #[tokio::test]
    async fn test_length_scorer() {
        let mut scorer = NameLengthScorer::new();

        let window = vec!["Aa".to_string(), "Bbb".to_string(), "Cccc".to_string()];
        let scores = scorer.scores(&window).await.unwrap();

        assert_eq!(scores, vec![2.0, 3.0, 4.0]);
        assert_eq!(scorer.name(), "length");
    }

    #[tokio::test]
    async fn test_length_scorer_counts_chars_not_bytes() {
        let mut scorer = NameLengthScorer::new();

        let window = vec!["Ragnarök".to_string()];
        let scores = scorer.scores(&window).await.unwrap();

        assert_eq!(scores, vec![8.0]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_trend_scorer_uses_batched_oracle_call() {
        let provider = Arc::new(
            MockTrendProvider::new()
                .with_score("EVE Online", 40.0)
                .with_score("RuneScape", 70.0),
        );
        let oracle = InterestOracle::with_limits(
            provider.clone(),
            RateLimiter::with_spacing(Duration::from_millis(1), Duration::from_millis(2)),
            3,
        );
        let mut scorer = TrendScorer::new(oracle);

        let window = vec!["EVE Online".to_string(), "RuneScape".to_string()];
        let scores = scorer.scores(&window).await.unwrap();

        assert_eq!(scores, vec![40.0, 70.0]);
        assert_eq!(provider.call_count(), 1);
        assert_eq!(scorer.name(), "trends");
    }
}
