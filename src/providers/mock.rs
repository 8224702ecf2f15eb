use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::core::InterestSeries;
use crate::error::{Result, TrendRankError};
use crate::providers::TrendProvider;

/// Scripted in-memory provider for tests and offline runs
///
/// Answers every batch from a fixed name -> average-interest table. Names
/// missing from the table are left out of the response, the same way the
/// real provider drops names it has no data for. Can be scripted to fail
/// transiently a number of times before answering.
pub struct MockTrendProvider {
    scores: HashMap<String, f64>,
    failures_remaining: AtomicU32,
    calls: AtomicUsize,
}

impl MockTrendProvider {
    pub fn new() -> Self {
        Self {
            scores: HashMap::new(),
            failures_remaining: AtomicU32::new(0),
            calls: AtomicUsize::new(0),
        }
    }

    /// Script an average interest value for a name
    pub fn with_score(mut self, name: impl Into<String>, average: f64) -> Self {
        self.scores.insert(name.into(), average);
        self
    }

    /// Script average interest values for many names at once
    pub fn with_scores<I, S>(mut self, scores: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        for (name, average) in scores {
            self.scores.insert(name.into(), average);
        }
        self
    }

    /// Make the next `n` calls fail with a throttling error
    pub fn fail_times(self, n: u32) -> Self {
        self.failures_remaining.store(n, Ordering::SeqCst);
        self
    }

    /// Number of `interest_over_time` calls made so far (failed ones included)
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockTrendProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TrendProvider for MockTrendProvider {
    async fn interest_over_time(&self, names: &[String]) -> Result<HashMap<String, InterestSeries>> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let remaining = self.failures_remaining.load(Ordering::SeqCst);
        if remaining > 0 {
            self.failures_remaining.store(remaining - 1, Ordering::SeqCst);
            return Err(TrendRankError::Throttled("mock".to_string()));
        }

        let mut result = HashMap::new();
        for name in names {
            if let Some(&average) = self.scores.get(name) {
                result.insert(
                    name.clone(),
                    InterestSeries::from_values(name.clone(), &[average, average, average]),
                );
            }
        }
        Ok(result)
    }

    fn name(&self) -> &str {
        "mock"
    }

    async fn is_available(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_scripted_scores() {
        let provider = MockTrendProvider::new()
            .with_score("EVE Online", 40.0)
            .with_score("RuneScape", 70.0);

        let names = vec!["EVE Online".to_string(), "RuneScape".to_string()];
        let series = provider.interest_over_time(&names).await.unwrap();

        assert_eq!(series["EVE Online"].average(), 40.0);
        assert_eq!(series["RuneScape"].average(), 70.0);
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn test_unknown_name_is_absent() {
        let provider = MockTrendProvider::new().with_score("Tibia", 10.0);

        let names = vec!["Tibia".to_string(), "Nonexistent MMO".to_string()];
        let series = provider.interest_over_time(&names).await.unwrap();

        assert!(series.contains_key("Tibia"));
        assert!(!series.contains_key("Nonexistent MMO"));
    }

    #[tokio::test]
    async fn test_scripted_failures_then_success() {
        let provider = MockTrendProvider::new()
            .with_score("Tibia", 10.0)
            .fail_times(2);

        let names = vec!["Tibia".to_string()];
        assert!(provider.interest_over_time(&names).await.is_err());
        assert!(provider.interest_over_time(&names).await.is_err());
        assert!(provider.interest_over_time(&names).await.is_ok());
        assert_eq!(provider.call_count(), 3);
    }
}
