pub mod google;
pub mod mock;

use std::collections::HashMap;

use async_trait::async_trait;

use crate::core::InterestSeries;
use crate::error::Result;

pub use google::GoogleTrendsProvider;
pub use mock::MockTrendProvider;

/// Trait for trend-data providers
///
/// A provider answers one question: given a small batch of names, how did
/// public interest in each of them move over the configured time window?
/// Values are comparative (0-100, scaled within the batch), so scores are
/// only meaningful relative to the other names in the same call.
#[async_trait]
pub trait TrendProvider: Send + Sync {
    /// Fetch interest-over-time series for a batch of names.
    ///
    /// Names the provider has no data for are simply absent from the map;
    /// callers decide how to treat the gap.
    async fn interest_over_time(&self, names: &[String]) -> Result<HashMap<String, InterestSeries>>;

    /// Get provider name
    fn name(&self) -> &str;

    /// Check if provider is available
    async fn is_available(&self) -> bool;
}
