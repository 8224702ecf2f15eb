//! # trendrank
//!
//! Ranks a list of game names by relative public interest using a
//! rate-limited trend-data provider:
//! - Overlapping comparison windows sized to the provider's batch limit
//! - Incremental pairwise relation with transitive lookups
//! - Bounded retry and explicit request spacing around every provider call
//! - Pluggable window scoring (live trend data or offline name-length proxy)
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use trendrank::{
//!     GoogleTrendsProvider, InterestOracle, RankEngine, TrendScorer,
//! };
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let provider = Arc::new(GoogleTrendsProvider::new());
//!     let oracle = InterestOracle::new(provider);
//!     let mut engine = RankEngine::new(Box::new(TrendScorer::new(oracle)));
//!
//!     let names = trendrank::files::read_names("names.txt")?;
//!     let ranking = engine.rank(&names).await?;
//!     trendrank::files::write_rankings("rankings.txt", &ranking)?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod engine;
pub mod error;
pub mod files;
pub mod oracle;
pub mod providers;
pub mod ranking;
pub mod ratelimit;

// Re-export primary types
pub use crate::core::{InterestSeries, RankedEntry, Ranking, TrendPoint};
pub use engine::{RankEngine, RankOptions};
pub use error::{Result, TrendRankError};
pub use oracle::InterestOracle;
pub use providers::{GoogleTrendsProvider, MockTrendProvider, TrendProvider};
pub use ranking::{NameLengthScorer, Relation, TrendScorer, WindowScorer, Windows};
pub use ratelimit::RateLimiter;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
