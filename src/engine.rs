use crate::core::Ranking;
use crate::error::Result;
use crate::ranking::{Relation, WindowScorer, Windows};

/// Ranking options/configuration
#[derive(Debug, Clone)]
pub struct RankOptions {
    /// Most names the provider will compare in one request
    pub batch_size: usize,
}

impl Default for RankOptions {
    fn default() -> Self {
        Self { batch_size: 5 }
    }
}

/// Main ranking orchestrator
///
/// Walks the name list window by window, folds each scored window into the
/// relation, then sorts the whole list with the relation's comparator. All
/// scoring calls run strictly one after another; the provider's rate budget
/// leaves no room for anything fancier.
pub struct RankEngine {
    scorer: Box<dyn WindowScorer>,
    options: RankOptions,
}

impl RankEngine {
    /// Engine with default options
    pub fn new(scorer: Box<dyn WindowScorer>) -> Self {
        Self::with_options(scorer, RankOptions::default())
    }

    pub fn with_options(scorer: Box<dyn WindowScorer>, options: RankOptions) -> Self {
        Self { scorer, options }
    }

    /// Rank names by relative interest, most interesting first.
    ///
    /// The result is always a permutation of the input; an empty input
    /// yields an empty ranking.
    pub async fn rank(&mut self, names: &[String]) -> Result<Ranking> {
        let n = names.len();
        if n == 0 {
            return Ok(Ranking::from_sorted(Vec::new(), self.scorer.name()));
        }

        let mut relation = Relation::new(n);
        let windows = Windows::new(n, self.options.batch_size);

        for (start, end) in windows {
            tracing::debug!("Scoring window {}..{} of {}", start, end, n);
            let scores = self.scorer.scores(&names[start..end]).await?;
            relation.record_window(start, &scores);
        }

        let mut order: Vec<usize> = (0..n).collect();
        // Stable sort: names the relation cannot separate keep input order
        order.sort_by(|&a, &b| relation.compare(a, b));

        let sorted = order.into_iter().map(|i| names[i].clone()).collect();
        let ranking = Ranking::from_sorted(sorted, self.scorer.name());

        tracing::info!(
            "Ranked {} names with the {} scorer",
            ranking.len(),
            self.scorer.name()
        );

        Ok(ranking)
    }
}
