use serde::{Deserialize, Serialize};

/// One entry of a finished ranking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    /// 1-based rank, most interesting first
    pub rank: usize,

    /// Game name
    pub name: String,
}

/// Total order over all input names, most interesting first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ranking {
    pub entries: Vec<RankedEntry>,

    /// Scorer that produced the order (trends, length)
    #[serde(default)]
    pub scoring_method: String,
}

impl Ranking {
    /// Build a ranking from names already sorted most-interesting-first
    pub fn from_sorted(names: Vec<String>, scoring_method: impl Into<String>) -> Self {
        let entries = names
            .into_iter()
            .enumerate()
            .map(|(i, name)| RankedEntry { rank: i + 1, name })
            .collect();
        Self {
            entries,
            scoring_method: scoring_method.into(),
        }
    }

    /// Names in rank order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render as the rankings-file text: one `"<rank>. <name>"` per line.
    ///
    /// An empty ranking renders as an empty string, so an empty input list
    /// produces an empty (but existing) output file.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            out.push_str(&format!("{}. {}\n", entry.rank, entry.name));
        }
        out
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Deserialize from JSON string
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
