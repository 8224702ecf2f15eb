use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single sampled interest value (0-100) at a point in time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// Sample timestamp
    pub time: DateTime<Utc>,

    /// Relative interest, 0-100, scaled against the other names in the
    /// same request
    pub value: f64,
}

impl TrendPoint {
    pub fn new(time: DateTime<Utc>, value: f64) -> Self {
        Self { time, value }
    }
}

/// Interest-over-time series for one name, as returned by a provider
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InterestSeries {
    /// The name the series belongs to
    pub name: String,

    /// Samples in chronological order
    #[serde(default)]
    pub points: Vec<TrendPoint>,
}

impl InterestSeries {
    /// Create an empty series for a name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            points: Vec::new(),
        }
    }

    /// Create a series from bare values, spacing samples a day apart.
    ///
    /// Mostly useful in tests and the mock provider, where only the
    /// averages matter.
    pub fn from_values(name: impl Into<String>, values: &[f64]) -> Self {
        let start = DateTime::<Utc>::UNIX_EPOCH;
        let points = values
            .iter()
            .enumerate()
            .map(|(i, &v)| TrendPoint::new(start + chrono::Duration::days(i as i64), v))
            .collect();
        Self {
            name: name.into(),
            points,
        }
    }

    /// Average interest over the whole series, 0-100.
    ///
    /// An empty series averages to 0.0 rather than dividing by zero.
    pub fn average(&self) -> f64 {
        if self.points.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.points.iter().map(|p| p.value).sum();
        sum / self.points.len() as f64
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the provider returned any samples at all
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
