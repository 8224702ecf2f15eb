pub mod relation;
pub mod scorer;
pub mod windows;

pub use relation::Relation;
pub use scorer::{NameLengthScorer, TrendScorer, WindowScorer};
pub use windows::Windows;
