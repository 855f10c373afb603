//! Compare module: Classifying drift between two snapshots

mod comparator;

pub use comparator::{ComparisonResult, compare};
