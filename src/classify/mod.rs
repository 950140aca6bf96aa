//! Shade detection and partitioning module
//!
//! Splits measured colors into shades and hue categories, then rebalances
//! empty hue categories.

pub mod partition;
pub mod shade;

pub use partition::{ClassifiedColor, ColorClassifier, Partition, Reassignment};
pub use shade::is_shade;
