//! Experiment-side collaborators for the splitstat engine.
//!
//! The core analyzer in `splitstat-stats` consumes two numeric samples;
//! this crate supplies what sits around it:
//!
//! - **Ingestion** — [`ingest`]: normalizes raw experiment exports
//!   (conversion counts or continuous values per variant) into samples
//!   and runs the analyzer on the first two arms
//! - **Planning** — [`planning`]: pre-experiment sample-size and duration
//!   calculations for two-proportion tests, plus per-variant proportion
//!   confidence intervals
//!
//! Planning is a sibling of the analyzer, not a consumer of its results.

pub mod ingest;
pub mod planning;

pub use ingest::{compare_variants, expand_conversions, VariantData};
pub use planning::{
    proportion_confidence_interval, sample_size_per_arm, test_duration_days, Tail,
};
