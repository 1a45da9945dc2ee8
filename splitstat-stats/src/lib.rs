//! Dynamic hypothesis-testing engine for two-group experiment analysis.
//!
//! Given two samples of outcome data, the engine infers the statistical
//! nature of the data (binary conversion, categorical, or continuous),
//! runs the single matching significance test, and produces a complete
//! statistical verdict:
//!
//! - **Descriptive statistics** — [`descriptive`]: mean, sample variance, medians
//! - **Distributions** — [`distribution`]: normal, Student-t, chi-squared, with
//!   CDFs and quantiles
//! - **Type detection** — [`classify`]: binary / categorical / continuous
//! - **Hypothesis tests** — [`testing`]: Welch t-test, two-proportion z-test,
//!   chi-squared independence test
//! - **Analysis pipeline** — [`analyze`]: classification, dispatch, and the
//!   [`AnalysisOutcome`] sum type
//!
//! Every operation is a pure function of its inputs: no state is held between
//! calls, and identical inputs always produce identical results.
//!
//! ```
//! use splitstat_stats::{analyze, TestType};
//!
//! let group_a: Vec<f64> = vec![1.0; 60].into_iter().chain(vec![0.0; 40]).collect();
//! let group_b: Vec<f64> = vec![1.0; 50].into_iter().chain(vec![0.0; 50]).collect();
//! let result = analyze(&group_a, &group_b, 0.05, 0.95).unwrap();
//! assert_eq!(result.test_type, TestType::ZTest);
//! ```

pub mod analyze;
pub mod classify;
pub mod contingency;
pub mod descriptive;
pub mod distribution;
pub mod report;
pub mod testing;

pub use analyze::{analyze, analyze_with_metrics, AnalysisOutcome};
pub use classify::{classify, resolve, DataType};
pub use descriptive::GroupMetrics;
pub use report::{Decision, Interpretation, TestDetails};
pub use testing::{
    chi_squared_independence, two_proportion_z_test, welch_t_test, ConfidenceInterval,
    TestResult, TestType,
};
