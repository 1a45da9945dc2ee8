//! The analysis pipeline: classify both groups, resolve the authoritative
//! data type, and dispatch to the matching hypothesis test.
//!
//! The [`DataType`] → test mapping is a closed, exhaustive match: every
//! data type has exactly one handler, checked at compile time.

use splitstat_core::Result;

use crate::classify::{classify, resolve, DataType};
use crate::descriptive::{describe, GroupMetrics};
use crate::testing::{
    chi_squared_independence, two_proportion_z_test, welch_t_test, TestResult,
};

/// Analyze a two-group experiment.
///
/// Classifies each group independently, resolves the combined data type by
/// dominance (Binary > Categorical > Continuous), and runs the single
/// matching test. Pure: identical inputs always yield identical results.
///
/// `significance_level` and `confidence_level` must both lie in (0, 1);
/// they are independent parameters (decision threshold vs. interval width).
pub fn analyze(
    group_a: &[f64],
    group_b: &[f64],
    significance_level: f64,
    confidence_level: f64,
) -> Result<TestResult> {
    let type_a = classify(group_a)?;
    let type_b = classify(group_b)?;

    match resolve(type_a, type_b) {
        DataType::Binary => {
            two_proportion_z_test(group_a, group_b, significance_level, confidence_level)
        }
        DataType::Categorical => {
            chi_squared_independence(group_a, group_b, significance_level, confidence_level)
        }
        DataType::Continuous => {
            welch_t_test(group_a, group_b, significance_level, confidence_level)
        }
    }
}

/// Outcome of an analysis, with per-group metrics attached when the data
/// is continuous.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnalysisOutcome {
    /// Binary or categorical comparison: the test result stands alone.
    Simple(TestResult),
    /// Continuous comparison, enriched with descriptive metrics per group.
    Continuous {
        result: TestResult,
        group_a: GroupMetrics,
        group_b: GroupMetrics,
    },
}

impl AnalysisOutcome {
    /// The test result, whichever arm this is.
    pub fn result(&self) -> &TestResult {
        match self {
            AnalysisOutcome::Simple(result) => result,
            AnalysisOutcome::Continuous { result, .. } => result,
        }
    }
}

/// Like [`analyze`], but attaches per-group descriptive metrics when the
/// resolved data type is continuous.
pub fn analyze_with_metrics(
    group_a: &[f64],
    group_b: &[f64],
    significance_level: f64,
    confidence_level: f64,
) -> Result<AnalysisOutcome> {
    let result = analyze(group_a, group_b, significance_level, confidence_level)?;
    if result.data_type == DataType::Continuous {
        Ok(AnalysisOutcome::Continuous {
            result,
            group_a: describe(group_a)?,
            group_b: describe(group_b)?,
        })
    } else {
        Ok(AnalysisOutcome::Simple(result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestType;

    fn conversions(ones: usize, zeros: usize) -> Vec<f64> {
        let mut v = vec![1.0; ones];
        v.extend(vec![0.0; zeros]);
        v
    }

    #[test]
    fn binary_groups_dispatch_to_z_test() {
        let a = conversions(60, 40);
        let b = conversions(50, 50);
        let result = analyze(&a, &b, 0.05, 0.95).unwrap();
        assert_eq!(result.test_type, TestType::ZTest);
        assert_eq!(result.data_type, DataType::Binary);
    }

    #[test]
    fn continuous_groups_dispatch_to_t_test() {
        let a = [10.0, 12.5, 11.0, 13.0, 9.5];
        let b = [15.0, 16.0, 14.5, 17.0, 15.0];
        let result = analyze(&a, &b, 0.05, 0.95).unwrap();
        assert_eq!(result.test_type, TestType::TTest);
    }

    #[test]
    fn categorical_groups_dispatch_to_chi_squared() {
        let a = [1.0, 2.0, 3.0, 1.0, 2.0];
        let b = [3.0, 3.0, 3.0, 1.0, 1.0];
        let result = analyze(&a, &b, 0.05, 0.95).unwrap();
        assert_eq!(result.test_type, TestType::ChiSquared);
    }

    #[test]
    fn categorical_dominates_continuous() {
        // One categorical group pulls a continuous one down to chi-squared
        let a = [1.0, 2.0, 3.0, 1.0, 2.0];
        let b = [1.5, 2.5, 3.5, 1.5, 2.5];
        let result = analyze(&a, &b, 0.05, 0.95).unwrap();
        assert_eq!(result.test_type, TestType::ChiSquared);
        assert_eq!(result.data_type, DataType::Categorical);
    }

    #[test]
    fn empty_group_is_an_error() {
        assert!(analyze(&[], &[1.0, 2.0], 0.05, 0.95).is_err());
        assert!(analyze(&[1.0, 2.0], &[], 0.05, 0.95).is_err());
    }

    #[test]
    fn analyze_is_deterministic() {
        let a = [10.0, 12.5, 11.0, 13.0, 9.5];
        let b = [15.0, 16.0, 14.5, 17.0, 15.0];
        let first = analyze(&a, &b, 0.05, 0.95).unwrap();
        let second = analyze(&a, &b, 0.05, 0.95).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn continuous_outcome_carries_metrics() {
        let a = [10.0, 12.5, 11.0, 13.0, 9.5];
        let b = [15.0, 16.0, 14.5, 17.0, 15.0];
        let outcome = analyze_with_metrics(&a, &b, 0.05, 0.95).unwrap();
        match outcome {
            AnalysisOutcome::Continuous {
                result,
                group_a,
                group_b,
            } => {
                assert_eq!(result.test_type, TestType::TTest);
                assert_eq!(group_a.count, 5);
                assert_eq!(group_b.count, 5);
                assert!((group_a.mean - 11.2).abs() < 1e-9);
            }
            AnalysisOutcome::Simple(_) => panic!("expected continuous outcome"),
        }
    }

    #[test]
    fn binary_outcome_is_simple() {
        let a = conversions(10, 10);
        let b = conversions(12, 8);
        let outcome = analyze_with_metrics(&a, &b, 0.05, 0.95).unwrap();
        assert!(matches!(outcome, AnalysisOutcome::Simple(_)));
        assert_eq!(outcome.result().test_type, TestType::ZTest);
    }
}
