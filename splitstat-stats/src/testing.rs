//! Hypothesis tests for two-group experiment comparisons.
//!
//! Three independent tests share one contract: two non-empty numeric
//! samples, a significance level and a confidence level (both in (0, 1),
//! independent of each other), producing a [`TestResult`] with statistic,
//! p-value, confidence interval, effect size, decision, and interpretation.
//!
//! - [`welch_t_test`] — continuous data, difference in means
//! - [`two_proportion_z_test`] — binary data, difference in conversion rates
//! - [`chi_squared_independence`] — categorical data, association

use std::fmt;

use splitstat_core::{Result, Scored, SplitstatError, Summarizable};

use crate::classify::DataType;
use crate::contingency::ContingencyTable;
use crate::descriptive::{ensure_finite, mean, variance};
use crate::distribution::{self, Distribution, Normal, StudentT};
use crate::report::{self, Interpretation, TestDetails};

/// The statistical test applied to a comparison.
///
/// Corresponds 1:1 with [`DataType`]: continuous data gets the t-test,
/// binary the z-test, categorical the chi-squared test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TestType {
    /// Welch two-sample t-test.
    #[cfg_attr(feature = "serde", serde(rename = "t-test"))]
    TTest,
    /// Two-proportion z-test.
    #[cfg_attr(feature = "serde", serde(rename = "z-test"))]
    ZTest,
    /// Chi-squared test of independence.
    #[cfg_attr(feature = "serde", serde(rename = "chi-squared"))]
    ChiSquared,
}

impl fmt::Display for TestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TestType::TTest => "t-test",
            TestType::ZTest => "z-test",
            TestType::ChiSquared => "chi-squared",
        };
        f.write_str(s)
    }
}

/// A range on the effect scale of the test that produced it.
///
/// Mean difference for the t-test, proportion difference for the z-test,
/// and a heuristic effect-size band for chi-squared.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConfidenceInterval {
    pub lower: f64,
    pub upper: f64,
}

/// Complete, immutable verdict of one analysis call.
///
/// `effect_size` is Cohen's d for the t-test, the raw proportion difference
/// for the z-test, and Cramér's V for chi-squared; the three scales are not
/// comparable across test types.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TestResult {
    /// Resolved data type of the comparison.
    pub data_type: DataType,
    /// The test that ran.
    pub test_type: TestType,
    /// Test statistic (t, z, or χ²; sign meaningful for t/z, χ² ≥ 0).
    pub test_statistic: f64,
    /// Two-tailed p-value in [0, 1].
    pub p_value: f64,
    /// Interval on the effect scale (lower ≤ upper for t/z).
    pub confidence_interval: ConfidenceInterval,
    /// Effect size on the scale native to the test.
    pub effect_size: f64,
    /// Whether `p_value < significance_level`.
    pub is_significant: bool,
    /// Decision and natural-language description of the outcome.
    pub interpretation: Interpretation,
    /// Static hypothesis and assumption text for the test that ran.
    pub test_details: TestDetails,
}

impl Scored for TestResult {
    fn score(&self) -> f64 {
        self.p_value
    }
}

impl Summarizable for TestResult {
    fn summary(&self) -> String {
        format!(
            "{}: statistic={:.4}, p={:.6}, effect={:.4}, {}",
            self.test_details.method,
            self.test_statistic,
            self.p_value,
            self.effect_size,
            self.interpretation.decision,
        )
    }
}

/// Validate the shared level parameters: both must lie strictly in (0, 1).
fn validate_levels(alpha: f64, confidence_level: f64) -> Result<()> {
    if !(alpha > 0.0 && alpha < 1.0) {
        return Err(SplitstatError::InvalidParameters(format!(
            "significance level must be in (0, 1), got {alpha}",
        )));
    }
    if !(confidence_level > 0.0 && confidence_level < 1.0) {
        return Err(SplitstatError::InvalidParameters(format!(
            "confidence level must be in (0, 1), got {confidence_level}",
        )));
    }
    Ok(())
}

fn validate_samples(name: &str, group_a: &[f64], group_b: &[f64]) -> Result<()> {
    if group_a.is_empty() || group_b.is_empty() {
        return Err(SplitstatError::InsufficientData(format!(
            "{name}: each group must be non-empty",
        )));
    }
    ensure_finite(name, group_a)?;
    ensure_finite(name, group_b)
}

// ── Welch t-test ───────────────────────────────────────────────────────────

/// Welch's two-sample t-test for continuous data (two-tailed).
///
/// Does not assume equal variances: the statistic uses per-group variance
/// terms and the Welch-Satterthwaite degrees of freedom. The effect size is
/// Cohen's d with the pooled (not Welch-adjusted) standard deviation, and
/// the confidence interval is centered on the mean difference.
///
/// Each group needs at least 2 observations.
pub fn welch_t_test(
    group_a: &[f64],
    group_b: &[f64],
    alpha: f64,
    confidence_level: f64,
) -> Result<TestResult> {
    validate_levels(alpha, confidence_level)?;
    validate_samples("welch_t_test", group_a, group_b)?;
    if group_a.len() < 2 || group_b.len() < 2 {
        return Err(SplitstatError::InsufficientData(
            "welch_t_test: each group needs at least 2 observations".into(),
        ));
    }

    let n_a = group_a.len() as f64;
    let n_b = group_b.len() as f64;
    let mean_a = mean(group_a)?;
    let mean_b = mean(group_b)?;
    let var_a = variance(group_a)?;
    let var_b = variance(group_b)?;

    let diff = mean_a - mean_b;
    let se2 = var_a / n_a + var_b / n_b;
    let welch_se = se2.sqrt();

    let (t, df, p_value, margin_of_error) = if welch_se == 0.0 {
        // Both groups constant. The statistic is degenerate; report it
        // explicitly instead of letting 0/0 propagate.
        let t = if diff == 0.0 {
            0.0
        } else {
            diff.signum() * f64::INFINITY
        };
        let p = if diff == 0.0 { 1.0 } else { 0.0 };
        (t, n_a + n_b - 2.0, p, 0.0)
    } else {
        let t = diff / welch_se;
        // Welch-Satterthwaite, real-valued df
        let vn_a = var_a / n_a;
        let vn_b = var_b / n_b;
        let df = se2 * se2 / (vn_a * vn_a / (n_a - 1.0) + vn_b * vn_b / (n_b - 1.0));
        let t_dist = StudentT::new(df)?;
        let p = (2.0 * (1.0 - t_dist.cdf(t.abs()))).clamp(0.0, 1.0);
        let t_critical = t_dist.inverse_cdf(1.0 - (1.0 - confidence_level) / 2.0);
        (t, df, p, t_critical * welch_se)
    };

    // Cohen's d uses the pooled sd, not the Welch standard error.
    let pooled_var = ((n_a - 1.0) * var_a + (n_b - 1.0) * var_b) / (n_a + n_b - 2.0);
    let pooled_sd = pooled_var.sqrt();
    let effect_size = if pooled_sd == 0.0 { 0.0 } else { diff / pooled_sd };

    debug_assert!(df > 0.0);
    let (is_significant, interpretation) = report::mean_interpretation(mean_a, mean_b, p_value, alpha);

    Ok(TestResult {
        data_type: DataType::Continuous,
        test_type: TestType::TTest,
        test_statistic: t,
        p_value,
        confidence_interval: ConfidenceInterval {
            lower: diff - margin_of_error,
            upper: diff + margin_of_error,
        },
        effect_size,
        is_significant,
        interpretation,
        test_details: report::details_for(TestType::TTest),
    })
}

// ── Two-proportion z-test ──────────────────────────────────────────────────

/// Two-proportion z-test for binary (0/1) data (two-tailed).
///
/// The test statistic uses the pooled proportion under the null; the
/// confidence interval deliberately uses the unpooled standard error, the
/// standard convention for proportion testing.
pub fn two_proportion_z_test(
    group_a: &[f64],
    group_b: &[f64],
    alpha: f64,
    confidence_level: f64,
) -> Result<TestResult> {
    validate_levels(alpha, confidence_level)?;
    validate_samples("two_proportion_z_test", group_a, group_b)?;
    if group_a
        .iter()
        .chain(group_b.iter())
        .any(|&v| v != 0.0 && v != 1.0)
    {
        return Err(SplitstatError::InvalidParameters(
            "two_proportion_z_test: samples must be 0/1-valued".into(),
        ));
    }

    let n_a = group_a.len() as f64;
    let n_b = group_b.len() as f64;
    let x_a: f64 = group_a.iter().sum();
    let x_b: f64 = group_b.iter().sum();

    let p_a = x_a / n_a;
    let p_b = x_b / n_b;
    let p_pool = (x_a + x_b) / (n_a + n_b);
    let diff = p_a - p_b;

    let (z, p_value) = if p_pool == 0.0 || p_pool == 1.0 {
        // All observations identical across both groups: the proportions
        // are equal and the pooled standard error is zero.
        (0.0, 1.0)
    } else {
        let standard_error = (p_pool * (1.0 - p_pool) * (1.0 / n_a + 1.0 / n_b)).sqrt();
        let z = diff / standard_error;
        let normal = Normal::standard();
        let p = (2.0 * (1.0 - normal.cdf(z.abs()))).clamp(0.0, 1.0);
        (z, p)
    };

    // Unpooled standard error for the interval.
    let z_critical = Normal::standard().inverse_cdf(1.0 - (1.0 - confidence_level) / 2.0);
    let se_diff = (p_a * (1.0 - p_a) / n_a + p_b * (1.0 - p_b) / n_b).sqrt();
    let margin_of_error = z_critical * se_diff;

    let (is_significant, interpretation) =
        report::proportion_interpretation(p_a, p_b, p_value, alpha);

    Ok(TestResult {
        data_type: DataType::Binary,
        test_type: TestType::ZTest,
        test_statistic: z,
        p_value,
        confidence_interval: ConfidenceInterval {
            lower: diff - margin_of_error,
            upper: diff + margin_of_error,
        },
        effect_size: diff,
        is_significant,
        interpretation,
        test_details: report::details_for(TestType::ZTest),
    })
}

// ── Chi-squared independence test ──────────────────────────────────────────

/// Pearson's chi-squared test of independence for categorical data.
///
/// Builds an r×2 contingency table over the distinct values of both groups
/// and tests whether the value distribution depends on group membership.
/// The effect size is Cramér's V = √(χ²/N).
///
/// The confidence interval is a heuristic band `[0, 2·V]`, not a principled
/// interval; it is preserved in this shape for output compatibility.
pub fn chi_squared_independence(
    group_a: &[f64],
    group_b: &[f64],
    alpha: f64,
    confidence_level: f64,
) -> Result<TestResult> {
    validate_levels(alpha, confidence_level)?;
    validate_samples("chi_squared_independence", group_a, group_b)?;

    let table = ContingencyTable::from_samples(group_a, group_b)?;
    let chi2 = table.statistic();
    let dof = table.dof();

    // A single distinct value overall leaves zero degrees of freedom; the
    // statistic is 0 and no evidence against independence exists.
    let p_value = if dof == 0.0 {
        1.0
    } else {
        let dist = distribution::ChiSquared::new(dof)?;
        (1.0 - dist.cdf(chi2)).clamp(0.0, 1.0)
    };

    let effect_size = (chi2 / table.total()).sqrt();
    let (is_significant, interpretation) = report::association_interpretation(p_value, alpha);

    Ok(TestResult {
        data_type: DataType::Categorical,
        test_type: TestType::ChiSquared,
        test_statistic: chi2,
        p_value,
        confidence_interval: ConfidenceInterval {
            lower: 0.0,
            upper: 2.0 * effect_size,
        },
        effect_size,
        is_significant,
        interpretation,
        test_details: report::details_for(TestType::ChiSquared),
    })
}

// ── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Decision;

    fn conversions(ones: usize, zeros: usize) -> Vec<f64> {
        let mut v = vec![1.0; ones];
        v.extend(vec![0.0; zeros]);
        v
    }

    // ── Welch t-test ───────────────────────────────────────────────────

    #[test]
    fn welch_known_scenario() {
        // varA=2.5, varB=1.3 → t ≈ -5.047, df ≈ 7.275
        let a = [10.0, 12.0, 11.0, 13.0, 9.0];
        let b = [15.0, 16.0, 14.0, 17.0, 15.0];
        let result = welch_t_test(&a, &b, 0.05, 0.95).unwrap();

        assert_eq!(result.data_type, DataType::Continuous);
        assert_eq!(result.test_type, TestType::TTest);
        assert!((result.test_statistic + 5.0471).abs() < 1e-3, "t={}", result.test_statistic);
        assert!(result.p_value < 0.01, "p={}", result.p_value);
        assert!(result.is_significant);
        // Cohen's d negative since A < B
        assert!(result.effect_size < 0.0);
        assert!((result.effect_size + 4.4 / 1.9_f64.sqrt()).abs() < 1e-6);
        assert!(result.confidence_interval.lower <= result.confidence_interval.upper);
        // CI centered on the mean difference
        let center =
            (result.confidence_interval.lower + result.confidence_interval.upper) / 2.0;
        assert!((center + 4.4).abs() < 1e-9);
    }

    #[test]
    fn welch_df_in_expected_range() {
        let a = [10.0, 12.0, 11.0, 13.0, 9.0];
        let b = [15.0, 16.0, 14.0, 17.0, 15.0];
        // Recompute df the way the test does and check the Welch bound
        let var_a = variance(&a).unwrap();
        let var_b = variance(&b).unwrap();
        let se2 = var_a / 5.0 + var_b / 5.0;
        let df = se2 * se2
            / ((var_a / 5.0).powi(2) / 4.0 + (var_b / 5.0).powi(2) / 4.0);
        assert!(df > 4.0 && df < 8.0, "df={}", df);
    }

    #[test]
    fn welch_antisymmetric_under_group_swap() {
        let a = [10.0, 12.0, 11.0, 13.0, 9.0];
        let b = [15.0, 16.0, 14.0, 17.0, 15.0];
        let forward = welch_t_test(&a, &b, 0.05, 0.95).unwrap();
        let reverse = welch_t_test(&b, &a, 0.05, 0.95).unwrap();
        assert!((forward.test_statistic + reverse.test_statistic).abs() < 1e-10);
        assert!((forward.p_value - reverse.p_value).abs() < 1e-10);
        assert!((forward.effect_size + reverse.effect_size).abs() < 1e-10);
    }

    #[test]
    fn welch_no_difference() {
        let a = [1.0, 2.0, 3.0, 4.0, 5.0];
        let b = [1.0, 2.0, 3.0, 4.0, 5.0];
        let result = welch_t_test(&a, &b, 0.05, 0.95).unwrap();
        assert!((result.test_statistic).abs() < 1e-10);
        assert!((result.p_value - 1.0).abs() < 1e-9);
        assert!(!result.is_significant);
        assert_eq!(result.interpretation.decision, Decision::FailToReject);
    }

    #[test]
    fn welch_degenerate_equal_constants() {
        let a = [5.0, 5.0, 5.0];
        let b = [5.0, 5.0];
        let result = welch_t_test(&a, &b, 0.05, 0.95).unwrap();
        assert_eq!(result.test_statistic, 0.0);
        assert_eq!(result.p_value, 1.0);
        assert_eq!(result.effect_size, 0.0);
        assert!(!result.is_significant);
    }

    #[test]
    fn welch_degenerate_distinct_constants() {
        let a = [5.0, 5.0, 5.0];
        let b = [7.0, 7.0];
        let result = welch_t_test(&a, &b, 0.05, 0.95).unwrap();
        assert!(result.test_statistic.is_infinite());
        assert!(result.test_statistic < 0.0);
        assert_eq!(result.p_value, 0.0);
        assert!(result.is_significant);
        // Interval collapses onto the observed difference
        assert!((result.confidence_interval.lower + 2.0).abs() < 1e-10);
        assert!((result.confidence_interval.upper + 2.0).abs() < 1e-10);
    }

    #[test]
    fn welch_winner_in_interpretation() {
        let a = [10.0, 12.0, 11.0, 13.0, 9.0];
        let b = [15.0, 16.0, 14.0, 17.0, 15.0];
        let result = welch_t_test(&a, &b, 0.05, 0.95).unwrap();
        assert!(result
            .interpretation
            .plain_language
            .contains("Winner: Group B"));
    }

    #[test]
    fn welch_requires_two_observations_per_group() {
        assert!(welch_t_test(&[1.0], &[2.0, 3.0], 0.05, 0.95).is_err());
        assert!(welch_t_test(&[1.0, 2.0], &[3.0], 0.05, 0.95).is_err());
        assert!(welch_t_test(&[], &[1.0, 2.0], 0.05, 0.95).is_err());
    }

    #[test]
    fn welch_details_match() {
        let a = [1.0, 2.5, 3.0];
        let b = [2.0, 3.5, 4.0];
        let result = welch_t_test(&a, &b, 0.05, 0.95).unwrap();
        assert_eq!(result.test_details.method, "Welch's Two-Sample t-Test");
        assert_eq!(result.test_details.assumptions.len(), 3);
    }

    // ── Two-proportion z-test ──────────────────────────────────────────

    #[test]
    fn z_test_known_scenario() {
        // pA=0.6, pB=0.5, pooled=0.55 → z ≈ 1.4213, p ≈ 0.155
        let a = conversions(60, 40);
        let b = conversions(50, 50);
        let result = two_proportion_z_test(&a, &b, 0.05, 0.95).unwrap();

        assert_eq!(result.data_type, DataType::Binary);
        assert_eq!(result.test_type, TestType::ZTest);
        assert!((result.test_statistic - 1.4213).abs() < 1e-3, "z={}", result.test_statistic);
        assert!((result.p_value - 0.1553).abs() < 1e-3, "p={}", result.p_value);
        assert!(!result.is_significant);
        assert!((result.effect_size - 0.1).abs() < 1e-10);
        assert!(result.confidence_interval.lower <= result.confidence_interval.upper);
    }

    #[test]
    fn z_test_unpooled_interval_width() {
        // se_unpooled = sqrt(0.6·0.4/100 + 0.5·0.5/100) = sqrt(0.0049) = 0.07
        let a = conversions(60, 40);
        let b = conversions(50, 50);
        let result = two_proportion_z_test(&a, &b, 0.05, 0.95).unwrap();
        let half_width =
            (result.confidence_interval.upper - result.confidence_interval.lower) / 2.0;
        assert!((half_width - 1.959964 * 0.07).abs() < 1e-4, "hw={}", half_width);
    }

    #[test]
    fn z_test_clear_difference_is_significant() {
        let a = conversions(80, 20);
        let b = conversions(50, 50);
        let result = two_proportion_z_test(&a, &b, 0.05, 0.95).unwrap();
        assert!(result.is_significant);
        assert_eq!(result.interpretation.decision, Decision::Reject);
    }

    #[test]
    fn z_test_degenerate_all_zero() {
        let a = conversions(0, 20);
        let b = conversions(0, 30);
        let result = two_proportion_z_test(&a, &b, 0.05, 0.95).unwrap();
        assert_eq!(result.test_statistic, 0.0);
        assert_eq!(result.p_value, 1.0);
        assert!(!result.is_significant);
    }

    #[test]
    fn z_test_degenerate_all_one() {
        let a = conversions(20, 0);
        let b = conversions(30, 0);
        let result = two_proportion_z_test(&a, &b, 0.05, 0.95).unwrap();
        assert_eq!(result.test_statistic, 0.0);
        assert_eq!(result.p_value, 1.0);
    }

    #[test]
    fn z_test_rejects_non_binary_values() {
        let a = [0.0, 1.0, 0.5];
        let b = [0.0, 1.0];
        assert!(two_proportion_z_test(&a, &b, 0.05, 0.95).is_err());
    }

    #[test]
    fn z_test_antisymmetric_under_group_swap() {
        let a = conversions(60, 40);
        let b = conversions(50, 50);
        let forward = two_proportion_z_test(&a, &b, 0.05, 0.95).unwrap();
        let reverse = two_proportion_z_test(&b, &a, 0.05, 0.95).unwrap();
        assert!((forward.test_statistic + reverse.test_statistic).abs() < 1e-10);
        assert!((forward.p_value - reverse.p_value).abs() < 1e-10);
    }

    // ── Chi-squared independence test ──────────────────────────────────

    #[test]
    fn chi_squared_known_scenario() {
        // Table rows over {1,2,3}: [2,2],[2,0],[1,3] → χ²=3.0, dof=2,
        // p = e^{-1.5} ≈ 0.2231, V = sqrt(3/10)
        let a = [1.0, 2.0, 3.0, 1.0, 2.0];
        let b = [3.0, 3.0, 3.0, 1.0, 1.0];
        let result = chi_squared_independence(&a, &b, 0.05, 0.95).unwrap();

        assert_eq!(result.data_type, DataType::Categorical);
        assert_eq!(result.test_type, TestType::ChiSquared);
        assert!((result.test_statistic - 3.0).abs() < 1e-9);
        assert!((result.p_value - (-1.5_f64).exp()).abs() < 1e-6, "p={}", result.p_value);
        assert!(!result.is_significant);
        assert!((result.effect_size - 0.3_f64.sqrt()).abs() < 1e-9);
        // Heuristic band [0, 2V]
        assert_eq!(result.confidence_interval.lower, 0.0);
        assert!((result.confidence_interval.upper - 2.0 * 0.3_f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn chi_squared_statistic_non_negative_and_swap_invariant() {
        let a = [1.0, 1.0, 2.0, 2.0, 2.0, 3.0];
        let b = [1.0, 2.0, 3.0, 3.0, 3.0, 3.0];
        let forward = chi_squared_independence(&a, &b, 0.05, 0.95).unwrap();
        let reverse = chi_squared_independence(&b, &a, 0.05, 0.95).unwrap();
        assert!(forward.test_statistic >= 0.0);
        assert!((forward.test_statistic - reverse.test_statistic).abs() < 1e-10);
        assert!((forward.p_value - reverse.p_value).abs() < 1e-10);
    }

    #[test]
    fn chi_squared_single_category_is_degenerate_not_error() {
        let a = [5.0, 5.0, 5.0];
        let b = [5.0, 5.0];
        let result = chi_squared_independence(&a, &b, 0.05, 0.95).unwrap();
        assert_eq!(result.test_statistic, 0.0);
        assert_eq!(result.p_value, 1.0);
        assert!(!result.is_significant);
        assert_eq!(result.effect_size, 0.0);
    }

    #[test]
    fn chi_squared_strong_association() {
        let a = [1.0; 20].to_vec();
        let mut b = vec![2.0; 18];
        b.extend([1.0, 1.0]);
        let result = chi_squared_independence(&a, &b, 0.05, 0.95).unwrap();
        assert!(result.is_significant, "p={}", result.p_value);
        // Cramér's V stays in [0, 1] for a 2-column table
        assert!(result.effect_size > 0.0 && result.effect_size <= 1.0);
    }

    // ── Shared contract ────────────────────────────────────────────────

    #[test]
    fn invalid_levels_rejected_before_any_test() {
        let a = [1.0, 2.0, 3.0];
        let b = [2.0, 3.0, 4.0];
        for bad in [0.0, 1.0, -0.1, 1.5] {
            assert!(welch_t_test(&a, &b, bad, 0.95).is_err(), "alpha={}", bad);
            assert!(welch_t_test(&a, &b, 0.05, bad).is_err(), "conf={}", bad);
            assert!(two_proportion_z_test(&[0.0, 1.0], &[1.0], bad, 0.95).is_err());
            assert!(chi_squared_independence(&a, &b, bad, 0.95).is_err());
        }
    }

    #[test]
    fn significance_matches_threshold() {
        let a = conversions(60, 40);
        let b = conversions(50, 50);
        // p ≈ 0.155: significant at α=0.2, not at α=0.05
        let loose = two_proportion_z_test(&a, &b, 0.2, 0.95).unwrap();
        let strict = two_proportion_z_test(&a, &b, 0.05, 0.95).unwrap();
        assert!(loose.is_significant);
        assert!(!strict.is_significant);
        assert_eq!(loose.is_significant, loose.p_value < 0.2);
        assert_eq!(strict.is_significant, strict.p_value < 0.05);
    }

    #[test]
    fn nan_observations_rejected() {
        let a = [1.0, f64::NAN, 3.0];
        let b = [2.0, 3.0, 4.0];
        assert!(welch_t_test(&a, &b, 0.05, 0.95).is_err());
        assert!(chi_squared_independence(&a, &b, 0.05, 0.95).is_err());
    }

    #[test]
    fn scored_and_summarizable() {
        let a = conversions(60, 40);
        let b = conversions(50, 50);
        let result = two_proportion_z_test(&a, &b, 0.05, 0.95).unwrap();
        assert!((result.score() - result.p_value).abs() < 1e-15);
        let s = result.summary();
        assert!(s.contains("Two-Proportion Z-Test"));
        assert!(s.contains("statistic="));
    }
}
