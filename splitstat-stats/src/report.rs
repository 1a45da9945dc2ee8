//! Composition of verdicts: significance decision, plain-language strings,
//! and the fixed hypothesis/assumption metadata for each test.
//!
//! The wording here is display-only; every number it quotes comes from the
//! test that ran. The `test_details` block is static per test type and must
//! match that test exactly.

use std::fmt;

use crate::testing::TestType;

/// Outcome of the significance decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Decision {
    /// p-value below the significance level.
    Reject,
    /// p-value at or above the significance level.
    FailToReject,
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Decision::Reject => "reject",
            Decision::FailToReject => "fail_to_reject",
        };
        f.write_str(s)
    }
}

/// Structured interpretation of a test outcome.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interpretation {
    /// Whether the null hypothesis is rejected.
    pub decision: Decision,
    /// Plain-language description of the outcome.
    pub plain_language: String,
    /// Actionable recommendation for the experimenter.
    pub recommendation: String,
}

/// Fixed metadata describing the test that ran.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TestDetails {
    /// The null hypothesis being tested.
    pub null_hypothesis: String,
    /// The alternative hypothesis.
    pub alternative_hypothesis: String,
    /// Distributional and sampling assumptions, documented but not validated.
    pub assumptions: Vec<String>,
    /// Name of the statistical method.
    pub method: String,
}

/// Interpretation for a difference-in-means comparison (Welch t-test).
///
/// The winner (higher-mean group) is only asserted when the result is
/// significant.
pub(crate) fn mean_interpretation(
    mean_a: f64,
    mean_b: f64,
    p_value: f64,
    alpha: f64,
) -> (bool, Interpretation) {
    let is_significant = p_value < alpha;
    let winner = if mean_a > mean_b { "Group A" } else { "Group B" };

    let interpretation = if is_significant {
        let direction = if mean_a > mean_b {
            "is significantly higher than"
        } else {
            "is significantly lower than"
        };
        Interpretation {
            decision: Decision::Reject,
            plain_language: format!(
                "There is a statistically significant difference between the groups \
                 (p = {p_value:.4}). Group A mean ({mean_a:.2}) {direction} Group B mean \
                 ({mean_b:.2}). Winner: {winner}.",
            ),
            recommendation: format!(
                "Reject the null hypothesis. {winner} has a statistically significant advantage.",
            ),
        }
    } else {
        Interpretation {
            decision: Decision::FailToReject,
            plain_language: format!(
                "There is no statistically significant difference between the groups \
                 (p = {p_value:.4}). The difference between Group A mean ({mean_a:.2}) and \
                 Group B mean ({mean_b:.2}) could be due to random variation.",
            ),
            recommendation: "Fail to reject the null hypothesis. Consider increasing sample \
                             size or the effect may not be meaningful."
                .into(),
        }
    };
    (is_significant, interpretation)
}

/// Interpretation for a difference-in-proportions comparison (z-test).
pub(crate) fn proportion_interpretation(
    p_a: f64,
    p_b: f64,
    p_value: f64,
    alpha: f64,
) -> (bool, Interpretation) {
    let is_significant = p_value < alpha;
    let pct_a = p_a * 100.0;
    let pct_b = p_b * 100.0;

    let interpretation = if is_significant {
        Interpretation {
            decision: Decision::Reject,
            plain_language: format!(
                "There is a statistically significant difference in proportions between the \
                 groups (p = {p_value:.4}). Group A proportion ({pct_a:.1}%) differs \
                 significantly from Group B proportion ({pct_b:.1}%).",
            ),
            recommendation: "Reject the null hypothesis. The difference in proportions is \
                             statistically significant."
                .into(),
        }
    } else {
        Interpretation {
            decision: Decision::FailToReject,
            plain_language: format!(
                "There is no statistically significant difference in proportions between the \
                 groups (p = {p_value:.4}). The difference between Group A ({pct_a:.1}%) and \
                 Group B ({pct_b:.1}%) could be due to random variation.",
            ),
            recommendation: "Fail to reject the null hypothesis. Consider increasing sample \
                             size or the effect may not be meaningful."
                .into(),
        }
    };
    (is_significant, interpretation)
}

/// Interpretation for a categorical association test (chi-squared).
pub(crate) fn association_interpretation(p_value: f64, alpha: f64) -> (bool, Interpretation) {
    let is_significant = p_value < alpha;

    let interpretation = if is_significant {
        Interpretation {
            decision: Decision::Reject,
            plain_language: format!(
                "There is a statistically significant association between group membership \
                 and the categorical variable (p = {p_value:.4}). The distribution differs \
                 significantly between groups.",
            ),
            recommendation: "Reject the null hypothesis. There is a significant association \
                             between variables."
                .into(),
        }
    } else {
        Interpretation {
            decision: Decision::FailToReject,
            plain_language: format!(
                "There is no statistically significant association between group membership \
                 and the categorical variable (p = {p_value:.4}). The distributions are \
                 similar between groups.",
            ),
            recommendation: "Fail to reject the null hypothesis. No significant association \
                             detected."
                .into(),
        }
    };
    (is_significant, interpretation)
}

/// Static hypothesis and assumption text for the given test type.
pub fn details_for(test_type: TestType) -> TestDetails {
    match test_type {
        TestType::TTest => TestDetails {
            null_hypothesis: "There is no difference in means between Group A and Group B".into(),
            alternative_hypothesis: "There is a difference in means between Group A and Group B"
                .into(),
            assumptions: vec![
                "Data is normally distributed".into(),
                "Observations are independent".into(),
                "Equal or unequal variances (Welch correction applied)".into(),
            ],
            method: "Welch's Two-Sample t-Test".into(),
        },
        TestType::ZTest => TestDetails {
            null_hypothesis: "There is no difference in proportions between Group A and Group B"
                .into(),
            alternative_hypothesis:
                "There is a difference in proportions between Group A and Group B".into(),
            assumptions: vec![
                "Binary outcomes (0/1)".into(),
                "Independent observations".into(),
                "Large sample size (np >= 5 and n(1-p) >= 5)".into(),
            ],
            method: "Two-Proportion Z-Test".into(),
        },
        TestType::ChiSquared => TestDetails {
            null_hypothesis:
                "There is no association between group membership and the categorical variable"
                    .into(),
            alternative_hypothesis:
                "There is an association between group membership and the categorical variable"
                    .into(),
            assumptions: vec![
                "Independent observations".into(),
                "Expected frequencies >= 5 in each cell".into(),
                "Categorical data".into(),
            ],
            method: "Chi-Squared Test of Independence".into(),
        },
    }
}
