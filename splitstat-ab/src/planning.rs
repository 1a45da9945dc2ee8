//! Pre-experiment planning: sample sizing, duration, and per-variant
//! proportion intervals.
//!
//! These calculations consume target proportions and error rates; they are
//! independent of any analyzer result.

use splitstat_core::{Result, SplitstatError};
use splitstat_stats::distribution::Normal;
use splitstat_stats::ConfidenceInterval;

/// Whether the planned test is one- or two-sided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Tail {
    OneSided,
    TwoSided,
}

fn validate_rate(name: &str, value: f64) -> Result<()> {
    if !(value > 0.0 && value < 1.0) {
        return Err(SplitstatError::InvalidParameters(format!(
            "{name} must be in (0, 1), got {value}",
        )));
    }
    Ok(())
}

/// Required sample size per arm for a two-proportion z-test.
///
/// `p1`/`p2` are the expected control and variant conversion rates,
/// `alpha` the significance level, `beta` the type II error rate
/// (power = 1 − beta). Rounds up to the next whole observation.
pub fn sample_size_per_arm(p1: f64, p2: f64, alpha: f64, beta: f64, tail: Tail) -> Result<u64> {
    validate_rate("p1", p1)?;
    validate_rate("p2", p2)?;
    validate_rate("alpha", alpha)?;
    validate_rate("beta", beta)?;
    let effect = (p2 - p1).abs();
    if effect == 0.0 {
        return Err(SplitstatError::InvalidParameters(
            "sample_size_per_arm: p1 and p2 must differ".into(),
        ));
    }

    let normal = Normal::standard();
    let z_alpha = match tail {
        Tail::TwoSided => normal.inverse_cdf(1.0 - alpha / 2.0),
        Tail::OneSided => normal.inverse_cdf(1.0 - alpha),
    };
    let z_beta = normal.inverse_cdf(1.0 - beta);

    let pooled = (p1 + p2) / 2.0;
    let numerator = (z_alpha * (2.0 * pooled * (1.0 - pooled)).sqrt()
        + z_beta * (p1 * (1.0 - p1) + p2 * (1.0 - p2)).sqrt())
    .powi(2);

    Ok((numerator / (effect * effect)).ceil() as u64)
}

/// Estimated test duration in days, assuming traffic split evenly across
/// the two arms.
pub fn test_duration_days(sample_size_per_arm: u64, traffic_per_day: u64) -> Result<u64> {
    if traffic_per_day == 0 {
        return Err(SplitstatError::InvalidParameters(
            "test_duration_days: traffic_per_day must be positive".into(),
        ));
    }
    let total = sample_size_per_arm * 2;
    Ok(total.div_ceil(traffic_per_day))
}

/// Wald confidence interval for a single conversion proportion, clamped
/// to [0, 1].
pub fn proportion_confidence_interval(
    conversions: u64,
    total: u64,
    confidence_level: f64,
) -> Result<ConfidenceInterval> {
    validate_rate("confidence_level", confidence_level)?;
    if total == 0 {
        return Err(SplitstatError::InsufficientData(
            "proportion_confidence_interval: no observations".into(),
        ));
    }
    if conversions > total {
        return Err(SplitstatError::InvalidParameters(format!(
            "proportion_confidence_interval: {conversions} conversions exceed {total} observations",
        )));
    }

    let p = conversions as f64 / total as f64;
    let z = Normal::standard().inverse_cdf(1.0 - (1.0 - confidence_level) / 2.0);
    let margin = z * (p * (1.0 - p) / total as f64).sqrt();

    Ok(ConfidenceInterval {
        lower: (p - margin).max(0.0),
        upper: (p + margin).min(1.0),
    })
}
