//! Descriptive statistics for experiment samples.
//!
//! Provides the numeric primitives the hypothesis tests build on ([`mean`],
//! [`variance`], [`std_dev`]) and the aggregate [`describe`] function used to
//! report per-group metrics alongside continuous analyses.

use splitstat_core::{Result, SplitstatError, Summarizable};

/// Per-group summary metrics reported alongside continuous analyses.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupMetrics {
    /// Number of observations.
    pub count: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Sample standard deviation (NaN for a single observation).
    pub std_dev: f64,
    /// Minimum value.
    pub min: f64,
    /// Maximum value.
    pub max: f64,
    /// Median (50th percentile).
    pub median: f64,
}

impl Summarizable for GroupMetrics {
    fn summary(&self) -> String {
        format!(
            "n={}, mean={:.4}, std={:.4}, min={:.4}, max={:.4}",
            self.count, self.mean, self.std_dev, self.min, self.max,
        )
    }
}

/// Reject samples containing NaN or infinite observations.
pub(crate) fn ensure_finite(label: &str, data: &[f64]) -> Result<()> {
    if data.iter().any(|v| !v.is_finite()) {
        return Err(SplitstatError::NonNumeric(format!(
            "{label}: sample contains a NaN or infinite value",
        )));
    }
    Ok(())
}

/// Arithmetic mean.
pub fn mean(data: &[f64]) -> Result<f64> {
    if data.is_empty() {
        return Err(SplitstatError::InsufficientData(
            "mean: data must not be empty".into(),
        ));
    }
    Ok(data.iter().sum::<f64>() / data.len() as f64)
}

/// Sample variance (Bessel's correction, divide by n-1).
///
/// Requires at least 2 observations.
pub fn variance(data: &[f64]) -> Result<f64> {
    let n = data.len();
    if n < 2 {
        return Err(SplitstatError::InsufficientData(format!(
            "variance: need at least 2 observations (got {n})",
        )));
    }
    let m = mean(data)?;
    let ss: f64 = data.iter().map(|&x| (x - m).powi(2)).sum();
    Ok(ss / (n - 1) as f64)
}

/// Sample standard deviation.
pub fn std_dev(data: &[f64]) -> Result<f64> {
    Ok(variance(data)?.sqrt())
}

/// Median (50th percentile, linear interpolation between middle values).
pub fn median(data: &[f64]) -> Result<f64> {
    if data.is_empty() {
        return Err(SplitstatError::InsufficientData(
            "median: data must not be empty".into(),
        ));
    }
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let n = sorted.len();
    if n % 2 == 1 {
        Ok(sorted[n / 2])
    } else {
        Ok((sorted[n / 2 - 1] + sorted[n / 2]) / 2.0)
    }
}

/// Compute all per-group metrics for `data`.
///
/// Requires at least 1 observation; `std_dev` is NaN for a single
/// observation since the sample estimator is undefined there.
pub fn describe(data: &[f64]) -> Result<GroupMetrics> {
    if data.is_empty() {
        return Err(SplitstatError::InsufficientData(
            "describe: data must not be empty".into(),
        ));
    }
    ensure_finite("describe", data)?;

    let mut min_val = f64::INFINITY;
    let mut max_val = f64::NEG_INFINITY;
    for &x in data {
        if x < min_val {
            min_val = x;
        }
        if x > max_val {
            max_val = x;
        }
    }

    let sd = if data.len() > 1 {
        std_dev(data)?
    } else {
        f64::NAN
    };

    Ok(GroupMetrics {
        count: data.len(),
        mean: mean(data)?,
        std_dev: sd,
        min: min_val,
        max: max_val,
        median: median(data)?,
    })
}
