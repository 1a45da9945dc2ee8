//! Normalization of raw experiment exports into analyzer samples.
//!
//! A variant either carries continuous outcome values directly or a
//! conversion count out of a visitor total; the latter expands into a
//! 0/1-valued sample so the analyzer sees strictly numeric data either way.

use splitstat_core::{Result, SplitstatError};
use splitstat_stats::{analyze_with_metrics, AnalysisOutcome};

/// One experiment arm as exported by an upstream tracking system.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VariantData {
    /// Variant label ("control", "variant-b", ...).
    pub name: String,
    /// Number of visitors in this arm.
    pub visitors: u64,
    /// Number of converted visitors.
    pub conversions: u64,
    /// Raw continuous outcomes, when the experiment measures a
    /// continuous metric instead of conversion.
    pub continuous_values: Option<Vec<f64>>,
}

/// Expand a conversion count into a 0/1 sample:
/// `conversions` ones followed by `total - conversions` zeros.
pub fn expand_conversions(conversions: u64, total: u64) -> Result<Vec<f64>> {
    if total == 0 {
        return Err(SplitstatError::InsufficientData(
            "expand_conversions: variant has no visitors".into(),
        ));
    }
    if conversions > total {
        return Err(SplitstatError::InvalidParameters(format!(
            "expand_conversions: {conversions} conversions exceed {total} visitors",
        )));
    }
    let mut sample = vec![1.0; conversions as usize];
    sample.extend(vec![0.0; (total - conversions) as usize]);
    Ok(sample)
}

fn variant_sample(variant: &VariantData, use_continuous: bool) -> Result<Vec<f64>> {
    if use_continuous {
        // Presence was checked by the caller.
        let values = variant.continuous_values.as_ref().ok_or_else(|| {
            SplitstatError::InvalidParameters(format!(
                "variant '{}': continuous values expected but missing",
                variant.name,
            ))
        })?;
        if values.is_empty() {
            return Err(SplitstatError::InsufficientData(format!(
                "variant '{}': continuous sample is empty",
                variant.name,
            )));
        }
        Ok(values.clone())
    } else {
        expand_conversions(variant.conversions, variant.visitors)
    }
}

/// Run the analyzer on the first two variants (control, variant).
///
/// Continuous values are used only when both arms carry them; otherwise
/// both arms are expanded from conversion counts.
pub fn compare_variants(
    variants: &[VariantData],
    significance_level: f64,
    confidence_level: f64,
) -> Result<AnalysisOutcome> {
    if variants.len() < 2 {
        return Err(SplitstatError::FewerThanTwoGroups(format!(
            "need at least 2 variants for comparison (got {})",
            variants.len(),
        )));
    }

    let control = &variants[0];
    let variant = &variants[1];
    let use_continuous =
        control.continuous_values.is_some() && variant.continuous_values.is_some();

    let group_a = variant_sample(control, use_continuous)?;
    let group_b = variant_sample(variant, use_continuous)?;

    analyze_with_metrics(&group_a, &group_b, significance_level, confidence_level)
}
