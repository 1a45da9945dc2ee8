//! Data-type detection for experiment samples.
//!
//! Each group is classified independently as binary, categorical, or
//! continuous; [`resolve`] then picks the single authoritative type for the
//! comparison using the dominance order Binary > Categorical > Continuous.

use std::fmt;

use splitstat_core::{Result, SplitstatError};

use crate::descriptive::ensure_finite;

/// The statistical nature of a sample.
///
/// The variants are ordered by restrictiveness: a binary reading is the
/// strictest interpretation of the data, a continuous one the loosest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DataType {
    /// Every distinct value is 0 or 1.
    Binary,
    /// At most 10 distinct values, all integral, and not binary.
    Categorical,
    /// Anything else: non-integral values, or more than 10 distinct values.
    Continuous,
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DataType::Binary => "binary",
            DataType::Categorical => "categorical",
            DataType::Continuous => "continuous",
        };
        f.write_str(s)
    }
}

/// Maximum number of distinct integral values still treated as categorical.
const CATEGORICAL_CARDINALITY_LIMIT: usize = 10;

/// Classify a sample as binary, categorical, or continuous.
///
/// Values are deduplicated before the cardinality and integrality checks,
/// so a sample of all-identical non-0/1 integers (e.g. all 5s) classifies
/// as categorical. Errors on empty or non-finite input.
pub fn classify(data: &[f64]) -> Result<DataType> {
    if data.is_empty() {
        return Err(SplitstatError::InsufficientData(
            "classify: sample must not be empty".into(),
        ));
    }
    ensure_finite("classify", data)?;

    let mut unique = data.to_vec();
    unique.sort_by(|a, b| a.total_cmp(b));
    unique.dedup();

    if unique.iter().all(|&v| v == 0.0 || v == 1.0) {
        return Ok(DataType::Binary);
    }

    if unique.len() <= CATEGORICAL_CARDINALITY_LIMIT && unique.iter().all(|v| v.fract() == 0.0) {
        return Ok(DataType::Categorical);
    }

    Ok(DataType::Continuous)
}

/// Resolve the combined data type for a two-group comparison.
///
/// The more restrictive classification wins: binary dominates if either
/// group is binary, categorical dominates over continuous otherwise. Mixed
/// inputs therefore never silently run the looser test.
pub fn resolve(a: DataType, b: DataType) -> DataType {
    use DataType::*;
    match (a, b) {
        (Binary, _) | (_, Binary) => Binary,
        (Categorical, _) | (_, Categorical) => Categorical,
        (Continuous, Continuous) => Continuous,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_samples() {
        assert_eq!(classify(&[0.0, 1.0, 1.0, 0.0]).unwrap(), DataType::Binary);
        assert_eq!(classify(&[1.0, 1.0, 1.0]).unwrap(), DataType::Binary);
        assert_eq!(classify(&[0.0]).unwrap(), DataType::Binary);
    }

    #[test]
    fn categorical_samples() {
        assert_eq!(
            classify(&[1.0, 2.0, 3.0, 1.0, 2.0]).unwrap(),
            DataType::Categorical
        );
        assert_eq!(
            classify(&[-1.0, 0.0, 2.0, 5.0]).unwrap(),
            DataType::Categorical
        );
    }

    #[test]
    fn identical_integers_are_categorical() {
        // Single unique value, integral, not 0/1
        assert_eq!(classify(&[5.0, 5.0, 5.0]).unwrap(), DataType::Categorical);
    }

    #[test]
    fn continuous_by_fractional_values() {
        assert_eq!(
            classify(&[1.5, 2.0, 3.0]).unwrap(),
            DataType::Continuous
        );
    }

    #[test]
    fn continuous_by_cardinality() {
        // 11 distinct integers exceed the categorical limit
        let data: Vec<f64> = (0..11).map(|i| i as f64 + 2.0).collect();
        assert_eq!(classify(&data).unwrap(), DataType::Continuous);
    }

    #[test]
    fn ten_distinct_integers_still_categorical() {
        let data: Vec<f64> = (0..10).map(|i| i as f64 + 2.0).collect();
        assert_eq!(classify(&data).unwrap(), DataType::Categorical);
    }

    #[test]
    fn duplicates_do_not_inflate_cardinality() {
        // 30 observations over 3 distinct integers
        let data: Vec<f64> = (0..30).map(|i| (i % 3) as f64 + 2.0).collect();
        assert_eq!(classify(&data).unwrap(), DataType::Categorical);
    }

    #[test]
    fn empty_sample_is_an_error() {
        assert!(classify(&[]).is_err());
    }

    #[test]
    fn non_finite_sample_is_an_error() {
        assert!(classify(&[1.0, f64::NAN]).is_err());
        assert!(classify(&[1.0, f64::INFINITY]).is_err());
    }

    #[test]
    fn resolve_binary_dominates() {
        use DataType::*;
        assert_eq!(resolve(Binary, Continuous), Binary);
        assert_eq!(resolve(Continuous, Binary), Binary);
        assert_eq!(resolve(Binary, Categorical), Binary);
        assert_eq!(resolve(Binary, Binary), Binary);
    }

    #[test]
    fn resolve_categorical_dominates_continuous() {
        use DataType::*;
        assert_eq!(resolve(Categorical, Continuous), Categorical);
        assert_eq!(resolve(Continuous, Categorical), Categorical);
    }

    #[test]
    fn resolve_both_continuous() {
        use DataType::*;
        assert_eq!(resolve(Continuous, Continuous), Continuous);
    }

    #[test]
    fn display_labels() {
        assert_eq!(DataType::Binary.to_string(), "binary");
        assert_eq!(DataType::Categorical.to_string(), "categorical");
        assert_eq!(DataType::Continuous.to_string(), "continuous");
    }
}
