//! Contingency tables for two-group categorical comparisons.
//!
//! A [`ContingencyTable`] has one row per distinct value across both groups
//! (sorted ascending) and one column per group, with observed counts as
//! entries. It computes the uncorrected Pearson chi-squared statistic and
//! the expected-frequency table.

use splitstat_core::{Result, SplitstatError};

use crate::descriptive::ensure_finite;

/// An r×2 observed-count table over the distinct values of two samples.
#[derive(Debug, Clone, PartialEq)]
pub struct ContingencyTable {
    labels: Vec<f64>,
    observed: Vec<[f64; 2]>,
    total: f64,
}

impl ContingencyTable {
    /// Build the table from two non-empty samples.
    ///
    /// Rows are the sorted distinct values of the union of both samples;
    /// column 0 counts group A, column 1 group B.
    pub fn from_samples(group_a: &[f64], group_b: &[f64]) -> Result<Self> {
        if group_a.is_empty() || group_b.is_empty() {
            return Err(SplitstatError::InsufficientData(
                "contingency table: each group must be non-empty".into(),
            ));
        }
        ensure_finite("contingency table", group_a)?;
        ensure_finite("contingency table", group_b)?;

        let mut labels: Vec<f64> = group_a.iter().chain(group_b.iter()).copied().collect();
        labels.sort_by(|a, b| a.total_cmp(b));
        labels.dedup();

        let observed = labels
            .iter()
            .map(|&value| {
                let count_a = group_a.iter().filter(|&&x| x == value).count() as f64;
                let count_b = group_b.iter().filter(|&&x| x == value).count() as f64;
                [count_a, count_b]
            })
            .collect();

        Ok(Self {
            labels,
            observed,
            total: (group_a.len() + group_b.len()) as f64,
        })
    }

    /// Sorted distinct values labelling the rows.
    pub fn labels(&self) -> &[f64] {
        &self.labels
    }

    /// Observed counts, one `[group_a, group_b]` pair per row.
    pub fn observed(&self) -> &[[f64; 2]] {
        &self.observed
    }

    /// Total number of observations across both groups.
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Expected frequencies under independence: row_total × col_total / N.
    pub fn expected(&self) -> Vec<[f64; 2]> {
        let col_sums = self.column_sums();
        self.observed
            .iter()
            .map(|row| {
                let row_sum = row[0] + row[1];
                [
                    row_sum * col_sums[0] / self.total,
                    row_sum * col_sums[1] / self.total,
                ]
            })
            .collect()
    }

    /// Uncorrected Pearson chi-squared statistic: Σ (O - E)² / E.
    ///
    /// Cells with zero expected frequency contribute nothing. A single-row
    /// table (one distinct value overall) yields 0.
    pub fn statistic(&self) -> f64 {
        let expected = self.expected();
        let mut chi2 = 0.0;
        for (obs, exp) in self.observed.iter().zip(expected.iter()) {
            for j in 0..2 {
                if exp[j] > 0.0 {
                    let diff = obs[j] - exp[j];
                    chi2 += diff * diff / exp[j];
                }
            }
        }
        chi2
    }

    /// Degrees of freedom: (rows − 1) for the two-column table.
    pub fn dof(&self) -> f64 {
        (self.observed.len() - 1) as f64
    }

    fn column_sums(&self) -> [f64; 2] {
        let mut sums = [0.0, 0.0];
        for row in &self.observed {
            sums[0] += row[0];
            sums[1] += row[1];
        }
        sums
    }
}
