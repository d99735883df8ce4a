//! Entropy Calculator - uncertainty and discrimination of criterion rows.

use crate::domain::foundation::{Membership, NfError};
use crate::domain::measures::Measure;
use crate::domain::nfs::NfSet;

/// Entropy and cross-entropy of NF-element groups.
///
/// Entropy is the mean similarity of each element to its own complement
/// (`1 - x`); cross-entropy is the mean dissimilarity of each element to
/// the other elements of its group.
pub struct EntropyCalculator;

impl EntropyCalculator {
    /// Mean of `measure(v, 1 - v)` over the group.
    ///
    /// # Errors
    /// - `EmptyData` for an empty group
    /// - `SimilarityComputation` if the formula yields a non-finite value
    pub fn entropy_with_complement(
        vectors: &[Membership],
        measure: Measure,
    ) -> Result<f64, NfError> {
        if vectors.is_empty() {
            return Err(NfError::empty("entropy requires at least one element"));
        }

        let similarities = vectors
            .iter()
            .map(|v| measure.try_compute(*v, v.negate()))
            .collect::<Result<Vec<_>, _>>()?;

        mean(&similarities, "entropy")
    }

    /// One entropy value per group (criterion row).
    pub fn entropy_list(groups: &[NfSet], measure: Measure) -> Result<Vec<f64>, NfError> {
        groups
            .iter()
            .map(|group| Self::entropy_with_complement(group.elements(), measure))
            .collect()
    }

    /// For every element, the mean of `1 - measure(v_i, v_j)` over `j != i`.
    ///
    /// # Edge Cases
    /// - Empty group: `EmptyData`
    /// - Single element: `DivisionByZero` (there is nothing to compare with)
    pub fn cross_entropy_pairwise(
        vectors: &[Membership],
        measure: Measure,
    ) -> Result<Vec<f64>, NfError> {
        match vectors.len() {
            0 => return Err(NfError::empty("cross-entropy requires at least one element")),
            1 => {
                return Err(NfError::division_by_zero(
                    "cross-entropy of a single-element group",
                ))
            }
            _ => {}
        }

        let others = (vectors.len() - 1) as f64;
        vectors
            .iter()
            .enumerate()
            .map(|(i, a)| {
                let mut total = 0.0;
                for (j, b) in vectors.iter().enumerate() {
                    if i != j {
                        total += 1.0 - measure.try_compute(*a, *b)?;
                    }
                }
                Ok(total / others)
            })
            .collect()
    }

    /// Mean pairwise cross-entropy per group (criterion row).
    pub fn cross_entropy_list(groups: &[NfSet], measure: Measure) -> Result<Vec<f64>, NfError> {
        groups
            .iter()
            .map(|group| {
                let pairwise = Self::cross_entropy_pairwise(group.elements(), measure)?;
                mean(&pairwise, "cross-entropy")
            })
            .collect()
    }
}

fn mean(values: &[f64], stage: &str) -> Result<f64, NfError> {
    let value = values.iter().sum::<f64>() / values.len() as f64;
    if !value.is_finite() {
        return Err(NfError::Calculation(format!(
            "{} evaluated to {}",
            stage, value
        )));
    }
    Ok(value)
}
