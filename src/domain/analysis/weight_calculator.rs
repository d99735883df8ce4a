//! Weight Calculator - entropy-based criterion weights.

use tracing::debug;

use super::{EntropyCalculator, ZERO_TOLERANCE};
use crate::domain::foundation::NfError;
use crate::domain::measures::Measure;
use crate::domain::nfs::Rnf;

/// Criterion weights from entropy and cross-entropy.
pub struct WeightCalculator;

impl WeightCalculator {
    /// Computes one weight per criterion row.
    ///
    /// # Algorithm
    /// raw_j = 1 - entropy_j + cross_entropy_j, then w_j = raw_j / Σ raw.
    ///
    /// # Errors
    /// - whatever the entropy stages raise (e.g. `DivisionByZero` for a
    ///   single alternative)
    /// - `WeightComputation` if a raw weight is not finite
    /// - `Normalization` if the raw weights sum to zero
    pub fn compute_weight(rnf: &Rnf, measure: Measure) -> Result<Vec<f64>, NfError> {
        let groups = rnf.data().criteria();
        let entropy = EntropyCalculator::entropy_list(groups, measure)?;
        let cross_entropy = EntropyCalculator::cross_entropy_list(groups, measure)?;

        let raw: Vec<f64> = entropy
            .iter()
            .zip(&cross_entropy)
            .map(|(e, ce)| 1.0 - e + ce)
            .collect();

        let weights = Self::normalize(&raw)?;

        debug!(
            measure = %measure,
            criteria = weights.len(),
            weights = ?weights,
            "Computed criterion weights"
        );

        Ok(weights)
    }

    /// Scales raw weights so they sum to one.
    ///
    /// A sum within `ZERO_TOLERANCE` of zero is rejected as zero.
    pub fn normalize(raw: &[f64]) -> Result<Vec<f64>, NfError> {
        if raw.is_empty() {
            return Err(NfError::empty("no raw weights to normalize"));
        }
        if let Some(bad) = raw.iter().find(|w| !w.is_finite()) {
            return Err(NfError::WeightComputation(format!(
                "raw weight is {}, check entropy and cross-entropy values",
                bad
            )));
        }

        let total: f64 = raw.iter().sum();
        if total.abs() <= ZERO_TOLERANCE || !total.is_finite() {
            return Err(NfError::Normalization(format!(
                "raw weights sum to {}",
                total
            )));
        }

        Ok(raw.iter().map(|w| w / total).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::nfs::NfMatrix;

    const EPS: f64 = 1e-12;

    fn rnf(data: &[Vec<[f64; 4]>]) -> Rnf {
        Rnf::new(&NfMatrix::from_nested(data).unwrap(), &[]).unwrap()
    }

    #[test]
    fn weights_sum_to_one() {
        let r = rnf(&[
            vec![[0.1, 0.2, 0.3, 0.4], [0.7, 0.6, 0.2, 0.1], [0.4, 0.4, 0.4, 0.4]],
            vec![[0.9, 0.8, 0.1, 0.2], [0.3, 0.3, 0.6, 0.6], [0.2, 0.9, 0.5, 0.3]],
        ]);
        for measure in Measure::all() {
            let weights = WeightCalculator::compute_weight(&r, *measure).unwrap();
            assert_eq!(weights.len(), 2);
            let total: f64 = weights.iter().sum();
            assert!((total - 1.0).abs() < 1e-9, "{} sums to {}", measure, total);
        }
    }

    #[test]
    fn discriminating_criterion_gets_more_weight() {
        // Row 0 separates the alternatives, row 1 does not
        let r = rnf(&[
            vec![[0.9, 0.9, 0.1, 0.1], [0.1, 0.1, 0.9, 0.9]],
            vec![[0.9, 0.9, 0.1, 0.1], [0.9, 0.9, 0.1, 0.1]],
        ]);
        let weights = WeightCalculator::compute_weight(&r, Measure::Similarity2).unwrap();
        assert!(weights[0] > weights[1]);
    }

    #[test]
    fn matches_hand_computed_weights() {
        // Similarity2: entropy = 1 - S(v, 1 - v) / 4, cross-entropy = S(a, b) / 4
        let r = rnf(&[
            vec![[1.0, 1.0, 0.0, 0.0], [0.0, 0.0, 1.0, 1.0]],
            vec![[1.0, 1.0, 0.0, 0.0], [1.0, 1.0, 0.0, 0.0]],
        ]);
        // row 0: entropy 0, cross-entropy 1 -> raw 2
        // row 1: entropy 0, cross-entropy 0 -> raw 1
        let weights = WeightCalculator::compute_weight(&r, Measure::Similarity2).unwrap();
        assert!((weights[0] - 2.0 / 3.0).abs() < EPS);
        assert!((weights[1] - 1.0 / 3.0).abs() < EPS);
    }

    #[test]
    fn fully_uncertain_matrix_cannot_be_normalized() {
        // entropy 1 and cross-entropy 0 on every row -> all raw weights 0
        let r = rnf(&[
            vec![[0.5, 0.5, 0.5, 0.5], [0.5, 0.5, 0.5, 0.5]],
            vec![[0.5, 0.5, 0.5, 0.5], [0.5, 0.5, 0.5, 0.5]],
        ]);
        let result = WeightCalculator::compute_weight(&r, Measure::Similarity2);
        assert!(matches!(result, Err(NfError::Normalization(_))));
    }

    #[test]
    fn fully_uncertain_matrix_fails_for_every_measure() {
        let r = rnf(&[
            vec![[0.5, 0.5, 0.5, 0.5], [0.5, 0.5, 0.5, 0.5]],
            vec![[0.5, 0.5, 0.5, 0.5], [0.5, 0.5, 0.5, 0.5]],
            vec![[0.5, 0.5, 0.5, 0.5], [0.5, 0.5, 0.5, 0.5]],
        ]);
        for measure in Measure::all() {
            let result = WeightCalculator::compute_weight(&r, *measure);
            assert!(
                matches!(result, Err(NfError::Normalization(_))),
                "{} gave {:?}",
                measure,
                result
            );
        }
    }

    #[test]
    fn normalize_treats_rounding_noise_as_zero_sum() {
        let result = WeightCalculator::normalize(&[-2.2e-16, -2.2e-16, -2.2e-16]);
        assert!(matches!(result, Err(NfError::Normalization(_))));
    }

    #[test]
    fn single_alternative_propagates_division_by_zero() {
        let r = rnf(&[vec![[0.1, 0.2, 0.3, 0.4]], vec![[0.5, 0.6, 0.7, 0.8]]]);
        let result = WeightCalculator::compute_weight(&r, Measure::Similarity1);
        assert!(matches!(result, Err(NfError::DivisionByZero { .. })));
    }

    #[test]
    fn normalize_rejects_non_finite_raw_weight() {
        let result = WeightCalculator::normalize(&[0.5, f64::NAN]);
        assert!(matches!(result, Err(NfError::WeightComputation(_))));
    }

    #[test]
    fn normalize_rejects_zero_sum() {
        let result = WeightCalculator::normalize(&[0.5, -0.5]);
        assert!(matches!(result, Err(NfError::Normalization(_))));
    }
}
