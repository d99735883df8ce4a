//! Ranking Calculator - weighted similarity to the ideal references.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{WeightCalculator, ZERO_TOLERANCE};
use crate::domain::foundation::{Membership, NfError};
use crate::domain::measures::Measure;
use crate::domain::nfs::Rnf;

/// Every intermediate vector of one scoring run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub measure: Measure,
    /// One weight per criterion row.
    pub weights: Vec<f64>,
    /// Weighted similarity to the positive ideal, per alternative.
    pub positive: Vec<f64>,
    /// Weighted similarity to the negative ideal, per alternative.
    pub negative: Vec<f64>,
    /// `positive / (positive + negative)`, per alternative.
    pub normalized: Vec<f64>,
}

/// Scores alternatives against the positive ideal (1, 1, 0, 0) and the
/// negative ideal (0, 0, 1, 1).
pub struct RankingCalculator;

impl RankingCalculator {
    /// Σ_j w_j · measure(rnf[j][i], positive ideal) for every alternative i.
    pub fn compute_positive_similarity_scores(
        rnf: &Rnf,
        measure: Measure,
    ) -> Result<Vec<f64>, NfError> {
        let weights = WeightCalculator::compute_weight(rnf, measure)?;
        Self::reference_scores(rnf, &weights, Membership::POSITIVE_IDEAL, measure)
    }

    /// Σ_j w_j · measure(rnf[j][i], negative ideal) for every alternative i.
    pub fn compute_negative_similarity_scores(
        rnf: &Rnf,
        measure: Measure,
    ) -> Result<Vec<f64>, NfError> {
        let weights = WeightCalculator::compute_weight(rnf, measure)?;
        Self::reference_scores(rnf, &weights, Membership::NEGATIVE_IDEAL, measure)
    }

    /// Final score `Spos / (Spos + Sneg)` for every alternative.
    ///
    /// # Errors
    /// - `DivisionByZero` if `Spos + Sneg` is zero (within tolerance) for
    ///   some alternative
    /// - `Calculation` if a score is not finite
    pub fn compute_normalized_scores(rnf: &Rnf, measure: Measure) -> Result<Vec<f64>, NfError> {
        Ok(Self::score_breakdown(rnf, measure)?.normalized)
    }

    /// Runs the whole scoring stage once and keeps every intermediate vector.
    pub fn score_breakdown(rnf: &Rnf, measure: Measure) -> Result<ScoreBreakdown, NfError> {
        let weights = WeightCalculator::compute_weight(rnf, measure)?;
        let positive = Self::reference_scores(rnf, &weights, Membership::POSITIVE_IDEAL, measure)?;
        let negative = Self::reference_scores(rnf, &weights, Membership::NEGATIVE_IDEAL, measure)?;
        let normalized = Self::normalize_scores(&positive, &negative)?;

        debug!(
            measure = %measure,
            alternatives = normalized.len(),
            scores = ?normalized,
            "Computed normalized scores"
        );

        Ok(ScoreBreakdown {
            measure,
            weights,
            positive,
            negative,
            normalized,
        })
    }

    fn reference_scores(
        rnf: &Rnf,
        weights: &[f64],
        reference: Membership,
        measure: Measure,
    ) -> Result<Vec<f64>, NfError> {
        let data = rnf.data();

        (0..data.alternative_count())
            .map(|alternative| {
                let mut total = 0.0;
                for (weight, row) in weights.iter().zip(data.criteria()) {
                    if let Some(cell) = row.get(alternative) {
                        total += weight * measure.try_compute(*cell, reference)?;
                    }
                }
                Ok(total)
            })
            .collect()
    }

    fn normalize_scores(positive: &[f64], negative: &[f64]) -> Result<Vec<f64>, NfError> {
        positive
            .iter()
            .zip(negative)
            .enumerate()
            .map(|(alternative, (pos, neg))| {
                let denominator = pos + neg;
                if denominator.abs() <= ZERO_TOLERANCE {
                    return Err(NfError::division_by_zero(format!(
                        "score normalization of alternative {}",
                        alternative + 1
                    )));
                }
                let score = pos / denominator;
                if !score.is_finite() {
                    return Err(NfError::Calculation(format!(
                        "score of alternative {} is {}",
                        alternative + 1,
                        score
                    )));
                }
                Ok(score)
            })
            .collect()
    }
}
