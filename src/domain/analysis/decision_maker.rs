//! Decision Maker - ranks alternatives and selects the best one.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::RankingCalculator;
use crate::domain::foundation::{Component, DecisionError, NfError};
use crate::domain::measures::Measure;
use crate::domain::nfs::Rnf;

/// Result of one decision run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionOutcome {
    pub measure: Measure,
    /// Normalized score per alternative.
    pub scores: Vec<f64>,
    /// 1-based alternative indices ordered by ascending score.
    pub rank: Vec<usize>,
    /// Rank of every alternative (1 = lowest score).
    pub positions: Vec<usize>,
    /// 1-based index of the highest-scoring alternative.
    pub best_alternative: usize,
}

/// Facade over the scoring pipeline.
///
/// Stateless apart from its inputs: every query recomputes the scores from
/// the refined matrix. Any pipeline failure surfaces as a [`DecisionError`]
/// wrapping the original cause.
#[derive(Debug, Clone, Copy)]
pub struct DecisionMaker<'a> {
    rnf: &'a Rnf,
    measure: Measure,
}

impl<'a> DecisionMaker<'a> {
    /// Creates a decision maker from a membership component index (0..=3).
    ///
    /// Component k scores with the k-th similarity formula.
    ///
    /// # Errors
    /// `InvalidIndex` (wrapped) if `index` is outside `[0, 3]`.
    pub fn new(rnf: &'a Rnf, index: i64) -> Result<Self, DecisionError> {
        let component = Component::from_index(index).map_err(|e| {
            warn!(index, "Rejected component index");
            DecisionError::from(e)
        })?;
        Ok(Self::for_component(rnf, component))
    }

    /// Creates a decision maker for a typed membership component.
    pub fn for_component(rnf: &'a Rnf, component: Component) -> Self {
        Self::for_measure(rnf, Measure::for_component(component))
    }

    /// Creates a decision maker for any of the nine similarity formulas.
    pub fn for_measure(rnf: &'a Rnf, measure: Measure) -> Self {
        Self { rnf, measure }
    }

    pub fn measure(&self) -> Measure {
        self.measure
    }

    /// Normalized score of every alternative.
    pub fn scores(&self) -> Result<Vec<f64>, DecisionError> {
        RankingCalculator::compute_normalized_scores(self.rnf, self.measure)
            .map_err(|e| self.fail(e))
    }

    /// 1-based alternative indices in ascending score order.
    ///
    /// Equal scores keep their original relative order.
    pub fn rank(&self) -> Result<Vec<usize>, DecisionError> {
        Ok(ascending_order(&self.scores()?))
    }

    /// Rank of every alternative, 1 being the lowest score.
    pub fn rank_positions(&self) -> Result<Vec<usize>, DecisionError> {
        Ok(positions(&ascending_order(&self.scores()?)))
    }

    /// 1-based index of the highest-scoring alternative; the first one wins
    /// a tie.
    pub fn best_alternative(&self) -> Result<usize, DecisionError> {
        Ok(argmax(&self.scores()?))
    }

    /// Runs the pipeline once and returns every result of the run.
    pub fn evaluate(&self) -> Result<DecisionOutcome, DecisionError> {
        let scores = self.scores()?;
        let rank = ascending_order(&scores);
        let positions = positions(&rank);
        let best_alternative = argmax(&scores);

        debug!(
            measure = %self.measure,
            best_alternative,
            rank = ?rank,
            "Evaluated decision"
        );

        Ok(DecisionOutcome {
            measure: self.measure,
            scores,
            rank,
            positions,
            best_alternative,
        })
    }

    fn fail(&self, error: NfError) -> DecisionError {
        warn!(
            measure = %self.measure,
            code = %error.code(),
            error = %error,
            "Decision pipeline failed"
        );
        DecisionError::from(error)
    }
}

/// 1-based indices sorted by ascending score (stable).
fn ascending_order(scores: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| scores[a].total_cmp(&scores[b]));
    order.into_iter().map(|i| i + 1).collect()
}

/// Inverts a 1-based ordering into per-alternative ranks.
fn positions(order: &[usize]) -> Vec<usize> {
    let mut ranks = vec![0; order.len()];
    for (position, &alternative) in order.iter().enumerate() {
        ranks[alternative - 1] = position + 1;
    }
    ranks
}

/// 1-based index of the first maximum.
fn argmax(scores: &[f64]) -> usize {
    let mut best = 0;
    for (i, score) in scores.iter().enumerate() {
        if *score > scores[best] {
            best = i;
        }
    }
    best + 1
}
