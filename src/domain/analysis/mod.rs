//! Analysis Module - Pure domain services for NF-set decision analysis.
//!
//! Each stage is a stateless calculator over a refined decision matrix.
//!
//! # Components
//!
//! - `EntropyCalculator` - Entropy and cross-entropy of criterion rows
//! - `WeightCalculator` - Normalized criterion weights (`1 - E + CE`)
//! - `RankingCalculator` - Weighted similarity to the positive and negative ideals
//! - `DecisionMaker` - Ranking and best-alternative selection
//!
//! # Design Philosophy
//!
//! All functions are pure (no side effects) and stateless. They take domain
//! objects as input and return computed results. No ports or adapters needed
//! since there's no I/O or external dependencies.

/// Magnitude below which a weight sum or score denominator counts as zero.
///
/// Formulas 1 and 9 return `1 + ulp` at zero distance, so exact comparison
/// would let pure rounding noise through.
pub(crate) const ZERO_TOLERANCE: f64 = 1e-12;

mod decision_maker;
mod entropy_calculator;
mod ranking_calculator;
mod weight_calculator;

pub use decision_maker::{DecisionMaker, DecisionOutcome};
pub use entropy_calculator::EntropyCalculator;
pub use ranking_calculator::{RankingCalculator, ScoreBreakdown};
pub use weight_calculator::WeightCalculator;
