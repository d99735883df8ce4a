//! The nine similarity formulas between two NF-elements.

use serde::{Deserialize, Serialize};
use std::f64::consts::{E, PI, SQRT_2};
use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use crate::domain::foundation::{Component, IndexKind, Membership, NfError};

/// One of the nine similarity formulas, in declaration order.
///
/// Formula 1 works on the signed difference `a - b`; formulas 2 to 9 only
/// depend on `S = Σ|a - b|`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Measure {
    Similarity1,
    Similarity2,
    Similarity3,
    Similarity4,
    Similarity5,
    Similarity6,
    Similarity7,
    Similarity8,
    Similarity9,
}

impl Measure {
    /// Number of built-in formulas.
    pub const COUNT: usize = 9;

    /// Returns all formulas in declaration order.
    pub fn all() -> &'static [Measure] {
        &[
            Measure::Similarity1,
            Measure::Similarity2,
            Measure::Similarity3,
            Measure::Similarity4,
            Measure::Similarity5,
            Measure::Similarity6,
            Measure::Similarity7,
            Measure::Similarity8,
            Measure::Similarity9,
        ]
    }

    /// Resolves a 0-based formula index (0 = `Similarity1`).
    pub fn from_index(index: i64) -> Result<Self, NfError> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::all().get(i).copied())
            .ok_or_else(|| NfError::invalid_index(IndexKind::Measure, index, Self::COUNT))
    }

    /// The formula at the same position as a membership component.
    ///
    /// Component k selects formula k + 1, so only `Similarity1` to
    /// `Similarity4` are reachable this way.
    pub fn for_component(component: Component) -> Self {
        Self::all()[component.index()]
    }

    /// Returns the 0-based position in declaration order.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Returns the registry identifier, e.g. `Similarity3`.
    pub fn name(&self) -> &'static str {
        match self {
            Measure::Similarity1 => "Similarity1",
            Measure::Similarity2 => "Similarity2",
            Measure::Similarity3 => "Similarity3",
            Measure::Similarity4 => "Similarity4",
            Measure::Similarity5 => "Similarity5",
            Measure::Similarity6 => "Similarity6",
            Measure::Similarity7 => "Similarity7",
            Measure::Similarity8 => "Similarity8",
            Measure::Similarity9 => "Similarity9",
        }
    }

    /// Evaluates the formula for the pair `(a, b)`.
    pub fn compute(&self, a: Membership, b: Membership) -> f64 {
        let delta = a.delta(b);
        let s: f64 = delta.iter().map(|d| d.abs()).sum();

        match self {
            Measure::Similarity1 => {
                let t: f64 = delta.iter().map(|d| (d * PI / 4.0).cos()).sum();
                (SQRT_2 + 1.0) / 4.0 * (SQRT_2 * t - 4.0)
            }
            Measure::Similarity2 => 1.0 - s / 4.0,
            Measure::Similarity3 => (2.0 - s / 4.0).log2(),
            Measure::Similarity4 => 1.0 - (1.0 + s / 4.0).log2(),
            Measure::Similarity5 => ((-s / 4.0).exp() - E.recip()) / (1.0 - E.recip()),
            Measure::Similarity6 => 1.0 - (s * PI / 8.0).sin(),
            Measure::Similarity7 => (s * PI / 8.0).cos(),
            Measure::Similarity8 => 1.0 - (s * PI / 16.0).tan(),
            Measure::Similarity9 => cot(PI / 4.0 + s * PI / 16.0),
        }
    }

    /// Like [`Measure::compute`] but rejects non-finite results.
    pub fn try_compute(&self, a: Membership, b: Membership) -> Result<f64, NfError> {
        let value = self.compute(a, b);
        if !value.is_finite() {
            return Err(NfError::SimilarityComputation(format!(
                "{} of {} and {} is {}",
                self, a, b, value
            )));
        }
        Ok(value)
    }
}

fn cot(x: f64) -> f64 {
    1.0 / x.tan()
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Measure {
    type Err = NfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::all()
            .iter()
            .find(|m| m.name().eq_ignore_ascii_case(name))
            .copied()
            .ok_or_else(|| NfError::UnknownMeasure(s.to_string()))
    }
}

/// All nine similarity values of one pair, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SimilarityVector([f64; Measure::COUNT]);

impl SimilarityVector {
    pub fn get(&self, measure: Measure) -> f64 {
        self.0[measure.index()]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Pairs every value with its formula.
    pub fn iter(&self) -> impl Iterator<Item = (Measure, f64)> + '_ {
        Measure::all().iter().copied().zip(self.0.iter().copied())
    }
}

impl Index<Measure> for SimilarityVector {
    type Output = f64;

    fn index(&self, measure: Measure) -> &f64 {
        &self.0[measure.index()]
    }
}

/// Evaluates all nine formulas for `(a, b)` in declaration order.
pub fn compute_similarity(a: Membership, b: Membership) -> SimilarityVector {
    let mut values = [0.0; Measure::COUNT];
    for (slot, measure) in values.iter_mut().zip(Measure::all()) {
        *slot = measure.compute(a, b);
    }
    SimilarityVector(values)
}
