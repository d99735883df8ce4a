//! NfMatrix - criteria x alternatives x 4 decision matrix.

use serde::{Deserialize, Serialize};

use super::NfSet;
use crate::domain::foundation::{Membership, NfError};

/// A rectangular decision matrix: one [`NfSet`] per criterion row, each
/// holding the same number of alternatives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<NfSet>", into = "Vec<NfSet>")]
pub struct NfMatrix {
    criteria: Vec<NfSet>,
}

impl NfMatrix {
    /// Creates a matrix from criterion rows.
    ///
    /// # Errors
    /// - `EmptyData` if there are no criteria
    /// - `ShapeMismatch` if rows hold different numbers of alternatives
    pub fn new(criteria: Vec<NfSet>) -> Result<Self, NfError> {
        let first = criteria
            .first()
            .ok_or_else(|| NfError::empty("decision matrix requires at least one criterion"))?;

        if let Some(ragged) = criteria.iter().find(|row| row.len() != first.len()) {
            return Err(NfError::shape_mismatch(first.shape(), ragged.shape()));
        }

        Ok(Self { criteria })
    }

    /// Creates a matrix from nested `[criterion][alternative][degree]` data.
    pub fn from_nested<G, R>(groups: &[G]) -> Result<Self, NfError>
    where
        G: AsRef<[R]>,
        R: AsRef<[f64]>,
    {
        let criteria = groups
            .iter()
            .map(|group| NfSet::from_rows(group.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(criteria)
    }

    /// Creates a matrix from flat rows of `4 * alternatives` numbers each.
    pub fn from_flat_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, NfError> {
        let criteria = rows
            .iter()
            .map(|row| {
                let row = row.as_ref();
                if row.is_empty() || row.len() % 4 != 0 {
                    return Err(NfError::data_type(
                        format!("row of {} values", row.len()),
                        "a non-zero multiple of 4 values",
                    ));
                }
                NfSet::from_rows(&row.chunks(4).collect::<Vec<_>>())
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(criteria)
    }

    /// Treats every element of a plain set as its own single-alternative
    /// criterion row.
    pub fn from_set(set: &NfSet) -> Self {
        let criteria = set.iter().map(|m| NfSet::singleton(*m)).collect();
        Self { criteria }
    }

    pub(crate) fn from_validated(criteria: Vec<NfSet>) -> Self {
        Self { criteria }
    }

    /// Number of criterion rows.
    pub fn criteria_count(&self) -> usize {
        self.criteria.len()
    }

    /// Number of alternatives per criterion row.
    pub fn alternative_count(&self) -> usize {
        self.criteria.first().map(NfSet::len).unwrap_or(0)
    }

    /// Returns `[criteria, alternatives, 4]`.
    pub fn shape(&self) -> Vec<usize> {
        vec![self.criteria_count(), self.alternative_count(), 4]
    }

    pub fn criteria(&self) -> &[NfSet] {
        &self.criteria
    }

    pub fn criterion(&self, index: usize) -> Option<&NfSet> {
        self.criteria.get(index)
    }

    /// Element at criterion row `criterion`, alternative column `alternative`.
    pub fn cell(&self, criterion: usize, alternative: usize) -> Option<&Membership> {
        self.criteria.get(criterion)?.get(alternative)
    }

    /// All criterion values of one alternative column.
    pub fn alternative(&self, alternative: usize) -> Vec<Membership> {
        self.criteria
            .iter()
            .filter_map(|row| row.get(alternative).copied())
            .collect()
    }
}

impl TryFrom<Vec<NfSet>> for NfMatrix {
    type Error = NfError;

    fn try_from(criteria: Vec<NfSet>) -> Result<Self, Self::Error> {
        Self::new(criteria)
    }
}

impl From<NfMatrix> for Vec<NfSet> {
    fn from(matrix: NfMatrix) -> Self {
        matrix.criteria
    }
}
