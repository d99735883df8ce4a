//! Rnf - refined decision matrix with cost criteria complemented.

use serde::Serialize;
use std::collections::BTreeSet;
use tracing::debug;

use super::{NfMatrix, NfSet};
use crate::domain::foundation::{IndexKind, Membership, NfError};

/// Decision matrix with every "cost" criterion row replaced by `1 - x`, so
/// that all criteria point in the benefit direction.
///
/// Owns its derived data; the source matrix is never modified.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rnf {
    data: NfMatrix,
    cost: Vec<usize>,
}

impl Rnf {
    /// Refines `source`, complementing the rows listed in `cost`.
    ///
    /// Duplicate indices are applied once. Every index is validated before
    /// any row is touched.
    ///
    /// # Errors
    /// - `InvalidIndex` if an index is outside `[0, criteria)`
    /// - `NfComputation` if negation yields non-finite values
    pub fn new(source: &NfMatrix, cost: &[usize]) -> Result<Self, NfError> {
        let rows = source.criteria_count();
        let cost: BTreeSet<usize> = cost.iter().copied().collect();

        if let Some(&bad) = cost.iter().find(|&&i| i >= rows) {
            return Err(NfError::invalid_index(IndexKind::Row, bad as i64, rows));
        }

        if cost.is_empty() {
            return Ok(Self {
                data: source.clone(),
                cost: Vec::new(),
            });
        }

        let criteria = source
            .criteria()
            .iter()
            .enumerate()
            .map(|(index, row)| {
                if cost.contains(&index) {
                    let negated = row.iter().map(|m| Self::negate(*m)).collect();
                    NfSet::derived(negated, "cost criterion negation")
                } else {
                    Ok(row.clone())
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            criteria = rows,
            cost_rows = cost.len(),
            "Refined decision matrix"
        );

        Ok(Self {
            data: NfMatrix::from_validated(criteria),
            cost: cost.into_iter().collect(),
        })
    }

    /// Like [`Rnf::new`] but accepts signed indices as they arrive from
    /// loaders and configuration; negative indices are `InvalidIndex`.
    pub fn from_raw_costs(source: &NfMatrix, cost: &[i64]) -> Result<Self, NfError> {
        let rows = source.criteria_count();
        let cost = cost
            .iter()
            .map(|&i| {
                usize::try_from(i).map_err(|_| NfError::invalid_index(IndexKind::Row, i, rows))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(source, &cost)
    }

    /// Refines a plain n x 4 set, where each element is one criterion row.
    pub fn from_set(set: &NfSet, cost: &[usize]) -> Result<Self, NfError> {
        Self::new(&NfMatrix::from_set(set), cost)
    }

    /// Complement of a single NF-element: `1 - x` elementwise.
    pub fn negate(vector: Membership) -> Membership {
        vector.negate()
    }

    /// Complement of an untyped vector; `DataType` unless it holds exactly
    /// four finite numbers.
    pub fn negate_values(values: &[f64]) -> Result<Membership, NfError> {
        Membership::try_from_slice(values).map(Self::negate)
    }

    /// The refined matrix consumed by the scoring pipeline.
    pub fn data(&self) -> &NfMatrix {
        &self.data
    }

    /// Cost rows that were complemented, ascending.
    pub fn cost(&self) -> &[usize] {
        &self.cost
    }

    pub fn criteria_count(&self) -> usize {
        self.data.criteria_count()
    }

    pub fn alternative_count(&self) -> usize {
        self.data.alternative_count()
    }
}
