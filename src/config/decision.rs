//! Decision configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::foundation::{Component, NfError};
use crate::domain::measures::{Measure, MeasureRegistry};

/// Which measures to run and how to refine the matrix
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DecisionConfig {
    /// Measure identifiers (comma-separated, empty means all nine)
    pub measures: Option<String>,

    /// Membership component index; when set, only its formula is run
    pub component: Option<i64>,

    /// Cost criterion row indices (comma-separated)
    pub cost: Option<String>,
}

impl DecisionConfig {
    /// Get measure identifiers as a vector
    pub fn measures_list(&self) -> Vec<String> {
        split_list(self.measures.as_deref())
    }

    /// Resolve the measures to run
    ///
    /// A configured component takes precedence over the measure list.
    pub fn registry(&self) -> Result<MeasureRegistry, ValidationError> {
        if let Some(index) = self.component {
            let component =
                Component::from_index(index).map_err(|_| ValidationError::InvalidComponent(index))?;
            return Ok(MeasureRegistry::from_measures(&[Measure::for_component(
                component,
            )]));
        }

        MeasureRegistry::select(&self.measures_list()).map_err(|e| match e {
            NfError::UnknownMeasure(name) => ValidationError::UnknownMeasure(name),
            other => ValidationError::UnknownMeasure(other.to_string()),
        })
    }

    /// Parse the cost row indices
    ///
    /// Range checks against the matrix happen when the refined matrix is
    /// built, since the row count is unknown here.
    pub fn cost_indices(&self) -> Result<Vec<i64>, ValidationError> {
        split_list(self.cost.as_deref())
            .iter()
            .map(|token| {
                token
                    .parse::<i64>()
                    .map_err(|_| ValidationError::InvalidCostIndex(token.clone()))
            })
            .collect()
    }

    /// Validate decision configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.registry()?;
        self.cost_indices()?;
        Ok(())
    }
}

fn split_list(value: Option<&str>) -> Vec<String> {
    value
        .map(|s| {
            s.split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        })
        .unwrap_or_default()
}
