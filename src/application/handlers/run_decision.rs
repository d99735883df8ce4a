//! RunDecisionHandler - Command handler for a full decision run.
//!
//! Loads the matrix through the `MatrixLoader` port, refines it with the
//! cost criteria and evaluates every requested measure.

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::domain::analysis::{DecisionMaker, DecisionOutcome};
use crate::domain::foundation::{DecisionError, NfError};
use crate::domain::measures::MeasureRegistry;
use crate::domain::nfs::Rnf;
use crate::ports::{LoadError, MatrixLoader};

/// Command to rank the alternatives of one decision matrix.
#[derive(Debug, Clone)]
pub struct RunDecisionCommand {
    /// Formulas to evaluate, in registry order.
    pub measures: MeasureRegistry,
    /// Cost criterion rows, as configured (may be negative or duplicated).
    pub cost: Vec<i64>,
}

/// Result of a successful run.
#[derive(Debug, Clone, Serialize)]
pub struct RunDecisionResult {
    pub criteria: usize,
    pub alternatives: usize,
    /// One outcome per requested measure.
    pub outcomes: Vec<DecisionOutcome>,
}

/// Errors that can occur during a decision run.
#[derive(Debug, Error)]
pub enum RunDecisionError {
    #[error("Failed to load decision matrix: {0}")]
    Load(#[from] LoadError),

    #[error("Failed to refine decision matrix: {0}")]
    Refine(#[from] NfError),

    #[error(transparent)]
    Decision(#[from] DecisionError),
}

/// Handler for running decisions.
pub struct RunDecisionHandler {
    loader: Arc<dyn MatrixLoader>,
}

impl RunDecisionHandler {
    pub fn new(loader: Arc<dyn MatrixLoader>) -> Self {
        Self { loader }
    }

    pub fn handle(&self, cmd: RunDecisionCommand) -> Result<RunDecisionResult, RunDecisionError> {
        let matrix = self.loader.load_matrix()?;
        let rnf = Rnf::from_raw_costs(&matrix, &cmd.cost)?;

        debug!(
            criteria = rnf.criteria_count(),
            alternatives = rnf.alternative_count(),
            measures = cmd.measures.len(),
            "Running decision"
        );

        let outcomes = cmd
            .measures
            .measures()
            .iter()
            .map(|measure| DecisionMaker::for_measure(&rnf, *measure).evaluate())
            .collect::<Result<Vec<_>, _>>()?;

        info!(measures = outcomes.len(), "Decision run complete");

        Ok(RunDecisionResult {
            criteria: rnf.criteria_count(),
            alternatives: rnf.alternative_count(),
            outcomes,
        })
    }
}
