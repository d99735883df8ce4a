//! Command handlers.

mod run_decision;

pub use run_decision::{
    RunDecisionCommand, RunDecisionError, RunDecisionHandler, RunDecisionResult,
};
