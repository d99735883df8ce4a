//! Domain layer containing the decision model and its calculations.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (membership vectors, components, errors)
//! - `nfs` - NF-sets, decision matrices and the refined (cost-adjusted) matrix
//! - `measures` - The nine similarity formulas and the measure registry
//! - `analysis` - Pure domain services for entropy, weights, scores and ranking

pub mod analysis;
pub mod foundation;
pub mod measures;
pub mod nfs;
