//! Similarity measures between NF-elements.
//!
//! Nine fixed formulas, each a pure function of two membership vectors.
//! `compute_similarity` evaluates all of them in declaration order; the
//! `MeasureRegistry` narrows that to a named subset.

mod registry;
mod similarity;

pub use registry::MeasureRegistry;
pub use similarity::{compute_similarity, Measure, SimilarityVector};
