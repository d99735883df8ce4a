//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `matrix` - Decision matrix sources (files, seeded samples)

pub mod matrix;

pub use matrix::{DataFormat, FileMatrixLoader, SampleMatrixLoader};
