//! NF-set model - validated containers for neutrosophic fuzzy data.
//!
//! # Components
//!
//! - `NfSet` - n x 4 set with subset, complement, intersection and union
//! - `NfMatrix` - criteria x alternatives x 4 decision matrix
//! - `Rnf` - decision matrix with cost criteria complemented

mod nf_matrix;
mod nf_set;
mod rnf;

pub use nf_matrix::NfMatrix;
pub use nf_set::NfSet;
pub use rnf::Rnf;
