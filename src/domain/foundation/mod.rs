//! Foundation module - Shared domain primitives.
//!
//! Contains the membership value object, the component selector and the
//! error types that form the vocabulary of the NF decision domain.

mod component;
mod errors;
mod membership;

pub use component::Component;
pub use errors::{DecisionError, ErrorCode, IndexKind, NfError};
pub use membership::Membership;
