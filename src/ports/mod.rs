//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `MatrixLoader` - Reads a raw decision matrix from some source

mod matrix_loader;

pub use matrix_loader::{LoadError, MatrixLoader, RawMatrix};
