//! Matrix Adapters
//!
//! Implementations of the MatrixLoader port.
//!
//! ## Available Adapters
//!
//! - **FileMatrixLoader** - Reads `.json`, `.txt` and `.csv` files
//! - **SampleMatrixLoader** - Generates a seeded sample matrix (demos/testing)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::matrix::{FileMatrixLoader, SampleMatrixLoader};
//!
//! // Production: file-based data
//! let loader = FileMatrixLoader::new("./data/matrix.csv");
//!
//! // Demo: 5 criteria x 4 alternatives
//! let loader = SampleMatrixLoader::new(5, 4, 7);
//! ```

mod file_matrix_loader;
mod sample_matrix_loader;

pub use file_matrix_loader::{DataFormat, FileMatrixLoader};
pub use sample_matrix_loader::SampleMatrixLoader;
