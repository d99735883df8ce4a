//! Matrix Loader Port - Interface for reading decision matrices.
//!
//! Loaders only parse numbers; shape rules are enforced when the raw
//! matrix is converted into an `NfMatrix`.

use std::path::PathBuf;

use crate::domain::foundation::NfError;
use crate::domain::nfs::NfMatrix;

/// Errors that can occur while loading a matrix
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Data file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid data in {source_name}: {reason}")]
    InvalidData { source_name: String, reason: String },

    #[error("No rows found in {0}")]
    Empty(String),

    #[error("IO error: {0}")]
    IoError(String),

    #[error(transparent)]
    Matrix(#[from] NfError),
}

impl LoadError {
    /// Creates an invalid data error.
    pub fn invalid_data(source_name: impl Into<String>, reason: impl Into<String>) -> Self {
        LoadError::InvalidData {
            source_name: source_name.into(),
            reason: reason.into(),
        }
    }
}

/// Numbers as read from a source, before shape validation.
#[derive(Debug, Clone, PartialEq)]
pub enum RawMatrix {
    /// One criterion per row, `4 · o` numbers each.
    Flat(Vec<Vec<f64>>),
    /// Criteria × alternatives × 4.
    Nested(Vec<Vec<Vec<f64>>>),
}

impl RawMatrix {
    /// Number of criterion rows read.
    pub fn row_count(&self) -> usize {
        match self {
            RawMatrix::Flat(rows) => rows.len(),
            RawMatrix::Nested(groups) => groups.len(),
        }
    }

    /// Validates the shape and builds the decision matrix.
    pub fn into_matrix(self) -> Result<NfMatrix, NfError> {
        match self {
            RawMatrix::Flat(rows) => NfMatrix::from_flat_rows(&rows),
            RawMatrix::Nested(groups) => NfMatrix::from_nested(&groups),
        }
    }
}

/// Port for reading a raw decision matrix
pub trait MatrixLoader {
    /// Load the matrix
    ///
    /// # Errors
    /// Returns `LoadError::NotFound` if the source does not exist and
    /// `LoadError::InvalidData` if it holds non-numeric content
    fn load(&self) -> Result<RawMatrix, LoadError>;

    /// Load the matrix and convert it into an `NfMatrix`
    fn load_matrix(&self) -> Result<NfMatrix, LoadError> {
        Ok(self.load()?.into_matrix()?)
    }
}
