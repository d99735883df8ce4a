//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// What an out-of-range index was pointing into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexKind {
    /// Membership component selector (Mu, T, I, F).
    Component,
    /// Similarity formula selector.
    Measure,
    /// Criterion row of a matrix.
    Row,
}

impl fmt::Display for IndexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            IndexKind::Component => "component",
            IndexKind::Measure => "measure",
            IndexKind::Row => "row",
        };
        write!(f, "{}", s)
    }
}

/// Errors raised by NF-set construction and the scoring pipeline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NfError {
    #[error("Invalid data type: {received}. Expected: {expected}")]
    DataType { received: String, expected: String },

    #[error("Invalid {kind} index {index}. Expected a value in [0, {bound})")]
    InvalidIndex {
        kind: IndexKind,
        index: i64,
        bound: usize,
    },

    #[error("Input data is empty: {context}")]
    EmptyData { context: String },

    #[error("Shape mismatch: {left:?} vs {right:?}")]
    ShapeMismatch { left: Vec<usize>, right: Vec<usize> },

    #[error("Division by zero in {context}")]
    DivisionByZero { context: String },

    #[error("Normalization failed: {0}")]
    Normalization(String),

    #[error("NF-set computation failed: {0}")]
    NfComputation(String),

    #[error("Similarity computation failed: {0}")]
    SimilarityComputation(String),

    #[error("Weight computation failed: {0}")]
    WeightComputation(String),

    #[error("Numerical computation failed: {0}")]
    Calculation(String),

    #[error("Unknown similarity measure '{0}'")]
    UnknownMeasure(String),
}

impl NfError {
    /// Creates a data type error.
    pub fn data_type(received: impl Into<String>, expected: impl Into<String>) -> Self {
        NfError::DataType {
            received: received.into(),
            expected: expected.into(),
        }
    }

    /// Creates an invalid index error.
    pub fn invalid_index(kind: IndexKind, index: i64, bound: usize) -> Self {
        NfError::InvalidIndex { kind, index, bound }
    }

    /// Creates an empty data error.
    pub fn empty(context: impl Into<String>) -> Self {
        NfError::EmptyData {
            context: context.into(),
        }
    }

    /// Creates a shape mismatch error.
    pub fn shape_mismatch(left: Vec<usize>, right: Vec<usize>) -> Self {
        NfError::ShapeMismatch { left, right }
    }

    /// Creates a division by zero error.
    pub fn division_by_zero(context: impl Into<String>) -> Self {
        NfError::DivisionByZero {
            context: context.into(),
        }
    }

    /// Returns the stable error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            NfError::DataType { .. } => ErrorCode::DataType,
            NfError::InvalidIndex { .. } => ErrorCode::InvalidIndex,
            NfError::EmptyData { .. } => ErrorCode::EmptyData,
            NfError::ShapeMismatch { .. } => ErrorCode::ShapeMismatch,
            NfError::DivisionByZero { .. } => ErrorCode::DivisionByZero,
            NfError::Normalization(_) => ErrorCode::NormalizationFailed,
            NfError::NfComputation(_) => ErrorCode::NfComputationFailed,
            NfError::SimilarityComputation(_) => ErrorCode::SimilarityComputationFailed,
            NfError::WeightComputation(_) => ErrorCode::WeightComputationFailed,
            NfError::Calculation(_) => ErrorCode::CalculationFailed,
            NfError::UnknownMeasure(_) => ErrorCode::UnknownMeasure,
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Input errors
    DataType,
    InvalidIndex,
    EmptyData,
    ShapeMismatch,
    UnknownMeasure,

    // Arithmetic errors
    DivisionByZero,
    NormalizationFailed,

    // Stage failures
    NfComputationFailed,
    SimilarityComputationFailed,
    WeightComputationFailed,
    CalculationFailed,

    // Facade
    DecisionFailed,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::DataType => "DATA_TYPE",
            ErrorCode::InvalidIndex => "INVALID_INDEX",
            ErrorCode::EmptyData => "EMPTY_DATA",
            ErrorCode::ShapeMismatch => "SHAPE_MISMATCH",
            ErrorCode::UnknownMeasure => "UNKNOWN_MEASURE",
            ErrorCode::DivisionByZero => "DIVISION_BY_ZERO",
            ErrorCode::NormalizationFailed => "NORMALIZATION_FAILED",
            ErrorCode::NfComputationFailed => "NF_COMPUTATION_FAILED",
            ErrorCode::SimilarityComputationFailed => "SIMILARITY_COMPUTATION_FAILED",
            ErrorCode::WeightComputationFailed => "WEIGHT_COMPUTATION_FAILED",
            ErrorCode::CalculationFailed => "CALCULATION_FAILED",
            ErrorCode::DecisionFailed => "DECISION_FAILED",
        };
        write!(f, "{}", s)
    }
}

/// Single error surface of the decision facade.
///
/// Wraps whatever stage of the pipeline failed; the original error stays
/// reachable through [`DecisionError::cause`] and `Error::source`.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Decision-making failed: {source}")]
pub struct DecisionError {
    #[from]
    source: NfError,
}

impl DecisionError {
    /// Returns the pipeline error that caused the decision to fail.
    pub fn cause(&self) -> &NfError {
        &self.source
    }

    /// Always `DECISION_FAILED`; see [`DecisionError::cause`] for the root code.
    pub fn code(&self) -> ErrorCode {
        ErrorCode::DecisionFailed
    }
}
