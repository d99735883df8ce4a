//! File-based Matrix Loader Adapter
//!
//! Reads decision matrices from JSON, whitespace-separated text or CSV
//! files. The format is chosen by file extension.

use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::ports::{LoadError, MatrixLoader, RawMatrix};

/// Supported input formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Json,
    Txt,
    Csv,
}

impl DataFormat {
    /// Resolve the format from a file extension (case-insensitive)
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "json" => Ok(DataFormat::Json),
            "txt" => Ok(DataFormat::Txt),
            "csv" => Ok(DataFormat::Csv),
            "" => Err(LoadError::UnsupportedFormat(format!(
                "{} has no extension",
                path.display()
            ))),
            other => Err(LoadError::UnsupportedFormat(format!(".{}", other))),
        }
    }
}

/// File-based loader for decision matrices
#[derive(Debug, Clone)]
pub struct FileMatrixLoader {
    path: PathBuf,
}

impl FileMatrixLoader {
    /// Create a loader for a single data file
    ///
    /// # Example
    /// ```ignore
    /// let loader = FileMatrixLoader::new("./data/matrix.csv");
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn source_name(&self) -> String {
        self.path.display().to_string()
    }

    fn parse_json(&self, content: &str) -> Result<RawMatrix, LoadError> {
        let value: Value = serde_json::from_str(content)
            .map_err(|e| LoadError::invalid_data(self.source_name(), e.to_string()))?;

        let rows = match &value {
            Value::Array(rows) => rows,
            _ => {
                return Err(LoadError::invalid_data(
                    self.source_name(),
                    "top-level value must be an array",
                ))
            }
        };
        if rows.is_empty() {
            return Err(LoadError::Empty(self.source_name()));
        }

        // Depth of the first row decides between n x 4 and c x o x 4
        let nested = matches!(
            rows.first(),
            Some(Value::Array(cells)) if matches!(cells.first(), Some(Value::Array(_)))
        );

        if nested {
            serde_json::from_value(value)
                .map(RawMatrix::Nested)
                .map_err(|e| LoadError::invalid_data(self.source_name(), e.to_string()))
        } else {
            serde_json::from_value(value)
                .map(RawMatrix::Flat)
                .map_err(|e| LoadError::invalid_data(self.source_name(), e.to_string()))
        }
    }

    fn parse_delimited(
        &self,
        content: &str,
        skip_header: bool,
        split: fn(&str) -> Vec<&str>,
    ) -> Result<RawMatrix, LoadError> {
        let mut rows = Vec::new();

        for (line_no, line) in content.lines().enumerate().skip(usize::from(skip_header)) {
            if line.trim().is_empty() {
                continue;
            }
            let row = split(line)
                .into_iter()
                .map(|token| {
                    token.trim().parse::<f64>().map_err(|_| {
                        LoadError::invalid_data(
                            self.source_name(),
                            format!("line {}: '{}' is not a number", line_no + 1, token.trim()),
                        )
                    })
                })
                .collect::<Result<Vec<f64>, _>>()?;
            rows.push(row);
        }

        if rows.is_empty() {
            return Err(LoadError::Empty(self.source_name()));
        }
        Ok(RawMatrix::Flat(rows))
    }
}

fn split_whitespace(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

fn split_comma(line: &str) -> Vec<&str> {
    line.split(',').collect()
}

impl MatrixLoader for FileMatrixLoader {
    fn load(&self) -> Result<RawMatrix, LoadError> {
        let format = DataFormat::from_path(&self.path)?;

        if !self.path.exists() {
            return Err(LoadError::NotFound(self.path.clone()));
        }

        let content =
            fs::read_to_string(&self.path).map_err(|e| LoadError::IoError(e.to_string()))?;

        let raw = match format {
            DataFormat::Json => self.parse_json(&content)?,
            DataFormat::Txt => self.parse_delimited(&content, false, split_whitespace)?,
            DataFormat::Csv => self.parse_delimited(&content, true, split_comma)?,
        };

        debug!(
            path = %self.path.display(),
            format = ?format,
            rows = raw.row_count(),
            "Loaded raw matrix"
        );

        Ok(raw)
    }
}
