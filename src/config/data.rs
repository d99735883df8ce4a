//! Data source configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where the decision matrix comes from
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// Data file (`.json`, `.txt` or `.csv`); a seeded sample is used when unset
    pub path: Option<PathBuf>,

    /// Alternatives per criterion in the generated sample
    #[serde(default = "default_sample_alternatives")]
    pub sample_alternatives: usize,

    /// Criteria in the generated sample
    #[serde(default = "default_sample_criteria")]
    pub sample_criteria: usize,

    /// Seed of the generated sample
    #[serde(default = "default_sample_seed")]
    pub sample_seed: u64,
}

impl DataConfig {
    /// Validate data configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.sample_alternatives == 0 {
            return Err(ValidationError::EmptySampleDimension("sample_alternatives"));
        }
        if self.sample_criteria == 0 {
            return Err(ValidationError::EmptySampleDimension("sample_criteria"));
        }
        Ok(())
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: None,
            sample_alternatives: default_sample_alternatives(),
            sample_criteria: default_sample_criteria(),
            sample_seed: default_sample_seed(),
        }
    }
}

fn default_sample_alternatives() -> usize {
    4
}

fn default_sample_criteria() -> usize {
    5
}

fn default_sample_seed() -> u64 {
    7
}
