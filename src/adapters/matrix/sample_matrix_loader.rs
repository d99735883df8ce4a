//! Sample Matrix Loader Adapter
//!
//! Generates a reproducible criteria x alternatives x 4 matrix for demos
//! and tests. Every degree is one of 0.1, 0.2, ..., 0.9.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::ports::{LoadError, MatrixLoader, RawMatrix};

/// Seeded generator standing in for a data file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleMatrixLoader {
    criteria: usize,
    alternatives: usize,
    seed: u64,
}

impl SampleMatrixLoader {
    pub fn new(criteria: usize, alternatives: usize, seed: u64) -> Self {
        Self {
            criteria,
            alternatives,
            seed,
        }
    }
}

impl MatrixLoader for SampleMatrixLoader {
    fn load(&self) -> Result<RawMatrix, LoadError> {
        if self.criteria == 0 || self.alternatives == 0 {
            return Err(LoadError::Empty(format!(
                "sample of {} criteria x {} alternatives",
                self.criteria, self.alternatives
            )));
        }

        let mut rng = StdRng::seed_from_u64(self.seed);
        let groups: Vec<Vec<Vec<f64>>> = (0..self.criteria)
            .map(|_| {
                (0..self.alternatives)
                    .map(|_| {
                        (0..4)
                            .map(|_| f64::from(rng.gen_range(1u8..=9)) / 10.0)
                            .collect()
                    })
                    .collect()
            })
            .collect();

        Ok(RawMatrix::Nested(groups))
    }
}
