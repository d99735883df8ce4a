//! Measure registry - selection of similarity formulas by identifier.

use serde::Serialize;

use super::Measure;
use crate::domain::foundation::NfError;

/// An ordered selection of similarity formulas.
///
/// Always kept in declaration order, whatever order the selection was
/// requested in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MeasureRegistry {
    measures: Vec<Measure>,
}

impl MeasureRegistry {
    /// All nine formulas.
    pub fn all() -> Self {
        Self {
            measures: Measure::all().to_vec(),
        }
    }

    /// Selects formulas by identifier (`Similarity1` .. `Similarity9`).
    ///
    /// An empty selection yields all nine formulas. Duplicates collapse.
    ///
    /// # Errors
    /// `UnknownMeasure` for any identifier that names no formula.
    pub fn select<S: AsRef<str>>(names: &[S]) -> Result<Self, NfError> {
        if names.is_empty() {
            return Ok(Self::all());
        }

        let requested = names
            .iter()
            .map(|name| name.as_ref().parse::<Measure>())
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::from_measures(&requested))
    }

    /// Builds a registry from typed formulas.
    pub fn from_measures(requested: &[Measure]) -> Self {
        let measures = Measure::all()
            .iter()
            .filter(|m| requested.contains(m))
            .copied()
            .collect();
        Self { measures }
    }

    pub fn measures(&self) -> &[Measure] {
        &self.measures
    }

    pub fn len(&self) -> usize {
        self.measures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.measures.is_empty()
    }
}

impl Default for MeasureRegistry {
    fn default() -> Self {
        Self::all()
    }
}
