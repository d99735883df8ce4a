//! Component enum naming the four membership degrees.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{IndexKind, NfError};

/// One of the four membership degrees of an NF-element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Component {
    Mu,
    T,
    I,
    F,
}

impl Component {
    /// Returns all components in canonical (Mu, T, I, F) order.
    pub fn all() -> &'static [Component] {
        &[Component::Mu, Component::T, Component::I, Component::F]
    }

    /// Resolves a 0-based component index.
    pub fn from_index(index: i64) -> Result<Self, NfError> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::all().get(i).copied())
            .ok_or_else(|| NfError::invalid_index(IndexKind::Component, index, Self::all().len()))
    }

    /// Returns the 0-based index of this component.
    pub fn index(&self) -> usize {
        match self {
            Component::Mu => 0,
            Component::T => 1,
            Component::I => 2,
            Component::F => 3,
        }
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Component::Mu => "Mu",
            Component::T => "T",
            Component::I => "I",
            Component::F => "F",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
