//! Membership value object: one (Mu, T, I, F) NF-element.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Component, NfError};

/// Four membership degrees of a single NF-element.
///
/// Degrees are conceptually in [0, 1] but the range is not enforced; only
/// finiteness is checked when building from untyped input.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct Membership {
    pub mu: f64,
    pub t: f64,
    pub i: f64,
    pub f: f64,
}

impl Membership {
    /// Best possible membership pattern.
    pub const POSITIVE_IDEAL: Self = Self::new(1.0, 1.0, 0.0, 0.0);

    /// Worst possible membership pattern.
    pub const NEGATIVE_IDEAL: Self = Self::new(0.0, 0.0, 1.0, 1.0);

    /// Creates a membership from its four degrees.
    pub const fn new(mu: f64, t: f64, i: f64, f: f64) -> Self {
        Self { mu, t, i, f }
    }

    /// Builds a membership from an untyped row, rejecting wrong widths and
    /// non-finite values.
    pub fn try_from_slice(values: &[f64]) -> Result<Self, NfError> {
        if values.len() != 4 {
            return Err(NfError::data_type(
                format!("row of {} values", values.len()),
                "4 membership degrees (Mu, T, I, F)",
            ));
        }
        if let Some(bad) = values.iter().find(|v| !v.is_finite()) {
            return Err(NfError::data_type(
                format!("non-numeric value {}", bad),
                "finite membership degree",
            ));
        }
        Ok(Self::new(values[0], values[1], values[2], values[3]))
    }

    /// Returns the degrees in (Mu, T, I, F) order.
    pub fn to_array(self) -> [f64; 4] {
        [self.mu, self.t, self.i, self.f]
    }

    /// Returns one degree.
    pub fn get(&self, component: Component) -> f64 {
        match component {
            Component::Mu => self.mu,
            Component::T => self.t,
            Component::I => self.i,
            Component::F => self.f,
        }
    }

    /// Elementwise `1 - x`.
    pub fn negate(self) -> Self {
        Self::new(1.0 - self.mu, 1.0 - self.t, 1.0 - self.i, 1.0 - self.f)
    }

    /// NF complement: (Mu, T, I, F) -> (1 - Mu, F, 1 - I, T).
    pub fn complement(self) -> Self {
        Self::new(1.0 - self.mu, self.f, 1.0 - self.i, self.t)
    }

    /// Signed elementwise difference `self - other`.
    pub fn delta(self, other: Self) -> [f64; 4] {
        [
            self.mu - other.mu,
            self.t - other.t,
            self.i - other.i,
            self.f - other.f,
        ]
    }

    /// Returns true if every degree is finite.
    pub fn is_finite(&self) -> bool {
        self.to_array().iter().all(|v| v.is_finite())
    }
}

impl From<[f64; 4]> for Membership {
    fn from(values: [f64; 4]) -> Self {
        Self::new(values[0], values[1], values[2], values[3])
    }
}

impl From<Membership> for [f64; 4] {
    fn from(m: Membership) -> Self {
        m.to_array()
    }
}

impl fmt::Display for Membership {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.mu, self.t, self.i, self.f)
    }
}
