//! NfSet - an n x 4 neutrosophic fuzzy set with its logical operations.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Membership, NfError};

/// A validated, immutable list of NF-elements.
///
/// Serializes as a list of `[Mu, T, I, F]` arrays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Membership>", into = "Vec<Membership>")]
pub struct NfSet {
    elements: Vec<Membership>,
}

impl NfSet {
    /// Creates a set from typed elements.
    ///
    /// # Errors
    /// - `EmptyData` if `elements` is empty
    /// - `DataType` if any degree is not finite
    pub fn new(elements: Vec<Membership>) -> Result<Self, NfError> {
        if elements.is_empty() {
            return Err(NfError::empty("NF-set requires at least one element"));
        }
        if let Some(bad) = elements.iter().find(|m| !m.is_finite()) {
            return Err(NfError::data_type(
                format!("non-numeric element {}", bad),
                "finite membership degrees",
            ));
        }
        Ok(Self { elements })
    }

    /// Creates a set from untyped rows, each of which must hold 4 numbers.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, NfError> {
        if rows.is_empty() {
            return Err(NfError::empty("NF-set requires at least one row"));
        }
        let elements = rows
            .iter()
            .map(|row| Membership::try_from_slice(row.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(elements)
    }

    /// Wraps the result of a derived operation, mapping non-finite output to
    /// `NfComputation`.
    pub(crate) fn derived(elements: Vec<Membership>, operation: &str) -> Result<Self, NfError> {
        if elements.iter().any(|m| !m.is_finite()) {
            return Err(NfError::NfComputation(format!(
                "{} produced non-finite membership degrees",
                operation
            )));
        }
        Ok(Self { elements })
    }

    pub(crate) fn singleton(element: Membership) -> Self {
        Self {
            elements: vec![element],
        }
    }

    /// Returns the number of elements (rows).
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Always false: an NfSet holds at least one element.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns `[rows, 4]`.
    pub fn shape(&self) -> Vec<usize> {
        vec![self.elements.len(), 4]
    }

    pub fn elements(&self) -> &[Membership] {
        &self.elements
    }

    pub fn get(&self, index: usize) -> Option<&Membership> {
        self.elements.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Membership> {
        self.elements.iter()
    }

    /// Returns the elements as plain `[Mu, T, I, F]` rows.
    pub fn to_rows(&self) -> Vec<[f64; 4]> {
        self.elements.iter().map(|m| m.to_array()).collect()
    }

    fn ensure_same_shape(&self, other: &NfSet) -> Result<(), NfError> {
        if self.len() != other.len() {
            return Err(NfError::shape_mismatch(self.shape(), other.shape()));
        }
        Ok(())
    }

    /// Checks whether this set is contained in `other`.
    ///
    /// True iff for every row: Mu and T are not greater than `other`'s, and
    /// I and F are not smaller.
    pub fn is_subset(&self, other: &NfSet) -> Result<bool, NfError> {
        self.ensure_same_shape(other)?;

        Ok(self.elements.iter().zip(&other.elements).all(|(a, b)| {
            a.mu <= b.mu && a.t <= b.t && a.i >= b.i && a.f >= b.f
        }))
    }

    /// Row-wise complement (Mu, T, I, F) -> (1 - Mu, F, 1 - I, T).
    pub fn complement(&self) -> Result<NfSet, NfError> {
        let elements = self.elements.iter().map(|m| m.complement()).collect();
        Self::derived(elements, "complement")
    }

    /// Min over (Mu, T), max over (I, F).
    pub fn intersection(&self, other: &NfSet) -> Result<NfSet, NfError> {
        self.ensure_same_shape(other)?;

        let elements = self
            .elements
            .iter()
            .zip(&other.elements)
            .map(|(a, b)| {
                Membership::new(a.mu.min(b.mu), a.t.min(b.t), a.i.max(b.i), a.f.max(b.f))
            })
            .collect();
        Self::derived(elements, "intersection")
    }

    /// Max over (Mu, T), min over (I, F).
    pub fn union(&self, other: &NfSet) -> Result<NfSet, NfError> {
        self.ensure_same_shape(other)?;

        let elements = self
            .elements
            .iter()
            .zip(&other.elements)
            .map(|(a, b)| {
                Membership::new(a.mu.max(b.mu), a.t.max(b.t), a.i.min(b.i), a.f.min(b.f))
            })
            .collect();
        Self::derived(elements, "union")
    }
}

impl TryFrom<Vec<Membership>> for NfSet {
    type Error = NfError;

    fn try_from(elements: Vec<Membership>) -> Result<Self, Self::Error> {
        Self::new(elements)
    }
}

impl From<NfSet> for Vec<Membership> {
    fn from(set: NfSet) -> Self {
        set.elements
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(rows: &[[f64; 4]]) -> NfSet {
        NfSet::from_rows(rows).unwrap()
    }

    fn assert_close(a: &NfSet, b: &NfSet) {
        for (x, y) in a.to_rows().iter().zip(b.to_rows()) {
            for k in 0..4 {
                assert!((x[k] - y[k]).abs() < 1e-12, "{:?} != {:?}", x, y);
            }
        }
    }

    // Construction

    #[test]
    fn from_rows_rejects_empty_input() {
        let rows: Vec<Vec<f64>> = vec![];
        assert!(matches!(
            NfSet::from_rows(&rows),
            Err(NfError::EmptyData { .. })
        ));
    }

    #[test]
    fn from_rows_rejects_wrong_width() {
        let rows = vec![vec![0.1, 0.2, 0.3, 0.4], vec![0.1, 0.2]];
        assert!(matches!(
            NfSet::from_rows(&rows),
            Err(NfError::DataType { .. })
        ));
    }

    #[test]
    fn from_rows_rejects_infinite_values() {
        let rows = vec![vec![0.1, f64::INFINITY, 0.3, 0.4]];
        assert!(matches!(
            NfSet::from_rows(&rows),
            Err(NfError::DataType { .. })
        ));
    }

    #[test]
    fn shape_reports_rows_by_four() {
        let s = set(&[[0.1, 0.2, 0.3, 0.4], [0.5, 0.6, 0.7, 0.8]]);
        assert_eq!(s.shape(), vec![2, 4]);
        assert_eq!(s.len(), 2);
    }

    // Subset

    #[test]
    fn is_subset_true_when_dominated_on_every_row() {
        let a = set(&[[0.2, 0.3, 0.6, 0.7], [0.1, 0.1, 0.9, 0.9]]);
        let b = set(&[[0.5, 0.4, 0.5, 0.5], [0.1, 0.2, 0.8, 0.8]]);
        assert!(a.is_subset(&b).unwrap());
        assert!(!b.is_subset(&a).unwrap());
    }

    #[test]
    fn is_subset_false_when_one_row_violates() {
        let a = set(&[[0.2, 0.3, 0.6, 0.7], [0.3, 0.1, 0.9, 0.9]]);
        let b = set(&[[0.5, 0.4, 0.5, 0.5], [0.1, 0.2, 0.8, 0.8]]);
        assert!(!a.is_subset(&b).unwrap());
    }

    #[test]
    fn is_subset_is_reflexive() {
        let a = set(&[[0.2, 0.3, 0.6, 0.7]]);
        assert!(a.is_subset(&a).unwrap());
    }

    #[test]
    fn is_subset_rejects_shape_mismatch() {
        let a = set(&[[0.2, 0.3, 0.6, 0.7]]);
        let b = set(&[[0.2, 0.3, 0.6, 0.7], [0.2, 0.3, 0.6, 0.7]]);
        assert_eq!(
            a.is_subset(&b),
            Err(NfError::shape_mismatch(vec![1, 4], vec![2, 4]))
        );
    }

    // Complement

    #[test]
    fn complement_applies_nf_formula() {
        let c = set(&[[0.2, 0.3, 0.4, 0.9]]).complement().unwrap();
        assert_close(&c, &set(&[[0.8, 0.9, 0.6, 0.3]]));
    }

    #[test]
    fn complement_twice_is_identity() {
        let a = set(&[[0.2, 0.3, 0.4, 0.9], [0.15, 0.65, 0.35, 0.05]]);
        let twice = a.complement().unwrap().complement().unwrap();
        assert_close(&twice, &a);
    }

    // Intersection / union

    #[test]
    fn intersection_takes_min_truth_and_max_falsity() {
        let a = set(&[[0.2, 0.7, 0.4, 0.1]]);
        let b = set(&[[0.5, 0.3, 0.2, 0.6]]);
        assert_eq!(
            a.intersection(&b).unwrap(),
            set(&[[0.2, 0.3, 0.4, 0.6]])
        );
    }

    #[test]
    fn union_takes_max_truth_and_min_falsity() {
        let a = set(&[[0.2, 0.7, 0.4, 0.1]]);
        let b = set(&[[0.5, 0.3, 0.2, 0.6]]);
        assert_eq!(a.union(&b).unwrap(), set(&[[0.5, 0.7, 0.2, 0.1]]));
    }

    #[test]
    fn union_rejects_shape_mismatch() {
        let a = set(&[[0.2, 0.7, 0.4, 0.1], [0.1, 0.1, 0.1, 0.1]]);
        let b = set(&[[0.5, 0.3, 0.2, 0.6]]);
        assert!(matches!(
            a.union(&b),
            Err(NfError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn intersection_rejects_shape_mismatch() {
        let a = set(&[[0.2, 0.7, 0.4, 0.1]]);
        let b = set(&[[0.5, 0.3, 0.2, 0.6], [0.4, 0.4, 0.4, 0.4]]);
        assert_eq!(
            a.intersection(&b),
            Err(NfError::shape_mismatch(vec![1, 4], vec![2, 4]))
        );
    }

    #[test]
    fn intersection_is_subset_of_union() {
        let a = set(&[[0.2, 0.7, 0.4, 0.1], [0.9, 0.1, 0.3, 0.3]]);
        let b = set(&[[0.5, 0.3, 0.2, 0.6], [0.4, 0.4, 0.4, 0.4]]);
        let meet = a.intersection(&b).unwrap();
        let join = a.union(&b).unwrap();
        assert!(meet.is_subset(&join).unwrap());
    }

    // Serde

    #[test]
    fn deserializing_empty_list_fails() {
        let result: Result<NfSet, _> = serde_json::from_str("[]");
        assert!(result.is_err());
    }

    #[test]
    fn json_round_trip_preserves_elements() {
        let a = set(&[[0.2, 0.7, 0.4, 0.1]]);
        let json = serde_json::to_string(&a).unwrap();
        assert_eq!(json, "[[0.2,0.7,0.4,0.1]]");
        let back: NfSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, a);
    }
}
