use std::collections::HashSet;

use serde::Deserialize;
use serde_json::{Value, json};

/// Field name given to the single field of a non-record array.
pub const SINGLE_FIELD_NAME: &str = "value";

/// One declared field: its name and raw type code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldDescr {
    pub name: String,
    pub type_code: String,
}

impl FieldDescr {
    pub fn new(name: impl Into<String>, type_code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_code: type_code.into(),
        }
    }
}

/// `descr` as it appears in the header, before normalization.
///
/// ```text
///   'descr': '<f8'                        → TypeCode
///   'descr': [('a', '<i4'), ('b', '|S2')] → Fields
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Descr {
    TypeCode(String),
    Fields(Vec<(String, String)>),
}

impl Descr {
    /// Normalize to the list form. A bare type code becomes one field
    /// named [`SINGLE_FIELD_NAME`].
    pub fn into_fields(self) -> Vec<FieldDescr> {
        match self {
            Self::TypeCode(code) => vec![FieldDescr::new(SINGLE_FIELD_NAME, code)],
            Self::Fields(pairs) => pairs
                .into_iter()
                .map(|(name, code)| FieldDescr::new(name, code))
                .collect(),
        }
    }
}

/// Validated header metadata.
///
/// Invariants, checked by [`HeaderMetadata::new`]:
///
/// - `descr` is non-empty and its names are unique;
/// - every `shape` dimension is positive;
/// - the product of `shape` fits in a `usize`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderMetadata {
    pub descr: Vec<FieldDescr>,
    pub fortran_order: bool,
    pub shape: Vec<usize>,
}

impl HeaderMetadata {
    /// Build metadata, returning `None` if any invariant is violated.
    pub fn new(descr: Descr, fortran_order: bool, shape: Vec<usize>) -> Option<Self> {
        let meta = Self {
            descr: descr.into_fields(),
            fortran_order,
            shape,
        };
        meta.is_valid().then_some(meta)
    }

    /// Whether the invariants hold. Fields are public, so metadata built
    /// by hand is re-checked before use.
    pub fn is_valid(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.descr.len());
        !self.descr.is_empty()
            && self.descr.iter().all(|f| seen.insert(f.name.as_str()))
            && !self.shape.contains(&0)
            && self
                .shape
                .iter()
                .try_fold(1usize, |acc, &d| acc.checked_mul(d))
                .is_some()
    }

    /// Total element count: the product of all dimensions.
    ///
    /// A zero-dimensional (scalar) array has an empty shape and one element.
    pub fn element_count(&self) -> usize {
        self.shape.iter().product()
    }

    /// JSON form of the metadata, with `descr` always in list form:
    ///
    /// ```text
    /// {"descr": [["value", "<f8"]], "fortran_order": false, "shape": [3]}
    /// ```
    pub fn to_json(&self) -> Value {
        let descr: Vec<Value> = self
            .descr
            .iter()
            .map(|f| json!([f.name, f.type_code]))
            .collect();
        json!({
            "descr": descr,
            "fortran_order": self.fortran_order,
            "shape": self.shape,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_type_code_becomes_value_field() {
        let meta = HeaderMetadata::new(Descr::TypeCode("<f8".into()), false, vec![3]).unwrap();
        assert_eq!(meta.descr, vec![FieldDescr::new("value", "<f8")]);
        assert_eq!(meta.element_count(), 3);
    }

    #[test]
    fn scalar_shape_has_one_element() {
        let meta = HeaderMetadata::new(Descr::TypeCode("<i4".into()), false, vec![]).unwrap();
        assert_eq!(meta.element_count(), 1);
    }

    #[test]
    fn rejects_invariant_violations() {
        assert!(HeaderMetadata::new(Descr::Fields(vec![]), false, vec![1]).is_none());
        assert!(HeaderMetadata::new(Descr::TypeCode("<i4".into()), false, vec![2, 0]).is_none());
        assert!(HeaderMetadata::new(
            Descr::Fields(vec![("a".into(), "<i4".into()), ("a".into(), "<f8".into())]),
            false,
            vec![1],
        )
        .is_none());
        assert!(
            HeaderMetadata::new(Descr::TypeCode("<i4".into()), false, vec![usize::MAX, 2])
                .is_none()
        );
    }

    #[test]
    fn json_form_uses_list_descr() {
        let meta = HeaderMetadata::new(Descr::TypeCode("<f8".into()), false, vec![3]).unwrap();
        assert_eq!(
            meta.to_json(),
            json!({"descr": [["value", "<f8"]], "fortran_order": false, "shape": [3]})
        );
    }
}
