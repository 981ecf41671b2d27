use crate::value::Row;
use crate::view::ArrayView;

/// What a caller asks [`ArrayView::get`] for.
///
/// ```text
/// ┌────────────┬──────────────────────┬───────────────────────────┐
/// │ Variant    │ Example              │ Answer                    │
/// ├────────────┼──────────────────────┼───────────────────────────┤
/// │ Index      │ 3                    │ Selection::Row            │
/// │ IndexList  │ [0, 2]               │ Selection::Rows           │
/// │ Field      │ "a"                  │ Selection::View (1 field) │
/// │ FieldList  │ ["b", "a"]           │ Selection::View (reorder) │
/// └────────────┴──────────────────────┴───────────────────────────┘
/// ```
///
/// The `From` impls let callers write `view.get(3)`, `view.get("a")`,
/// or `view.get(["b", "a"])`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Request {
    Index(usize),
    IndexList(Vec<usize>),
    Field(String),
    FieldList(Vec<String>),
}

impl From<usize> for Request {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl From<Vec<usize>> for Request {
    fn from(indices: Vec<usize>) -> Self {
        Self::IndexList(indices)
    }
}

impl From<&[usize]> for Request {
    fn from(indices: &[usize]) -> Self {
        Self::IndexList(indices.to_vec())
    }
}

impl<const N: usize> From<[usize; N]> for Request {
    fn from(indices: [usize; N]) -> Self {
        Self::IndexList(indices.to_vec())
    }
}

impl From<&str> for Request {
    fn from(name: &str) -> Self {
        Self::Field(name.to_string())
    }
}

impl From<String> for Request {
    fn from(name: String) -> Self {
        Self::Field(name)
    }
}

impl From<Vec<String>> for Request {
    fn from(names: Vec<String>) -> Self {
        Self::FieldList(names)
    }
}

impl From<Vec<&str>> for Request {
    fn from(names: Vec<&str>) -> Self {
        Self::FieldList(names.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Request {
    fn from(names: [&str; N]) -> Self {
        Self::FieldList(names.iter().map(|s| (*s).to_string()).collect())
    }
}

/// The answer to a [`Request`].
#[derive(Clone, Debug)]
pub enum Selection {
    Row(Row),
    Rows(Vec<Row>),
    View(ArrayView),
}

impl Selection {
    pub fn into_row(self) -> Option<Row> {
        match self {
            Self::Row(row) => Some(row),
            _ => None,
        }
    }

    pub fn into_rows(self) -> Option<Vec<Row>> {
        match self {
            Self::Rows(rows) => Some(rows),
            _ => None,
        }
    }

    pub fn into_view(self) -> Option<ArrayView> {
        match self {
            Self::View(view) => Some(view),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions_pick_the_right_variant() {
        assert_eq!(Request::from(2usize), Request::Index(2));
        assert_eq!(Request::from([0usize, 2]), Request::IndexList(vec![0, 2]));
        assert_eq!(Request::from("a"), Request::Field("a".into()));
        assert_eq!(
            Request::from(["b", "a"]),
            Request::FieldList(vec!["b".into(), "a".into()])
        );
        assert_eq!(
            Request::from(vec!["x".to_string()]),
            Request::FieldList(vec!["x".into()])
        );
    }
}
