use std::fmt;

use serde::Serialize;

/// One decoded field value.
///
/// Integers widen to 64 bits and `f4` widens to `f64`; both conversions
/// are exact.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    UInt(u64),
    Int(i64),
    Float(f64),
    Str(String),
}

impl Value {
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::UInt(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UInt(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Str(s) => f.write_str(s),
        }
    }
}

/// The value of one element.
///
/// A view with exactly one field yields the bare value; any other field
/// count yields the per-field values in field order.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Row {
    Scalar(Value),
    Record(Vec<Value>),
}

impl Row {
    /// Per-field values in field order (a one-element slice for scalars).
    pub fn values(&self) -> &[Value] {
        match self {
            Self::Scalar(v) => std::slice::from_ref(v),
            Self::Record(vs) => vs,
        }
    }

    pub fn as_scalar(&self) -> Option<&Value> {
        match self {
            Self::Scalar(v) => Some(v),
            Self::Record(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_rows_expose_one_value() {
        let row = Row::Scalar(Value::UInt(7));
        assert_eq!(row.values(), &[Value::UInt(7)]);
        assert_eq!(row.as_scalar(), Some(&Value::UInt(7)));
    }

    #[test]
    fn record_rows_are_not_scalars() {
        let row = Row::Record(vec![Value::Int(-1), Value::Str("ab".into())]);
        assert_eq!(row.values().len(), 2);
        assert!(row.as_scalar().is_none());
    }

    #[test]
    fn serializes_untagged() {
        let row = Row::Record(vec![Value::Int(-1), Value::Float(0.5), Value::Str("ab".into())]);
        assert_eq!(serde_json::to_string(&row).unwrap(), r#"[-1,0.5,"ab"]"#);
        let scalar = Row::Scalar(Value::UInt(3));
        assert_eq!(serde_json::to_string(&scalar).unwrap(), "3");
    }

    #[test]
    fn display_is_plain() {
        assert_eq!(Value::Float(2.5).to_string(), "2.5");
        assert_eq!(Value::Str("hi".into()).to_string(), "hi");
        assert_eq!(Value::Int(-4).to_string(), "-4");
    }
}
