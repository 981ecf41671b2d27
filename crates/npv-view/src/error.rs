use npv_wire::WireError;

/// Errors raised while building or querying an [`ArrayView`](crate::ArrayView).
///
/// Construction fails fast: header, type, and length problems surface
/// from `from_buffer` / `from_fields` before any view exists. Field and
/// index errors surface only from the call that names the bad field or
/// index, and leave the view usable.
///
/// ```text
///   ViewError
///   ├── HeaderParse        ← header text is not valid metadata
///   ├── UnsupportedType    ← type code outside the supported table
///   ├── TruncatedData      ← data region shorter than size × stride
///   ├── DuplicateField     ← two fields share a name
///   ├── UnknownField       ← get/projection named a missing field
///   ├── IndexOutOfBounds   ← get named an index ≥ size
///   ├── Wire(WireError)    ← preamble/header length framing
///   └── Io(std::io::Error) ← buffer acquisition
/// ```
#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    /// The header could not be converted into valid metadata.
    ///
    /// Carries the raw header text for diagnosis.
    #[error("header {header:?} could not be parsed")]
    HeaderParse { header: String },

    /// A field's type code names a kind/width pair that has no decoder.
    #[error("type code '{type_code}' is not supported{}", width_suffix(.width))]
    UnsupportedType {
        type_code: String,
        width: Option<usize>,
    },

    /// A requested field name is not present in the view.
    #[error("'{name}' is not a field")]
    UnknownField { name: String },

    /// Two fields of one view share a name.
    #[error("field '{name}' appears more than once")]
    DuplicateField { name: String },

    /// A row index past the end of the view.
    #[error("index {index} out of bounds for view of size {size}")]
    IndexOutOfBounds { index: usize, size: usize },

    /// The buffer is too short for the declared element count.
    #[error("data truncated: need {expected} bytes, buffer has {actual}")]
    TruncatedData { expected: usize, actual: usize },

    #[error(transparent)]
    Wire(WireError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn width_suffix(width: &Option<usize>) -> String {
    match width {
        Some(w) => format!(" (width {w})"),
        None => " (no width)".to_string(),
    }
}

impl From<WireError> for ViewError {
    /// Unsupported type codes are lifted to [`ViewError::UnsupportedType`]
    /// so callers match one variant regardless of which layer rejected
    /// the code.
    fn from(err: WireError) -> Self {
        match err {
            WireError::UnsupportedType { type_code, width } => {
                Self::UnsupportedType { type_code, width }
            }
            other => Self::Wire(other),
        }
    }
}
