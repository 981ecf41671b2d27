/// Errors raised while reading the framing of an array buffer.
///
/// These are the lowest-level failures: the buffer is too short to hold
/// what its own length fields promise, the preamble is not the expected
/// magic string, or a type code falls outside the supported table.
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// Input ended before a complete preamble, header, or value could be read.
    #[error("unexpected end of input at offset {offset}")]
    UnexpectedEof { offset: usize },

    /// The first six bytes were not `\x93NUMPY`.
    #[error("invalid magic string: expected \\x93NUMPY, got {found:02X?}")]
    InvalidMagic { found: [u8; 6] },

    /// A type code named a kind/width pair outside the supported table.
    ///
    /// `width` is `None` when the code carries no decimal width at all.
    #[error("unsupported type code '{type_code}'{}", width_suffix(.width))]
    UnsupportedType {
        type_code: String,
        width: Option<usize>,
    },
}

fn width_suffix(width: &Option<usize>) -> String {
    match width {
        Some(w) => format!(" (width {w})"),
        None => " (no width)".to_string(),
    }
}
