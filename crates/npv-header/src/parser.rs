use serde::Deserialize;
use serde_json::Value;

use crate::metadata::{Descr, HeaderMetadata};
use crate::scanner;

/// The three keys every header dictionary carries. Unknown keys are
/// ignored.
#[derive(Deserialize)]
struct RawHeader {
    descr: Descr,
    fortran_order: bool,
    shape: Vec<usize>,
}

/// Converts header text into [`HeaderMetadata`].
///
/// Parsing never fails loudly: anything the scanner, the JSON parser, or
/// metadata validation rejects comes back as `None`. Deciding what an
/// undecodable header means is the caller's business.
///
/// ```text
/// header text ──▶ scanner::to_json ──▶ serde_json ──▶ RawHeader ──▶ HeaderMetadata
/// ```
pub struct HeaderParser;

impl HeaderParser {
    /// Parse raw header text such as
    /// `{'descr': '<f8', 'fortran_order': False, 'shape': (3,), }`.
    pub fn parse(header: &str) -> Option<HeaderMetadata> {
        let json = scanner::to_json(header)?;
        let value: Value = serde_json::from_str(&json).ok()?;
        Self::parse_json(value)
    }

    /// Parse an already-structured header, e.g. one a caller supplies
    /// alongside a buffer instead of trusting the embedded text.
    pub fn parse_json(value: Value) -> Option<HeaderMetadata> {
        let raw: RawHeader = serde_json::from_value(value).ok()?;
        HeaderMetadata::new(raw.descr, raw.fortran_order, raw.shape)
    }
}
