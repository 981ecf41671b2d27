use bytes::Bytes;

use crate::decoder::FieldDecoder;
use crate::value::Value;

/// A named field bound to the buffer it decodes from.
///
/// Cloning a `FieldView` copies the decoder and bumps the buffer's
/// reference count; no element bytes are copied. Projected views are
/// built from clones of their parent's field views.
#[derive(Clone, Debug)]
pub struct FieldView {
    name: String,
    decoder: FieldDecoder,
    data: Bytes,
}

impl FieldView {
    pub fn new(name: impl Into<String>, decoder: FieldDecoder, data: Bytes) -> Self {
        Self {
            name: name.into(),
            decoder,
            data,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn decoder(&self) -> &FieldDecoder {
        &self.decoder
    }

    /// The whole buffer this field reads from.
    pub fn data(&self) -> &Bytes {
        &self.data
    }

    /// Decode element `index`, or `None` if it lies past the buffer.
    pub fn decode(&self, index: usize) -> Option<Value> {
        self.decoder.decode(&self.data, index)
    }

    /// Whether elements `0..size` all lie inside the buffer.
    pub fn covers(&self, size: usize) -> bool {
        self.decoder
            .required_len(size)
            .is_some_and(|needed| needed <= self.data.len())
    }
}
