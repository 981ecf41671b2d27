//! Shared fixtures for the npv integration suites and benches.
//!
//! [`NpyFixture`] writes buffers in the same layout numpy's own writer
//! uses: the header dict is padded with spaces and a trailing newline so
//! the data region starts on a 64-byte boundary.
//!
//! ```text
//! ┌──────────┬───────┬───────┬──────────┬─────────────────────────┬──────┐
//! │ 0..6     │ 6     │ 7     │ 8..10    │ 10..10+L                │ rest │
//! ├──────────┼───────┼───────┼──────────┼─────────────────────────┼──────┤
//! │ \x93NUMPY│ major │ minor │ L (u16LE)│ {'descr': …}␠␠␠…\n      │ data │
//! └──────────┴───────┴───────┴──────────┴─────────────────────────┴──────┘
//! ```

#![allow(clippy::pedantic)]

use bytes::Bytes;

/// Alignment of the data region in numpy-written files.
pub const ARRAY_ALIGN: usize = 64;

/// Builder for an in-memory array buffer.
///
/// `descr` is written verbatim as the dict's `'descr'` value, so it must
/// already be a quoted literal: `"'<f8'"` or `"[('a', '<i4'), ('b', '|S2')]"`.
#[derive(Clone, Debug)]
pub struct NpyFixture {
    descr: String,
    fortran_order: bool,
    shape: Vec<usize>,
    data: Vec<u8>,
    pad: bool,
}

impl NpyFixture {
    pub fn new(descr: &str) -> Self {
        Self {
            descr: descr.to_string(),
            fortran_order: false,
            shape: Vec::new(),
            data: Vec::new(),
            pad: true,
        }
    }

    pub fn shape(mut self, dims: &[usize]) -> Self {
        self.shape = dims.to_vec();
        self
    }

    pub fn fortran_order(mut self, fortran_order: bool) -> Self {
        self.fortran_order = fortran_order;
        self
    }

    /// Skip alignment padding; the header ends right after the closing brace.
    pub fn unpadded(mut self) -> Self {
        self.pad = false;
        self
    }

    /// Append raw bytes to the data region.
    pub fn data(mut self, bytes: impl AsRef<[u8]>) -> Self {
        self.data.extend_from_slice(bytes.as_ref());
        self
    }

    /// Header text exactly as it is written between offsets 10 and `10 + L`.
    pub fn header_text(&self) -> String {
        let mut text = format!(
            "{{'descr': {}, 'fortran_order': {}, 'shape': {}, }}",
            self.descr,
            if self.fortran_order { "True" } else { "False" },
            shape_literal(&self.shape),
        );
        if self.pad {
            let padlen = ARRAY_ALIGN - ((10 + text.len() + 1) % ARRAY_ALIGN);
            text.extend(std::iter::repeat_n(' ', padlen));
            text.push('\n');
        }
        text
    }

    pub fn build(&self) -> Bytes {
        framed(self.header_text().as_bytes(), &self.data)
    }
}

/// Frame arbitrary header bytes and data with a version 1.0 preamble.
pub fn framed(header: &[u8], data: &[u8]) -> Bytes {
    let len = u16::try_from(header.len()).expect("header fits in u16");
    let mut out = Vec::with_capacity(10 + header.len() + data.len());
    out.extend_from_slice(b"\x93NUMPY\x01\x00");
    out.extend_from_slice(&len.to_le_bytes());
    out.extend_from_slice(header);
    out.extend_from_slice(data);
    Bytes::from(out)
}

/// Python tuple literal for a shape: `()`, `(3,)`, `(2, 3)`.
pub fn shape_literal(shape: &[usize]) -> String {
    match shape {
        [] => "()".to_string(),
        [n] => format!("({n},)"),
        dims => {
            let parts: Vec<String> = dims.iter().map(ToString::to_string).collect();
            format!("({})", parts.join(", "))
        }
    }
}

/// `[1, 2, 255]` as `|u1`, shape `(3,)`.
pub fn uint8_fixture() -> NpyFixture {
    NpyFixture::new("'|u1'").shape(&[3]).data([1u8, 2, 255])
}

/// `[1.5, -2.25, 0.1, 1024.0]` as `>f8`, shape `(2, 2)`.
pub fn float64_be_fixture() -> NpyFixture {
    let mut data = Vec::new();
    for v in [1.5f64, -2.25, 0.1, 1024.0] {
        data.extend_from_slice(&v.to_be_bytes());
    }
    NpyFixture::new("'>f8'").shape(&[2, 2]).data(data)
}

/// Three `(id: <u2, temp: <f4, tag: |S4)` records.
pub fn records_fixture() -> NpyFixture {
    let mut data = Vec::new();
    for (id, temp, tag) in [(1u16, 20.5f32, &b"abc"[..]), (2, -3.25, b"wxyz"), (65535, 0.0, b"")] {
        data.extend_from_slice(&id.to_le_bytes());
        data.extend_from_slice(&temp.to_le_bytes());
        let mut cell = [0u8; 4];
        cell[..tag.len()].copy_from_slice(tag);
        data.extend_from_slice(&cell);
    }
    NpyFixture::new("[('id', '<u2'), ('temp', '<f4'), ('tag', '|S4')]")
        .shape(&[3])
        .data(data)
}

/// Two records mixing every integer kind and both byte orders.
pub fn int_mix_fixture() -> NpyFixture {
    let mut data = Vec::new();
    for (a, b, c, d) in [(-128i8, -2i16, -100_000i32, 4_000_000_000u32), (127, 300, 7, 0)] {
        data.extend_from_slice(&a.to_le_bytes());
        data.extend_from_slice(&b.to_be_bytes());
        data.extend_from_slice(&c.to_le_bytes());
        data.extend_from_slice(&d.to_be_bytes());
    }
    NpyFixture::new("[('a', '|i1'), ('b', '>i2'), ('c', '<i4'), ('d', '>u4')]")
        .shape(&[2])
        .data(data)
}

/// A zero-dimensional `<i4` holding 42.
pub fn scalar_fixture() -> NpyFixture {
    NpyFixture::new("'<i4'").shape(&[]).data(42i32.to_le_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_is_aligned_and_newline_terminated() {
        let fixture = records_fixture();
        let text = fixture.header_text();
        assert_eq!((10 + text.len()) % ARRAY_ALIGN, 0);
        assert!(text.ends_with('\n'));
        assert!(text.starts_with("{'descr': [('id', '<u2')"));
    }

    #[test]
    fn unpadded_header_ends_at_brace() {
        let text = uint8_fixture().unpadded().header_text();
        assert_eq!(text, "{'descr': '|u1', 'fortran_order': False, 'shape': (3,), }");
    }

    #[test]
    fn shape_literals() {
        assert_eq!(shape_literal(&[]), "()");
        assert_eq!(shape_literal(&[3]), "(3,)");
        assert_eq!(shape_literal(&[2, 3]), "(2, 3)");
    }
}
