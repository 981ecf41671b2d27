use std::collections::HashSet;
use std::iter::FusedIterator;

use bytes::Bytes;
use npv_header::{HeaderMetadata, HeaderParser};
use npv_wire::preamble::header_range;
use npv_wire::primitive::latin1;

use crate::decoder::build_decoders;
use crate::error::ViewError;
use crate::field::FieldView;
use crate::request::{Request, Selection};
use crate::value::{Row, Value};

/// An immutable, lazily decoded, one-dimensional view over an array
/// buffer.
///
/// Nothing is decoded up front. Every row access runs the field
/// decoders against the shared buffer; every projection shares the
/// parent's decoders and buffer.
///
/// ```text
///   Bytes ──▶ header_range ──▶ HeaderParser ──▶ build_decoders ──▶ ArrayView
///                                                                    │
///            get(Index/IndexList) ──▶ Row(s)  ◀──────────────────────┤
///            get(Field/FieldList) ──▶ ArrayView (projection) ◀───────┘
/// ```
///
/// Any shape is flattened: `size` is the product of its dimensions and
/// rows are addressed by a single index.
///
/// # Example
///
/// ```rust
/// use bytes::Bytes;
/// use npv_view::{ArrayView, Row, Value};
///
/// let header = b"{'descr': '|u1', 'fortran_order': False, 'shape': (3,), }\n";
/// let mut buf = b"\x93NUMPY\x01\x00".to_vec();
/// buf.extend_from_slice(&(header.len() as u16).to_le_bytes());
/// buf.extend_from_slice(header);
/// buf.extend_from_slice(&[1, 2, 255]);
///
/// let view = ArrayView::from_buffer(Bytes::from(buf), None).unwrap();
/// assert_eq!(view.row(2).unwrap(), Row::Scalar(Value::UInt(255)));
/// assert_eq!(view.iter().count(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct ArrayView {
    size: usize,
    fields: Vec<FieldView>,
    source: Option<Source>,
}

/// Where a buffer-sourced view came from. Projections drop it, since
/// their fields no longer match the header.
#[derive(Clone, Debug)]
struct Source {
    header_text: String,
    metadata: HeaderMetadata,
}

impl ArrayView {
    /// Build a view over a complete array buffer.
    ///
    /// Steps:
    ///
    ///   1. Read the header length at offset 8; the header text is bytes
    ///      `[10, 10 + L)` and the data region starts right after.
    ///   2. Use `header` if given, otherwise parse the header text.
    ///   3. Build one decoder per field; offsets are cumulative widths
    ///      and the stride is their sum.
    ///   4. `size` is the product of the shape.
    ///   5. Check the data region holds `size × stride` bytes.
    ///
    /// # Errors
    ///
    /// - [`ViewError::Wire`] if the buffer ends inside the preamble or header.
    /// - [`ViewError::HeaderParse`] if the header is undecodable, or the
    ///   supplied metadata violates its invariants.
    /// - [`ViewError::UnsupportedType`] if any field's type code is unsupported.
    /// - [`ViewError::TruncatedData`] if the data region is too short.
    pub fn from_buffer(buffer: Bytes, header: Option<HeaderMetadata>) -> Result<Self, ViewError> {
        let range = header_range(&buffer)?;
        let header_text = latin1(&buffer[range.clone()]);

        let metadata = match header {
            Some(meta) if meta.is_valid() => meta,
            Some(_) => return Err(ViewError::HeaderParse { header: header_text }),
            None => HeaderParser::parse(&header_text).ok_or_else(|| ViewError::HeaderParse {
                header: header_text.clone(),
            })?,
        };

        let decoders = build_decoders(&metadata.descr, range.end)?;
        let size = metadata.element_count();

        let fields = decoders
            .into_iter()
            .map(|(name, decoder)| FieldView::new(name, decoder, buffer.clone()))
            .collect();

        let mut view = Self::from_fields(size, fields)?;
        view.source = Some(Source {
            header_text,
            metadata,
        });
        Ok(view)
    }

    /// Build a view from an explicit size and field list.
    ///
    /// No header or buffer parsing happens here; this is how projections
    /// are assembled.
    ///
    /// # Errors
    ///
    /// - [`ViewError::DuplicateField`] if two fields share a name.
    /// - [`ViewError::TruncatedData`] if a field's buffer cannot hold
    ///   `size` elements.
    pub fn from_fields(size: usize, fields: Vec<FieldView>) -> Result<Self, ViewError> {
        let mut seen = HashSet::with_capacity(fields.len());
        for field in &fields {
            if !seen.insert(field.name()) {
                return Err(ViewError::DuplicateField {
                    name: field.name().to_string(),
                });
            }
            if !field.covers(size) {
                return Err(ViewError::TruncatedData {
                    expected: field.decoder().required_len(size).unwrap_or(usize::MAX),
                    actual: field.data().len(),
                });
            }
        }

        Ok(Self {
            size,
            fields,
            source: None,
        })
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(FieldView::name).collect()
    }

    pub fn field_views(&self) -> &[FieldView] {
        &self.fields
    }

    /// Parsed header metadata, for views built by [`from_buffer`](Self::from_buffer).
    pub fn metadata(&self) -> Option<&HeaderMetadata> {
        self.source.as_ref().map(|s| &s.metadata)
    }

    /// Raw header text, for views built by [`from_buffer`](Self::from_buffer).
    pub fn header_text(&self) -> Option<&str> {
        self.source.as_ref().map(|s| s.header_text.as_str())
    }

    /// Answer a [`Request`].
    ///
    /// # Errors
    ///
    /// - [`ViewError::IndexOutOfBounds`] for an index `>= len()`.
    /// - [`ViewError::UnknownField`] for a name not in this view.
    /// - [`ViewError::DuplicateField`] if a field list names a field twice.
    pub fn get(&self, request: impl Into<Request>) -> Result<Selection, ViewError> {
        match request.into() {
            Request::Index(index) => self.row(index).map(Selection::Row),
            Request::IndexList(indices) => self.rows(&indices).map(Selection::Rows),
            Request::Field(name) => self.field(&name).map(Selection::View),
            Request::FieldList(names) => self.fields(&names).map(Selection::View),
        }
    }

    /// Decode one row: the bare value for a one-field view, otherwise
    /// the per-field values in field order.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::IndexOutOfBounds`] if `index >= len()`.
    pub fn row(&self, index: usize) -> Result<Row, ViewError> {
        if index >= self.size {
            return Err(ViewError::IndexOutOfBounds {
                index,
                size: self.size,
            });
        }

        if let [only] = self.fields.as_slice() {
            return self.decode(only, index).map(Row::Scalar);
        }
        self.fields
            .iter()
            .map(|field| self.decode(field, index))
            .collect::<Result<Vec<_>, _>>()
            .map(Row::Record)
    }

    /// Decode several rows, in request order.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::IndexOutOfBounds`] for the first bad index.
    pub fn rows(&self, indices: &[usize]) -> Result<Vec<Row>, ViewError> {
        indices.iter().map(|&i| self.row(i)).collect()
    }

    /// Project onto a single field.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::UnknownField`] if `name` is not a field.
    pub fn field(&self, name: &str) -> Result<Self, ViewError> {
        self.fields(&[name])
    }

    /// Project onto `names`, in that order. Decoders and buffer are
    /// shared with `self`.
    ///
    /// # Errors
    ///
    /// - [`ViewError::UnknownField`] for the first name not in this view.
    /// - [`ViewError::DuplicateField`] if a name is repeated.
    pub fn fields<S: AsRef<str>>(&self, names: &[S]) -> Result<Self, ViewError> {
        let selected = names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                self.fields
                    .iter()
                    .find(|f| f.name() == name)
                    .cloned()
                    .ok_or_else(|| ViewError::UnknownField {
                        name: name.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_fields(self.size, selected)
    }

    /// Iterate rows `0..len()` in order. Each pass decodes afresh.
    pub fn iter(&self) -> Rows<'_> {
        Rows {
            view: self,
            next: 0,
        }
    }

    /// Decode every row into a `Vec`.
    pub fn to_vec(&self) -> Vec<Row> {
        self.iter().collect()
    }

    fn decode(&self, field: &FieldView, index: usize) -> Result<Value, ViewError> {
        // Construction checked coverage, so this only fails on an index
        // the caller already bounds-checked.
        field.decode(index).ok_or(ViewError::IndexOutOfBounds {
            index,
            size: self.size,
        })
    }
}

impl<'a> IntoIterator for &'a ArrayView {
    type Item = Row;
    type IntoIter = Rows<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Lazy iterator over the rows of an [`ArrayView`].
pub struct Rows<'a> {
    view: &'a ArrayView,
    next: usize,
}

impl Iterator for Rows<'_> {
    type Item = Row;

    fn next(&mut self) -> Option<Row> {
        if self.next >= self.view.size {
            return None;
        }
        // `from_fields` rejected any field that cannot cover `0..size`,
        // so every in-range row decodes and `len()` stays exact.
        let row = self.view.row(self.next);
        debug_assert!(row.is_ok(), "row {} failed to decode: {row:?}", self.next);
        self.next += 1;
        row.ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.view.size.saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Rows<'_> {}

impl FusedIterator for Rows<'_> {}
