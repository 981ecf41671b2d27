use npv_header::FieldDescr;
use npv_wire::primitive::{
    read_f32, read_f64, read_fixed_str, read_i8, read_i16, read_i32, read_u8, read_u16, read_u32,
};
use npv_wire::{TypeKind, TypeSpec};

use crate::error::ViewError;
use crate::value::Value;

/// Locates and decodes one field of every element.
///
/// A decoder is a plain value: the field's [`TypeSpec`] plus the three
/// offsets that place element `i`'s copy of the field in the buffer.
///
/// ```text
///   data_offset            stride
///   │◀────────────────────▶│◀──────────────────▶│
///   ├──────────────────────┼──────┬──────┬──────┼──────┬─────
///   │ preamble + header    │  a   │  b   │  c   │  a   │ ...
///   └──────────────────────┴──────┴──────┴──────┴──────┴─────
///                          │◀────▶│ field_offset of b
///
///   position(i) = data_offset + i × stride + field_offset
/// ```
///
/// Decoders hold no reference to the buffer; [`decode`](Self::decode)
/// takes it as an argument. Copying a decoder into a projected view
/// therefore copies four integers and a spec.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldDecoder {
    pub spec: TypeSpec,
    pub field_offset: usize,
    pub stride: usize,
    pub data_offset: usize,
}

impl FieldDecoder {
    /// Build the decoder for one field from its type code.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::UnsupportedType`] if the type code is outside
    /// the supported table.
    pub fn for_type_code(
        type_code: &str,
        field_offset: usize,
        stride: usize,
        data_offset: usize,
    ) -> Result<Self, ViewError> {
        Ok(Self {
            spec: TypeSpec::parse(type_code)?,
            field_offset,
            stride,
            data_offset,
        })
    }

    /// Absolute byte position of element `index`'s copy of this field.
    ///
    /// `None` on arithmetic overflow.
    pub fn position(&self, index: usize) -> Option<usize> {
        index
            .checked_mul(self.stride)?
            .checked_add(self.data_offset)?
            .checked_add(self.field_offset)
    }

    /// Buffer length needed to decode elements `0..size`.
    pub fn required_len(&self, size: usize) -> Option<usize> {
        match size {
            0 => Some(0),
            n => self.position(n - 1)?.checked_add(self.spec.width),
        }
    }

    /// Decode element `index`, or `None` if its bytes lie past the end
    /// of `buf`.
    pub fn decode(&self, buf: &[u8], index: usize) -> Option<Value> {
        read_value(buf, self.position(index)?, &self.spec)
    }
}

/// Read one value of type `spec` at absolute position `pos`.
///
/// Numeric kinds allocate nothing. Fixed strings allocate the returned
/// `String` after stripping trailing NULs.
pub fn read_value(buf: &[u8], pos: usize, spec: &TypeSpec) -> Option<Value> {
    let order = spec.byte_order;
    match (spec.kind, spec.width) {
        (TypeKind::UnsignedInt, 1) => read_u8(buf, pos, order).map(|v| Value::UInt(v.into())),
        (TypeKind::UnsignedInt, 2) => read_u16(buf, pos, order).map(|v| Value::UInt(v.into())),
        (TypeKind::UnsignedInt, 4) => read_u32(buf, pos, order).map(|v| Value::UInt(v.into())),
        (TypeKind::SignedInt, 1) => read_i8(buf, pos, order).map(|v| Value::Int(v.into())),
        (TypeKind::SignedInt, 2) => read_i16(buf, pos, order).map(|v| Value::Int(v.into())),
        (TypeKind::SignedInt, 4) => read_i32(buf, pos, order).map(|v| Value::Int(v.into())),
        (TypeKind::Float, 4) => read_f32(buf, pos, order).map(|v| Value::Float(v.into())),
        (TypeKind::Float, 8) => read_f64(buf, pos, order).map(Value::Float),
        (TypeKind::FixedString, width) => read_fixed_str(buf, pos, width).map(Value::Str),
        _ => None,
    }
}

/// Build one named decoder per declared field.
///
/// Each field's offset is the sum of the widths before it; the stride is
/// the sum of all widths. Every type code is parsed before any decoder
/// is built, so an unsupported code anywhere fails the whole layout.
///
/// # Errors
///
/// Returns [`ViewError::UnsupportedType`] for the first unsupported code,
/// or for the first field whose width pushes the stride past `usize::MAX`.
pub fn build_decoders(
    descr: &[FieldDescr],
    data_offset: usize,
) -> Result<Vec<(String, FieldDecoder)>, ViewError> {
    let specs = descr
        .iter()
        .map(|f| TypeSpec::parse(&f.type_code))
        .collect::<Result<Vec<_>, _>>()?;

    let mut stride: usize = 0;
    for (field, spec) in descr.iter().zip(&specs) {
        stride = stride
            .checked_add(spec.width)
            .ok_or_else(|| ViewError::UnsupportedType {
                type_code: field.type_code.clone(),
                width: Some(spec.width),
            })?;
    }

    let mut field_offset = 0;
    let mut decoders = Vec::with_capacity(specs.len());
    for (field, spec) in descr.iter().zip(specs) {
        decoders.push((
            field.name.clone(),
            FieldDecoder {
                spec,
                field_offset,
                stride,
                data_offset,
            },
        ));
        // Partial sums never exceed `stride`, which was checked above.
        field_offset += spec.width;
    }
    Ok(decoders)
}

#[cfg(test)]
mod tests {
    use npv_wire::ByteOrder;

    use super::*;

    fn decoder(type_code: &str, field_offset: usize, stride: usize) -> FieldDecoder {
        FieldDecoder::for_type_code(type_code, field_offset, stride, 0).unwrap()
    }

    /// Encode `bytes` as element 1 of a two-element column at the given
    /// field offset, then decode it back.
    fn decode_at(type_code: &str, bytes: &[u8]) -> Value {
        let field_offset = 3;
        let stride = field_offset + bytes.len() + 1;
        let mut buf = vec![0xAA; stride * 2];
        let pos = stride + field_offset;
        buf[pos..pos + bytes.len()].copy_from_slice(bytes);
        decoder(type_code, field_offset, stride)
            .decode(&buf, 1)
            .unwrap()
    }

    #[test]
    fn unsigned_ints() {
        assert_eq!(decode_at("|u1", &[255]), Value::UInt(255));
        assert_eq!(decode_at("<u2", &513u16.to_le_bytes()), Value::UInt(513));
        assert_eq!(decode_at(">u2", &513u16.to_be_bytes()), Value::UInt(513));
        assert_eq!(decode_at("<u4", &u32::MAX.to_le_bytes()), Value::UInt(u64::from(u32::MAX)));
        assert_eq!(decode_at(">u4", &70_000u32.to_be_bytes()), Value::UInt(70_000));
    }

    #[test]
    fn signed_ints() {
        assert_eq!(decode_at("|i1", &(-128i8).to_le_bytes()), Value::Int(-128));
        assert_eq!(decode_at("<i2", &(-300i16).to_le_bytes()), Value::Int(-300));
        assert_eq!(decode_at(">i2", &(-300i16).to_be_bytes()), Value::Int(-300));
        assert_eq!(decode_at("<i4", &i32::MIN.to_le_bytes()), Value::Int(i64::from(i32::MIN)));
        assert_eq!(decode_at(">i4", &123_456i32.to_be_bytes()), Value::Int(123_456));
    }

    #[test]
    fn floats() {
        assert_eq!(decode_at("<f4", &1.25f32.to_le_bytes()), Value::Float(1.25));
        assert_eq!(decode_at(">f4", &(-3.5f32).to_be_bytes()), Value::Float(-3.5));
        assert_eq!(decode_at("<f8", &0.1f64.to_le_bytes()), Value::Float(0.1));
        assert_eq!(decode_at(">f8", &1e300f64.to_be_bytes()), Value::Float(1e300));
    }

    #[test]
    fn fixed_strings_strip_trailing_nuls() {
        assert_eq!(decode_at("|S4", b"ab\0\0"), Value::Str("ab".into()));
        assert_eq!(decode_at("S2", b"xy"), Value::Str("xy".into()));
        assert_eq!(decode_at("|a3", b"\0\0\0"), Value::Str(String::new()));
    }

    #[test]
    fn position_and_required_len() {
        let d = FieldDecoder::for_type_code("<i4", 2, 8, 10).unwrap();
        assert_eq!(d.position(0), Some(12));
        assert_eq!(d.position(3), Some(36));
        assert_eq!(d.required_len(0), Some(0));
        assert_eq!(d.required_len(4), Some(40));
        assert_eq!(d.position(usize::MAX), None);
    }

    #[test]
    fn decode_past_end_is_none() {
        let d = decoder("<u2", 0, 2);
        assert_eq!(d.decode(&[1, 0, 2], 0), Some(Value::UInt(1)));
        assert_eq!(d.decode(&[1, 0, 2], 1), None);
    }

    #[test]
    fn build_decoders_accumulates_offsets() {
        let descr = [
            FieldDescr::new("a", "<i4"),
            FieldDescr::new("b", "|S2"),
            FieldDescr::new("c", ">f8"),
        ];
        let decoders = build_decoders(&descr, 16).unwrap();
        let layout: Vec<_> = decoders
            .iter()
            .map(|(name, d)| (name.as_str(), d.field_offset, d.stride, d.data_offset))
            .collect();
        assert_eq!(
            layout,
            vec![("a", 0, 14, 16), ("b", 4, 14, 16), ("c", 6, 14, 16)]
        );
        assert_eq!(decoders[2].1.spec.byte_order, ByteOrder::Big);
    }

    #[test]
    fn build_decoders_rejects_unsupported_width() {
        let descr = [FieldDescr::new("a", "<i4"), FieldDescr::new("b", "<u3")];
        let err = build_decoders(&descr, 0).unwrap_err();
        assert!(matches!(
            err,
            ViewError::UnsupportedType { ref type_code, width: Some(3) } if type_code == "<u3"
        ));
    }

    #[test]
    fn build_decoders_rejects_stride_overflow() {
        let huge = format!("|S{}", usize::MAX);
        let descr = [FieldDescr::new("a", huge.as_str()), FieldDescr::new("b", "<i4")];
        let err = build_decoders(&descr, 0).unwrap_err();
        assert!(matches!(
            err,
            ViewError::UnsupportedType { ref type_code, width: Some(4) } if type_code == "<i4"
        ));
    }

    #[test]
    fn single_maximal_width_is_accepted() {
        let huge = format!("|S{}", usize::MAX);
        let decoders = build_decoders(&[FieldDescr::new("a", huge.as_str())], 0).unwrap();
        assert_eq!(decoders[0].1.stride, usize::MAX);
        assert_eq!(decoders[0].1.required_len(1), Some(usize::MAX));
    }
}
