use crate::error::WireError;

/// Value kind named by the letter of a type code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypeKind {
    UnsignedInt,
    SignedInt,
    Float,
    FixedString,
}

impl TypeKind {
    fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'u' => Some(Self::UnsignedInt),
            'i' => Some(Self::SignedInt),
            'f' => Some(Self::Float),
            'S' | 'a' => Some(Self::FixedString),
            _ => None,
        }
    }

    /// Canonical kind letter (`S` for fixed strings).
    pub fn letter(self) -> char {
        match self {
            Self::UnsignedInt => 'u',
            Self::SignedInt => 'i',
            Self::Float => 'f',
            Self::FixedString => 'S',
        }
    }

    /// Whether `width` bytes is a supported size for this kind.
    pub fn supports_width(self, width: usize) -> bool {
        match self {
            Self::UnsignedInt | Self::SignedInt => matches!(width, 1 | 2 | 4),
            Self::Float => matches!(width, 4 | 8),
            Self::FixedString => width > 0,
        }
    }
}

/// Byte order of a multi-byte field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ByteOrder {
    #[default]
    Little,
    Big,
}

impl ByteOrder {
    /// Resolve an order marker. Only `>` means big-endian; `<`, `|`, `=`
    /// and an absent marker all read as little-endian.
    pub fn from_marker(marker: Option<char>) -> Self {
        match marker {
            Some('>') => Self::Big,
            _ => Self::Little,
        }
    }

    pub fn marker(self) -> char {
        match self {
            Self::Little => '<',
            Self::Big => '>',
        }
    }
}

/// A parsed type code: kind, byte width, and byte order.
///
/// Type code grammar:
///
/// ```text
///   [marker] kind width
///
///   marker : '<' little | '>' big | '|' not applicable | '=' (read as little)
///   kind   : 'u' unsigned | 'i' signed | 'f' float | 'S' / 'a' fixed string
///   width  : decimal byte count
/// ```
///
/// | kind        | widths  |
/// |-------------|---------|
/// | unsigned    | 1, 2, 4 |
/// | signed      | 1, 2, 4 |
/// | float       | 4, 8    |
/// | fixed str   | any ≥ 1 |
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypeSpec {
    pub kind: TypeKind,
    pub width: usize,
    pub byte_order: ByteOrder,
}

impl TypeSpec {
    /// Parse a type code such as `<f8`, `>u2`, `|S10`, or `i4`.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::UnsupportedType`] if the code is malformed or
    /// the kind/width combination is not in the supported table.
    pub fn parse(type_code: &str) -> Result<Self, WireError> {
        let (prefix, width) = split_width(type_code);
        let unsupported = || WireError::UnsupportedType {
            type_code: type_code.to_string(),
            width,
        };

        let width = width.ok_or_else(unsupported)?;
        let mut chars = prefix.chars();
        let (marker, letter) = match (chars.next(), chars.next(), chars.next()) {
            (Some(m @ ('<' | '>' | '|' | '=')), Some(letter), None) => (Some(m), letter),
            (Some(letter), None, None) => (None, letter),
            _ => return Err(unsupported()),
        };

        let kind = TypeKind::from_letter(letter).ok_or_else(unsupported)?;
        if !kind.supports_width(width) {
            return Err(unsupported());
        }

        Ok(Self {
            kind,
            width,
            byte_order: ByteOrder::from_marker(marker),
        })
    }

    /// Canonical type code for this spec, e.g. `<i4` or `|S2`.
    ///
    /// Single-byte and string kinds use the `|` marker since byte order
    /// does not apply to them.
    pub fn type_code(&self) -> String {
        let marker = if self.kind == TypeKind::FixedString || self.width == 1 {
            '|'
        } else {
            self.byte_order.marker()
        };
        format!("{marker}{}{}", self.kind.letter(), self.width)
    }
}

/// Split a type code into its marker+kind prefix and trailing decimal width.
///
/// The width is `None` when there are no trailing digits or they overflow.
pub fn split_width(type_code: &str) -> (&str, Option<usize>) {
    let prefix = type_code.trim_end_matches(|c: char| c.is_ascii_digit());
    let digits = &type_code[prefix.len()..];
    (prefix, digits.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(kind: TypeKind, width: usize, byte_order: ByteOrder) -> TypeSpec {
        TypeSpec {
            kind,
            width,
            byte_order,
        }
    }

    #[test]
    fn parses_supported_codes() {
        assert_eq!(
            TypeSpec::parse("<f8").unwrap(),
            spec(TypeKind::Float, 8, ByteOrder::Little)
        );
        assert_eq!(
            TypeSpec::parse(">u2").unwrap(),
            spec(TypeKind::UnsignedInt, 2, ByteOrder::Big)
        );
        assert_eq!(
            TypeSpec::parse("|i1").unwrap(),
            spec(TypeKind::SignedInt, 1, ByteOrder::Little)
        );
        assert_eq!(
            TypeSpec::parse("|S10").unwrap(),
            spec(TypeKind::FixedString, 10, ByteOrder::Little)
        );
        assert_eq!(
            TypeSpec::parse("a3").unwrap(),
            spec(TypeKind::FixedString, 3, ByteOrder::Little)
        );
    }

    #[test]
    fn missing_and_native_markers_read_little() {
        assert_eq!(TypeSpec::parse("i4").unwrap().byte_order, ByteOrder::Little);
        assert_eq!(TypeSpec::parse("=i4").unwrap().byte_order, ByteOrder::Little);
        assert_eq!(TypeSpec::parse(">S4").unwrap().byte_order, ByteOrder::Big);
    }

    #[test]
    fn rejects_unsupported_widths() {
        for code in ["<u3", "<u8", "<i8", "<f2", "<f16", "|S0"] {
            let err = TypeSpec::parse(code).unwrap_err();
            assert!(
                matches!(&err, WireError::UnsupportedType { type_code, width: Some(_) } if type_code == code),
                "{code}: {err:?}"
            );
        }
    }

    #[test]
    fn rejects_unknown_kinds_and_shapes() {
        for code in ["<c8", "<U4", "<<i4", "<f", "", "b1x"] {
            assert!(TypeSpec::parse(code).is_err(), "{code} should be rejected");
        }
    }

    #[test]
    fn missing_width_reports_none() {
        assert!(matches!(
            TypeSpec::parse("<f"),
            Err(WireError::UnsupportedType { width: None, .. })
        ));
    }

    #[test]
    fn unsupported_display_names_code_and_width() {
        let err = TypeSpec::parse("<u3").unwrap_err();
        assert_eq!(err.to_string(), "unsupported type code '<u3' (width 3)");
    }

    #[test]
    fn canonical_type_codes() {
        assert_eq!(TypeSpec::parse("i4").unwrap().type_code(), "<i4");
        assert_eq!(TypeSpec::parse(">f8").unwrap().type_code(), ">f8");
        assert_eq!(TypeSpec::parse("<u1").unwrap().type_code(), "|u1");
        assert_eq!(TypeSpec::parse("a5").unwrap().type_code(), "|S5");
    }

    #[test]
    fn split_width_separates_digits() {
        assert_eq!(split_width("<f8"), ("<f", Some(8)));
        assert_eq!(split_width("|S12"), ("|S", Some(12)));
        assert_eq!(split_width("<f"), ("<f", None));
    }
}
