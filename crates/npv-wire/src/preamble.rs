use std::ops::Range;

use crate::error::WireError;
use crate::primitive::{read_array, read_u16};
use crate::type_spec::ByteOrder;

/// Magic string opening every array file: `\x93NUMPY`.
pub const MAGIC: [u8; 6] = [0x93, b'N', b'U', b'M', b'P', b'Y'];

/// Size of the fixed preamble (magic + major + minor).
pub const PREAMBLE_SIZE: usize = 8;

/// Offset of the little-endian `u16` header length.
pub const HEADER_LEN_OFFSET: usize = 8;

/// Offset of the first header text byte.
pub const HEADER_TEXT_OFFSET: usize = 10;

/// The fixed preamble plus the header length that follows it.
///
/// ```text
/// ┌────────┬─────────┬──────────────────────────────────┐
/// │ Offset │ Size    │ Description                      │
/// ├────────┼─────────┼──────────────────────────────────┤
/// │ 0x00   │ 6 bytes │ Magic: "\x93NUMPY"               │
/// │ 0x06   │ 1 byte  │ Version major                    │
/// │ 0x07   │ 1 byte  │ Version minor                    │
/// │ 0x08   │ 2 bytes │ Header length L (u16 LE)         │
/// │ 0x0A   │ L bytes │ Header text                      │
/// └────────┴─────────┴──────────────────────────────────┘
/// ```
///
/// Array construction never validates the magic; only tooling that wants
/// to report on a file's provenance calls [`Preamble::read_from`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Preamble {
    pub version_major: u8,
    pub version_minor: u8,
    pub header_len: u16,
}

impl Preamble {
    /// Parse and validate the preamble at the start of `buf`.
    ///
    /// # Errors
    ///
    /// - [`WireError::UnexpectedEof`] if `buf` is shorter than 10 bytes.
    /// - [`WireError::InvalidMagic`] if the magic string doesn't match.
    pub fn read_from(buf: &[u8]) -> Result<Self, WireError> {
        let found: [u8; 6] =
            read_array(buf, 0).ok_or(WireError::UnexpectedEof { offset: buf.len() })?;
        if found != MAGIC {
            return Err(WireError::InvalidMagic { found });
        }

        let header_len = header_len(buf)?;
        Ok(Self {
            version_major: buf[6],
            version_minor: buf[7],
            header_len,
        })
    }

    /// Offset of the first data byte.
    pub fn data_offset(&self) -> usize {
        HEADER_TEXT_OFFSET + usize::from(self.header_len)
    }
}

/// Read the header length field at offset 8.
///
/// # Errors
///
/// Returns [`WireError::UnexpectedEof`] if `buf` is shorter than 10 bytes.
pub fn header_len(buf: &[u8]) -> Result<u16, WireError> {
    read_u16(buf, HEADER_LEN_OFFSET, ByteOrder::Little)
        .ok_or(WireError::UnexpectedEof { offset: buf.len() })
}

/// Byte range of the header text, `[10, 10 + L)`.
///
/// The data region starts at `range.end`.
///
/// # Errors
///
/// Returns [`WireError::UnexpectedEof`] if the buffer ends before the
/// header text does.
pub fn header_range(buf: &[u8]) -> Result<Range<usize>, WireError> {
    let end = HEADER_TEXT_OFFSET + usize::from(header_len(buf)?);
    if buf.len() < end {
        return Err(WireError::UnexpectedEof { offset: buf.len() });
    }
    Ok(HEADER_TEXT_OFFSET..end)
}
