//! Bounds-checked primitive reads over a borrowed byte slice.
//!
//! Every reader returns `None` instead of panicking when the requested
//! bytes run past the end of the slice. None of the numeric readers
//! allocate.

use crate::type_spec::ByteOrder;

/// Copy `N` bytes starting at `pos` into a fixed array.
pub fn read_array<const N: usize>(buf: &[u8], pos: usize) -> Option<[u8; N]> {
    let end = pos.checked_add(N)?;
    buf.get(pos..end)?.try_into().ok()
}

// One reader per primitive. The macro keeps the byte-order dispatch in a
// single place; each expansion is a plain `from_le_bytes`/`from_be_bytes`.
macro_rules! reader {
    ($name:ident, $ty:ty) => {
        #[doc = concat!("Read a `", stringify!($ty), "` at `pos` in the given byte order.")]
        pub fn $name(buf: &[u8], pos: usize, order: ByteOrder) -> Option<$ty> {
            let bytes = read_array::<{ size_of::<$ty>() }>(buf, pos)?;
            Some(match order {
                ByteOrder::Little => <$ty>::from_le_bytes(bytes),
                ByteOrder::Big => <$ty>::from_be_bytes(bytes),
            })
        }
    };
}

reader!(read_u8, u8);
reader!(read_u16, u16);
reader!(read_u32, u32);
reader!(read_i8, i8);
reader!(read_i16, i16);
reader!(read_i32, i32);
reader!(read_f32, f32);
reader!(read_f64, f64);

/// Read `width` bytes at `pos` as single-byte characters, dropping
/// trailing NUL padding.
pub fn read_fixed_str(buf: &[u8], pos: usize, width: usize) -> Option<String> {
    let bytes = buf.get(pos..pos.checked_add(width)?)?;
    let end = bytes.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
    Some(latin1(&bytes[..end]))
}

/// Interpret each byte as one character (ISO-8859-1).
pub fn latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}
