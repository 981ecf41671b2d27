#![warn(clippy::pedantic)]

pub mod error;
pub mod preamble;
pub mod primitive;
pub mod type_spec;

pub use error::WireError;
pub use preamble::{HEADER_TEXT_OFFSET, Preamble};
pub use type_spec::{ByteOrder, TypeKind, TypeSpec};
