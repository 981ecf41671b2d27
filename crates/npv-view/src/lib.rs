#![warn(clippy::pedantic)]

pub mod decoder;
pub mod error;
pub mod fetch;
pub mod field;
pub mod request;
pub mod value;
pub mod view;

#[cfg(test)]
mod test_util;

pub use decoder::FieldDecoder;
pub use error::ViewError;
pub use field::FieldView;
pub use request::{Request, Selection};
pub use value::{Row, Value};
pub use view::{ArrayView, Rows};
