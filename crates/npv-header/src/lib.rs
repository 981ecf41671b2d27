#![warn(clippy::pedantic)]

pub mod metadata;
pub mod parser;
pub mod scanner;

pub use metadata::{Descr, FieldDescr, HeaderMetadata, SINGLE_FIELD_NAME};
pub use parser::HeaderParser;
