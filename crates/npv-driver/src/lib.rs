#![warn(clippy::pedantic)]

pub mod config;
pub mod driver;
pub mod error;
pub mod render_csv;
pub mod render_json;
pub mod render_table;

#[cfg(test)]
mod test_util;

pub use config::{DriverConfig, OutputMode};
pub use driver::{DefaultDriver, ViewDriver};
pub use error::DriverError;
