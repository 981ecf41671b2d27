use serde_json::{Map, Value};

use crate::driver::RowSet;
use crate::error::DriverError;

/// One JSON object per row, keys in column order.
///
/// ```text
/// {"index":0,"a":-7,"b":"hi"}
/// {"index":1,"a":42,"b":"x"}
/// ```
///
/// Keys keep column order through serde_json's `preserve_order` map. A
/// field literally named `index` overwrites the index column's value.
pub struct JsonLinesRenderer;

impl JsonLinesRenderer {
    /// # Errors
    ///
    /// Returns `DriverError::Json` if a value fails to serialize.
    pub fn render(set: &RowSet<'_>) -> Result<String, DriverError> {
        let mut lines = Vec::with_capacity(set.rows.len());
        for (index, row) in set.indices.iter().zip(&set.rows) {
            let mut object = Map::with_capacity(set.names.len() + 1);
            if set.show_index {
                object.insert("index".to_string(), Value::from(*index));
            }
            for (name, value) in set.names.iter().zip(row.values()) {
                object.insert((*name).to_string(), serde_json::to_value(value)?);
            }
            lines.push(serde_json::to_string(&Value::Object(object))?);
        }
        Ok(lines.join("\n"))
    }
}
