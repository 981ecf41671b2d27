use npv_view::{ArrayView, Row};

use crate::config::{DriverConfig, OutputMode};
use crate::error::DriverError;
use crate::render_csv::CsvRenderer;
use crate::render_json::JsonLinesRenderer;
use crate::render_table::TableRenderer;

/// Renders an [`ArrayView`] into text.
///
/// Implementations are stateless; all settings come through
/// [`DriverConfig`].
///
/// ```text
/// ArrayView ──▶ ViewDriver::render() ──▶ String
///                      │
///                DriverConfig
///         (mode, fields, indices, limit, show_index)
/// ```
pub trait ViewDriver {
    /// Render the rows selected by `config`.
    ///
    /// # Errors
    ///
    /// - `DriverError::View` if `config.fields` names an unknown field or
    ///   `config.indices` holds an out-of-range index.
    /// - `DriverError::NoFields` if the projection is empty.
    fn render(&self, view: &ArrayView, config: &DriverConfig) -> Result<String, DriverError>;
}

/// Rows selected for rendering, with the names and indices that label them.
pub struct RowSet<'a> {
    pub names: Vec<&'a str>,
    pub indices: Vec<usize>,
    pub rows: Vec<Row>,
    pub show_index: bool,
}

impl RowSet<'_> {
    /// Column labels, including `index` when shown.
    pub fn header(&self) -> Vec<String> {
        let index = self.show_index.then(|| "index".to_string());
        index
            .into_iter()
            .chain(self.names.iter().map(|n| (*n).to_string()))
            .collect()
    }

    /// Each row as display strings, including its index when shown.
    pub fn cells(&self) -> impl Iterator<Item = Vec<String>> + '_ {
        self.indices.iter().zip(&self.rows).map(move |(i, row)| {
            let index = self.show_index.then(|| i.to_string());
            index
                .into_iter()
                .chain(row.values().iter().map(ToString::to_string))
                .collect()
        })
    }
}

/// Default driver: applies the projection and row selection, then
/// dispatches on `config.mode`.
///
/// ```text
/// ┌───────────┐     ┌──────────────┐     ┌───────────────────┐
/// │ ArrayView │────▶│ project +    │────▶│ TableRenderer     │
/// │           │     │ select rows  │     │ CsvRenderer       │
/// │           │     │              │     │ JsonLinesRenderer │
/// └───────────┘     └──────────────┘     └───────────────────┘
/// ```
pub struct DefaultDriver;

impl ViewDriver for DefaultDriver {
    fn render(&self, view: &ArrayView, config: &DriverConfig) -> Result<String, DriverError> {
        let projected;
        let view = match &config.fields {
            Some(names) => {
                projected = view.fields(names)?;
                &projected
            }
            None => view,
        };

        let names = view.field_names();
        if names.is_empty() {
            return Err(DriverError::NoFields);
        }

        let indices = match &config.indices {
            Some(indices) => indices.clone(),
            None => {
                let end = config.limit.map_or(view.len(), |l| l.min(view.len()));
                (0..end).collect()
            }
        };
        let rows = view.rows(&indices)?;

        let set = RowSet {
            names,
            indices,
            rows,
            show_index: config.show_index,
        };

        match config.mode {
            OutputMode::Table => Ok(TableRenderer::render(&set)),
            OutputMode::Csv => Ok(CsvRenderer::render(&set)),
            OutputMode::JsonLines => JsonLinesRenderer::render(&set),
        }
    }
}

#[cfg(test)]
mod tests {
    use npv_view::ViewError;

    use super::*;
    use crate::test_util::{record_view, uint8_view};

    #[test]
    fn limit_caps_rows() {
        let config = DriverConfig {
            mode: OutputMode::Csv,
            limit: Some(2),
            ..DriverConfig::default()
        };
        let out = DefaultDriver.render(&uint8_view(), &config).unwrap();
        assert_eq!(out, "index,value\n0,1\n1,2");
    }

    #[test]
    fn limit_larger_than_view_renders_everything() {
        let config = DriverConfig {
            mode: OutputMode::Csv,
            limit: Some(100),
            show_index: false,
            ..DriverConfig::default()
        };
        let out = DefaultDriver.render(&uint8_view(), &config).unwrap();
        assert_eq!(out, "value\n1\n2\n255");
    }

    #[test]
    fn explicit_indices_keep_request_order() {
        let config = DriverConfig {
            mode: OutputMode::Csv,
            indices: Some(vec![2, 0]),
            ..DriverConfig::default()
        };
        let out = DefaultDriver.render(&uint8_view(), &config).unwrap();
        assert_eq!(out, "index,value\n2,255\n0,1");
    }

    #[test]
    fn field_projection_reorders_columns() {
        let config = DriverConfig {
            mode: OutputMode::Csv,
            fields: Some(vec!["b".into(), "a".into()]),
            show_index: false,
            ..DriverConfig::default()
        };
        let out = DefaultDriver.render(&record_view(), &config).unwrap();
        assert_eq!(out, "b,a\nhi,-7\nx,42");
    }

    #[test]
    fn unknown_field_is_reported() {
        let config = DriverConfig {
            fields: Some(vec!["nope".into()]),
            ..DriverConfig::default()
        };
        let err = DefaultDriver.render(&record_view(), &config).unwrap_err();
        assert!(matches!(
            err,
            DriverError::View(ViewError::UnknownField { ref name }) if name == "nope"
        ));
    }

    #[test]
    fn empty_projection_is_rejected() {
        let config = DriverConfig {
            fields: Some(vec![]),
            ..DriverConfig::default()
        };
        assert!(matches!(
            DefaultDriver.render(&record_view(), &config),
            Err(DriverError::NoFields)
        ));
    }

    #[test]
    fn out_of_range_index_is_reported() {
        let config = DriverConfig {
            indices: Some(vec![7]),
            ..DriverConfig::default()
        };
        assert!(matches!(
            DefaultDriver.render(&uint8_view(), &config),
            Err(DriverError::View(ViewError::IndexOutOfBounds { index: 7, size: 3 }))
        ));
    }
}
