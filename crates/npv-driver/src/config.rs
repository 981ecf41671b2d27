/// Configuration for rendering an [`ArrayView`](npv_view::ArrayView) as text.
///
/// ```text
/// ┌────────────┬────────────────────────────────────────────────────┐
/// │ Field      │ Purpose                                            │
/// ├────────────┼────────────────────────────────────────────────────┤
/// │ mode       │ Selects table, CSV, or JSON Lines output           │
/// │ fields     │ Optional projection, in output column order        │
/// │ indices    │ Optional explicit rows, in output order            │
/// │ limit      │ Maximum rows rendered when `indices` is unset      │
/// │ show_index │ Prepend each row's index as its own column         │
/// └────────────┴────────────────────────────────────────────────────┘
/// ```
///
/// When `fields` is `None` every field is rendered in declared order.
/// When `indices` is `None` rows `0..min(limit, len)` are rendered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DriverConfig {
    pub mode: OutputMode,
    pub fields: Option<Vec<String>>,
    pub indices: Option<Vec<usize>>,
    pub limit: Option<usize>,
    pub show_index: bool,
}

impl Default for DriverConfig {
    /// Table mode, all fields, all rows, index column shown.
    fn default() -> Self {
        Self {
            mode: OutputMode::Table,
            fields: None,
            indices: None,
            limit: None,
            show_index: true,
        }
    }
}

/// Output format.
///
/// ```text
/// ┌───────────┬──────────────────────────────────────────────┐
/// │ Mode      │ Example row                                  │
/// ├───────────┼──────────────────────────────────────────────┤
/// │ Table     │ 0      -7  hi                                │
/// │ Csv       │ 0,-7,hi                                      │
/// │ JsonLines │ {"index":0,"a":-7,"b":"hi"}                  │
/// └───────────┴──────────────────────────────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputMode {
    Table,
    Csv,
    JsonLines,
}
