use crate::driver::RowSet;

/// Comma-separated values with a header line.
///
/// Cells containing a comma, double quote, or line break are wrapped in
/// double quotes with embedded quotes doubled.
pub struct CsvRenderer;

impl CsvRenderer {
    pub fn render(set: &RowSet<'_>) -> String {
        let mut lines = vec![Self::line(&set.header())];
        lines.extend(set.cells().map(|row| Self::line(&row)));
        lines.join("\n")
    }

    fn line(cells: &[String]) -> String {
        cells
            .iter()
            .map(|c| escape(c))
            .collect::<Vec<_>>()
            .join(",")
    }
}

fn escape(cell: &str) -> String {
    if cell.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}
