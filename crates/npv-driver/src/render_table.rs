use crate::driver::RowSet;

/// Aligned plain-text table.
///
/// Columns are left-aligned, padded to their widest cell, and separated
/// by two spaces. A dashed rule sits under the header. Trailing spaces
/// are trimmed from every line.
///
/// ```text
/// index  a   b
/// -----  --  --
/// 0      -7  hi
/// 1      42  x
/// ```
pub struct TableRenderer;

impl TableRenderer {
    pub fn render(set: &RowSet<'_>) -> String {
        let header = set.header();
        let body: Vec<Vec<String>> = set.cells().collect();

        let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
        for row in &body {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();

        let mut lines = Vec::with_capacity(body.len() + 2);
        lines.push(Self::line(&header, &widths));
        lines.push(Self::line(&rule, &widths));
        for row in &body {
            lines.push(Self::line(row, &widths));
        }
        lines.join("\n")
    }

    fn line(cells: &[String], widths: &[usize]) -> String {
        let padded: Vec<String> = cells
            .iter()
            .zip(widths)
            .map(|(cell, &width)| format!("{cell:<width$}"))
            .collect();
        padded.join("  ").trim_end().to_string()
    }
}
