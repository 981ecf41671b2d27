/// Implementation of `npv validate`.
///
/// Runs every construction-time check and reports either a series of
/// success checkmarks (`✓`) or a diagnostic failure line (`✗`).
///
/// # Success output
///
/// ```text
/// ✓ Preamble: \x93NUMPY v1.0, header 118 bytes
/// ✓ Header: 2 fields, shape [2, 3]
/// ✓ Types: all field types supported, stride 6 bytes
/// ✓ Data: 6 elements present
/// ```
///
/// # Failure output
///
/// ```text
/// ✗ Error: unsupported type — '<u3' (width 3)
/// ```
///
/// Array construction itself never checks the magic string; this command
/// does, since it is answering "is this a well-formed file".
use anyhow::{Context, Result, anyhow};
use npv_view::fetch::fetch_path;
use npv_view::{ArrayView, ViewError};
use npv_wire::Preamble;

use crate::{ValidateArgs, verbose};

/// Run the `npv validate` command.
///
/// # Errors
///
/// Returns an error if the file cannot be read or fails any check.
pub async fn run(args: &ValidateArgs, verbose_enabled: bool) -> Result<()> {
    let buffer = fetch_path(&args.file)
        .await
        .with_context(|| format!("cannot read {}", args.file.display()))?;
    verbose(verbose_enabled, format_args!("read {} bytes", buffer.len()));

    let preamble = match Preamble::read_from(&buffer) {
        Ok(p) => p,
        Err(e) => {
            println!("✗ Error: invalid preamble — {e}");
            return Err(anyhow!("validation failed"));
        }
    };
    println!(
        "✓ Preamble: \\x93NUMPY v{}.{}, header {} bytes",
        preamble.version_major, preamble.version_minor, preamble.header_len
    );

    match ArrayView::from_buffer(buffer, None) {
        Ok(view) => {
            if let Some(text) = view.header_text() {
                verbose(verbose_enabled, format_args!("header text {text:?}"));
            }
            let stride = view
                .field_views()
                .first()
                .map_or(0, |f| f.decoder().stride);
            let shape = view.metadata().map(|m| m.shape.clone()).unwrap_or_default();
            println!(
                "✓ Header: {} field{}, shape {shape:?}",
                view.field_views().len(),
                if view.field_views().len() == 1 { "" } else { "s" }
            );
            println!("✓ Types: all field types supported, stride {stride} bytes");
            println!("✓ Data: {} elements present", view.len());
            Ok(())
        }
        Err(e) => {
            println!("✗ Error: {}", view_error_diagnostic(&e));
            Err(anyhow!("validation failed"))
        }
    }
}

// ── Error formatting ──────────────────────────────────────────────────────────

/// Converts a construction-time `ViewError` into a diagnostic line.
///
/// ```text
/// ┌──────────────────┬─────────────────────────────────────────────┐
/// │ ViewError        │ Diagnostic                                  │
/// ├──────────────────┼─────────────────────────────────────────────┤
/// │ HeaderParse      │ "undecodable header — <text>"               │
/// │ UnsupportedType  │ "unsupported type — '<code>' (width N)"     │
/// │ TruncatedData    │ "data truncated — need N bytes, have M"     │
/// │ other            │ "<error Display>"                           │
/// └──────────────────┴─────────────────────────────────────────────┘
/// ```
fn view_error_diagnostic(e: &ViewError) -> String {
    match e {
        ViewError::HeaderParse { header } => {
            format!("undecodable header — {:?}", header.trim_end())
        }
        ViewError::UnsupportedType {
            type_code,
            width: Some(width),
        } => format!("unsupported type — '{type_code}' (width {width})"),
        ViewError::UnsupportedType {
            type_code,
            width: None,
        } => format!("unsupported type — '{type_code}' (no width)"),
        ViewError::TruncatedData { expected, actual } => {
            format!("data truncated — need {expected} bytes, have {actual}")
        }
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostics_name_the_problem() {
        let e = ViewError::UnsupportedType {
            type_code: "<u3".into(),
            width: Some(3),
        };
        assert_eq!(view_error_diagnostic(&e), "unsupported type — '<u3' (width 3)");

        let e = ViewError::TruncatedData {
            expected: 40,
            actual: 32,
        };
        assert_eq!(
            view_error_diagnostic(&e),
            "data truncated — need 40 bytes, have 32"
        );

        let e = ViewError::HeaderParse {
            header: "{oops}  \n".into(),
        };
        assert_eq!(view_error_diagnostic(&e), "undecodable header — \"{oops}\"");
    }
}
