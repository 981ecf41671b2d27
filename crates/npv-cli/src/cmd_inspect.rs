/// Implementation of `npv inspect`.
///
/// Reads an array file, builds a view over it, and prints the header and
/// the byte layout every field decoder was derived from.
///
/// # Output format
///
/// ```text
/// File: points.npy
/// Version: 1.0
/// Header: {'descr': [('a', '<i4'), ('b', '|S2')], 'fortran_order': False, 'shape': (2, 3), }
/// Shape: (2, 3) → 6 elements (C order)
/// Stride: 6 bytes, data at offset 96
/// Field 0: a  <i4  offset=0  width=4
/// Field 1: b  |S2  offset=4  width=2
/// ```
///
/// With `--json` only the normalized header is printed:
///
/// ```text
/// {"descr": [["a", "<i4"], ["b", "|S2"]], "fortran_order": false, "shape": [2, 3]}
/// ```
use anyhow::{Context, Result};
use npv_view::ArrayView;
use npv_view::fetch::fetch_path;
use npv_wire::Preamble;

use crate::{InspectArgs, verbose};

/// Run the `npv inspect` command.
///
/// # Errors
///
/// Returns an error if the file cannot be read or its header, types, or
/// data length are invalid.
pub async fn run(args: &InspectArgs, verbose_enabled: bool) -> Result<()> {
    let buffer = fetch_path(&args.file)
        .await
        .with_context(|| format!("failed to open {}", args.file.display()))?;
    let version = match Preamble::read_from(&buffer) {
        Ok(p) => format!("{}.{}", p.version_major, p.version_minor),
        Err(e) => format!("unknown ({e})"),
    };
    let view = ArrayView::from_buffer(buffer, None)
        .with_context(|| format!("failed to decode {}", args.file.display()))?;

    let meta = view
        .metadata()
        .context("view carries no header metadata")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&meta.to_json())?);
        return Ok(());
    }

    verbose(
        verbose_enabled,
        format_args!("{} field decoder(s) built", view.field_views().len()),
    );

    println!("File: {}", args.file.display());
    println!("Version: {version}");
    println!("Header: {}", view.header_text().unwrap_or_default().trim_end());
    println!(
        "Shape: {} → {} element{} ({} order)",
        shape_label(&meta.shape),
        view.len(),
        if view.len() == 1 { "" } else { "s" },
        if meta.fortran_order { "Fortran" } else { "C" }
    );

    if let Some(first) = view.field_views().first() {
        let decoder = first.decoder();
        println!(
            "Stride: {} bytes, data at offset {}",
            decoder.stride, decoder.data_offset
        );
    }

    for (idx, field) in view.field_views().iter().enumerate() {
        let decoder = field.decoder();
        println!(
            "Field {idx}: {}  {}  offset={}  width={}",
            field.name(),
            decoder.spec.type_code(),
            decoder.field_offset,
            decoder.spec.width
        );
    }

    Ok(())
}

/// Python-style tuple label: `()`, `(3,)`, `(2, 3)`.
fn shape_label(shape: &[usize]) -> String {
    match shape {
        [] => "()".to_string(),
        [only] => format!("({only},)"),
        dims => {
            let parts: Vec<String> = dims.iter().map(ToString::to_string).collect();
            format!("({})", parts.join(", "))
        }
    }
}
