/// Implementation of `npv show`.
///
/// Builds a view over the file and renders the selected rows and fields
/// through the default driver.
///
/// ```text
/// $ npv show points.npy --fields b,a --limit 2
/// index  b   a
/// -----  --  --
/// 0      hi  -7
/// 1      x   42
/// ```
///
/// `--header meta.json` supplies the metadata directly; the file's own
/// header text is then skipped over but never parsed.
use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use npv_driver::{DefaultDriver, DriverConfig, OutputMode, ViewDriver};
use npv_header::{HeaderMetadata, HeaderParser};
use npv_view::ArrayView;

use crate::{Mode, ShowArgs, verbose};

/// Run the `npv show` command.
///
/// # Errors
///
/// Returns an error if the file cannot be opened, a field or index is
/// invalid, or the output file cannot be written.
pub async fn run(args: &ShowArgs, verbose_enabled: bool) -> Result<()> {
    let started = Instant::now();
    let header = match &args.header {
        Some(path) => Some(load_header(path)?),
        None => None,
    };
    let view = ArrayView::from_path(&args.file, header)
        .await
        .with_context(|| format!("failed to open {}", args.file.display()))?;
    verbose(
        verbose_enabled,
        format_args!(
            "opened {} ({} rows, fields {:?}) in {:?}",
            args.file.display(),
            view.len(),
            view.field_names(),
            started.elapsed()
        ),
    );

    let config = driver_config(args);
    let rendered = DefaultDriver
        .render(&view, &config)
        .context("failed to render rows")?;
    verbose(
        verbose_enabled,
        format_args!("rendered in {:?}", started.elapsed()),
    );

    match &args.output {
        Some(path) => fs::write(path, format!("{rendered}\n"))
            .with_context(|| format!("cannot write {}", path.display()))?,
        None => println!("{rendered}"),
    }
    Ok(())
}

fn load_header(path: &Path) -> Result<HeaderMetadata> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("cannot read header {}", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&text)
        .with_context(|| format!("{} is not JSON", path.display()))?;
    HeaderParser::parse_json(value)
        .with_context(|| format!("{} does not describe a valid header", path.display()))
}

fn driver_config(args: &ShowArgs) -> DriverConfig {
    DriverConfig {
        mode: match args.mode {
            Mode::Table => OutputMode::Table,
            Mode::Csv => OutputMode::Csv,
            Mode::Json => OutputMode::JsonLines,
        },
        fields: args.fields.clone(),
        indices: args.index.clone(),
        limit: args.limit,
        show_index: !args.no_index,
    }
}
