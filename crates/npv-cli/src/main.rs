/// npv command-line tool for `.npy` array files, read through lazily
/// decoded views.
///
/// # Command overview
///
/// ```text
/// npv <COMMAND> [OPTIONS]
///
/// Commands:
///   inspect    Print header, shape, and field layout of an array file
///   validate   Check an array file for structural correctness
///   show       Print rows as a table, CSV, or JSON Lines
///
/// Global options:
///   -v, --verbose    Header text, layout, and timings on stderr
/// ```
///
/// # Exit codes
///
/// | Code | Meaning                                        |
/// |------|------------------------------------------------|
/// | 0    | Command completed                              |
/// | 1    | Unreadable or malformed file, bad field/index  |
///
/// Diagnostics and `error:` lines go to stderr; stdout carries only the
/// command's output.
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};

mod cmd_inspect;
mod cmd_show;
mod cmd_validate;

// ── CLI root ──────────────────────────────────────────────────────────────────

/// The npv command-line tool.
///
/// Inspect, validate, and print `.npy` array files.
#[derive(Parser)]
#[command(name = "npv", version, about = "Lazy typed views over .npy files")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Print diagnostics (header text, layout, timings) to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,
}

// ── Sub-commands ──────────────────────────────────────────────────────────────

#[derive(Subcommand)]
enum Commands {
    /// Print header, shape, and field layout of an array file.
    Inspect(InspectArgs),
    /// Check an array file for structural correctness.
    Validate(ValidateArgs),
    /// Print rows as a table, CSV, or JSON Lines.
    Show(ShowArgs),
}

// ── Argument structs ──────────────────────────────────────────────────────────

/// Arguments for `npv inspect`.
#[derive(clap::Args)]
pub struct InspectArgs {
    /// Path to the `.npy` file to inspect.
    pub file: PathBuf,

    /// Print the normalized header as JSON instead of the text summary.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `npv validate`.
///
/// Exits with code 0 on success and code 1 on any structural problem.
#[derive(clap::Args)]
pub struct ValidateArgs {
    /// Path to the `.npy` file to validate.
    pub file: PathBuf,
}

/// Arguments for `npv show`.
///
/// ```text
/// ┌──────────────┬──────────────────────────────────────────────────┐
/// │ Flag         │ Values / default                                 │
/// ├──────────────┼──────────────────────────────────────────────────┤
/// │ --mode       │ table (default) | csv | json                     │
/// │ --fields     │ comma-separated field names, in output order     │
/// │ --index      │ comma-separated row indices (repeatable)         │
/// │ --limit      │ maximum rows when --index is not given           │
/// │ --no-index   │ omit the index column                            │
/// │ --header     │ JSON metadata used instead of the file's header  │
/// │ -o/--output  │ write to file instead of stdout                  │
/// └──────────────┴──────────────────────────────────────────────────┘
/// ```
#[derive(clap::Args)]
pub struct ShowArgs {
    /// Path to the `.npy` file to print.
    pub file: PathBuf,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Mode::Table)]
    pub mode: Mode,

    /// Fields to print, in order (e.g. `b,a`).
    #[arg(long, value_delimiter = ',')]
    pub fields: Option<Vec<String>>,

    /// Row indices to print, in order (e.g. `0,5,2`).
    #[arg(long, value_delimiter = ',')]
    pub index: Option<Vec<usize>>,

    /// Maximum number of rows when `--index` is not given.
    #[arg(long)]
    pub limit: Option<usize>,

    /// Omit the index column.
    #[arg(long)]
    pub no_index: bool,

    /// JSON file holding `{descr, fortran_order, shape}` to use in place
    /// of the file's own header.
    #[arg(long, value_name = "JSON")]
    pub header: Option<PathBuf>,

    /// Write rendered output to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// `--mode` values for `npv show`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    Table,
    Csv,
    Json,
}

/// Write a diagnostic line to stderr when `--verbose` is set.
pub fn verbose(enabled: bool, message: std::fmt::Arguments<'_>) {
    if enabled {
        eprintln!("verbose: {message}");
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Inspect(args) => cmd_inspect::run(&args, cli.verbose).await,
        Commands::Validate(args) => cmd_validate::run(&args, cli.verbose).await,
        Commands::Show(args) => cmd_show::run(&args, cli.verbose).await,
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}
