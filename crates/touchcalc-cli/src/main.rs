//! touchcalc CLI - document conversion tool

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use touchcalc::prelude::*;
use touchcalc::{decode, default_document, encode, validate, LineTerminator};

#[derive(Parser)]
#[command(name = "touchcalc")]
#[command(author, version, about = "Convert and check touchcalc spreadsheet documents")]
struct Cli {
    /// Log dropped lines and other details (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert compact coordinate:value text to an expanded document
    Import {
        /// Compact input file (default: stdin)
        input: Option<PathBuf>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Size the sheet footer to cover every cell
        #[arg(long)]
        fit_sheet: bool,
    },

    /// Convert an expanded document to compact coordinate:value text
    Export {
        /// Expanded input file (default: stdin)
        input: Option<PathBuf>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Terminate lines with CRLF
        #[arg(long)]
        crlf: bool,
    },

    /// Check the structure of an expanded document
    Validate {
        /// Expanded input file (default: stdin)
        input: Option<PathBuf>,
    },

    /// Write the welcome document for a new spreadsheet
    New {
        /// Storage backend label shown in the document
        #[arg(short, long, default_value = "local")]
        backend: String,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Decode an A1 coordinate, or encode a row/column pair
    Coord {
        /// Coordinate to decode (e.g. AA12)
        #[arg(required_unless_present = "row", conflicts_with_all = ["row", "col"])]
        coord: Option<String>,

        /// Row to encode (1-based)
        #[arg(long, requires = "col")]
        row: Option<u32>,

        /// Column to encode (1-based)
        #[arg(long, requires = "row")]
        col: Option<u32>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Import {
            input,
            output,
            fit_sheet,
        } => import(input.as_deref(), output.as_deref(), fit_sheet),
        Commands::Export {
            input,
            output,
            crlf,
        } => export(input.as_deref(), output.as_deref(), crlf),
        Commands::Validate { input } => check(input.as_deref()),
        Commands::New { backend, output } => {
            write_output(output.as_deref(), &default_document(&backend))
        }
        Commands::Coord { coord, row, col } => coordinate(coord.as_deref(), row, col),
    }
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .try_init()
        .ok();
}

fn import(input: Option<&Path>, output: Option<&Path>, fit_sheet: bool) -> Result<()> {
    let text = read_input(input)?;
    let options = MscReadOptions {
        fit_sheet_to_cells: fit_sheet,
        ..Default::default()
    };

    let document = MscReader::read(&text, &options);
    tracing::info!(cells = document.cells.len(), "imported compact text");

    write_output(output, &document.to_string())
}

fn export(input: Option<&Path>, output: Option<&Path>, crlf: bool) -> Result<()> {
    let text = read_input(input)?;
    if let Err(e) = validate(&text) {
        tracing::warn!("exporting a document that does not validate: {e}");
    }

    let options = MscWriteOptions {
        line_terminator: if crlf {
            LineTerminator::CRLF
        } else {
            LineTerminator::LF
        },
    };

    write_output(output, &MscWriter::convert_with_options(&text, &options))
}

fn check(input: Option<&Path>) -> Result<()> {
    let text = read_input(input)?;
    let name = input
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "<stdin>".to_string());

    validate(&text).with_context(|| format!("'{}' is not a valid document", name))?;
    println!("ok");
    Ok(())
}

fn coordinate(coord: Option<&str>, row: Option<u32>, col: Option<u32>) -> Result<()> {
    match (coord, row, col) {
        (Some(coord), _, _) => {
            let (row, col) = decode(coord)?;
            println!("{} {}", row, col);
        }
        (None, Some(row), Some(col)) => println!("{}", encode(row, col)),
        _ => bail!("pass a coordinate or both --row and --col"),
    }
    Ok(())
}

/// Read the whole input file, or stdin when no path is given
fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read '{}'", path.display())),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

/// Write `text` plus a trailing newline to the output file, or stdout
fn write_output(output: Option<&Path>, text: &str) -> Result<()> {
    let mut contents = String::with_capacity(text.len() + 1);
    contents.push_str(text);
    if !text.is_empty() {
        contents.push('\n');
    }

    if let Some(path) = output {
        std::fs::write(path, &contents)
            .with_context(|| format!("Failed to write '{}'", path.display()))?;
        eprintln!("Wrote '{}'", path.display());
    } else {
        io::stdout()
            .write_all(contents.as_bytes())
            .context("Failed to write to stdout")?;
    }

    Ok(())
}
