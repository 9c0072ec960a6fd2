//! Lox scanner command-line driver

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::{debug, info};

use lox_scanner::feedback::ScanReport;
use lox_scanner::tokenize;

/// Exit status for source that contained lexical errors
const EXIT_LEX_ERROR: i32 = 65;

/// Exit status for bad invocations and I/O failures
const EXIT_FAILURE: i32 = 1;

/// Lox scanner
#[derive(Parser, Debug)]
#[command(name = "lox")]
#[command(version)]
#[command(about = "Lexical scanner for the Lox scripting language")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the tokens of a source file
    Tokenize {
        /// Input source file
        input: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    /// One `KIND lexeme literal` line per token
    Text,
    /// A single JSON report
    Json,
}

fn main() {
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match usage_status(&e) {
            Some(code) => {
                let _ = e.print();
                process::exit(code);
            }
            // --help and --version
            None => e.exit(),
        },
    };

    let status = match &cli.command {
        Commands::Tokenize { input, format } => tokenize_file(input, *format),
    };

    match status {
        Ok(true) => {}
        Ok(false) => process::exit(EXIT_LEX_ERROR),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(EXIT_FAILURE);
        }
    }
}

/// Exit status for an argument error, or `None` when clap is just printing
/// help or version text
fn usage_status(err: &clap::Error) -> Option<i32> {
    if err.use_stderr() {
        Some(EXIT_FAILURE)
    } else {
        None
    }
}

/// Scan a file and print the result. Returns false if the source had
/// lexical errors.
fn tokenize_file(input: &Path, format: Format) -> Result<bool> {
    info!("tokenizing {}", input.display());

    let source = fs::read_to_string(input)
        .with_context(|| format!("could not read {}", input.display()))?;
    debug!("read {} bytes", source.len());

    let output = tokenize(&source);

    for diagnostic in &output.diagnostics {
        eprintln!("{}", diagnostic);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        Format::Text => {
            for token in &output.tokens {
                writeln!(out, "{}", token).context("could not write tokens")?;
            }
        }
        Format::Json => {
            let report = ScanReport::new(&input.to_string_lossy(), &output);
            let json = report.to_json().context("could not encode report")?;
            writeln!(out, "{}", json).context("could not write report")?;
        }
    }
    out.flush().context("could not flush stdout")?;

    Ok(!output.had_error())
}
