//! Command-line front-end. Reads a JSON-encoded `Program` (spec §6 "consumed
//! from the parser") and runs name resolution + type checking over it,
//! printing diagnostics and exiting non-zero if any were emitted.
//!
//! Grounded on the teacher's `bin/why.rs`: `clap::Parser` args,
//! `simple_logger` at `Warn`, `log::error!` + `std::process::exit(-1)` on
//! failure.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::error;

use base_sema::ast::Program;
use base_sema::{analyze_collecting, diagnostics::Diagnostic};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Path to a JSON-encoded AST (see `base_sema::ast::Program`).
    #[arg(index = 1)]
    file: PathBuf,

    /// Print diagnostics as a JSON array instead of `line:column: message`.
    #[arg(long)]
    json: bool,

    /// Print the outermost scope's symbol table after a clean run.
    #[arg(long)]
    dump_symbols: bool,
}

fn main() -> Result<()> {
    simple_logger::init_with_level(log::Level::Warn).unwrap();
    let args = Cli::parse();

    let input = fs::read_to_string(&args.file)
        .with_context(|| format!("could not read file: '{}'", args.file.display()))?;
    let program: Program = serde_json::from_str(&input)
        .with_context(|| format!("'{}' is not a valid AST document", args.file.display()))?;

    let (diagnostics, scope) = match analyze_collecting(&program) {
        Ok(result) => result,
        Err(bug) => {
            error!("internal analyzer error: {bug}");
            std::process::exit(-1);
        }
    };

    if args.dump_symbols && diagnostics.is_empty() {
        println!("{scope}");
    }

    print_diagnostics(&diagnostics, args.json);

    if !diagnostics.is_empty() {
        std::process::exit(1);
    }
    Ok(())
}

fn print_diagnostics(diagnostics: &[Diagnostic], as_json: bool) {
    if as_json {
        match serde_json::to_string_pretty(diagnostics) {
            Ok(json) => println!("{json}"),
            Err(err) => error!("failed to serialize diagnostics: {err}"),
        }
        return;
    }
    for diagnostic in diagnostics {
        println!("{diagnostic}");
    }
}
