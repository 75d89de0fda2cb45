//! Static semantic analyzer for the Base language: name resolution followed
//! by type checking over an AST handed down from an external parser (spec
//! §1, §6).
//!
//! Grounded on the teacher's crate shape (`y-lang`'s `src/lib.rs` re-exports
//! its pipeline stages for both the library and its `bin/` front-ends).

pub mod ast;
pub mod checker;
pub mod diagnostics;
pub mod error;
pub mod resolver;
pub mod symbol;
pub mod symtab;
pub mod types;

use ast::Program;
use diagnostics::{Diagnostic, DiagnosticSink};
use error::SemaBug;
use resolver::Resolver;
use symtab::SymTable;

/// Runs the full pipeline — name resolution, then type checking — over
/// `program`, collecting diagnostics into `sink`. Returns the outermost
/// scope's symbol table left behind by resolution (spec §4.3: "downstream
/// consumers may inspect it"), e.g. for a `--dump-symbols` debugging flag.
///
/// Resolution and checking are sequential and idempotent (spec §2): the
/// entire tree is resolved before any type checking begins, and errors in
/// one do not prevent the other from running to completion. Only an
/// internal invariant violation (`SemaBug`) short-circuits the run.
pub fn analyze(program: &Program, sink: &mut dyn DiagnosticSink) -> Result<SymTable, SemaBug> {
    let scope = Resolver::new(sink).resolve(program)?;
    checker::Checker::new(sink).check(program);
    Ok(scope)
}

/// Convenience wrapper returning diagnostics as a plain `Vec`, the shape
/// most tests and the CLI want.
pub fn analyze_collecting(program: &Program) -> Result<(Vec<Diagnostic>, SymTable), SemaBug> {
    let mut diagnostics = Vec::new();
    let scope = analyze(program, &mut diagnostics)?;
    Ok((diagnostics, scope))
}
