//! Internal invariant errors (spec §7.2). Never triggered by any valid AST;
//! surfacing one means the analyzer (not the source program) is broken.
//! Grounded on the teacher's `log::error!` + `std::process::exit(-1)`
//! pattern in `ast/node.rs`, ported to a typed error so library code never
//! calls `exit` itself — the CLI is the one place that turns this into a
//! nonzero exit disposition.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SemaBug {
    #[error("symbol table operation attempted on an empty scope stack")]
    EmptyTable,

    #[error("duplicate declaration of `{0}` reached the symbol table layer unchecked")]
    DuplicateName(String),

    #[error("illegal argument passed to a symbol table operation")]
    IllegalArgument,

    #[error("unexpected AST shape encountered during analysis: {0}")]
    UnexpectedShape(String),
}
