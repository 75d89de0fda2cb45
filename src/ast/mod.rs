//! AST consumed by this crate (spec §3.4, §6). Lexing and parsing are
//! external collaborators; this module only describes the shape a parser is
//! expected to hand us, following the teacher's one-struct-per-node-kind
//! layout (`y-lang`'s `src/ast/*.rs`) but without any `pest` binding, since
//! the grammar that produces these nodes is out of scope here.

mod decl;
mod expr;
mod stmt;

pub use decl::*;
pub use expr::*;
pub use stmt::*;

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

use crate::symbol::Sym;

/// 1-based line/column, as handed down by the lexer (spec §6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// The position reported for a missing return value (spec §4.6).
    pub fn none() -> Self {
        Self { line: 0, column: 0 }
    }
}

/// An identifier occurrence. Carries a symbol link, set exactly once during
/// name resolution (spec §3.4 "Lifecycle"), that the type checker and any
/// downstream pass read back without repeating the lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ident {
    pub name: String,
    pub position: Position,
    #[serde(skip, default)]
    pub symbol: RefCell<Option<Rc<Sym>>>,
}

impl Ident {
    pub fn new(name: impl Into<String>, position: Position) -> Self {
        Self {
            name: name.into(),
            position,
            symbol: RefCell::new(None),
        }
    }

    pub fn symbol(&self) -> Option<Rc<Sym>> {
        self.symbol.borrow().clone()
    }

    pub fn set_symbol(&self, sym: Rc<Sym>) {
        *self.symbol.borrow_mut() = Some(sym);
    }
}

/// A program is a single translation unit: an ordered list of top-level
/// declarations (spec §1 "no module system").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Program {
    pub decls: Vec<Declaration>,
}

impl Program {
    pub fn new(decls: Vec<Declaration>) -> Self {
        Self { decls }
    }
}

/// A type annotation as written in source, before resolution turns it into
/// a `Type` (spec §3.4 "type nodes").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TypeNode {
    Integer,
    Logical,
    Void,
    /// `tuple T` — a nominal reference resolved against the global scope.
    Tuple(Ident),
}

impl TypeNode {
    pub fn position(&self) -> Position {
        match self {
            TypeNode::Integer | TypeNode::Logical | TypeNode::Void => Position::none(),
            TypeNode::Tuple(ident) => ident.position,
        }
    }
}
