//! The diagnostic sink (spec §6, §7.1): user-visible `(line, column,
//! message)` triples. Widened from the teacher's `TypeError` (one error,
//! returned and short-circuiting) into a collector, since spec mandates
//! analysis continues after every semantic error.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ast::Position;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub line: usize,
    pub column: usize,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.line, self.column, self.message)
    }
}

/// A callback accepting `(line, column, message)`, matching spec §6's
/// "diagnostic sink" interface. `Vec<Diagnostic>` is the default
/// implementation used throughout this crate and its tests; callers free to
/// stream diagnostics elsewhere (a line-oriented writer, an LSP
/// publishDiagnostics call) can implement the trait instead.
pub trait DiagnosticSink {
    fn report(&mut self, position: Position, message: &str);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, position: Position, message: &str) {
        self.push(Diagnostic {
            line: position.line,
            column: position.column,
            message: message.to_owned(),
        });
    }
}

/// Bit-exact diagnostic message texts (spec §6). Tests assert against these
/// constants rather than literal strings so a typo only needs fixing once.
pub mod messages {
    pub const MULTIPLY_DECLARED: &str = "Multiply-declared identifier";
    pub const UNDECLARED: &str = "Undeclared identifier";
    pub const VOID_DECLARATION: &str = "Non-function declared void";
    pub const INVALID_TUPLE_TYPE: &str = "Invalid name of tuple type";
    pub const BAD_TUPLE_ACCESS: &str = "Colon-access of non-tuple type";
    pub const INVALID_TUPLE_FIELD: &str = "Invalid tuple field name";
    pub const NON_LOGICAL_IF_CONDITION: &str = "Non-logical expression used in if condition";
    pub const NON_LOGICAL_WHILE_CONDITION: &str = "Non-logical expression used in while condition";
    pub const NON_INT_ARITH_OPERAND: &str = "Arithmetic operator used with non-integer operand";
    pub const NON_INT_REL_OPERAND: &str = "Relational operator used with non-integer operand";
    pub const NON_LOGICAL_OPERAND: &str = "Logical operator used with non-logical operand";
    pub const MISMATCHED_TYPE: &str = "Mismatched type";
    pub const EQUALITY_ON_VOID_FUNCTION_CALLS: &str =
        "Equality operator used with void function calls";
    pub const EQUALITY_ON_FUNCTION_NAMES: &str = "Equality operator used with function names";
    pub const EQUALITY_ON_TUPLE_NAMES: &str = "Equality operator used with tuple names";
    pub const EQUALITY_ON_TUPLE_VARIABLES: &str = "Equality operator used with tuple variables";
    pub const ASSIGN_TO_FUNCTION: &str = "Assignment to function name";
    pub const ASSIGN_TO_TUPLE_VARIABLE: &str = "Assignment to tuple variable";
    pub const ASSIGN_TO_TUPLE_NAME: &str = "Assignment to tuple name";
    pub const CALL_OF_NON_FUNCTION: &str = "Call attempt on non-function";
    pub const WRONG_ARG_COUNT: &str = "Function call with wrong # of args";
    pub const ARG_TYPE_MISMATCH: &str = "Actual type does not match formal type";
    pub const RETURN_WITH_VALUE_IN_VOID: &str = "Return with value in void function";
    pub const MISSING_RETURN_VALUE: &str = "Return value missing";
    pub const WRONG_RETURN_TYPE: &str = "Return value wrong type";
    pub const READ_OF_FUNCTION: &str = "Read attempt of function name";
    pub const READ_OF_TUPLE_VARIABLE: &str = "Read attempt of tuple variable";
    pub const READ_OF_TUPLE_NAME: &str = "Read attempt of tuple name";
    pub const WRITE_OF_FUNCTION: &str = "Write attempt of function name";
    pub const WRITE_OF_TUPLE_VARIABLE: &str = "Write attempt of tuple variable";
    pub const WRITE_OF_TUPLE_NAME: &str = "Write attempt of tuple name";
    pub const WRITE_OF_VOID: &str = "Write attempt of void";
}
