use serde::{Deserialize, Serialize};

use super::{Ident, Position};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Expression {
    BoolLit(BoolLit),
    IntLit(IntLit),
    StrLit(StrLit),
    Ident(Ident),
    /// A left-associative chained tuple field access `base:path[0]:path[1]…`
    /// (spec §4.4). Flattened rather than a nested binary tree, since the
    /// resolution algorithm walks it strictly left to right.
    TupleAccess(TupleAccessExpr),
    Assign(AssignExpr),
    Call(CallExpr),
    Unary(UnaryExpr),
    Binary(BinaryExpr),
}

impl Expression {
    pub fn position(&self) -> Position {
        match self {
            Expression::BoolLit(n) => n.position,
            Expression::IntLit(n) => n.position,
            Expression::StrLit(n) => n.position,
            Expression::Ident(n) => n.position,
            Expression::TupleAccess(n) => n.position,
            Expression::Assign(n) => n.position,
            Expression::Call(n) => n.position,
            Expression::Unary(n) => n.position,
            Expression::Binary(n) => n.position,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoolLit {
    pub value: bool,
    pub position: Position,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntLit {
    pub value: i64,
    pub position: Position,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrLit {
    pub value: String,
    pub position: Position,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TupleAccessExpr {
    pub base: Ident,
    pub path: Vec<Ident>,
    pub position: Position,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignExpr {
    pub lhs: Box<Expression>,
    pub rhs: Box<Expression>,
    pub position: Position,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallExpr {
    pub callee: Ident,
    pub args: Vec<Expression>,
    pub position: Position,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnaryOp {
    Neg,
    Not,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnaryExpr {
    pub op: UnaryOp,
    pub operand: Box<Expression>,
    pub position: Position,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Lt,
    Le,
    Gt,
    Ge,
    And,
    Or,
    Eq,
    Neq,
}

impl BinaryOp {
    pub fn is_arithmetic(self) -> bool {
        matches!(self, Self::Add | Self::Sub | Self::Mul | Self::Div)
    }

    pub fn is_relational(self) -> bool {
        matches!(self, Self::Lt | Self::Le | Self::Gt | Self::Ge)
    }

    pub fn is_logical(self) -> bool {
        matches!(self, Self::And | Self::Or)
    }

    pub fn is_equality(self) -> bool {
        matches!(self, Self::Eq | Self::Neq)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BinaryExpr {
    pub op: BinaryOp,
    pub lhs: Box<Expression>,
    pub rhs: Box<Expression>,
    pub position: Position,
}
