use serde::{Deserialize, Serialize};

use super::{AssignExpr, CallExpr, Expression, Ident, Position, VariableDecl};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Statement {
    VarDecl(VariableDecl),
    Assignment(AssignExpr),
    PostIncDec(PostIncDecStmt),
    If(IfStmt),
    IfElse(IfElseStmt),
    While(WhileStmt),
    Read(ReadStmt),
    Write(WriteStmt),
    Call(CallExpr),
    Return(ReturnStmt),
}

impl Statement {
    pub fn position(&self) -> Position {
        match self {
            Statement::VarDecl(s) => s.position,
            Statement::Assignment(s) => s.position,
            Statement::PostIncDec(s) => s.position,
            Statement::If(s) => s.position,
            Statement::IfElse(s) => s.position,
            Statement::While(s) => s.position,
            Statement::Read(s) => s.position,
            Statement::Write(s) => s.position,
            Statement::Call(s) => s.position,
            Statement::Return(s) => s.position,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IncDecOp {
    Inc,
    Dec,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostIncDecStmt {
    pub target: Ident,
    pub op: IncDecOp,
    pub position: Position,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IfStmt {
    pub condition: Expression,
    pub body: Vec<Statement>,
    pub position: Position,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IfElseStmt {
    pub condition: Expression,
    pub then_body: Vec<Statement>,
    pub else_body: Vec<Statement>,
    pub position: Position,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhileStmt {
    pub condition: Expression,
    pub body: Vec<Statement>,
    pub position: Position,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadStmt {
    pub operand: Expression,
    pub position: Position,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WriteStmt {
    pub operand: Expression,
    pub position: Position,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReturnStmt {
    pub value: Option<Expression>,
    pub position: Position,
}
