use serde::{Deserialize, Serialize};

use super::{Ident, Position, Statement, TypeNode};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Declaration {
    Variable(VariableDecl),
    Function(FunctionDecl),
    TupleDef(TupleDefDecl),
}

impl Declaration {
    pub fn position(&self) -> Position {
        match self {
            Declaration::Variable(d) => d.position,
            Declaration::Function(d) => d.position,
            Declaration::TupleDef(d) => d.position,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariableDecl {
    pub ident: Ident,
    pub type_node: TypeNode,
    pub position: Position,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormalParam {
    pub ident: Ident,
    pub type_node: TypeNode,
    pub position: Position,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionDecl {
    pub ident: Ident,
    pub params: Vec<FormalParam>,
    pub return_type: TypeNode,
    pub body: Vec<Statement>,
    pub position: Position,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TupleDefDecl {
    pub name: Ident,
    pub fields: Vec<VariableDecl>,
    pub position: Position,
}
