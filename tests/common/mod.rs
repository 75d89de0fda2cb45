//! Shared AST-builder helpers for the integration tests. Since lexing and
//! parsing are out of scope for this crate, every test constructs its input
//! AST directly rather than parsing Base-language source text.

#![allow(dead_code)]

use base_sema::ast::*;

pub fn pos(line: usize, column: usize) -> Position {
    Position::new(line, column)
}

pub fn id(name: &str, line: usize, column: usize) -> Ident {
    Ident::new(name, pos(line, column))
}

pub fn program(decls: Vec<Declaration>) -> Program {
    Program::new(decls)
}

// --- declarations -----------------------------------------------------

pub fn var_decl(name: &str, type_node: TypeNode, line: usize, column: usize) -> VariableDecl {
    VariableDecl {
        ident: id(name, line, column),
        type_node,
        position: pos(line, column),
    }
}

pub fn tuple_type(name: &str, line: usize, column: usize) -> TypeNode {
    TypeNode::Tuple(id(name, line, column))
}

pub fn formal(name: &str, type_node: TypeNode, line: usize, column: usize) -> FormalParam {
    FormalParam {
        ident: id(name, line, column),
        type_node,
        position: pos(line, column),
    }
}

pub fn func_decl(
    name: &str,
    params: Vec<FormalParam>,
    return_type: TypeNode,
    body: Vec<Statement>,
    line: usize,
    column: usize,
) -> FunctionDecl {
    FunctionDecl {
        ident: id(name, line, column),
        params,
        return_type,
        body,
        position: pos(line, column),
    }
}

pub fn tuple_def(
    name: &str,
    fields: Vec<VariableDecl>,
    line: usize,
    column: usize,
) -> TupleDefDecl {
    TupleDefDecl {
        name: id(name, line, column),
        fields,
        position: pos(line, column),
    }
}

// --- expressions --------------------------------------------------------

pub fn int_lit(value: i64, line: usize, column: usize) -> Expression {
    Expression::IntLit(IntLit {
        value,
        position: pos(line, column),
    })
}

pub fn bool_lit(value: bool, line: usize, column: usize) -> Expression {
    Expression::BoolLit(BoolLit {
        value,
        position: pos(line, column),
    })
}

pub fn str_lit(value: &str, line: usize, column: usize) -> Expression {
    Expression::StrLit(StrLit {
        value: value.to_owned(),
        position: pos(line, column),
    })
}

pub fn ident_expr(name: &str, line: usize, column: usize) -> Expression {
    Expression::Ident(id(name, line, column))
}

pub fn tuple_access(
    base: &str,
    base_line: usize,
    base_col: usize,
    path: Vec<(&str, usize, usize)>,
    line: usize,
    column: usize,
) -> Expression {
    Expression::TupleAccess(TupleAccessExpr {
        base: id(base, base_line, base_col),
        path: path
            .into_iter()
            .map(|(name, l, c)| id(name, l, c))
            .collect(),
        position: pos(line, column),
    })
}

pub fn assign(lhs: Expression, rhs: Expression, line: usize, column: usize) -> Expression {
    Expression::Assign(AssignExpr {
        lhs: Box::new(lhs),
        rhs: Box::new(rhs),
        position: pos(line, column),
    })
}

pub fn call(callee: &str, callee_col: usize, args: Vec<Expression>, line: usize) -> Expression {
    Expression::Call(CallExpr {
        callee: id(callee, line, callee_col),
        args,
        position: pos(line, callee_col),
    })
}

pub fn unary(op: UnaryOp, operand: Expression, line: usize, column: usize) -> Expression {
    Expression::Unary(UnaryExpr {
        op,
        operand: Box::new(operand),
        position: pos(line, column),
    })
}

pub fn binary(op: BinaryOp, lhs: Expression, rhs: Expression, line: usize, column: usize) -> Expression {
    Expression::Binary(BinaryExpr {
        op,
        lhs: Box::new(lhs),
        rhs: Box::new(rhs),
        position: pos(line, column),
    })
}

// --- statements -----------------------------------------------------------

pub fn assignment_stmt(lhs: Expression, rhs: Expression, line: usize, column: usize) -> Statement {
    Statement::Assignment(AssignExpr {
        lhs: Box::new(lhs),
        rhs: Box::new(rhs),
        position: pos(line, column),
    })
}

pub fn post_inc_dec(target: &str, op: IncDecOp, line: usize, column: usize) -> Statement {
    Statement::PostIncDec(PostIncDecStmt {
        target: id(target, line, column),
        op,
        position: pos(line, column),
    })
}

pub fn if_stmt(condition: Expression, body: Vec<Statement>, line: usize, column: usize) -> Statement {
    Statement::If(IfStmt {
        condition,
        body,
        position: pos(line, column),
    })
}

pub fn if_else_stmt(
    condition: Expression,
    then_body: Vec<Statement>,
    else_body: Vec<Statement>,
    line: usize,
    column: usize,
) -> Statement {
    Statement::IfElse(IfElseStmt {
        condition,
        then_body,
        else_body,
        position: pos(line, column),
    })
}

pub fn while_stmt(condition: Expression, body: Vec<Statement>, line: usize, column: usize) -> Statement {
    Statement::While(WhileStmt {
        condition,
        body,
        position: pos(line, column),
    })
}

pub fn read_stmt(operand: Expression, line: usize, column: usize) -> Statement {
    Statement::Read(ReadStmt {
        operand,
        position: pos(line, column),
    })
}

pub fn write_stmt(operand: Expression, line: usize, column: usize) -> Statement {
    Statement::Write(WriteStmt {
        operand,
        position: pos(line, column),
    })
}

pub fn return_stmt(value: Option<Expression>, line: usize, column: usize) -> Statement {
    Statement::Return(ReturnStmt {
        value,
        position: pos(line, column),
    })
}
