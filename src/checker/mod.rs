//! Type checking (spec §4.6): runs only after name resolution completes.
//! Reads the symbol links resolution attached to identifier nodes — it
//! never touches a `SymTable` itself, since every name use was already
//! bound (or deliberately left unbound, meaning `Error`) by the resolver.
//!
//! Grounded on the teacher's `Typechecker::check_statement`/`check_expr`
//! dispatch shape (`typechecker/mod.rs`), generalized to this language's
//! statement/expression set and typing rules.

mod expr;

use crate::ast::{
    Declaration, FunctionDecl, IfElseStmt, IfStmt, Position, Program, ReturnStmt, Statement,
    TypeNode, WhileStmt,
};
use crate::diagnostics::{messages, DiagnosticSink};
use crate::types::Type;

pub struct Checker<'a> {
    diagnostics: &'a mut dyn DiagnosticSink,
}

impl<'a> Checker<'a> {
    pub fn new(diagnostics: &'a mut dyn DiagnosticSink) -> Self {
        Self { diagnostics }
    }

    fn report(&mut self, position: Position, message: &str) {
        log::debug!("checker: {position:?}: {message}");
        self.diagnostics.report(position, message);
    }

    pub fn check(&mut self, program: &Program) {
        for decl in &program.decls {
            self.check_decl(decl);
        }
    }

    fn check_decl(&mut self, decl: &Declaration) {
        // Only a function body carries statements to type-check; variable
        // and tuple-definition declarations have no initializer expression
        // in this language's grammar, so there is nothing left to do here
        // once resolution has validated their type annotations.
        if let Declaration::Function(f) = decl {
            self.check_function(f);
        }
    }

    fn check_function(&mut self, f: &FunctionDecl) {
        let return_type = declared_type(&f.return_type);
        for stmt in &f.body {
            self.check_statement(stmt, &return_type);
        }
    }

    fn check_statement(&mut self, stmt: &Statement, return_type: &Type) {
        match stmt {
            Statement::VarDecl(_) => {}
            Statement::Assignment(assign) => {
                self.assign_expr_type(assign);
            }
            Statement::PostIncDec(stmt) => {
                let ty = self.identifier_type(&stmt.target);
                if !ty.is_error() && ty != Type::Integer {
                    self.report(stmt.target.position, messages::NON_INT_ARITH_OPERAND);
                }
            }
            Statement::If(stmt) => self.check_if(stmt, return_type),
            Statement::IfElse(stmt) => self.check_if_else(stmt, return_type),
            Statement::While(stmt) => self.check_while(stmt, return_type),
            Statement::Read(stmt) => {
                let ty = self.expr_type(&stmt.operand);
                self.check_read_type(stmt.operand.position(), ty);
            }
            Statement::Write(stmt) => {
                let ty = self.expr_type(&stmt.operand);
                self.check_write_type(stmt.operand.position(), ty);
            }
            Statement::Call(call) => {
                self.call_expr_type(call);
            }
            Statement::Return(stmt) => self.check_return(stmt, return_type),
        }
    }

    fn check_if(&mut self, stmt: &IfStmt, return_type: &Type) {
        let cond_ty = self.expr_type(&stmt.condition);
        if !cond_ty.is_error() && cond_ty != Type::Logical {
            self.report(stmt.condition.position(), messages::NON_LOGICAL_IF_CONDITION);
        }
        for s in &stmt.body {
            self.check_statement(s, return_type);
        }
    }

    fn check_if_else(&mut self, stmt: &IfElseStmt, return_type: &Type) {
        let cond_ty = self.expr_type(&stmt.condition);
        if !cond_ty.is_error() && cond_ty != Type::Logical {
            self.report(stmt.condition.position(), messages::NON_LOGICAL_IF_CONDITION);
        }
        for s in &stmt.then_body {
            self.check_statement(s, return_type);
        }
        for s in &stmt.else_body {
            self.check_statement(s, return_type);
        }
    }

    fn check_while(&mut self, stmt: &WhileStmt, return_type: &Type) {
        let cond_ty = self.expr_type(&stmt.condition);
        if !cond_ty.is_error() && cond_ty != Type::Logical {
            self.report(
                stmt.condition.position(),
                messages::NON_LOGICAL_WHILE_CONDITION,
            );
        }
        for s in &stmt.body {
            self.check_statement(s, return_type);
        }
    }

    fn check_read_type(&mut self, position: Position, ty: Type) {
        match ty {
            Type::Integer | Type::Logical | Type::String | Type::Void | Type::Error => {}
            Type::Function { .. } => self.report(position, messages::READ_OF_FUNCTION),
            Type::TupleVar(_) => self.report(position, messages::READ_OF_TUPLE_VARIABLE),
            Type::TupleDef => self.report(position, messages::READ_OF_TUPLE_NAME),
        }
    }

    fn check_write_type(&mut self, position: Position, ty: Type) {
        match ty {
            Type::Integer | Type::Logical | Type::String | Type::Error => {}
            Type::Function { .. } => self.report(position, messages::WRITE_OF_FUNCTION),
            Type::TupleVar(_) => self.report(position, messages::WRITE_OF_TUPLE_VARIABLE),
            Type::TupleDef => self.report(position, messages::WRITE_OF_TUPLE_NAME),
            Type::Void => self.report(position, messages::WRITE_OF_VOID),
        }
    }

    fn check_return(&mut self, stmt: &ReturnStmt, return_type: &Type) {
        match (&stmt.value, return_type) {
            (None, Type::Void) => {}
            (Some(value), Type::Void) => {
                self.expr_type(value);
                self.report(value.position(), messages::RETURN_WITH_VALUE_IN_VOID);
            }
            (None, _) => {
                self.report(Position::none(), messages::MISSING_RETURN_VALUE);
            }
            (Some(value), expected) => {
                let actual = self.expr_type(value);
                if !actual.is_error() && actual != *expected {
                    self.report(value.position(), messages::WRONG_RETURN_TYPE);
                }
            }
        }
    }
}

/// The declared type named by a type node, independent of whether
/// resolution accepted it — used for a function's return type, which the
/// checker needs even when the function's own binding was suppressed for
/// being a duplicate.
fn declared_type(type_node: &TypeNode) -> Type {
    match type_node {
        TypeNode::Integer => Type::Integer,
        TypeNode::Logical => Type::Logical,
        TypeNode::Void => Type::Void,
        TypeNode::Tuple(ident) => match ident.symbol() {
            Some(sym) if sym.is_tuple_def() => Type::TupleVar(ident.name.clone()),
            _ => Type::Error,
        },
    }
}
