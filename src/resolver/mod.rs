//! Name resolution (spec §4.3–§4.5): an AST walk that opens/closes scopes,
//! binds declarations, rejects duplicates and undeclared uses, validates
//! tuple type references, resolves chained tuple field access, and attaches
//! symbol links to identifier nodes. Runs to completion before the type
//! checker starts (spec §2 "sequential and idempotent").
//!
//! Grounded on the teacher's `Typechecker::check_block`/`check_fn_def`
//! scope push/pop shape (`typechecker/mod.rs`), generalized into a
//! resolution-only pass and extended with the tuple-definition / field-scope
//! machinery the teacher has no equivalent of (`y-lang` has no record type).

mod tuple_access;

use std::rc::Rc;

use crate::ast::{
    CallExpr, Declaration, Expression, FormalParam, FunctionDecl, Ident, IfElseStmt, IfStmt,
    Position, Program, Statement, TupleDefDecl, TypeNode, VariableDecl, WhileStmt,
};
use crate::diagnostics::{messages, DiagnosticSink};
use crate::error::SemaBug;
use crate::symbol::Sym;
use crate::symtab::SymTable;
use crate::types::Type;

pub struct Resolver<'a> {
    diagnostics: &'a mut dyn DiagnosticSink,
}

impl<'a> Resolver<'a> {
    pub fn new(diagnostics: &'a mut dyn DiagnosticSink) -> Self {
        Self { diagnostics }
    }

    fn report(&mut self, position: Position, message: &str) {
        log::debug!("resolver: {position:?}: {message}");
        self.diagnostics.report(position, message);
    }

    /// Resolve an entire program. Opens the outermost scope once and leaves
    /// it in place on return, per spec §4.3 ("downstream consumers may
    /// inspect it").
    pub fn resolve(&mut self, program: &Program) -> Result<SymTable, SemaBug> {
        let mut scope = SymTable::new();
        scope.open_scope();
        for decl in &program.decls {
            self.resolve_decl(decl, &mut scope)?;
        }
        Ok(scope)
    }

    fn resolve_decl(&mut self, decl: &Declaration, scope: &mut SymTable) -> Result<(), SemaBug> {
        match decl {
            Declaration::Variable(v) => self.resolve_variable_decl(v, scope),
            Declaration::Function(f) => self.resolve_function_decl(f, scope),
            Declaration::TupleDef(t) => self.resolve_tuple_def(t, scope),
        }
    }

    fn resolve_variable_decl(
        &mut self,
        decl: &VariableDecl,
        scope: &mut SymTable,
    ) -> Result<(), SemaBug> {
        let duplicate = scope.lookup_local(&decl.ident.name)?.is_some();
        if duplicate {
            self.report(decl.ident.position, messages::MULTIPLY_DECLARED);
            return Ok(());
        }

        match self.resolve_type_node(&decl.type_node, decl.ident.position, scope)? {
            None => {
                // `void` or an invalid tuple type: diagnostic already
                // reported by `resolve_type_node`; suppress the insertion.
            }
            Some(ty) => {
                let sym = Rc::new(sym_for_type(ty));
                decl.ident.set_symbol(sym.clone());
                scope.declare(&decl.ident.name, sym)?;
            }
        }
        Ok(())
    }

    /// Resolves a scalar/tuple type annotation against `scope` via
    /// `lookup_global`. Returns `None` (after reporting) for `void` or an
    /// unresolved tuple name; both are "suppress the insertion" cases for
    /// the caller. `void_position` anchors the `void` diagnostic on the
    /// declared identifier rather than the (position-less) type node.
    fn resolve_type_node(
        &mut self,
        type_node: &TypeNode,
        void_position: Position,
        scope: &SymTable,
    ) -> Result<Option<Type>, SemaBug> {
        Ok(match type_node {
            TypeNode::Integer => Some(Type::Integer),
            TypeNode::Logical => Some(Type::Logical),
            TypeNode::Void => {
                self.report(void_position, messages::VOID_DECLARATION);
                None
            }
            TypeNode::Tuple(tuple_ident) => match scope.lookup_global(&tuple_ident.name)? {
                Some(sym) if sym.is_tuple_def() => {
                    // Linked so `declared_type` (the checker) can recover a
                    // function's tuple return type without its own table.
                    tuple_ident.set_symbol(sym);
                    Some(Type::TupleVar(tuple_ident.name.clone()))
                }
                _ => {
                    self.report(tuple_ident.position, messages::INVALID_TUPLE_TYPE);
                    None
                }
            },
        })
    }

    fn resolve_function_decl(
        &mut self,
        decl: &FunctionDecl,
        scope: &mut SymTable,
    ) -> Result<(), SemaBug> {
        let duplicate = scope.lookup_local(&decl.ident.name)?.is_some();
        if duplicate {
            self.report(decl.ident.position, messages::MULTIPLY_DECLARED);
        }

        scope.open_scope();

        let mut param_types = Vec::with_capacity(decl.params.len());
        for param in &decl.params {
            param_types.push(self.resolve_formal_param(param, scope)?);
        }
        // Unlike a variable/field/parameter declaration, `void` is a
        // legitimate function return type (a procedure); only an invalid
        // tuple return-type name is diagnosed here.
        let return_type = match &decl.return_type {
            TypeNode::Void => Type::Void,
            other => self
                .resolve_type_node(other, decl.ident.position, scope)?
                .unwrap_or(Type::Error),
        };

        if !duplicate {
            // Bind the function's own name inside its own scope so a
            // recursive call in the body can find it via `lookup_global`. A
            // formal parameter sharing the function's name has already
            // claimed this scope's slot — a valid AST, just one that leaves
            // the function unable to call itself by name; report it as a
            // duplicate instead of letting `declare` raise a fatal bug.
            if scope.lookup_local(&decl.ident.name)?.is_some() {
                self.report(decl.ident.position, messages::MULTIPLY_DECLARED);
            } else {
                let sym = Rc::new(Sym::Function {
                    params: param_types.clone(),
                    return_type: return_type.clone(),
                });
                decl.ident.set_symbol(sym.clone());
                scope.declare(&decl.ident.name, sym)?;
            }
        }

        for stmt in &decl.body {
            self.resolve_statement(stmt, scope)?;
        }

        scope.close_scope()?;

        if !duplicate {
            // Bind it again in the enclosing scope so later declarations
            // can call it.
            let sym = Rc::new(Sym::Function {
                params: param_types,
                return_type,
            });
            scope.declare(&decl.ident.name, sym)?;
        }

        Ok(())
    }

    fn resolve_formal_param(
        &mut self,
        param: &FormalParam,
        scope: &mut SymTable,
    ) -> Result<Type, SemaBug> {
        let duplicate = scope.lookup_local(&param.ident.name)?.is_some();
        if duplicate {
            self.report(param.ident.position, messages::MULTIPLY_DECLARED);
        }

        let ty = match &param.type_node {
            TypeNode::Void => {
                self.report(param.ident.position, messages::VOID_DECLARATION);
                Type::Void
            }
            other => self
                .resolve_type_node(other, param.ident.position, scope)?
                .unwrap_or(Type::Error),
        };

        if !duplicate && !matches!(param.type_node, TypeNode::Void) && !ty.is_error() {
            let sym = Rc::new(sym_for_type(ty.clone()));
            param.ident.set_symbol(sym.clone());
            scope.declare(&param.ident.name, sym)?;
        }

        Ok(ty)
    }

    fn resolve_tuple_def(&mut self, decl: &TupleDefDecl, scope: &mut SymTable) -> Result<(), SemaBug> {
        let duplicate = scope.lookup_local(&decl.name.name)?.is_some();
        if duplicate {
            self.report(decl.name.position, messages::MULTIPLY_DECLARED);
        }

        let mut field_scope = SymTable::with_one_scope();
        for field in &decl.fields {
            self.resolve_tuple_field(field, &mut field_scope, scope)?;
        }

        if !duplicate {
            let sym = Rc::new(Sym::TupleDef {
                name: decl.name.name.clone(),
                fields: field_scope,
            });
            decl.name.set_symbol(sym.clone());
            scope.declare(&decl.name.name, sym)?;
        }

        Ok(())
    }

    /// Nested tuple types inside a field declaration are looked up in the
    /// *enclosing* scope, never in the tuple's own field scope (spec §4.3).
    fn resolve_tuple_field(
        &mut self,
        field: &VariableDecl,
        field_scope: &mut SymTable,
        enclosing: &SymTable,
    ) -> Result<(), SemaBug> {
        let duplicate = field_scope.lookup_local(&field.ident.name)?.is_some();
        if duplicate {
            self.report(field.ident.position, messages::MULTIPLY_DECLARED);
            return Ok(());
        }

        match self.resolve_type_node(&field.type_node, field.ident.position, enclosing)? {
            None => {}
            Some(ty) => {
                let sym = Rc::new(sym_for_type(ty));
                field.ident.set_symbol(sym.clone());
                field_scope.declare(&field.ident.name, sym)?;
            }
        }
        Ok(())
    }

    fn resolve_statement(&mut self, stmt: &Statement, scope: &mut SymTable) -> Result<(), SemaBug> {
        match stmt {
            Statement::VarDecl(decl) => self.resolve_variable_decl(decl, scope),
            Statement::Assignment(assign) => {
                self.resolve_expression(&assign.lhs, scope)?;
                self.resolve_expression(&assign.rhs, scope)
            }
            Statement::PostIncDec(stmt) => self.resolve_identifier_use(&stmt.target, scope).map(|_| ()),
            Statement::If(stmt) => self.resolve_if(stmt, scope),
            Statement::IfElse(stmt) => self.resolve_if_else(stmt, scope),
            Statement::While(stmt) => self.resolve_while(stmt, scope),
            Statement::Read(stmt) => self.resolve_expression(&stmt.operand, scope),
            Statement::Write(stmt) => self.resolve_expression(&stmt.operand, scope),
            Statement::Call(call) => self.resolve_call(call, scope),
            Statement::Return(stmt) => match &stmt.value {
                Some(value) => self.resolve_expression(value, scope),
                None => Ok(()),
            },
        }
    }

    fn resolve_if(&mut self, stmt: &IfStmt, scope: &mut SymTable) -> Result<(), SemaBug> {
        self.resolve_expression(&stmt.condition, scope)?;
        scope.open_scope();
        for s in &stmt.body {
            self.resolve_statement(s, scope)?;
        }
        scope.close_scope()
    }

    fn resolve_if_else(&mut self, stmt: &IfElseStmt, scope: &mut SymTable) -> Result<(), SemaBug> {
        self.resolve_expression(&stmt.condition, scope)?;

        scope.open_scope();
        for s in &stmt.then_body {
            self.resolve_statement(s, scope)?;
        }
        scope.close_scope()?;

        scope.open_scope();
        for s in &stmt.else_body {
            self.resolve_statement(s, scope)?;
        }
        scope.close_scope()
    }

    fn resolve_while(&mut self, stmt: &WhileStmt, scope: &mut SymTable) -> Result<(), SemaBug> {
        self.resolve_expression(&stmt.condition, scope)?;
        scope.open_scope();
        for s in &stmt.body {
            self.resolve_statement(s, scope)?;
        }
        scope.close_scope()
    }

    fn resolve_call(&mut self, call: &CallExpr, scope: &mut SymTable) -> Result<(), SemaBug> {
        self.resolve_identifier_use(&call.callee, scope)?;
        for arg in &call.args {
            self.resolve_expression(arg, scope)?;
        }
        Ok(())
    }

    fn resolve_expression(&mut self, expr: &Expression, scope: &mut SymTable) -> Result<(), SemaBug> {
        match expr {
            Expression::BoolLit(_) | Expression::IntLit(_) | Expression::StrLit(_) => Ok(()),
            Expression::Ident(ident) => self.resolve_identifier_use(ident, scope).map(|_| ()),
            Expression::TupleAccess(chain) => self.resolve_tuple_access(chain, scope),
            Expression::Assign(assign) => {
                self.resolve_expression(&assign.lhs, scope)?;
                self.resolve_expression(&assign.rhs, scope)
            }
            Expression::Call(call) => self.resolve_call(call, scope),
            Expression::Unary(unary) => self.resolve_expression(&unary.operand, scope),
            Expression::Binary(binary) => {
                self.resolve_expression(&binary.lhs, scope)?;
                self.resolve_expression(&binary.rhs, scope)
            }
        }
    }

    /// Every non-declaration identifier use (spec §4.5): `lookup_global`
    /// over the active table; sets the symbol link on success, leaves it
    /// unset (poisoning the identifier's type to `Error`) otherwise.
    fn resolve_identifier_use(
        &mut self,
        ident: &Ident,
        scope: &SymTable,
    ) -> Result<Option<Rc<Sym>>, SemaBug> {
        match scope.lookup_global(&ident.name)? {
            Some(sym) => {
                ident.set_symbol(sym.clone());
                Ok(Some(sym))
            }
            None => {
                self.report(ident.position, messages::UNDECLARED);
                Ok(None)
            }
        }
    }
}

/// A declaration's symbol kind follows its resolved type: a tuple-typed
/// binding is a `TupleVariable` (so field access can find it), everything
/// else is an ordinary `Variable`.
fn sym_for_type(ty: Type) -> Sym {
    match ty {
        Type::TupleVar(tuple_name) => Sym::TupleVariable { tuple_name },
        ty => Sym::Variable { ty },
    }
}
