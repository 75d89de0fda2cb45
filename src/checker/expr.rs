//! Expression typing (spec §4.6). Every rule's first move is checking for
//! `Error` operands — the single most common shape of bug in a naive port —
//! before applying any construct-specific rule.

use crate::ast::{AssignExpr, BinaryExpr, CallExpr, Expression, Ident, TupleAccessExpr, UnaryExpr, UnaryOp};
use crate::diagnostics::messages;
use crate::symbol::Sym;
use crate::types::Type;

use super::Checker;

impl<'a> Checker<'a> {
    pub(super) fn expr_type(&mut self, expr: &Expression) -> Type {
        match expr {
            Expression::BoolLit(_) => Type::Logical,
            Expression::IntLit(_) => Type::Integer,
            Expression::StrLit(_) => Type::String,
            Expression::Ident(ident) => self.identifier_type(ident),
            Expression::TupleAccess(chain) => tuple_access_type(chain),
            Expression::Assign(assign) => self.assign_expr_type(assign),
            Expression::Call(call) => self.call_expr_type(call),
            Expression::Unary(unary) => self.unary_expr_type(unary),
            Expression::Binary(binary) => self.binary_expr_type(binary),
        }
    }

    pub(super) fn identifier_type(&self, ident: &Ident) -> Type {
        match ident.symbol() {
            Some(sym) => sym.ty(),
            None => Type::Error,
        }
    }

    pub(super) fn assign_expr_type(&mut self, assign: &AssignExpr) -> Type {
        let lhs_ty = self.expr_type(&assign.lhs);
        let rhs_ty = self.expr_type(&assign.rhs);
        if lhs_ty.is_error() || rhs_ty.is_error() {
            return Type::Error;
        }
        if lhs_ty != rhs_ty {
            self.report(assign.lhs.position(), messages::MISMATCHED_TYPE);
            return Type::Error;
        }
        match lhs_ty {
            Type::Integer | Type::Logical => lhs_ty,
            Type::Function { .. } => {
                self.report(assign.lhs.position(), messages::ASSIGN_TO_FUNCTION);
                Type::Error
            }
            Type::TupleVar(_) => {
                self.report(assign.lhs.position(), messages::ASSIGN_TO_TUPLE_VARIABLE);
                Type::Error
            }
            Type::TupleDef => {
                self.report(assign.lhs.position(), messages::ASSIGN_TO_TUPLE_NAME);
                Type::Error
            }
            Type::String | Type::Void => Type::Error,
            Type::Error => unreachable!("already handled above"),
        }
    }

    pub(super) fn call_expr_type(&mut self, call: &CallExpr) -> Type {
        let Some(sym) = call.callee.symbol() else {
            // Unresolved callee: already diagnosed as Undeclared during
            // resolution. Absorb silently rather than double-report.
            return Type::Error;
        };
        let Sym::Function { params, return_type } = sym.as_ref() else {
            self.report(call.callee.position, messages::CALL_OF_NON_FUNCTION);
            for arg in &call.args {
                self.expr_type(arg);
            }
            return Type::Error;
        };

        if call.args.len() != params.len() {
            self.report(call.position, messages::WRONG_ARG_COUNT);
            for arg in &call.args {
                self.expr_type(arg);
            }
            return return_type.clone();
        }

        for (arg, expected) in call.args.iter().zip(params.iter()) {
            let actual = self.expr_type(arg);
            if !actual.is_error() && !expected.is_error() && actual != *expected {
                self.report(arg.position(), messages::ARG_TYPE_MISMATCH);
            }
        }
        return_type.clone()
    }

    pub(super) fn unary_expr_type(&mut self, unary: &UnaryExpr) -> Type {
        let operand_ty = self.expr_type(&unary.operand);
        if operand_ty.is_error() {
            return Type::Error;
        }
        match unary.op {
            UnaryOp::Neg => {
                if operand_ty != Type::Integer {
                    self.report(unary.operand.position(), messages::NON_INT_ARITH_OPERAND);
                    return Type::Error;
                }
                Type::Integer
            }
            UnaryOp::Not => {
                if operand_ty != Type::Logical {
                    self.report(unary.operand.position(), messages::NON_LOGICAL_OPERAND);
                    return Type::Error;
                }
                Type::Logical
            }
        }
    }

    pub(super) fn binary_expr_type(&mut self, binary: &BinaryExpr) -> Type {
        let lhs_ty = self.expr_type(&binary.lhs);
        let rhs_ty = self.expr_type(&binary.rhs);

        if binary.op.is_equality() {
            return self.equality_type(binary, lhs_ty, rhs_ty);
        }

        if binary.op.is_arithmetic() || binary.op.is_relational() {
            let bad_operand_message = if binary.op.is_arithmetic() {
                messages::NON_INT_ARITH_OPERAND
            } else {
                messages::NON_INT_REL_OPERAND
            };
            let mut any_failed = false;
            if lhs_ty.is_error() {
                any_failed = true;
            } else if lhs_ty != Type::Integer {
                self.report(binary.lhs.position(), bad_operand_message);
                any_failed = true;
            }
            if rhs_ty.is_error() {
                any_failed = true;
            } else if rhs_ty != Type::Integer {
                self.report(binary.rhs.position(), bad_operand_message);
                any_failed = true;
            }
            if any_failed {
                return Type::Error;
            }
            return if binary.op.is_arithmetic() {
                Type::Integer
            } else {
                Type::Logical
            };
        }

        // Logical `& |`.
        let mut any_failed = false;
        if lhs_ty.is_error() {
            any_failed = true;
        } else if lhs_ty != Type::Logical {
            self.report(binary.lhs.position(), messages::NON_LOGICAL_OPERAND);
            any_failed = true;
        }
        if rhs_ty.is_error() {
            any_failed = true;
        } else if rhs_ty != Type::Logical {
            self.report(binary.rhs.position(), messages::NON_LOGICAL_OPERAND);
            any_failed = true;
        }
        if any_failed {
            return Type::Error;
        }
        Type::Logical
    }

    fn equality_type(&mut self, binary: &BinaryExpr, lhs_ty: Type, rhs_ty: Type) -> Type {
        if lhs_ty.is_error() || rhs_ty.is_error() {
            return Type::Error;
        }
        if lhs_ty != rhs_ty {
            self.report(binary.lhs.position(), messages::MISMATCHED_TYPE);
            return Type::Error;
        }
        match lhs_ty {
            Type::Integer | Type::Logical => Type::Logical,
            Type::Void => {
                self.report(
                    binary.lhs.position(),
                    messages::EQUALITY_ON_VOID_FUNCTION_CALLS,
                );
                Type::Error
            }
            Type::Function { .. } => {
                self.report(binary.lhs.position(), messages::EQUALITY_ON_FUNCTION_NAMES);
                Type::Error
            }
            Type::TupleDef => {
                self.report(binary.lhs.position(), messages::EQUALITY_ON_TUPLE_NAMES);
                Type::Error
            }
            Type::TupleVar(_) => {
                self.report(
                    binary.lhs.position(),
                    messages::EQUALITY_ON_TUPLE_VARIABLES,
                );
                Type::Error
            }
            // Not reachable through this language's declarable types, but
            // handled rather than panicking: no dedicated message exists
            // for comparing two strings, so absorb silently.
            Type::String => Type::Error,
            Type::Error => unreachable!("already handled above"),
        }
    }
}

/// A tuple-access chain's type is whichever field link the resolver set
/// last: if the chain broke partway through, every identifier from the
/// break point on was left unlinked, so the last path element (or the base,
/// for an empty path) carries `Error` naturally.
fn tuple_access_type(expr: &TupleAccessExpr) -> Type {
    let last = expr.path.last().unwrap_or(&expr.base);
    last.symbol().map(|sym| sym.ty()).unwrap_or(Type::Error)
}
