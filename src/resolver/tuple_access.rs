//! Chained tuple field access (spec §4.4): `base:f1:f2:…` resolved strictly
//! left to right. The first failed step reports exactly one diagnostic and
//! abandons the rest of the chain — every identifier after the failure is
//! left without a symbol link, so the type checker sees `Error` for the
//! whole expression without re-deriving why.

use crate::ast::TupleAccessExpr;
use crate::diagnostics::messages;
use crate::error::SemaBug;
use crate::symbol::Sym;
use crate::symtab::SymTable;

use super::Resolver;

impl<'a> Resolver<'a> {
    pub(super) fn resolve_tuple_access(
        &mut self,
        expr: &TupleAccessExpr,
        scope: &SymTable,
    ) -> Result<(), SemaBug> {
        let Some(base_sym) = self.resolve_identifier_use(&expr.base, scope)? else {
            // Already reported (UndeclaredIdentifier); nothing further to
            // walk, and no second diagnostic for the chain.
            return Ok(());
        };

        let Sym::TupleVariable { tuple_name } = &*base_sym else {
            self.report(expr.base.position, messages::BAD_TUPLE_ACCESS);
            return Ok(());
        };
        let mut current_tuple = tuple_name.clone();

        for (i, field_ident) in expr.path.iter().enumerate() {
            let def_sym = scope.lookup_global(&current_tuple)?.ok_or_else(|| {
                SemaBug::UnexpectedShape(format!(
                    "tuple type `{current_tuple}` vanished from scope during field access"
                ))
            })?;
            let Sym::TupleDef { fields, .. } = &*def_sym else {
                return Err(SemaBug::UnexpectedShape(format!(
                    "`{current_tuple}` resolved to a non tuple-definition symbol"
                )));
            };

            let Some(field_sym) = fields.lookup_global(&field_ident.name)? else {
                self.report(field_ident.position, messages::INVALID_TUPLE_FIELD);
                return Ok(());
            };
            field_ident.set_symbol(field_sym.clone());

            let is_last = i + 1 == expr.path.len();
            match &*field_sym {
                Sym::TupleVariable { tuple_name: next } => {
                    current_tuple = next.clone();
                }
                _ if !is_last => {
                    self.report(field_ident.position, messages::BAD_TUPLE_ACCESS);
                    return Ok(());
                }
                _ => {}
            }
        }

        Ok(())
    }
}
