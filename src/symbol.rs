//! Symbols (spec §3.2): a bound name's semantic record. Closed union,
//! mirroring the teacher's `typescope::Variable` widened to the four kinds
//! spec §3.2 calls for.

use crate::symtab::SymTable;
use crate::types::Type;

#[derive(Debug, Clone)]
pub enum Sym {
    /// An ordinary (non-tuple) variable.
    Variable { ty: Type },
    /// A function: its ordered parameter types and declared return type.
    Function { params: Vec<Type>, return_type: Type },
    /// A variable whose type is a named tuple. Carries the tuple's name
    /// rather than a back-pointer to its definition symbol, so that field
    /// access re-resolves the definition by name every time it walks into
    /// it (spec §9 "avoids any cycle in the ownership graph").
    TupleVariable { tuple_name: String },
    /// The type namespace entry introduced by a tuple definition. Owns the
    /// field scope used to resolve member accesses and to type-check field
    /// declarations at definition time.
    TupleDef { name: String, fields: SymTable },
}

impl Sym {
    /// The `Type` this symbol contributes to an expression that names it.
    pub fn ty(&self) -> Type {
        match self {
            Sym::Variable { ty } => ty.clone(),
            Sym::Function {
                params,
                return_type,
            } => Type::function(params.clone(), return_type.clone()),
            Sym::TupleVariable { tuple_name } => Type::TupleVar(tuple_name.clone()),
            Sym::TupleDef { .. } => Type::TupleDef,
        }
    }

    pub fn is_tuple_def(&self) -> bool {
        matches!(self, Sym::TupleDef { .. })
    }
}
