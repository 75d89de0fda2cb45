//! The type lattice (spec §3.1, §4.1).
//!
//! `Type` is a closed tagged union. Equality is structural for the scalar
//! variants, nominal (by tuple name) for `TupleVar`, and `Error` compares
//! unequal to everything, including itself, so that callers must check
//! `is_error()` explicitly before trusting an equality result.

use std::fmt;

#[derive(Debug, Clone)]
pub enum Type {
    Integer,
    Logical,
    String,
    Void,
    Function {
        params: Vec<Type>,
        return_type: Box<Type>,
    },
    TupleVar(String),
    TupleDef,
    Error,
}

impl Type {
    pub fn is_error(&self) -> bool {
        matches!(self, Type::Error)
    }

    pub fn function(params: Vec<Type>, return_type: Type) -> Type {
        Type::Function {
            params,
            return_type: Box::new(return_type),
        }
    }
}

impl PartialEq for Type {
    fn eq(&self, other: &Self) -> bool {
        use Type::*;
        match (self, other) {
            (Error, _) | (_, Error) => false,
            (Integer, Integer) => true,
            (Logical, Logical) => true,
            (String, String) => true,
            (Void, Void) => true,
            (TupleDef, TupleDef) => true,
            (TupleVar(a), TupleVar(b)) => a == b,
            (
                Function {
                    params: p1,
                    return_type: r1,
                },
                Function {
                    params: p2,
                    return_type: r2,
                },
            ) => p1 == p2 && r1 == r2,
            _ => false,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Integer => write!(f, "integer"),
            Type::Logical => write!(f, "logical"),
            Type::String => write!(f, "string"),
            Type::Void => write!(f, "void"),
            Type::TupleDef => write!(f, "tuple-name"),
            Type::TupleVar(name) => write!(f, "{name}"),
            Type::Error => write!(f, "error"),
            Type::Function {
                params,
                return_type,
            } => {
                write!(f, "<")?;
                for (i, param) in params.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{param}")?;
                }
                write!(f, "->{return_type}>")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_is_never_equal() {
        assert_ne!(Type::Error, Type::Error);
        assert_ne!(Type::Error, Type::Integer);
    }

    #[test]
    fn tuple_var_equality_is_nominal() {
        assert_eq!(Type::TupleVar("T".into()), Type::TupleVar("T".into()));
        assert_ne!(Type::TupleVar("T".into()), Type::TupleVar("U".into()));
    }

    #[test]
    fn function_equality_is_structural_on_signature() {
        let a = Type::function(vec![Type::Integer], Type::Logical);
        let b = Type::function(vec![Type::Integer], Type::Logical);
        let c = Type::function(vec![Type::Logical], Type::Logical);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn display_matches_unparse_forms() {
        assert_eq!(Type::Integer.to_string(), "integer");
        assert_eq!(Type::Void.to_string(), "void");
        assert_eq!(
            Type::function(vec![Type::Integer, Type::Logical], Type::Void).to_string(),
            "<integer,logical->void>"
        );
        assert_eq!(Type::TupleVar("Point".into()).to_string(), "Point");
    }
}
