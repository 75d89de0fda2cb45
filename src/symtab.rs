//! Symbol table (spec §3.3, §4.2): an ordered stack of scopes, innermost on
//! top. Grounded on the teacher's `typechecker/scope.rs` (`Vec<HashMap<...>>`
//! with push/pop/get/add), widened to return the internal-invariant errors
//! spec §3.3 calls for instead of silently no-op-ing on misuse.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::error::SemaBug;
use crate::symbol::Sym;

#[derive(Debug, Clone, Default)]
pub struct SymTable {
    scopes: Vec<HashMap<String, Rc<Sym>>>,
}

impl SymTable {
    /// A table with no scopes open yet. Every operation but `open_scope`
    /// fails with `EmptyTable` until a scope is pushed.
    pub fn new() -> Self {
        Self { scopes: Vec::new() }
    }

    /// A table with a single scope already open, the common starting point
    /// for a tuple definition's field scope (spec §3.3: "one level").
    pub fn with_one_scope() -> Self {
        let mut table = Self::new();
        table.open_scope();
        table
    }

    pub fn open_scope(&mut self) {
        self.scopes.push(HashMap::new());
    }

    pub fn close_scope(&mut self) -> Result<(), SemaBug> {
        self.scopes.pop().map(|_| ()).ok_or(SemaBug::EmptyTable)
    }

    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    pub fn declare(&mut self, name: &str, sym: Rc<Sym>) -> Result<(), SemaBug> {
        if name.is_empty() {
            return Err(SemaBug::IllegalArgument);
        }
        let Some(scope) = self.scopes.last_mut() else {
            return Err(SemaBug::EmptyTable);
        };
        if scope.contains_key(name) {
            return Err(SemaBug::DuplicateName(name.to_owned()));
        }
        scope.insert(name.to_owned(), sym);
        Ok(())
    }

    pub fn lookup_local(&self, name: &str) -> Result<Option<Rc<Sym>>, SemaBug> {
        let scope = self.scopes.last().ok_or(SemaBug::EmptyTable)?;
        Ok(scope.get(name).cloned())
    }

    pub fn lookup_global(&self, name: &str) -> Result<Option<Rc<Sym>>, SemaBug> {
        if self.scopes.is_empty() {
            return Err(SemaBug::EmptyTable);
        }
        for scope in self.scopes.iter().rev() {
            if let Some(sym) = scope.get(name) {
                return Ok(Some(sym.clone()));
            }
        }
        Ok(None)
    }
}

impl fmt::Display for SymTable {
    /// Matches the test-visible debug dump format of spec §4.2.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "++++ SYMBOL TABLE")?;
        for scope in self.scopes.iter().rev() {
            write!(f, "{{")?;
            for (i, (name, sym)) in scope.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{name}={}", sym.ty())?;
            }
            writeln!(f, "}}")?;
        }
        write!(f, "++++ END TABLE")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Type;
    use proptest::prelude::*;

    fn var(ty: Type) -> Rc<Sym> {
        Rc::new(Sym::Variable { ty })
    }

    #[test]
    fn declare_on_empty_table_fails() {
        let mut table = SymTable::new();
        assert!(matches!(
            table.declare("x", var(Type::Integer)),
            Err(SemaBug::EmptyTable)
        ));
    }

    #[test]
    fn open_close_is_a_no_op() {
        let mut table = SymTable::with_one_scope();
        table.open_scope();
        table.close_scope().unwrap();
        assert_eq!(table.depth(), 1);
    }

    #[test]
    fn close_below_zero_raises_empty_table() {
        let mut table = SymTable::with_one_scope();
        table.close_scope().unwrap();
        assert!(matches!(table.close_scope(), Err(SemaBug::EmptyTable)));
    }

    #[test]
    fn shadowing_across_scopes() {
        let mut table = SymTable::with_one_scope();
        table.declare("x", var(Type::Integer)).unwrap();
        table.open_scope();
        table.declare("x", var(Type::Logical)).unwrap();

        assert_eq!(
            table.lookup_global("x").unwrap().unwrap().ty(),
            Type::Logical
        );
        assert_eq!(
            table.lookup_local("x").unwrap().unwrap().ty(),
            Type::Logical
        );

        table.close_scope().unwrap();
        assert_eq!(
            table.lookup_local("x").unwrap().unwrap().ty(),
            Type::Integer
        );
    }

    #[test]
    fn duplicate_in_same_scope_fails_in_distinct_scopes_succeeds() {
        let mut table = SymTable::with_one_scope();
        table.declare("x", var(Type::Integer)).unwrap();
        assert!(matches!(
            table.declare("x", var(Type::Logical)),
            Err(SemaBug::DuplicateName(_))
        ));

        table.open_scope();
        assert!(table.declare("x", var(Type::Logical)).is_ok());
    }

    #[derive(Debug, Clone)]
    enum Op {
        Open,
        Close,
        Declare(String),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            Just(Op::Open),
            Just(Op::Close),
            "[a-c]".prop_map(Op::Declare),
        ]
    }

    proptest! {
        /// Depth never goes negative without raising `EmptyTable`, for any
        /// sequence of open/close/declare operations (spec §8).
        #[test]
        fn depth_never_goes_negative(ops in prop::collection::vec(op_strategy(), 0..50)) {
            let mut table = SymTable::with_one_scope();
            for op in ops {
                match op {
                    Op::Open => table.open_scope(),
                    Op::Close => {
                        let before = table.depth();
                        match table.close_scope() {
                            Ok(()) => prop_assert_eq!(table.depth(), before - 1),
                            Err(SemaBug::EmptyTable) => prop_assert_eq!(before, 0),
                            Err(other) => prop_assert!(false, "unexpected error: {other:?}"),
                        }
                    }
                    Op::Declare(name) => {
                        let _ = table.declare(&name, var(Type::Integer));
                    }
                }
                prop_assert!(table.depth() <= 51);
            }
        }

        /// Declaring the same name twice in one scope always fails the
        /// second time; declaring it again after opening a fresh scope
        /// always succeeds (spec §8 "Uniqueness").
        #[test]
        fn uniqueness_within_a_scope(name in "[a-z]{1,4}") {
            let mut table = SymTable::with_one_scope();
            prop_assert!(table.declare(&name, var(Type::Integer)).is_ok());
            prop_assert!(matches!(
                table.declare(&name, var(Type::Integer)),
                Err(SemaBug::DuplicateName(_))
            ));

            table.open_scope();
            prop_assert!(table.declare(&name, var(Type::Integer)).is_ok());
        }
    }
}
