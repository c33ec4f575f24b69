//! Environment for variable bindings.
//!
//! An `Environment` is a cheap handle (`Rc<RefCell<..>>`) over one scope's
//! bindings plus an optional enclosing scope. Top-level evaluation uses a
//! single flat scope that lives for the whole session; function calls get
//! a fresh scope enclosed by the closure's captured environment, which is
//! the only place the chain grows.

use crate::Value;
use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use tarn_ir::Name;

struct Inner {
    bindings: FxHashMap<Name, Value>,
    outer: Option<Environment>,
}

/// Shared handle to a binding scope.
#[derive(Clone)]
pub struct Environment {
    inner: Rc<RefCell<Inner>>,
}

impl Environment {
    /// Create a new empty environment with no enclosing scope.
    pub fn new() -> Self {
        Environment {
            inner: Rc::new(RefCell::new(Inner {
                bindings: FxHashMap::default(),
                outer: None,
            })),
        }
    }

    /// Create a new environment enclosed by `outer`.
    ///
    /// Used for function-call frames: parameters bind here, free
    /// identifiers resolve through the chain.
    pub fn enclosed(outer: &Environment) -> Self {
        Environment {
            inner: Rc::new(RefCell::new(Inner {
                bindings: FxHashMap::default(),
                outer: Some(outer.clone()),
            })),
        }
    }

    /// Look up a binding, walking out through enclosing scopes.
    pub fn get(&self, name: Name) -> Option<Value> {
        let inner = self.inner.borrow();
        if let Some(value) = inner.bindings.get(&name) {
            return Some(value.clone());
        }
        inner.outer.as_ref().and_then(|outer| outer.get(name))
    }

    /// Bind `name` to `value` in this scope, returning the stored value.
    ///
    /// A later `set` with the same name overwrites (last write wins);
    /// bindings are never removed.
    pub fn set(&self, name: Name, value: Value) -> Value {
        self.inner.borrow_mut().bindings.insert(name, value.clone());
        value
    }

    /// Number of bindings in this scope (excluding enclosing scopes).
    pub fn len(&self) -> usize {
        self.inner.borrow().bindings.len()
    }

    /// True if this scope has no bindings of its own.
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().bindings.is_empty()
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

// Compact Debug: printing bindings would chase closure captures back into
// this same environment.
impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Environment")
            .field("bindings", &inner.bindings.len())
            .field("enclosed", &inner.outer.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tarn_ir::StringInterner;

    #[test]
    fn set_then_get() {
        let names = StringInterner::new();
        let x = names.intern("x");

        let env = Environment::new();
        env.set(x, Value::Int(42));
        assert_eq!(env.get(x), Some(Value::Int(42)));
    }

    #[test]
    fn get_missing_is_none() {
        let names = StringInterner::new();
        let env = Environment::new();
        assert_eq!(env.get(names.intern("nope")), None);
    }

    #[test]
    fn set_returns_the_stored_value() {
        let names = StringInterner::new();
        let env = Environment::new();
        assert_eq!(env.set(names.intern("x"), Value::Int(5)), Value::Int(5));
    }

    #[test]
    fn last_write_wins() {
        let names = StringInterner::new();
        let x = names.intern("x");

        let env = Environment::new();
        env.set(x, Value::Int(1));
        env.set(x, Value::Int(2));
        assert_eq!(env.get(x), Some(Value::Int(2)));
        assert_eq!(env.len(), 1);
    }

    #[test]
    fn enclosed_scope_reads_through_to_outer() {
        let names = StringInterner::new();
        let x = names.intern("x");

        let outer = Environment::new();
        outer.set(x, Value::Int(1));

        let inner = Environment::enclosed(&outer);
        assert_eq!(inner.get(x), Some(Value::Int(1)));
    }

    #[test]
    fn enclosed_scope_shadows_without_touching_outer() {
        let names = StringInterner::new();
        let x = names.intern("x");

        let outer = Environment::new();
        outer.set(x, Value::Int(1));

        let inner = Environment::enclosed(&outer);
        inner.set(x, Value::Int(2));

        assert_eq!(inner.get(x), Some(Value::Int(2)));
        assert_eq!(outer.get(x), Some(Value::Int(1)));
    }

    #[test]
    fn clones_share_the_same_scope() {
        let names = StringInterner::new();
        let x = names.intern("x");

        let env = Environment::new();
        let alias = env.clone();
        alias.set(x, Value::Int(7));
        assert_eq!(env.get(x), Some(Value::Int(7)));
    }
}
