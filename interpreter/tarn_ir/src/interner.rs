//! String interner for identifier storage.
//!
//! Provides O(1) interning and lookup. Interned strings live for the
//! process lifetime (they are leaked on first insertion), which lets
//! `resolve` hand out `&'static str` without holding a borrow open.
//!
//! The interner is single-threaded: the evaluator, parser, and REPL all
//! run on the calling thread, so interior mutability via `RefCell` is
//! enough and callers share the interner by plain reference.

use crate::Name;
use rustc_hash::FxHashMap;
use std::cell::RefCell;

struct Inner {
    /// Map from string content to index.
    map: FxHashMap<&'static str, u32>,
    /// Storage for string contents, indexed by `Name::raw()`.
    strings: Vec<&'static str>,
}

/// String interner mapping identifier text to compact [`Name`]s.
pub struct StringInterner {
    inner: RefCell<Inner>,
}

impl StringInterner {
    /// Create a new interner with the empty string pre-interned at index 0.
    pub fn new() -> Self {
        let empty: &'static str = "";
        let mut map = FxHashMap::default();
        map.insert(empty, 0);
        StringInterner {
            inner: RefCell::new(Inner {
                map,
                strings: vec![empty],
            }),
        }
    }

    /// Intern a string, returning its `Name`.
    ///
    /// Interning the same content twice returns the same `Name`.
    pub fn intern(&self, s: &str) -> Name {
        let mut inner = self.inner.borrow_mut();
        if let Some(&idx) = inner.map.get(s) {
            return Name::from_raw(idx);
        }
        let leaked: &'static str = Box::leak(s.to_owned().into_boxed_str());
        let idx = u32::try_from(inner.strings.len()).unwrap_or(u32::MAX);
        inner.map.insert(leaked, idx);
        inner.strings.push(leaked);
        Name::from_raw(idx)
    }

    /// Resolve a `Name` back to its string content.
    ///
    /// Returns the empty string for a `Name` that was not produced by this
    /// interner.
    pub fn resolve(&self, name: Name) -> &'static str {
        self.inner
            .borrow()
            .strings
            .get(name.raw() as usize)
            .copied()
            .unwrap_or("")
    }

    /// Number of interned strings (including the pre-interned empty string).
    pub fn len(&self) -> usize {
        self.inner.borrow().strings.len()
    }

    /// Always false: the empty string is pre-interned.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}
