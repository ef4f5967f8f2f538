//! Symbol interning for identifiers.
//!
//! [`Symbol`] is a small `Copy` handle to a string owned by an [`Interner`].
//! Unlike a global, lazily-initialized string table, the interner here is
//! owned by whichever [`crate::span`]-using run constructs it (one per lex/parse/
//! analyze invocation) — SPEC_FULL §5/§9 require no process-global state, so
//! that independent analyses never share or contend over interned names.
//!
//! Interned strings are leaked to `'static` so `Symbol::as_str` can hand out a
//! `&'static str` without borrowing the interner; this is acceptable because a
//! single SNL source file has a small, bounded identifier set and the process
//! exits (or constructs a fresh interner) long before that would matter.

use rustc_hash::FxHashMap;

/// A handle to an interned string.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Symbol(&'static str);

impl Symbol {
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Debug for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Symbol({:?})", self.0)
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Owns the set of interned strings for one compiler run.
#[derive(Default)]
pub struct Interner {
    map: FxHashMap<&'static str, Symbol>,
}

impl Interner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn intern(&mut self, s: &str) -> Symbol {
        if let Some(sym) = self.map.get(s) {
            return *sym;
        }
        let leaked: &'static str = Box::leak(s.to_owned().into_boxed_str());
        let sym = Symbol(leaked);
        self.map.insert(leaked, sym);
        sym
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
