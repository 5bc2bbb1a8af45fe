//! String interning.
//!
//! The teacher's interner (`faxc-util::symbol`) is built for a concurrent,
//! multi-threaded frontend: `DashMap`, `ahash`, atomics. This compiler's
//! core is confirmed single-threaded and non-reentrant (one file in, two
//! strings out — see the driver crate), so the concurrency machinery has
//! no client here; `Interner` is a plain owned table instead.

use rustc_hash::FxHashMap;
use std::fmt;

/// A compact handle to an interned string.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(u32);

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.0)
    }
}

/// Owns the backing storage for every [`Symbol`] handed out.
#[derive(Default)]
pub struct Interner {
    strings: Vec<Box<str>>,
    lookup: FxHashMap<Box<str>, u32>,
}

impl Interner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern `text`, returning the existing symbol if already known.
    pub fn intern(&mut self, text: &str) -> Symbol {
        if let Some(&index) = self.lookup.get(text) {
            return Symbol(index);
        }
        let index = self.strings.len() as u32;
        let boxed: Box<str> = text.into();
        self.strings.push(boxed.clone());
        self.lookup.insert(boxed, index);
        Symbol(index)
    }

    pub fn resolve(&self, symbol: Symbol) -> &str {
        &self.strings[symbol.0 as usize]
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interning_the_same_text_twice_returns_the_same_symbol() {
        let mut interner = Interner::new();
        let a = interner.intern("πρόγραμμα");
        let b = interner.intern("πρόγραμμα");
        assert_eq!(a, b);
        assert_eq!(interner.resolve(a), "πρόγραμμα");
    }

    #[test]
    fn distinct_text_gets_distinct_symbols() {
        let mut interner = Interner::new();
        let a = interner.intern("a");
        let b = interner.intern("b");
        assert_ne!(a, b);
    }
}
