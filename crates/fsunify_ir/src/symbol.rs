//! Interned symbol handle.
//!
//! A [`Symbol`] is the shared representation for both leaf names and arc
//! labels (GLOSSARY: both are drawn from "an open alphabet of symbols").
//! Using one interned type for both means equality is always a 32-bit
//! integer comparison, never a string comparison, regardless of which role
//! a symbol is playing in a given node.

use std::fmt;

/// An interned string identifier.
///
/// Two symbols are equal iff they were interned from equal strings by the
/// same [`SymbolInterner`](crate::SymbolInterner). Symbols from different
/// interners must never be compared or mixed.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct Symbol(u32);

impl Symbol {
    /// Pre-interned empty string, always present at index 0.
    pub const EMPTY: Symbol = Symbol(0);

    /// Create a symbol from a raw index.
    ///
    /// Only [`SymbolInterner`](crate::SymbolInterner) should call this; a
    /// `Symbol` built from an index that was never interned is meaningless.
    #[inline]
    pub(crate) const fn from_raw(raw: u32) -> Self {
        Symbol(raw)
    }

    /// Get the raw index into the owning interner's string table.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.0)
    }
}

impl Default for Symbol {
    fn default() -> Self {
        Self::EMPTY
    }
}

// Compile-time size assertion: Symbol must stay a single 32-bit word.
const _: () = assert!(std::mem::size_of::<Symbol>() == 4);
