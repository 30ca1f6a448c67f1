//! String interner for leaf names and arc labels.
//!
//! Unlike a compiler's identifier table, a grammar's alphabet of feature
//! labels and atomic leaf names is small and fixed up front, so a single
//! lock-guarded table is enough; there is no need for the sharding a
//! full-language identifier interner would use under contention.

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::Symbol;

/// Error when interning a string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternError {
    /// The table exceeded `u32::MAX` distinct symbols.
    Overflow { count: usize },
}

impl std::fmt::Display for InternError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InternError::Overflow { count } => {
                write!(f, "symbol table exceeded capacity: {count} symbols interned")
            }
        }
    }
}

impl std::error::Error for InternError {}

struct Table {
    map: FxHashMap<&'static str, u32>,
    strings: Vec<&'static str>,
}

impl Table {
    fn with_empty() -> Self {
        let empty: &'static str = "";
        let mut map = FxHashMap::default();
        map.insert(empty, 0);
        Self {
            map,
            strings: vec![empty],
        }
    }
}

/// Interns strings into [`Symbol`] handles.
///
/// Interning is idempotent: interning the same text twice returns the same
/// `Symbol`. A `SymbolInterner` is typically shared across every node in
/// one or more unifier instances, so that a `Symbol` always means the same
/// text no matter which instance produced the node carrying it.
pub struct SymbolInterner {
    table: RwLock<Table>,
}

impl SymbolInterner {
    /// Create a new interner with only the empty string pre-interned.
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table::with_empty()),
        }
    }

    /// Intern `s`, returning its `Symbol`.
    ///
    /// # Panics
    ///
    /// Panics if the table has interned `u32::MAX` distinct strings
    /// already; see [`try_intern`](Self::try_intern) for a fallible
    /// version.
    pub fn intern(&self, s: &str) -> Symbol {
        match self.try_intern(s) {
            Ok(symbol) => symbol,
            Err(err) => panic!("fsunify_ir: {err}"),
        }
    }

    /// Try to intern `s`, returning an error instead of panicking on
    /// overflow.
    pub fn try_intern(&self, s: &str) -> Result<Symbol, InternError> {
        {
            let guard = self.table.read();
            if let Some(&idx) = guard.map.get(s) {
                return Ok(Symbol::from_raw(idx));
            }
        }

        let mut guard = self.table.write();
        // Re-check: another writer may have interned `s` while we waited
        // for the write lock.
        if let Some(&idx) = guard.map.get(s) {
            return Ok(Symbol::from_raw(idx));
        }

        let idx = u32::try_from(guard.strings.len()).map_err(|_| InternError::Overflow {
            count: guard.strings.len(),
        })?;

        let leaked: &'static str = Box::leak(s.to_owned().into_boxed_str());
        guard.strings.push(leaked);
        guard.map.insert(leaked, idx);
        Ok(Symbol::from_raw(idx))
    }

    /// Look up the text a symbol was interned from.
    ///
    /// # Panics
    ///
    /// Panics if `symbol` was not produced by this interner.
    pub fn lookup(&self, symbol: Symbol) -> &'static str {
        let guard = self.table.read();
        match guard.strings.get(symbol.raw() as usize) {
            Some(&s) => s,
            None => panic!("fsunify_ir: symbol {symbol:?} does not belong to this interner"),
        }
    }

    /// Number of distinct strings interned so far (including the empty
    /// string pre-interned at construction).
    pub fn len(&self) -> usize {
        self.table.read().strings.len()
    }

    /// Whether only the pre-interned empty string is present.
    pub fn is_empty(&self) -> bool {
        self.len() <= 1
    }
}

impl Default for SymbolInterner {
    fn default() -> Self {
        Self::new()
    }
}
