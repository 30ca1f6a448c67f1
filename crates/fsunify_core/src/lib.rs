//! Quasi-destructive graph unification over typed feature structures.
//!
//! Implements Tomabechi's algorithm: unification is attempted by mutating
//! scratch fields on the input graphs, but a monotonically increasing
//! generation counter invalidates those mutations across episodes, so a
//! failed or aborted unification leaves the original graphs logically
//! untouched. A successful unification produces a freshly copied result
//! that shares substructure with the inputs where safe.
//!
//! Everything is scoped to a [`Unifier`] instance: it owns the node arena
//! and the generation counter, and `make_leaf`/`make_complex`/`unify`/
//! `equal` are all methods on it. A process may host multiple independent
//! instances; nothing is shared between them except, optionally, a
//! [`fsunify_ir::SymbolInterner`] used to produce the leaf names and arc
//! labels passed in.
//!
//! ```
//! use fsunify_core::Unifier;
//! use fsunify_ir::SymbolInterner;
//!
//! let interner = SymbolInterner::new();
//! let mut unifier = Unifier::new();
//!
//! let a1 = unifier.make_leaf(interner.intern("A"));
//! let a2 = unifier.make_leaf(interner.intern("A"));
//! assert!(unifier.unify(a1, a2).is_ok());
//! ```

mod arcs;
mod error;
mod generation;
mod node;
mod unifier;

pub use error::{GraphError, UnifyFailure};
pub use node::{Arc, Kind, NodeId};
pub use unifier::Unifier;
