//! Interned symbols for feature-structure unification.
//!
//! Leaf names and arc labels are both "an open alphabet of symbols"; this
//! crate provides the single interned representation ([`Symbol`]) and
//! table ([`SymbolInterner`]) shared by both roles, plus the error type
//! for a full table.
//!
//! # Design
//!
//! - **Intern everything**: symbols compare by `u32` equality, never by
//!   string comparison.
//! - **One table, two roles**: `fsunify_core` uses the same `Symbol` type
//!   for leaf names and arc labels; nothing here distinguishes the two,
//!   since the alphabet and the comparison semantics are identical.

mod interner;
mod symbol;

pub use interner::{InternError, SymbolInterner};
pub use symbol::Symbol;
