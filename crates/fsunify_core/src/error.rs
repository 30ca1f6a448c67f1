//! Error types.
//!
//! [`GraphError`] is an ordinary caller mistake caught at construction
//! time, before a graph ever reaches the unifier. [`UnifyFailure`] is the
//! expected, data-dependent outcome of two feature structures genuinely
//! disagreeing. Neither is used to represent an *invariant violation*
//! (a cycle in `forward`, a label duplicated across `arc_list` and
//! `comp_arcs`): those are programmer errors and are raised as panics
//! (preceded by a `tracing::error!` record) so they can never be silently
//! matched alongside an ordinary unification failure.

use fsunify_ir::Symbol;

/// Rejected at `make_complex` time: the caller supplied an arc list with a
/// repeated label.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum GraphError {
    /// `label` appeared more than once in the arc list passed to
    /// `make_complex`.
    DuplicateLabel { label: Symbol },
}

impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphError::DuplicateLabel { .. } => {
                write!(f, "duplicate arc label in make_complex")
            }
        }
    }
}

impl std::error::Error for GraphError {}

/// Two nodes could not be unified: an ordinary, expected, data-dependent
/// outcome rather than a programmer error.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum UnifyFailure {
    /// Two leaves disagreed on name.
    LeafClash {
        left: Symbol,
        right: Symbol,
        /// Arc labels from the two unification roots down to the pair of
        /// nodes that actually clashed, innermost last.
        path: Vec<Symbol>,
    },
    /// An atomic node was asked to unify with anything other than itself.
    AtomicMismatch { path: Vec<Symbol> },
}

impl UnifyFailure {
    /// The arc-label path from the unification roots to the clash.
    pub fn path(&self) -> &[Symbol] {
        match self {
            UnifyFailure::LeafClash { path, .. } | UnifyFailure::AtomicMismatch { path } => path,
        }
    }
}

impl std::fmt::Display for UnifyFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnifyFailure::LeafClash { .. } => {
                write!(f, "unification failure: leaf names disagree")
            }
            UnifyFailure::AtomicMismatch { .. } => {
                write!(f, "unification failure: incompatible atomic node")
            }
        }
    }
}

impl std::error::Error for UnifyFailure {}
