//! Node constructors: `make_atomic`, `make_leaf`, `make_complex`.

use fsunify_ir::Symbol;
use rustc_hash::FxHashSet;

use crate::error::GraphError;
use crate::node::{Arc, NodeData, NodeId};

use super::Unifier;

impl Unifier {
    /// Allocate a node with no sub-structure and no identity beyond
    /// reference equality. It unifies only with itself.
    ///
    /// Not part of the public surface: `Atomic` exists for the data
    /// model's completeness and for copy-out to reproduce one if it is
    /// ever reached, but named constants are built with `make_leaf`.
    pub(crate) fn make_atomic(&mut self) -> NodeId {
        self.push_node(NodeData::atomic())
    }

    /// Allocate a leaf node carrying `name`. Two leaves unify iff their
    /// names are equal.
    pub fn make_leaf(&mut self, name: Symbol) -> NodeId {
        self.push_node(NodeData::leaf(name))
    }

    /// Allocate a complex node with the given arcs.
    ///
    /// Rejects a caller-supplied arc list containing a repeated label
    /// before anything is added to the arena, so a rejected graph never
    /// partially exists.
    pub fn make_complex(&mut self, arcs: Vec<Arc>) -> Result<NodeId, GraphError> {
        let mut seen = FxHashSet::default();
        for arc in &arcs {
            if !seen.insert(arc.label) {
                return Err(GraphError::DuplicateLabel { label: arc.label });
            }
        }
        Ok(self.push_node(NodeData::complex(arcs)))
    }
}
