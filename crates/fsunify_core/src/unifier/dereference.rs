//! Dereference (C3): follow live `forward` pointers to a representative.
//!
//! A mutating, path-compressing variant for the hot path inside
//! unify-core and copy-out, and a read-only variant for callers (like
//! `equal`) that must not perturb scratch state.

use crate::node::NodeId;

use super::Unifier;

impl Unifier {
    /// Follow `id`'s live `forward` chain to its representative,
    /// compressing the path so every visited node points directly at the
    /// representative afterward.
    ///
    /// Panics if the chain revisits a node, which would mean a `forward`
    /// cycle was created (invariant 1) — a bug in unify-core, never a
    /// reachable user-facing outcome.
    pub(crate) fn dereference(&mut self, id: NodeId) -> NodeId {
        let mut path = vec![id];
        let mut current = id;
        while let Some(next) = self.live_forward(current) {
            if path.contains(&next) {
                tracing::error!(node = ?next, "forward cycle detected during dereference");
                panic!("fsunify_core: forward cycle detected at {next:?} (invariant 1 violated)");
            }
            path.push(next);
            current = next;
        }
        let representative = current;
        for node in path {
            if node != representative {
                self.set_forward(node, representative);
            }
        }
        representative
    }

    /// Read-only dereference: follows the live `forward` chain without
    /// compressing it or touching any scratch field.
    pub(crate) fn dereference_readonly(&self, id: NodeId) -> NodeId {
        let mut path = vec![id];
        let mut current = id;
        while let Some(next) = self.live_forward(current) {
            if path.contains(&next) {
                tracing::error!(node = ?next, "forward cycle detected during read-only dereference");
                panic!("fsunify_core: forward cycle detected at {next:?} (invariant 1 violated)");
            }
            path.push(next);
            current = next;
        }
        current
    }
}
