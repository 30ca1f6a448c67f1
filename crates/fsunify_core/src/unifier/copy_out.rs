//! Copy-out (C6): materialize a fresh, independent graph from a
//! successfully unified representative.

use rustc_hash::FxHashSet;

use fsunify_stack::ensure_sufficient_stack;

use crate::node::{Arc, Kind, NodeId};

use super::Unifier;

impl Unifier {
    /// Produce a fresh, standalone graph representing the unified result
    /// reachable from `n`.
    ///
    /// `n` need not itself be a representative; this dereferences first,
    /// so calling copy-out on an original input that was forwarded away
    /// during unification still yields the unified result rather than
    /// stale pre-merge data. Every recursive call below goes back through
    /// this method rather than calling `copy_out_step` directly, for the
    /// same reason: an arc's child may itself carry a live forward
    /// pointer from having been merged earlier in the same episode.
    pub(crate) fn copy_out(&mut self, n: NodeId) -> NodeId {
        let representative = self.dereference(n);
        self.copy_out_step(representative)
    }

    /// One recursive descent of copy-out, wrapped so the stack grows on
    /// demand for deeply nested results.
    fn copy_out_step(&mut self, r: NodeId) -> NodeId {
        ensure_sufficient_stack(|| self.copy_out_inner(r))
    }

    fn copy_out_inner(&mut self, r: NodeId) -> NodeId {
        if let Some(existing) = self.live_copy(r) {
            tracing::trace!(node = ?r, copy = ?existing, "re-entrant share, reusing copy");
            return existing;
        }

        let fresh = match self.kind(r).clone() {
            Kind::Atomic => self.make_atomic(),
            Kind::Leaf(name) => self.make_leaf(name),
            Kind::Complex => self.push_node(crate::node::NodeData::complex(Vec::new())),
        };

        // Publish before recursing so re-entrant sharing through `r`'s own
        // descendants terminates instead of looping forever.
        self.set_copy(r, fresh);

        if matches!(self.kind(r), Kind::Complex) {
            let arcs = self.effective_arcs(r);
            let mut seen = FxHashSet::default();
            for arc in arcs {
                if !seen.insert(arc.label) {
                    tracing::error!(label = ?arc.label, node = ?r, "duplicate label across arc_list and comp_arcs");
                    panic!(
                        "fsunify_core: label {:?} duplicated across arc_list and comp_arcs \
                         on {r:?} (invariant 4 violated)",
                        arc.label
                    );
                }
                let child_copy = self.copy_out(arc.child);
                self.push_arc_to_fresh_node(
                    fresh,
                    Arc {
                        label: arc.label,
                        child: child_copy,
                    },
                );
            }
        }

        fresh
    }
}
