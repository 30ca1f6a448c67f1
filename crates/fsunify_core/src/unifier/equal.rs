//! Optional structural equality: `equal(n1, n2)`, modulo arc order.
//!
//! Read-only: resolves representatives without path compression and never
//! advances the generation, so it may be called between episodes without
//! side effects.

use crate::node::Kind;
use crate::node::NodeId;

use super::Unifier;

impl Unifier {
    /// Structural equality of the graphs rooted at `n1` and `n2`, modulo
    /// arc order within each complex node.
    pub fn equal(&self, n1: NodeId, n2: NodeId) -> bool {
        self.equal_inner(n1, n2)
    }

    fn equal_inner(&self, n1: NodeId, n2: NodeId) -> bool {
        let d1 = self.dereference_readonly(n1);
        let d2 = self.dereference_readonly(n2);

        if d1 == d2 {
            return true;
        }

        match (self.kind(d1), self.kind(d2)) {
            (Kind::Atomic, Kind::Atomic) => false,
            (Kind::Leaf(a), Kind::Leaf(b)) => a == b,
            (Kind::Complex, Kind::Complex) => {
                let arcs1 = self.arc_list(d1);
                let arcs2 = self.arc_list(d2);
                if arcs1.len() != arcs2.len() {
                    return false;
                }
                arcs1.iter().all(|arc| {
                    arcs2
                        .iter()
                        .find(|other| other.label == arc.label)
                        .is_some_and(|other| self.equal_inner(arc.child, other.child))
                })
            }
            _ => false,
        }
    }
}
