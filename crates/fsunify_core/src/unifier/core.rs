//! Unify-core (C5): the recursive quasi-destructive unification procedure.

use fsunify_ir::Symbol;
use fsunify_stack::ensure_sufficient_stack;

use crate::arcs::{complement_by_label, find_by_label, intersect_by_label};
use crate::error::UnifyFailure;
use crate::node::{Kind, NodeId};

use super::Unifier;

impl Unifier {
    /// Attempt to unify `n1` and `n2`.
    ///
    /// Advances the generation once at the start of the episode and reuses
    /// that value for every scratch stamp written during it, then
    /// recursively merges scratch state. On success, materializes and
    /// returns a fresh result graph via copy-out; on failure, scratch
    /// state may be left dirty but is harmless, since it carries a
    /// generation tag the next episode will never match.
    pub fn unify(&mut self, n1: NodeId, n2: NodeId) -> Result<NodeId, UnifyFailure> {
        self.current_generation = self.counter.advance();
        let mut path = Vec::new();
        let representative = self.unify_step(n1, n2, &mut path)?;
        let representative = self.dereference(representative);
        Ok(self.copy_out(representative))
    }

    /// One recursive descent of unify-core. Each call is wrapped so the
    /// stack grows on demand rather than overflowing on deeply nested
    /// feature structures.
    fn unify_step(
        &mut self,
        n1: NodeId,
        n2: NodeId,
        path: &mut Vec<Symbol>,
    ) -> Result<NodeId, UnifyFailure> {
        ensure_sufficient_stack(|| self.unify_step_inner(n1, n2, path))
    }

    fn unify_step_inner(
        &mut self,
        n1: NodeId,
        n2: NodeId,
        path: &mut Vec<Symbol>,
    ) -> Result<NodeId, UnifyFailure> {
        let d1 = self.dereference(n1);
        let d2 = self.dereference(n2);

        if d1 == d2 {
            tracing::trace!(node = ?d1, "already unified, same representative");
            return Ok(d1);
        }

        match (self.kind(d1).clone(), self.kind(d2).clone()) {
            (Kind::Leaf(a), Kind::Leaf(b)) => {
                if a == b {
                    tracing::debug!(name = ?a, "leaf/leaf match");
                    Ok(d1)
                } else {
                    tracing::debug!(left = ?a, right = ?b, ?path, "leaf/leaf clash");
                    Err(UnifyFailure::LeafClash {
                        left: a,
                        right: b,
                        path: path.clone(),
                    })
                }
            }
            (Kind::Leaf(_), Kind::Complex) => {
                tracing::trace!(leaf = ?d1, complex = ?d2, "leaf promoted into complex");
                self.set_forward(d1, d2);
                Ok(d2)
            }
            (Kind::Complex, Kind::Leaf(_)) => {
                tracing::trace!(leaf = ?d2, complex = ?d1, "leaf promoted into complex");
                self.set_forward(d2, d1);
                Ok(d1)
            }
            (Kind::Complex, Kind::Complex) => self.unify_complex(d1, d2, path),
            _ => {
                tracing::debug!(left = ?d1, right = ?d2, ?path, "atomic mismatch");
                Err(UnifyFailure::AtomicMismatch { path: path.clone() })
            }
        }
    }

    fn unify_complex(
        &mut self,
        d1: NodeId,
        d2: NodeId,
        path: &mut Vec<Symbol>,
    ) -> Result<NodeId, UnifyFailure> {
        let arcs1 = self.effective_arcs(d1);
        let arcs2 = self.effective_arcs(d2);
        let shared = intersect_by_label(&arcs1, &arcs2);
        let new = complement_by_label(&arcs2, &arcs1);

        for arc in &shared {
            let a1 = match find_by_label(&arcs1, arc.label) {
                Some(a1) => a1,
                None => unreachable!("label from intersect_by_label must exist in arcs1"),
            };
            path.push(arc.label);
            let result = self.unify_step(a1.child, arc.child, path);
            path.pop();
            result?;
        }

        for arc in new {
            self.push_comp_arc(d1, arc);
        }

        tracing::trace!(left = ?d1, right = ?d2, "complex/complex join");
        self.set_forward(d1, d2);
        Ok(d2)
    }
}
