//! The unifier instance: owns one node arena and one generation counter.
//! `make_leaf`, `make_complex`, `unify`, and `equal` are all methods on
//! this type rather than free functions over ambient state, since a
//! generation stamp is only meaningful relative to the one counter that
//! produced it.

mod construct;
mod copy_out;
mod core;
mod dereference;
mod equal;

#[cfg(test)]
mod tests;

use crate::generation::{Generation, GenerationCounter};
use crate::node::{Arc, Kind, NodeData, NodeId, Scratch};

/// Owns a node arena and a generation counter.
///
/// A feature unifier has exactly one long-lived owner of both the arena
/// and the generation counter, so they are merged into a single type
/// here rather than split across a long-lived store and short-lived
/// borrows of it (see DESIGN.md).
pub struct Unifier {
    arena: Vec<NodeData>,
    counter: GenerationCounter,
    current_generation: Generation,
}

impl Unifier {
    /// Create an empty unifier instance.
    pub fn new() -> Self {
        Self {
            arena: Vec::new(),
            counter: GenerationCounter::new(),
            // No episode has run yet; every node's scratch.generation
            // starts at `Generation::NONE`, so using the same sentinel
            // here means nothing reads as live before the first `unify`.
            current_generation: Generation::NONE,
        }
    }

    pub(crate) fn push_node(&mut self, data: NodeData) -> NodeId {
        let id = NodeId::from_raw(u32::try_from(self.arena.len()).unwrap_or_else(|_| {
            panic!("fsunify_core: node arena exceeded u32::MAX entries")
        }));
        self.arena.push(data);
        id
    }

    pub(crate) fn node(&self, id: NodeId) -> &NodeData {
        &self.arena[id.index()]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut NodeData {
        &mut self.arena[id.index()]
    }

    /// The node's kind: read-only accessor for its type/name.
    pub fn kind(&self, id: NodeId) -> &Kind {
        &self.node(id).kind
    }

    /// The node's primary arc list: read-only accessor for its arcs.
    /// Does not include live `comp_arcs`; see
    /// [`effective_arcs`](Self::effective_arcs) for the union a unification
    /// in progress actually sees.
    pub fn arc_list(&self, id: NodeId) -> &[Arc] {
        &self.node(id).arc_list
    }

    /// Number of nodes ever allocated in this instance (inputs, scratch
    /// representatives, and copy-out outputs all share the one arena).
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    // === Generation-gated scratch access ===
    //
    // `touch` is the single live-write accessor: the first write to a node
    // in a new generation resets the other three scratch fields to "not
    // merged" before applying the caller's write; later writes in the same
    // generation accumulate normally (invariant 5).

    fn touch(&mut self, id: NodeId) -> &mut Scratch {
        let current = self.current_generation;
        let scratch = &mut self.node_mut(id).scratch;
        if scratch.generation != current {
            scratch.generation = current;
            scratch.forward = None;
            scratch.comp_arcs.clear();
            scratch.copy = None;
        }
        scratch
    }

    fn is_live(&self, id: NodeId) -> bool {
        self.node(id).scratch.generation == self.current_generation
    }

    pub(crate) fn live_forward(&self, id: NodeId) -> Option<NodeId> {
        if self.is_live(id) {
            self.node(id).scratch.forward
        } else {
            None
        }
    }

    pub(crate) fn live_comp_arcs(&self, id: NodeId) -> &[Arc] {
        if self.is_live(id) {
            &self.node(id).scratch.comp_arcs
        } else {
            &[]
        }
    }

    pub(crate) fn live_copy(&self, id: NodeId) -> Option<NodeId> {
        if self.is_live(id) {
            self.node(id).scratch.copy
        } else {
            None
        }
    }

    pub(crate) fn set_forward(&mut self, id: NodeId, target: NodeId) {
        self.touch(id).forward = Some(target);
    }

    /// Append `arc` to `id`'s live `comp_arcs`, after checking it does not
    /// collide with `id`'s effective arc set (invariant 4).
    pub(crate) fn push_comp_arc(&mut self, id: NodeId, arc: Arc) {
        let clashes = self
            .effective_arcs(id)
            .iter()
            .any(|existing| existing.label == arc.label);
        if clashes {
            tracing::error!(?arc.label, node = ?id, "label already present when staging complement arc");
            panic!(
                "fsunify_core: label already present on {id:?} when staging a complement arc \
                 (invariant 4 violated)"
            );
        }
        self.touch(id).comp_arcs.push(arc);
    }

    pub(crate) fn set_copy(&mut self, id: NodeId, copy: NodeId) {
        self.touch(id).copy = Some(copy);
    }

    /// `id`'s effective arc set: its primary `arc_list` followed by its
    /// live `comp_arcs`. This is what unify-core and copy-out both mean
    /// by "the node's arcs" once a representative may already have
    /// absorbed complement arcs earlier in the same episode.
    pub(crate) fn effective_arcs(&self, id: NodeId) -> Vec<Arc> {
        let mut arcs = self.node(id).arc_list.clone();
        arcs.extend_from_slice(self.live_comp_arcs(id));
        arcs
    }

    /// Append `arc` directly to `id`'s primary arc list, bypassing the
    /// scratch gate.
    ///
    /// Only valid for a node still being assembled by copy-out: such a
    /// node was just allocated this call and is not yet visible to any
    /// other code path, so its "permanent" arc list is still under
    /// construction rather than the immutable structure an ordinary
    /// input node has from the moment it is built.
    pub(crate) fn push_arc_to_fresh_node(&mut self, id: NodeId, arc: Arc) {
        self.node_mut(id).arc_list.push(arc);
    }
}

impl Default for Unifier {
    fn default() -> Self {
        Self::new()
    }
}
