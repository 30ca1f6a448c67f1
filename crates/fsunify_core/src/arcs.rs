//! Arc set operations (C4): pure intersection and complement by label.
//!
//! Neither function touches scratch fields; both operate on plain slices
//! so they can be used equally on a node's primary `arc_list`, its live
//! `comp_arcs`, or a caller-assembled combination of the two.

use fsunify_ir::Symbol;
use rustc_hash::FxHashSet;

use crate::node::Arc;

/// Arcs of `a` whose label also appears in `b`, in `a`'s order.
pub(crate) fn intersect_by_label(a: &[Arc], b: &[Arc]) -> Vec<Arc> {
    let labels: FxHashSet<Symbol> = b.iter().map(|arc| arc.label).collect();
    a.iter().filter(|arc| labels.contains(&arc.label)).copied().collect()
}

/// Arcs of `a` whose label does not appear in `b`, in `a`'s order.
pub(crate) fn complement_by_label(a: &[Arc], b: &[Arc]) -> Vec<Arc> {
    let labels: FxHashSet<Symbol> = b.iter().map(|arc| arc.label).collect();
    a.iter().filter(|arc| !labels.contains(&arc.label)).copied().collect()
}

/// The first arc in `arcs` carrying `label`, if any.
pub(crate) fn find_by_label(arcs: &[Arc], label: Symbol) -> Option<Arc> {
    arcs.iter().copied().find(|arc| arc.label == label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeId;
    use fsunify_ir::SymbolInterner;

    fn arc(interner: &SymbolInterner, label: &str, child: u32) -> Arc {
        Arc {
            label: interner.intern(label),
            child: NodeId::from_raw(child),
        }
    }

    #[test]
    fn intersect_preserves_a_order() {
        let interner = SymbolInterner::new();
        let a = [
            arc(&interner, "f", 10),
            arc(&interner, "g", 20),
            arc(&interner, "h", 30),
        ];
        let b = [arc(&interner, "h", 99), arc(&interner, "f", 88)];
        let shared = intersect_by_label(&a, &b);
        assert_eq!(shared, vec![arc(&interner, "f", 10), arc(&interner, "h", 30)]);
    }

    #[test]
    fn complement_preserves_a_order() {
        let interner = SymbolInterner::new();
        let a = [
            arc(&interner, "f", 10),
            arc(&interner, "g", 20),
            arc(&interner, "h", 30),
        ];
        let b = [arc(&interner, "h", 99), arc(&interner, "f", 88)];
        let new = complement_by_label(&a, &b);
        assert_eq!(new, vec![arc(&interner, "g", 20)]);
    }

    #[test]
    fn find_by_label_returns_first_match() {
        let interner = SymbolInterner::new();
        let arcs = [arc(&interner, "f", 10), arc(&interner, "g", 20)];
        assert_eq!(
            find_by_label(&arcs, interner.intern("g")),
            Some(arc(&interner, "g", 20))
        );
        assert_eq!(find_by_label(&arcs, interner.intern("z")), None);
    }
}
