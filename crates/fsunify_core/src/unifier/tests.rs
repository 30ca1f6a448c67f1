//! Concrete worked scenarios, plus targeted regression tests for the
//! quantified invariants that are awkward to express as property tests
//! (input preservation, no-shared-mutable-state).

use pretty_assertions::assert_eq;

use fsunify_ir::{Symbol, SymbolInterner};

use crate::error::UnifyFailure;
use crate::node::{Arc, Kind, NodeId};

use super::Unifier;

struct Fixture {
    interner: SymbolInterner,
    unifier: Unifier,
}

impl Fixture {
    fn new() -> Self {
        Self {
            interner: SymbolInterner::new(),
            unifier: Unifier::new(),
        }
    }

    fn sym(&self, s: &str) -> Symbol {
        self.interner.intern(s)
    }

    fn leaf(&mut self, name: &str) -> NodeId {
        let sym = self.sym(name);
        self.unifier.make_leaf(sym)
    }

    fn complex(&mut self, arcs: &[(&str, NodeId)]) -> NodeId {
        let arcs = arcs
            .iter()
            .map(|(label, child)| Arc {
                label: self.sym(label),
                child: *child,
            })
            .collect();
        match self.unifier.make_complex(arcs) {
            Ok(node) => node,
            Err(err) => panic!("test fixtures never build duplicate-label graphs: {err}"),
        }
    }

    fn leaf_name(&self, node: NodeId) -> Symbol {
        match self.unifier.kind(node) {
            Kind::Leaf(name) => *name,
            other => panic!("expected a leaf node, found {other:?}"),
        }
    }
}

#[test]
fn scenario_1_leaf_equality() {
    let mut f = Fixture::new();
    let a1 = f.leaf("A");
    let a2 = f.leaf("A");
    let result = f.unifier.unify(a1, a2);
    assert!(result.is_ok());
    match result {
        Ok(node) => assert_eq!(f.leaf_name(node), f.sym("A")),
        Err(_) => panic!("equal leaves must unify"),
    }
}

#[test]
fn scenario_2_leaf_clash() {
    let mut f = Fixture::new();
    let a = f.leaf("A");
    let b = f.leaf("B");
    let result = f.unifier.unify(a, b);
    assert!(matches!(result, Err(UnifyFailure::LeafClash { .. })));
}

#[test]
fn scenario_3_disjoint_merge() {
    let mut f = Fixture::new();
    let x = f.leaf("X");
    let y = f.leaf("Y");
    let left = f.complex(&[("f", x)]);
    let right = f.complex(&[("g", y)]);
    let result = f.unifier.unify(left, right);
    assert!(result.is_ok());

    let expected_x = f.leaf("X");
    let expected_y = f.leaf("Y");
    let expected = f.complex(&[("f", expected_x), ("g", expected_y)]);
    if let Ok(result) = result {
        assert!(f.unifier.equal(result, expected));
    }
}

#[test]
fn scenario_4_shared_feature_recursion() {
    let mut f = Fixture::new();
    let a1 = f.leaf("A");
    let left = f.complex(&[("f", a1)]);

    let a2 = f.leaf("A");
    let y = f.leaf("Y");
    let right = f.complex(&[("f", a2), ("g", y)]);

    let result = f.unifier.unify(left, right);
    assert!(result.is_ok());

    let expected_a = f.leaf("A");
    let expected_y = f.leaf("Y");
    let expected = f.complex(&[("f", expected_a), ("g", expected_y)]);
    if let Ok(result) = result {
        assert!(f.unifier.equal(result, expected));
    }
}

#[test]
fn scenario_5_shared_feature_clash_preserves_inputs() {
    let mut f = Fixture::new();
    let a = f.leaf("A");
    let left = f.complex(&[("f", a)]);
    let b = f.leaf("B");
    let right = f.complex(&[("f", b)]);

    let result = f.unifier.unify(left, right);
    assert!(matches!(result, Err(UnifyFailure::LeafClash { .. })));

    // Input preservation: each input must still unify with itself after
    // the failed episode, producing a graph structurally equal to itself.
    let left_self = f.unifier.unify(left, left);
    assert!(left_self.is_ok());
    if let Ok(left_self) = left_self {
        assert!(f.unifier.equal(left_self, left));
    }

    let right_self = f.unifier.unify(right, right);
    assert!(right_self.is_ok());
    if let Ok(right_self) = right_self {
        assert!(f.unifier.equal(right_self, right));
    }
}

#[test]
fn scenario_6_nested() {
    let mut f = Fixture::new();
    let a = f.leaf("A");
    let h_side = f.complex(&[("h", a)]);
    let left = f.complex(&[("f", h_side)]);

    let b = f.leaf("B");
    let k_side = f.complex(&[("k", b)]);
    let c = f.leaf("C");
    let right = f.complex(&[("f", k_side), ("g", c)]);

    let result = f.unifier.unify(left, right);
    assert!(result.is_ok());

    let expected_a = f.leaf("A");
    let expected_b = f.leaf("B");
    let expected_inner = f.complex(&[("h", expected_a), ("k", expected_b)]);
    let expected_c = f.leaf("C");
    let expected = f.complex(&[("f", expected_inner), ("g", expected_c)]);
    if let Ok(result) = result {
        assert!(f.unifier.equal(result, expected));
    }
}

#[test]
fn idempotence_unify_with_self() {
    let mut f = Fixture::new();
    let a = f.leaf("A");
    let x = f.complex(&[("f", a)]);
    let result = f.unifier.unify(x, x);
    assert!(result.is_ok());
    if let Ok(result) = result {
        assert!(f.unifier.equal(result, x));
    }
}

#[test]
fn commutativity_of_success() {
    let mut f1 = Fixture::new();
    let a1 = f1.leaf("A");
    let left1 = f1.complex(&[("f", a1)]);
    let y1 = f1.leaf("Y");
    let right1 = f1.complex(&[("g", y1)]);
    let forward = f1.unifier.unify(left1, right1);
    assert!(forward.is_ok());

    let mut f2 = Fixture::new();
    let a2 = f2.leaf("A");
    let left2 = f2.complex(&[("f", a2)]);
    let y2 = f2.leaf("Y");
    let right2 = f2.complex(&[("g", y2)]);
    let backward = f2.unifier.unify(right2, left2);
    assert!(backward.is_ok());

    if let (Ok(forward), Ok(backward)) = (forward, backward) {
        assert_eq!(
            f1.unifier.arc_list(forward).len(),
            f2.unifier.arc_list(backward).len()
        );
    }
}

#[test]
fn re_entrant_shared_substructure_copies_once() {
    // Two arcs of the same node pointing at the same shared child; after
    // unification with a compatible structure, copy-out must produce
    // exactly one fresh node for the shared child, reachable from both
    // arcs, rather than two independent copies.
    let mut f = Fixture::new();
    let shared = f.leaf("A");
    let left = f.complex(&[("f", shared), ("g", shared)]);

    let other_shared = f.leaf("A");
    let right = f.complex(&[("f", other_shared), ("g", other_shared)]);

    let result = f.unifier.unify(left, right);
    assert!(result.is_ok());
    let Ok(result) = result else {
        panic!("shared substructure must unify");
    };
    let arcs = f.unifier.arc_list(result).to_vec();
    let f_label = f.sym("f");
    let g_label = f.sym("g");
    let f_child = arcs.iter().find(|arc| arc.label == f_label).map(|arc| arc.child);
    let g_child = arcs.iter().find(|arc| arc.label == g_label).map(|arc| arc.child);
    assert_eq!(f_child, g_child);
}

#[test]
#[should_panic(expected = "forward cycle detected")]
fn dereference_panics_on_forward_cycle() {
    let mut f = Fixture::new();
    let a = f.leaf("A");
    let b = f.leaf("B");
    f.unifier.current_generation = f.unifier.counter.advance();
    f.unifier.set_forward(a, b);
    f.unifier.set_forward(b, a);
    f.unifier.dereference(a);
}

#[test]
fn atomic_unifies_with_itself() {
    let mut f = Fixture::new();
    let a = f.unifier.make_atomic();
    let result = f.unifier.unify(a, a);
    assert!(result.is_ok());
}

#[test]
fn distinct_atomics_never_unify() {
    let mut f = Fixture::new();
    let a = f.unifier.make_atomic();
    let b = f.unifier.make_atomic();
    let result = f.unifier.unify(a, b);
    assert!(matches!(result, Err(UnifyFailure::AtomicMismatch { .. })));
}

#[test]
fn atomic_never_specializes_into_leaf_or_complex() {
    let mut f = Fixture::new();
    let atomic = f.unifier.make_atomic();
    let leaf = f.leaf("A");
    assert!(matches!(
        f.unifier.unify(atomic, leaf),
        Err(UnifyFailure::AtomicMismatch { .. })
    ));

    let atomic2 = f.unifier.make_atomic();
    let x = f.leaf("X");
    let complex = f.complex(&[("f", x)]);
    assert!(matches!(
        f.unifier.unify(atomic2, complex),
        Err(UnifyFailure::AtomicMismatch { .. })
    ));
}
