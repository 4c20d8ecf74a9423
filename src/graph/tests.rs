use super::*;
use crate::character::{char, digit};
use crate::settable::Settable;

#[test]
fn transitive_children_includes_root_and_visits_each_once() {
    let leaf = digit();
    let p = leaf.clone().seq(leaf.clone());
    let nodes = transitive_children(&p);
    assert_eq!(nodes[0].id(), p.id());
    assert_eq!(nodes.iter().filter(|n| n.id() == leaf.id()).count(), 1);
}

#[test]
fn transitive_children_terminates_on_cycles() {
    let settable = Settable::new();
    let root = char('(').seq(settable.parser()).seq(char(')')).or(digit());
    settable.set(root.clone()).unwrap();
    let nodes = transitive_children(&root);
    assert!(nodes.iter().any(|n| n.id() == root.id()));
}

#[test]
fn deep_copy_is_structurally_equal_and_shares_no_nodes() {
    let p = digit().plus().seq(char('.').seq(digit().plus()).optional());
    let copy = p.deep_copy();
    assert!(p.structural_eq(&copy));
    assert_ne!(p.id(), copy.id());
    for (a, b) in transitive_children(&p).iter().zip(transitive_children(&copy).iter()) {
        assert_ne!(a.id(), b.id());
    }
}

#[test]
fn deep_copy_preserves_cycle_shape() {
    let settable = Settable::new();
    let root = char('(').seq(settable.parser()).seq(char(')')).or(digit());
    settable.set(root.clone()).unwrap();

    let copy = root.deep_copy();
    assert!(root.structural_eq(&copy));
    assert!(copy.accept("((5))"));
}

#[test]
fn replace_all_is_idempotent() {
    let old = char('x');
    let new = digit();
    let root = old.clone().seq(old.clone());
    root.replace_all(&old, &new);
    assert!(root.accept("55"));
    root.replace_all(&old, &new);
    assert!(root.accept("55"));
}

#[test]
fn structural_eq_distinguishes_different_configuration() {
    assert!(char('a').structural_eq(&char('a')));
    assert!(!char('a').structural_eq(&char('b')));
}

#[test]
fn matches_scans_non_overlapping() {
    let found: Vec<_> = digit().plus().flatten().matches("a12b345c").collect();
    let spans: Vec<_> = found.iter().map(|(_, s, e)| (*s, *e)).collect();
    assert_eq!(spans, vec![(1, 3), (4, 7)]);
}
