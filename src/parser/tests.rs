use super::*;
use crate::character::{char, digit};

#[test]
fn clone_is_a_cheap_handle_not_a_copy() {
    let p = char('a');
    let q = p.clone();
    assert_eq!(p, q);
    assert_eq!(p.id(), q.id());
}

#[test]
fn copy_shares_no_identity_but_shares_children() {
    let child = digit();
    let parent = child.clone().seq(child.clone());
    let copied = parent.copy();
    assert_ne!(parent.id(), copied.id());
    assert!(parent.children().iter().all(|c| c.id() == child.id()));
    assert!(copied.children().iter().all(|c| c.id() == child.id()));
}

#[test]
fn replace_rewrites_only_direct_children() {
    let old = char('x');
    let new = digit();
    let parent = old.clone().seq(old.clone());
    parent.replace(&old, &new);
    assert!(parent.accept("99"));
}

#[test]
fn pick_selects_list_element() {
    let p = char('a').seq(char('b')).seq(char('c')).pick(1);
    let result = p.parse("abc");
    assert_eq!(result.value(), Some(&Value::Char('b')));
}

#[test]
fn permute_reorders_list() {
    let p = char('a').seq(char('b')).permute(vec![1, 0]);
    let result = p.parse("ab");
    assert_eq!(
        result.value().unwrap(),
        &Value::List(vec![Value::Char('b'), Value::Char('a')])
    );
}

#[test]
fn trim_skips_surrounding_whitespace() {
    let p = digit().trim(None);
    let result = p.parse("  5  ");
    assert!(result.is_success());
    assert_eq!(result.value(), Some(&Value::Char('5')));
}

#[test]
fn trim_preserves_a_multi_part_sequence_as_one_slot() {
    let pair = digit().seq(digit());
    let result = pair.trim(None).parse(" 12 ");
    assert!(result.is_success());
    assert_eq!(
        result.value().unwrap(),
        &Value::List(vec![Value::Char('1'), Value::Char('2')])
    );
}

#[test]
fn star_and_plus_bounds() {
    assert!(char('a').star().accept(""));
    assert!(!char('a').plus().accept(""));
    assert!(char('a').plus().accept("a"));
}

#[test]
#[should_panic]
fn repeat_with_inverted_bounds_panics() {
    char('a').repeat(3, Bound::Finite(1));
}
