use super::*;
use crate::character::{char, digit};

#[test]
fn choice_tries_in_order() {
    let p = char('a').or(char('b'));
    assert!(p.accept("a"));
    assert!(p.accept("b"));
    assert!(!p.accept("c"));
}

#[test]
fn choice_reports_last_failure_when_all_fail() {
    let p = char('a').or(digit());
    let result = p.parse("x");
    assert!(result.is_failure());
    assert_eq!(result.message(), Some("expected a digit"));
}

#[test]
fn chained_or_flattens_into_one_node() {
    let p = char('a').or(char('b')).or(char('c'));
    assert_eq!(p.children().len(), 3);
}

#[test]
fn reused_choice_is_not_unpacked_as_an_argument() {
    let ab = char('a').or(char('b'));
    let wrapped = digit().or(ab.clone()).or(char('z'));
    assert_eq!(wrapped.children().len(), 3);
    assert!(wrapped.accept("a"));
    assert!(wrapped.accept("b"));
    assert!(wrapped.accept("z"));
}
