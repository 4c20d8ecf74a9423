use super::*;
use crate::character::{char, digit};

#[test]
fn unassigned_settable_fails_with_well_defined_message() {
    let s = Settable::new();
    let result = s.parser().parse("anything");
    assert!(result.is_failure());
    assert_eq!(result.message(), Some("undefined settable parser"));
}

#[test]
fn set_ties_a_recursive_grammar() {
    let s = Settable::new();
    let expr = digit().or(char('(').seq(s.parser()).seq(char(')')).pick(1));
    s.set(expr.clone()).unwrap();

    assert!(expr.accept("5"));
    assert!(expr.accept("((3))"));
    assert!(!expr.accept("(("));
}

#[test]
fn set_twice_is_an_error() {
    let s = Settable::new();
    s.set(digit()).unwrap();
    let err = s.set(char('a')).unwrap_err();
    assert!(matches!(err, ConstructionError::SettableAlreadyAssigned));
}
