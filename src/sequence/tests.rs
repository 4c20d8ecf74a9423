use super::*;
use crate::character::char;
use crate::context::Value;

#[test]
fn sequence_matches_in_order() {
    let p = char('a').seq(char('b')).seq(char('c'));
    let result = p.parse("abc");
    assert!(result.is_success());
    assert_eq!(
        result.value().unwrap(),
        &Value::List(vec![Value::Char('a'), Value::Char('b'), Value::Char('c')])
    );
}

#[test]
fn sequence_fails_at_first_mismatch() {
    let p = char('a').seq(char('b')).seq(char('c'));
    let result = p.parse("axc");
    assert!(result.is_failure());
    assert_eq!(result.position(), 1);
}

#[test]
fn chained_seq_flattens_into_one_node() {
    let p = char('a').seq(char('b')).seq(char('c'));
    assert_eq!(p.children().len(), 3);
}

#[test]
fn reused_sequence_is_not_unpacked_as_an_argument() {
    let pair = char('a').seq(char('b'));
    let wrapped = char('x').seq(pair.clone()).seq(char('y'));
    assert_eq!(wrapped.children().len(), 3);

    let result = wrapped.parse("xaby");
    assert_eq!(
        result.value().unwrap(),
        &Value::List(vec![
            Value::Char('x'),
            Value::List(vec![Value::Char('a'), Value::Char('b')]),
            Value::Char('y'),
        ])
    );
}
