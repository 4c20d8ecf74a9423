use super::*;

#[test]
fn char_matches_exact() {
    let p = char('a');
    assert!(p.accept("a"));
    assert!(!p.accept("b"));
    assert!(!p.accept(""));
}

#[test]
fn char_from_numeric_code() {
    let p = char(97u32);
    assert!(p.accept("a"));
}

#[test]
fn char_rejects_multi_char_string() {
    assert!(try_char("ab").is_err());
    assert!(try_char("").is_err());
}

#[test]
fn range_is_inclusive() {
    let p = range('a', 'c');
    assert!(p.accept("a"));
    assert!(p.accept("c"));
    assert!(!p.accept("d"));
}

#[test]
fn digit_letter_word() {
    assert!(digit().accept("5"));
    assert!(!digit().accept("a"));
    assert!(letter().accept("Z"));
    assert!(!letter().accept("5"));
    assert!(word().accept("_"));
    assert!(word().accept("9"));
    assert!(!word().accept(" "));
}

#[test]
fn whitespace_set_is_exactly_tab_lf_ff_cr_space() {
    for c in ['\t', '\n', '\u{c}', '\r', ' '] {
        assert!(whitespace().accept(&c.to_string()), "{c:?} should match");
    }
    // Vertical tab (11) is deliberately excluded from the whitespace set.
    assert!(!whitespace().accept("\u{b}"));
}

#[test]
fn any_matches_everything_but_eof() {
    assert!(any().accept("x"));
    assert!(!any().accept(""));
}

#[test]
fn double_negation_collapses() {
    let once = CharKind::Digit.negate();
    let twice = once.clone().negate();
    assert_eq!(twice, CharKind::Digit);
    assert_ne!(once, CharKind::Digit);
}

#[test]
fn string_matches_literal_sequence() {
    let p = string("abc").flatten();
    let result = p.parse("abcd");
    assert_eq!(result.value().unwrap().as_str(), Some("abc"));
    assert_eq!(result.position(), 3);
}

#[test]
fn failure_position_is_mismatch_point() {
    let p = char('a').star().end("expected end");
    let result = p.parse("aab");
    assert!(result.is_failure());
    assert_eq!(result.position(), 2);
}
