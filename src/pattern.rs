//! The character-class mini-grammar: compiles a `[a-zA-Z0-9_]`-style pattern string (the
//! content that would sit between the brackets) into a single character-matching [`Parser`].
//!
//! ```text
//! pattern := '^'? item+
//! item    := any '-' any   // range
//!          | any           // single
//! ```
//!
//! The grammar that recognizes *pattern text* is itself built out of the core combinators
//! (`any()`, `char('-')`, `seq`, `or`, `plus`) and compiled exactly once, on first use, under a
//! process-wide [`OnceLock`] - "construct then publish" single-assignment, as the concurrency
//! model requires.

use std::sync::OnceLock;

use crate::character::{any, char, CharKind};
use crate::context::Value;
use crate::error::ConstructionError;
use crate::parser::Parser;

#[derive(Clone)]
enum Item {
    Single(char),
    Range(char, char),
}

fn item_grammar() -> Parser {
    let range_item = any().seq(char('-')).seq(any()).map(|v| {
        let parts = v.as_list().expect("seq produces a list");
        let lo = parts[0].as_char().expect("any() yields a char");
        let hi = parts[2].as_char().expect("any() yields a char");
        Value::List(vec![Value::Char(lo), Value::Char(hi)])
    });
    let single_item = any().map(|v| Value::List(vec![v]));
    range_item.or(single_item)
}

fn pattern_grammar() -> &'static Parser {
    static GRAMMAR: OnceLock<Parser> = OnceLock::new();
    GRAMMAR.get_or_init(|| {
        char('^')
            .optional_or(Value::Unit)
            .seq(item_grammar().plus())
            .end("unconsumed trailing input in character-class pattern")
    })
}

fn value_to_item(v: &Value) -> Item {
    match v.as_list().expect("item_grammar produces a list") {
        [Value::Char(c)] => Item::Single(*c),
        [Value::Char(lo), Value::Char(hi)] => Item::Range(*lo, *hi),
        other => panic!("malformed character-class item: {other:?}"),
    }
}

/// Compile a character-class pattern (the text that would sit inside `[...]`, without the
/// brackets themselves) into a single-character-matching [`Parser`].
///
/// A leading `^` negates the resulting class. `pattern("a-zA-Z0-9_")` matches one ASCII
/// alphanumeric-or-underscore unit; `pattern("^0-9")` matches one non-digit unit.
pub fn pattern(text: &str) -> Parser {
    try_pattern(text).expect("invalid character-class pattern")
}

/// Fallible form of [`pattern`].
pub fn try_pattern(text: &str) -> Result<Parser, ConstructionError> {
    let result = pattern_grammar().parse(text);
    let (negate, items) = match result.value() {
        Some(Value::List(parts)) => {
            let negate = !matches!(parts[0], Value::Unit);
            let items = match &parts[1] {
                Value::List(items) => items.iter().map(value_to_item).collect::<Vec<_>>(),
                other => panic!("plus() produces a list, got {other:?}"),
            };
            (negate, items)
        }
        _ => {
            return Err(ConstructionError::InvalidPattern {
                pattern: text.to_string(),
                position: result.position(),
            })
        }
    };

    let kinds: Vec<CharKind> = items
        .into_iter()
        .map(|item| match item {
            Item::Single(c) => CharKind::Exact(c),
            Item::Range(lo, hi) => CharKind::Range(lo, hi),
        })
        .collect();

    let folded = fold_alternatives(kinds);
    let folded = if negate { folded.negate() } else { folded };
    Ok(crate::character::from_kind(folded))
}

fn fold_alternatives(mut kinds: Vec<CharKind>) -> CharKind {
    if kinds.len() == 1 {
        kinds.pop().unwrap()
    } else {
        CharKind::Alternatives(kinds)
    }
}
