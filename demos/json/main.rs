//! A minimal grammar for a JSON-style array of integers: `[1, 2, 3]`.
//!
//! Demonstrates composing the core combinators (`seq`, `star`, `trim`, `map`, `pick`) into a
//! small grammar, and reading back both a successful parse and a parse failure.

use pegraph::character::{char, digit, whitespace};
use pegraph::Value;

fn number() -> pegraph::Parser {
    digit().plus().flatten().map(|v| {
        let text = v.as_str().expect("flatten always produces a Str");
        Value::Int(text.parse().expect("a run of digits always parses as i64"))
    })
}

fn json_array() -> pegraph::Parser {
    let ws = whitespace().star();
    let item = number().trim(Some(ws));
    let rest = char(',').seq(item.clone()).pick(1).star();
    let body = item.seq(rest).map(|v| {
        let parts = v.as_list().expect("seq produces a list");
        let mut items = vec![parts[0].clone()];
        items.extend(parts[1].as_list().expect("star produces a list").iter().cloned());
        Value::List(items)
    });

    char('[')
        .seq(body.optional_or(Value::List(Vec::new())))
        .seq(char(']'))
        .pick(1)
}

fn main() {
    let grammar = json_array().end("expected end of input");

    for input in ["[1, 2, 3]", "[1 2]", "[]"] {
        match grammar.parse(input).into_outcome() {
            Ok((_, _, value)) => println!("{input:?} => {value:?}"),
            Err(failure) => println!("{input:?} => error: {failure}"),
        }
    }
}
