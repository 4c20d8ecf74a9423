use pegraph::character::{char, digit, whitespace};
use pegraph::Value;

fn number() -> pegraph::Parser {
    digit().plus().flatten().map(|v| {
        let text = v.as_str().unwrap();
        Value::Int(text.parse().unwrap())
    })
}

fn json_array() -> pegraph::Parser {
    let ws = whitespace().star();
    let item = number().trim(Some(ws));
    let rest = char(',').seq(item.clone()).pick(1).star();
    let body = item.seq(rest).map(|v| {
        let parts = v.as_list().unwrap();
        let mut items = vec![parts[0].clone()];
        items.extend(parts[1].as_list().unwrap().iter().cloned());
        Value::List(items)
    });

    char('[')
        .seq(body.optional_or(Value::List(Vec::new())))
        .seq(char(']'))
        .pick(1)
}

#[test]
fn parses_a_well_formed_array() {
    let grammar = json_array().end("expected end of input");
    let result = grammar.parse("[1, 2, 3]");
    assert!(result.is_success());
    assert_eq!(
        result.value().unwrap(),
        &Value::List(vec![Value::Int(1), Value::Int(2), Value::Int(3)])
    );
}

#[test]
fn rejects_a_missing_comma() {
    let grammar = json_array().end("expected end of input");
    let result = grammar.parse("[1 2]");
    assert!(result.is_failure());
}

#[test]
fn accepts_an_empty_array() {
    let grammar = json_array().end("expected end of input");
    let result = grammar.parse("[]");
    assert!(result.is_success());
    assert_eq!(result.value().unwrap(), &Value::List(Vec::new()));
}

#[test]
fn tolerates_surrounding_whitespace_around_items() {
    let grammar = json_array().end("expected end of input");
    assert!(grammar.parse("[ 1 ,\t2\n, 3 ]").is_success());
}
