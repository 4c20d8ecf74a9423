//! A minimal recursive grammar, `E := digit | "(" E ")"`, tied together with [`Settable`].
//!
//! Recursive grammars need to reference themselves before they're fully built; `Settable` gives
//! you a parser handle you can embed immediately and assign the real target to once the rest of
//! the grammar exists.

use pegraph::character::{char, digit};
use pegraph::Settable;

fn main() {
    let expr = Settable::new();
    let parenthesized = char('(').seq(expr.parser()).seq(char(')')).pick(1);
    let grammar = digit().or(parenthesized);
    expr.set(grammar).expect("set is only called once");

    let root = expr.parser().end("expected end of input");

    for input in ["((3))", "5", "((("] {
        match root.parse(input).into_outcome() {
            Ok((_, _, value)) => println!("{input:?} => {value:?}"),
            Err(failure) => println!("{input:?} => error: {failure}"),
        }
    }
}
