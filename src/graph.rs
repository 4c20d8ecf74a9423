//! Whole-graph operations: traversal, structural copying and transformation, cycle-safe
//! structural equality, and the reference-mode runners (`parse`, `accept`, `matches`) that
//! [`Parser`]'s own methods delegate to.
//!
//! Every recursive walk here carries a map or set keyed on [`Parser::id`] so that a cyclic
//! grammar (tied together with [`crate::Settable`]) terminates instead of looping forever.

use std::collections::{HashMap, HashSet};

use crate::context::{buffer_from_str, Buffer, Context, ParseResult, Value};
use crate::parser::Parser;

/// Run recognition from position 0 of `input`.
pub fn parse(root: &Parser, input: &str) -> ParseResult {
    root.recognize(&Context::from_str(input))
}

/// True iff `parse(root, input)` succeeds.
pub fn accept(root: &Parser, input: &str) -> bool {
    parse(root, input).is_success()
}

/// Scan `input` for every non-overlapping successful match of `root`.
pub fn matches(root: &Parser, input: &str) -> Matches {
    Matches {
        parser: root.clone(),
        buffer: buffer_from_str(input),
        pos: 0,
    }
}

/// Lazily yields every non-overlapping match of a parser over an input, as produced by
/// [`Parser::matches`].
pub struct Matches {
    parser: Parser,
    buffer: Buffer,
    pos: usize,
}

impl Iterator for Matches {
    type Item = (Value, usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos <= self.buffer.len() {
            let ctx = Context::new(self.buffer.clone(), self.pos);
            match self.parser.recognize(&ctx) {
                ParseResult::Success {
                    position, value, ..
                } => {
                    let start = self.pos;
                    self.pos = if position > self.pos {
                        position
                    } else {
                        self.pos + 1
                    };
                    return Some((value, start, position));
                }
                ParseResult::Failure { .. } => self.pos += 1,
            }
        }
        None
    }
}

/// Every parser reachable from `root` via [`Parser::children`], each visited exactly once, in
/// depth-first child order. `root` itself is included.
pub fn transitive_children(root: &Parser) -> Vec<Parser> {
    let mut visited = HashSet::new();
    let mut order = Vec::new();
    walk(root, &mut visited, &mut order);
    order
}

fn walk(p: &Parser, visited: &mut HashSet<usize>, order: &mut Vec<Parser>) {
    if !visited.insert(p.id()) {
        return;
    }
    order.push(p.clone());
    for child in p.children() {
        walk(&child, visited, order);
    }
}

/// Replace every reachable occurrence of `old` (by identity) with `new`, throughout the whole
/// graph rooted at `root`, not just `root`'s own direct children. Idempotent: a second call with
/// the same arguments is a no-op, since `old` is no longer reachable afterward.
pub fn replace_all(root: &Parser, old: &Parser, new: &Parser) {
    for node in transitive_children(root) {
        node.replace(old, new);
    }
}

/// Produce an isomorphic copy of the graph rooted at `root`: every reachable node is replaced by
/// [`Parser::copy`], with child references remapped so that cycles in the source produce cycles
/// in the copy at the same shape. The copy shares no nodes with the original.
pub fn deep_copy(root: &Parser) -> Parser {
    transform(root, |_| None)
}

/// Produce a copy of the graph rooted at `root` in which every reachable node `n` is replaced by
/// `f(n)` where defined, and by a fresh [`Parser::copy`] of `n` otherwise, with all internal
/// child references updated to the new nodes.
pub fn transform(root: &Parser, f: impl Fn(&Parser) -> Option<Parser>) -> Parser {
    let mut mapping: HashMap<usize, Parser> = HashMap::new();
    transform_rec(root, &f, &mut mapping)
}

fn transform_rec(
    p: &Parser,
    f: &impl Fn(&Parser) -> Option<Parser>,
    mapping: &mut HashMap<usize, Parser>,
) -> Parser {
    if let Some(existing) = mapping.get(&p.id()) {
        return existing.clone();
    }
    let replacement = f(p).unwrap_or_else(|| p.copy());
    mapping.insert(p.id(), replacement.clone());
    for child in replacement.children() {
        let child_replacement = transform_rec(&child, f, mapping);
        replacement.replace(&child, &child_replacement);
    }
    replacement
}

/// Cycle-safe structural equality: two parsers are equal iff they have the same variant and
/// configuration and their children correspond pairwise under the same comparison. A pair of
/// nodes already being compared (a cycle) is assumed equal, so mutually-recursive grammars
/// terminate instead of recursing forever.
pub fn structural_eq(a: &Parser, b: &Parser) -> bool {
    let mut visiting = HashSet::new();
    structural_eq_rec(a, b, &mut visiting)
}

fn structural_eq_rec(a: &Parser, b: &Parser, visiting: &mut HashSet<(usize, usize)>) -> bool {
    let key = (a.id(), b.id());
    if !visiting.insert(key) {
        return true;
    }

    let config_eq = {
        let a_ref = a.0.borrow();
        let b_ref = b.0.borrow();
        a_ref.config_eq(&*b_ref)
    };
    if !config_eq {
        return false;
    }

    let a_children = a.children();
    let b_children = b.children();
    if a_children.len() != b_children.len() {
        return false;
    }
    a_children
        .iter()
        .zip(b_children.iter())
        .all(|(x, y)| structural_eq_rec(x, y, visiting))
}

#[cfg(test)]
mod tests;
