//! Ordered concatenation: match each child in order, failing as soon as one does,
//! succeeding with the list of all their values.

use std::any::Any;

use crate::context::{Context, ParseResult, Value};
use crate::parser::{Node, Parser};

/// An ordered concatenation of two or more parsers.
#[derive(Debug, Clone)]
pub(crate) struct Sequence {
    parts: Vec<Parser>,
}

impl Sequence {
    /// Build `receiver.seq(extra)`: `ps ++ [extra]` where `ps` is `receiver`'s own parts if
    /// `receiver` is already a `Sequence`, or `[receiver]` otherwise. Only the receiver side is
    /// ever unpacked — `extra` is appended as a single part whatever node it happens to be,
    /// so a `Sequence` built and reused elsewhere (e.g. passed into `trim`) is never silently
    /// unpacked out from under its own value shape.
    pub(crate) fn build(receiver: Parser, extra: Parser) -> Parser {
        let mut parts = as_sequence(&receiver).unwrap_or_else(|| vec![receiver]);
        parts.push(extra);
        Parser::from_node(Sequence { parts })
    }
}

fn as_sequence(p: &Parser) -> Option<Vec<Parser>> {
    let node = p.0.borrow();
    node.as_any()
        .downcast_ref::<Sequence>()
        .map(|s| s.parts.clone())
}

impl Node for Sequence {
    fn recognize(&self, ctx: &Context) -> ParseResult {
        let mut values = Vec::with_capacity(self.parts.len());
        let mut cursor = ctx.clone();
        for part in &self.parts {
            match part.recognize(&cursor) {
                ParseResult::Success {
                    position, value, ..
                } => {
                    cursor = cursor.at(position);
                    values.push(value);
                }
                failure => return failure,
            }
        }
        cursor.success(Value::List(values), None)
    }

    fn children(&self) -> Vec<Parser> {
        self.parts.clone()
    }

    fn replace_child(&mut self, old: &Parser, new: &Parser) {
        for part in &mut self.parts {
            if *part == *old {
                *part = new.clone();
            }
        }
    }

    fn clone_node(&self) -> Parser {
        Parser::from_node(self.clone())
    }

    fn config_eq(&self, other: &dyn Node) -> bool {
        other
            .as_any()
            .downcast_ref::<Sequence>()
            .is_some_and(|o| o.parts.len() == self.parts.len())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests;
