//! Ordered alternative: try each child in order, returning the first success or the last
//! failure if all fail.

use std::any::Any;

use crate::context::{Context, ParseResult};
use crate::parser::{Node, Parser};

/// An ordered choice among two or more parsers.
#[derive(Debug, Clone)]
pub(crate) struct Choice {
    alternatives: Vec<Parser>,
}

impl Choice {
    /// Build `receiver.or(extra)`: `ps ++ [extra]` where `ps` is `receiver`'s own alternatives
    /// if `receiver` is already a `Choice`, or `[receiver]` otherwise. Only the receiver side is
    /// ever unpacked; `extra` is appended as a single alternative whatever node it happens to be.
    pub(crate) fn build(receiver: Parser, extra: Parser) -> Parser {
        let mut alternatives = as_choice(&receiver).unwrap_or_else(|| vec![receiver]);
        alternatives.push(extra);
        Parser::from_node(Choice { alternatives })
    }
}

fn as_choice(p: &Parser) -> Option<Vec<Parser>> {
    let node = p.0.borrow();
    node.as_any()
        .downcast_ref::<Choice>()
        .map(|c| c.alternatives.clone())
}

impl Node for Choice {
    fn recognize(&self, ctx: &Context) -> ParseResult {
        let mut last = None;
        for alt in &self.alternatives {
            match alt.recognize(ctx) {
                success @ ParseResult::Success { .. } => return success,
                failure @ ParseResult::Failure { .. } => last = Some(failure),
            }
        }
        last.expect("Choice::build requires at least one alternative")
    }

    fn children(&self) -> Vec<Parser> {
        self.alternatives.clone()
    }

    fn replace_child(&mut self, old: &Parser, new: &Parser) {
        for alt in &mut self.alternatives {
            if *alt == *old {
                *alt = new.clone();
            }
        }
    }

    fn clone_node(&self) -> Parser {
        Parser::from_node(self.clone())
    }

    fn config_eq(&self, other: &dyn Node) -> bool {
        other
            .as_any()
            .downcast_ref::<Choice>()
            .is_some_and(|o| o.alternatives.len() == self.alternatives.len())
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
