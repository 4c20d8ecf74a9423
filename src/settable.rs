//! Forward-reference parser, used to tie recursive grammars together.
//!
//! A grammar like `E := digit | "(" E ")"` needs to reference `E` before `E` is fully built.
//! `Settable` gives you a [`Parser`] handle you can use immediately (inside `or`, `seq`, ...)
//! and assign the real target to exactly once, once the rest of the grammar exists.

use std::cell::Cell;

use crate::combinator::{AlwaysFail, Delegate};
use crate::error::ConstructionError;
use crate::parser::Parser;

/// A forward reference: a parser whose delegate can be assigned exactly once.
///
/// Parsing through a `Settable` before [`Settable::set`] is called fails with a well-defined
/// message rather than panicking, since recursive-grammar construction code routinely builds
/// (but does not yet run) parsers that reference an as-yet-unassigned `Settable`.
pub struct Settable {
    delegate: Parser,
    assigned: Cell<bool>,
}

impl Settable {
    /// Create a new, unassigned forward reference.
    pub fn new() -> Settable {
        Settable {
            delegate: Delegate::build(AlwaysFail::build("undefined settable parser")),
            assigned: Cell::new(false),
        }
    }

    /// The parser handle to embed elsewhere in a grammar. Stable across [`Settable::set`]:
    /// existing references keep working once the target is assigned, since they all point to
    /// the same underlying delegate node.
    pub fn parser(&self) -> Parser {
        self.delegate.clone()
    }

    /// Assign the real target this forward reference stands in for. Can only succeed once;
    /// a second call returns [`ConstructionError::SettableAlreadyAssigned`].
    pub fn set(&self, target: Parser) -> Result<(), ConstructionError> {
        if self.assigned.get() {
            return Err(ConstructionError::SettableAlreadyAssigned);
        }
        {
            let mut node = self.delegate.0.borrow_mut();
            let delegate = node
                .as_any_mut()
                .downcast_mut::<Delegate>()
                .expect("Settable's own node is always a Delegate");
            delegate.set_inner(target);
        }
        self.assigned.set(true);
        Ok(())
    }
}

impl Default for Settable {
    fn default() -> Self {
        Settable::new()
    }
}

#[cfg(test)]
mod tests;
