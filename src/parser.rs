//! The parser graph node trait and the [`Parser`] handle.
//!
//! Every combinator in this crate - characters, choices, sequences, repetitions, actions - is a
//! [`Node`] wrapped in a [`Parser`] handle. `Parser` is a cheap `Clone` (an `Rc` bump) over a
//! shared, interior-mutable trait object, which is what lets the same subparser be referenced
//! from more than one place in a grammar (including from itself, for recursive grammars tied
//! together with [`Settable`](crate::Settable)).

use std::any::Any;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::combinator::{Action, AndPredicate, EndOfInput, NotPredicate, Optional, Repetition};
use crate::context::{Context, ParseResult, Token, Value};
use crate::graph;
use crate::sequence::Sequence;

/// Either bound of a [`Parser::repeat`] call; `Unbounded` means "no upper limit".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// A finite upper bound.
    Finite(usize),
    /// No upper bound.
    Unbounded,
}

impl Bound {
    pub(crate) fn allows(self, count: usize) -> bool {
        match self {
            Bound::Finite(max) => count < max,
            Bound::Unbounded => true,
        }
    }
}

/// The uniform operations every parser graph node implements.
///
/// Graph-structural operations (`children`, `replace_child`, `clone_node`, `config_eq`) are
/// independent of the recognition operation (`recognize`) so that [`graph`] can traverse, copy,
/// transform, and compare any grammar uniformly.
pub(crate) trait Node: fmt::Debug {
    /// Run recognition against `ctx`, returning a success or failure result.
    fn recognize(&self, ctx: &Context) -> ParseResult;

    /// This node's direct children, in deterministic order. Leaf nodes return an empty vec.
    fn children(&self) -> Vec<Parser>;

    /// Replace every direct child equal (by identity) to `old` with `new`. A no-op if `old` is
    /// not a direct child.
    fn replace_child(&mut self, old: &Parser, new: &Parser);

    /// A shallow copy of this node: same variant, same configuration, SAME child references.
    fn clone_node(&self) -> Parser;

    /// Whether `self` and `other` have the same variant and the same per-variant configuration
    /// data (not including children - callers compare children separately).
    fn config_eq(&self, other: &dyn Node) -> bool;

    /// For downcasting in `config_eq` implementations and in [`crate::settable`].
    fn as_any(&self) -> &dyn Any;

    /// For downcasting in [`crate::settable::Settable::set`].
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// A handle to a node in a parser graph.
///
/// Cloning a `Parser` clones the handle, not the node: two clones refer to the same underlying
/// node, which is exactly what's needed for a child to be shared by more than one parent, or
/// for a grammar to reference itself through a cycle.
#[derive(Clone)]
pub struct Parser(pub(crate) Rc<RefCell<dyn Node>>);

impl fmt::Debug for Parser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.borrow().fmt(f)
    }
}

impl PartialEq for Parser {
    /// Identity equality (`Rc` pointer identity), used throughout the graph-structural
    /// operations. For deep structural comparison use [`Parser::structural_eq`].
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
impl Eq for Parser {}

impl std::hash::Hash for Parser {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

impl Parser {
    pub(crate) fn from_node(node: impl Node + 'static) -> Parser {
        Parser(Rc::new(RefCell::new(node)))
    }

    /// A stable identity for this node: the data-pointer half of its (possibly fat) `Rc`
    /// pointer. Two `Parser` handles have the same id iff they reference the same node.
    pub fn id(&self) -> usize {
        Rc::as_ptr(&self.0) as *const u8 as usize
    }

    pub(crate) fn recognize(&self, ctx: &Context) -> ParseResult {
        self.0.borrow().recognize(ctx)
    }

    // ---- reference-mode entry points ---------------------------------------

    /// Run recognition from position 0 of `input` and return the result.
    pub fn parse(&self, input: &str) -> ParseResult {
        graph::parse(self, input)
    }

    /// True iff `parse(input)` succeeds (the match need not reach the end of input).
    pub fn accept(&self, input: &str) -> bool {
        graph::accept(self, input)
    }

    /// Scan `input` left to right, yielding every non-overlapping successful match as
    /// `(value, start, end)`.
    pub fn matches(&self, input: &str) -> graph::Matches {
        graph::matches(self, input)
    }

    // ---- graph operations --------------------------------------------------

    /// This node's direct children.
    pub fn children(&self) -> Vec<Parser> {
        self.0.borrow().children()
    }

    /// Replace every direct child equal to `old` with `new`, mutating this node in place.
    /// Idempotent when `old` is not a direct child.
    pub fn replace(&self, old: &Parser, new: &Parser) {
        self.0.borrow_mut().replace_child(old, new);
    }

    /// A shallow copy of this node: same variant and configuration, same child references.
    pub fn copy(&self) -> Parser {
        self.0.borrow().clone_node()
    }

    /// Replace every occurrence of `old` reachable from this node (not just its direct
    /// children) with `new`. Idempotent: a second call is a no-op, since `old` is no longer
    /// reachable afterward.
    pub fn replace_all(&self, old: &Parser, new: &Parser) {
        graph::replace_all(self, old, new);
    }

    /// An isomorphic copy of the whole graph reachable from this node; see
    /// [`graph::deep_copy`].
    pub fn deep_copy(&self) -> Parser {
        graph::deep_copy(self)
    }

    /// Cycle-safe structural equality: same variant, same configuration, and children that
    /// correspond pairwise under the same comparison.
    pub fn structural_eq(&self, other: &Parser) -> bool {
        graph::structural_eq(self, other)
    }

    // ---- combinator builders ------------------------------------------------

    /// Ordered concatenation: this, then `other`. The value is the two-element list of both
    /// values (or, if either side is already a [`Sequence`], the flattened list of all parts).
    pub fn seq(&self, other: Parser) -> Parser {
        Sequence::build(self.clone(), other)
    }

    /// Ordered alternative: try this first, then `other` if this fails. See [`crate::branch`].
    pub fn or(&self, other: Parser) -> Parser {
        crate::branch::Choice::build(self.clone(), other)
    }

    /// Greedy repetition, zero or more times.
    pub fn star(&self) -> Parser {
        self.repeat(0, Bound::Unbounded)
    }

    /// Greedy repetition, one or more times.
    pub fn plus(&self) -> Parser {
        self.repeat(1, Bound::Unbounded)
    }

    /// Exactly `n` repetitions.
    pub fn times(&self, n: usize) -> Parser {
        self.repeat(n, Bound::Finite(n))
    }

    /// Bounded greedy repetition: matches at least `min` and at most `max` times. Panics if
    /// `min > max` (a [`ConstructionError::InvalidBounds`](crate::ConstructionError)-class
    /// programmer error).
    pub fn repeat(&self, min: usize, max: Bound) -> Parser {
        Repetition::build(self.clone(), min, max).expect("invalid repetition bounds")
    }

    /// Tries this; on failure, succeeds with [`Value::Unit`] without consuming input.
    pub fn optional(&self) -> Parser {
        self.optional_or(Value::Unit)
    }

    /// Tries this; on failure, succeeds with `fallback` without consuming input.
    pub fn optional_or(&self, fallback: Value) -> Parser {
        Optional::build(self.clone(), fallback)
    }

    /// Positive lookahead: succeeds iff this succeeds, consuming no input; the value is this's
    /// value.
    pub fn and(&self) -> Parser {
        AndPredicate::build(self.clone())
    }

    /// Negative lookahead: succeeds iff this fails, consuming no input; value is
    /// [`Value::Unit`]. On success of the inner parser, fails with `message`.
    pub fn not(&self, message: impl Into<String>) -> Parser {
        NotPredicate::build(self.clone(), message.into())
    }

    /// Succeeds iff this succeeds AND the match reaches the end of input; otherwise fails with
    /// `message` at that position.
    pub fn end(&self, message: impl Into<String>) -> Parser {
        EndOfInput::build(self.clone(), message.into())
    }

    /// Applies a pure function to the success value.
    pub fn map(&self, f: impl Fn(Value) -> Value + 'static) -> Parser {
        Action::build(self.clone(), Rc::new(f))
    }

    /// Replaces the success value with the literal substring of input this parser covered.
    pub fn flatten(&self) -> Parser {
        crate::combinator::Flatten::build(self.clone())
    }

    /// As [`Parser::flatten`], but wraps the span and the original value in a [`Token`].
    pub fn token(&self) -> Parser {
        crate::combinator::TokenWrap::build(self.clone())
    }

    /// Skips whitespace (or, if given, `ws`) before and after this parser.
    pub fn trim(&self, ws: Option<Parser>) -> Parser {
        let skip = ws.unwrap_or_else(|| crate::character::whitespace().star());
        skip.clone().seq(self.clone()).seq(skip).pick(1)
    }

    /// Selects element `i` from a [`Value::List`] success value. Panics if the value is not a
    /// list or `i` is out of range.
    pub fn pick(&self, i: usize) -> Parser {
        self.map(move |v| match v {
            Value::List(mut items) if i < items.len() => items.swap_remove(i),
            other => panic!("pick({i}) on non-list or out-of-range value: {other:?}"),
        })
    }

    /// Wrap this parser so that, when the `debug` feature is enabled, every call made through
    /// the wrapper prints an indented enter/exit trace line to stderr. A transparent pass-through
    /// when the feature is off.
    pub fn trace(&self, name: impl Into<String>) -> Parser {
        crate::trace::trace(name, self.clone())
    }

    /// Reorders a [`Value::List`] success value according to `indices`.
    pub fn permute(&self, indices: Vec<usize>) -> Parser {
        self.map(move |v| match v {
            Value::List(items) => {
                let picked = indices.iter().map(|&i| items[i].clone()).collect();
                Value::List(picked)
            }
            other => panic!("permute on non-list value: {other:?}"),
        })
    }
}

/// A [`Token`]-producing value constructor, used by [`crate::combinator::TokenWrap`].
pub(crate) fn token_value(buffer: crate::context::Buffer, start: usize, end: usize, value: Value) -> Value {
    Value::Token(Rc::new(Token {
        buffer,
        start,
        end,
        value: Box::new(value),
    }))
}

#[cfg(test)]
mod tests;
