//! One-child wrapper combinators: delegate, end-of-input, lookahead, optional, bounded
//! repetition, and action.
//!
//! Rust has no runtime inheritance, so the "`Delegate` is a shared base for one-child wrappers"
//! relationship is realized through composition instead: every wrapper here holds a private
//! `inner: Parser` field and reuses [`one_child`]/[`replace_one_child`] for the
//! `children`/`replace_child` half of [`Node`] rather than inheriting them.

use std::any::Any;
use std::rc::Rc;

use crate::context::{Context, ParseResult, Value};
use crate::error::ConstructionError;
use crate::parser::{Bound, Node, Parser};

fn one_child(inner: &Parser) -> Vec<Parser> {
    vec![inner.clone()]
}

fn replace_one_child(inner: &mut Parser, old: &Parser, new: &Parser) {
    if *inner == *old {
        *inner = new.clone();
    }
}

/// Forwards recognition to its child unchanged. The plainest possible one-child wrapper; used
/// as the initial, always-failing delegate behind a freshly constructed
/// [`Settable`](crate::Settable) and available standalone for grammar-rewriting purposes.
#[derive(Debug, Clone)]
pub(crate) struct Delegate {
    inner: Parser,
}

impl Delegate {
    pub(crate) fn build(inner: Parser) -> Parser {
        Parser::from_node(Delegate { inner })
    }

    /// Swap the delegate's target, used once by [`crate::settable::Settable::set`] to tie a
    /// recursive grammar together.
    pub(crate) fn set_inner(&mut self, new: Parser) {
        self.inner = new;
    }
}

impl Node for Delegate {
    fn recognize(&self, ctx: &Context) -> ParseResult {
        self.inner.recognize(ctx)
    }
    fn children(&self) -> Vec<Parser> {
        one_child(&self.inner)
    }
    fn replace_child(&mut self, old: &Parser, new: &Parser) {
        replace_one_child(&mut self.inner, old, new);
    }
    fn clone_node(&self) -> Parser {
        Parser::from_node(self.clone())
    }
    fn config_eq(&self, other: &dyn Node) -> bool {
        other.as_any().downcast_ref::<Delegate>().is_some()
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// A parser that always fails with `message`, used as the pre-assignment delegate of a
/// [`Settable`](crate::Settable).
#[derive(Debug, Clone)]
pub(crate) struct AlwaysFail {
    message: String,
}

impl AlwaysFail {
    pub(crate) fn build(message: impl Into<String>) -> Parser {
        Parser::from_node(AlwaysFail {
            message: message.into(),
        })
    }
}

impl Node for AlwaysFail {
    fn recognize(&self, ctx: &Context) -> ParseResult {
        ctx.failure(self.message.clone(), None)
    }
    fn children(&self) -> Vec<Parser> {
        Vec::new()
    }
    fn replace_child(&mut self, _old: &Parser, _new: &Parser) {}
    fn clone_node(&self) -> Parser {
        Parser::from_node(self.clone())
    }
    fn config_eq(&self, other: &dyn Node) -> bool {
        other
            .as_any()
            .downcast_ref::<AlwaysFail>()
            .is_some_and(|o| o.message == self.message)
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Succeeds iff its child succeeds AND the match reaches the end of input.
#[derive(Debug, Clone)]
pub(crate) struct EndOfInput {
    inner: Parser,
    message: String,
}

impl EndOfInput {
    pub(crate) fn build(inner: Parser, message: String) -> Parser {
        Parser::from_node(EndOfInput { inner, message })
    }
}

impl Node for EndOfInput {
    fn recognize(&self, ctx: &Context) -> ParseResult {
        match self.inner.recognize(ctx) {
            ParseResult::Success {
                buffer,
                position,
                value,
            } => {
                if position == buffer.len() {
                    ParseResult::Success {
                        buffer,
                        position,
                        value,
                    }
                } else {
                    ParseResult::Failure {
                        buffer,
                        position,
                        message: self.message.clone(),
                    }
                }
            }
            failure => failure,
        }
    }
    fn children(&self) -> Vec<Parser> {
        one_child(&self.inner)
    }
    fn replace_child(&mut self, old: &Parser, new: &Parser) {
        replace_one_child(&mut self.inner, old, new);
    }
    fn clone_node(&self) -> Parser {
        Parser::from_node(self.clone())
    }
    fn config_eq(&self, other: &dyn Node) -> bool {
        other
            .as_any()
            .downcast_ref::<EndOfInput>()
            .is_some_and(|o| o.message == self.message)
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Positive lookahead: succeeds iff its child succeeds, without consuming input.
#[derive(Debug, Clone)]
pub(crate) struct AndPredicate {
    inner: Parser,
}

impl AndPredicate {
    pub(crate) fn build(inner: Parser) -> Parser {
        Parser::from_node(AndPredicate { inner })
    }
}

impl Node for AndPredicate {
    fn recognize(&self, ctx: &Context) -> ParseResult {
        match self.inner.recognize(ctx) {
            ParseResult::Success { value, .. } => ctx.success(value, None),
            failure => failure,
        }
    }
    fn children(&self) -> Vec<Parser> {
        one_child(&self.inner)
    }
    fn replace_child(&mut self, old: &Parser, new: &Parser) {
        replace_one_child(&mut self.inner, old, new);
    }
    fn clone_node(&self) -> Parser {
        Parser::from_node(self.clone())
    }
    fn config_eq(&self, other: &dyn Node) -> bool {
        other.as_any().downcast_ref::<AndPredicate>().is_some()
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Negative lookahead: succeeds (with [`Value::Unit`]) iff its child fails, without consuming
/// input; fails with `message` if the child succeeds.
#[derive(Debug, Clone)]
pub(crate) struct NotPredicate {
    inner: Parser,
    message: String,
}

impl NotPredicate {
    pub(crate) fn build(inner: Parser, message: String) -> Parser {
        Parser::from_node(NotPredicate { inner, message })
    }
}

impl Node for NotPredicate {
    fn recognize(&self, ctx: &Context) -> ParseResult {
        match self.inner.recognize(ctx) {
            ParseResult::Success { .. } => ctx.failure(self.message.clone(), None),
            ParseResult::Failure { .. } => ctx.success(Value::Unit, None),
        }
    }
    fn children(&self) -> Vec<Parser> {
        one_child(&self.inner)
    }
    fn replace_child(&mut self, old: &Parser, new: &Parser) {
        replace_one_child(&mut self.inner, old, new);
    }
    fn clone_node(&self) -> Parser {
        Parser::from_node(self.clone())
    }
    fn config_eq(&self, other: &dyn Node) -> bool {
        other
            .as_any()
            .downcast_ref::<NotPredicate>()
            .is_some_and(|o| o.message == self.message)
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Tries its child; on failure, succeeds with `otherwise` at the original position.
#[derive(Debug, Clone)]
pub(crate) struct Optional {
    inner: Parser,
    otherwise: Value,
}

impl Optional {
    pub(crate) fn build(inner: Parser, otherwise: Value) -> Parser {
        Parser::from_node(Optional { inner, otherwise })
    }
}

impl Node for Optional {
    fn recognize(&self, ctx: &Context) -> ParseResult {
        match self.inner.recognize(ctx) {
            success @ ParseResult::Success { .. } => success,
            ParseResult::Failure { .. } => ctx.success(self.otherwise.clone(), None),
        }
    }
    fn children(&self) -> Vec<Parser> {
        one_child(&self.inner)
    }
    fn replace_child(&mut self, old: &Parser, new: &Parser) {
        replace_one_child(&mut self.inner, old, new);
    }
    fn clone_node(&self) -> Parser {
        Parser::from_node(self.clone())
    }
    fn config_eq(&self, other: &dyn Node) -> bool {
        other
            .as_any()
            .downcast_ref::<Optional>()
            .is_some_and(|o| o.otherwise == self.otherwise)
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Greedy, bounded repetition: `min` mandatory matches, then up to `max` total, collecting
/// values in order.
#[derive(Debug, Clone)]
pub(crate) struct Repetition {
    inner: Parser,
    min: usize,
    max: Bound,
}

impl Repetition {
    pub(crate) fn build(inner: Parser, min: usize, max: Bound) -> Result<Parser, ConstructionError> {
        if let Bound::Finite(max) = max {
            if min > max {
                return Err(ConstructionError::InvalidBounds { min, max });
            }
        }
        Ok(Parser::from_node(Repetition { inner, min, max }))
    }
}

impl Node for Repetition {
    fn recognize(&self, ctx: &Context) -> ParseResult {
        let mut values = Vec::new();
        let mut cursor = ctx.clone();

        for _ in 0..self.min {
            match self.inner.recognize(&cursor) {
                ParseResult::Success {
                    position, value, ..
                } => {
                    values.push(value);
                    cursor = cursor.at(position);
                }
                failure => return failure,
            }
        }

        while self.max.allows(values.len()) {
            match self.inner.recognize(&cursor) {
                ParseResult::Success {
                    position, value, ..
                } => {
                    values.push(value);
                    cursor = cursor.at(position);
                }
                ParseResult::Failure { .. } => break,
            }
        }

        cursor.success(Value::List(values), None)
    }
    fn children(&self) -> Vec<Parser> {
        one_child(&self.inner)
    }
    fn replace_child(&mut self, old: &Parser, new: &Parser) {
        replace_one_child(&mut self.inner, old, new);
    }
    fn clone_node(&self) -> Parser {
        Parser::from_node(self.clone())
    }
    fn config_eq(&self, other: &dyn Node) -> bool {
        other
            .as_any()
            .downcast_ref::<Repetition>()
            .is_some_and(|o| o.min == self.min && o.max == self.max)
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Applies a pure user function to the child's success value. Structural equality on `Action`
/// uses `Rc` pointer identity on the closure: two behaviorally-identical but separately-built
/// actions are NOT equal, since Rust closures carry no derivable equality.
#[derive(Clone)]
pub(crate) struct Action {
    inner: Parser,
    f: Rc<dyn Fn(Value) -> Value>,
}

impl Action {
    pub(crate) fn build(inner: Parser, f: Rc<dyn Fn(Value) -> Value>) -> Parser {
        Parser::from_node(Action { inner, f })
    }
}

impl std::fmt::Debug for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Action").field("inner", &self.inner).finish()
    }
}

impl Node for Action {
    fn recognize(&self, ctx: &Context) -> ParseResult {
        match self.inner.recognize(ctx) {
            ParseResult::Success {
                buffer,
                position,
                value,
            } => ParseResult::Success {
                buffer,
                position,
                value: (self.f)(value),
            },
            failure => failure,
        }
    }
    fn children(&self) -> Vec<Parser> {
        one_child(&self.inner)
    }
    fn replace_child(&mut self, old: &Parser, new: &Parser) {
        replace_one_child(&mut self.inner, old, new);
    }
    fn clone_node(&self) -> Parser {
        Parser::from_node(self.clone())
    }
    fn config_eq(&self, other: &dyn Node) -> bool {
        other
            .as_any()
            .downcast_ref::<Action>()
            .is_some_and(|o| Rc::ptr_eq(&o.f, &self.f))
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Replaces the child's success value with the literal substring of input it covered.
#[derive(Debug, Clone)]
pub(crate) struct Flatten {
    inner: Parser,
}

impl Flatten {
    pub(crate) fn build(inner: Parser) -> Parser {
        Parser::from_node(Flatten { inner })
    }
}

impl Node for Flatten {
    fn recognize(&self, ctx: &Context) -> ParseResult {
        match self.inner.recognize(ctx) {
            ParseResult::Success {
                buffer, position, ..
            } => {
                let text: String = buffer[ctx.position()..position].iter().collect();
                ParseResult::Success {
                    buffer,
                    position,
                    value: Value::Str(text),
                }
            }
            failure => failure,
        }
    }
    fn children(&self) -> Vec<Parser> {
        one_child(&self.inner)
    }
    fn replace_child(&mut self, old: &Parser, new: &Parser) {
        replace_one_child(&mut self.inner, old, new);
    }
    fn clone_node(&self) -> Parser {
        Parser::from_node(self.clone())
    }
    fn config_eq(&self, other: &dyn Node) -> bool {
        other.as_any().downcast_ref::<Flatten>().is_some()
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// As [`Flatten`], but wraps the span and the child's own value into a [`crate::context::Token`].
#[derive(Debug, Clone)]
pub(crate) struct TokenWrap {
    inner: Parser,
}

impl TokenWrap {
    pub(crate) fn build(inner: Parser) -> Parser {
        Parser::from_node(TokenWrap { inner })
    }
}

impl Node for TokenWrap {
    fn recognize(&self, ctx: &Context) -> ParseResult {
        match self.inner.recognize(ctx) {
            ParseResult::Success {
                buffer,
                position,
                value,
            } => {
                let token_value = crate::parser::token_value(buffer.clone(), ctx.position(), position, value);
                ParseResult::Success {
                    buffer,
                    position,
                    value: token_value,
                }
            }
            failure => failure,
        }
    }
    fn children(&self) -> Vec<Parser> {
        one_child(&self.inner)
    }
    fn replace_child(&mut self, old: &Parser, new: &Parser) {
        replace_one_child(&mut self.inner, old, new);
    }
    fn clone_node(&self) -> Parser {
        Parser::from_node(self.clone())
    }
    fn config_eq(&self, other: &dyn Node) -> bool {
        other.as_any().downcast_ref::<TokenWrap>().is_some()
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
