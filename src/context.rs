//! Parse context and result.
//!
//! A [`Context`] is the immutable pair of input buffer and position a recognition step reads
//! from. A [`ParseResult`] is the immutable outcome it produces: a [`Success`](ParseResult::Success)
//! carrying a new position and a [`Value`], or a [`Failure`](ParseResult::Failure) carrying the
//! position where matching gave up and a message.

use std::any::Any;
use std::fmt;
use std::rc::Rc;

/// The shared, immutable input buffer: a sequence of Unicode scalar values.
///
/// Bytes, UTF-16 units, or code points would all work as long as one run is internally
/// consistent; `char` is the natural choice here.
pub type Buffer = Rc<[char]>;

/// Build a [`Buffer`] from a `&str`.
pub fn buffer_from_str(input: &str) -> Buffer {
    input.chars().collect::<Vec<char>>().into()
}

/// An immutable pair of input buffer and position.
#[derive(Debug, Clone)]
pub struct Context {
    buffer: Buffer,
    position: usize,
}

impl Context {
    /// Construct a context at the given position. Panics if `position > buffer.len()`.
    pub fn new(buffer: Buffer, position: usize) -> Self {
        assert!(position <= buffer.len(), "position out of bounds");
        Context { buffer, position }
    }

    /// Construct a context at the start of `input`.
    pub fn from_str(input: &str) -> Self {
        Context::new(buffer_from_str(input), 0)
    }

    /// The shared input buffer.
    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    /// The current position.
    pub fn position(&self) -> usize {
        self.position
    }

    /// The unit at the current position, if any.
    pub fn current(&self) -> Option<char> {
        self.buffer.get(self.position).copied()
    }

    /// A context at `new_position` over the same buffer.
    pub fn at(&self, new_position: usize) -> Context {
        Context::new(self.buffer.clone(), new_position)
    }

    /// Produce a [`ParseResult::Success`]. If `new_position` is omitted, reuses the current
    /// position.
    pub fn success(&self, value: Value, new_position: Option<usize>) -> ParseResult {
        ParseResult::Success {
            buffer: self.buffer.clone(),
            position: new_position.unwrap_or(self.position),
            value,
        }
    }

    /// Produce a [`ParseResult::Failure`]. If `at_position` is omitted, reuses the current
    /// position.
    pub fn failure(&self, message: impl Into<String>, at_position: Option<usize>) -> ParseResult {
        ParseResult::Failure {
            buffer: self.buffer.clone(),
            position: at_position.unwrap_or(self.position),
            message: message.into(),
        }
    }
}

/// A record carrying a matched value along with its source span, produced by
/// [`Parser::token`](crate::Parser::token).
#[derive(Clone)]
pub struct Token {
    /// The buffer the span is measured over.
    pub buffer: Buffer,
    /// The start of the matched span, inclusive.
    pub start: usize,
    /// The end of the matched span, exclusive.
    pub end: usize,
    /// The value the wrapped parser produced.
    pub value: Box<Value>,
}

impl Token {
    /// The literal substring covered by this token.
    pub fn text(&self) -> String {
        self.buffer[self.start..self.end].iter().collect()
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Token")
            .field("start", &self.start)
            .field("end", &self.end)
            .field("text", &self.text())
            .field("value", &self.value)
            .finish()
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end && self.value == other.value
    }
}

/// The pinned sum type for heterogeneous semantic values produced by a successful parse.
///
/// Sequence and repetition combinators always produce [`Value::List`]; character parsers
/// always produce [`Value::Char`]. [`Value::Any`] is an escape hatch for user `map`/`action`
/// closures that need to carry an arbitrary custom type through the graph.
#[derive(Clone)]
pub enum Value {
    /// The absence of a value (e.g. the result of `not()`, or the default `optional()` fallback).
    Unit,
    /// A boolean.
    Bool(bool),
    /// A single matched input unit.
    Char(char),
    /// A signed integer.
    Int(i64),
    /// A floating-point number.
    Float(f64),
    /// A string, typically the output of `flatten()`.
    Str(String),
    /// An ordered sequence, the output of `seq`/`star`/`plus`/`repeat`/`times`.
    List(Vec<Value>),
    /// The output of `token()`.
    Token(Rc<Token>),
    /// An escape hatch for arbitrary user data produced by `map`/`action`.
    Any(Rc<dyn Any>),
}

impl Value {
    /// Convenience accessor: `Some(s)` if this is a [`Value::Str`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Convenience accessor: `Some(slice)` if this is a [`Value::List`].
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    /// Convenience accessor: `Some(c)` if this is a [`Value::Char`].
    pub fn as_char(&self) -> Option<char> {
        match self {
            Value::Char(c) => Some(*c),
            _ => None,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Unit => write!(f, "Unit"),
            Value::Bool(b) => write!(f, "Bool({b:?})"),
            Value::Char(c) => write!(f, "Char({c:?})"),
            Value::Int(i) => write!(f, "Int({i:?})"),
            Value::Float(x) => write!(f, "Float({x:?})"),
            Value::Str(s) => write!(f, "Str({s:?})"),
            Value::List(items) => f.debug_list().entries(items.iter()).finish(),
            Value::Token(t) => write!(f, "Token({t:?})"),
            Value::Any(_) => write!(f, "Any(..)"),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Unit, Value::Unit) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Char(a), Value::Char(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Token(a), Value::Token(b)) => a == b,
            // `Any` carries no equality contract; two `Any`s are equal only if co-located.
            (Value::Any(a), Value::Any(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// The outcome of a recognition step: either a [`Success`](ParseResult::Success) carrying a new
/// position and value, or a [`Failure`](ParseResult::Failure) carrying the position where
/// matching gave up and a message. Never thrown; always returned.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseResult {
    /// The parser matched. `position` is where it stopped; `value` is what it produced.
    Success {
        /// The buffer this result was produced against.
        buffer: Buffer,
        /// The position immediately after the matched input.
        position: usize,
        /// The value produced by the match.
        value: Value,
    },
    /// The parser did not match. `position` is where the mismatch was detected.
    Failure {
        /// The buffer this result was produced against.
        buffer: Buffer,
        /// The position at which matching gave up.
        position: usize,
        /// A human-readable description of what was expected.
        message: String,
    },
}

impl ParseResult {
    /// True iff this is a [`Success`](ParseResult::Success).
    pub fn is_success(&self) -> bool {
        matches!(self, ParseResult::Success { .. })
    }

    /// True iff this is a [`Failure`](ParseResult::Failure).
    pub fn is_failure(&self) -> bool {
        matches!(self, ParseResult::Failure { .. })
    }

    /// The position carried by this result, success or failure.
    pub fn position(&self) -> usize {
        match self {
            ParseResult::Success { position, .. } => *position,
            ParseResult::Failure { position, .. } => *position,
        }
    }

    /// The buffer carried by this result.
    pub fn buffer(&self) -> &Buffer {
        match self {
            ParseResult::Success { buffer, .. } => buffer,
            ParseResult::Failure { buffer, .. } => buffer,
        }
    }

    /// The value, if this is a success.
    pub fn value(&self) -> Option<&Value> {
        match self {
            ParseResult::Success { value, .. } => Some(value),
            ParseResult::Failure { .. } => None,
        }
    }

    /// The failure message, if this is a failure.
    pub fn message(&self) -> Option<&str> {
        match self {
            ParseResult::Failure { message, .. } => Some(message.as_str()),
            ParseResult::Success { .. } => None,
        }
    }

    /// A context resuming from this result's buffer and position, for combinators that want to
    /// continue recognition from here.
    pub fn context(&self) -> Context {
        Context::new(self.buffer().clone(), self.position())
    }

    /// Convert to a plain [`std::result::Result`] for `?`-based call sites, pairing the
    /// remaining buffer/position with the value on success.
    pub fn into_outcome(self) -> Result<(Buffer, usize, Value), Failure> {
        match self {
            ParseResult::Success {
                buffer,
                position,
                value,
            } => Ok((buffer, position, value)),
            ParseResult::Failure {
                buffer,
                position,
                message,
            } => Err(Failure {
                buffer,
                position,
                message,
            }),
        }
    }
}

/// The error half of [`ParseResult::into_outcome`].
#[derive(Debug, Clone, PartialEq)]
pub struct Failure {
    /// The buffer this failure was produced against.
    pub buffer: Buffer,
    /// The position at which matching gave up.
    pub position: usize,
    /// A human-readable description of what was expected.
    pub message: String,
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (at position {})", self.message, self.position)
    }
}

impl std::error::Error for Failure {}
