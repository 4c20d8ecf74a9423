//! Single-unit character recognizers.
//!
//! Every character parser shares the same shape: consume exactly one input unit if the
//! position is in bounds and a predicate accepts it; fail with a message otherwise. The
//! predicates themselves are a small closed [`CharKind`] enum so that they compose (for
//! [`CharKind::Alternatives`] and [`CharKind::Negated`]) and so the
//! [`pattern`](crate::pattern) mini-grammar can build them directly.

use std::any::Any;

use crate::context::{Context, ParseResult, Value};
use crate::error::ConstructionError;
use crate::parser::{Node, Parser};

/// A character-matching predicate, as a closed set of variants rather than a boxed closure, so
/// that two `CharMatch` nodes can be compared for configuration equality and so negation can
/// simplify itself (double negation collapses to the original predicate).
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum CharKind {
    Exact(char),
    Range(char, char),
    Digit,
    Letter,
    Lowercase,
    Uppercase,
    Word,
    Whitespace,
    Any,
    Alternatives(Vec<CharKind>),
    Negated(Box<CharKind>),
}

impl CharKind {
    fn test(&self, c: char) -> bool {
        match self {
            CharKind::Exact(expected) => c == *expected,
            CharKind::Range(lo, hi) => *lo <= c && c <= *hi,
            CharKind::Digit => c.is_ascii_digit(),
            CharKind::Letter => c.is_ascii_alphabetic(),
            CharKind::Lowercase => c.is_ascii_lowercase(),
            CharKind::Uppercase => c.is_ascii_uppercase(),
            CharKind::Word => c.is_ascii_alphanumeric() || c == '_',
            // Tab, LF, FF, CR, space. Vertical tab (11) is deliberately excluded.
            CharKind::Whitespace => matches!(c, '\t' | '\n' | '\u{c}' | '\r' | ' '),
            CharKind::Any => true,
            CharKind::Alternatives(kinds) => kinds.iter().any(|k| k.test(c)),
            CharKind::Negated(inner) => !inner.test(c),
        }
    }

    /// Negation with double-negation simplification: negating a `Negated(x)` yields `x` back,
    /// rather than `Negated(Negated(x))`.
    pub(crate) fn negate(self) -> CharKind {
        match self {
            CharKind::Negated(inner) => *inner,
            other => CharKind::Negated(Box::new(other)),
        }
    }

    fn default_message(&self) -> String {
        match self {
            CharKind::Exact(c) => format!("expected {c:?}"),
            CharKind::Range(lo, hi) => format!("expected a character in {lo:?}..={hi:?}"),
            CharKind::Digit => "expected a digit".to_string(),
            CharKind::Letter => "expected a letter".to_string(),
            CharKind::Lowercase => "expected a lowercase letter".to_string(),
            CharKind::Uppercase => "expected an uppercase letter".to_string(),
            CharKind::Word => "expected a word character".to_string(),
            CharKind::Whitespace => "expected whitespace".to_string(),
            CharKind::Any => "expected any character".to_string(),
            CharKind::Alternatives(_) => "expected one of a set of characters".to_string(),
            CharKind::Negated(inner) => format!("expected not: {}", inner.default_message()),
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct CharMatch {
    kind: CharKind,
    message: String,
}

impl CharMatch {
    pub(crate) fn new(kind: CharKind) -> Parser {
        let message = kind.default_message();
        Parser::from_node(CharMatch { kind, message })
    }
}

impl Node for CharMatch {
    fn recognize(&self, ctx: &Context) -> ParseResult {
        match ctx.current() {
            Some(c) if self.kind.test(c) => ctx.success(Value::Char(c), Some(ctx.position() + 1)),
            _ => ctx.failure(self.message.clone(), None),
        }
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
            .downcast_ref::<CharMatch>()
            .is_some_and(|o| o.kind == self.kind && o.message == self.message)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Accepts either a single Unicode scalar value or a one-character string; any other input is a
/// [`ConstructionError::InvalidCharArgument`].
pub trait IntoCharArg {
    /// Perform the conversion, or describe why it failed.
    fn into_char_arg(self) -> Result<char, ConstructionError>;
}

impl IntoCharArg for char {
    fn into_char_arg(self) -> Result<char, ConstructionError> {
        Ok(self)
    }
}

impl IntoCharArg for u32 {
    fn into_char_arg(self) -> Result<char, ConstructionError> {
        char::from_u32(self).ok_or_else(|| ConstructionError::InvalidCharArgument {
            given: self.to_string(),
        })
    }
}

impl IntoCharArg for &str {
    fn into_char_arg(self) -> Result<char, ConstructionError> {
        let mut chars = self.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(ConstructionError::InvalidCharArgument {
                given: self.to_string(),
            }),
        }
    }
}

impl IntoCharArg for String {
    fn into_char_arg(self) -> Result<char, ConstructionError> {
        self.as_str().into_char_arg()
    }
}

/// A parser matching exactly the given character (or numeric code, or one-character string).
/// Panics (a construction-error-class programmer mistake) if `c` does not convert to a single
/// character; use [`try_char`] to get a `Result` instead.
pub fn char(c: impl IntoCharArg) -> Parser {
    try_char(c).expect("invalid character argument")
}

/// Fallible form of [`char`].
pub fn try_char(c: impl IntoCharArg) -> Result<Parser, ConstructionError> {
    Ok(CharMatch::new(CharKind::Exact(c.into_char_arg()?)))
}

/// A parser matching a single character string, literal-then-literal via [`Parser::seq`].
/// Panics on an empty `literal` (a construction-error-class programmer mistake).
pub fn string(literal: &str) -> Parser {
    let mut chars = literal.chars();
    let first = chars
        .next()
        .unwrap_or_else(|| panic!("string() requires a non-empty literal"));
    let mut parser = char(first);
    for c in chars {
        parser = parser.seq(char(c));
    }
    parser
}

/// A parser matching any character in `lo..=hi`.
pub fn range(lo: impl IntoCharArg, hi: impl IntoCharArg) -> Parser {
    let lo = lo.into_char_arg().expect("invalid character argument");
    let hi = hi.into_char_arg().expect("invalid character argument");
    CharMatch::new(CharKind::Range(lo, hi))
}

/// A parser matching an ASCII digit (`0`..=`9`).
pub fn digit() -> Parser {
    CharMatch::new(CharKind::Digit)
}

/// A parser matching an ASCII letter.
pub fn letter() -> Parser {
    CharMatch::new(CharKind::Letter)
}

/// A parser matching an ASCII lowercase letter.
pub fn lowercase() -> Parser {
    CharMatch::new(CharKind::Lowercase)
}

/// A parser matching an ASCII uppercase letter.
pub fn uppercase() -> Parser {
    CharMatch::new(CharKind::Uppercase)
}

/// A parser matching a letter, digit, or underscore.
pub fn word() -> Parser {
    CharMatch::new(CharKind::Word)
}

/// A parser matching one whitespace unit (tab, LF, FF, CR, or space).
pub fn whitespace() -> Parser {
    CharMatch::new(CharKind::Whitespace)
}

/// A parser matching any single unit, failing only at end of input.
pub fn any() -> Parser {
    CharMatch::new(CharKind::Any)
}

/// Build a character parser directly from a [`CharKind`], used by [`crate::pattern`] to fold a
/// compiled character class into a single node.
pub(crate) fn from_kind(kind: CharKind) -> Parser {
    CharMatch::new(kind)
}

#[cfg(test)]
mod tests;
