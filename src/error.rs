//! Construction-time errors.
//!
//! These are raised synchronously by combinator builders for programmer-bug-class mistakes:
//! an invalid character argument, an inverted repetition bound, or a [`Settable`] assigned a
//! delegate more than once. They are never returned from [`Parser::parse`](crate::Parser::parse)
//! - a *parse* failure is a data condition and is reported through
//! [`ParseResult::Failure`](crate::context::ParseResult) instead, never thrown.

use std::fmt;

/// A programmer-bug-class error raised while building a parser graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstructionError {
    /// A character argument was neither a single-`char` string nor a valid code point.
    InvalidCharArgument {
        /// The offending input, rendered for diagnostics.
        given: String,
    },
    /// `repeat(min, max)` was constructed with `min > max`.
    InvalidBounds {
        /// The requested minimum.
        min: usize,
        /// The requested maximum.
        max: usize,
    },
    /// A [`Settable`](crate::Settable) had [`set`](crate::Settable::set) called on it more than
    /// once.
    SettableAlreadyAssigned,
    /// A character-class pattern (the [`pattern`](crate::pattern) mini-grammar's input) could
    /// not be parsed.
    InvalidPattern {
        /// The pattern text that failed to parse.
        pattern: String,
        /// Where in the pattern the mini-grammar gave up.
        position: usize,
    },
}

impl fmt::Display for ConstructionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstructionError::InvalidCharArgument { given } => {
                write!(
                    f,
                    "expected a single code point or one-character string, got {given:?}"
                )
            }
            ConstructionError::InvalidBounds { min, max } => {
                write!(f, "invalid repetition bounds: min ({min}) > max ({max})")
            }
            ConstructionError::SettableAlreadyAssigned => {
                write!(f, "Settable::set called twice on the same forward reference")
            }
            ConstructionError::InvalidPattern { pattern, position } => {
                write!(
                    f,
                    "invalid character-class pattern {pattern:?} at position {position}"
                )
            }
        }
    }
}

impl std::error::Error for ConstructionError {}
