//! A small, graph-based [PEG](https://en.wikipedia.org/wiki/Parsing_expression_grammar)
//! parser-combinator core.
//!
//! Unlike function-based combinator libraries, every parser built here is a node in an
//! explicit, inspectable graph: you can enumerate a parser's children, replace a subparser
//! in place, deep-copy a grammar, or compare two grammars for structural equality. That is
//! what makes it possible to tie recursive grammars together with [`Settable`] and to rewrite
//! or optimize a grammar after the fact, without re-deriving it from scratch.
//!
//! ## Example
//!
//! ```rust
//! use pegraph::character::{char, digit};
//!
//! let digits = digit().plus().flatten();
//! let result = digits.parse("123abc");
//! assert_eq!(result.value().unwrap().as_str(), Some("123"));
//!
//! let a = char('a');
//! assert!(a.accept("a"));
//! assert!(!a.accept("b"));
//! ```
//!
//! Recursive grammars are tied together with a [`Settable`] forward reference:
//!
//! ```rust
//! use pegraph::character::{char, digit};
//! use pegraph::Settable;
//!
//! let expr = Settable::new();
//! let parenthesized = char('(').seq(expr.parser()).seq(char(')')).pick(1);
//! let grammar = digit().or(parenthesized);
//! expr.set(grammar).unwrap();
//!
//! let result = expr.parser().end("expected end of input").parse("((3))");
//! assert!(result.is_success());
//! ```
//!
//! ## Module map
//!
//! - [`context`] - the parse context and result types.
//! - [`parser`] - the [`Parser`] handle, the [`Node`](parser::Node) trait, and all combinator
//!   builder methods.
//! - [`character`] - single-unit character recognizers.
//! - [`pattern`] - the `[a-zA-Z0-9_]`-style character-class mini-grammar.
//! - [`combinator`] - one-child wrapper combinators: end-of-input, lookahead, optional,
//!   repetition, action.
//! - [`branch`] and [`sequence`] - ordered choice and ordered concatenation.
//! - [`graph`] - traversal, deep copy, transformation, structural equality, and the
//!   reference-mode runners `parse`/`accept`/`matches`.
//! - [`settable`] - the forward-reference node used to tie recursive grammars.
//! - [`error`] - construction-time error types.
//! - [`trace`] - an optional, feature-gated execution tracer.

#![deny(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod branch;
pub mod character;
pub mod combinator;
pub mod context;
pub mod error;
pub mod graph;
pub mod parser;
pub mod pattern;
pub mod sequence;
pub mod settable;
pub mod trace;

pub use context::{Context, ParseResult, Token, Value};
pub use error::ConstructionError;
pub use parser::Parser;
pub use settable::Settable;
