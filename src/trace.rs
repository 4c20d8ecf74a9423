//! Parser execution tracing, gated behind the `debug` Cargo feature.
//!
//! Mirrors the reference crate's own `trace()` wrapper: an indented enter/exit line per
//! recognition step, written to stderr, with call depth tracked through a thread-local counter
//! rather than threaded through every `recognize` call. Changes no parsing semantics; with the
//! feature off this is a zero-cost identity wrapper.

#[cfg(feature = "debug")]
mod internals;

#[cfg(feature = "debug")]
use crate::context::{Context, ParseResult};
use crate::parser::Parser;
#[cfg(feature = "debug")]
use crate::parser::Node;

/// Wrap `inner` so that every call to its `recognize` prints an indented trace line to stderr
/// when the `debug` feature is enabled; a transparent pass-through otherwise.
#[cfg_attr(not(feature = "debug"), allow(unused_variables))]
pub fn trace(name: impl Into<String>, inner: Parser) -> Parser {
    #[cfg(feature = "debug")]
    {
        Parser::from_node(Traced {
            name: name.into(),
            inner,
        })
    }
    #[cfg(not(feature = "debug"))]
    {
        inner
    }
}

#[cfg(feature = "debug")]
#[derive(Debug, Clone)]
struct Traced {
    name: String,
    inner: Parser,
}

#[cfg(feature = "debug")]
impl Node for Traced {
    fn recognize(&self, ctx: &Context) -> ParseResult {
        let depth = internals::Depth::new();
        internals::start(*depth, &self.name, ctx);

        let result = self.inner.recognize(ctx);

        let consumed = result.value().map(|_| result.position() - ctx.position());
        internals::end(*depth, &self.name, consumed, result.is_success());
        result
    }

    fn children(&self) -> Vec<Parser> {
        vec![self.inner.clone()]
    }

    fn replace_child(&mut self, old: &Parser, new: &Parser) {
        if self.inner == *old {
            self.inner = new.clone();
        }
    }

    fn clone_node(&self) -> Parser {
        Parser::from_node(self.clone())
    }

    fn config_eq(&self, other: &dyn Node) -> bool {
        other
            .as_any()
            .downcast_ref::<Traced>()
            .is_some_and(|o| o.name == self.name)
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }
}
