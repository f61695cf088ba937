//! Template rendering.
//!
//! Two layers: the named rewriter turns `%(name)verb` placeholders into
//! positional directives, and the positional formatter renders those
//! directives against an argument list.

mod named;
mod positional;

pub use named::{Rewritten, named_parameters, placeholder_names, rewrite_named, rewrite_named_with};
pub use positional::{MAX_FIELD, NumberStyle, PlainNumbers, VERBS, is_verb, render, sprintf};
