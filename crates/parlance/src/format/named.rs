//! Named placeholder rewriting.
//!
//! Templates name their arguments with `%(name)verbs` placeholders, as in
//! `"%(name)s has %(count)d items"`. The rewriter turns every placeholder
//! occurrence into a positional directive (`%[1]s`, `%[2]d`, ...) and
//! collects the matching argument, so the result can be handed to the
//! positional formatter.
//!
//! Handles:
//! - Greedy verb runs after the closing parenthesis (`%(n)d`, `%(n)`)
//! - Repeated names, each occurrence contributing its own argument
//! - Unterminated `%(`, emitted verbatim from that point on
//! - Names with no parameter, left exactly as written
//! - `%%` escapes, which never open a placeholder

use tracing::debug;
use winnow::combinator::{alt, delimited, preceded, repeat};
use winnow::prelude::*;
use winnow::token::{rest, take_till, take_while};

use crate::format::positional::{NumberStyle, PlainNumbers, is_verb, render};
use crate::types::{FmtParams, Value};

/// A template rewritten for positional rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Rewritten {
    /// The format string, using `%[n]verb` directives.
    pub format: String,

    /// Arguments in directive order; `args[i]` feeds `%[i + 1]`.
    pub args: Vec<Value>,
}

impl Rewritten {
    /// Render the rewritten template, localizing digits through `numbers`.
    pub fn render(&self, numbers: &dyn NumberStyle) -> String {
        render(&self.format, &self.args, numbers)
    }
}

/// Substitute named parameters into `template`.
///
/// Numbers are rendered with plain ASCII digits. Use a
/// [`Printer`](crate::Printer) for locale-aware digits.
///
/// # Example
///
/// ```
/// use parlance::{named_parameters, params};
///
/// let out = named_parameters("%(name)s has %(num)d", &params! { "name" => "bob", "num" => 12 });
/// assert_eq!(out, "bob has 12");
/// ```
pub fn named_parameters(template: &str, params: &FmtParams) -> String {
    rewrite_named(template, params).render(&PlainNumbers)
}

/// Rewrite `template` into a positional format string and argument list.
pub fn rewrite_named(template: &str, params: &FmtParams) -> Rewritten {
    rewrite_named_with(template, params, Vec::new())
}

/// Rewrite `template` with `leading` positional arguments in front.
///
/// The leading arguments keep positions `1..=leading.len()`, so plain
/// directives such as `%d` in the template still address them, and named
/// placeholders are numbered after them.
///
/// # Example
///
/// ```
/// use parlance::{Value, params, rewrite_named_with};
///
/// let rewritten = rewrite_named_with("%d of %(total)d", &params! { "total" => 9 }, vec![Value::from(3)]);
/// assert_eq!(rewritten.format, "%d of %[2]d");
/// assert_eq!(rewritten.args, vec![Value::from(3), Value::from(9)]);
/// ```
pub fn rewrite_named_with(template: &str, params: &FmtParams, leading: Vec<Value>) -> Rewritten {
    let mut format = String::with_capacity(template.len());
    let mut args = leading;

    for segment in segments(template) {
        match segment {
            Segment::Text(text) => format.push_str(text),
            Segment::Placeholder { name, verbs, raw } => match params.get(name) {
                Some(value) => {
                    args.push(value.clone());
                    let verbs = if verbs.is_empty() { "v" } else { verbs };
                    format.push_str(&format!("%[{}]{verbs}", args.len()));
                }
                None => {
                    debug!(name, template, "no parameter for placeholder");
                    push_literal(&mut format, raw);
                }
            },
            Segment::Unterminated(text) => push_literal(&mut format, text),
        }
    }

    Rewritten { format, args }
}

/// The placeholder names referenced by `template`, in order of occurrence.
///
/// Repeated names appear once per occurrence.
pub fn placeholder_names(template: &str) -> Vec<&str> {
    segments(template)
        .into_iter()
        .filter_map(|segment| match segment {
            Segment::Placeholder { name, .. } => Some(name),
            Segment::Text(_) | Segment::Unterminated(_) => None,
        })
        .collect()
}

/// Append `text` so that the positional formatter reproduces it literally.
fn push_literal(format: &mut String, text: &str) {
    format.push_str(&text.replace('%', "%%"));
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment<'a> {
    /// Text copied through unchanged, including positional directives.
    Text(&'a str),

    /// A `%(name)verbs` placeholder with its full source text.
    Placeholder {
        name: &'a str,
        verbs: &'a str,
        raw: &'a str,
    },

    /// A `%(` with no closing parenthesis, through the end of the template.
    Unterminated(&'a str),
}

/// Split a template into segments.
fn segments(template: &str) -> Vec<Segment<'_>> {
    let mut remaining = template;
    let parsed: ModalResult<Vec<Segment<'_>>> = repeat(0.., segment).parse_next(&mut remaining);
    match parsed {
        Ok(segments) if remaining.is_empty() => segments,
        _ => vec![Segment::Text(template)],
    }
}

/// Parse a single segment.
///
/// `%%` stays together so an escaped percent never opens a placeholder.
fn segment<'a>(input: &mut &'a str) -> ModalResult<Segment<'a>> {
    alt((
        take_till(1.., '%').map(Segment::Text),
        "%%".map(Segment::Text),
        placeholder,
        preceded("%(", rest).take().map(Segment::Unterminated),
        "%".map(Segment::Text),
    ))
    .parse_next(input)
}

/// Parse a placeholder: %( name ) verbs*
fn placeholder<'a>(input: &mut &'a str) -> ModalResult<Segment<'a>> {
    (
        delimited("%(", take_till(0.., ')'), ')'),
        take_while(0.., is_verb),
    )
        .with_taken()
        .map(|((name, verbs), raw)| Segment::Placeholder { name, verbs, raw })
        .parse_next(input)
}
