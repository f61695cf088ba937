//! Positional directive rendering.
//!
//! Renders printf-style format strings such as `"%d minutes"` or
//! `"%[2]s owes %[1]d"` against an argument slice. Directives have the shape
//! `%[flags][[index]][width][.precision]verb`. Rendering never fails: a
//! directive whose verb is unknown, whose argument is missing, or whose
//! width or precision exceeds [`MAX_FIELD`] is emitted exactly as written.

use tracing::trace;
use winnow::ascii::digit1;
use winnow::combinator::{alt, delimited, opt, preceded, repeat};
use winnow::prelude::*;
use winnow::token::{one_of, take_till, take_while};

use crate::types::Value;

/// Verbs understood by the formatter.
pub const VERBS: &[char] = &[
    'v', 's', 'd', 'f', 'F', 'e', 'E', 'g', 'G', 'x', 'X', 'o', 'b', 'q', 't', 'c',
];

/// Largest width or precision a directive may request.
pub const MAX_FIELD: usize = 10_000;

/// Returns true if `c` is a supported formatting verb.
pub fn is_verb(c: char) -> bool {
    VERBS.contains(&c)
}

/// Localizes the digits of rendered numbers.
///
/// The formatter handles signs, padding and radix conversion itself and only
/// asks the style to render an unsigned decimal literal such as `"1234"` or
/// `"0.50"`.
pub trait NumberStyle {
    /// Render an unsigned ASCII decimal literal.
    fn digits(&self, digits: &str) -> String;
}

/// A [`NumberStyle`] that leaves digits untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainNumbers;

impl NumberStyle for PlainNumbers {
    fn digits(&self, digits: &str) -> String {
        digits.to_string()
    }
}

/// Render `format` with positional `args` and plain digits.
///
/// # Example
///
/// ```
/// use parlance::{Value, sprintf};
///
/// let out = sprintf("%[2]s has %[1]d", &[Value::from(3), Value::from("bob")]);
/// assert_eq!(out, "bob has 3");
/// ```
pub fn sprintf(format: &str, args: &[Value]) -> String {
    render(format, args, &PlainNumbers)
}

/// Render `format` with positional `args`, localizing digits through
/// `numbers`.
///
/// Directives without an explicit index consume arguments in order; an
/// explicit `[n]` index (1-based) selects an argument and later directives
/// continue from `n + 1`. Surplus arguments are ignored.
pub fn render(format: &str, args: &[Value], numbers: &dyn NumberStyle) -> String {
    let mut out = String::with_capacity(format.len());
    let mut next = 0usize;

    for piece in pieces(format) {
        match piece {
            Piece::Text(text) => out.push_str(text),
            Piece::Directive(directive) => {
                let position = match directive.index {
                    Some(0) => None,
                    Some(n) => Some(n - 1),
                    None => Some(next),
                };
                if let Some(position) = position {
                    next = position + 1;
                }
                match position.and_then(|p| args.get(p)) {
                    Some(value) => out.push_str(&directive.apply(value, numbers)),
                    None => {
                        trace!(directive = directive.raw, "no argument for directive");
                        out.push_str(directive.raw);
                    }
                }
            }
        }
    }

    out
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Flags {
    minus: bool,
    plus: bool,
    space: bool,
    zero: bool,
    alternate: bool,
}

impl Flags {
    fn parse(flags: &str) -> Self {
        let mut parsed = Flags::default();
        for flag in flags.chars() {
            match flag {
                '-' => parsed.minus = true,
                '+' => parsed.plus = true,
                ' ' => parsed.space = true,
                '0' => parsed.zero = true,
                '#' => parsed.alternate = true,
                _ => {}
            }
        }
        parsed
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Directive<'a> {
    flags: Flags,
    index: Option<usize>,
    width: Option<usize>,
    precision: Option<usize>,
    verb: char,
    raw: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Piece<'a> {
    Text(&'a str),
    Directive(Directive<'a>),
}

/// Split a format string into literal text and directives.
fn pieces(format: &str) -> Vec<Piece<'_>> {
    let mut remaining = format;
    let parsed: ModalResult<Vec<Piece<'_>>> = repeat(0.., piece).parse_next(&mut remaining);
    match parsed {
        Ok(pieces) if remaining.is_empty() => pieces,
        _ => vec![Piece::Text(format)],
    }
}

/// Parse one piece: a text run, an escaped `%%`, a directive, or a stray `%`.
fn piece<'a>(input: &mut &'a str) -> ModalResult<Piece<'a>> {
    alt((
        take_till(1.., '%').map(Piece::Text),
        "%%".value(Piece::Text("%")),
        directive.map(Piece::Directive),
        "%".map(Piece::Text),
    ))
    .parse_next(input)
}

/// Parse a directive: `%` flags [index] width .precision verb
fn directive<'a>(input: &mut &'a str) -> ModalResult<Directive<'a>> {
    preceded(
        '%',
        (
            take_while(0.., ['-', '+', ' ', '0', '#']),
            opt(delimited('[', digit1.parse_to::<usize>(), ']')),
            opt(digit1.parse_to::<usize>()),
            opt(preceded('.', opt(digit1.parse_to::<usize>()))),
            one_of(is_verb),
        ),
    )
    .with_taken()
    .map(|((flags, index, width, precision, verb), raw)| Directive {
        flags: Flags::parse(flags),
        index,
        width,
        precision: precision.map(|p| p.unwrap_or(0)),
        verb,
        raw,
    })
    .parse_next(input)
}

/// A rendered value before padding is applied.
struct Formatted {
    negative: bool,
    prefix: &'static str,
    body: String,
    numeric: bool,
}

impl Formatted {
    fn text(body: String) -> Self {
        Self {
            negative: false,
            prefix: "",
            body,
            numeric: false,
        }
    }

    fn number(negative: bool, body: String) -> Self {
        Self {
            negative,
            prefix: "",
            body,
            numeric: true,
        }
    }
}

impl Directive<'_> {
    fn apply(&self, value: &Value, numbers: &dyn NumberStyle) -> String {
        if self.oversized() {
            trace!(directive = self.raw, "width or precision too large");
            return self.raw.to_string();
        }
        let formatted = match self.verb {
            'v' => natural(value, numbers),
            's' => match (value, self.precision) {
                (Value::String(text), Some(limit)) => {
                    Formatted::text(text.chars().take(limit).collect())
                }
                (Value::String(text), None) => Formatted::text(text.clone()),
                (other, _) => natural(other, numbers),
            },
            'd' => match value {
                Value::Number(n) => {
                    Formatted::number(*n < 0, numbers.digits(&n.unsigned_abs().to_string()))
                }
                other => self.mismatch(other, numbers),
            },
            'f' | 'F' => match value.as_float() {
                Some(f) => fixed(f, self.precision.unwrap_or(6), numbers),
                None => self.mismatch(value, numbers),
            },
            'e' | 'E' => match value.as_float() {
                Some(f) => exponent(f, self.precision.unwrap_or(6), self.verb == 'E'),
                None => self.mismatch(value, numbers),
            },
            'g' | 'G' => match value.as_float() {
                Some(f) => general(f, self.precision, self.verb == 'G'),
                None => self.mismatch(value, numbers),
            },
            'x' | 'X' | 'o' | 'b' => self.radix(value, numbers),
            'q' => Formatted::text(format!("{:?}", value.to_string())),
            't' => match value {
                Value::Bool(b) => Formatted::text(b.to_string()),
                other => self.mismatch(other, numbers),
            },
            'c' => match value {
                Value::Number(n) => Formatted::text(code_point(*n).to_string()),
                other => self.mismatch(other, numbers),
            },
            _ => return self.raw.to_string(),
        };
        self.pad(formatted)
    }

    fn oversized(&self) -> bool {
        [self.width, self.precision]
            .into_iter()
            .flatten()
            .any(|field| field > MAX_FIELD)
    }

    /// Render a value the verb does not apply to in its natural form.
    fn mismatch(&self, value: &Value, numbers: &dyn NumberStyle) -> Formatted {
        trace!(directive = self.raw, kind = value.kind(), "verb does not fit value");
        natural(value, numbers)
    }

    fn radix(&self, value: &Value, numbers: &dyn NumberStyle) -> Formatted {
        match value {
            Value::Number(n) => {
                let magnitude = n.unsigned_abs();
                let (body, prefix) = match self.verb {
                    'x' => (format!("{magnitude:x}"), "0x"),
                    'X' => (format!("{magnitude:X}"), "0X"),
                    'o' => (format!("{magnitude:o}"), "0"),
                    _ => (format!("{magnitude:b}"), "0b"),
                };
                Formatted {
                    negative: *n < 0,
                    prefix: if self.flags.alternate { prefix } else { "" },
                    body,
                    numeric: true,
                }
            }
            Value::String(s) if self.verb == 'x' => {
                Formatted::text(s.bytes().map(|b| format!("{b:02x}")).collect())
            }
            Value::String(s) if self.verb == 'X' => {
                Formatted::text(s.bytes().map(|b| format!("{b:02X}")).collect())
            }
            other => self.mismatch(other, numbers),
        }
    }

    fn pad(&self, formatted: Formatted) -> String {
        let sign = if formatted.negative {
            "-"
        } else if formatted.numeric && self.flags.plus {
            "+"
        } else if formatted.numeric && self.flags.space {
            " "
        } else {
            ""
        };
        let len = sign.len() + formatted.prefix.len() + formatted.body.chars().count();
        let fill = self.width.unwrap_or(0).saturating_sub(len);

        let mut out = String::with_capacity(len + fill);
        if fill == 0 {
            out.push_str(sign);
            out.push_str(formatted.prefix);
            out.push_str(&formatted.body);
        } else if self.flags.minus {
            out.push_str(sign);
            out.push_str(formatted.prefix);
            out.push_str(&formatted.body);
            out.push_str(&" ".repeat(fill));
        } else if self.flags.zero && formatted.numeric {
            out.push_str(sign);
            out.push_str(formatted.prefix);
            out.push_str(&"0".repeat(fill));
            out.push_str(&formatted.body);
        } else {
            out.push_str(&" ".repeat(fill));
            out.push_str(sign);
            out.push_str(formatted.prefix);
            out.push_str(&formatted.body);
        }
        out
    }
}

/// The representation used by `%v` and by verbs that do not fit the value.
fn natural(value: &Value, numbers: &dyn NumberStyle) -> Formatted {
    match value {
        Value::Number(n) => {
            Formatted::number(*n < 0, numbers.digits(&n.unsigned_abs().to_string()))
        }
        Value::Float(f) if f.is_finite() => {
            let magnitude = f.abs();
            if magnitude != 0.0 && !(1e-4..1e21).contains(&magnitude) {
                Formatted::number(
                    f.is_sign_negative(),
                    exponent_marker(&format!("{magnitude:e}"), false),
                )
            } else {
                Formatted::number(f.is_sign_negative(), numbers.digits(&magnitude.to_string()))
            }
        }
        other => Formatted::text(other.to_string()),
    }
}

fn fixed(f: f64, precision: usize, numbers: &dyn NumberStyle) -> Formatted {
    if !f.is_finite() {
        return Formatted::text(f.to_string());
    }
    Formatted::number(
        f.is_sign_negative(),
        numbers.digits(&format!("{:.precision$}", f.abs())),
    )
}

fn exponent(f: f64, precision: usize, upper: bool) -> Formatted {
    if !f.is_finite() {
        return Formatted::text(f.to_string());
    }
    let raw = format!("{:.precision$e}", f.abs());
    Formatted::number(f.is_sign_negative(), exponent_marker(&raw, upper))
}

fn general(f: f64, precision: Option<usize>, upper: bool) -> Formatted {
    if !f.is_finite() {
        return Formatted::text(f.to_string());
    }
    let magnitude = f.abs();
    let body = match precision {
        None if magnitude == 0.0 || (1e-4..1e21).contains(&magnitude) => magnitude.to_string(),
        None => exponent_marker(&format!("{magnitude:e}"), upper),
        Some(precision) => {
            let precision = precision.max(1);
            let scientific = format!("{:.*e}", precision - 1, magnitude);
            let (mantissa, exp) = scientific
                .split_once('e')
                .unwrap_or((scientific.as_str(), "0"));
            let exp: i64 = exp.parse().unwrap_or(0);
            let significant = i64::try_from(precision).unwrap_or(i64::MAX);
            if exp < -4 || exp >= significant {
                exponent_marker(&format!("{}e{exp}", trim_fraction(mantissa)), upper)
            } else {
                let decimals = usize::try_from(significant - 1 - exp).unwrap_or(0);
                trim_fraction(&format!("{magnitude:.decimals$}")).to_string()
            }
        }
    };
    Formatted::number(f.is_sign_negative(), body)
}

/// Rewrite Rust's `1.5e3` exponent form as `1.5e+03`.
fn exponent_marker(raw: &str, upper: bool) -> String {
    let (mantissa, exp) = raw.split_once('e').unwrap_or((raw, "0"));
    let exp: i32 = exp.parse().unwrap_or(0);
    let sign = if exp < 0 { '-' } else { '+' };
    let marker = if upper { 'E' } else { 'e' };
    format!("{mantissa}{marker}{sign}{:02}", exp.unsigned_abs())
}

fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}

fn code_point(n: i64) -> char {
    u32::try_from(n)
        .ok()
        .and_then(char::from_u32)
        .unwrap_or(char::REPLACEMENT_CHARACTER)
}
