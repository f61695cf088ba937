//! Tests for positional directive rendering.

use parlance::format::{MAX_FIELD, NumberStyle, render};
use parlance::{Value, sprintf};

// =========================================================================
// Verbs
// =========================================================================

#[test]
fn sprintf_integer_and_string() {
    let out = sprintf("%s has %d cards", &[Value::from("Alice"), Value::from(3)]);
    assert_eq!(out, "Alice has 3 cards");
}

#[test]
fn sprintf_natural_format_for_each_kind() {
    let args = [
        Value::from(-4),
        Value::from(2.5),
        Value::from("x"),
        Value::from(false),
    ];
    assert_eq!(sprintf("%v %v %v %v", &args), "-4 2.5 x false");
}

#[test]
fn sprintf_fixed_precision() {
    assert_eq!(sprintf("%.2f", &[Value::from(1.23456)]), "1.23");
    assert_eq!(sprintf("%f", &[Value::from(1)]), "1.000000");
}

#[test]
fn sprintf_exponent() {
    assert_eq!(sprintf("%e", &[Value::from(1234.5678)]), "1.234568e+03");
    assert_eq!(sprintf("%.1E", &[Value::from(0.00012)]), "1.2E-04");
}

#[test]
fn sprintf_general() {
    assert_eq!(sprintf("%g", &[Value::from(0.5)]), "0.5");
    assert_eq!(sprintf("%.3g", &[Value::from(1234.5)]), "1.23e+03");
}

#[test]
fn sprintf_radix_verbs() {
    let n = [Value::from(255)];
    assert_eq!(sprintf("%x", &n), "ff");
    assert_eq!(sprintf("%X", &n), "FF");
    assert_eq!(sprintf("%#x", &n), "0xff");
    assert_eq!(sprintf("%o", &n), "377");
    assert_eq!(sprintf("%b", &n), "11111111");
}

#[test]
fn sprintf_hex_of_string_encodes_bytes() {
    assert_eq!(sprintf("%x", &[Value::from("hi")]), "6869");
}

#[test]
fn sprintf_quoted_string() {
    assert_eq!(sprintf("%q", &[Value::from("say \"hi\"")]), r#""say \"hi\"""#);
}

#[test]
fn sprintf_character() {
    assert_eq!(sprintf("%c", &[Value::from(65)]), "A");
}

#[test]
fn sprintf_string_precision_truncates() {
    assert_eq!(sprintf("%.3s", &[Value::from("abcdef")]), "abc");
}

// =========================================================================
// Width and Flags
// =========================================================================

#[test]
fn width_pads_on_the_left() {
    assert_eq!(sprintf("[%5d]", &[Value::from(42)]), "[   42]");
}

#[test]
fn minus_flag_pads_on_the_right() {
    assert_eq!(sprintf("[%-5s]", &[Value::from("ab")]), "[ab   ]");
}

#[test]
fn zero_flag_pads_after_the_sign() {
    assert_eq!(sprintf("%05d", &[Value::from(-42)]), "-0042");
}

#[test]
fn plus_flag_shows_sign() {
    assert_eq!(sprintf("%+d", &[Value::from(7)]), "+7");
}

// =========================================================================
// Argument Indexing
// =========================================================================

#[test]
fn explicit_index_selects_argument() {
    let args = [Value::from("a"), Value::from("b")];
    assert_eq!(sprintf("%[2]s%[1]s", &args), "ba");
}

#[test]
fn implicit_directives_continue_after_explicit_index() {
    let args = [Value::from(1), Value::from(2), Value::from(3)];
    assert_eq!(sprintf("%[2]d %d", &args), "2 3");
}

#[test]
fn surplus_arguments_are_ignored() {
    assert_eq!(sprintf("%d", &[Value::from(1), Value::from(2)]), "1");
}

// =========================================================================
// Fallbacks
// =========================================================================

#[test]
fn missing_argument_is_left_verbatim() {
    assert_eq!(sprintf("%d and %s", &[Value::from(1)]), "1 and %s");
}

#[test]
fn unknown_verb_is_left_verbatim() {
    assert_eq!(sprintf("%y", &[Value::from(1)]), "%y");
}

#[test]
fn escaped_and_trailing_percent() {
    assert_eq!(sprintf("100%% done %", &[]), "100% done %");
}

#[test]
fn huge_width_is_left_verbatim() {
    let out = sprintf("[%99999999999999999d] %d", &[Value::from(1), Value::from(2)]);
    assert_eq!(out, "[%99999999999999999d] 2");
}

#[test]
fn huge_precision_is_left_verbatim() {
    let args = [Value::from(1.5)];
    assert_eq!(sprintf("%.70000f", &args), "%.70000f");
    assert_eq!(sprintf("%.70000e", &args), "%.70000e");
    assert_eq!(sprintf("%.70000g", &args), "%.70000g");
    assert_eq!(sprintf("%.70000s", &[Value::from("ab")]), "%.70000s");
}

#[test]
fn largest_allowed_width_is_rendered() {
    let out = sprintf(&format!("%{MAX_FIELD}d"), &[Value::from(7)]);
    assert_eq!(out.len(), MAX_FIELD);
    assert!(out.ends_with(" 7"));
}

#[test]
fn largest_allowed_precision_is_rendered() {
    let out = sprintf(&format!("%.{MAX_FIELD}g"), &[Value::from(0.001)]);
    assert!(out.starts_with("0.001"), "{out}");
}

#[test]
fn mismatched_verb_falls_back_to_natural_format() {
    assert_eq!(sprintf("%d", &[Value::from("seven")]), "seven");
}

// =========================================================================
// Number Styles
// =========================================================================

struct Bracketed;

impl NumberStyle for Bracketed {
    fn digits(&self, digits: &str) -> String {
        format!("<{digits}>")
    }
}

#[test]
fn number_style_sees_unsigned_digits() {
    let out = render("%d %v %.1f", &[Value::from(-3), Value::from(4), Value::from(2.31)], &Bracketed);
    assert_eq!(out, "-<3> <4> <2.3>");
}

#[test]
fn number_style_is_not_applied_to_radix_verbs() {
    assert_eq!(render("%x", &[Value::from(255)], &Bracketed), "ff");
}
