//! Lenient numeric coercion for form input.
//!
//! HTML forms submit numbers as strings, so the number field accepts anything
//! the browser-side `Number(x)` conversion accepts and rejects the rest as
//! NaN:
//!
//! | input            | result                                   |
//! |------------------|------------------------------------------|
//! | absent           | NaN                                      |
//! | `null`           | `0`                                      |
//! | `true` / `false` | `1` / `0`                                |
//! | number           | itself                                   |
//! | string           | trimmed numeric literal, `""` is `0`     |
//! | array            | `[]` is `0`, `[x]` coerces `x`, else NaN |
//! | object           | NaN                                      |

use serde_json::Value;

use crate::foundation::Input;

/// Coerces an input to a number, returning NaN when it has no numeric reading.
#[must_use]
pub fn coerce_number(input: Input<'_>) -> f64 {
    match input {
        Input::Absent => f64::NAN,
        Input::Present(value) => coerce_value(value),
    }
}

fn coerce_value(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => parse_numeric_str(s),
        Value::Array(items) => coerce_array(items),
        Value::Object(_) => f64::NAN,
    }
}

// An array converts through its comma-joined string form, which only has a
// numeric reading when it holds at most one element.
fn coerce_array(items: &[Value]) -> f64 {
    match items {
        [] => 0.0,
        [Value::Null] => 0.0,
        [Value::Number(n)] => n.as_f64().unwrap_or(f64::NAN),
        [Value::String(s)] => parse_numeric_str(s),
        [Value::Array(inner)] => coerce_array(inner),
        _ => f64::NAN,
    }
}

fn is_js_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// Parses a numeric string literal.
///
/// Accepts surrounding whitespace, decimal literals with optional sign,
/// fraction and exponent, `Infinity` with optional sign, and unsigned
/// `0x` / `0o` / `0b` integer literals. The empty string is `0`.
#[must_use]
pub fn parse_numeric_str(raw: &str) -> f64 {
    let s = raw.trim_matches(is_js_whitespace);
    if s.is_empty() {
        return 0.0;
    }

    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    if let Some(n) = parse_radix_literal(s) {
        return n;
    }

    if is_decimal_literal(s) {
        s.parse::<f64>().unwrap_or(f64::NAN)
    } else {
        f64::NAN
    }
}

fn parse_radix_literal(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };

    let digits = &s[2..];
    if digits.is_empty() {
        return Some(f64::NAN);
    }

    let mut acc = 0.0_f64;
    for c in digits.chars() {
        match c.to_digit(radix) {
            Some(d) => acc = acc * f64::from(radix) + f64::from(d),
            None => return Some(f64::NAN),
        }
    }
    Some(acc)
}

// [+-]? (digits [. digits?] | . digits) ([eE] [+-]? digits)?
fn is_decimal_literal(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let int_digits = i - int_start;

    let mut frac_digits = 0;
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        frac_digits = i - frac_start;
    }

    if int_digits == 0 && frac_digits == 0 {
        return false;
    }

    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        i += 1;
        if i < bytes.len() && matches!(bytes[i], b'+' | b'-') {
            i += 1;
        }
        let exp_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == exp_start {
            return false;
        }
    }

    i == bytes.len()
}
