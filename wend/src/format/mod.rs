//! Formatting of bound values for template interpolation.
//!
//! Each interpolation in a template carries a format specifier such as
//! `04d`, `>8` or `.2f`. [`format_value`] applies it to a [`Value`]. A
//! specifier that does not make sense for the value's type is reported as a
//! [`FormatError`], which resolution passes through unchanged.
//!
//! # Examples
//!
//! ```
//! use wend::format::format_value;
//! use wend::Value;
//!
//! assert_eq!(format_value(&Value::Int(7), "04d").unwrap(), "0007");
//! assert_eq!(format_value(&Value::Float(0.5), ".1%").unwrap(), "50.0%");
//! assert_eq!(format_value(&Value::from("ab"), "^6").unwrap(), "  ab  ");
//! assert!(format_value(&Value::from("ab"), "d").is_err());
//! ```

mod spec;

use thiserror::Error;

use crate::value::Value;

pub use spec::{Align, FormatSpec, Sign, MAX_FIELD};

/// Failure to apply a format specifier to a value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The specifier text itself is malformed.
    #[error("invalid format specifier '{spec}': {reason}")]
    Invalid {
        /// The specifier text.
        spec: String,
        /// What was wrong with it.
        reason: String,
    },

    /// The presentation type does not exist for the value's type.
    #[error("unknown format code '{code}' for object of type '{type_name}'")]
    UnknownCode {
        /// The presentation type character.
        code: char,
        /// The value's type name.
        type_name: &'static str,
    },

    /// An option is valid syntax but not allowed for this value.
    #[error("{message}")]
    NotAllowed {
        /// Description of the rejected option.
        message: String,
    },
}

/// Format a value according to a specifier.
///
/// An empty specifier renders the value's plain display form.
///
/// # Errors
///
/// Returns a [`FormatError`] when the specifier is malformed or does not
/// apply to the value's type.
pub fn format_value(value: &Value, spec: &str) -> Result<String, FormatError> {
    if spec.is_empty() {
        return Ok(value.to_string());
    }
    let parsed = FormatSpec::parse(spec)?;
    match value {
        Value::Str(text) => format_str(text, &parsed),
        Value::Path(path) => format_str(&path.to_string_lossy(), &parsed),
        Value::Int(int) => format_int(*int, &parsed, "int"),
        Value::Bool(flag) => format_int(i64::from(*flag), &parsed, "bool"),
        Value::Float(float) => format_float(*float, &parsed, "float"),
    }
}

fn not_allowed(message: impl Into<String>) -> FormatError {
    FormatError::NotAllowed {
        message: message.into(),
    }
}

fn format_str(text: &str, spec: &FormatSpec) -> Result<String, FormatError> {
    match spec.kind {
        None | Some('s') => {}
        Some(code) => {
            return Err(FormatError::UnknownCode {
                code,
                type_name: "str",
            })
        }
    }
    if spec.sign != Sign::Minus {
        return Err(not_allowed("sign not allowed in string format specifier"));
    }
    if spec.alternate {
        return Err(not_allowed(
            "alternate form (#) not allowed in string format specifier",
        ));
    }
    if spec.align == Some(Align::AfterSign) {
        return Err(not_allowed(
            "'=' alignment not allowed in string format specifier",
        ));
    }
    if let Some(sep) = spec.grouping {
        return Err(not_allowed(format!("cannot specify '{sep}' with 's'")));
    }

    let body: String = match spec.precision {
        Some(max) => text.chars().take(max).collect(),
        None => text.to_string(),
    };
    Ok(pad("", &body, spec, false))
}

fn format_int(value: i64, spec: &FormatSpec, type_name: &'static str) -> Result<String, FormatError> {
    let (radix, prefix) = match spec.kind {
        None | Some('d' | 'n') => (10, ""),
        Some('b') => (2, "0b"),
        Some('o') => (8, "0o"),
        Some('x') => (16, "0x"),
        Some('X') => (16, "0X"),
        Some('c') => return format_char(value, spec),
        #[allow(clippy::cast_precision_loss)]
        Some('e' | 'E' | 'f' | 'F' | 'g' | 'G' | '%') => {
            return format_float(value as f64, spec, type_name)
        }
        Some(code) => return Err(FormatError::UnknownCode { code, type_name }),
    };
    if spec.precision.is_some() {
        return Err(not_allowed(
            "precision not allowed in integer format specifier",
        ));
    }
    let group_size = match (spec.grouping, radix) {
        (None, _) => 0,
        (Some(sep), _) if spec.kind == Some('n') => {
            return Err(not_allowed(format!("cannot specify '{sep}' with 'n'")));
        }
        (Some(_), 10) => 3,
        (Some('_'), _) => 4,
        (Some(sep), _) => {
            let code = spec.kind.unwrap_or('d');
            return Err(not_allowed(format!("cannot specify '{sep}' with '{code}'")));
        }
    };

    let magnitude = value.unsigned_abs();
    let digits = match radix {
        2 => format!("{magnitude:b}"),
        8 => format!("{magnitude:o}"),
        16 if spec.kind == Some('X') => format!("{magnitude:X}"),
        16 => format!("{magnitude:x}"),
        _ => magnitude.to_string(),
    };

    let mut lead = sign_text(value < 0, spec.sign).to_string();
    if spec.alternate {
        lead.push_str(prefix);
    }
    Ok(pad_number(&lead, &digits, "", spec, group_size))
}

fn format_char(value: i64, spec: &FormatSpec) -> Result<String, FormatError> {
    if spec.sign != Sign::Minus {
        return Err(not_allowed(
            "sign not allowed with integer format specifier 'c'",
        ));
    }
    if spec.alternate {
        return Err(not_allowed(
            "alternate form (#) not allowed with integer format specifier 'c'",
        ));
    }
    let c = u32::try_from(value)
        .ok()
        .and_then(char::from_u32)
        .ok_or_else(|| not_allowed("%c arg not in range(0x110000)"))?;
    Ok(pad("", &c.to_string(), spec, true))
}

fn format_float(value: f64, spec: &FormatSpec, type_name: &'static str) -> Result<String, FormatError> {
    let kind = match spec.kind {
        None => None,
        Some(code @ ('e' | 'E' | 'f' | 'F' | 'g' | 'G' | 'n' | '%')) => Some(code),
        Some(code) => return Err(FormatError::UnknownCode { code, type_name }),
    };
    if let Some(sep) = spec.grouping {
        if kind == Some('n') {
            return Err(not_allowed(format!("cannot specify '{sep}' with 'n'")));
        }
    }

    let negative = value.is_sign_negative() && !value.is_nan();
    let magnitude = value.abs();
    let upper = matches!(kind, Some('E' | 'F' | 'G'));
    let suffix = if kind == Some('%') { "%" } else { "" };

    let body = if magnitude.is_nan() {
        "nan".to_string()
    } else if magnitude.is_infinite() {
        "inf".to_string()
    } else {
        match kind {
            Some('f' | 'F') => fixed(magnitude, spec.precision.unwrap_or(6), spec.alternate),
            Some('%') => fixed(magnitude * 100.0, spec.precision.unwrap_or(6), spec.alternate),
            Some('e' | 'E') => scientific(magnitude, spec.precision.unwrap_or(6), spec.alternate),
            Some(_) => general(magnitude, spec.precision.unwrap_or(6), spec.alternate, false),
            None => match spec.precision {
                Some(precision) => general(magnitude, precision, spec.alternate, true),
                None => float_repr(magnitude),
            },
        }
    };
    let body = if upper { body.to_uppercase() } else { body };

    // Only the integer part is grouped and zero padded.
    let split = body.find(['.', 'e', 'E', '%']).unwrap_or(body.len());
    let (int_part, rest) = body.split_at(split);
    let group_size = if spec.grouping.is_some() && int_part.bytes().all(|b| b.is_ascii_digit()) {
        3
    } else {
        0
    };
    let tail = format!("{rest}{suffix}");
    Ok(pad_number(
        sign_text(negative, spec.sign),
        int_part,
        &tail,
        spec,
        group_size,
    ))
}

fn sign_text(negative: bool, sign: Sign) -> &'static str {
    match (negative, sign) {
        (true, _) => "-",
        (false, Sign::Plus) => "+",
        (false, Sign::Space) => " ",
        (false, Sign::Minus) => "",
    }
}

fn fixed(value: f64, precision: usize, alternate: bool) -> String {
    let mut text = format!("{value:.precision$}");
    if alternate && precision == 0 {
        text.push('.');
    }
    text
}

/// Split Rust's `{:e}` output into mantissa and exponent.
fn split_exponent(text: &str) -> (&str, i32) {
    match text.split_once('e') {
        Some((mantissa, exp)) => (mantissa, exp.parse().unwrap_or(0)),
        None => (text, 0),
    }
}

fn exponent_suffix(exp: i32) -> String {
    let sign = if exp < 0 { '-' } else { '+' };
    format!("e{sign}{:02}", exp.unsigned_abs())
}

fn scientific(value: f64, precision: usize, alternate: bool) -> String {
    let text = format!("{value:.precision$e}");
    let (mantissa, exp) = split_exponent(&text);
    let mut mantissa = mantissa.to_string();
    if alternate && precision == 0 {
        mantissa.push('.');
    }
    format!("{mantissa}{}", exponent_suffix(exp))
}

/// General format: fixed or scientific depending on the exponent.
///
/// `keep_point` is the no-type variant, which always shows at least one
/// digit after the point in fixed notation.
fn general(value: f64, precision: usize, alternate: bool, keep_point: bool) -> String {
    let precision = precision.max(1);
    let exp = if value == 0.0 {
        0
    } else {
        let digits = precision - 1;
        split_exponent(&format!("{value:.digits$e}")).1
    };
    let precision_i32 = i32::try_from(precision).unwrap_or(i32::MAX);

    if (-4..precision_i32).contains(&exp) {
        let decimals = usize::try_from(precision_i32 - 1 - exp).unwrap_or(0);
        let mut text = format!("{value:.decimals$}");
        if !alternate {
            text = strip_zeros(&text);
        }
        if keep_point && !text.contains('.') {
            text.push_str(".0");
        }
        text
    } else {
        let digits = precision - 1;
        let text = format!("{value:.digits$e}");
        let (mantissa, exp) = split_exponent(&text);
        let mantissa = if alternate {
            mantissa.to_string()
        } else {
            strip_zeros(mantissa)
        };
        format!("{mantissa}{}", exponent_suffix(exp))
    }
}

fn strip_zeros(text: &str) -> String {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text.to_string()
    }
}

/// Shortest round-trip representation of a float, switching to exponent
/// notation for very large or very small magnitudes.
pub(crate) fn float_repr(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-inf" } else { "inf" }.to_string();
    }
    let shortest = format!("{value:e}");
    let (mantissa, exp) = split_exponent(&shortest);
    if value == 0.0 || (-4..16).contains(&exp) {
        let text = value.to_string();
        if text.contains('.') {
            text
        } else {
            format!("{text}.0")
        }
    } else {
        format!("{mantissa}{}", exponent_suffix(exp))
    }
}

fn group_digits(digits: &str, size: usize, sep: char) -> String {
    if size == 0 {
        return digits.to_string();
    }
    let chars: Vec<char> = digits.chars().collect();
    let mut out = String::with_capacity(chars.len() + chars.len() / size);
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % size == 0 {
            out.push(sep);
        }
        out.push(*c);
    }
    out
}

/// Pad a number made of a sign/prefix `lead`, integer `digits` and a `tail`
/// holding any fraction, exponent or percent sign.
fn pad_number(lead: &str, digits: &str, tail: &str, spec: &FormatSpec, group_size: usize) -> String {
    let sep = spec.grouping.unwrap_or(',');
    let align = spec.effective_align(true);
    let fill = spec.effective_fill();
    let width = spec.width.unwrap_or(0);

    let mut digits = digits.to_string();
    let mut grouped = group_digits(&digits, group_size, sep);

    // Zero padding in front of grouped digits keeps the separators going.
    if align == Align::AfterSign && fill == '0' && group_size > 0 {
        let used = |grouped: &str| lead.chars().count() + grouped.chars().count() + tail.chars().count();
        while used(&grouped) < width {
            digits.insert(0, '0');
            grouped = group_digits(&digits, group_size, sep);
        }
    }

    let body = format!("{grouped}{tail}");
    pad(lead, &body, spec, true)
}

fn pad(lead: &str, body: &str, spec: &FormatSpec, numeric: bool) -> String {
    let width = spec.width.unwrap_or(0);
    let len = lead.chars().count() + body.chars().count();
    if len >= width {
        return format!("{lead}{body}");
    }
    let fill = spec.effective_fill();
    let gap = width - len;
    let repeat = |n: usize| std::iter::repeat(fill).take(n).collect::<String>();
    match spec.effective_align(numeric) {
        Align::Left => format!("{lead}{body}{}", repeat(gap)),
        Align::Right => format!("{}{lead}{body}", repeat(gap)),
        Align::AfterSign => format!("{lead}{}{body}", repeat(gap)),
        Align::Center => {
            let left = gap / 2;
            format!("{}{lead}{body}{}", repeat(left), repeat(gap - left))
        }
    }
}
