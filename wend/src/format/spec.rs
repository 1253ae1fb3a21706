//! Parsing of format specifiers.
//!
//! The grammar is the usual format-spec mini-language:
//!
//! ```text
//! [[fill]align][sign][#][0][width][grouping][.precision][type]
//! ```

use super::FormatError;

/// Largest width or precision a specifier may request.
pub const MAX_FIELD: usize = 1 << 16;

/// Where padding goes when a value is narrower than the field width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    /// `<`: pad on the right.
    Left,
    /// `>`: pad on the left.
    Right,
    /// `=`: pad between the sign/prefix and the digits.
    AfterSign,
    /// `^`: pad both sides, extra fill on the right.
    Center,
}

impl Align {
    fn from_char(c: char) -> Option<Self> {
        match c {
            '<' => Some(Self::Left),
            '>' => Some(Self::Right),
            '=' => Some(Self::AfterSign),
            '^' => Some(Self::Center),
            _ => None,
        }
    }
}

/// How the sign of a number is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sign {
    /// `-`: only negative numbers carry a sign.
    #[default]
    Minus,
    /// `+`: every number carries a sign.
    Plus,
    /// ` `: positive numbers get a leading space.
    Space,
}

/// A parsed format specifier.
///
/// Fill and alignment are left unresolved here because their defaults
/// depend on the type of the value being formatted.
///
/// # Examples
///
/// ```
/// use wend::format::FormatSpec;
///
/// let spec = FormatSpec::parse("04d").unwrap();
/// assert!(spec.zero);
/// assert_eq!(spec.width, Some(4));
/// assert_eq!(spec.kind, Some('d'));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormatSpec {
    /// Explicit fill character, if one was given with an alignment.
    pub fill: Option<char>,
    /// Explicit alignment.
    pub align: Option<Align>,
    /// Sign handling.
    pub sign: Sign,
    /// The `#` alternate-form flag.
    pub alternate: bool,
    /// The `0` zero-padding flag.
    pub zero: bool,
    /// Minimum field width in characters.
    pub width: Option<usize>,
    /// Thousands separator, `,` or `_`.
    pub grouping: Option<char>,
    /// Precision (digits after the point, or maximum string length).
    pub precision: Option<usize>,
    /// Presentation type such as `d`, `x`, `f` or `s`.
    pub kind: Option<char>,
}

impl FormatSpec {
    /// Parse a specifier.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::Invalid`] for text that does not follow the
    /// grammar, such as a dangling `.` or trailing characters after the type,
    /// and for a width or precision above [`MAX_FIELD`].
    pub fn parse(spec: &str) -> Result<Self, FormatError> {
        let chars: Vec<char> = spec.chars().collect();
        let mut parsed = Self::default();
        let mut pos = 0;

        if chars.len() >= 2 {
            if let Some(align) = Align::from_char(chars[1]) {
                parsed.fill = Some(chars[0]);
                parsed.align = Some(align);
                pos = 2;
            }
        }
        if parsed.align.is_none() {
            if let Some(align) = chars.first().copied().and_then(Align::from_char) {
                parsed.align = Some(align);
                pos = 1;
            }
        }

        match chars.get(pos) {
            Some('+') => {
                parsed.sign = Sign::Plus;
                pos += 1;
            }
            Some('-') => pos += 1,
            Some(' ') => {
                parsed.sign = Sign::Space;
                pos += 1;
            }
            _ => {}
        }

        if chars.get(pos) == Some(&'#') {
            parsed.alternate = true;
            pos += 1;
        }

        if chars.get(pos) == Some(&'0') {
            parsed.zero = true;
            pos += 1;
        }

        let (width, next) = read_number(spec, &chars, pos)?;
        parsed.width = width;
        pos = next;

        if let Some(&c @ (',' | '_')) = chars.get(pos) {
            parsed.grouping = Some(c);
            pos += 1;
        }

        if chars.get(pos) == Some(&'.') {
            let (precision, next) = read_number(spec, &chars, pos + 1)?;
            if precision.is_none() {
                return Err(invalid(spec, "format specifier missing precision"));
            }
            parsed.precision = precision;
            pos = next;
        }

        match chars.len() - pos {
            0 => {}
            1 => parsed.kind = Some(chars[pos]),
            _ => return Err(invalid(spec, "invalid format specifier")),
        }

        Ok(parsed)
    }

    /// Fill character once the `0` flag is taken into account.
    #[must_use]
    pub fn effective_fill(&self) -> char {
        match self.fill {
            Some(fill) => fill,
            None if self.zero => '0',
            None => ' ',
        }
    }

    /// Alignment once the `0` flag and the type's default are taken into
    /// account. `numeric` selects right alignment as the default.
    #[must_use]
    pub fn effective_align(&self, numeric: bool) -> Align {
        match self.align {
            Some(align) => align,
            None if numeric && self.zero && self.fill.is_none() => Align::AfterSign,
            None if numeric => Align::Right,
            None => Align::Left,
        }
    }
}

fn read_number(
    spec: &str,
    chars: &[char],
    start: usize,
) -> Result<(Option<usize>, usize), FormatError> {
    let mut end = start;
    while end < chars.len() && chars[end].is_ascii_digit() {
        end += 1;
    }
    if end == start {
        return Ok((None, start));
    }
    let digits: String = chars[start..end].iter().collect();
    match digits.parse::<usize>() {
        Ok(number) if number <= MAX_FIELD => Ok((Some(number), end)),
        _ => Err(invalid(spec, "too many decimal digits in format string")),
    }
}

fn invalid(spec: &str, reason: &str) -> FormatError {
    FormatError::Invalid {
        spec: spec.to_string(),
        reason: reason.to_string(),
    }
}
