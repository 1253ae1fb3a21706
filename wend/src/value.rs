//! Concrete values supplied for params at resolution time.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// A value bound to a param.
///
/// Bindings are heterogeneous: the same map may hold a root directory, a
/// dataset name and a chunk index. Files and environment variables
/// deserialize into the scalar variants; [`Value::Path`] is only produced
/// programmatically.
///
/// # Examples
///
/// ```
/// use wend::Value;
/// use std::path::PathBuf;
///
/// assert_eq!(Value::from(7), Value::Int(7));
/// assert_eq!(Value::from("train").to_path(), PathBuf::from("train"));
/// assert_eq!(Value::infer("0042"), Value::Int(42));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// A boolean flag.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// A floating point number.
    Float(f64),
    /// Free text.
    Str(String),
    /// A filesystem path.
    #[serde(skip_deserializing)]
    Path(PathBuf),
}

impl Value {
    /// Infer a typed value from command-line or environment text.
    ///
    /// Integers become [`Value::Int`], decimal or exponent notation becomes
    /// [`Value::Float`], and everything else stays text.
    #[must_use]
    pub fn infer(text: &str) -> Self {
        if let Ok(int) = text.parse::<i64>() {
            return Self::Int(int);
        }
        let numeric = text
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'));
        if numeric && text.chars().any(|c| c.is_ascii_digit()) {
            if let Ok(float) = text.parse::<f64>() {
                return Self::Float(float);
            }
        }
        Self::Str(text.to_string())
    }

    /// Coerce into a path, as a `ParamRef` does during resolution.
    #[must_use]
    pub fn to_path(&self) -> PathBuf {
        match self {
            Self::Path(path) => path.clone(),
            Self::Str(text) => PathBuf::from(text),
            other => PathBuf::from(other.to_string()),
        }
    }

    /// Short type name used in format error messages.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Str(_) => "str",
            Self::Path(_) => "path",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(true) => f.write_str("True"),
            Self::Bool(false) => f.write_str("False"),
            Self::Int(int) => write!(f, "{int}"),
            Self::Float(float) => f.write_str(&crate::format::float_repr(*float)),
            Self::Str(text) => f.write_str(text),
            Self::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::Int(i64::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&Path> for Value {
    fn from(value: &Path) -> Self {
        Self::Path(value.to_path_buf())
    }
}

impl From<PathBuf> for Value {
    fn from(value: PathBuf) -> Self {
        Self::Path(value)
    }
}
