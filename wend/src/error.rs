//! Error types for the wend library.
//!
//! Construction of path expressions never fails. Errors only arise when an
//! expression is resolved (including applying a suffix that contains a
//! path separator), when a template is parsed from source text, or
//! when bindings are loaded from files and the environment.

use std::collections::BTreeSet;
use std::path::PathBuf;

use thiserror::Error;

use crate::format::FormatError;

/// Result type alias for operations that may fail with a wend error.
///
/// # Examples
///
/// ```
/// use wend::{Error, Result};
///
/// fn example_operation() -> Result<u16> {
///     Ok(8080)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the wend library.
#[derive(Debug, Error)]
pub enum Error {
    /// Resolution was attempted without binding every required parameter.
    ///
    /// The set holds every missing name, not only the first one found.
    #[error("missing bindings: {}", format_names(.missing))]
    MissingBindings {
        /// Names of the parameters with no binding.
        missing: BTreeSet<String>,
    },

    /// A template interpolation could not format its bound value.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// A suffix could not be applied because it contains a path separator.
    #[error("invalid suffix '{suffix}'")]
    InvalidSuffix {
        /// The rejected suffix.
        suffix: String,
    },

    /// Template source text could not be parsed.
    #[error("invalid template '{template}' at offset {position}: {reason}")]
    TemplateSyntax {
        /// The template source text.
        template: String,
        /// Byte offset of the offending character.
        position: usize,
        /// What was wrong.
        reason: String,
    },

    /// A binding name or value failed validation.
    #[error("invalid binding '{name}': {message}")]
    InvalidBinding {
        /// The binding name (or the raw text it was parsed from).
        name: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A bindings file has an extension we do not know how to parse.
    #[error("unsupported bindings file {}: expected .yaml, .yml or .json", path.display())]
    UnsupportedBindingsFile {
        /// The offending file.
        path: PathBuf,
    },

    /// A YAML bindings file could not be parsed.
    #[error("bindings file error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A JSON bindings file could not be parsed.
    #[error("bindings file error: {0}")]
    Json(#[from] serde_json::Error),

    /// An I/O error occurred while reading bindings.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn format_names(names: &BTreeSet<String>) -> String {
    names
        .iter()
        .map(|name| format!("'{name}'"))
        .collect::<Vec<_>>()
        .join(", ")
}

impl Error {
    /// Check if this error reports missing bindings.
    ///
    /// # Examples
    ///
    /// ```
    /// use wend::Error;
    ///
    /// let err = Error::MissingBindings { missing: ["root".to_string()].into() };
    /// assert!(err.is_missing_bindings());
    /// ```
    #[must_use]
    pub fn is_missing_bindings(&self) -> bool {
        matches!(self, Self::MissingBindings { .. })
    }

    /// The names reported missing, if this is a missing-bindings error.
    #[must_use]
    pub fn missing_names(&self) -> Option<&BTreeSet<String>> {
        match self {
            Self::MissingBindings { missing } => Some(missing),
            _ => None,
        }
    }

    /// Check if this error came from a bindings file or variable.
    #[must_use]
    pub fn is_bindings_source(&self) -> bool {
        matches!(
            self,
            Self::InvalidBinding { .. }
                | Self::UnsupportedBindingsFile { .. }
                | Self::Yaml(_)
                | Self::Json(_)
        )
    }
}
