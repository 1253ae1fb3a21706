//! Validation of binding names.

use crate::error::{Error, Result};

/// Checks binding names before they enter a [`Bindings`](super::Bindings)
/// map from an external source.
pub struct BindingsValidator;

impl BindingsValidator {
    /// Validate a binding name.
    ///
    /// Names must be non-empty and contain no whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBinding`] if the name is rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use wend::bindings::BindingsValidator;
    ///
    /// assert!(BindingsValidator::validate_name("dataset").is_ok());
    /// assert!(BindingsValidator::validate_name("").is_err());
    /// assert!(BindingsValidator::validate_name("my name").is_err());
    /// ```
    pub fn validate_name(name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(Error::InvalidBinding {
                name: name.to_string(),
                message: "name cannot be empty".to_string(),
            });
        }
        if name.chars().any(char::is_whitespace) {
            return Err(Error::InvalidBinding {
                name: name.to_string(),
                message: "name cannot contain whitespace".to_string(),
            });
        }
        Ok(())
    }

    /// Validate every name in a set of bindings.
    ///
    /// # Errors
    ///
    /// Returns the first [`Error::InvalidBinding`] encountered.
    pub fn validate(bindings: &super::Bindings) -> Result<()> {
        bindings
            .names()
            .try_for_each(Self::validate_name)
    }
}
