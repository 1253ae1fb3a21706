//! Bindings: the concrete values supplied for params at resolution time.
//!
//! A [`Bindings`] map can be built directly in code, or assembled from
//! several sources by [`BindingsBuilder`]. Sources are merged with the
//! following precedence (highest to lowest):
//!
//! 1. Programmatic bindings (via `BindingsBuilder::with_bindings`)
//! 2. Environment variables (`WEND_BIND_<NAME>`)
//! 3. Bindings files, later files overriding earlier ones
//!
//! # Examples
//!
//! Programmatic bindings:
//!
//! ```
//! use wend::{Bindings, Value};
//!
//! let bindings = Bindings::from([("root", "/mnt/storage")]).with("idx", 7);
//! assert_eq!(bindings.get("idx"), Some(&Value::Int(7)));
//! ```
//!
//! Merging sources:
//!
//! ```no_run
//! use wend::{Bindings, BindingsBuilder};
//!
//! let bindings = BindingsBuilder::new()
//!     .with_file("bindings.yaml")
//!     .with_bindings(Bindings::from([("split", "train")]))
//!     .build()
//!     .unwrap();
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod validator;

use std::collections::btree_map;
use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::value::Value;

pub use builder::BindingsBuilder;
pub use environment::EnvironmentBindings;
pub use loader::BindingsLoader;
pub use validator::BindingsValidator;

/// A mapping from param names to values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bindings {
    values: BTreeMap<String, Value>,
}

impl Bindings {
    /// An empty set of bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a binding, returning the updated bindings.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Bind `name` to `value`, returning the previous value if any.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(name.into(), value.into())
    }

    /// The value bound to `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Whether `name` is bound.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Bound names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Number of bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether there are no bindings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over `(name, value)` pairs in name order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
        self.values.iter()
    }

    /// Overlay `other` on top of these bindings. Names bound in both take
    /// the value from `other`.
    pub fn merge(&mut self, other: Bindings) {
        self.values.extend(other.values);
    }

    /// The names in `required` that have no binding.
    #[must_use]
    pub fn missing(&self, required: &BTreeSet<String>) -> BTreeSet<String> {
        required
            .iter()
            .filter(|name| !self.contains(name))
            .cloned()
            .collect()
    }

    /// Parse a `NAME=VALUE` assignment as given on the command line.
    ///
    /// The value type is inferred with [`Value::infer`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBinding`] if there is no `=` or the name is
    /// not a valid binding name.
    ///
    /// # Examples
    ///
    /// ```
    /// use wend::{Bindings, Value};
    ///
    /// let (name, value) = Bindings::parse_assignment("idx=7").unwrap();
    /// assert_eq!(name, "idx");
    /// assert_eq!(value, Value::Int(7));
    ///
    /// assert!(Bindings::parse_assignment("no-equals-sign").is_err());
    /// ```
    pub fn parse_assignment(text: &str) -> Result<(String, Value)> {
        let (name, value) = text.split_once('=').ok_or_else(|| Error::InvalidBinding {
            name: text.to_string(),
            message: "expected NAME=VALUE".to_string(),
        })?;
        BindingsValidator::validate_name(name)?;
        Ok((name.to_string(), Value::infer(value)))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Bindings {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

impl<K: Into<String>, V: Into<Value>, const N: usize> From<[(K, V); N]> for Bindings {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl IntoIterator for Bindings {
    type Item = (String, Value);
    type IntoIter = btree_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a Bindings {
    type Item = (&'a String, &'a Value);
    type IntoIter = btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
