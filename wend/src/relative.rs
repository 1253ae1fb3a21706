//! A base expression paired with a path relative to it.

use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::bindings::Bindings;
use crate::error::Result;
use crate::expr::PathExpr;

/// A path expressed relative to a replaceable base.
///
/// The combined expression is rebuilt from `base` and `relative` each time
/// it is needed, so rebasing never touches the relative part.
///
/// # Examples
///
/// ```
/// use wend::{Bindings, Param, PathExpr, RelativePath};
/// use std::path::PathBuf;
///
/// let settings = RelativePath::new(Param::new("root"), PathExpr::literal("config") / "settings.yaml");
/// assert_eq!(settings.required_params().len(), 1);
///
/// let local = settings.rebase("/tmp/test");
/// assert!(local.required_params().is_empty());
/// assert_eq!(
///     local.resolve(&Bindings::new()).unwrap(),
///     PathBuf::from("/tmp/test/config/settings.yaml")
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelativePath {
    base: PathExpr,
    relative: PathExpr,
}

impl RelativePath {
    /// Pair `relative` with `base`.
    #[must_use]
    pub fn new(base: impl Into<PathExpr>, relative: impl Into<PathExpr>) -> Self {
        Self {
            base: base.into(),
            relative: relative.into(),
        }
    }

    /// The base expression.
    #[must_use]
    pub fn base(&self) -> &PathExpr {
        &self.base
    }

    /// The part below the base.
    #[must_use]
    pub fn relative(&self) -> &PathExpr {
        &self.relative
    }

    /// `base / relative`, with the usual join folding.
    #[must_use]
    pub fn expr(&self) -> PathExpr {
        self.base.join(&self.relative)
    }

    /// The same relative part under a different base.
    #[must_use]
    pub fn rebase(&self, base: impl Into<PathExpr>) -> Self {
        Self {
            base: base.into(),
            relative: self.relative.clone(),
        }
    }

    /// Names of every param needed to resolve the combined expression.
    #[must_use]
    pub fn required_params(&self) -> BTreeSet<String> {
        self.expr().required_params()
    }

    /// Resolve the combined expression.
    ///
    /// # Errors
    ///
    /// See [`PathExpr::resolve`].
    pub fn resolve(&self, bindings: &Bindings) -> Result<PathBuf> {
        self.expr().resolve(bindings)
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expr())
    }
}
