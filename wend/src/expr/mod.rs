//! Deferred path expressions.
//!
//! A [`PathExpr`] is an immutable tree describing how to build a path once
//! its params are known. Trees are only ever built through the constructors
//! on [`PathExpr`] (and the `/` operator, which calls [`PathExpr::join`]).
//! Each constructor simplifies locally as it builds, so every tree is held in
//! reduced form:
//!
//! - joining two literals folds into one literal;
//! - the parent of `x / segment` is `x` when `segment` is a single atom, and
//!   the parent of a literal is folded;
//! - a suffix applied on top of a suffix replaces it, and a suffix on a
//!   literal is folded.
//!
//! # Examples
//!
//! ```
//! use wend::{Bindings, ExprKind, Param, PathExpr};
//! use std::path::PathBuf;
//!
//! let folded = PathExpr::literal("/home") / "user" / "data";
//! assert!(matches!(folded.kind(), ExprKind::Literal { .. }));
//!
//! let root = Param::new("root");
//! let expr = &root / "a" / "b";
//! let parent = expr.parent();
//! assert!(matches!(parent.kind(), ExprKind::Join { .. }));
//!
//! let bindings = Bindings::from([("root", "/x")]);
//! assert_eq!(parent.resolve(&bindings).unwrap(), PathBuf::from("/x/a"));
//! ```

mod operators;
pub mod template;

use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Serialize, Serializer};

use crate::bindings::Bindings;
use crate::error::Result;
use crate::param::Param;
use crate::path::ops;
use crate::resolver::Resolver;

pub use template::{Fragment, Interpolated, Interpolation, Template, TemplateBuilder};

/// The variants of a path expression node.
///
/// Obtained through [`PathExpr::kind`] for inspection. There is no way to
/// turn an `ExprKind` back into a [`PathExpr`] directly; nodes are created
/// by the smart constructors only.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExprKind {
    /// A concrete path.
    Literal {
        /// The path value.
        value: PathBuf,
    },
    /// A reference to a param, resolved from bindings.
    ParamRef {
        /// The referenced param.
        param: Param,
    },
    /// A single segment assembled from text and formatted interpolations.
    Template {
        /// The template.
        template: Template,
    },
    /// `left / right`.
    Join {
        /// The leading part.
        left: PathExpr,
        /// The trailing part.
        right: PathExpr,
    },
    /// The parent of `child`.
    Parent {
        /// The expression whose parent is taken.
        child: PathExpr,
    },
    /// `base` with its final component replaced.
    WithName {
        /// The expression being renamed.
        base: PathExpr,
        /// The new final component.
        name: String,
    },
    /// `base` with its suffix replaced.
    WithSuffix {
        /// The expression whose suffix changes.
        base: PathExpr,
        /// The new suffix, such as `.json`.
        suffix: String,
    },
}

impl ExprKind {
    /// Whether this is a single path segment (literal, param or template).
    #[must_use]
    pub fn is_atomic(&self) -> bool {
        matches!(
            self,
            Self::Literal { .. } | Self::ParamRef { .. } | Self::Template { .. }
        )
    }
}

/// Identity of a node within one resolution call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

/// An immutable, cheaply cloneable handle to a path expression node.
///
/// Cloning a handle shares the node. Reusing the same handle in several
/// places of a larger expression is allowed, and resolution evaluates each
/// shared node only once per call.
#[derive(Clone)]
pub struct PathExpr(Arc<ExprKind>);

impl PathExpr {
    fn from_kind(kind: ExprKind) -> Self {
        Self(Arc::new(kind))
    }

    /// A literal path.
    #[must_use]
    pub fn literal(value: impl Into<PathBuf>) -> Self {
        Self::from_kind(ExprKind::Literal {
            value: value.into(),
        })
    }

    /// A reference to a param.
    #[must_use]
    pub fn param(param: impl Into<Param>) -> Self {
        Self::from_kind(ExprKind::ParamRef {
            param: param.into(),
        })
    }

    /// A template segment.
    #[must_use]
    pub fn template(template: Template) -> Self {
        Self::from_kind(ExprKind::Template { template })
    }

    /// Join `right` onto this expression. Two literals fold into one.
    #[must_use]
    pub fn join(&self, right: impl Into<PathExpr>) -> Self {
        let right = right.into();
        if let (ExprKind::Literal { value: left }, ExprKind::Literal { value: tail }) =
            (self.kind(), right.kind())
        {
            return Self::literal(ops::join(left, tail));
        }
        Self::from_kind(ExprKind::Join {
            left: self.clone(),
            right,
        })
    }

    /// The parent of this expression.
    ///
    /// For `x / segment` where `segment` is atomic, this is `x` itself. The
    /// parent of a literal is folded. Anything else is wrapped.
    #[must_use]
    pub fn parent(&self) -> Self {
        match self.kind() {
            ExprKind::Join { left, right } if right.kind().is_atomic() => left.clone(),
            ExprKind::Literal { value } => Self::literal(ops::parent(value)),
            _ => Self::from_kind(ExprKind::Parent {
                child: self.clone(),
            }),
        }
    }

    /// This expression with its final component replaced by `name`.
    #[must_use]
    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self::from_kind(ExprKind::WithName {
            base: self.clone(),
            name: name.into(),
        })
    }

    /// This expression with its suffix replaced by `suffix`.
    ///
    /// Only the last suffix of a chain is kept, and literals are folded.
    /// A suffix containing a path separator is never folded or collapsed
    /// away; resolving the node reports [`Error::InvalidSuffix`].
    ///
    /// [`Error::InvalidSuffix`]: crate::Error::InvalidSuffix
    #[must_use]
    pub fn with_suffix(&self, suffix: impl Into<String>) -> Self {
        let suffix = suffix.into();
        match self.kind() {
            ExprKind::WithSuffix {
                base,
                suffix: previous,
            } if ops::check_suffix(previous).is_ok() => Self::from_kind(ExprKind::WithSuffix {
                base: base.clone(),
                suffix,
            }),
            ExprKind::Literal { value } => match ops::with_suffix(value, &suffix) {
                Ok(changed) => Self::literal(changed),
                Err(_) => Self::from_kind(ExprKind::WithSuffix {
                    base: self.clone(),
                    suffix,
                }),
            },
            _ => Self::from_kind(ExprKind::WithSuffix {
                base: self.clone(),
                suffix,
            }),
        }
    }

    /// The variant of this node.
    #[must_use]
    pub fn kind(&self) -> &ExprKind {
        &self.0
    }

    /// The concrete path, if this node is a literal.
    #[must_use]
    pub fn as_literal(&self) -> Option<&Path> {
        match self.kind() {
            ExprKind::Literal { value } => Some(value),
            _ => None,
        }
    }

    /// Whether `self` and `other` are the very same node, not merely equal.
    #[must_use]
    pub fn same_node(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    pub(crate) fn node_id(&self) -> NodeId {
        NodeId(Arc::as_ptr(&self.0) as usize)
    }

    /// Names of every param needed to resolve this expression.
    ///
    /// # Examples
    ///
    /// ```
    /// use wend::Param;
    ///
    /// let expr = Param::new("root") / "data" / Param::new("dataset");
    /// let names: Vec<_> = expr.required_params().into_iter().collect();
    /// assert_eq!(names, ["dataset", "root"]);
    /// ```
    #[must_use]
    pub fn required_params(&self) -> BTreeSet<String> {
        let mut names = BTreeSet::new();
        self.collect_params(&mut names);
        names
    }

    fn collect_params(&self, names: &mut BTreeSet<String>) {
        match self.kind() {
            ExprKind::Literal { .. } => {}
            ExprKind::ParamRef { param } => {
                names.insert(param.name().to_string());
            }
            ExprKind::Template { template } => {
                names.extend(template.params().map(|param| param.name().to_string()));
            }
            ExprKind::Join { left, right } => {
                left.collect_params(names);
                right.collect_params(names);
            }
            ExprKind::Parent { child } => child.collect_params(names),
            ExprKind::WithName { base, .. } | ExprKind::WithSuffix { base, .. } => {
                base.collect_params(names);
            }
        }
    }

    /// Resolve to a concrete path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingBindings`](crate::Error::MissingBindings)
    /// naming every required param absent from `bindings`, or a formatting
    /// error from a template interpolation.
    ///
    /// # Examples
    ///
    /// ```
    /// use wend::{Bindings, Param};
    /// use std::path::PathBuf;
    ///
    /// let expr = Param::new("root") / "file.txt";
    /// let path = expr.resolve(&Bindings::from([("root", "/tmp")])).unwrap();
    /// assert_eq!(path, PathBuf::from("/tmp/file.txt"));
    ///
    /// assert!(expr.resolve(&Bindings::new()).is_err());
    /// ```
    pub fn resolve(&self, bindings: &Bindings) -> Result<PathBuf> {
        Resolver::new(bindings).run(self)
    }
}

impl PartialEq for PathExpr {
    fn eq(&self, other: &Self) -> bool {
        self.same_node(other) || self.kind() == other.kind()
    }
}

impl fmt::Debug for PathExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.kind(), f)
    }
}

impl fmt::Display for PathExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            ExprKind::Literal { value } => write!(f, "{}", value.display()),
            ExprKind::ParamRef { param } => write!(f, "{param}"),
            ExprKind::Template { template } => write!(f, "{template}"),
            ExprKind::Join { left, right } => {
                let head = left.to_string();
                if head.ends_with('/') {
                    write!(f, "{head}{right}")
                } else {
                    write!(f, "{head}/{right}")
                }
            }
            ExprKind::Parent { child } => write!(f, "parent({child})"),
            ExprKind::WithName { base, name } => write!(f, "with_name({base}, {name:?})"),
            ExprKind::WithSuffix { base, suffix } => write!(f, "with_suffix({base}, {suffix:?})"),
        }
    }
}

impl Serialize for PathExpr {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.kind().serialize(serializer)
    }
}

impl From<&PathExpr> for PathExpr {
    fn from(expr: &PathExpr) -> Self {
        expr.clone()
    }
}

impl From<&str> for PathExpr {
    fn from(value: &str) -> Self {
        Self::literal(value)
    }
}

impl From<String> for PathExpr {
    fn from(value: String) -> Self {
        Self::literal(value)
    }
}

impl From<&Path> for PathExpr {
    fn from(value: &Path) -> Self {
        Self::literal(value)
    }
}

impl From<PathBuf> for PathExpr {
    fn from(value: PathBuf) -> Self {
        Self::literal(value)
    }
}

impl From<Param> for PathExpr {
    fn from(param: Param) -> Self {
        Self::param(param)
    }
}

impl From<&Param> for PathExpr {
    fn from(param: &Param) -> Self {
        Self::param(param.clone())
    }
}

impl From<Template> for PathExpr {
    fn from(template: Template) -> Self {
        Self::template(template)
    }
}

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn param(name: &str) -> PathExpr {
        PathExpr::param(name)
    }

    #[test]
    fn test_literal_join_folds() {
        let expr = PathExpr::literal("/home").join("user").join("data");
        assert_eq!(expr.as_literal(), Some(Path::new("/home/user/data")));
    }

    #[test]
    fn test_literal_join_absolute_right_replaces() {
        let expr = PathExpr::literal("/home").join("/etc");
        assert_eq!(expr.as_literal(), Some(Path::new("/etc")));
    }

    #[test]
    fn test_join_with_param_is_not_folded() {
        let expr = param("root").join("data");
        match expr.kind() {
            ExprKind::Join { left, right } => {
                assert!(matches!(left.kind(), ExprKind::ParamRef { .. }));
                assert_eq!(right.as_literal(), Some(Path::new("data")));
            }
            other => panic!("expected join, got {other:?}"),
        }
    }

    #[test]
    fn test_parent_of_join_with_atomic_right_drops_segment() {
        let base = param("root").join("a");
        let expr = base.join("b");
        let parent = expr.parent();
        assert!(parent.same_node(&base));
    }

    #[test]
    fn test_parent_of_join_with_param_or_template_right() {
        let base = PathExpr::literal("/data");
        assert!(base.join(param("x")).parent().same_node(&base));

        let template = Template::builder().text("chunk_").param("idx").build();
        assert!(base.join(template).parent().same_node(&base));
    }

    #[test]
    fn test_parent_of_join_with_composite_right_is_wrapped() {
        let right = param("a").join("b");
        let expr = PathExpr::literal("/data").join(right);
        let parent = expr.parent();
        match parent.kind() {
            ExprKind::Parent { child } => assert!(child.same_node(&expr)),
            other => panic!("expected parent, got {other:?}"),
        }
    }

    #[test]
    fn test_parent_of_literal_folds() {
        assert_eq!(
            PathExpr::literal("/a/b").parent().as_literal(),
            Some(Path::new("/a"))
        );
        assert_eq!(
            PathExpr::literal("/").parent().as_literal(),
            Some(Path::new("/"))
        );
    }

    #[test]
    fn test_parent_of_param_is_wrapped() {
        let expr = param("root").parent();
        assert!(matches!(expr.kind(), ExprKind::Parent { .. }));
    }

    #[test]
    fn test_suffix_chain_collapses() {
        let base = param("root").join("file.txt");
        let expr = base.with_suffix(".tmp").with_suffix(".json");
        match expr.kind() {
            ExprKind::WithSuffix { base: inner, suffix } => {
                assert!(inner.same_node(&base));
                assert_eq!(suffix, ".json");
            }
            other => panic!("expected with_suffix, got {other:?}"),
        }
    }

    #[test]
    fn test_suffix_on_literal_folds() {
        let expr = PathExpr::literal("/x/file.txt").with_suffix(".json");
        assert_eq!(expr.as_literal(), Some(Path::new("/x/file.json")));
    }

    #[test]
    fn test_invalid_suffix_is_not_folded() {
        let base = PathExpr::literal("/x/file.txt");
        let expr = base.with_suffix("a/b");
        match expr.kind() {
            ExprKind::WithSuffix { base: inner, suffix } => {
                assert!(inner.same_node(&base));
                assert_eq!(suffix, "a/b");
            }
            other => panic!("expected with_suffix, got {other:?}"),
        }
        let err = expr.resolve(&Bindings::new()).unwrap_err();
        assert!(matches!(err, Error::InvalidSuffix { ref suffix } if suffix == "a/b"));
    }

    #[test]
    fn test_invalid_suffix_is_not_collapsed() {
        let expr = param("root").with_suffix("a/b").with_suffix(".json");
        match expr.kind() {
            ExprKind::WithSuffix { base, suffix } => {
                assert_eq!(suffix, ".json");
                assert!(matches!(base.kind(), ExprKind::WithSuffix { .. }));
            }
            other => panic!("expected with_suffix, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_suffix_on_param_is_a_resolve_error() {
        let expr = (param("root") / "file.txt").with_suffix("a/b");
        let err = expr.resolve(&Bindings::from([("root", "/x")])).unwrap_err();
        assert!(matches!(err, Error::InvalidSuffix { .. }));
        assert_eq!(err.to_string(), "invalid suffix 'a/b'");
    }

    #[test]
    fn test_with_name_is_never_folded() {
        let expr = PathExpr::literal("/tmp/data.txt").with_name("other.csv");
        assert!(matches!(expr.kind(), ExprKind::WithName { .. }));
    }

    #[test]
    fn test_required_params_fold() {
        let template = Template::builder()
            .param("idx")
            .text("-of-")
            .param_with("total", "04d")
            .value(3)
            .build();
        let expr = param("root")
            .join("data")
            .join(template)
            .parent()
            .with_name("x")
            .with_suffix(".y");
        let names: Vec<String> = expr.required_params().into_iter().collect();
        assert_eq!(names, ["idx", "root", "total"]);
        assert!(PathExpr::literal("/a").required_params().is_empty());
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(param("root").join("a"), param("root").join("a"));
        assert_ne!(param("root").join("a"), param("root").join("b"));
    }

    #[test]
    fn test_display() {
        let template = Template::builder().text("chunk_").param_with("idx", "04d").build();
        let expr = param("root").join("data").join(template);
        assert_eq!(expr.to_string(), "{root}/data/chunk_{idx:04d}");
        assert_eq!(
            PathExpr::literal("/").join(param("a")).to_string(),
            "/{a}"
        );
        assert_eq!(
            param("a").with_suffix(".json").to_string(),
            "with_suffix({a}, \".json\")"
        );
    }

    #[test]
    fn test_serialize_tree() {
        let expr = param("root").join("data");
        let json = serde_json::to_value(&expr).unwrap();
        assert_eq!(json["kind"], "join");
        assert_eq!(json["left"]["kind"], "param_ref");
        assert_eq!(json["left"]["param"], "root");
        assert_eq!(json["right"]["value"], "data");
    }

    #[test]
    fn test_expressions_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PathExpr>();
    }
}
