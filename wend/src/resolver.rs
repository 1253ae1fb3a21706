//! Evaluation of path expressions against bindings.
//!
//! A [`Resolver`] lives for exactly one resolution call. It first checks
//! that every required param is bound, then evaluates the tree bottom-up.
//! Results are cached by node identity, so a sub-expression handle that
//! appears several times in a tree is evaluated once. Nothing is cached
//! across calls.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::bindings::Bindings;
use crate::error::{Error, Result};
use crate::expr::{ExprKind, NodeId, PathExpr};
use crate::path::ops;

pub(crate) struct Resolver<'b> {
    bindings: &'b Bindings,
    cache: HashMap<NodeId, PathBuf>,
    evaluations: usize,
    cache_hits: usize,
}

impl<'b> Resolver<'b> {
    pub(crate) fn new(bindings: &'b Bindings) -> Self {
        Self {
            bindings,
            cache: HashMap::new(),
            evaluations: 0,
            cache_hits: 0,
        }
    }

    /// Validate bindings and evaluate `expr`.
    pub(crate) fn run(mut self, expr: &PathExpr) -> Result<PathBuf> {
        self.check_bindings(expr)?;
        log::debug!("resolving {expr}");
        let resolved = self.evaluate(expr)?;
        log::trace!(
            "resolved {expr} to {} ({} evaluations, {} cache hits)",
            resolved.display(),
            self.evaluations,
            self.cache_hits
        );
        Ok(resolved)
    }

    fn check_bindings(&self, expr: &PathExpr) -> Result<()> {
        let missing = self.bindings.missing(&expr.required_params());
        if missing.is_empty() {
            Ok(())
        } else {
            Err(Error::MissingBindings { missing })
        }
    }

    fn evaluate(&mut self, expr: &PathExpr) -> Result<PathBuf> {
        let id = expr.node_id();
        if let Some(cached) = self.cache.get(&id) {
            self.cache_hits += 1;
            return Ok(cached.clone());
        }

        let resolved = match expr.kind() {
            ExprKind::Literal { value } => value.clone(),
            ExprKind::ParamRef { param } => self
                .bindings
                .get(param.name())
                .map(crate::Value::to_path)
                .ok_or_else(|| Error::MissingBindings {
                    missing: [param.name().to_string()].into(),
                })?,
            ExprKind::Template { template } => PathBuf::from(template.render(self.bindings)?),
            ExprKind::Join { left, right } => {
                let head = self.evaluate(left)?;
                let tail = self.evaluate(right)?;
                ops::join(&head, &tail)
            }
            ExprKind::Parent { child } => ops::parent(&self.evaluate(child)?),
            ExprKind::WithName { base, name } => ops::with_name(&self.evaluate(base)?, name),
            ExprKind::WithSuffix { base, suffix } => {
                ops::with_suffix(&self.evaluate(base)?, suffix)?
            }
        };

        self.evaluations += 1;
        self.cache.insert(id, resolved.clone());
        Ok(resolved)
    }
}
