//! Utility functions for CLI operations.
//!
//! This module provides the pieces shared across commands: global options,
//! pattern parsing, bindings loading and output formats.

use crate::error::CliError;
use clap::{Args, ValueEnum};
use std::path::PathBuf;
use wend::{
    Bindings, BindingsBuilder, Fragment, Interpolated, Interpolation, LogLevel, Logger, PathExpr,
    RelativePath, Template,
};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Diagnostics level chosen from `--verbose`, `--quiet` and `WEND_LOG_MODE`.
    pub log_level: LogLevel,

    /// Bindings files in the order given.
    pub bindings_files: Vec<PathBuf>,

    /// Raw `NAME=VALUE` assignments from `--bind`.
    pub bind: Vec<String>,

    /// Ignore `WEND_BIND_*` environment variables.
    pub no_env: bool,
}

impl GlobalOptions {
    /// A logger at the configured level.
    pub fn logger(&self) -> Logger {
        Logger::new(self.log_level)
    }
}

/// Output format for commands that print structured data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text
    Text,
    /// JSON
    Json,
    /// YAML
    Yaml,
}

/// A pattern plus the transformations applied on top of it.
#[derive(Debug, Args)]
pub struct ExprArgs {
    /// Path pattern such as `{root}/data/chunk_{idx:04d}.parquet`
    pub pattern: String,

    /// Place the pattern beneath BASE (itself a pattern)
    #[arg(long, value_name = "BASE")]
    pub base: Option<String>,

    /// Take the parent of the pattern
    #[arg(long)]
    pub parent: bool,

    /// Replace the final component
    #[arg(long, value_name = "NAME")]
    pub with_name: Option<String>,

    /// Replace the suffix of the final component
    #[arg(long, value_name = "SUFFIX", allow_hyphen_values = true)]
    pub with_suffix: Option<String>,
}

impl ExprArgs {
    /// Build the expression described by these arguments.
    ///
    /// The base is joined first, then the parent, name and suffix
    /// transformations are applied in that order.
    pub fn build(&self) -> Result<PathExpr, CliError> {
        let pattern = parse_pattern(&self.pattern)?;
        let mut expr = match &self.base {
            Some(base) => RelativePath::new(parse_pattern(base)?, pattern).expr(),
            None => pattern,
        };
        if self.parent {
            expr = expr.parent();
        }
        if let Some(name) = &self.with_name {
            expr = expr.with_name(name.as_str());
        }
        if let Some(suffix) = &self.with_suffix {
            expr = expr.with_suffix(suffix.as_str());
        }
        Ok(expr)
    }
}

/// Parse a path pattern into an expression.
///
/// The pattern is split on `/`. A segment that is exactly `{name}` becomes a
/// param reference, a segment with other placeholders becomes a template,
/// and anything else is literal text. A leading `/` makes the pattern
/// absolute.
pub fn parse_pattern(pattern: &str) -> Result<PathExpr, CliError> {
    let mut expr = pattern.starts_with('/').then(|| PathExpr::literal("/"));
    for segment in pattern.split('/').filter(|segment| !segment.is_empty()) {
        let segment = parse_segment(segment)?;
        expr = Some(match expr {
            Some(expr) => expr.join(segment),
            None => segment,
        });
    }
    expr.ok_or_else(|| CliError::InvalidArguments("pattern is empty".to_string()))
}

fn parse_segment(segment: &str) -> Result<PathExpr, CliError> {
    if !segment.contains(['{', '}']) {
        return Ok(PathExpr::literal(segment));
    }
    let template = Template::parse(segment)
        .map_err(|e| CliError::InvalidArguments(format!("bad pattern segment: {e}")))?;
    match template.fragments() {
        [Fragment::Interpolation(Interpolation {
            value: Interpolated::Param(param),
            spec,
        })] if spec.is_empty() => Ok(PathExpr::param(param.clone())),
        _ => Ok(PathExpr::template(template)),
    }
}

/// Merge bindings from files, the environment and `--bind` flags.
pub fn load_bindings(global: &GlobalOptions) -> Result<Bindings, CliError> {
    let mut builder = BindingsBuilder::new().with_files(global.bindings_files.iter());
    if global.no_env {
        builder = builder.skip_env();
    }
    for assignment in &global.bind {
        let (name, value) = Bindings::parse_assignment(assignment)
            .map_err(|e| CliError::InvalidArguments(e.to_string()))?;
        builder = builder.with_binding(name, value);
    }
    Ok(builder.build()?)
}
