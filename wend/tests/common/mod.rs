//! Common test utilities for integration tests.
//!
//! Helpers for building the expressions and bindings used across the
//! integration suites.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use wend::{Bindings, Param, PathExpr, Template};

/// The chunk-file expression used throughout the examples:
/// `{root}/data/{dataset}/chunk_{idx:04d}-of-{total:04d}.parquet`.
#[allow(dead_code)]
pub fn chunk_file() -> PathExpr {
    let template = Template::parse("chunk_{idx:04d}-of-{total:04d}.parquet").unwrap();
    Param::new("root") / "data" / Param::new("dataset") / template
}

/// Bindings satisfying [`chunk_file`].
#[allow(dead_code)]
pub fn chunk_bindings() -> Bindings {
    Bindings::from([("root", "/mnt/storage"), ("dataset", "train")])
        .with("idx", 7)
        .with("total", 100)
}

/// Collect required params into a sorted vector for comparisons.
#[allow(dead_code)]
pub fn names(expr: &PathExpr) -> Vec<String> {
    expr.required_params().into_iter().collect()
}

/// Write a file inside `dir` and return its path.
#[allow(dead_code)]
pub fn write_file(dir: &Path, filename: &str, content: &str) -> PathBuf {
    let path = dir.join(filename);
    fs::write(&path, content).unwrap();
    path
}

/// RAII guard for setting and restoring an environment variable.
///
/// Tests using this must be marked `#[serial]`.
#[allow(dead_code)]
pub struct EnvGuard {
    key: String,
    old_value: Option<String>,
}

#[allow(dead_code)]
impl EnvGuard {
    /// Set `key` to `value` until the guard is dropped.
    pub fn set(key: &str, value: &str) -> Self {
        let old_value = env::var(key).ok();
        env::set_var(key, value);
        Self {
            key: key.to_string(),
            old_value,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.old_value {
            Some(value) => env::set_var(&self.key, value),
            None => env::remove_var(&self.key),
        }
    }
}
