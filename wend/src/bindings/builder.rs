//! Builder that merges bindings from files, the environment and code.

use std::path::PathBuf;

use crate::bindings::{Bindings, BindingsLoader, BindingsValidator, EnvironmentBindings};
use crate::error::Result;
use crate::value::Value;

/// Assembles [`Bindings`] from every configured source.
///
/// Files are applied first in the order they were added, then
/// `WEND_BIND_*` environment variables, then programmatic bindings.
///
/// # Examples
///
/// ```
/// use wend::{Bindings, BindingsBuilder, Value};
///
/// let bindings = BindingsBuilder::new()
///     .skip_env()
///     .with_binding("root", "/mnt/storage")
///     .with_bindings(Bindings::from([("idx", 3)]))
///     .build()
///     .unwrap();
///
/// assert_eq!(bindings.get("idx"), Some(&Value::Int(3)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct BindingsBuilder {
    files: Vec<PathBuf>,
    skip_env: bool,
    overrides: Bindings,
}

impl BindingsBuilder {
    /// A builder with no files that reads the environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a bindings file. Later files override earlier ones.
    #[must_use]
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.files.push(path.into());
        self
    }

    /// Add several bindings files in order.
    #[must_use]
    pub fn with_files<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.files.extend(paths.into_iter().map(Into::into));
        self
    }

    /// Do not read `WEND_BIND_*` environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Add programmatic bindings, which take precedence over every other
    /// source.
    #[must_use]
    pub fn with_bindings(mut self, bindings: Bindings) -> Self {
        self.overrides.merge(bindings);
        self
    }

    /// Add a single programmatic binding.
    #[must_use]
    pub fn with_binding(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.overrides.insert(name, value);
        self
    }

    /// Load and merge all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be loaded, or if any source
    /// supplies an invalid binding name.
    pub fn build(self) -> Result<Bindings> {
        let mut bindings = Bindings::new();

        for path in &self.files {
            bindings.merge(BindingsLoader::load_file(path)?);
        }

        if !self.skip_env {
            let from_env = EnvironmentBindings::load()?;
            if !from_env.is_empty() {
                log::debug!("{} bindings from environment", from_env.len());
            }
            bindings.merge(from_env);
        }

        BindingsValidator::validate(&self.overrides)?;
        bindings.merge(self.overrides);

        Ok(bindings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use serial_test::serial;
    use std::env;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_empty_builder() {
        let bindings = BindingsBuilder::new().skip_env().build().unwrap();
        assert!(bindings.is_empty());
    }

    #[test]
    fn test_later_files_override_earlier() {
        let temp_dir = TempDir::new().unwrap();
        let first = temp_dir.path().join("first.yaml");
        let second = temp_dir.path().join("second.json");
        fs::write(&first, "root: /first\nsplit: train\n").unwrap();
        fs::write(&second, r#"{"root": "/second"}"#).unwrap();

        let bindings = BindingsBuilder::new()
            .skip_env()
            .with_files([&first, &second])
            .build()
            .unwrap();
        assert_eq!(bindings.get("root"), Some(&Value::from("/second")));
        assert_eq!(bindings.get("split"), Some(&Value::from("train")));
    }

    #[test]
    #[serial]
    fn test_precedence_file_env_programmatic() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("bindings.yaml");
        fs::write(&file, "root: /file\ndataset: from-file\nidx: 1\n").unwrap();

        env::set_var("WEND_BIND_DATASET", "from-env");
        env::set_var("WEND_BIND_IDX", "2");
        let result = BindingsBuilder::new()
            .with_file(&file)
            .with_binding("idx", 3)
            .build();
        env::remove_var("WEND_BIND_DATASET");
        env::remove_var("WEND_BIND_IDX");

        let bindings = result.unwrap();
        assert_eq!(bindings.get("root"), Some(&Value::from("/file")));
        assert_eq!(bindings.get("dataset"), Some(&Value::from("from-env")));
        assert_eq!(bindings.get("idx"), Some(&Value::Int(3)));
    }

    #[test]
    #[serial]
    fn test_skip_env() {
        env::set_var("WEND_BIND_ROOT", "/env");
        let result = BindingsBuilder::new().skip_env().build();
        env::remove_var("WEND_BIND_ROOT");
        assert!(!result.unwrap().contains("root"));
    }

    #[test]
    fn test_invalid_programmatic_name() {
        let err = BindingsBuilder::new()
            .skip_env()
            .with_binding("", 1)
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidBinding { .. }));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = BindingsBuilder::new()
            .skip_env()
            .with_file("/nonexistent/bindings.yaml")
            .build();
        assert!(result.is_err());
    }
}
