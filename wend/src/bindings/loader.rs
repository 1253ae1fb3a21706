//! Loading bindings from YAML and JSON files.

use std::fs;
use std::path::Path;

use crate::bindings::{Bindings, BindingsValidator};
use crate::error::{Error, Result};

/// Loads bindings files.
///
/// A bindings file is a flat mapping from names to scalar values:
///
/// ```yaml
/// root: /mnt/storage
/// dataset: imagenet
/// idx: 7
/// ```
pub struct BindingsLoader;

impl BindingsLoader {
    /// Load and parse a bindings file, choosing the format by extension.
    ///
    /// `.yaml` and `.yml` files are parsed as YAML, `.json` files as JSON.
    /// An empty YAML file holds no bindings.
    ///
    /// # Errors
    ///
    /// Returns an error if the extension is not recognized, the file cannot
    /// be read, its contents do not parse, or a name is invalid.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use wend::bindings::BindingsLoader;
    /// use std::path::Path;
    ///
    /// let bindings = BindingsLoader::load_file(Path::new("bindings.yaml")).unwrap();
    /// println!("loaded {} bindings", bindings.len());
    /// ```
    pub fn load_file(path: &Path) -> Result<Bindings> {
        let format = Format::from_path(path)?;
        let contents = fs::read_to_string(path)?;
        let bindings = Self::parse(&contents, format)?;
        BindingsValidator::validate(&bindings)?;
        log::debug!("loaded {} bindings from {}", bindings.len(), path.display());
        Ok(bindings)
    }

    fn parse(contents: &str, format: Format) -> Result<Bindings> {
        match format {
            Format::Yaml if contents.trim().is_empty() => Ok(Bindings::new()),
            Format::Yaml => Ok(serde_yaml::from_str(contents)?),
            Format::Json => Ok(serde_json::from_str(contents)?),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Format {
    Yaml,
    Json,
}

impl Format {
    fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml" | "yml") => Ok(Self::Yaml),
            Some("json") => Ok(Self::Json),
            _ => Err(Error::UnsupportedBindingsFile {
                path: path.to_path_buf(),
            }),
        }
    }
}
