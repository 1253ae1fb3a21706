//! Bindings supplied through `WEND_BIND_*` environment variables.
//!
//! `WEND_BIND_DATASET=imagenet` binds `dataset` to `"imagenet"`. Names are
//! lower-cased and values are typed with [`Value::infer`].

use std::env;
use std::ffi::OsString;

use crate::bindings::{Bindings, BindingsValidator};
use crate::error::{Error, Result};
use crate::value::Value;

/// Reads bindings from the process environment.
///
/// # Examples
///
/// ```no_run
/// use wend::bindings::EnvironmentBindings;
///
/// let bindings = EnvironmentBindings::load().unwrap();
/// for (name, value) in &bindings {
///     println!("{name} = {value}");
/// }
/// ```
pub struct EnvironmentBindings;

impl EnvironmentBindings {
    /// Prefix marking a variable as a binding.
    pub const PREFIX: &'static str = "WEND_BIND_";

    /// Collect bindings from the current process environment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBinding`] if a `WEND_BIND_*` variable has an
    /// invalid name or a value that is not valid Unicode.
    pub fn load() -> Result<Bindings> {
        Self::from_vars(env::vars_os())
    }

    /// Collect bindings from an explicit list of variables.
    ///
    /// Variables without the prefix, or whose key is not valid Unicode, are
    /// ignored.
    ///
    /// # Errors
    ///
    /// Same as [`EnvironmentBindings::load`].
    pub fn from_vars<I>(vars: I) -> Result<Bindings>
    where
        I: IntoIterator<Item = (OsString, OsString)>,
    {
        let mut bindings = Bindings::new();
        for (key, value) in vars {
            let Some(name) = key.to_str().and_then(|key| key.strip_prefix(Self::PREFIX)) else {
                continue;
            };
            let name = name.to_lowercase();
            BindingsValidator::validate_name(&name)?;
            let value = value.into_string().map_err(|_| Error::InvalidBinding {
                name: name.clone(),
                message: "environment value is not valid Unicode".to_string(),
            })?;
            log::trace!("binding {name} from environment");
            bindings.insert(name, Value::infer(&value));
        }
        Ok(bindings)
    }
}
