//! Named late-binding slots.

use std::fmt;
use std::sync::Arc;

use serde::{Serialize, Serializer};

/// A named slot filled in at resolution time.
///
/// Two params with the same name are interchangeable: equality, ordering
/// and hashing only look at the name.
///
/// # Examples
///
/// ```
/// use wend::Param;
///
/// let root = Param::new("root");
/// assert_eq!(root.name(), "root");
/// assert_eq!(root, Param::new("root"));
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Param {
    name: Arc<str>,
}

impl Param {
    /// Create a param with the given name.
    #[must_use]
    pub fn new(name: impl AsRef<str>) -> Self {
        Self {
            name: Arc::from(name.as_ref()),
        }
    }

    /// The name this param is bound by.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Param({:?})", self.name())
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.name())
    }
}

impl Serialize for Param {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl From<&str> for Param {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Param {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}
