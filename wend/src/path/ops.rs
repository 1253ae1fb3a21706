//! Lexical path operations.
//!
//! None of these functions touch the filesystem. They are shared by the
//! smart constructors, which fold literal operands eagerly, and by the
//! resolver, which applies them to bound values.
//!
//! Semantics that differ from a strict lexical path library:
//!
//! - [`join`] with an empty right operand keeps a trailing separator
//!   (`a` joined with `` displays as `a/`). The two compare equal as
//!   [`PathBuf`]s.
//! - [`with_name`] accepts any name. An empty name removes the final
//!   component and a name containing a separator appends several
//!   components.
//! - [`with_suffix`] rejects a suffix containing a separator with
//!   [`Error::InvalidSuffix`].

use std::ffi::OsStr;
use std::path::{self, Path, PathBuf};

use crate::error::{Error, Result};

/// Join two paths. An absolute `right` replaces `left` entirely.
///
/// # Examples
///
/// ```
/// use wend::path::ops::join;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(join(Path::new("/home"), Path::new("user")), PathBuf::from("/home/user"));
/// assert_eq!(join(Path::new("/home"), Path::new("/etc")), PathBuf::from("/etc"));
/// ```
#[must_use]
pub fn join(left: &Path, right: &Path) -> PathBuf {
    left.join(right)
}

/// The lexical parent of a path.
///
/// The parent of the root is the root. The parent of a single relative
/// component, or of the empty path, is `.`.
///
/// # Examples
///
/// ```
/// use wend::path::ops::parent;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(parent(Path::new("/a/b")), PathBuf::from("/a"));
/// assert_eq!(parent(Path::new("/")), PathBuf::from("/"));
/// assert_eq!(parent(Path::new("a")), PathBuf::from("."));
/// ```
#[must_use]
pub fn parent(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if parent.as_os_str().is_empty() => PathBuf::from("."),
        Some(parent) => parent.to_path_buf(),
        None if path.as_os_str().is_empty() => PathBuf::from("."),
        None => path.to_path_buf(),
    }
}

/// Replace the final component of a path.
///
/// A path without a final component (such as `/`) gets `name` appended.
///
/// # Examples
///
/// ```
/// use wend::path::ops::with_name;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(with_name(Path::new("/tmp/data.txt"), "other.csv"), PathBuf::from("/tmp/other.csv"));
/// ```
#[must_use]
pub fn with_name(path: &Path, name: &str) -> PathBuf {
    let mut renamed = path.to_path_buf();
    renamed.set_file_name(name);
    renamed
}

/// Replace the extension of the final component.
///
/// The leading `.` of `suffix` is optional and an empty suffix removes the
/// extension. A path without a final component is returned unchanged.
///
/// # Errors
///
/// Returns [`Error::InvalidSuffix`] if `suffix` contains a path separator.
///
/// # Examples
///
/// ```
/// use wend::path::ops::with_suffix;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(with_suffix(Path::new("/x/file.txt"), ".json").unwrap(), PathBuf::from("/x/file.json"));
/// assert_eq!(with_suffix(Path::new("/x/file.txt"), "").unwrap(), PathBuf::from("/x/file"));
/// assert_eq!(with_suffix(Path::new("/x/file"), "gz").unwrap(), PathBuf::from("/x/file.gz"));
/// assert!(with_suffix(Path::new("/x/file"), ".a/b").is_err());
/// ```
pub fn with_suffix(path: &Path, suffix: &str) -> Result<PathBuf> {
    check_suffix(suffix)?;
    let mut changed = path.to_path_buf();
    let extension = suffix.strip_prefix('.').unwrap_or(suffix);
    changed.set_extension(OsStr::new(extension));
    Ok(changed)
}

/// Check that `suffix` can be applied by [`with_suffix`].
///
/// # Errors
///
/// Returns [`Error::InvalidSuffix`] if `suffix` contains a path separator.
pub fn check_suffix(suffix: &str) -> Result<()> {
    if suffix.chars().any(path::is_separator) {
        return Err(Error::InvalidSuffix {
            suffix: suffix.to_string(),
        });
    }
    Ok(())
}
