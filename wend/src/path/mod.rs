//! Concrete path semantics.
//!
//! Resolved expressions are plain [`std::path::PathBuf`] values. This module
//! holds the lexical operations applied to them: joining, taking the parent,
//! and replacing the final name or suffix. Nothing here normalizes `.`/`..`
//! components, expands `~`, or consults the filesystem.
//!
//! # Examples
//!
//! ```
//! use wend::path::ops;
//! use std::path::{Path, PathBuf};
//!
//! let joined = ops::join(Path::new("/mnt/storage"), Path::new("data"));
//! assert_eq!(ops::parent(&joined), PathBuf::from("/mnt/storage"));
//! assert_eq!(ops::with_suffix(&joined, ".bak").unwrap(), PathBuf::from("/mnt/storage/data.bak"));
//! ```

pub mod ops;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;
