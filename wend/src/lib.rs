#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # wend
//!
//! Deferred filesystem path expressions with late-bound parameters.
//!
//! A [`PathExpr`] describes how to build a path from named [`Param`]s
//! without knowing their values yet. Expressions are built with the `/`
//! operator and a few path transformations, simplified as they are built,
//! and resolved to a concrete [`PathBuf`](std::path::PathBuf) once
//! [`Bindings`] are available. Nothing here touches the filesystem.
//!
//! ## Core Types
//!
//! - [`Param`]: a named placeholder
//! - [`PathExpr`] and [`ExprKind`]: expression handles and their variants
//! - [`Template`]: a single segment with formatted interpolations
//! - [`RelativePath`]: a path relative to a replaceable base
//! - [`Bindings`], [`Value`] and [`BindingsBuilder`]: values for params
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: diagnostics output
//!
//! ## Examples
//!
//! ```
//! use wend::{Bindings, Param, Template};
//! use std::path::PathBuf;
//!
//! let root = Param::new("root");
//! let dataset = Param::new("dataset");
//!
//! let data_dir = &root / "data" / &dataset;
//! let chunk = Template::parse("chunk_{idx:04d}-of-{total:04d}.parquet").unwrap();
//! let chunk_file = &data_dir / chunk;
//!
//! let names: Vec<_> = chunk_file.required_params().into_iter().collect();
//! assert_eq!(names, ["dataset", "idx", "root", "total"]);
//!
//! let bindings = Bindings::from([("root", "/mnt/storage"), ("dataset", "train")])
//!     .with("idx", 7)
//!     .with("total", 100);
//! assert_eq!(
//!     chunk_file.resolve(&bindings).unwrap(),
//!     PathBuf::from("/mnt/storage/data/train/chunk_0007-of-0100.parquet")
//! );
//! ```

pub mod bindings;
pub mod error;
pub mod expr;
pub mod format;
pub mod logging;
pub mod param;
pub mod path;
pub mod relative;
mod resolver;
pub mod value;

// Re-export key types at crate root for convenience
pub use bindings::{Bindings, BindingsBuilder};
pub use error::{Error, Result};
pub use expr::{
    ExprKind, Fragment, Interpolated, Interpolation, PathExpr, Template, TemplateBuilder,
};
pub use logging::{init_logger, LogLevel, Logger};
pub use param::Param;
pub use relative::RelativePath;
pub use value::Value;
