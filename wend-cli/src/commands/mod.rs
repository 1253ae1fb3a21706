//! CLI command implementations.
//!
//! - `resolve`: Resolve a pattern to a concrete path
//! - `params`: List the parameters a pattern requires
//! - `show`: Show the simplified expression for a pattern
//! - `demo`: Run a short demonstration
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod demo;
pub mod params;
pub mod resolve;
pub mod show;

pub use completions::CompletionsCommand;
pub use demo::DemoCommand;
pub use params::ParamsCommand;
pub use resolve::ResolveCommand;
pub use show::ShowCommand;
