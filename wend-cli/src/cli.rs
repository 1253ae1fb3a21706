//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CompletionsCommand, DemoCommand, ParamsCommand, ResolveCommand, ShowCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Build and resolve deferred path expressions.
#[derive(Parser)]
#[command(name = "wend")]
#[command(version, about = "Build and resolve deferred path expressions", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Load bindings from a YAML or JSON file (repeatable; later files win)
    #[arg(
        long = "bindings",
        value_name = "FILE",
        global = true,
        env = "WEND_BINDINGS_FILE"
    )]
    pub bindings_files: Vec<PathBuf>,

    /// Bind a parameter (repeatable; overrides files and environment)
    #[arg(long, value_name = "NAME=VALUE", global = true)]
    pub bind: Vec<String>,

    /// Ignore WEND_BIND_* environment variables
    #[arg(long, global = true)]
    pub no_env: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Resolve a path pattern against bindings
    Resolve(ResolveCommand),

    /// List the parameters a pattern requires
    Params(ParamsCommand),

    /// Show the simplified expression for a pattern
    Show(ShowCommand),

    /// Run a short demonstration
    Demo(DemoCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
