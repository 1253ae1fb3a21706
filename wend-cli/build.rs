//! Build script for wend-cli.
//!
//! Generates the `wend.1` man page into `OUT_DIR` with clap_mangen.
//!
//! Build scripts cannot depend on the crate being built, so the command
//! structure is described again here.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// Keep this synchronized with src/cli.rs.
fn build_cli() -> Command {
    Command::new("wend")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Build and resolve deferred path expressions")
        .long_about(
            "Build filesystem path expressions with named parameters and resolve them \
             against bindings from files, WEND_BIND_* variables and the command line",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("bindings")
                .long("bindings")
                .help("Load bindings from a YAML or JSON file (repeatable; later files win)")
                .value_name("FILE")
                .global(true)
                .action(ArgAction::Append)
                .env("WEND_BINDINGS_FILE"),
        )
        .arg(
            Arg::new("bind")
                .long("bind")
                .help("Bind a parameter (repeatable; overrides files and environment)")
                .value_name("NAME=VALUE")
                .global(true)
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("no-env")
                .long("no-env")
                .help("Ignore WEND_BIND_* environment variables")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .subcommands(vec![
            Command::new("resolve")
                .about("Resolve a path pattern against bindings")
                .long_about("Print the concrete path a pattern resolves to"),
            Command::new("params")
                .about("List the parameters a pattern requires")
                .long_about("Print every parameter name that must be bound to resolve a pattern"),
            Command::new("show")
                .about("Show the simplified expression for a pattern")
                .long_about("Print the expression a pattern reduces to, as text, JSON or YAML"),
            Command::new("demo")
                .about("Run a short demonstration")
                .long_about("Build, inspect, simplify, resolve and rebase example expressions"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> std::io::Result<()> {
    let out_dir = PathBuf::from(std::env::var_os("OUT_DIR").ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "OUT_DIR is not set")
    })?);
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let mut buffer = Vec::new();
    Man::new(build_cli()).render(&mut buffer)?;
    fs::write(man_dir.join("wend.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
