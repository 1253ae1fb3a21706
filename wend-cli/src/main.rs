//! Main entry point for the wend CLI.
//!
//! Commands:
//! - `resolve`: Resolve a path pattern against bindings
//! - `params`: List the parameters a pattern requires
//! - `show`: Show the simplified expression for a pattern
//! - `demo`: Run a short demonstration
//! - `completions`: Generate shell completion scripts

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Route library diagnostics through a logger honoring --verbose/--quiet
    let logger = wend::init_logger(cli.verbose, cli.quiet);
    logger.install();

    let global = GlobalOptions {
        log_level: logger.level(),
        bindings_files: cli.bindings_files,
        bind: cli.bind,
        no_env: cli.no_env,
    };

    let result = match cli.command {
        cli::Command::Resolve(cmd) => cmd.execute(&global),
        cli::Command::Params(cmd) => cmd.execute(&global),
        cli::Command::Show(cmd) => cmd.execute(&global),
        cli::Command::Demo(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
