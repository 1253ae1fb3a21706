//! Show command implementation.
//!
//! Prints the expression a pattern reduces to, either in its symbolic form
//! or as a tree.

use crate::error::CliError;
use crate::utils::{ExprArgs, GlobalOptions, OutputFormat};
use clap::Args;

/// Show the simplified expression for a pattern.
#[derive(Args)]
pub struct ShowCommand {
    #[command(flatten)]
    pub expr: ExprArgs,

    /// Output format
    #[arg(long, value_enum, default_value = "text", ignore_case = true)]
    pub format: OutputFormat,
}

impl ShowCommand {
    /// Execute the show command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let expr = self.expr.build()?;
        match self.format {
            OutputFormat::Text => println!("{expr}"),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&expr)?),
            OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&expr)?),
        }
        Ok(())
    }
}
