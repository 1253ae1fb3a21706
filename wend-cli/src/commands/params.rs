//! Params command implementation.
//!
//! Prints the parameters a pattern needs before it can be resolved.

use crate::error::CliError;
use crate::utils::{ExprArgs, GlobalOptions, OutputFormat};
use clap::Args;

/// List the parameters a pattern requires.
#[derive(Args)]
pub struct ParamsCommand {
    #[command(flatten)]
    pub expr: ExprArgs,

    /// Output format
    #[arg(long, value_enum, default_value = "text", ignore_case = true)]
    pub format: OutputFormat,
}

impl ParamsCommand {
    /// Execute the params command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let params = self.expr.build()?.required_params();
        match self.format {
            OutputFormat::Text => {
                for name in &params {
                    println!("{name}");
                }
            }
            OutputFormat::Json => println!("{}", serde_json::to_string(&params)?),
            OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&params)?),
        }
        Ok(())
    }
}
