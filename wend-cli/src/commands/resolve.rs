//! Resolve command implementation.

use crate::error::CliError;
use crate::utils::{load_bindings, ExprArgs, GlobalOptions};
use clap::Args;

/// Resolve a path pattern against the current bindings.
#[derive(Args)]
pub struct ResolveCommand {
    #[command(flatten)]
    pub expr: ExprArgs,
}

impl ResolveCommand {
    /// Execute the resolve command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let logger = global.logger();
        let expr = self.expr.build()?;
        logger.info(&format!("expression: {expr}"));

        let bindings = load_bindings(global)?;
        logger.debug(&format!("{} bindings loaded", bindings.len()));

        let path = expr.resolve(&bindings)?;
        println!("{}", path.display());
        Ok(())
    }
}
