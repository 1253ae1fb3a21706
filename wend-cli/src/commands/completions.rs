//! Shell completion generation command.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::io;

/// Name of the installed binary.
const BIN_NAME: &str = "wend";

/// Generate shell completion scripts
#[derive(Parser)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();

        let hint = match self.shell {
            Shell::Bash => Some("wend completions bash > ~/.local/share/bash-completion/completions/wend"),
            Shell::Zsh => Some("wend completions zsh > ~/.zsh/completions/_wend"),
            Shell::Fish => Some("wend completions fish > ~/.config/fish/completions/wend.fish"),
            Shell::PowerShell => Some("wend completions powershell | Out-String | Invoke-Expression"),
            _ => None,
        };
        if let Some(hint) = hint {
            global.logger().info(&format!("install with: {hint}"));
        }

        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());
        Ok(())
    }
}
