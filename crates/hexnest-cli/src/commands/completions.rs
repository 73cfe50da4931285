//! Shell completion generation via clap_complete.

use clap::CommandFactory;
use clap_complete::{Shell as CompleteShell, generate};

use crate::cli::{Cli, CompletionsArgs, Shell};
use crate::error::CliResult;

/// Execute the `hexnest completions` command.
pub fn execute(args: CompletionsArgs) -> CliResult<()> {
    let shell = match args.shell {
        Shell::Bash => CompleteShell::Bash,
        Shell::Zsh => CompleteShell::Zsh,
        Shell::Fish => CompleteShell::Fish,
        Shell::PowerShell => CompleteShell::PowerShell,
        Shell::Elvish => CompleteShell::Elvish,
    };

    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "hexnest", &mut std::io::stdout());
    Ok(())
}
