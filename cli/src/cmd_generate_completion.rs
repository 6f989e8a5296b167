// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::io::{self, Write};

use clap::{ArgMatches, Command, ValueEnum, arg, value_parser};
use clap_complete::generate;
use clap_complete_nushell::Nushell;
use spinform_core::APP_NAME;

use crate::Cli;

/// Prints a completion script for the whole command line.
#[derive(Debug, Clone, Copy)]
pub struct CmdGenerateCompletion {
    pub shell: Shell,
}

impl CmdGenerateCompletion {
    pub const NAME: &str = "generate-completion";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Print a shell completion script")
            .hide(true)
            .arg(arg!(shell: <SHELL> "Target shell").value_parser(value_parser!(Shell)))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        let shell = matches.get_one("shell").copied();
        Self {
            shell: shell.unwrap_or(Shell::Bash), // required by clap
        }
    }

    pub fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!(shell = ?self.shell, "generating shell completion...");
        io::stdout().write_all(self.script().as_bytes())?;
        Ok(())
    }

    pub fn script(self) -> String {
        let mut cmd = Cli::command();
        let mut buf = Vec::new();
        match self.shell.builtin() {
            Some(shell) => generate(shell, &mut cmd, APP_NAME, &mut buf),
            None => generate(Nushell, &mut cmd, APP_NAME, &mut buf),
        }
        String::from_utf8_lossy(&buf).into_owned()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Elvish,
    Fish,
    Nushell,
    #[value(name = "powershell")]
    #[allow(clippy::enum_variant_names)]
    PowerShell,
    Zsh,
}

impl Shell {
    /// The matching `clap_complete` shell, `None` for Nushell which has its own generator.
    fn builtin(self) -> Option<clap_complete::Shell> {
        use clap_complete::Shell as Builtin;
        match self {
            Shell::Bash => Some(Builtin::Bash),
            Shell::Elvish => Some(Builtin::Elvish),
            Shell::Fish => Some(Builtin::Fish),
            Shell::PowerShell => Some(Builtin::PowerShell),
            Shell::Zsh => Some(Builtin::Zsh),
            Shell::Nushell => None,
        }
    }
}
