// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, io};

use clap::{ArgMatches, Command, ValueEnum, arg, value_parser};
use clap_complete::{Generator, generate};

use crate::Cli;

#[derive(Debug, Clone, Copy)]
pub struct CmdGenerateCompletion {
    pub shell: Shell,
}

impl CmdGenerateCompletion {
    pub const NAME: &str = "generate-completion";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Generate shell completion for the specified shell")
            .hide(true)
            .arg(
                arg!(shell: <SHELL> "The shell generator to use")
                    .value_parser(value_parser!(Shell)),
            )
    }

    pub fn from(matches: &ArgMatches) -> Self {
        match matches.get_one::<Shell>("shell") {
            Some(shell) => Self { shell: *shell },
            _ => unreachable!(),
        }
    }

    pub fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "generating shell completion...");
        self.generate(&mut io::stdout());
        Ok(())
    }

    /// Writes the completion script of the whole `visitpass` command tree.
    pub fn generate(self, buf: &mut impl io::Write) {
        let mut cmd = Cli::command();
        self.shell.write_to(&mut cmd, buf);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Elvish,
    Fish,
    Nushell,
    #[clap(name = "powershell")]
    #[allow(clippy::enum_variant_names)]
    PowerShell,
    Zsh,
}

impl Shell {
    fn write_to(self, cmd: &mut Command, buf: &mut impl io::Write) {
        use clap_complete::Shell as ClapShell;

        match self {
            Shell::Bash => write_with(ClapShell::Bash, cmd, buf),
            Shell::Elvish => write_with(ClapShell::Elvish, cmd, buf),
            Shell::Fish => write_with(ClapShell::Fish, cmd, buf),
            Shell::PowerShell => write_with(ClapShell::PowerShell, cmd, buf),
            Shell::Zsh => write_with(ClapShell::Zsh, cmd, buf),
            Shell::Nushell => write_with(clap_complete_nushell::Nushell, cmd, buf),
        }
    }
}

fn write_with(generator: impl Generator, cmd: &mut Command, buf: &mut impl io::Write) {
    let name = cmd.get_name().to_string();
    generate(generator, cmd, name, buf);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(shell: &str) -> CmdGenerateCompletion {
        let matches = Cli::command()
            .try_get_matches_from(["visitpass", "generate-completion", shell])
            .unwrap_or_else(|e| panic!("Failed to parse for shell '{shell}': {e}"));
        let sub_matches = matches.subcommand_matches("generate-completion").unwrap();
        CmdGenerateCompletion::from(sub_matches)
    }

    #[test]
    fn test_generate_completion_covers_subcommands() {
        let parsed = parse("bash");
        assert_eq!(parsed.shell, Shell::Bash);

        let mut output = vec![];
        parsed.generate(&mut output);
        let script = String::from_utf8(output).unwrap();
        assert!(script.contains("visitpass"));
        assert!(script.contains("preapprove"));
    }

    #[test]
    fn test_parse_shell_variants() {
        assert_eq!(parse("bash").shell, Shell::Bash);
        assert_eq!(parse("elvish").shell, Shell::Elvish);
        assert_eq!(parse("fish").shell, Shell::Fish);
        assert_eq!(parse("nushell").shell, Shell::Nushell);
        assert_eq!(parse("powershell").shell, Shell::PowerShell);
        assert_eq!(parse("zsh").shell, Shell::Zsh);
    }

    #[test]
    fn test_every_shell_generates() {
        for shell in Shell::value_variants() {
            let mut output = vec![];
            CmdGenerateCompletion { shell: *shell }.generate(&mut output);
            assert!(!output.is_empty(), "empty completion for {shell:?}");
        }
    }
}
