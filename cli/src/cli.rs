// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, path::PathBuf};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use tracing_subscriber::EnvFilter;
use visitpass_core::{APP_NAME, Config as CoreConfig};

use crate::cmd_generate_completion::CmdGenerateCompletion;
use crate::cmd_pick::{CmdCompose, CmdPick};
use crate::cmd_preapprove::CmdPreApprove;
use crate::cmd_slots::CmdSlots;
use crate::config::{Config, parse_config};

/// Run the visitpass command-line interface.
pub async fn run() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse() {
        Ok(cli) => {
            if let Err(e) = cli.run().await {
                println!("{} {}", "Error:".red(), e);
            }
        }
        Err(e) => println!("{} {}", "Error:".red(), e),
    };
    Ok(())
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Pick visit windows for the visitor desk, one quarter hour at a time.")
            .author("Zexin Yuan <aim@yzx9.xyz>")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(false) // allow default to pick
            .arg_required_else_help(false)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $XDG_CONFIG_HOME/visitpass/config.toml on Linux and \
MacOS, %APPDATA%/visitpass/config.toml on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .subcommand(CmdPick::command())
            .subcommand(CmdCompose::command())
            .subcommand(CmdSlots::command())
            .subcommand(CmdPreApprove::command())
            .subcommand(CmdGenerateCompletion::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let command = match matches.subcommand() {
            Some((CmdPick::NAME, matches)) => Pick(CmdPick::from(matches)),
            Some((CmdCompose::NAME, matches)) => Compose(CmdCompose::from(matches)?),
            Some((CmdSlots::NAME, matches)) => Slots(CmdSlots::from(matches)),
            Some((CmdPreApprove::NAME, matches)) => PreApprove(CmdPreApprove::from(matches)?),
            Some((CmdGenerateCompletion::NAME, matches)) => {
                GenerateCompletion(CmdGenerateCompletion::from(matches))
            }
            None => {
                let defaults = CmdPick::command().try_get_matches_from([CmdPick::NAME])?;
                Pick(CmdPick::from(&defaults))
            }
            _ => unreachable!(),
        };

        let config = matches.get_one("config").cloned();
        Ok(Cli { config, command })
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config).await
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Pick a date and time slot interactively
    Pick(CmdPick),

    /// Compose a date and time slot without a terminal UI
    Compose(CmdCompose),

    /// List the time slots
    Slots(CmdSlots),

    /// Pick a validity window and print a pre-approval request
    PreApprove(CmdPreApprove),

    /// Generate shell completion
    GenerateCompletion(CmdGenerateCompletion),
}

impl Commands {
    /// Run the command with the given configuration
    #[rustfmt::skip]
    pub async fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        use Commands::*;
        match self {
            Pick(a)       => Self::run_with(config, |x, _| a.run(x)).await,
            Compose(a)    => Self::run_with(config, |x, _| a.run(x)).await,
            Slots(a)      => Self::run_with(config, |x, _| a.run(x)).await,
            PreApprove(a) => Self::run_with(config, |x, y| a.run(x, y)).await,
            GenerateCompletion(a) => a.run(),
        }
    }

    async fn run_with<F>(config: Option<PathBuf>, f: F) -> Result<(), Box<dyn Error>>
    where
        F: FnOnce(&CoreConfig, &Config) -> Result<(), Box<dyn Error>>,
    {
        tracing::debug!("parsing configuration...");
        let (core_config, config) = parse_config(config).await?;
        f(&core_config, &config)
    }
}
