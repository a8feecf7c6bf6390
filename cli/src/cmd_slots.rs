// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, io};

use clap::{ArgMatches, Command};
use visitpass_core::{Config, TimeSlot};

use crate::util::ArgOutputFormat;

#[derive(Debug, Clone, Copy)]
pub struct CmdSlots {
    pub output_format: ArgOutputFormat,
}

impl CmdSlots {
    pub const NAME: &str = "slots";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("List the quarter-hour time slots of a day")
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing time slots...");
        self.write(config, &mut io::stdout())
    }

    /// Writes every slot, marking the configured default one in text output.
    pub fn write(self, config: &Config, buf: &mut impl io::Write) -> Result<(), Box<dyn Error>> {
        match self.output_format {
            ArgOutputFormat::Text => {
                for slot in TimeSlot::all() {
                    match *slot == config.default_slot {
                        true => writeln!(buf, "{slot} *")?,
                        false => writeln!(buf, "{slot}")?,
                    }
                }
            }
            ArgOutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *buf, TimeSlot::all())?;
                writeln!(buf)?;
            }
        }
        Ok(())
    }
}
