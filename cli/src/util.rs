// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use clap::{Arg, ArgMatches, arg, value_parser};
use jiff::{ToSpan, Zoned, civil::Date};
use visitpass_core::{EmitMode, TimeSlot};

/// The output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ArgOutputFormat {
    Json,
    Text,
}

impl ArgOutputFormat {
    pub fn arg() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(ArgOutputFormat))
            .default_value("text")
    }

    pub fn from(matches: &ArgMatches) -> Self {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(ArgOutputFormat::Text)
    }
}

pub fn arg_label(default: &'static str) -> Arg {
    arg!(-l --label <LABEL> "Label shown above the calendar").default_value(default)
}

pub fn get_label(matches: &ArgMatches) -> String {
    matches
        .get_one::<String>("label")
        .cloned()
        .unwrap_or_default()
}

pub fn arg_mode() -> Arg {
    arg!(-m --mode <MODE> "When the picked value is reported, defaults to the configured mode")
        .value_parser(value_parser!(EmitMode))
}

pub fn get_mode(matches: &ArgMatches) -> Option<EmitMode> {
    matches.get_one("mode").copied()
}

pub fn arg_date() -> Arg {
    arg!(-d --date <DATE> "Calendar date, as YYYY-MM-DD, 'today' or 'tomorrow'")
        .value_parser(parse_date)
}

pub fn get_date(matches: &ArgMatches) -> Option<Date> {
    matches.get_one("date").copied()
}

pub fn arg_slot() -> Arg {
    arg!(-a --at <TIME> "Quarter-hour time slot, as HH:MM").value_parser(value_parser!(TimeSlot))
}

pub fn get_slot(matches: &ArgMatches) -> Option<TimeSlot> {
    matches.get_one("at").copied()
}

/// Parses a calendar date given on the command line.
pub fn parse_date(s: &str) -> Result<Date, String> {
    let today = Zoned::now().date();
    match s.trim() {
        "today" => Ok(today),
        "tomorrow" => today
            .checked_add(1.day())
            .map_err(|e| format!("Failed to compute tomorrow: {e}")),
        s => s
            .parse()
            .map_err(|_| format!("Invalid date: {s}. Expected format: YYYY-MM-DD")),
    }
}
