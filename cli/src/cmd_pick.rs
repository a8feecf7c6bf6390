// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};
use jiff::civil::Date;
use visitpass_core::{
    ChannelEmitter, ComposedTimestamp, Config, DateTimeComposer, EmitMode, TimeSlot,
};

use crate::tui;
use crate::util::{
    ArgOutputFormat, arg_date, arg_label, arg_mode, arg_slot, get_date, get_label, get_mode,
    get_slot,
};

#[derive(Debug, Clone)]
pub struct CmdPick {
    pub label: String,
    pub mode: Option<EmitMode>,
    pub date: Option<Date>,
    pub slot: Option<TimeSlot>,
    pub output_format: ArgOutputFormat,
}

impl CmdPick {
    pub const NAME: &str = "pick";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Pick a date and a time slot interactively")
            .arg(arg_label("Visit"))
            .arg(arg_mode())
            .arg(arg_date().help("Initially selected date"))
            .arg(arg_slot().help("Initially selected time slot, as HH:MM"))
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            label: get_label(matches),
            mode: get_mode(matches),
            date: get_date(matches),
            slot: get_slot(matches),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "picking date and time...");
        let (emitter, rx) = ChannelEmitter::channel();
        let composer =
            new_composer(&self.label, self.mode, self.date, self.slot, config, emitter)?;

        match tui::pick_datetime(composer, rx)? {
            Some(value) => print_timestamp(&self.label, &value, self.output_format),
            None => tracing::info!("nothing picked"),
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdCompose {
    pub date: Date,
    pub slot: Option<TimeSlot>,
    pub output_format: ArgOutputFormat,
}

impl CmdCompose {
    pub const NAME: &str = "compose";

    const LABEL: &str = "Composed";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Compose a date and a time slot into a timestamp")
            .arg(arg_date().required(true))
            .arg(arg_slot().help("Time slot, as HH:MM, defaults to the configured slot"))
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            date: get_date(matches).ok_or("Date is required")?,
            slot: get_slot(matches),
            output_format: ArgOutputFormat::from(matches),
        })
    }

    pub fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "composing timestamp...");
        let value = self.compose(config)?;
        print_timestamp(Self::LABEL, &value, self.output_format);
        Ok(())
    }

    /// Drives a confirm-mode composer through the given date and slot, then confirms it.
    pub fn compose(&self, config: &Config) -> Result<ComposedTimestamp, Box<dyn Error>> {
        let mut composed = None;
        {
            let emitter = |value: ComposedTimestamp| composed = Some(value);
            let mut composer = DateTimeComposer::new(Self::LABEL, EmitMode::Confirm, emitter)
                .with_time_zone(config.time_zone()?)
                .with_default_slot(config.default_slot);

            composer.select_date(self.date);
            if let Some(slot) = self.slot {
                composer.select_slot(slot);
            }
            composer.confirm();
        }
        composed.ok_or_else(|| {
            format!("No timestamp exists for {} in this time zone", self.date).into()
        })
    }
}

/// Builds a composer from the configuration, overridden by command-line values.
///
/// A date seeds the selection together with the slot; a slot alone only moves the default slot.
pub fn new_composer(
    label: &str,
    mode: Option<EmitMode>,
    date: Option<Date>,
    slot: Option<TimeSlot>,
    config: &Config,
    emitter: ChannelEmitter,
) -> Result<DateTimeComposer<ChannelEmitter>, Box<dyn Error>> {
    let tz = config.time_zone()?;
    let mode = mode.unwrap_or(config.mode);
    let slot = slot.unwrap_or(config.default_slot);

    let composer = DateTimeComposer::new(label, mode, emitter)
        .with_time_zone(tz.clone())
        .with_default_slot(slot);
    Ok(match date.and_then(|date| ComposedTimestamp::compose(date, slot, &tz)) {
        Some(initial) => composer.with_initial_value(initial.as_zoned()),
        None => composer,
    })
}

pub fn print_timestamp(label: &str, value: &ComposedTimestamp, output_format: ArgOutputFormat) {
    match output_format {
        ArgOutputFormat::Text => println!("{}", value.to_iso8601()),
        ArgOutputFormat::Json => {
            let json = serde_json::json!({
                "label": label,
                "value": value,
                "display": value.display_label(),
            });
            println!("{json:#}");
        }
    }
}
