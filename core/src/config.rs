// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use jiff::tz::TimeZone;

use crate::{EmitMode, TimeSlot};

/// The name of the visitpass application.
pub const APP_NAME: &str = "visitpass";

/// Configuration for date/time composers.
#[derive(Debug, Default, Clone, serde::Deserialize)]
pub struct Config {
    /// When composers report their value.
    #[serde(default)]
    pub mode: EmitMode,

    /// Slot selected before the user picks one.
    #[serde(default)]
    pub default_slot: TimeSlot,

    /// IANA time zone to compose timestamps in, the system time zone if unset.
    #[serde(default)]
    pub timezone: Option<String>,
}

impl Config {
    /// Resolves the configured time zone.
    pub fn time_zone(&self) -> Result<TimeZone, Box<dyn Error>> {
        match &self.timezone {
            Some(name) => TimeZone::get(name)
                .map_err(|e| format!("Unknown time zone '{name}': {e}").into()),
            None => Ok(TimeZone::system()),
        }
    }
}
