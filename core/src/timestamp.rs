// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use jiff::{Zoned, civil::Date, tz::TimeZone};

use crate::TimeSlot;

/// Format used when handing timestamps to the visitor API, e.g. `2025-03-10T14:30:00+01:00`.
pub const ISO8601_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// Format of the human readable "Selected: ..." line, e.g. `Mar 10, 2025, 2:30:00 PM`.
pub const DISPLAY_FORMAT: &str = "%b %-d, %Y, %-I:%M:%S %p";

/// A calendar date merged with a time slot into one point in time.
///
/// Seconds and sub-seconds are always zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedTimestamp(Zoned);

impl ComposedTimestamp {
    /// Merges `date` with the start of `slot` in the time zone `tz`.
    ///
    /// Wall clock times skipped by a DST transition resolve forward, repeated ones resolve to the
    /// earlier instant. Returns `None` only for dates at the edge of the supported range.
    pub fn compose(date: Date, slot: TimeSlot, tz: &TimeZone) -> Option<Self> {
        match date.to_datetime(slot.time()).to_zoned(tz.clone()) {
            Ok(zoned) => Some(Self(zoned)),
            Err(e) => {
                tracing::warn!(%date, %slot, err = %e, "failed to compose timestamp");
                None
            }
        }
    }

    /// The calendar date part.
    pub fn date(&self) -> Date {
        self.0.date()
    }

    /// The time slot part.
    pub fn slot(&self) -> TimeSlot {
        TimeSlot::containing(self.0.time())
    }

    pub fn as_zoned(&self) -> &Zoned {
        &self.0
    }

    pub fn into_zoned(self) -> Zoned {
        self.0
    }

    /// ISO-8601 text with the UTC offset, as expected by the visitor API.
    pub fn to_iso8601(&self) -> String {
        self.0.strftime(ISO8601_FORMAT).to_string()
    }

    /// Human readable form for labels.
    pub fn display_label(&self) -> String {
        self.0.strftime(DISPLAY_FORMAT).to_string()
    }
}

impl fmt::Display for ComposedTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime(ISO8601_FORMAT))
    }
}

impl From<ComposedTimestamp> for Zoned {
    fn from(value: ComposedTimestamp) -> Self {
        value.0
    }
}

impl serde::Serialize for ComposedTimestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}
