// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use jiff::{Zoned, civil::Date, tz::TimeZone};

use crate::{ComposedTimestamp, Config, Emitter, TimeSlot};

/// When a composer reports its value to the emitter.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum EmitMode {
    /// Report on every change of date or slot, once a date is selected.
    #[default]
    Live,

    /// Report only when the user confirms the selection.
    Confirm,
}

impl fmt::Display for EmitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmitMode::Live => write!(f, "live"),
            EmitMode::Confirm => write!(f, "confirm"),
        }
    }
}

/// Picks a calendar date and a quarter-hour slot and reports the combined timestamp.
///
/// The date may be unset, in which case nothing is ever reported. The slot is always set. How
/// and when values are reported is fixed by the [`EmitMode`] chosen at construction.
#[derive(Debug)]
pub struct DateTimeComposer<E: Emitter> {
    label: String,
    mode: EmitMode,
    tz: TimeZone,
    default_slot: TimeSlot,
    date: Option<Date>,
    slot: TimeSlot,
    emitter: E,
}

impl<E: Emitter> DateTimeComposer<E> {
    /// Creates a composer in the system time zone with no date and the `10:00` slot.
    pub fn new(label: impl ToString, mode: EmitMode, emitter: E) -> Self {
        Self {
            label: label.to_string(),
            mode,
            tz: TimeZone::system(),
            default_slot: TimeSlot::DEFAULT,
            date: None,
            slot: TimeSlot::DEFAULT,
            emitter,
        }
    }

    /// Creates a composer with the mode, default slot and time zone of `config`.
    pub fn from_config(
        label: impl ToString,
        config: &Config,
        emitter: E,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let tz = config.time_zone()?;
        Ok(Self::new(label, config.mode, emitter)
            .with_time_zone(tz)
            .with_default_slot(config.default_slot))
    }

    /// Sets the time zone timestamps are composed in.
    pub fn with_time_zone(mut self, tz: TimeZone) -> Self {
        self.tz = tz;
        self
    }

    /// Sets the slot used before the user picks one and after a reset.
    pub fn with_default_slot(mut self, slot: TimeSlot) -> Self {
        if self.date.is_none() && self.slot == self.default_slot {
            self.slot = slot;
        }
        self.default_slot = slot;
        self
    }

    /// Seeds the date, and the slot containing its time of day, from an existing value.
    ///
    /// The value is first converted into the composer's time zone. Seeding itself does not
    /// report, see [`DateTimeComposer::mount`].
    pub fn with_initial_value(mut self, value: &Zoned) -> Self {
        let local = value.with_time_zone(self.tz.clone());
        self.date = Some(local.date());
        self.slot = TimeSlot::containing(local.time());
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn mode(&self) -> EmitMode {
        self.mode
    }

    pub fn time_zone(&self) -> &TimeZone {
        &self.tz
    }

    /// The selected calendar date, if any.
    pub fn date(&self) -> Option<Date> {
        self.date
    }

    /// The selected time slot.
    pub fn slot(&self) -> TimeSlot {
        self.slot
    }

    pub fn emitter(&self) -> &E {
        &self.emitter
    }

    /// Selects a calendar date. Reports the new value in live mode.
    pub fn select_date(&mut self, date: Date) {
        if self.date == Some(date) {
            return;
        }

        tracing::debug!(label = %self.label, %date, "date selected");
        self.date = Some(date);
        self.on_changed();
    }

    /// Selects a time slot. Reports the new value in live mode, once a date is selected.
    pub fn select_slot(&mut self, slot: TimeSlot) {
        if self.slot == slot {
            return;
        }

        tracing::debug!(label = %self.label, %slot, "time slot selected");
        self.slot = slot;
        self.on_changed();
    }

    /// The selected date merged with the selected slot, `None` until a date is selected.
    pub fn compose(&self) -> Option<ComposedTimestamp> {
        self.date
            .and_then(|date| ComposedTimestamp::compose(date, self.slot, &self.tz))
    }

    /// Reports the current value to the emitter. Returns whether anything was reported.
    pub fn emit(&mut self) -> bool {
        match self.compose() {
            Some(value) => {
                tracing::debug!(label = %self.label, %value, "emitting composed timestamp");
                self.emitter.emit(value);
                true
            }
            None => false,
        }
    }

    /// Whether confirming would report a value.
    pub fn can_confirm(&self) -> bool {
        self.mode == EmitMode::Confirm && self.date.is_some()
    }

    /// Confirms the selection in confirm mode. Returns whether a value was reported.
    pub fn confirm(&mut self) -> bool {
        match self.mode {
            EmitMode::Confirm => self.emit(),
            EmitMode::Live => {
                tracing::debug!(label = %self.label, "confirm ignored in live mode");
                false
            }
        }
    }

    /// The text of the "Selected" line, `None` until a date is selected.
    pub fn selected_label(&self) -> Option<String> {
        self.compose().map(|a| a.display_label())
    }

    /// Clears the date and restores the default slot, without reporting.
    pub fn reset(&mut self) {
        self.date = None;
        self.slot = self.default_slot;
    }

    /// Reports the seeded value once in live mode, as the picker appears on screen.
    ///
    /// Returns whether anything was reported. Nothing is reported without a date or in confirm
    /// mode.
    pub fn mount(&mut self) -> bool {
        match self.mode {
            EmitMode::Live => self.emit(),
            EmitMode::Confirm => false,
        }
    }

    /// Consumes the composer and returns its emitter.
    pub fn into_emitter(self) -> E {
        self.emitter
    }

    fn on_changed(&mut self) {
        if self.mode == EmitMode::Live {
            self.emit();
        }
    }
}
