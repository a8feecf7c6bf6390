// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.

use jiff::tz::{TimeZone, offset};
use visitpass_core::{DateTimeComposer, EmitMode, Emitter, TimeSlot};

/// UTC offset of the time zone used by all fixtures.
pub const TEST_OFFSET_HOURS: i8 = 1;

/// The fixed time zone fixtures compose in, standing in for "local time".
#[must_use]
pub fn test_time_zone() -> TimeZone {
    TimeZone::fixed(offset(TEST_OFFSET_HOURS))
}

/// Parses a slot, panicking on invalid input.
#[must_use]
pub fn slot(s: &str) -> TimeSlot {
    s.parse()
        .unwrap_or_else(|e| panic!("invalid slot in test: {e}"))
}

/// Creates a "Valid From" composer in the test time zone.
#[must_use]
pub fn test_composer<E: Emitter>(mode: EmitMode, emitter: E) -> DateTimeComposer<E> {
    DateTimeComposer::new("Valid From", mode, emitter).with_time_zone(test_time_zone())
}
