// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use visitpass_core::{EmitMode, SLOTS_PER_DAY, TimeSlot};

use crate::common::{Recorder, test_composer};

#[test]
fn slot_table_covers_the_day() {
    let labels: Vec<String> = TimeSlot::all().iter().map(ToString::to_string).collect();
    assert_eq!(labels.len(), SLOTS_PER_DAY);
    assert_eq!(labels[0], "00:00");
    assert_eq!(labels[1], "00:15");
    assert_eq!(labels[40], "10:00");
    assert_eq!(labels[95], "23:45");

    let minutes: Vec<i32> = TimeSlot::all()
        .iter()
        .map(|s| s.hour() as i32 * 60 + s.minute() as i32)
        .collect();
    assert!(minutes.windows(2).all(|w| w[1] - w[0] == 15));
}

#[test]
fn every_composer_starts_at_ten() {
    for mode in [EmitMode::Live, EmitMode::Confirm] {
        let composer = test_composer(mode, Recorder::new());
        assert_eq!(composer.slot(), TimeSlot::DEFAULT);
        assert_eq!(composer.slot().to_string(), "10:00");
    }
}
