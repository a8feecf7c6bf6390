// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::{date, time};
use visitpass_core::EmitMode;

use crate::common::{Recorder, slot, test_composer, test_time_zone};

#[test]
fn live_reports_each_change_once_date_is_set() {
    let recorder = Recorder::new();
    let mut composer = test_composer(EmitMode::Live, recorder.clone());

    composer.select_date(date(2025, 1, 1));
    composer.select_slot(slot("09:15"));

    let calls = recorder.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].date(), date(2025, 1, 1));
    assert_eq!(calls[0].as_zoned().time(), time(10, 0, 0, 0));
    assert_eq!(calls[1].date(), date(2025, 1, 1));
    assert_eq!(calls[1].as_zoned().time(), time(9, 15, 0, 0));
}

#[test]
fn live_withholds_slot_changes_before_date() {
    let recorder = Recorder::new();
    let mut composer = test_composer(EmitMode::Live, recorder.clone());

    composer.select_slot(slot("08:00"));
    composer.select_slot(slot("08:15"));
    assert_eq!(recorder.count(), 0);

    composer.select_date(date(2025, 5, 20));
    let last = recorder.last().unwrap();
    assert_eq!(recorder.count(), 1);
    assert_eq!(last.slot(), slot("08:15"));
}

#[test]
fn live_last_value_tracks_latest_selection() {
    let recorder = Recorder::new();
    let mut composer = test_composer(EmitMode::Live, recorder.clone());

    let days = [date(2024, 2, 29), date(2025, 12, 31), date(2026, 7, 4)];
    let slots = ["00:00", "12:45", "23:45"];
    for d in days {
        for s in slots {
            composer.select_date(d);
            composer.select_slot(slot(s));

            let last = recorder.last().unwrap();
            let zoned = last.as_zoned();
            assert_eq!(zoned.date(), d);
            assert_eq!(zoned.time(), slot(s).time());
            assert_eq!(zoned.second(), 0);
            assert_eq!(zoned.subsec_nanosecond(), 0);
        }
    }
}

#[test]
fn live_selected_label_follows_state() {
    let recorder = Recorder::new();
    let mut composer = test_composer(EmitMode::Live, recorder.clone());
    assert_eq!(composer.selected_label(), None);

    composer.select_date(date(2025, 3, 10));
    composer.select_slot(slot("14:30"));
    assert_eq!(
        composer.selected_label().as_deref(),
        Some("Mar 10, 2025, 2:30:00 PM")
    );
    assert_eq!(
        composer.selected_label(),
        recorder.last().map(|a| a.display_label())
    );
}

#[test]
fn composing_is_idempotent() {
    let mut composer = test_composer(EmitMode::Live, Recorder::new());
    composer.select_date(date(2025, 3, 10));
    composer.select_slot(slot("14:30"));
    composer.select_slot(slot("14:30"));

    let a = composer.compose().unwrap();
    let b = composer.compose().unwrap();
    assert_eq!(a, b);
    assert_eq!(a.as_zoned().timestamp(), b.as_zoned().timestamp());
    assert_eq!(a.to_iso8601(), b.to_iso8601());
}

#[test]
fn live_seeded_composer_reports_seed_first() {
    let recorder = Recorder::new();
    let seed = date(2025, 3, 10)
        .at(14, 30, 0, 0)
        .to_zoned(test_time_zone())
        .unwrap();
    let mut composer = test_composer(EmitMode::Live, recorder.clone()).with_initial_value(&seed);
    assert_eq!(recorder.count(), 0);

    composer.mount();
    composer.select_slot(slot("15:00"));

    let calls = recorder.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].as_zoned(), &seed);
    assert_eq!(calls[0].display_label(), "Mar 10, 2025, 2:30:00 PM");
    assert_eq!(calls[1].as_zoned().time(), time(15, 0, 0, 0));
}
