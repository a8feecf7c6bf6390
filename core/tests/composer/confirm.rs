// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::date;
use visitpass_core::EmitMode;

use crate::common::{Recorder, slot, test_composer, test_time_zone};

#[test]
fn confirm_before_date_reports_nothing() {
    let recorder = Recorder::new();
    let mut composer = test_composer(EmitMode::Confirm, recorder.clone());

    assert!(!composer.can_confirm());
    assert!(!composer.confirm());
    composer.select_slot(slot("14:30"));
    assert!(!composer.confirm());
    assert_eq!(recorder.count(), 0);
}

#[test]
fn confirm_reports_exactly_once() {
    let recorder = Recorder::new();
    let mut composer = test_composer(EmitMode::Confirm, recorder.clone());

    composer.select_date(date(2025, 3, 10));
    composer.select_slot(slot("14:30"));
    assert_eq!(recorder.count(), 0);

    assert!(composer.can_confirm());
    assert!(composer.confirm());

    let calls = recorder.calls();
    assert_eq!(calls.len(), 1);

    let expected = date(2025, 3, 10)
        .at(14, 30, 0, 0)
        .to_zoned(test_time_zone())
        .unwrap();
    assert_eq!(calls[0].as_zoned(), &expected);
    assert_eq!(calls[0].to_iso8601(), "2025-03-10T14:30:00+01:00");
}

#[test]
fn confirm_after_reset_is_disabled_again() {
    let recorder = Recorder::new();
    let mut composer = test_composer(EmitMode::Confirm, recorder.clone());

    composer.select_date(date(2025, 3, 10));
    composer.reset();
    assert!(!composer.can_confirm());
    assert!(!composer.confirm());
    assert_eq!(recorder.count(), 0);
    assert_eq!(composer.slot().to_string(), "10:00");
}

#[test]
fn confirm_uses_latest_selection() {
    let recorder = Recorder::new();
    let mut composer = test_composer(EmitMode::Confirm, recorder.clone());

    composer.select_date(date(2025, 3, 10));
    composer.select_slot(slot("14:30"));
    composer.select_date(date(2025, 3, 11));
    composer.select_slot(slot("08:00"));
    composer.confirm();

    let last = recorder.last().unwrap();
    assert_eq!(recorder.count(), 1);
    assert_eq!(last.date(), date(2025, 3, 11));
    assert_eq!(last.slot(), slot("08:00"));
}
