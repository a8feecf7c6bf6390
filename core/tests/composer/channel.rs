// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::date;
use visitpass_core::{ChannelEmitter, EmitMode};

use crate::common::{slot, test_composer};

#[tokio::test]
async fn channel_receives_live_values_in_order() {
    let (emitter, mut rx) = ChannelEmitter::channel();
    let mut composer = test_composer(EmitMode::Live, emitter);

    composer.select_date(date(2025, 1, 1));
    composer.select_slot(slot("09:15"));
    drop(composer);

    let first = rx.recv().await.unwrap();
    let second = rx.recv().await.unwrap();
    assert_eq!(first.slot(), slot("10:00"));
    assert_eq!(second.slot(), slot("09:15"));
    assert!(rx.recv().await.is_none());
}
