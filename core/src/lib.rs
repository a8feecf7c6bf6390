// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Core of visitpass: composing a calendar date and a quarter-hour time slot into one timestamp.

mod calendar;
mod composer;
mod config;
mod emitter;
mod preapproval;
mod session;
mod slot;
mod timestamp;

pub use crate::calendar::{MonthView, WEEKDAY_HEADERS, Week};
pub use crate::composer::{DateTimeComposer, EmitMode};
pub use crate::config::{APP_NAME, Config};
pub use crate::emitter::{ChannelEmitter, Emitter};
pub use crate::preapproval::PreApprovalRequest;
pub use crate::session::Identity;
pub use crate::slot::{SLOT_MINUTES, SLOTS_PER_DAY, TimeSlot};
pub use crate::timestamp::{ComposedTimestamp, DISPLAY_FORMAT, ISO8601_FORMAT};
