// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, rc::Rc};

use visitpass_core::TimeSlot;

type Callback = Rc<RefCell<dyn FnMut(&Action)>>;

pub struct Dispatcher {
    subscribers: Vec<Callback>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
        }
    }

    pub fn register(&mut self, callback: Callback) {
        self.subscribers.push(callback);
    }

    pub fn dispatch(&mut self, action: Action) {
        tracing::trace!(?action, "dispatching action");
        for sub in &self.subscribers {
            (sub.borrow_mut())(&action);
        }
    }
}

#[derive(Debug, Clone)]
pub enum Action {
    /// Move the calendar cursor by a number of days.
    MoveCursorDays(i64),
    /// Page the calendar by a number of months.
    MoveCursorMonths(i32),
    /// Select the date under the calendar cursor.
    SelectCursorDate,
    SelectSlot(TimeSlot),
    Confirm,
    /// Clear the date and restore the default slot.
    Reset,
}
