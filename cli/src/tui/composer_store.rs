// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, rc::Rc};

use visitpass_core::{ChannelEmitter, DateTimeComposer, MonthView};

use crate::tui::dispatcher::{Action, Dispatcher};

#[derive(Debug)]
pub struct ComposerStore {
    pub composer: DateTimeComposer<ChannelEmitter>,
    pub month: MonthView,

    /// Whether the user confirmed the selection
    pub confirmed: bool,
}

impl ComposerStore {
    /// Takes over the composer and mounts it, reporting a seeded value in live mode.
    pub fn new(mut composer: DateTimeComposer<ChannelEmitter>) -> Self {
        composer.mount();
        Self {
            month: MonthView::open_at(composer.date()),
            composer,
            confirmed: false,
        }
    }

    pub fn register_to(that: Rc<RefCell<Self>>, dispatcher: &mut Dispatcher) {
        let callback = Rc::new(RefCell::new(move |action: &Action| match action {
            Action::MoveCursorDays(v) => {
                let mut that = that.borrow_mut();
                that.month.move_days(*v);
            }
            Action::MoveCursorMonths(v) => {
                let mut that = that.borrow_mut();
                that.month.move_months(*v);
            }
            Action::SelectCursorDate => {
                let mut that = that.borrow_mut();
                let date = that.month.cursor();
                that.composer.select_date(date);
            }
            Action::SelectSlot(v) => {
                let mut that = that.borrow_mut();
                that.composer.select_slot(*v);
            }
            Action::Confirm => {
                let mut that = that.borrow_mut();
                if that.composer.confirm() {
                    that.confirmed = true;
                }
            }
            Action::Reset => {
                let mut that = that.borrow_mut();
                that.composer.reset();
            }
        }));
        dispatcher.register(callback);
    }
}
