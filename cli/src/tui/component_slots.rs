// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, rc::Rc};

use ratatui::crossterm::event::KeyCode;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use visitpass_core::{SLOTS_PER_DAY, TimeSlot};

use crate::tui::component::{Component, Message};
use crate::tui::composer_store::ComposerStore;
use crate::tui::dispatcher::{Action, Dispatcher};

/// Scrollable list of the quarter-hour slots. The highlighted entry is the selected slot.
#[derive(Debug, Default)]
pub struct SlotList {
    active: bool,
}

impl SlotList {
    pub fn new() -> Self {
        Self::default()
    }

    /// First visible slot index, keeping the selection centered where possible.
    fn window_start(selected: usize, height: usize) -> usize {
        if height >= SLOTS_PER_DAY {
            return 0;
        }
        let start = selected.saturating_sub(height / 2);
        start.min(SLOTS_PER_DAY - height)
    }
}

impl Component<ComposerStore> for SlotList {
    fn render(&self, store: &Rc<RefCell<ComposerStore>>, area: Rect, buf: &mut Buffer) {
        let selected = store.borrow().composer.slot();
        let height = area.height as usize;
        let start = Self::window_start(selected.index(), height);

        let lines = TimeSlot::all()
            .iter()
            .skip(start)
            .take(height)
            .map(|slot| {
                let text = format!(" {slot} ");
                if *slot != selected {
                    Line::from(text)
                } else if self.active {
                    Line::from(text.reversed().fg(Color::Blue))
                } else {
                    Line::from(text.reversed())
                }
            })
            .collect::<Vec<_>>();

        Paragraph::new(lines).render(area, buf);
    }

    fn get_cursor_position(
        &self,
        store: &Rc<RefCell<ComposerStore>>,
        area: Rect,
    ) -> Option<(u16, u16)> {
        if !self.active {
            return None;
        }

        let index = store.borrow().composer.slot().index();
        let start = Self::window_start(index, area.height as usize);
        Some((area.x + 1, area.y + (index - start) as u16))
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &Rc<RefCell<ComposerStore>>,
        area: Rect,
        key: KeyCode,
    ) -> Option<Message> {
        if !self.active {
            return None;
        }

        let current = store.borrow().composer.slot();
        let page = (area.height as usize).max(1);
        let target = match key {
            KeyCode::Up | KeyCode::Char('k') => current.prev(),
            KeyCode::Down | KeyCode::Char('j') => current.next(),
            KeyCode::PageUp => TimeSlot::from_index(current.index().saturating_sub(page)),
            KeyCode::PageDown => {
                TimeSlot::from_index((current.index() + page).min(SLOTS_PER_DAY - 1))
            }
            KeyCode::Home => TimeSlot::from_index(0),
            KeyCode::End => TimeSlot::from_index(SLOTS_PER_DAY - 1),
            _ => return None,
        };

        // Keys at either end of the day are swallowed without a selection change
        if let Some(slot) = target {
            dispatcher.dispatch(Action::SelectSlot(slot));
        }
        Some(Message::Handled)
    }

    fn activate(&mut self, _dispatcher: &mut Dispatcher, _store: &Rc<RefCell<ComposerStore>>) {
        self.active = true;
    }

    fn deactivate(&mut self, _dispatcher: &mut Dispatcher, _store: &Rc<RefCell<ComposerStore>>) {
        self.active = false;
    }
}
