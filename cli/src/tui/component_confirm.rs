// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, rc::Rc};

use ratatui::crossterm::event::KeyCode;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::tui::component::{Component, Message};
use crate::tui::composer_store::ComposerStore;
use crate::tui::dispatcher::{Action, Dispatcher};

const LABEL: &str = "[ Confirm ]";

/// Button that reports the composed value in confirm mode. Disabled until a date is chosen.
#[derive(Debug, Default)]
pub struct ConfirmButton {
    active: bool,
}

impl ConfirmButton {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Component<ComposerStore> for ConfirmButton {
    fn render(&self, store: &Rc<RefCell<ComposerStore>>, area: Rect, buf: &mut Buffer) {
        let enabled = store.borrow().composer.can_confirm();
        let style = match (enabled, self.active) {
            (false, _) => Style::default().dark_gray(),
            (true, true) => Style::default().reversed().fg(Color::Blue),
            (true, false) => Style::default().bold(),
        };
        Paragraph::new(Line::styled(LABEL, style))
            .right_aligned()
            .render(area, buf);
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &Rc<RefCell<ComposerStore>>,
        _area: Rect,
        key: KeyCode,
    ) -> Option<Message> {
        if !self.active {
            return None;
        }

        match key {
            KeyCode::Enter | KeyCode::Char(' ') => {
                dispatcher.dispatch(Action::Confirm);
                match store.borrow().confirmed {
                    true => Some(Message::Exit),
                    false => Some(Message::Handled),
                }
            }
            _ => None,
        }
    }

    fn activate(&mut self, _dispatcher: &mut Dispatcher, _store: &Rc<RefCell<ComposerStore>>) {
        self.active = true;
    }

    fn deactivate(&mut self, _dispatcher: &mut Dispatcher, _store: &Rc<RefCell<ComposerStore>>) {
        self.active = false;
    }
}
