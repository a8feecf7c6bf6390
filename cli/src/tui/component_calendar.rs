// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, rc::Rc};

use ratatui::crossterm::event::KeyCode;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use visitpass_core::WEEKDAY_HEADERS;

use crate::tui::component::{Component, Message};
use crate::tui::composer_store::ComposerStore;
use crate::tui::dispatcher::{Action, Dispatcher};

/// Width of one day cell, two digits and a gap.
const CELL_WIDTH: u16 = 3;

/// Month-grid calendar. Arrow keys move the cursor, Enter or Space selects the day.
#[derive(Debug, Default)]
pub struct Calendar {
    active: bool,
}

impl Calendar {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Component<ComposerStore> for Calendar {
    fn render(&self, store: &Rc<RefCell<ComposerStore>>, area: Rect, buf: &mut Buffer) {
        let store = store.borrow();
        let cursor = store.month.cursor();
        let selected = store.composer.date();

        let mut lines = vec![
            Line::from(store.month.title()).bold().centered(),
            Line::from(WEEKDAY_HEADERS.join(" ")).dark_gray(),
        ];

        for week in store.month.weeks() {
            let spans = week.iter().map(|day| match day {
                Some(day) => {
                    let mut style = Style::default();
                    if Some(*day) == selected {
                        style = style.reversed();
                    }
                    if *day == cursor && self.active {
                        style = style.fg(Color::Blue).bold().underlined();
                    }
                    Span::styled(format!("{:>2} ", day.day()), style)
                }
                None => Span::raw("   "),
            });
            lines.push(Line::from(spans.collect::<Vec<_>>()));
        }

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

        let (row, col) = store.borrow().month.cursor_cell();
        let x = area.x + col as u16 * CELL_WIDTH;
        let y = area.y + 2 + row as u16; // title and weekday header
        Some((x, y))
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        _store: &Rc<RefCell<ComposerStore>>,
        _area: Rect,
        key: KeyCode,
    ) -> Option<Message> {
        if !self.active {
            return None;
        }

        let action = match key {
            KeyCode::Left | KeyCode::Char('h') => Action::MoveCursorDays(-1),
            KeyCode::Right | KeyCode::Char('l') => Action::MoveCursorDays(1),
            KeyCode::Up | KeyCode::Char('k') => Action::MoveCursorDays(-7),
            KeyCode::Down | KeyCode::Char('j') => Action::MoveCursorDays(7),
            KeyCode::PageUp | KeyCode::Char('<') => Action::MoveCursorMonths(-1),
            KeyCode::PageDown | KeyCode::Char('>') => Action::MoveCursorMonths(1),
            KeyCode::Enter | KeyCode::Char(' ') => Action::SelectCursorDate,
            _ => return None,
        };
        dispatcher.dispatch(action);
        Some(Message::Handled)
    }

    fn activate(&mut self, _dispatcher: &mut Dispatcher, _store: &Rc<RefCell<ComposerStore>>) {
        self.active = true;
    }

    fn deactivate(&mut self, _dispatcher: &mut Dispatcher, _store: &Rc<RefCell<ComposerStore>>) {
        self.active = false;
    }
}
