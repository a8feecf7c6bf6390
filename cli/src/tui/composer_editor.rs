// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, rc::Rc};

use ratatui::crossterm::event::KeyCode;
use ratatui::layout::Flex;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use visitpass_core::EmitMode;

use crate::tui::component::{Component, Message};
use crate::tui::component_calendar::Calendar;
use crate::tui::component_confirm::ConfirmButton;
use crate::tui::component_page::SinglePage;
use crate::tui::component_slots::SlotList;
use crate::tui::composer_store::ComposerStore;
use crate::tui::dispatcher::{Action, Dispatcher};

pub type ComposerEditor = SinglePage<ComposerStore, ComposerPanel>;

/// Builds the full-screen picker, titled with the composer's label.
pub fn new_composer_editor(label: &str, mode: EmitMode) -> ComposerEditor {
    SinglePage::new(label.to_owned(), instructions(mode), ComposerPanel::new(mode))
}

fn instructions(mode: EmitMode) -> Line<'static> {
    let mut spans = vec![
        " Move ".into(),
        "<Arrows>".blue().bold(),
        " Pick ".into(),
        "<Enter>".blue().bold(),
        " Focus ".into(),
        "<Tab>".blue().bold(),
        " Clear ".into(),
        "<Del>".blue().bold(),
    ];
    match mode {
        EmitMode::Live => spans.extend([" Done ".into(), "<Esc> ".blue().bold()]),
        EmitMode::Confirm => spans.extend([" Cancel ".into(), "<Esc> ".blue().bold()]),
    }
    Line::from(spans)
}

/// Calendar on the left, slot list on the right, selection summary and confirm button below.
pub struct ComposerPanel {
    items: Vec<Box<dyn Component<ComposerStore>>>,
    item_index: usize,
}

impl ComposerPanel {
    pub fn new(mode: EmitMode) -> Self {
        let mut items: Vec<Box<dyn Component<ComposerStore>>> =
            vec![Box::new(Calendar::new()), Box::new(SlotList::new())];
        if mode == EmitMode::Confirm {
            items.push(Box::new(ConfirmButton::new()));
        }

        Self {
            items,
            item_index: 0,
        }
    }

    /// Areas of the calendar, the slot list, the selection line and the confirm button.
    fn layout(area: Rect) -> [Rect; 4] {
        let [body, selected, button] = Layout::vertical([
            Constraint::Min(8),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .margin(1)
        .areas(area);

        let [calendar, _, slots] = Layout::horizontal([
            Constraint::Length(21),
            Constraint::Length(3),
            Constraint::Length(9),
        ])
        .flex(Flex::Center)
        .areas(body);

        [calendar, slots, selected, button]
    }

    fn item_area(&self, area: Rect, index: usize) -> Rect {
        let [calendar, slots, _, button] = Self::layout(area);
        match index {
            0 => calendar,
            1 => slots,
            _ => button,
        }
    }

    fn navigate(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &Rc<RefCell<ComposerStore>>,
        offset: isize,
    ) {
        if let Some(a) = self.items.get_mut(self.item_index) {
            a.deactivate(dispatcher, store);
        }

        let len = self.items.len() as isize;
        self.item_index = (self.item_index as isize + offset).rem_euclid(len) as usize;

        if let Some(a) = self.items.get_mut(self.item_index) {
            a.activate(dispatcher, store);
        }
    }
}

impl Component<ComposerStore> for ComposerPanel {
    fn render(&self, store: &Rc<RefCell<ComposerStore>>, area: Rect, buf: &mut Buffer) {
        for (index, item) in self.items.iter().enumerate() {
            item.render(store, self.item_area(area, index), buf);
        }

        let [_, _, selected, _] = Self::layout(area);
        let line = match store.borrow().composer.selected_label() {
            Some(label) => Line::from(vec!["Selected: ".into(), label.bold()]),
            None => Line::from("Selected: none".dark_gray()),
        };
        Paragraph::new(line).render(selected, buf);
    }

    fn get_cursor_position(
        &self,
        store: &Rc<RefCell<ComposerStore>>,
        area: Rect,
    ) -> Option<(u16, u16)> {
        let subarea = self.item_area(area, self.item_index);
        self.items
            .get(self.item_index)
            .and_then(|item| item.get_cursor_position(store, subarea))
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &Rc<RefCell<ComposerStore>>,
        area: Rect,
        key: KeyCode,
    ) -> Option<Message> {
        let subarea = self.item_area(area, self.item_index);
        if let Some(item) = self.items.get_mut(self.item_index)
            && let Some(msg) = item.on_key(dispatcher, store, subarea, key)
        {
            return Some(msg);
        }

        match key {
            KeyCode::Tab => {
                self.navigate(dispatcher, store, 1);
                Some(Message::Handled)
            }
            KeyCode::BackTab => {
                self.navigate(dispatcher, store, -1);
                Some(Message::Handled)
            }
            KeyCode::Delete | KeyCode::Backspace => {
                dispatcher.dispatch(Action::Reset);
                Some(Message::Handled)
            }
            _ => None,
        }
    }

    fn activate(&mut self, dispatcher: &mut Dispatcher, store: &Rc<RefCell<ComposerStore>>) {
        if let Some(item) = self.items.get_mut(self.item_index) {
            item.activate(dispatcher, store);
        }
    }

    fn deactivate(&mut self, dispatcher: &mut Dispatcher, store: &Rc<RefCell<ComposerStore>>) {
        if let Some(item) = self.items.get_mut(self.item_index) {
            item.deactivate(dispatcher, store);
        }
    }
}
