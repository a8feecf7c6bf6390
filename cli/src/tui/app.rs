// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, error::Error, rc::Rc};

use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{self, Event, KeyEventKind};
use tokio::sync::mpsc::UnboundedReceiver;
use visitpass_core::{ChannelEmitter, ComposedTimestamp, DateTimeComposer, EmitMode};

use crate::tui::component::{Component, Message};
use crate::tui::composer_editor::{ComposerEditor, new_composer_editor};
use crate::tui::composer_store::ComposerStore;
use crate::tui::dispatcher::Dispatcher;

/// Runs the picker full screen until the user leaves it.
///
/// Returns the value on screen when leaving in live mode, the confirmed value in confirm mode.
/// `None` when there is no date or the user cancelled.
pub fn pick_datetime(
    composer: DateTimeComposer<ChannelEmitter>,
    rx: UnboundedReceiver<ComposedTimestamp>,
) -> Result<Option<ComposedTimestamp>, Box<dyn Error>> {
    let label = composer.label().to_owned();
    let mode = composer.mode();
    let store = Rc::new(RefCell::new(ComposerStore::new(composer)));

    let mut terminal = ratatui::init();
    let result = {
        let mut dispatcher = Dispatcher::new();
        ComposerStore::register_to(store.clone(), &mut dispatcher);
        let mut editor = new_composer_editor(&label, mode);
        editor.activate(&mut dispatcher, &store);

        run_loop(&mut editor, &mut dispatcher, &store, &mut terminal)
    }; // release dispatcher and editor here to avoid borrow conflicts
    ratatui::restore();
    result?;

    let store = Rc::try_unwrap(store)
        .map_err(|_| "Store still has references")?
        .into_inner();
    Ok(picked_value(store, rx))
}

/// Resolves what the picker hands back once it is closed.
fn picked_value(
    store: ComposerStore,
    mut rx: UnboundedReceiver<ComposedTimestamp>,
) -> Option<ComposedTimestamp> {
    let label = store.composer.label().to_owned();
    let current = store.composer.compose();
    let mode = store.composer.mode();
    let confirmed = store.confirmed;
    drop(store); // close the channel so draining terminates

    let mut last = None;
    while let Ok(value) = rx.try_recv() {
        tracing::debug!(%label, %value, "reported");
        last = Some(value);
    }

    let picked = match mode {
        EmitMode::Live => current,
        EmitMode::Confirm if confirmed => last,
        EmitMode::Confirm => None,
    };
    match &picked {
        Some(value) => tracing::info!(%label, %value, "picked"),
        None => tracing::info!(%label, "picker left without a value"),
    }
    picked
}

fn run_loop(
    editor: &mut ComposerEditor,
    dispatcher: &mut Dispatcher,
    store: &Rc<RefCell<ComposerStore>>,
    terminal: &mut DefaultTerminal,
) -> Result<(), Box<dyn Error>> {
    let mut dirty = true;
    loop {
        if dirty {
            terminal.draw(|frame| {
                let area = frame.area();
                editor.render(store, area, frame.buffer_mut());
                if let Some(pos) = editor.get_cursor_position(store, area) {
                    frame.set_cursor_position(pos);
                }
            })?;
        }

        let area = terminal.get_frame().area();
        dirty = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                match editor.on_key(dispatcher, store, area, key.code) {
                    Some(Message::Exit) => return Ok(()),
                    Some(Message::Handled) => true,
                    None => false, // unbound key, nothing changed
                }
            }
            Event::Resize(..) => true,
            _ => false,
        };
    }
}
