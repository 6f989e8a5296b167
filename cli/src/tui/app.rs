// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, error::Error, io, rc::Rc};

use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{
    self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind,
};
use ratatui::crossterm::execute;
use ratatui::layout::Rect;
use spinform_core::{DatePattern, FieldConfig, PatternError};

use crate::tui::component::{Component, Message};
use crate::tui::dispatcher::Dispatcher;
use crate::tui::event_editor::EventEditor;
use crate::tui::event_store::{EventData, EventDraft, EventStore};

/// Shows the event form seeded with `data`, and returns the validated event if the user saved it.
pub fn draft_event(
    data: EventData,
    pattern: Result<DatePattern, PatternError>,
    config: &FieldConfig,
) -> Result<Option<EventDraft>, Box<dyn Error>> {
    let store = EventStore::new(data, pattern.as_ref().ok().copied());
    let store = run_event_editor(store, pattern, config)?;
    match store.submit {
        true => store.submit_draft().map(Some),
        false => Ok(None),
    }
}

fn run_event_editor(
    store: EventStore,
    pattern: Result<DatePattern, PatternError>,
    config: &FieldConfig,
) -> Result<EventStore, Box<dyn Error>> {
    let store = Rc::new(RefCell::new(store));

    let mut terminal = ratatui::init();
    let result = {
        let mut dispatcher = Dispatcher::new();
        EventStore::register_to(store.clone(), &mut dispatcher);
        let mut editor = EventEditor::new(&store, pattern, config);
        execute!(io::stdout(), EnableBracketedPaste)
            .map_err(Box::<dyn Error>::from)
            .and_then(|()| event_loop(&mut terminal, &mut dispatcher, &mut editor, &store))
    }; // release dispatcher and editor here to avoid borrow conflicts
    if let Err(e) = execute!(io::stdout(), DisableBracketedPaste) {
        tracing::warn!(err = %e, "failed to disable bracketed paste");
    }
    ratatui::restore();
    result?;

    let owned_store = Rc::try_unwrap(store)
        .map_err(|_| "Store still has references")?
        .into_inner();
    Ok(owned_store)
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    dispatcher: &mut Dispatcher,
    editor: &mut EventEditor,
    store: &RefCell<EventStore>,
) -> Result<(), Box<dyn Error>> {
    editor.activate(dispatcher, store);

    let mut area = Rect::default();
    loop {
        terminal.draw(|frame| {
            area = frame.area();
            editor.render(store, area, frame.buffer_mut());
            if let Some(pos) = editor.get_cursor_position(store, area) {
                frame.set_cursor_position(pos);
            }
        })?;

        let msg = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                editor.on_key(dispatcher, store, area, key)
            }
            Event::Paste(text) => editor.on_paste(dispatcher, store, &text),
            _ => None, // resize and friends only need a redraw
        };
        if let Some(Message::Exit) = msg {
            break;
        }
    }

    editor.deactivate(dispatcher, store);
    Ok(())
}
