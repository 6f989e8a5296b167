// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, rc::Rc};

use ratatui::crossterm::event::KeyEvent;
use ratatui::prelude::*;
use spinform_core::{DatePattern, FieldConfig, OverlayManager, PatternError};

use crate::tui::component::{Component, Message};
use crate::tui::component_form::{Access, Form, FormItem, Input};
use crate::tui::component_page::SinglePage;
use crate::tui::date_field::DateField;
use crate::tui::dispatcher::{Action, Dispatcher};
use crate::tui::event_store::EventStore;
use crate::tui::time_field::TimeField;

type EventForm = Form<EventStore, Box<dyn FormItem<EventStore>>>;

/// The page for filling in a new event.
pub struct EventEditor(SinglePage<EventStore, EventForm>);

impl EventEditor {
    pub fn new(
        store: &RefCell<EventStore>,
        pattern: Result<DatePattern, PatternError>,
        config: &FieldConfig,
    ) -> Self {
        // one overlay manager per form, so that at most one picker is open
        let overlays = Rc::new(RefCell::new(OverlayManager::new()));
        let items: Vec<Box<dyn FormItem<EventStore>>> = vec![
            Box::new(Input::<EventStore, SummaryAccess>::new("Summary")),
            Box::new(DateField::<EventStore, DateAccess>::new(
                "Date",
                store,
                pattern,
                config,
                overlays.clone(),
            )),
            Box::new(TimeField::<EventStore, StartAccess>::new(
                "Start",
                store,
                config,
                overlays.clone(),
            )),
            Box::new(TimeField::<EventStore, EndAccess>::new(
                "End", store, config, overlays,
            )),
        ];
        Self(SinglePage::new("New Event", Form::new(items)))
    }
}

impl Component<EventStore> for EventEditor {
    fn render(&self, store: &RefCell<EventStore>, area: Rect, buf: &mut Buffer) {
        self.0.render(store, area, buf);
    }

    fn get_cursor_position(&self, store: &RefCell<EventStore>, area: Rect) -> Option<(u16, u16)> {
        self.0.get_cursor_position(store, area)
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<EventStore>,
        area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        self.0.on_key(dispatcher, store, area, event)
    }

    fn on_paste(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<EventStore>,
        text: &str,
    ) -> Option<Message> {
        self.0.on_paste(dispatcher, store, text)
    }

    fn activate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<EventStore>) {
        self.0.activate(dispatcher, store);
    }

    fn deactivate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<EventStore>) {
        self.0.deactivate(dispatcher, store);
    }
}

macro_rules! field_access {
    ($acc: ident, $field: ident, $action: ident) => {
        struct $acc;

        impl Access<EventStore, String> for $acc {
            fn get(store: &RefCell<EventStore>) -> String {
                store.borrow().data.$field.clone()
            }

            fn set(dispatcher: &mut Dispatcher, value: String) -> bool {
                dispatcher.dispatch(&Action::$action(value));
                true
            }
        }
    };
}

field_access!(SummaryAccess, summary, UpdateSummary);
field_access!(DateAccess, date, UpdateDate);
field_access!(StartAccess, start, UpdateStart);
field_access!(EndAccess, end, UpdateEnd);

#[cfg(test)]
mod tests {
    use ratatui::crossterm::event::{KeyCode, KeyModifiers};

    use crate::tui::event_store::EventData;

    use super::*;

    const AREA: Rect = Rect::new(0, 0, 60, 20);

    struct Harness {
        store: Rc<RefCell<EventStore>>,
        dispatcher: Dispatcher,
        editor: EventEditor,
    }

    impl Harness {
        fn new(date: &str) -> Self {
            Self::with(EventData {
                date: date.to_string(),
                ..Default::default()
            })
        }

        fn with(data: EventData) -> Self {
            let pattern = DatePattern::default();
            let store = Rc::new(RefCell::new(EventStore::new(data, Some(pattern))));
            let mut dispatcher = Dispatcher::new();
            EventStore::register_to(store.clone(), &mut dispatcher);
            let mut editor = EventEditor::new(&store, Ok(pattern), &FieldConfig::default());
            editor.activate(&mut dispatcher, &store);
            Self {
                store,
                dispatcher,
                editor,
            }
        }

        fn press(&mut self, code: KeyCode) -> Option<Message> {
            let event = KeyEvent::new(code, KeyModifiers::NONE);
            self.editor
                .on_key(&mut self.dispatcher, &self.store, AREA, event)
        }

        fn type_str(&mut self, text: &str) {
            for c in text.chars() {
                self.press(KeyCode::Char(c));
            }
        }

        fn date(&self) -> String {
            self.store.borrow().data.date.clone()
        }
    }

    #[test]
    fn typing_into_the_date_field_updates_the_store() {
        let mut h = Harness::new("");
        h.press(KeyCode::Tab);
        h.type_str("12");
        assert_eq!(h.date(), "12/DD/YYYY");
        h.press(KeyCode::Right);
        h.type_str("25");
        h.press(KeyCode::Right);
        h.type_str("2023");
        assert_eq!(h.date(), "12/25/2023");

        h.press(KeyCode::Down);
        assert_eq!(h.date(), "12/25/2022");
        h.press(KeyCode::Backspace);
        assert_eq!(h.date(), "12/25/YYYY");
    }

    #[test]
    fn picker_selects_a_date_and_escape_keeps_the_form_open() {
        let mut h = Harness::new("12/24/2023");
        h.press(KeyCode::Tab);

        assert_eq!(h.press(KeyCode::Char(' ')), Some(Message::Handled));
        assert_eq!(h.press(KeyCode::Up), Some(Message::Handled));
        assert_eq!(h.press(KeyCode::Enter), Some(Message::CursorUpdated));
        assert_eq!(h.date(), "12/17/2023");
        assert!(!h.store.borrow().submit);

        h.press(KeyCode::Char(' '));
        h.press(KeyCode::Right);
        assert_eq!(h.press(KeyCode::Esc), Some(Message::CursorUpdated));
        assert_eq!(h.date(), "12/17/2023");
    }

    #[test]
    fn paste_goes_to_the_focused_segment() {
        let mut h = Harness::new("01/05/2024");
        h.press(KeyCode::Tab);
        h.press(KeyCode::Right);
        let msg = h.editor.on_paste(&mut h.dispatcher, &h.store, "day 19");
        assert_eq!(msg, Some(Message::CursorUpdated));
        assert_eq!(h.date(), "01/19/2024");
    }

    #[test]
    fn times_are_entered_and_submitted() {
        let mut h = Harness::new("12/25/2023");
        h.type_str("Review");
        h.press(KeyCode::Tab);
        h.press(KeyCode::Tab);
        h.type_str("09");
        h.press(KeyCode::Right);
        h.type_str("30");
        h.press(KeyCode::Tab);
        h.type_str("10");
        h.press(KeyCode::Right);
        h.type_str("15");
        assert_eq!(h.press(KeyCode::Enter), Some(Message::Exit));

        let store = h.store.borrow();
        assert_eq!(store.data.summary, "Review");
        assert_eq!(store.data.start, "09:30");
        assert_eq!(store.data.end, "10:15");
        assert!(store.submit);
    }

    #[test]
    fn time_picker_writes_the_selection() {
        let mut h = Harness::with(EventData {
            date: "12/25/2023".to_string(),
            start: "09:00".to_string(),
            ..Default::default()
        });
        h.press(KeyCode::Tab);
        h.press(KeyCode::Tab);

        assert_eq!(h.press(KeyCode::Char(' ')), Some(Message::Handled));
        h.press(KeyCode::Down);
        h.press(KeyCode::Right);
        h.press(KeyCode::Down);
        assert_eq!(h.store.borrow().data.start, "09:00");
        assert_eq!(h.press(KeyCode::Enter), Some(Message::CursorUpdated));
        assert_eq!(h.store.borrow().data.start, "10:01");
        assert!(!h.store.borrow().submit);
    }

    #[test]
    fn fields_follow_values_changed_elsewhere() {
        let mut h = Harness::new("12/25/2023");
        h.press(KeyCode::Tab);
        h.dispatcher
            .dispatch(&Action::UpdateDate("01/15/2024".to_string()));
        h.press(KeyCode::Up);
        assert_eq!(h.date(), "02/15/2024");

        h.press(KeyCode::Tab);
        h.dispatcher
            .dispatch(&Action::UpdateStart("08:30".to_string()));
        h.press(KeyCode::Right);
        h.press(KeyCode::Up);
        assert_eq!(h.store.borrow().data.start, "08:31");
    }

    #[test]
    fn invalid_pattern_shows_placeholder() {
        let store = Rc::new(RefCell::new(EventStore::new(EventData::default(), None)));
        let pattern = "YYYY-MM/DD".parse::<DatePattern>();
        let editor = EventEditor::new(&store, pattern, &FieldConfig::default());

        let mut buf = Buffer::empty(AREA);
        editor.render(&store, AREA, &mut buf);
        let text: String = (0..AREA.height)
            .flat_map(|y| (0..AREA.width).map(move |x| (x, y)))
            .map(|pos| buf[pos].symbol().to_owned())
            .collect();
        assert!(text.contains("Mismatched separators"));
    }
}
