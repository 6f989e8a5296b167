// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, marker::PhantomData, rc::Rc};

use ratatui::crossterm::event::KeyEvent;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use spinform_core::{
    DateInput, DatePattern, DatePicker, FieldConfig, InputOutcome, Key, KeyPress, OverlayManager,
    PatternError, PickerOutcome,
};

use crate::tui::component::{Component, Message};
use crate::tui::component_form::{Access, FormItem, FormItemState};
use crate::tui::dispatcher::Dispatcher;
use crate::tui::keymap::key_press;
use crate::tui::widgets::{render_calendar, segment_offset, segments_line};

/// A form item editing a date through year, month and day segments, with a calendar popup.
pub struct DateField<S, A: Access<S, String>> {
    title: String,
    input: Result<DateInput, PatternError>,
    picker: DatePicker,
    overlays: Rc<RefCell<OverlayManager>>,
    active: bool,

    /// The store value the input was last synced with.
    synced: String,

    _phantom_s: PhantomData<S>,
    _phantom_a: PhantomData<A>,
}

impl<S, A: Access<S, String>> DateField<S, A> {
    pub fn new(
        title: impl ToString,
        store: &RefCell<S>,
        pattern: Result<DatePattern, PatternError>,
        config: &FieldConfig,
        overlays: Rc<RefCell<OverlayManager>>,
    ) -> Self {
        let picker = DatePicker::from_config(&mut overlays.borrow_mut(), config);
        let mut input = pattern.map(DateInput::new);
        if let Ok(input) = &mut input {
            input.set_required(true);
        }

        let mut field = Self {
            title: title.to_string(),
            input,
            picker,
            overlays,
            active: false,
            synced: String::new(),
            _phantom_s: PhantomData,
            _phantom_a: PhantomData,
        };
        field.sync(store);
        field
    }

    /// Takes the store value into the input when it changed outside this field.
    fn sync(&mut self, store: &RefCell<S>) {
        let value = A::get(store);
        if value == self.synced {
            return;
        }

        if let Ok(input) = &mut self.input {
            input.set_value(&value);
        }
        self.synced = value;
    }

    fn edit(&mut self, f: impl FnOnce(&mut DateInput) -> InputOutcome) -> InputOutcome {
        match &mut self.input {
            Ok(input) => f(input),
            Err(_) => InputOutcome::Ignored,
        }
    }

    fn settle(&mut self, dispatcher: &mut Dispatcher, outcome: InputOutcome) -> Option<Message> {
        match outcome {
            InputOutcome::Changed(value) => {
                if A::set(dispatcher, value.clone()) {
                    self.synced = value;
                }
                Some(Message::CursorUpdated)
            }
            InputOutcome::FocusMoved(_) => Some(Message::CursorUpdated),
            InputOutcome::Pending | InputOutcome::Rejected => Some(Message::Handled),
            InputOutcome::Ignored => None,
        }
    }

    fn is_picking(&self) -> bool {
        self.picker.is_open(&self.overlays.borrow())
    }

    fn open_picker(&mut self) {
        let Ok(input) = &self.input else {
            return;
        };
        if input.state().disabled {
            return;
        }

        let anchor = input.date().unwrap_or_else(|| jiff::Zoned::now().date());
        self.picker.open(&mut self.overlays.borrow_mut(), anchor);
    }

    fn on_picker_key(&mut self, dispatcher: &mut Dispatcher, press: KeyPress) -> Message {
        let outcome = self.picker.key(&mut self.overlays.borrow_mut(), press);
        match outcome {
            PickerOutcome::Selected(date) => {
                let outcome = self.edit(|input| input.select_date(date));
                self.settle(dispatcher, outcome);
                Message::CursorUpdated
            }
            PickerOutcome::Closed => Message::CursorUpdated,
            PickerOutcome::Handled | PickerOutcome::Ignored => Message::Handled,
        }
    }
}

impl<S, A: Access<S, String>> Component<S> for DateField<S, A> {
    fn render(&self, _store: &RefCell<S>, area: Rect, buf: &mut Buffer) {
        let line = match &self.input {
            Ok(input) => {
                let focused = self.active.then(|| input.focused());
                segments_line(input.segments(), input.separator(), focused)
            }
            Err(e) => Line::from(e.to_string()).red(),
        };
        Paragraph::new(line).render(area, buf);
    }

    fn get_cursor_position(&self, _store: &RefCell<S>, area: Rect) -> Option<(u16, u16)> {
        let input = self.input.as_ref().ok()?;
        if !self.active || self.is_picking() {
            return None;
        }

        let x = area.x + segment_offset(input.segments(), input.focused()) + 2;
        let y = area.y + 1;
        Some((x, y))
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<S>,
        _area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        if !self.active {
            return None;
        }

        let press = key_press(&event)?;
        self.sync(store);
        if self.is_picking() {
            return Some(self.on_picker_key(dispatcher, press));
        }
        if press.modified {
            return None;
        }

        let outcome = match press.key {
            Key::Char(' ') => {
                self.open_picker();
                return Some(Message::Handled);
            }
            Key::Char(c) => {
                let mut buf = [0; 4];
                let text: &str = c.encode_utf8(&mut buf);
                self.edit(|input| input.input(text))
            }
            Key::Backspace | Key::Delete => self.edit(|input| input.input("")),
            Key::Up | Key::Down | Key::Left | Key::Right => self.edit(|input| input.key(press)),
            _ => return None,
        };

        // arrows at the outermost segments stay inside the field
        let outcome = match (outcome, press.key) {
            (InputOutcome::Ignored, Key::Left | Key::Right) => InputOutcome::Rejected,
            (outcome, _) => outcome,
        };
        self.settle(dispatcher, outcome)
    }

    fn on_paste(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<S>,
        text: &str,
    ) -> Option<Message> {
        if !self.active {
            return None;
        }

        self.sync(store);
        let outcome = self.edit(|input| input.paste(text));
        self.settle(dispatcher, outcome)
    }

    fn activate(&mut self, _dispatcher: &mut Dispatcher, store: &RefCell<S>) {
        self.active = true;
        self.sync(store);
        if let Ok(input) = &mut self.input {
            input.focus(0);
        }
    }

    fn deactivate(&mut self, _dispatcher: &mut Dispatcher, _store: &RefCell<S>) {
        self.active = false;
        self.picker.close(&mut self.overlays.borrow_mut());
        if let Ok(input) = &mut self.input {
            input.blur();
        }
    }
}

impl<S, A: Access<S, String>> FormItem<S> for DateField<S, A> {
    fn item_title(&self, _store: &RefCell<S>) -> &str {
        &self.title
    }

    fn item_state(&self, _store: &RefCell<S>) -> FormItemState {
        FormItemState::from_active(self.active)
    }

    fn render_overlay(&self, _store: &RefCell<S>, area: Rect, buf: &mut Buffer) {
        if self.is_picking() {
            render_calendar(&self.picker, area, buf);
        }
    }
}
