// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, marker::PhantomData};

use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::{Clear, Paragraph};

use crate::tui::component::{Component, Message};
use crate::tui::dispatcher::{Action, Dispatcher};
use crate::util::{byte_range_of_grapheme_before, unicode_width_of_slice};

/// A vertical list of fields, one of which is active at a time.
pub struct Form<S, C: FormItem<S>> {
    items: Vec<C>,
    item_index: usize,
    _phantom: PhantomData<S>,
}

impl<S, C: FormItem<S>> Form<S, C> {
    pub fn new(items: Vec<C>) -> Self {
        Self {
            items,
            item_index: 0,
            _phantom: PhantomData,
        }
    }

    fn layout(&self, store: &RefCell<S>) -> Layout {
        Layout::vertical(self.items.iter().map(|item| match item.item_state(store) {
            FormItemState::Invisible => Constraint::Max(0),
            _ => Constraint::Max(3),
        }))
        .margin(1)
    }

    /// Moves the active item by `offset`, skipping invisible items.
    fn navigate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<S>, offset: isize) {
        let len = self.items.len();
        let mut index = self.item_index;
        let mut steps = offset.unsigned_abs();
        while steps > 0 {
            index = if offset > 0 {
                (index + 1) % len
            } else {
                (index + len - 1) % len
            };

            if index == self.item_index {
                break; // no other visible item
            }
            if self.items.get(index).is_some_and(|a| item_is_visible(a, store)) {
                steps -= 1;
            }
        }

        if let Some(a) = self.items.get_mut(self.item_index) {
            a.deactivate(dispatcher, store);
        }
        self.item_index = index;
        if let Some(a) = self.items.get_mut(self.item_index) {
            a.activate(dispatcher, store);
        }
    }
}

impl<S, C: FormItem<S>> Component<S> for Form<S, C> {
    fn render(&self, store: &RefCell<S>, area: Rect, buf: &mut Buffer) {
        let areas = self.layout(store).split(area);
        let active = self.items.get(self.item_index);

        // draw bottom-up so that popups of upper items stay on top
        let mut is_last = true;
        for (item, area) in self.items.iter().zip(areas.iter()).rev() {
            if item_is_visible(item, store) {
                item_render(is_last, item, store, *area, buf);
                item.render(store, item_inner(*area), buf);
                is_last = false;
            }
        }

        // the active item may draw over the items below it
        if let (Some(item), Some(area)) = (active, areas.get(self.item_index)) {
            item.render_overlay(store, item_inner(*area), buf);
        }
    }

    fn get_cursor_position(&self, store: &RefCell<S>, area: Rect) -> Option<(u16, u16)> {
        let areas = self.layout(store).split(area);
        let item = self.items.get(self.item_index)?;
        let area = areas.get(self.item_index)?;
        item.get_cursor_position(store, *area)
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<S>,
        area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        let areas = self.layout(store).split(area);
        if let (Some(item), Some(subarea)) =
            (self.items.get_mut(self.item_index), areas.get(self.item_index))
            && let Some(msg) = item.on_key(dispatcher, store, *subarea, event)
        {
            return Some(msg);
        }

        match event.code {
            KeyCode::Up | KeyCode::BackTab if self.item_index > 0 => {
                self.navigate(dispatcher, store, -1);
                Some(Message::CursorUpdated)
            }
            KeyCode::Down | KeyCode::Tab if self.item_index + 1 < self.items.len() => {
                self.navigate(dispatcher, store, 1);
                Some(Message::CursorUpdated)
            }
            KeyCode::Enter => {
                dispatcher.dispatch(&Action::SubmitChanges);
                Some(Message::Exit)
            }
            _ => None,
        }
    }

    fn on_paste(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<S>,
        text: &str,
    ) -> Option<Message> {
        let item = self.items.get_mut(self.item_index)?;
        item.on_paste(dispatcher, store, text)
    }

    fn activate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<S>) {
        if let Some(item) = self.items.get_mut(self.item_index) {
            item.activate(dispatcher, store);
        }
    }

    fn deactivate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<S>) {
        if let Some(item) = self.items.get_mut(self.item_index) {
            item.deactivate(dispatcher, store);
        }
    }
}

pub trait FormItem<S>: Component<S> {
    fn item_title(&self, store: &RefCell<S>) -> &str;
    fn item_state(&self, store: &RefCell<S>) -> FormItemState;

    /// Draws content that may overflow the item area, such as a picker popup.
    fn render_overlay(&self, _store: &RefCell<S>, _area: Rect, _buf: &mut Buffer) {}
}

impl<S> Component<S> for Box<dyn FormItem<S>> {
    fn render(&self, store: &RefCell<S>, area: Rect, buf: &mut Buffer) {
        (**self).render(store, area, buf);
    }

    fn get_cursor_position(&self, store: &RefCell<S>, area: Rect) -> Option<(u16, u16)> {
        (**self).get_cursor_position(store, area)
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<S>,
        area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        (**self).on_key(dispatcher, store, area, event)
    }

    fn on_paste(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<S>,
        text: &str,
    ) -> Option<Message> {
        (**self).on_paste(dispatcher, store, text)
    }

    fn activate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<S>) {
        (**self).activate(dispatcher, store);
    }

    fn deactivate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<S>) {
        (**self).deactivate(dispatcher, store);
    }
}

impl<S> FormItem<S> for Box<dyn FormItem<S>> {
    fn item_title(&self, store: &RefCell<S>) -> &str {
        (**self).item_title(store)
    }

    fn item_state(&self, store: &RefCell<S>) -> FormItemState {
        (**self).item_state(store)
    }

    fn render_overlay(&self, store: &RefCell<S>, area: Rect, buf: &mut Buffer) {
        (**self).render_overlay(store, area, buf);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormItemState {
    /// The item has focus.
    Active,

    /// The item is shown without focus.
    Inactive,

    /// The item is hidden.
    Invisible,
}

impl FormItemState {
    pub fn from_active(active: bool) -> Self {
        match active {
            true => Self::Active,
            false => Self::Inactive,
        }
    }
}

/// Reads a field from the store, and writes it back through the dispatcher.
pub trait Access<S, T: ToOwned> {
    fn get(store: &RefCell<S>) -> T;
    fn set(dispatcher: &mut Dispatcher, value: T) -> bool;
}

/// A single-line free text field.
#[derive(Debug)]
pub struct Input<S, A: Access<S, String>> {
    title: String,
    active: bool,
    character_index: usize,
    _phantom_s: PhantomData<S>,
    _phantom_a: PhantomData<A>,
}

impl<S, A: Access<S, String>> Input<S, A> {
    pub fn new(title: impl ToString) -> Self {
        Self {
            title: title.to_string(),
            active: false,
            character_index: 0,
            _phantom_s: PhantomData,
            _phantom_a: PhantomData,
        }
    }

    fn insert(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<S>, text: &str) {
        let mut v = A::get(store);
        let byte_index = v
            .char_indices()
            .nth(self.character_index)
            .map_or(v.len(), |(i, _)| i);
        v.insert_str(byte_index, text);
        if A::set(dispatcher, v) {
            self.character_index += text.chars().count();
        }
    }
}

impl<S, A: Access<S, String>> Component<S> for Input<S, A> {
    fn render(&self, store: &RefCell<S>, area: Rect, buf: &mut Buffer) {
        let v = A::get(store);
        Paragraph::new(v.as_str()).render(area, buf);
    }

    fn get_cursor_position(&self, store: &RefCell<S>, area: Rect) -> Option<(u16, u16)> {
        if !self.active {
            return None;
        }

        let v = A::get(store);
        let width = unicode_width_of_slice(v.as_str(), self.character_index);
        let x = area.x + u16::try_from(width).unwrap_or(u16::MAX) + 2; // marker 1 + padding 1
        let y = area.y + 1; // title line
        Some((x, y))
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<S>,
        _area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        use KeyCode::*;
        if !self.active {
            return None;
        }

        match event.code {
            Left if self.character_index > 0 => self.character_index -= 1,
            Right if self.character_index < A::get(store).chars().count() => {
                self.character_index += 1;
            }
            Home => self.character_index = 0,
            End => self.character_index = A::get(store).chars().count(),
            Backspace if self.character_index > 0 => {
                let mut v = A::get(store);
                if let Some(range) = byte_range_of_grapheme_before(&v, self.character_index) {
                    let removed = v[range.clone()].chars().count();
                    v.replace_range(range, "");
                    if A::set(dispatcher, v) {
                        self.character_index = self.character_index.saturating_sub(removed);
                    }
                }
            }
            Char(c) => self.insert(dispatcher, store, c.encode_utf8(&mut [0; 4])),
            Left | Right | Backspace => {}
            _ => return None,
        };
        Some(Message::CursorUpdated)
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

        let line = text.lines().next().unwrap_or_default();
        self.insert(dispatcher, store, line);
        Some(Message::CursorUpdated)
    }

    fn activate(&mut self, _dispatcher: &mut Dispatcher, store: &RefCell<S>) {
        self.active = true;
        self.character_index = A::get(store).chars().count();
    }

    fn deactivate(&mut self, _dispatcher: &mut Dispatcher, _store: &RefCell<S>) {
        self.active = false;
        self.character_index = 0;
    }
}

impl<S, A: Access<S, String>> FormItem<S> for Input<S, A> {
    fn item_title(&self, _store: &RefCell<S>) -> &str {
        &self.title
    }

    fn item_state(&self, _store: &RefCell<S>) -> FormItemState {
        FormItemState::from_active(self.active)
    }
}

const S_STEP_ACTIVE: &str = "◆";
const S_STEP_INACTIVE: &str = "◇";
const S_SIDER_CONNECTOR: &str = "│";
const S_SIDER_BOTTOM: &str = "└";

fn item_render<S>(
    is_last: bool,
    item: &impl FormItem<S>,
    store: &RefCell<S>,
    area: Rect,
    buf: &mut Buffer,
) {
    let (color, step) = match item.item_state(store) {
        FormItemState::Active => (Color::Blue, S_STEP_ACTIVE),
        FormItemState::Inactive => (Color::Gray, S_STEP_INACTIVE),
        FormItemState::Invisible => return,
    };

    let area_title = Rect::new(area.x + 2, area.y, area.width.saturating_sub(2), 1);
    Clear.render(area_title, buf);
    Paragraph::new(item.item_title(store))
        .bold()
        .fg(color)
        .render(area_title, buf);

    let bottom = area.height.saturating_sub(1);
    for y in 0..area.height {
        let symbol = match y {
            0 => step,
            y if y == bottom && is_last => S_SIDER_BOTTOM,
            _ => S_SIDER_CONNECTOR,
        };
        if let Some(c) = buf.cell_mut((area.x, area.y + y)) {
            c.set_symbol(symbol);
            c.set_fg(color);
        }
    }
}

/// The content area of an item, below its title and right of the step marker.
pub fn item_inner(area: Rect) -> Rect {
    Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

fn item_is_visible<S>(item: &impl FormItem<S>, store: &RefCell<S>) -> bool {
    !matches!(item.item_state(store), FormItemState::Invisible)
}
