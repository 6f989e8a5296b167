// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, rc::Rc};

use crate::dispatcher::{Callback, Dispatcher};

/// A notification about the canonical value of an input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEvent {
    /// The value was edited.
    Input(String),

    /// The edit was committed.
    Change(String),
}

impl FieldEvent {
    pub fn value(&self) -> &str {
        match self {
            Self::Input(v) | Self::Change(v) => v,
        }
    }
}

/// Field state mirrored from the visible segments, for form submission and assistive technology.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FieldState {
    pub invalid: bool,
    pub disabled: bool,
    pub readonly: bool,
    pub required: bool,
}

/// The single source of truth read by surrounding form logic. Visible segments are a view over it.
#[derive(Debug, Default)]
pub struct CanonicalInput {
    value: String,
    state: FieldState,
    dispatcher: Dispatcher<FieldEvent>,
}

impl CanonicalInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn state(&self) -> FieldState {
        self.state
    }

    pub fn set_state(&mut self, state: FieldState) {
        self.state = state;
    }

    /// Stores a value edited by the user and notifies listeners with an input and a change event.
    pub fn publish(&mut self, value: String) {
        self.value.clone_from(&value);
        self.dispatcher.dispatch(&FieldEvent::Input(value.clone()));
        self.dispatcher.dispatch(&FieldEvent::Change(value));
    }

    /// Stores a value that came from outside, without notifying anyone.
    pub fn assign(&mut self, value: String) {
        self.value = value;
    }

    pub fn subscribe(&mut self, callback: Callback<FieldEvent>) {
        self.dispatcher.register(callback);
    }

    /// Subscribes a plain closure.
    pub fn subscribe_fn(&mut self, f: impl FnMut(&FieldEvent) + 'static) {
        self.subscribe(Rc::new(RefCell::new(f)));
    }
}
