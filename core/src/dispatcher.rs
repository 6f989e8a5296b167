// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, fmt, rc::Rc};

/// A subscriber of a [`Dispatcher`].
pub type Callback<A> = Rc<RefCell<dyn FnMut(&A)>>;

/// Delivers actions to every registered subscriber, in registration order.
pub struct Dispatcher<A> {
    subscribers: Vec<Callback<A>>,
}

impl<A> Dispatcher<A> {
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
        }
    }

    pub fn register(&mut self, callback: Callback<A>) {
        self.subscribers.push(callback);
    }

    pub fn dispatch(&mut self, action: &A) {
        for sub in &self.subscribers {
            (sub.borrow_mut())(action);
        }
    }

    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}

impl<A> Default for Dispatcher<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> fmt::Debug for Dispatcher<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
