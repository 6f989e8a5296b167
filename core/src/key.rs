// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

/// A key understood by the inputs and pickers.
///
/// Front-ends translate their native key events into this type, so that the widget state does not
/// depend on any terminal or windowing library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Tab,
    BackTab,
    Backspace,
    Delete,
    Enter,
    Escape,
    Char(char),
}

/// A key press, together with whether a modifier (Ctrl, Alt, Meta) was held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyPress {
    pub key: Key,
    pub modified: bool,
}

impl KeyPress {
    /// A key press without modifiers.
    pub const fn plain(key: Key) -> Self {
        Self {
            key,
            modified: false,
        }
    }

    /// A key press with a modifier held.
    pub const fn modified(key: Key) -> Self {
        Self {
            key,
            modified: true,
        }
    }

    /// Whether the key only moves the caret or focus and never edits a value.
    pub const fn is_navigation(&self) -> bool {
        matches!(
            self.key,
            Key::Backspace
                | Key::Delete
                | Key::Left
                | Key::Right
                | Key::Tab
                | Key::BackTab
                | Key::Home
                | Key::End
        )
    }
}

impl From<Key> for KeyPress {
    fn from(key: Key) -> Self {
        Self::plain(key)
    }
}
