// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use crate::canonical::{CanonicalInput, FieldState};
use crate::key::{Key, KeyPress};
use crate::segment::{EditResult, NumericSegment, SegmentKind};

/// Receives the composed value once it is complete or entirely cleared.
pub type ChangePort = Box<dyn FnMut(&str)>;

/// What an edit did to a composite input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputOutcome {
    /// A segment changed, carrying the new composed value.
    Changed(String),

    /// Focus moved to the segment at this index.
    FocusMoved(usize),

    /// Digits were buffered without changing any value.
    Pending,

    /// The edit was refused.
    Rejected,

    /// The edit was not handled.
    Ignored,
}

/// Segments that behave as one logical value: the shared core of the date and time inputs.
pub struct SegmentGroup {
    segments: Vec<NumericSegment>,
    separator: char,
    focused: usize,
    canonical: CanonicalInput,
    on_change: Option<ChangePort>,

    /// The last value passed to `on_change`, or assigned from outside.
    reported: Option<String>,
}

impl SegmentGroup {
    pub fn new(segments: Vec<NumericSegment>, separator: char) -> Self {
        Self {
            segments,
            separator,
            focused: 0,
            canonical: CanonicalInput::new(),
            on_change: None,
            reported: None,
        }
    }

    pub fn segments(&self) -> &[NumericSegment] {
        &self.segments
    }

    pub fn segment(&self, kind: SegmentKind) -> Option<&NumericSegment> {
        self.segments.iter().find(|s| s.kind() == kind)
    }

    pub fn segment_mut(&mut self, kind: SegmentKind) -> Option<&mut NumericSegment> {
        self.segments.iter_mut().find(|s| s.kind() == kind)
    }

    pub fn separator(&self) -> char {
        self.separator
    }

    pub fn canonical(&self) -> &CanonicalInput {
        &self.canonical
    }

    pub fn canonical_mut(&mut self) -> &mut CanonicalInput {
        &mut self.canonical
    }

    pub fn value(&self) -> &str {
        self.canonical.value()
    }

    pub fn set_on_change(&mut self, port: ChangePort) {
        self.on_change = Some(port);
    }

    pub fn state(&self) -> FieldState {
        self.canonical.state()
    }

    /// Updates the field state; `disabled` also makes the field read-only and locks the segments.
    pub fn set_state(&mut self, mut state: FieldState) {
        state.readonly = state.disabled;
        for segment in &mut self.segments {
            segment.set_disabled(state.disabled);
        }
        self.canonical.set_state(state);
    }

    pub fn is_disabled(&self) -> bool {
        self.canonical.state().disabled
    }

    pub fn focused(&self) -> usize {
        self.focused
    }

    pub fn focused_segment(&self) -> Option<&NumericSegment> {
        self.segments.get(self.focused)
    }

    /// Moves focus to the segment at `index`, selecting its whole content.
    pub fn focus(&mut self, index: usize) -> usize {
        let index = index.min(self.segments.len().saturating_sub(1));
        if let Some(old) = self.segments.get_mut(self.focused) {
            old.blur();
        }
        self.focused = index;
        if let Some(new) = self.segments.get_mut(self.focused) {
            new.focus();
        }
        index
    }

    pub fn blur(&mut self) {
        for segment in &mut self.segments {
            segment.blur();
        }
    }

    /// Moves focus between sibling segments on Left and Right, without touching any value.
    pub fn navigate(&mut self, press: KeyPress) -> Option<usize> {
        if press.modified {
            return None;
        }

        let target = match press.key {
            Key::Left => self.focused.checked_sub(1)?,
            Key::Right if self.focused + 1 < self.segments.len() => self.focused + 1,
            _ => return None,
        };
        Some(self.focus(target))
    }

    /// Applies an edit to the focused segment.
    pub fn apply(&mut self, edit: impl FnOnce(&mut NumericSegment) -> EditResult) -> EditResult {
        if self.is_disabled() {
            return EditResult::Ignored;
        }

        match self.segments.get_mut(self.focused) {
            Some(segment) => edit(segment),
            None => EditResult::Ignored,
        }
    }

    /// Composes the segments: zero-padded values or placeholder tokens joined by the separator.
    /// Segments that are all empty compose to an empty string.
    pub fn compose(&self) -> String {
        if self.is_empty() {
            return String::new();
        }

        let texts: Vec<String> = self.segments.iter().map(NumericSegment::display_text).collect();
        texts.join(self.separator.to_string().as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.segments.iter().all(|s| s.value().is_none())
    }

    pub fn is_complete(&self) -> bool {
        self.segments.iter().all(|s| s.value().is_some())
    }

    /// Publishes the composed value after a user edit, and reports it through the change port when
    /// it is complete or empty.
    pub fn commit(&mut self) -> String {
        let value = self.compose();
        self.canonical.publish(value.clone());

        let reportable = self.is_complete() || self.is_empty();
        if reportable && self.reported.as_deref() != Some(value.as_str()) {
            tracing::debug!(value = %value, "reporting changed value");
            if let Some(port) = self.on_change.as_mut() {
                port(&value);
            }
            self.reported = Some(value.clone());
        }
        value
    }

    /// Takes the composed value as the canonical value without notifying anyone, after the
    /// segments were set from outside.
    pub fn assign(&mut self) {
        let value = self.compose();
        self.reported = Some(value.clone());
        self.canonical.assign(value);
    }

    /// Converts the result of a segment edit, committing the group if the value changed.
    pub fn settle(&mut self, result: EditResult) -> InputOutcome {
        match result {
            EditResult::Changed(_) => InputOutcome::Changed(self.commit()),
            EditResult::Pending => InputOutcome::Pending,
            EditResult::Rejected => InputOutcome::Rejected,
            EditResult::Ignored => InputOutcome::Ignored,
        }
    }
}

impl fmt::Debug for SegmentGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SegmentGroup")
            .field("segments", &self.segments)
            .field("separator", &self.separator)
            .field("focused", &self.focused)
            .field("canonical", &self.canonical)
            .field("reported", &self.reported)
            .finish_non_exhaustive()
    }
}
