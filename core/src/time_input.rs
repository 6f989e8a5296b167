// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::canonical::{FieldEvent, FieldState};
use crate::group::{ChangePort, InputOutcome, SegmentGroup};
use crate::key::KeyPress;
use crate::pattern::{TIME_SEPARATOR, TimeParts};
use crate::segment::{NumericSegment, SegmentKind, SpinButton};

/// A wall-clock time input with fixed hour and minute segments, composed as `HH:mm`.
#[derive(Debug)]
pub struct TimeInput {
    group: SegmentGroup,
}

impl TimeInput {
    pub fn new() -> Self {
        let segments = vec![
            NumericSegment::new(SegmentKind::Hour),
            NumericSegment::new(SegmentKind::Minute),
        ];
        Self {
            group: SegmentGroup::new(segments, TIME_SEPARATOR),
        }
    }

    pub fn value(&self) -> &str {
        self.group.value()
    }

    pub fn parts(&self) -> TimeParts {
        TimeParts {
            hour: self.part(SegmentKind::Hour),
            minute: self.part(SegmentKind::Minute),
        }
    }

    pub fn time(&self) -> Option<jiff::civil::Time> {
        self.parts().to_time()
    }

    pub fn segments(&self) -> &[NumericSegment] {
        self.group.segments()
    }

    pub fn spin_buttons(&self) -> Vec<SpinButton> {
        self.segments().iter().map(|s| s.spin_button(None)).collect()
    }

    pub fn state(&self) -> FieldState {
        self.group.state()
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        let state = FieldState {
            disabled,
            ..self.group.state()
        };
        self.group.set_state(state);
    }

    pub fn set_required(&mut self, required: bool) {
        let state = FieldState {
            required,
            ..self.group.state()
        };
        self.group.set_state(state);
    }

    pub fn set_invalid(&mut self, invalid: bool) {
        let state = FieldState {
            invalid,
            ..self.group.state()
        };
        self.group.set_state(state);
    }

    pub fn set_on_change(&mut self, port: ChangePort) {
        self.group.set_on_change(port);
    }

    pub fn subscribe(&mut self, f: impl FnMut(&FieldEvent) + 'static) {
        self.group.canonical_mut().subscribe_fn(f);
    }

    /// Takes a new `HH:mm` value from outside without reporting it back.
    pub fn set_value(&mut self, value: &str) {
        let parts = TimeParts::parse(value);
        if parts == self.parts() {
            return;
        }

        tracing::debug!(value, "syncing time input from outside");
        self.set_part(SegmentKind::Hour, parts.hour);
        self.set_part(SegmentKind::Minute, parts.minute);
        self.group.assign();
    }

    pub fn focused(&self) -> usize {
        self.group.focused()
    }

    pub fn focus(&mut self, index: usize) -> usize {
        self.group.focus(index)
    }

    pub fn blur(&mut self) {
        self.group.blur();
    }

    pub fn input(&mut self, text: &str) -> InputOutcome {
        let result = self.group.apply(|s| s.input(text));
        self.group.settle(result)
    }

    pub fn paste(&mut self, text: &str) -> InputOutcome {
        let result = self.group.apply(|s| s.paste(text));
        self.group.settle(result)
    }

    pub fn key(&mut self, press: KeyPress) -> InputOutcome {
        if let Some(index) = self.group.navigate(press) {
            return InputOutcome::FocusMoved(index);
        }

        let result = self.group.apply(|s| s.key(press));
        self.group.settle(result)
    }

    /// Sets both segments as a user change, e.g. from a picker.
    pub fn select_time(&mut self, time: jiff::civil::Time) -> InputOutcome {
        if self.group.is_disabled() {
            return InputOutcome::Ignored;
        }

        let parts = TimeParts::from(time);
        self.set_part(SegmentKind::Hour, parts.hour);
        self.set_part(SegmentKind::Minute, parts.minute);
        InputOutcome::Changed(self.group.commit())
    }

    fn part(&self, kind: SegmentKind) -> Option<u32> {
        self.group.segment(kind).and_then(NumericSegment::value)
    }

    fn set_part(&mut self, kind: SegmentKind, value: Option<u32>) {
        if let Some(segment) = self.group.segment_mut(kind) {
            segment.set_value(value);
        }
    }
}

impl Default for TimeInput {
    fn default() -> Self {
        Self::new()
    }
}
