// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::calendar::days_in_month;
use crate::canonical::{FieldEvent, FieldState};
use crate::error::PatternError;
use crate::group::{ChangePort, InputOutcome, SegmentGroup};
use crate::key::KeyPress;
use crate::pattern::{DateParts, DatePattern, DateToken};
use crate::segment::{EditResult, NumericSegment, SegmentKind, SpinButton};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A date input made of year, month and day segments, ordered and separated by a pattern.
#[derive(Debug)]
pub struct DateInput {
    pattern: DatePattern,
    group: SegmentGroup,
}

impl DateInput {
    pub fn new(pattern: DatePattern) -> Self {
        let segments = pattern
            .order()
            .iter()
            .map(|token| NumericSegment::new(token.kind()))
            .collect();
        let separator = pattern.separator().as_char();
        Self {
            pattern,
            group: SegmentGroup::new(segments, separator),
        }
    }

    /// Builds an input from a pattern string. An invalid pattern is a configuration error, and the
    /// caller is expected to show it in place of the segments.
    pub fn from_pattern_str(pattern: &str) -> Result<Self, PatternError> {
        pattern.parse().map(Self::new)
    }

    pub fn pattern(&self) -> DatePattern {
        self.pattern
    }

    /// The canonical composed value.
    pub fn value(&self) -> &str {
        self.group.value()
    }

    pub fn parts(&self) -> DateParts {
        let mut parts = DateParts::default();
        for token in self.pattern.order() {
            parts.set(token, self.segment(token).and_then(NumericSegment::value));
        }
        parts
    }

    /// The segments in pattern order.
    pub fn segments(&self) -> &[NumericSegment] {
        self.group.segments()
    }

    pub fn spin_buttons(&self) -> Vec<SpinButton> {
        self.segments().iter().map(|s| s.spin_button(None)).collect()
    }

    pub fn separator(&self) -> char {
        self.group.separator()
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

    /// Registers the port called with the composed value once it is complete or cleared.
    pub fn set_on_change(&mut self, port: ChangePort) {
        self.group.set_on_change(port);
    }

    /// Listens to every edit of the canonical value.
    pub fn subscribe(&mut self, f: impl FnMut(&FieldEvent) + 'static) {
        self.group.canonical_mut().subscribe_fn(f);
    }

    /// Takes a new value from outside. The value is parsed against the pattern; parts that do not
    /// parse become empty. Nothing is reported back, and the same value twice is a no-op.
    pub fn set_value(&mut self, value: &str) {
        let parts = self.pattern.parse(value);
        if parts == self.parts() {
            return;
        }

        tracing::debug!(value, "syncing date input from outside");
        self.set_segment(DateToken::Year, parts.year);
        self.set_segment(DateToken::Month, parts.month);
        self.sync_day_max();
        let max = self.day_max();
        self.set_segment(DateToken::Day, parts.day.map(|d| d.min(max)));
        self.group.assign();
    }

    pub fn focused(&self) -> usize {
        self.group.focused()
    }

    pub fn focus(&mut self, index: usize) -> usize {
        self.group.focus(index)
    }

    /// Focuses the segment of `token`.
    pub fn focus_token(&mut self, token: DateToken) -> usize {
        let index = self
            .pattern
            .order()
            .iter()
            .position(|t| *t == token)
            .unwrap_or_default();
        self.group.focus(index)
    }

    pub fn blur(&mut self) {
        self.group.blur();
    }

    /// Types text into the focused segment; an empty text clears it.
    pub fn input(&mut self, text: &str) -> InputOutcome {
        let result = self.group.apply(|s| s.input(text));
        self.settle(result)
    }

    /// Pastes text into the focused segment.
    pub fn paste(&mut self, text: &str) -> InputOutcome {
        let result = self.group.apply(|s| s.paste(text));
        self.settle(result)
    }

    /// Left and Right move between segments, everything else goes to the focused segment.
    pub fn key(&mut self, press: KeyPress) -> InputOutcome {
        if let Some(index) = self.group.navigate(press) {
            return InputOutcome::FocusMoved(index);
        }

        let result = self.group.apply(|s| s.key(press));
        self.settle(result)
    }

    /// Sets all segments to `date` as if the user had entered it, e.g. from a picker.
    pub fn select_date(&mut self, date: jiff::civil::Date) -> InputOutcome {
        if self.group.is_disabled() {
            return InputOutcome::Ignored;
        }

        let parts = DateParts::from(date);
        self.set_segment(DateToken::Year, parts.year);
        self.set_segment(DateToken::Month, parts.month);
        self.sync_day_max();
        self.set_segment(DateToken::Day, parts.day);
        InputOutcome::Changed(self.group.commit())
    }

    /// The current value as a civil date, if complete and valid.
    pub fn date(&self) -> Option<jiff::civil::Date> {
        self.parts().to_date()
    }

    fn settle(&mut self, result: EditResult) -> InputOutcome {
        if result.is_changed() {
            self.sync_day_max();
        }
        self.group.settle(result)
    }

    fn segment(&self, token: DateToken) -> Option<&NumericSegment> {
        self.group.segment(token.kind())
    }

    fn set_segment(&mut self, token: DateToken, value: Option<u32>) {
        if let Some(segment) = self.group.segment_mut(token.kind()) {
            segment.set_value(value);
        }
    }

    fn day_max(&self) -> u32 {
        self.group
            .segment(SegmentKind::Day)
            .map_or(31, NumericSegment::max)
    }

    /// Recomputes the day bound from year and month, clamping the day down when it no longer fits,
    /// and refreshes the spoken month name.
    fn sync_day_max(&mut self) {
        let year = self.segment(DateToken::Year).and_then(NumericSegment::value);
        let month = self.segment(DateToken::Month).and_then(NumericSegment::value);
        let max = days_in_month(year, month);
        if let Some(day) = self.group.segment_mut(SegmentKind::Day) {
            day.set_max(max);
        }

        if let Some(segment) = self.group.segment_mut(SegmentKind::Month) {
            let name = month
                .and_then(|m| m.checked_sub(1))
                .and_then(|i| MONTH_NAMES.get(i as usize));
            segment.set_text_value(name.map(|n| (*n).to_owned()));
        }
    }
}

impl Default for DateInput {
    fn default() -> Self {
        Self::new(DatePattern::default())
    }
}
