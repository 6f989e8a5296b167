// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::key::{Key, KeyPress};

/// The semantic role of a numeric segment.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum SegmentKind {
    Year,
    Month,
    Day,
    Hour,
    Minute,
}

impl SegmentKind {
    /// The placeholder token shown while the segment is empty. Its length is the display width.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Year => "YYYY",
            Self::Month => "MM",
            Self::Day => "DD",
            Self::Hour => "HH",
            Self::Minute => "mm",
        }
    }

    /// The display width, in digits.
    pub const fn width(self) -> usize {
        self.token().len()
    }

    /// The default inclusive range of the segment.
    pub const fn range(self) -> (u32, u32) {
        match self {
            Self::Year => (1, 9999),
            Self::Month => (1, 12),
            Self::Day => (1, 31),
            Self::Hour => (0, 23),
            Self::Minute => (0, 59),
        }
    }

    /// The default accessible label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Year => "Year",
            Self::Month => "Month",
            Self::Day => "Day",
            Self::Hour => "Hour",
            Self::Minute => "Minute",
        }
    }
}

/// The result of feeding an edit into a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditResult {
    /// The value changed, `None` means the segment was cleared.
    Changed(Option<u32>),

    /// The digits were kept as a prefix of a later value, the value itself did not change.
    Pending,

    /// The edit was refused and the segment is unchanged.
    Rejected,

    /// The edit is not meant for this segment.
    Ignored,
}

impl EditResult {
    /// Whether the segment value changed.
    pub const fn is_changed(&self) -> bool {
        matches!(self, Self::Changed(_))
    }
}

/// The accessibility description of a segment, following the "spinbutton" role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpinButton {
    pub role: &'static str,
    pub label: String,
    pub value_min: u32,
    pub value_max: u32,
    pub value_now: Option<u32>,
    pub value_text: String,
    pub disabled: bool,
}

/// A single editable numeric cell of a composite date or time input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumericSegment {
    kind: SegmentKind,
    min: u32,
    max: u32,
    width: usize,
    value: Option<u32>,
    text_value: Option<String>,
    disabled: bool,

    /// Digits typed since the segment took focus.
    entered: String,
}

impl NumericSegment {
    pub fn new(kind: SegmentKind) -> Self {
        let (min, max) = kind.range();
        Self::with_range(kind, min, max)
    }

    pub fn with_range(kind: SegmentKind, min: u32, max: u32) -> Self {
        Self {
            kind,
            min,
            max: max.max(min),
            width: kind.width(),
            value: None,
            text_value: None,
            disabled: false,
            entered: String::new(),
        }
    }

    pub fn kind(&self) -> SegmentKind {
        self.kind
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn value(&self) -> Option<u32> {
        self.value
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Sets the spoken value, e.g. the month name, used instead of the digits by assistive
    /// technology.
    pub fn set_text_value(&mut self, text: Option<String>) {
        self.text_value = text;
    }

    /// The zero-padded value, or the placeholder token when the segment is empty.
    pub fn display_text(&self) -> String {
        match self.value {
            Some(v) => format!("{v:0width$}", width = self.width),
            None => self.kind.token().to_owned(),
        }
    }

    /// Sets the value from outside, e.g. when the surrounding input receives a new string.
    /// Values outside the range are treated as absent.
    pub fn set_value(&mut self, value: Option<u32>) {
        self.value = value.filter(|v| self.contains(*v));
        self.entered.clear();
    }

    /// Updates the upper bound, clamping the current value down if it no longer fits.
    pub fn set_max(&mut self, max: u32) {
        self.max = max.max(self.min);
        if let Some(v) = self.value
            && v > self.max
        {
            tracing::debug!(kind = %self.kind, v, max = self.max, "clamping to new maximum");
            self.value = Some(self.max);
        }
    }

    /// Selects the whole segment, so the next keystroke replaces the value.
    pub fn focus(&mut self) {
        self.entered.clear();
    }

    pub fn blur(&mut self) {
        self.entered.clear();
    }

    /// Applies typed text. An empty text, as produced by Backspace or Delete, clears the value.
    pub fn input(&mut self, text: &str) -> EditResult {
        if self.disabled {
            return EditResult::Ignored;
        }

        if text.is_empty() {
            self.entered.clear();
            self.value = None;
            return EditResult::Changed(None);
        }

        if !text.bytes().all(|b| b.is_ascii_digit()) {
            tracing::debug!(kind = %self.kind, text, "rejecting non-digit input");
            return EditResult::Rejected;
        }

        self.accept_digits(text)
    }

    /// Applies pasted text: everything but the digits is dropped and the rest is truncated to the
    /// display width.
    pub fn paste(&mut self, text: &str) -> EditResult {
        if self.disabled {
            return EditResult::Ignored;
        }

        let digits: String = text
            .chars()
            .filter(char::is_ascii_digit)
            .take(self.width)
            .collect();
        if digits.is_empty() {
            tracing::debug!(kind = %self.kind, text, "rejecting paste without digits");
            return EditResult::Rejected;
        }

        self.accept_digits(&digits)
    }

    /// Handles a key press. Only Up and Down change the value here.
    pub fn key(&mut self, press: KeyPress) -> EditResult {
        if self.disabled || press.modified || press.is_navigation() {
            return EditResult::Ignored;
        }

        let next = match press.key {
            Key::Up => self.value.unwrap_or(0).saturating_add(1),
            Key::Down => match self.value {
                Some(v) => v.saturating_sub(1),
                None => self.min,
            },
            _ => return EditResult::Ignored,
        };

        self.entered.clear();
        let next = next.clamp(self.min, self.max);
        if self.value == Some(next) {
            EditResult::Rejected
        } else {
            self.value = Some(next);
            EditResult::Changed(self.value)
        }
    }

    pub fn spin_button(&self, label: Option<&str>) -> SpinButton {
        SpinButton {
            role: "spinbutton",
            label: label.unwrap_or(self.kind.label()).to_owned(),
            value_min: self.min,
            value_max: self.max,
            value_now: self.value,
            value_text: match (&self.text_value, self.value) {
                (Some(text), Some(_)) => text.clone(),
                (_, Some(_)) => self.display_text(),
                (_, None) => "Empty".to_owned(),
            },
            disabled: self.disabled,
        }
    }

    /// First tries to append `digits` to what was typed before, then falls back to `digits` alone.
    fn accept_digits(&mut self, digits: &str) -> EditResult {
        let appended = (!self.entered.is_empty()).then(|| format!("{}{digits}", self.entered));
        let candidates = appended.iter().map(String::as_str).chain([digits]);

        let mut pending = None;
        for candidate in candidates {
            if candidate.len() > self.width {
                continue;
            }

            match candidate.parse::<u32>() {
                Ok(v) if self.contains(v) => {
                    self.entered = candidate.to_owned();
                    self.value = Some(v);
                    return EditResult::Changed(self.value);
                }
                // a run of zeros may still become a valid value, e.g. "0" then "5" for "05"
                Ok(0) if candidate.len() < self.width && pending.is_none() => {
                    pending = Some(candidate.to_owned());
                }
                _ => {}
            }
        }

        match pending {
            Some(prefix) => {
                self.entered = prefix;
                EditResult::Pending
            }
            None => {
                tracing::debug!(
                    kind = %self.kind,
                    digits,
                    entered = %self.entered,
                    "rejecting out of range input"
                );
                EditResult::Rejected
            }
        }
    }

    fn contains(&self, v: u32) -> bool {
        (self.min..=self.max).contains(&v)
    }
}
