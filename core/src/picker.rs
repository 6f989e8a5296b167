// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::ToSpan;
use jiff::civil::{Date, Time};

use crate::calendar::{MonthGrid, WeekStart, month_grid};
use crate::config::FieldConfig;
use crate::key::{Key, KeyPress};
use crate::overlay::{OverlayId, OverlayManager};

/// What a key press did to an open picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerOutcome<T> {
    /// The picker is closed or does not handle the key.
    Ignored,

    /// The key moved the focus, or was trapped inside the picker.
    Handled,

    /// A value was picked and the picker closed.
    Selected(T),

    /// The picker closed without picking a value.
    Closed,
}

/// A calendar grid overlay for picking a date.
#[derive(Debug, Clone)]
pub struct DatePicker {
    overlay: OverlayId,
    focused: Date,
    week_start: WeekStart,
    first: Date,
    last: Date,
}

impl DatePicker {
    pub fn new(overlays: &mut OverlayManager, week_start: WeekStart, years: (i16, i16)) -> Self {
        let (start, end) = years;
        let first = Date::new(start, 1, 1).unwrap_or(Date::MIN);
        let last = Date::new(end, 12, 31).unwrap_or(Date::MAX);
        Self {
            overlay: overlays.register(),
            focused: first,
            week_start,
            first,
            last: last.max(first),
        }
    }

    pub fn from_config(overlays: &mut OverlayManager, config: &FieldConfig) -> Self {
        Self::new(overlays, config.week_start, config.year_range)
    }

    pub fn overlay(&self) -> OverlayId {
        self.overlay
    }

    pub fn is_open(&self, overlays: &OverlayManager) -> bool {
        overlays.is_open(self.overlay)
    }

    /// Opens the picker with `anchor` focused, closing any other open overlay.
    pub fn open(&mut self, overlays: &mut OverlayManager, anchor: Date) {
        self.focused = self.clamp(anchor);
        overlays.open(self.overlay);
    }

    pub fn close(&mut self, overlays: &mut OverlayManager) {
        overlays.close(self.overlay);
    }

    pub fn focused(&self) -> Date {
        self.focused
    }

    pub fn week_start(&self) -> WeekStart {
        self.week_start
    }

    /// The grid of the month of the focused date.
    pub fn grid(&self) -> MonthGrid {
        month_grid(self.focused, self.week_start)
    }

    pub fn key(&mut self, overlays: &mut OverlayManager, press: KeyPress) -> PickerOutcome<Date> {
        if !self.is_open(overlays) || press.modified {
            return PickerOutcome::Ignored;
        }

        let focused = self.focused;
        let moved = match press.key {
            Key::Left => focused.checked_sub(1.day()),
            Key::Right => focused.checked_add(1.day()),
            Key::Up => focused.checked_sub(1.week()),
            Key::Down => focused.checked_add(1.week()),
            Key::PageUp => focused.checked_sub(1.month()),
            Key::PageDown => focused.checked_add(1.month()),
            Key::Home => Ok(focused.first_of_year()),
            Key::End => Ok(focused.last_of_year()),
            Key::Enter | Key::Char(' ') => {
                self.close(overlays);
                return PickerOutcome::Selected(focused);
            }
            Key::Escape => {
                self.close(overlays);
                return PickerOutcome::Closed;
            }
            Key::Tab | Key::BackTab => return PickerOutcome::Handled,
            _ => return PickerOutcome::Ignored,
        };

        match moved {
            Ok(date) => self.focused = self.clamp(date),
            Err(err) => tracing::debug!(%err, "date picker focus stays at calendar bound"),
        }
        PickerOutcome::Handled
    }

    fn clamp(&self, date: Date) -> Date {
        date.clamp(self.first, self.last)
    }
}

/// The column of a [`TimePicker`] that has focus.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TimeColumn {
    #[default]
    Hour,
    Minute,
}

/// Two scrollable lists, hours and minutes, for picking a time.
///
/// Down moves to the next entry of the focused list and Up to the previous one. Neither wraps.
#[derive(Debug, Clone)]
pub struct TimePicker {
    overlay: OverlayId,
    hour: u32,
    minute: u32,
    column: TimeColumn,
    minute_step: u32,
}

impl TimePicker {
    pub fn new(overlays: &mut OverlayManager, minute_step: u32) -> Self {
        Self {
            overlay: overlays.register(),
            hour: 0,
            minute: 0,
            column: TimeColumn::default(),
            minute_step: minute_step.clamp(1, 60),
        }
    }

    pub fn from_config(overlays: &mut OverlayManager, config: &FieldConfig) -> Self {
        Self::new(overlays, config.minute_step)
    }

    pub fn overlay(&self) -> OverlayId {
        self.overlay
    }

    pub fn is_open(&self, overlays: &OverlayManager) -> bool {
        overlays.is_open(self.overlay)
    }

    /// Opens the picker at `anchor`, rounding the minute down to the step.
    pub fn open(&mut self, overlays: &mut OverlayManager, anchor: Time) {
        self.hour = u32::try_from(anchor.hour()).unwrap_or(0);
        let minute = u32::try_from(anchor.minute()).unwrap_or(0);
        self.minute = minute - minute % self.minute_step;
        self.column = TimeColumn::Hour;
        overlays.open(self.overlay);
    }

    pub fn close(&mut self, overlays: &mut OverlayManager) {
        overlays.close(self.overlay);
    }

    pub fn column(&self) -> TimeColumn {
        self.column
    }

    /// The focused hour and minute.
    pub fn selection(&self) -> (u32, u32) {
        (self.hour, self.minute)
    }

    pub fn hours(&self) -> impl Iterator<Item = u32> + use<> {
        0..24
    }

    /// The minute entries, one per step.
    pub fn minutes(&self) -> impl Iterator<Item = u32> + use<> {
        (0..60).step_by(self.minute_step as usize)
    }

    pub fn key(&mut self, overlays: &mut OverlayManager, press: KeyPress) -> PickerOutcome<Time> {
        if !self.is_open(overlays) || press.modified {
            return PickerOutcome::Ignored;
        }

        // the last entry of `minutes()`, also for steps that do not divide 60
        let last_minute = 59 - 59 % self.minute_step;
        match (press.key, self.column) {
            (Key::Left, _) => self.column = TimeColumn::Hour,
            (Key::Right, _) => self.column = TimeColumn::Minute,
            (Key::Up, TimeColumn::Hour) => self.hour = self.hour.saturating_sub(1),
            (Key::Down, TimeColumn::Hour) => self.hour = (self.hour + 1).min(23),
            (Key::Home, TimeColumn::Hour) => self.hour = 0,
            (Key::End, TimeColumn::Hour) => self.hour = 23,
            (Key::Up, TimeColumn::Minute) => {
                self.minute = self.minute.saturating_sub(self.minute_step);
            }
            (Key::Down, TimeColumn::Minute) => {
                self.minute = (self.minute + self.minute_step).min(last_minute);
            }
            (Key::Home, TimeColumn::Minute) => self.minute = 0,
            (Key::End, TimeColumn::Minute) => self.minute = last_minute,
            (Key::Enter | Key::Char(' '), _) => {
                self.close(overlays);
                return match self.time() {
                    Some(time) => PickerOutcome::Selected(time),
                    None => PickerOutcome::Closed,
                };
            }
            (Key::Escape, _) => {
                self.close(overlays);
                return PickerOutcome::Closed;
            }
            (Key::Tab | Key::BackTab, _) => {}
            _ => return PickerOutcome::Ignored,
        }
        PickerOutcome::Handled
    }

    fn time(&self) -> Option<Time> {
        let hour = i8::try_from(self.hour).ok()?;
        let minute = i8::try_from(self.minute).ok()?;
        Time::new(hour, minute, 0, 0).ok()
    }
}
