// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::{Date, Weekday};

/// A leap year is divisible by 4, except centuries that are not divisible by 400.
pub fn is_leap_year(year: i16) -> bool {
    Date::new(year, 1, 1).is_ok_and(|d| d.in_leap_year())
}

/// The number of days in a month of the Gregorian calendar.
///
/// An unknown month allows 31 days, and an unknown year is treated as a leap year so that
/// February 29 stays reachable until the year is entered.
pub fn days_in_month(year: Option<u32>, month: Option<u32>) -> u32 {
    let Some(month) = month.and_then(|m| i8::try_from(m).ok()) else {
        return 31;
    };

    let year = year.and_then(|y| i16::try_from(y).ok()).unwrap_or(2000);
    Date::new(year, month, 1)
        .ok()
        .and_then(|d| u32::try_from(d.days_in_month()).ok())
        .unwrap_or(31)
}

/// The first day of the week in a calendar grid.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    /// The column of `weekday` in a grid starting on this day.
    fn column(self, weekday: Weekday) -> usize {
        let offset = match self {
            Self::Sunday => weekday.to_sunday_zero_offset(),
            Self::Monday => weekday.to_monday_zero_offset(),
        };
        usize::try_from(offset).unwrap_or(0)
    }

    /// Two-letter weekday headers, in grid order.
    pub const fn labels(self) -> [&'static str; 7] {
        match self {
            Self::Sunday => ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"],
            Self::Monday => ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"],
        }
    }
}

/// The days of a month laid out in weeks of seven columns. Cells outside the month are empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub year: i16,
    pub month: i8,
    pub week_start: WeekStart,
    pub weeks: Vec<[Option<Date>; 7]>,
}

impl MonthGrid {
    /// Locates `date` in the grid as (week, column).
    pub fn position(&self, date: Date) -> Option<(usize, usize)> {
        self.weeks.iter().enumerate().find_map(|(row, week)| {
            week.iter()
                .position(|cell| *cell == Some(date))
                .map(|col| (row, col))
        })
    }
}

/// Builds the grid of the month containing `date`.
pub fn month_grid(date: Date, week_start: WeekStart) -> MonthGrid {
    let first = date.first_of_month();
    let mut weeks = Vec::with_capacity(6);
    let mut week = [None; 7];

    let mut col = week_start.column(first.weekday());
    let mut day = Some(first);
    while let Some(d) = day.filter(|d| d.month() == first.month()) {
        week[col] = Some(d);
        col += 1;
        if col == 7 {
            weeks.push(week);
            week = [None; 7];
            col = 0;
        }
        day = d.tomorrow().ok();
    }
    if col != 0 {
        weeks.push(week);
    }

    MonthGrid {
        year: first.year(),
        month: first.month(),
        week_start,
        weeks,
    }
}
