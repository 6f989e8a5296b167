// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Segmented date and time inputs: numeric segments composed into one canonical value, with
//! calendar and time pickers on top.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_debug_implementations,
    unsafe_code,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro
)]

mod calendar;
mod canonical;
mod config;
mod date_input;
mod dispatcher;
mod error;
mod group;
mod key;
mod overlay;
mod pattern;
mod picker;
mod segment;
mod time_input;

pub use crate::calendar::{MonthGrid, WeekStart, days_in_month, is_leap_year, month_grid};
pub use crate::canonical::{CanonicalInput, FieldEvent, FieldState};
pub use crate::config::{APP_NAME, FieldConfig};
pub use crate::date_input::DateInput;
pub use crate::dispatcher::{Callback, Dispatcher};
pub use crate::error::{ConfigError, PatternError};
pub use crate::group::{ChangePort, InputOutcome, SegmentGroup};
pub use crate::key::{Key, KeyPress};
pub use crate::overlay::{OverlayId, OverlayManager};
pub use crate::pattern::{
    DateParts, DatePattern, DateToken, Separator, TIME_PATTERN, TIME_SEPARATOR, TimeParts,
};
pub use crate::picker::{DatePicker, PickerOutcome, TimeColumn, TimePicker};
pub use crate::segment::{EditResult, NumericSegment, SegmentKind, SpinButton};
pub use crate::time_input::TimeInput;
