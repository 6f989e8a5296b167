// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.
//!
//! This module provides helper functions to build inputs, feed them keystrokes and record what
//! they report.

use std::{cell::RefCell, rc::Rc};

use spinform_core::{DateInput, FieldEvent, InputOutcome};

/// Every valid date pattern: each order of the three tokens, with both separators.
pub const ALL_PATTERNS: [&str; 12] = [
    "YYYY-MM-DD",
    "YYYY-DD-MM",
    "MM-YYYY-DD",
    "MM-DD-YYYY",
    "DD-YYYY-MM",
    "DD-MM-YYYY",
    "YYYY/MM/DD",
    "YYYY/DD/MM",
    "MM/YYYY/DD",
    "MM/DD/YYYY",
    "DD/YYYY/MM",
    "DD/MM/YYYY",
];

/// Values collected by a callback, shared with the test body.
pub type Recorder<T> = Rc<RefCell<Vec<T>>>;

/// Creates a date input for `pattern`, seeded with `value` from outside.
///
/// # Panics
///
/// Panics if the pattern is invalid.
#[must_use]
pub fn date_input(pattern: &str, value: &str) -> DateInput {
    let mut input = DateInput::from_pattern_str(pattern).expect("pattern should be valid");
    input.set_value(value);
    input
}

/// Records every value passed to the change port of `input`.
pub fn record_changes(input: &mut DateInput) -> Recorder<String> {
    let changes = Rc::new(RefCell::new(Vec::new()));
    let sink = changes.clone();
    input.set_on_change(Box::new(move |v| sink.borrow_mut().push(v.to_owned())));
    changes
}

/// Records every event published on the canonical value of `input`.
pub fn record_events(input: &mut DateInput) -> Recorder<FieldEvent> {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = events.clone();
    input.subscribe(move |e| sink.borrow_mut().push(e.clone()));
    events
}

/// Types `digits` one character at a time into the focused segment, returning the last outcome.
pub fn type_digits(input: &mut DateInput, digits: &str) -> InputOutcome {
    let mut outcome = InputOutcome::Ignored;
    for c in digits.chars() {
        outcome = input.input(&c.to_string());
    }
    outcome
}
