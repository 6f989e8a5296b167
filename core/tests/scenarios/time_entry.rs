// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Typing wall-clock times.

use std::{cell::RefCell, rc::Rc};

use spinform_core::{InputOutcome, Key, TimeInput};

#[test]
fn hour_at_max_does_not_wrap() {
    let mut input = TimeInput::new();
    input.set_value("23:00");

    assert_eq!(input.key(Key::Up.into()), InputOutcome::Rejected);
    assert_eq!(input.parts().hour, Some(23));
    assert_eq!(input.value(), "23:00");
}

#[test]
fn arrow_keys_from_empty_start_at_zero() {
    let mut input = TimeInput::new();
    assert_eq!(
        input.key(Key::Up.into()),
        InputOutcome::Changed("01:mm".to_owned())
    );
    input.focus(1);
    assert_eq!(
        input.key(Key::Down.into()),
        InputOutcome::Changed("01:00".to_owned())
    );
}

#[test]
fn paste_truncates_to_segment_width() {
    let mut input = TimeInput::new();
    assert_eq!(
        input.paste("14h45"),
        InputOutcome::Changed("14:mm".to_owned())
    );
}

#[test]
fn typed_time_reports_when_complete() {
    let mut input = TimeInput::new();
    let changes = Rc::new(RefCell::new(Vec::new()));
    let sink = changes.clone();
    input.set_on_change(Box::new(move |v| sink.borrow_mut().push(v.to_owned())));

    input.input("0");
    input.input("9");
    assert!(changes.borrow().is_empty());
    input.key(Key::Right.into());
    input.paste("30");

    assert_eq!(input.value(), "09:30");
    assert_eq!(*changes.borrow(), ["09:30"]);
}

#[test]
fn static_bounds_do_not_move() {
    let mut input = TimeInput::new();
    input.set_value("12:34");
    let bounds: Vec<_> = input
        .segments()
        .iter()
        .map(|s| (s.min(), s.max()))
        .collect();
    assert_eq!(bounds, [(0, 23), (0, 59)]);
}
