// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Typing dates segment by segment.

use spinform_core::{FieldEvent, InputOutcome, Key};

use crate::common::{assert_date_parts, date_input, record_changes, record_events, type_digits};

#[test]
fn typed_date_composes_value() {
    // Arrange
    let mut input = date_input("YYYY-MM-DD", "");
    let changes = record_changes(&mut input);

    // Act
    type_digits(&mut input, "2023");
    input.key(Key::Right.into());
    type_digits(&mut input, "12");
    input.key(Key::Right.into());
    let outcome = type_digits(&mut input, "25");

    // Assert
    assert_eq!(outcome, InputOutcome::Changed("2023-12-25".to_owned()));
    assert_eq!(input.value(), "2023-12-25");
    assert_eq!(*changes.borrow(), ["2023-12-25"]);
}

#[test]
fn day_stays_within_leap_february() {
    // Arrange: February 2000 in the default pattern
    let mut input = date_input("MM/DD/YYYY", "");
    type_digits(&mut input, "02");
    input.focus(2);
    type_digits(&mut input, "2000");
    assert_eq!(input.segments()[1].max(), 29);

    // Act: "3" then "1" overflows and falls back to "1"
    input.focus(1);
    type_digits(&mut input, "31");

    // Assert
    assert_date_parts(&input, Some(2000), Some(2), Some(1));
    assert_eq!(input.paste("31"), InputOutcome::Rejected);
    assert_eq!(input.parts().day, Some(1));

    input.focus(1);
    type_digits(&mut input, "29");
    assert_eq!(input.value(), "02/29/2000");
}

#[test]
fn month_thirteen_is_rejected() {
    let mut input = date_input("YYYY-MM-DD", "");
    input.focus(1);
    assert_eq!(input.input("13"), InputOutcome::Rejected);
    assert_eq!(input.segments()[1].display_text(), "MM");

    let mut input = date_input("YYYY-MM-DD", "2023-05-10");
    input.focus(1);
    assert_eq!(input.input("13"), InputOutcome::Rejected);
    assert_eq!(input.value(), "2023-05-10");
}

#[test]
fn leading_zero_waits_for_next_digit() {
    let mut input = date_input("MM/DD/YYYY", "");
    assert_eq!(input.input("0"), InputOutcome::Pending);
    assert_eq!(input.value(), "");
    assert_eq!(input.input("5"), InputOutcome::Changed("05/DD/YYYY".to_owned()));
    assert_eq!(input.parts().month, Some(5));
}

#[test]
fn second_digit_replaces_when_concatenation_overflows() {
    let mut input = date_input("MM/DD/YYYY", "");
    type_digits(&mut input, "3");
    assert_eq!(input.parts().month, Some(3));
    type_digits(&mut input, "1");
    assert_eq!(input.parts().month, Some(1));
    type_digits(&mut input, "1");
    assert_eq!(input.parts().month, Some(11));
}

#[test]
fn paste_keeps_only_leading_digits() {
    let mut input = date_input("YYYY-MM-DD", "");
    assert_eq!(
        input.paste(" 20-23x "),
        InputOutcome::Changed("2023-MM-DD".to_owned())
    );
    assert_eq!(input.paste("no digits"), InputOutcome::Rejected);

    input.focus(1);
    assert_eq!(
        input.paste("1234"),
        InputOutcome::Changed("2023-12-DD".to_owned())
    );
}

#[test]
fn partial_value_is_published_but_not_reported() {
    let mut input = date_input("YYYY-MM-DD", "");
    let changes = record_changes(&mut input);
    let events = record_events(&mut input);

    type_digits(&mut input, "1");
    assert_eq!(
        *events.borrow(),
        [
            FieldEvent::Input("0001-MM-DD".to_owned()),
            FieldEvent::Change("0001-MM-DD".to_owned())
        ]
    );
    assert!(changes.borrow().is_empty());
}

#[test]
fn clearing_every_segment_reports_empty_value() {
    let mut input = date_input("YYYY-MM-DD", "2023-12-25");
    let changes = record_changes(&mut input);

    for index in 0..3 {
        input.focus(index);
        input.key(Key::Backspace.into());
        input.input("");
    }

    assert_eq!(input.value(), "");
    assert_eq!(*changes.borrow(), [""]);
}

#[test]
fn modified_keys_do_not_change_values() {
    let mut input = date_input("YYYY-MM-DD", "2023-12-25");
    let outcome = input.key(spinform_core::KeyPress::modified(Key::Up));
    assert_eq!(outcome, InputOutcome::Ignored);
    assert_eq!(input.value(), "2023-12-25");
}
