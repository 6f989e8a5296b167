// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Values pushed into the inputs from outside.

use crate::common::{assert_date_parts, date_input, record_changes, record_events};

#[test]
fn later_external_value_fills_every_segment() {
    // Arrange
    let mut input = date_input("YYYY-MM-DD", "");
    let changes = record_changes(&mut input);
    let events = record_events(&mut input);

    // Act
    input.set_value("2023-12-25");

    // Assert
    assert_date_parts(&input, Some(2023), Some(12), Some(25));
    assert_eq!(input.value(), "2023-12-25");
    assert!(changes.borrow().is_empty());
    assert!(events.borrow().is_empty());
}

#[test]
fn same_external_value_twice_is_a_no_op() {
    let mut input = date_input("DD/MM/YYYY", "");
    let changes = record_changes(&mut input);

    input.set_value("25/12/2023");
    let segments = input.segments().to_vec();
    input.set_value("25/12/2023");

    assert_eq!(input.segments(), segments.as_slice());
    assert!(changes.borrow().is_empty());
}

#[test]
fn unparsable_parts_become_empty() {
    let mut input = date_input("YYYY-MM-DD", "");
    input.set_value("2023-13-25");
    assert_date_parts(&input, Some(2023), None, Some(25));
    assert_eq!(input.value(), "2023-MM-25");

    input.set_value("not a date");
    assert_date_parts(&input, None, None, None);
    assert_eq!(input.value(), "");
}

#[test]
fn external_value_in_another_layout_is_empty() {
    let input = date_input("MM/DD/YYYY", "2023-12-25");
    assert_eq!(input.value(), "");
}

#[test]
fn user_edit_after_external_value_reports_once() {
    let mut input = date_input("YYYY-MM-DD", "2023-12-25");
    let changes = record_changes(&mut input);

    input.focus(2);
    input.key(spinform_core::Key::Up.into());
    input.set_value("2023-12-26");

    assert_eq!(*changes.borrow(), ["2023-12-26"]);
    assert_eq!(input.value(), "2023-12-26");
}
