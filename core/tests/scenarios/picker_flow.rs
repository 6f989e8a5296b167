// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Picking values from the overlays and writing them into the inputs.

use jiff::civil::{date, time};
use spinform_core::{
    DatePicker, FieldConfig, FieldEvent, InputOutcome, Key, OverlayManager, PickerOutcome,
    TimeInput, TimePicker,
};

use crate::common::{date_input, record_changes, record_events};

#[test]
fn picked_date_is_published_into_the_input() {
    // Arrange
    let mut overlays = OverlayManager::new();
    let mut picker = DatePicker::from_config(&mut overlays, &FieldConfig::default());
    let mut input = date_input("MM/DD/YYYY", "12/24/2023");
    let changes = record_changes(&mut input);
    let events = record_events(&mut input);

    // Act: December 24 2023 is a Sunday, Up goes a week back
    let anchor = input.date().unwrap();
    picker.open(&mut overlays, anchor);
    assert_eq!(picker.key(&mut overlays, Key::Up.into()), PickerOutcome::Handled);
    let PickerOutcome::Selected(picked) = picker.key(&mut overlays, Key::Enter.into()) else {
        panic!("Enter should select the focused date");
    };
    let outcome = input.select_date(picked);

    // Assert
    assert_eq!(picked, date(2023, 12, 17));
    assert_eq!(outcome, InputOutcome::Changed("12/17/2023".to_owned()));
    assert_eq!(*changes.borrow(), ["12/17/2023"]);
    assert_eq!(
        *events.borrow(),
        [
            FieldEvent::Input("12/17/2023".to_owned()),
            FieldEvent::Change("12/17/2023".to_owned())
        ]
    );
    assert_eq!(overlays.current(), None);
}

#[test]
fn escape_leaves_the_input_untouched() {
    let mut overlays = OverlayManager::new();
    let mut picker = DatePicker::from_config(&mut overlays, &FieldConfig::default());
    let mut input = date_input("YYYY-MM-DD", "2023-12-25");
    let changes = record_changes(&mut input);

    picker.open(&mut overlays, date(2023, 12, 25));
    picker.key(&mut overlays, Key::PageDown.into());
    assert_eq!(
        picker.key(&mut overlays, Key::Escape.into()),
        PickerOutcome::Closed
    );

    assert_eq!(input.value(), "2023-12-25");
    assert!(changes.borrow().is_empty());
    assert!(!picker.is_open(&overlays));
}

#[test]
fn grid_follows_the_focused_month() {
    let mut overlays = OverlayManager::new();
    let mut picker = DatePicker::from_config(&mut overlays, &FieldConfig::default());
    picker.open(&mut overlays, date(2024, 1, 31));
    picker.key(&mut overlays, Key::Right.into());

    let grid = picker.grid();
    assert_eq!((grid.year, grid.month), (2024, 2));
    assert!(grid.position(date(2024, 2, 1)).is_some());
}

#[test]
fn picked_time_respects_the_minute_step() {
    let mut overlays = OverlayManager::new();
    let config = FieldConfig {
        minute_step: 30,
        ..Default::default()
    };
    let mut picker = TimePicker::from_config(&mut overlays, &config);
    let mut input = TimeInput::new();

    picker.open(&mut overlays, time(8, 10, 0, 0));
    picker.key(&mut overlays, Key::Right.into());
    picker.key(&mut overlays, Key::Down.into());
    let PickerOutcome::Selected(picked) = picker.key(&mut overlays, Key::Enter.into()) else {
        panic!("Enter should select the focused time");
    };

    assert_eq!(
        input.select_time(picked),
        InputOutcome::Changed("08:30".to_owned())
    );
}

#[test]
fn only_one_picker_is_open_at_a_time() {
    let mut overlays = OverlayManager::new();
    let config = FieldConfig::default();
    let mut dates = DatePicker::from_config(&mut overlays, &config);
    let mut times = TimePicker::from_config(&mut overlays, &config);

    dates.open(&mut overlays, date(2023, 12, 25));
    times.open(&mut overlays, time(12, 0, 0, 0));

    assert!(!dates.is_open(&overlays));
    assert_eq!(overlays.current(), Some(times.overlay()));
    assert_eq!(
        times.key(&mut overlays, Key::Tab.into()),
        PickerOutcome::Handled
    );
    assert!(times.is_open(&overlays));
}
