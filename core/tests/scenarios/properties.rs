// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Properties that hold for every pattern and every keystroke sequence.

use spinform_core::{DateParts, DatePattern, Key, days_in_month};

use crate::common::{ALL_PATTERNS, assert_segments_in_range, date_input};

const DATES: [(u32, u32, u32); 6] = [
    (2023, 12, 25),
    (2000, 2, 29),
    (1900, 2, 28),
    (1, 1, 1),
    (9999, 12, 31),
    (2024, 7, 4),
];

#[test]
fn formatted_dates_parse_back() {
    for pattern in ALL_PATTERNS {
        let pattern: DatePattern = pattern.parse().unwrap();
        for (year, month, day) in DATES {
            let parts = DateParts::new(year, month, day);
            let value = pattern.format(&parts);
            assert_eq!(pattern.parse(&value), parts, "{pattern} {value}");
        }
    }
}

#[test]
fn inputs_round_trip_external_values() {
    for pattern in ALL_PATTERNS {
        for (year, month, day) in DATES {
            let value = pattern
                .parse::<DatePattern>()
                .unwrap()
                .format(&DateParts::new(year, month, day));
            let input = date_input(pattern, &value);
            assert_eq!(input.value(), value);
            assert_eq!(input.parts(), DateParts::new(year, month, day));
        }
    }
}

#[test]
fn changing_month_clamps_day_to_month_length() {
    for year in [1900, 2000, 2023, 2024] {
        for month in 1..=12 {
            let mut input = date_input("YYYY-MM-DD", &format!("{year:04}-01-31"));
            input.focus(1);
            input.paste(&format!("{month:02}"));

            let expected = days_in_month(Some(year), Some(month));
            assert_eq!(input.parts().day, Some(expected), "{year}-{month}");
        }
    }
}

#[test]
fn no_keystroke_sequence_escapes_segment_bounds() {
    // a small linear congruential generator keeps the sequence reproducible
    let mut seed: u32 = 0x2023_1225;
    let mut next = move || {
        seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        seed >> 16
    };

    for pattern in ALL_PATTERNS {
        let mut input = date_input(pattern, "");
        for _ in 0..500 {
            match next() % 8 {
                0 => {
                    input.key(Key::Up.into());
                }
                1 => {
                    input.key(Key::Down.into());
                }
                2 => {
                    input.key(Key::Left.into());
                }
                3 => {
                    input.key(Key::Right.into());
                }
                4 => {
                    input.input("");
                }
                5 => {
                    let digits = (next() % 100_000).to_string();
                    input.paste(&digits);
                }
                _ => {
                    let digit = (next() % 10).to_string();
                    input.input(&digit);
                }
            }
            assert_segments_in_range(input.segments());
        }
    }
}
