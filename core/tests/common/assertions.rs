// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Custom assertion helpers for integration tests.

use spinform_core::{DateInput, NumericSegment};

/// Asserts that every segment holding a value holds one within its bounds.
///
/// # Panics
///
/// Panics if a segment value lies outside `min..=max`.
pub fn assert_segments_in_range(segments: &[NumericSegment]) {
    for segment in segments {
        if let Some(v) = segment.value() {
            assert!(
                (segment.min()..=segment.max()).contains(&v),
                "{} value {v} outside {}..={}",
                segment.kind(),
                segment.min(),
                segment.max()
            );
        }
    }
}

/// Asserts the year, month and day currently held by a date input.
///
/// # Panics
///
/// Panics if any part differs.
pub fn assert_date_parts(
    input: &DateInput,
    year: Option<u32>,
    month: Option<u32>,
    day: Option<u32>,
) {
    let parts = input.parts();
    assert_eq!(parts.year, year, "Year mismatch");
    assert_eq!(parts.month, month, "Month mismatch");
    assert_eq!(parts.day, day, "Day mismatch");
}
