// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Common test utilities for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - Input factories and keystroke drivers (fixtures)
//! - Custom assertion helpers

mod assertions;
mod fixtures;

#[allow(unused_imports)]
pub use assertions::{assert_date_parts, assert_segments_in_range};
#[allow(unused_imports)]
pub use fixtures::{
    ALL_PATTERNS, Recorder, date_input, record_changes, record_events, type_digits,
};
