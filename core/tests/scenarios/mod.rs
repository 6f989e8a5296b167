// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Scenario tests for the spinform-core crate.
//!
//! These tests drive the inputs and pickers the way a front-end does, one key press or paste at a
//! time, and check the composed value and what was reported.

mod date_entry;
mod external_value;
mod picker_flow;
mod properties;
mod time_entry;
