// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line front-end of spinform: an event form with segmented date and time fields,
//! rendered in the terminal.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro
)]

mod cli;
mod cmd_generate_completion;
mod cmd_new;
mod cmd_parse;
mod config;
mod tui;
mod util;

pub use crate::cli::{Cli, Commands, run};
pub use crate::config::Config;
