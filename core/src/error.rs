// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::pattern::DateToken;

/// A date pattern that cannot drive a segmented date input.
///
/// This is a configuration error: an input built from such a pattern shows an "invalid pattern"
/// placeholder instead of segments, and nothing the user types can recover from it.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    /// The pattern is not of the form `TOKEN SEP TOKEN SEP TOKEN`.
    #[error("Invalid date pattern '{0}', expected e.g. MM/DD/YYYY or YYYY-MM-DD")]
    Shape(String),

    /// A token is not one of `YYYY`, `MM` or `DD`.
    #[error("Unknown token '{0}' in date pattern, expected one of YYYY, MM, DD")]
    UnknownToken(String),

    /// A token appears more than once.
    #[error("Duplicate token '{0}' in date pattern")]
    DuplicateToken(DateToken),

    /// The two separators differ.
    #[error("Mismatched separators '{first}' and '{second}' in date pattern")]
    MismatchedSeparator { first: char, second: char },

    /// The separator is not `-` or `/`.
    #[error("Invalid separator '{0}' in date pattern, expected '-' or '/'")]
    InvalidSeparator(char),
}

/// Invalid field configuration values.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The minute step of the time picker does not divide an hour.
    #[error("Invalid minute step {0}, expected a divisor of 60")]
    MinuteStep(u32),

    /// The year range of the date picker is empty or outside 1..=9999.
    #[error("Invalid year range {start}..={end}, expected a range within 1..=9999")]
    YearRange { start: i16, end: i16 },
}
