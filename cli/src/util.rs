// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::ops::Range;

use clap::{Arg, ArgMatches, arg, value_parser};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// The output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ArgOutputFormat {
    Json,
    Table,
}

impl ArgOutputFormat {
    pub fn arg() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(ArgOutputFormat))
            .default_value("table")
    }

    pub fn from(matches: &ArgMatches) -> Self {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(ArgOutputFormat::Table)
    }
}

/// Display width of the first `first_n_chars` characters of `s`.
pub fn unicode_width_of_slice(s: &str, first_n_chars: usize) -> usize {
    match s.char_indices().nth(first_n_chars) {
        Some((byte_idx, _)) => s[..byte_idx].width(),
        None => s.width(),
    }
}

/// The byte range of the grapheme cluster that ends right before character `char_idx` of `s`.
pub fn byte_range_of_grapheme_before(s: &str, char_idx: usize) -> Option<Range<usize>> {
    let end = s.char_indices().nth(char_idx).map_or(s.len(), |(i, _)| i);
    s[..end]
        .grapheme_indices(true)
        .next_back()
        .map(|(start, g)| start..start + g.len())
}

/// Writes `label: value` rows with the labels padded to the same width.
pub fn format_rows(rows: &[(&str, String)]) -> String {
    let width = rows.iter().map(|(label, _)| label.width()).max().unwrap_or(0);
    rows.iter()
        .map(|(label, value)| {
            let pad = width - label.width();
            format!("{label}{:pad$}  {value}", "")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
