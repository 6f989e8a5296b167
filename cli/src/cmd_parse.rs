// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg};
use colored::Colorize;
use spinform_core::{DateInput, DateParts, DatePattern};

use crate::config::Config;
use crate::util::{ArgOutputFormat, format_rows};

/// Runs a value through a date input, showing how the segments read it.
#[derive(Debug, Clone)]
pub struct CmdParse {
    pub value: String,
    pub pattern: Option<DatePattern>,
    pub output_format: ArgOutputFormat,
}

impl CmdParse {
    pub const NAME: &str = "parse";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Parse a date against a pattern and show the normalized value")
            .arg(arg!(value: <VALUE> "The date to parse, e.g. 12/25/2023"))
            .arg(arg!(-p --pattern <PATTERN> "Date pattern, defaults to the configured one"))
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        let pattern = match matches.get_one::<String>("pattern") {
            Some(p) => Some(p.parse()?),
            None => None,
        };

        Ok(Self {
            value: matches.get_one::<String>("value").cloned().unwrap_or_default(),
            pattern,
            output_format: ArgOutputFormat::from(matches),
        })
    }

    pub fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "parsing date value...");
        let pattern = self.pattern.unwrap_or(config.field.date_pattern);
        let report = ParseReport::new(pattern, &self.value);
        match self.output_format {
            ArgOutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
            ArgOutputFormat::Table => println!("{}", report.to_table()),
        }
        Ok(())
    }
}

#[derive(Debug, serde::Serialize)]
struct ParseReport {
    pattern: DatePattern,
    input: String,
    value: String,
    year: Option<u32>,
    month: Option<u32>,
    day: Option<u32>,
    complete: bool,
}

impl ParseReport {
    fn new(pattern: DatePattern, input: &str) -> Self {
        let mut date = DateInput::new(pattern);
        date.set_value(input);
        let DateParts { year, month, day } = date.parts();
        Self {
            pattern,
            input: input.to_owned(),
            value: date.value().to_owned(),
            year,
            month,
            day,
            complete: date.date().is_some(),
        }
    }

    fn to_table(&self) -> String {
        fn part(v: Option<u32>) -> String {
            v.map_or_else(|| "-".dimmed().to_string(), |v| v.to_string())
        }

        let value = if self.value.is_empty() {
            "(empty)".dimmed().to_string()
        } else if self.complete {
            self.value.green().to_string()
        } else {
            self.value.yellow().to_string()
        };

        format_rows(&[
            ("Pattern", self.pattern.to_string()),
            ("Value", value),
            ("Year", part(self.year)),
            ("Month", part(self.month)),
            ("Day", part(self.day)),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(pattern: &str, input: &str) -> ParseReport {
        ParseReport::new(pattern.parse().unwrap(), input)
    }

    #[test]
    fn normalizes_a_complete_date() {
        let r = report("YYYY-MM-DD", "2024-2-29");
        assert_eq!(r.value, "2024-02-29");
        assert_eq!((r.year, r.month, r.day), (Some(2024), Some(2), Some(29)));
        assert!(r.complete);
    }

    #[test]
    fn clamps_day_overflow() {
        let r = report("MM/DD/YYYY", "02/31/2023");
        assert_eq!(r.value, "02/28/2023");
        assert!(r.complete);
    }

    #[test]
    fn keeps_parsable_parts() {
        let r = report("DD/MM/YYYY", "xx/05/2024");
        assert_eq!(r.value, "DD/05/2024");
        assert_eq!(r.day, None);
        assert!(!r.complete);
    }

    #[test]
    fn serializes_report() {
        let r = report("YYYY-MM-DD", "2023-12-25");
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["pattern"], "YYYY-MM-DD");
        assert_eq!(json["value"], "2023-12-25");
        assert_eq!(json["month"], 12);
        assert_eq!(json["complete"], true);
    }
}
