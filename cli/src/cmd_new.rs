// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg, value_parser};
use colored::Colorize;
use spinform_core::{DatePattern, WeekStart};

use crate::config::Config;
use crate::tui::{self, EventData, EventDraft, EventStore};
use crate::util::{ArgOutputFormat, format_rows};

/// Fills in a new event, in the terminal form unless a summary is given.
#[derive(Debug, Clone)]
pub struct CmdNew {
    pub date: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub summary: Option<String>,
    pub pattern: Option<String>,
    pub week_start: Option<WeekStart>,
    pub output_format: ArgOutputFormat,
}

impl Default for CmdNew {
    fn default() -> Self {
        Self {
            date: None,
            start: None,
            end: None,
            summary: None,
            pattern: None,
            week_start: None,
            output_format: ArgOutputFormat::Table,
        }
    }
}

impl CmdNew {
    pub const NAME: &str = "new";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("add")
            .about("Fill in a new event")
            .arg(arg!(--date <DATE> "Date of the event, in the date pattern, e.g. 12/25/2023"))
            .arg(arg!(--start <TIME> "Start time, e.g. 09:30"))
            .arg(arg!(--end <TIME> "End time, e.g. 10:00"))
            .arg(arg!(-s --summary <SUMMARY> "Summary of the event, skips the form when given"))
            .arg(arg!(-p --pattern <PATTERN> "Date pattern, defaults to the configured one"))
            .arg(
                arg!(--"week-start" <DAY> "First day of the week in the calendar")
                    .value_parser(value_parser!(WeekStart)),
            )
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        let get = |id: &str| matches.get_one::<String>(id).cloned();
        Self {
            date: get("date"),
            start: get("start"),
            end: get("end"),
            summary: get("summary"),
            pattern: get("pattern"),
            week_start: matches.get_one("week-start").copied(),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "filling in new event...");
        let pattern = match &self.pattern {
            Some(p) => p.parse::<DatePattern>(),
            None => Ok(config.field.date_pattern),
        };
        if let Err(e) = &pattern {
            tracing::warn!(err = %e, "invalid date pattern");
        }

        let interactive = self.summary.is_none();
        let data = EventData {
            summary: self.summary.unwrap_or_default(),
            date: self.date.unwrap_or_default(),
            start: self.start.unwrap_or_default(),
            end: self.end.unwrap_or_default(),
        };

        let draft = if interactive {
            let mut field = config.field.clone();
            if let Some(week_start) = self.week_start {
                field.week_start = week_start;
            }
            match tui::draft_event(data, pattern, &field)? {
                Some(draft) => draft,
                None => {
                    tracing::info!("user cancel the event creation");
                    return Ok(());
                }
            }
        } else {
            EventStore::new(data, Some(pattern?)).submit_draft()?
        };

        match self.output_format {
            ArgOutputFormat::Json => println!("{}", serde_json::to_string_pretty(&draft)?),
            ArgOutputFormat::Table => println!("{}", to_table(&draft)),
        }
        Ok(())
    }
}

fn to_table(draft: &EventDraft) -> String {
    let time = |t: Option<jiff::civil::Time>| {
        t.map_or_else(|| "-".dimmed().to_string(), |t| t.strftime("%H:%M").to_string())
    };

    format_rows(&[
        ("Summary", draft.summary.bold().to_string()),
        ("Date", draft.date.to_string()),
        ("Start", time(draft.start)),
        ("End", time(draft.end)),
    ])
}
