// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, error::Error, rc::Rc};

use jiff::civil::{Date, Time};
use spinform_core::{DateInput, DatePattern, TimeInput, TimeParts};

use crate::tui::dispatcher::{Action, Dispatcher};

/// The state of the event form, mirroring the canonical value of every field.
#[derive(Debug)]
pub struct EventStore {
    pub data: EventData,
    pub dirty: EventMarker,

    /// Whether the user submit the changes
    pub submit: bool,

    /// How the date is laid out, `None` if the configured pattern is invalid.
    pattern: Option<DatePattern>,
}

impl EventStore {
    /// Creates a store from initial values, normalizing them the way the fields would show them.
    pub fn new(data: EventData, pattern: Option<DatePattern>) -> Self {
        let date = match pattern {
            Some(pattern) => {
                let mut input = DateInput::new(pattern);
                input.set_value(&data.date);
                input.value().to_owned()
            }
            None => data.date,
        };

        Self {
            data: EventData {
                date,
                start: normalize_time(&data.start),
                end: normalize_time(&data.end),
                summary: data.summary,
            },
            dirty: EventMarker::default(),
            submit: false,
            pattern,
        }
    }

    pub fn pattern(&self) -> Option<DatePattern> {
        self.pattern
    }

    /// Validates the form: the date is required and complete, the times are complete when given,
    /// and the event does not end before it starts.
    pub fn submit_draft(self) -> Result<EventDraft, Box<dyn Error>> {
        let pattern = self
            .pattern
            .ok_or("The date pattern is invalid, fix it in the configuration or --pattern")?;

        if self.data.date.is_empty() {
            return Err("Date is required".into());
        }
        let date = pattern
            .parse(&self.data.date)
            .to_date()
            .ok_or_else(|| format!("Incomplete date: {}", self.data.date))?;

        let start = parse_time("start", &self.data.start)?;
        let end = parse_time("end", &self.data.end)?;
        if let (Some(start), Some(end)) = (start, end)
            && end < start
        {
            return Err(format!(
                "End time {} is before start time {}",
                self.data.end, self.data.start
            )
            .into());
        }

        Ok(EventDraft {
            summary: match self.data.summary.trim() {
                "" => "New event".to_string(),
                summary => summary.to_string(),
            },
            date,
            start,
            end,
        })
    }

    pub fn register_to(that: Rc<RefCell<Self>>, dispatcher: &mut Dispatcher) {
        let callback = Rc::new(RefCell::new(move |action: &Action| {
            let mut that = that.borrow_mut();
            match action {
                Action::UpdateSummary(v) => {
                    that.data.summary = v.clone();
                    that.dirty.summary = true;
                }
                Action::UpdateDate(v) => {
                    tracing::debug!(value = %v, "date changed");
                    that.data.date = v.clone();
                    that.dirty.date = true;
                }
                Action::UpdateStart(v) => {
                    tracing::debug!(value = %v, "start time changed");
                    that.data.start = v.clone();
                    that.dirty.start = true;
                }
                Action::UpdateEnd(v) => {
                    tracing::debug!(value = %v, "end time changed");
                    that.data.end = v.clone();
                    that.dirty.end = true;
                }
                Action::SubmitChanges => that.submit = true,
            }
        }));
        dispatcher.register(callback);
    }
}

/// The field values, as composed by the inputs, e.g. `12/25/2023` and `09:30`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EventData {
    pub summary: String,
    pub date: String,
    pub start: String,
    pub end: String,
}

#[derive(Debug, Default)]
pub struct EventMarker {
    pub summary: bool,
    pub date: bool,
    pub start: bool,
    pub end: bool,
}

/// A validated event.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct EventDraft {
    pub summary: String,
    pub date: Date,
    pub start: Option<Time>,
    pub end: Option<Time>,
}

fn normalize_time(value: &str) -> String {
    let mut input = TimeInput::new();
    input.set_value(value);
    input.value().to_owned()
}

fn parse_time(name: &str, value: &str) -> Result<Option<Time>, Box<dyn Error>> {
    if value.is_empty() {
        return Ok(None);
    }

    match TimeParts::parse(value).to_time() {
        Some(time) => Ok(Some(time)),
        None => Err(format!("Incomplete {name} time: {value}").into()),
    }
}
