// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::str::FromStr;

use serde::de;

use crate::error::PatternError;
use crate::segment::SegmentKind;

/// The layout of the time input, which is not configurable.
pub const TIME_PATTERN: &str = "HH:mm";

/// The separator of the time input.
pub const TIME_SEPARATOR: char = ':';

/// A token of a date pattern.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
pub enum DateToken {
    #[strum(serialize = "YYYY")]
    Year,

    #[strum(serialize = "MM")]
    Month,

    #[strum(serialize = "DD")]
    Day,
}

impl DateToken {
    pub const fn kind(self) -> SegmentKind {
        match self {
            Self::Year => SegmentKind::Year,
            Self::Month => SegmentKind::Month,
            Self::Day => SegmentKind::Day,
        }
    }
}

/// The character between the tokens of a date pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Separator {
    Dash,
    Slash,
}

impl Separator {
    pub const fn as_char(self) -> char {
        match self {
            Self::Dash => '-',
            Self::Slash => '/',
        }
    }
}

impl TryFrom<char> for Separator {
    type Error = PatternError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '-' => Ok(Self::Dash),
            '/' => Ok(Self::Slash),
            _ => Err(PatternError::InvalidSeparator(c)),
        }
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// The values of a date, each of which may be missing.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateParts {
    pub year: Option<u32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
}

impl DateParts {
    pub const fn new(year: u32, month: u32, day: u32) -> Self {
        Self {
            year: Some(year),
            month: Some(month),
            day: Some(day),
        }
    }

    pub const fn get(&self, token: DateToken) -> Option<u32> {
        match token {
            DateToken::Year => self.year,
            DateToken::Month => self.month,
            DateToken::Day => self.day,
        }
    }

    pub fn set(&mut self, token: DateToken, value: Option<u32>) {
        match token {
            DateToken::Year => self.year = value,
            DateToken::Month => self.month = value,
            DateToken::Day => self.day = value,
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.year.is_none() && self.month.is_none() && self.day.is_none()
    }

    pub const fn is_complete(&self) -> bool {
        self.year.is_some() && self.month.is_some() && self.day.is_some()
    }

    /// Converts complete parts into a civil date, if they form a real calendar day.
    pub fn to_date(&self) -> Option<jiff::civil::Date> {
        let year = i16::try_from(self.year?).ok()?;
        let month = i8::try_from(self.month?).ok()?;
        let day = i8::try_from(self.day?).ok()?;
        jiff::civil::Date::new(year, month, day).ok()
    }
}

impl From<jiff::civil::Date> for DateParts {
    fn from(date: jiff::civil::Date) -> Self {
        Self {
            year: u32::try_from(date.year()).ok(),
            month: u32::try_from(date.month()).ok(),
            day: u32::try_from(date.day()).ok(),
        }
    }
}

/// The order and separator of the segments of a date input, e.g. `MM/DD/YYYY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DatePattern {
    order: [DateToken; 3],
    separator: Separator,
}

impl DatePattern {
    pub const fn order(&self) -> [DateToken; 3] {
        self.order
    }

    pub const fn separator(&self) -> Separator {
        self.separator
    }

    /// Composes the canonical value: each part zero-padded, or its token when missing. Parts that
    /// are all missing compose to an empty string.
    pub fn format(&self, parts: &DateParts) -> String {
        if parts.is_empty() {
            return String::new();
        }

        let texts: Vec<String> = self
            .order
            .iter()
            .map(|token| pad_or_token(parts.get(*token), token.kind()))
            .collect();
        let separator = self.separator.to_string();
        texts.join(separator.as_str())
    }

    /// Parses a value laid out by this pattern. Parts that do not parse are missing.
    pub fn parse(&self, s: &str) -> DateParts {
        let mut parts = DateParts::default();
        if s.is_empty() {
            return parts;
        }

        let texts: Vec<&str> = s.split(self.separator.as_char()).collect();
        if texts.len() != self.order.len() {
            tracing::debug!(value = s, pattern = %self, "value does not match the pattern layout");
            return parts;
        }

        for (token, text) in self.order.iter().zip(texts) {
            parts.set(*token, parse_part(text, token.kind()));
        }
        parts
    }
}

impl Default for DatePattern {
    fn default() -> Self {
        Self {
            order: [DateToken::Month, DateToken::Day, DateToken::Year],
            separator: Separator::Slash,
        }
    }
}

impl FromStr for DatePattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = Vec::with_capacity(3);
        let mut separators = Vec::with_capacity(2);

        let mut rest = s;
        loop {
            let end = rest
                .find(|c: char| !c.is_ascii_alphabetic())
                .unwrap_or(rest.len());
            let (token, tail) = rest.split_at(end);
            if token.is_empty() {
                return Err(PatternError::Shape(s.to_owned()));
            }
            tokens.push(token);

            let mut chars = tail.chars();
            match chars.next() {
                Some(c) => separators.push(c),
                None => break,
            }
            rest = chars.as_str();
        }

        let (Ok(tokens), &[first, second]) = (<[&str; 3]>::try_from(tokens), separators.as_slice())
        else {
            return Err(PatternError::Shape(s.to_owned()));
        };

        let separator = Separator::try_from(first)?;
        if first != second {
            return Err(PatternError::MismatchedSeparator { first, second });
        }

        let mut order = [DateToken::Year; 3];
        for (i, text) in tokens.iter().enumerate() {
            let token = text
                .parse::<DateToken>()
                .map_err(|_| PatternError::UnknownToken((*text).to_owned()))?;
            if order[..i].contains(&token) {
                return Err(PatternError::DuplicateToken(token));
            }
            order[i] = token;
        }

        Ok(Self { order, separator })
    }
}

impl fmt::Display for DatePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.order;
        let sep = self.separator;
        write!(f, "{a}{sep}{b}{sep}{c}")
    }
}

impl serde::Serialize for DatePattern {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for DatePattern {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct PatternVisitor;

        impl de::Visitor<'_> for PatternVisitor {
            type Value = DatePattern;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str(r#"a date pattern like "MM/DD/YYYY" or "YYYY-MM-DD""#)
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                value.parse().map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(PatternVisitor)
    }
}

/// The values of a wall-clock time, each of which may be missing.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeParts {
    pub hour: Option<u32>,
    pub minute: Option<u32>,
}

impl TimeParts {
    pub const fn new(hour: u32, minute: u32) -> Self {
        Self {
            hour: Some(hour),
            minute: Some(minute),
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.hour.is_none() && self.minute.is_none()
    }

    pub const fn is_complete(&self) -> bool {
        self.hour.is_some() && self.minute.is_some()
    }

    /// Composes the canonical `HH:mm` value, empty when both parts are missing.
    pub fn format(&self) -> String {
        if self.is_empty() {
            return String::new();
        }

        let hour = pad_or_token(self.hour, SegmentKind::Hour);
        let minute = pad_or_token(self.minute, SegmentKind::Minute);
        format!("{hour}{TIME_SEPARATOR}{minute}")
    }

    /// Parses an `HH:mm` value. Parts that do not parse are missing.
    pub fn parse(s: &str) -> Self {
        match s.split_once(TIME_SEPARATOR) {
            Some((hour, minute)) if !minute.contains(TIME_SEPARATOR) => Self {
                hour: parse_part(hour, SegmentKind::Hour),
                minute: parse_part(minute, SegmentKind::Minute),
            },
            _ => {
                if !s.is_empty() {
                    tracing::debug!(value = s, "value does not match {TIME_PATTERN}");
                }
                Self::default()
            }
        }
    }

    pub fn to_time(&self) -> Option<jiff::civil::Time> {
        let hour = i8::try_from(self.hour?).ok()?;
        let minute = i8::try_from(self.minute?).ok()?;
        jiff::civil::Time::new(hour, minute, 0, 0).ok()
    }
}

impl From<jiff::civil::Time> for TimeParts {
    fn from(time: jiff::civil::Time) -> Self {
        Self {
            hour: u32::try_from(time.hour()).ok(),
            minute: u32::try_from(time.minute()).ok(),
        }
    }
}

fn pad_or_token(value: Option<u32>, kind: SegmentKind) -> String {
    match value {
        Some(v) => format!("{v:0width$}", width = kind.width()),
        None => kind.token().to_owned(),
    }
}

/// Parses one part of a composed value: 1 to `width` digits within the default range of the kind.
fn parse_part(text: &str, kind: SegmentKind) -> Option<u32> {
    if text.is_empty() || text.len() > kind.width() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let (min, max) = kind.range();
    text.parse().ok().filter(|v| (min..=max).contains(v))
}
