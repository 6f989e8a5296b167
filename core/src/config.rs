// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::calendar::WeekStart;
use crate::error::ConfigError;
use crate::pattern::DatePattern;

/// The name of the application.
pub const APP_NAME: &str = "spinform";

/// Configuration of the date and time fields.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Order and separator of the date segments.
    pub date_pattern: DatePattern,

    /// First column of the calendar grid.
    pub week_start: WeekStart,

    /// Minutes between two entries of the time picker.
    pub minute_step: u32,

    /// Years the date picker can move within.
    pub year_range: (i16, i16),
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            date_pattern: DatePattern::default(),
            week_start: WeekStart::default(),
            minute_step: 1,
            year_range: (1, 9999),
        }
    }
}

impl FieldConfig {
    /// Normalize the configuration, rejecting values the pickers cannot work with.
    pub fn normalize(&mut self) -> Result<(), ConfigError> {
        if self.minute_step == 0 || 60 % self.minute_step != 0 {
            return Err(ConfigError::MinuteStep(self.minute_step));
        }

        let (start, end) = self.year_range;
        if start < 1 || end > 9999 || start > end {
            return Err(ConfigError::YearRange { start, end });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::pattern::DateToken;

    use super::*;

    #[test]
    fn defaults_when_empty() {
        let config: FieldConfig = toml::from_str("").unwrap();
        assert_eq!(config, FieldConfig::default());
        assert_eq!(config.date_pattern.to_string(), "MM/DD/YYYY");
        assert_eq!(config.week_start, WeekStart::Sunday);
    }

    #[test]
    fn parses_all_fields() {
        let mut config: FieldConfig = toml::from_str(
            r#"
date_pattern = "YYYY-MM-DD"
week_start = "monday"
minute_step = 15
year_range = [2000, 2100]
"#,
        )
        .unwrap();
        config.normalize().unwrap();
        assert_eq!(config.date_pattern.order()[0], DateToken::Year);
        assert_eq!(config.week_start, WeekStart::Monday);
        assert_eq!(config.minute_step, 15);
        assert_eq!(config.year_range, (2000, 2100));
    }

    #[test]
    fn rejects_minute_step_not_dividing_an_hour() {
        for step in [0, 7, 45] {
            let mut config = FieldConfig {
                minute_step: step,
                ..Default::default()
            };
            assert_eq!(config.normalize(), Err(ConfigError::MinuteStep(step)));
        }
    }

    #[test]
    fn rejects_empty_year_range() {
        let mut config = FieldConfig {
            year_range: (2030, 2020),
            ..Default::default()
        };
        assert_eq!(
            config.normalize(),
            Err(ConfigError::YearRange {
                start: 2030,
                end: 2020
            })
        );
    }

    #[test]
    fn rejects_invalid_pattern() {
        let result = toml::from_str::<FieldConfig>(r#"date_pattern = "YYYY/DD""#);
        assert!(result.is_err());
    }
}
