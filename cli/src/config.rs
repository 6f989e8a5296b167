// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, io, path::PathBuf, str::FromStr};

use tokio::fs;

use spinform_core::{APP_NAME, FieldConfig};

const SPINFORM_CONFIG_ENV: &str = "SPINFORM_CONFIG";

/// Configuration for the spinform application.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Date and time field settings.
    pub field: FieldConfig,
}

/// Loads the configuration from `--config`, then `SPINFORM_CONFIG`, then the user config
/// directory. Only a missing file at the default location falls back to the defaults.
#[tracing::instrument]
pub async fn parse_config(path: Option<PathBuf>) -> Result<Config, Box<dyn Error>> {
    let path = if let Some(path) = path {
        path
    } else if let Ok(env_path) = std::env::var(SPINFORM_CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        let config = get_config_dir()?.join(format!("{APP_NAME}/config.toml"));
        match fs::read_to_string(&config).await {
            Ok(content) => return content.parse::<ConfigRaw>()?.normalize(),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %config.display(), "no config found, using defaults");
                return Ok(Config::default());
            }
            Err(e) => {
                return Err(format!(
                    "Failed to read config file at {}: {}",
                    config.display(),
                    e
                )
                .into());
            }
        }
    };

    fs::read_to_string(&path)
        .await
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
        .parse::<ConfigRaw>()?
        .normalize()
}

#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct ConfigRaw {
    field: FieldConfig,
}

impl ConfigRaw {
    fn normalize(self) -> Result<Config, Box<dyn Error>> {
        let mut field = self.field;
        field.normalize()?;
        Ok(Config { field })
    }
}

impl FromStr for ConfigRaw {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific home directory not found".into())
}
