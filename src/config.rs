use std::path::{Path, PathBuf};

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::schedule::time::{MINUTES_PER_DAY, parse_hhmm};
use crate::schedule::window::DayWindow;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Invalid config value: {0}")]
    InvalidValue(String),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub schedule: ScheduleConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScheduleConfig {
    pub day_start: String,
    pub day_end: String,
    pub step_minutes: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UiConfig {
    pub week_starts_on: String,
    pub default_view: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Week,
    Day,
    Agenda,
}

impl Config {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }

    pub fn load_or_create() -> Result<Self, ConfigError> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("weekgrid")
            .join("config.toml")
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).expect("Failed to serialize config");
        std::fs::write(path, content)?;

        Ok(())
    }

    pub fn day_window(&self) -> Result<DayWindow, ConfigError> {
        let start = parse_hhmm(&self.schedule.day_start)
            .map_err(|err| ConfigError::InvalidValue(format!("day_start: {}", err)))?;
        let end = if self.schedule.day_end == "24:00" {
            MINUTES_PER_DAY
        } else {
            parse_hhmm(&self.schedule.day_end)
                .map_err(|err| ConfigError::InvalidValue(format!("day_end: {}", err)))?
        };
        let step = self.schedule.step_minutes;

        if step == 0 {
            return Err(ConfigError::InvalidValue(
                "step_minutes must be positive".to_string(),
            ));
        }
        if start >= end {
            return Err(ConfigError::InvalidValue(format!(
                "day_start {} must come before day_end {}",
                self.schedule.day_start, self.schedule.day_end
            )));
        }
        if (end - start) % step != 0 {
            return Err(ConfigError::InvalidValue(format!(
                "window is not a whole number of {}-minute slots",
                step
            )));
        }

        Ok(DayWindow::new(start, end, step))
    }

    pub fn week_start(&self) -> Result<Weekday, ConfigError> {
        self.ui.week_starts_on.parse::<Weekday>().map_err(|_| {
            ConfigError::InvalidValue(format!(
                "week_starts_on: unknown weekday '{}'",
                self.ui.week_starts_on
            ))
        })
    }

    pub fn default_view(&self) -> Result<View, ConfigError> {
        match self.ui.default_view.to_ascii_lowercase().as_str() {
            "week" => Ok(View::Week),
            "day" => Ok(View::Day),
            "agenda" => Ok(View::Agenda),
            _ => Err(ConfigError::InvalidValue(format!(
                "default_view: unknown view '{}'",
                self.ui.default_view
            ))),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schedule: ScheduleConfig {
                day_start: "08:00".to_string(),
                day_end: "20:00".to_string(),
                step_minutes: 15,
            },
            ui: UiConfig {
                week_starts_on: "Sunday".to_string(),
                default_view: "week".to_string(),
            },
        }
    }
}
