//! Configuration module
//!
//! Application settings are read from a TOML file
//! (`~/.config/toll-calculator/config.toml` by default). Every section and
//! field is optional; missing values fall back to the defaults below.
//!
//! ```toml
//! [logging]
//! level = "info"
//! format = "text"     # or "json"
//!
//! [exemptions]
//! vehicles = ["motorbike", "tractor", "emergency", "diplomat", "foreign", "military"]
//!
//! [holidays]
//! calendar = "public" # or "weekend"
//! extra_dates = ["2024-03-15"]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::vehicle::{VehicleCategory, VehicleExemption, DEFAULT_TOLL_FREE_CATEGORIES};
use crate::shared::errors::ConfigError;

/// Default location of the config file.
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("toll-calculator")
        .join("config.toml")
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct AppConfig {
    #[validate(nested)]
    pub logging: LoggingConfig,
    pub exemptions: ExemptionConfig,
    pub holidays: HolidayConfig,
}

impl AppConfig {
    /// Read and validate a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Write the config, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `toll_calculator=debug`
    #[validate(length(min = 1))]
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExemptionConfig {
    /// Toll-free vehicle categories. Replaces the built-in set when present.
    pub vehicles: Vec<VehicleCategory>,
}

impl ExemptionConfig {
    pub fn to_exemption(&self) -> VehicleExemption {
        VehicleExemption::from_categories(self.vehicles.iter().copied())
    }
}

impl Default for ExemptionConfig {
    fn default() -> Self {
        Self {
            vehicles: DEFAULT_TOLL_FREE_CATEGORIES.to_vec(),
        }
    }
}

/// Which holiday oracle backs the calculator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarKind {
    /// Saturdays and Sundays only
    #[default]
    Weekend,
    /// Weekends plus public holidays
    Public,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HolidayConfig {
    pub calendar: CalendarKind,
    /// Additional toll-free dates (`YYYY-MM-DD`)
    pub extra_dates: Vec<NaiveDate>,
}
