//! Configuration loaded from `~/.config/palette-calendar/config.toml`.
//!
//! Every section is optional; missing keys fall back to defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::calendar::ViewMode;
use crate::error::ConfigError;
use crate::theme::ThemeConfig;

pub const SIDEBAR_MIN_WIDTH: u16 = 16;
pub const SIDEBAR_MAX_WIDTH: u16 = 60;
pub const SIDEBAR_DEFAULT_WIDTH: u16 = 28;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub calendar: CalendarConfig,
    pub ui: UiConfig,
    pub theme: ThemeConfig,
    pub share: ShareConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CalendarConfig {
    /// "week" or "month"
    pub default_view: String,
    /// Seed file replacing the built-in sample data
    pub seed_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    pub mouse_enabled: bool,
    pub sidebar_width: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ShareConfig {
    /// Share links are `{base_url}/share/{project_id}`
    pub base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub enabled: bool,
    /// Used when RUST_LOG is not set
    pub level: String,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            default_view: "week".to_string(),
            seed_path: None,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            mouse_enabled: true,
            sidebar_width: SIDEBAR_DEFAULT_WIDTH,
        }
    }
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            base_url: "https://palette-calendar.app".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: "info".to_string(),
        }
    }
}

impl CalendarConfig {
    pub fn view_mode(&self) -> ViewMode {
        match self.default_view.as_str() {
            "month" => ViewMode::Month,
            _ => ViewMode::Week,
        }
    }
}

impl Config {
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("palette-calendar").join("config.toml"))
    }

    /// Loads the user config, or defaults when there is none.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(SIDEBAR_MIN_WIDTH..=SIDEBAR_MAX_WIDTH).contains(&self.ui.sidebar_width) {
            return Err(ConfigError::Invalid(format!(
                "ui.sidebar_width must be between {} and {}",
                SIDEBAR_MIN_WIDTH, SIDEBAR_MAX_WIDTH
            )));
        }
        if self.share.base_url.trim().is_empty() {
            return Err(ConfigError::Invalid("share.base_url must not be empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.calendar.view_mode(), ViewMode::Week);
        assert!(config.ui.mouse_enabled);
        assert!(config.logging.enabled);
    }

    #[test]
    fn partial_file_merges_with_defaults() {
        let config: Config = toml::from_str(
            r#"
            [calendar]
            default_view = "month"

            [theme]
            preset = "light"
            "#,
        )
        .unwrap();
        assert_eq!(config.calendar.view_mode(), ViewMode::Month);
        assert_eq!(config.theme.to_theme().name, "light");
        assert_eq!(config.ui.sidebar_width, SIDEBAR_DEFAULT_WIDTH);
        assert_eq!(config.share.base_url, "https://palette-calendar.app");
    }

    #[test]
    fn validation_rejects_out_of_range_values() {
        let mut config = Config::default();
        config.ui.sidebar_width = 4;
        assert!(config.validate().is_err());

        config.ui.sidebar_width = SIDEBAR_DEFAULT_WIDTH;
        config.share.base_url = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn unknown_view_falls_back_to_week() {
        let mut config = Config::default();
        config.calendar.default_view = "agenda".to_string();
        assert_eq!(config.calendar.view_mode(), ViewMode::Week);
    }
}
