//! Host configuration file handling

use anyhow::{Context, Result};
use bulbswitch_theme::ColorScheme;
use bulbswitch_widget::StringConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Top-level host configuration (bulbswitch.toml)
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub string: StringConfig,
    #[serde(default)]
    pub host: HostConfig,
}

/// Frame loop and canvas settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct HostConfig {
    /// Simulated frames per second
    #[serde(default = "default_fps")]
    pub fps: u32,
    /// Color scheme before the first pull
    #[serde(default)]
    pub scheme: ColorScheme,
    #[serde(default = "default_width")]
    pub canvas_width: u32,
    #[serde(default = "default_height")]
    pub canvas_height: u32,
}

fn default_fps() -> u32 {
    60
}

fn default_width() -> u32 {
    200
}

fn default_height() -> u32 {
    320
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            fps: default_fps(),
            scheme: ColorScheme::default(),
            canvas_width: default_width(),
            canvas_height: default_height(),
        }
    }
}

impl AppConfig {
    /// Load and validate a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("Invalid config {}", path.display()))
    }

    /// Parse and validate configuration text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(content).context("Failed to parse config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.string.validate().context("Invalid [string] table")?;
        if self.host.fps == 0 {
            anyhow::bail!("host.fps must be at least 1");
        }
        if self.host.canvas_width == 0 || self.host.canvas_height == 0 {
            anyhow::bail!(
                "canvas must not be empty, got {}x{}",
                self.host.canvas_width,
                self.host.canvas_height
            );
        }
        Ok(())
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Write the default configuration to `path`. An existing file is only
    /// replaced when `force` is set.
    pub fn write_default(path: &Path, force: bool) -> Result<()> {
        if path.exists() && !force {
            anyhow::bail!(
                "{} already exists. Pass --force to overwrite it.",
                path.display()
            );
        }

        let text = Self::default().to_toml()?;
        fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.host.fps, 60);
        assert_eq!(config.string.bulb_center_x, 100.0);
    }

    #[test]
    fn test_partial_tables() {
        let config = AppConfig::from_toml(
            r#"
            [string]
            touch_threshold = 30.0
            length_sequence = [90.0, 120.0]

            [host]
            fps = 30
            scheme = "dark"
            "#,
        )
        .unwrap();

        assert_eq!(config.string.touch_threshold, 30.0);
        assert_eq!(config.string.length_sequence, vec![90.0, 120.0]);
        assert_eq!(config.host.fps, 30);
        assert_eq!(config.host.scheme, ColorScheme::Dark);
        assert_eq!(config.host.canvas_width, 200);
    }

    #[test]
    fn test_rejects_invalid_string_table() {
        let err = AppConfig::from_toml("[string]\nsample_step = 0.0\n").unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("[string]"), "{message}");
        assert!(message.contains("sample step"), "{message}");
    }

    #[test]
    fn test_rejects_zero_fps() {
        assert!(AppConfig::from_toml("[host]\nfps = 0\n").is_err());
    }

    #[test]
    fn test_round_trip() {
        let config = AppConfig::default();
        let text = config.to_toml().unwrap();
        assert!(text.contains("[string]"));
        assert!(text.contains("[host]"));
        assert_eq!(AppConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_load_reports_missing_file() {
        let err = AppConfig::load(Path::new("/nonexistent/bulbswitch.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }
}
