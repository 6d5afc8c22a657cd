//! Project files for ShelfKit
//!
//! A project file holds the shelf parameters, the unit they are written in
//! and the preferred output format. JSON and TOML are supported, picked by
//! file extension.

use crate::error::{ConfigError, SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use shelfkit_camtools::ShelfParameters;
pub use shelfkit_core::units::MeasurementSystem;
use shelfkit_core::units::to_mm;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

/// Cut file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Laser G-code
    #[default]
    Gcode,
    /// SVG drawing
    Svg,
    /// DXF drawing
    Dxf,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Gcode => "gcode",
            Self::Svg => "svg",
            Self::Dxf => "dxf",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gcode" | "nc" | "ngc" => Ok(Self::Gcode),
            "svg" => Ok(Self::Svg),
            "dxf" => Ok(Self::Dxf),
            _ => Err(SettingsError::InvalidSetting {
                key: "output.format".to_string(),
                reason: format!("unknown format '{s}'"),
            }),
        }
    }
}

/// Output preferences
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub format: OutputFormat,
}

/// Complete project configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Unit the shelf lengths are written in
    pub units: MeasurementSystem,
    pub shelf: ShelfParameters,
    pub output: OutputSettings,
}

enum FileFormat {
    Json,
    Toml,
}

fn file_format(path: &Path) -> SettingsResult<FileFormat> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(FileFormat::Json),
        Some("toml") => Ok(FileFormat::Toml),
        other => Err(ConfigError::UnsupportedFormat(format!(
            "config file must be .json or .toml (got {})",
            other.unwrap_or("no extension")
        ))
        .into()),
    }
}

impl Config {
    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = file_format(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("{}: {}", path.display(), e))
        })?;

        let config: Self = match format {
            FileFormat::Json => serde_json::from_str(&content)?,
            FileFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!("Loaded project file {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match file_format(path)? {
            FileFormat::Json => serde_json::to_string_pretty(self)?,
            FileFormat::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content).map_err(|e| {
            SettingsError::SaveError(format!("{}: {}", path.display(), e))
        })?;

        debug!("Saved project file {}", path.display());
        Ok(())
    }

    /// Validate the stored shelf parameters after unit conversion.
    pub fn validate(&self) -> SettingsResult<()> {
        self.shelf_parameters().validate()?;
        Ok(())
    }

    /// Shelf parameters in millimetres.
    pub fn shelf_parameters(&self) -> ShelfParameters {
        let units = self.units;
        let shelf = &self.shelf;
        ShelfParameters {
            x: to_mm(shelf.x, units),
            y: to_mm(shelf.y, units),
            h: to_mm(shelf.h, units),
            thickness: to_mm(shelf.thickness, units),
            front_wall_height: to_mm(shelf.front_wall_height, units),
            burn: to_mm(shelf.burn, units),
            feed_rate: to_mm(shelf.feed_rate, units),
            z_step_down: to_mm(shelf.z_step_down, units),
            offset_x: to_mm(shelf.offset_x, units),
            offset_y: to_mm(shelf.offset_y, units),
            spacing: to_mm(shelf.spacing, units),
            ..shelf.clone()
        }
    }

    /// Default project file location: `<config dir>/shelfkit/shelf.toml`.
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("shelfkit").join("shelf.toml"))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no configuration directory on this platform".to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.units, MeasurementSystem::Metric);
        assert_eq!(config.output.format, OutputFormat::Gcode);
    }

    #[test]
    fn test_imperial_lengths_converted() {
        let config = Config {
            units: MeasurementSystem::Imperial,
            shelf: ShelfParameters {
                x: 16.0,
                y: 4.0,
                h: 12.0,
                thickness: 0.125,
                ..Default::default()
            },
            ..Default::default()
        };
        let params = config.shelf_parameters();
        assert!((params.x - 406.4).abs() < 1e-9);
        assert!((params.thickness - 3.175).abs() < 1e-9);
        assert_eq!(params.num, config.shelf.num);
        assert_eq!(params.angle, config.shelf.angle);
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("SVG".parse::<OutputFormat>().unwrap(), OutputFormat::Svg);
        assert_eq!("nc".parse::<OutputFormat>().unwrap(), OutputFormat::Gcode);
        assert!("pdf".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::Dxf.to_string(), "dxf");
    }

    #[test]
    fn test_unknown_extension_rejected() {
        let err = Config::default()
            .save_to_file(Path::new("shelf.yaml"))
            .unwrap_err();
        assert!(matches!(
            err,
            SettingsError::Config(ConfigError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
            units = "metric"

            [shelf]
            num = 5
            angle = 20.0
            "#,
        )
        .expect("parse");
        assert_eq!(config.shelf.num, 5);
        assert_eq!(config.shelf.x, 400.0);
        assert_eq!(config.output.format, OutputFormat::Gcode);
    }
}
