//! Command implementations behind the `shelfkit` binary.

use crate::{BUILD_DATE, VERSION};
use anyhow::{Context, Result};
use shelfkit_camtools::DisplayShelfMaker;
use shelfkit_core::units::{from_mm, parse_length, MeasurementSystem};
use shelfkit_settings::{Config, OutputFormat};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Command line overrides applied on top of a project file.
///
/// Lengths are written in the project's units; imperial projects accept
/// fractional inches such as `"3/4"` or `"1 1/2"`.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub num: Option<u32>,
    pub angle: Option<f64>,
    pub thickness: Option<String>,
    pub front_wall_height: Option<String>,
    pub include_back: Option<bool>,
    pub slope_top: Option<bool>,
}

/// Parse a length in `units` and return it in the same units.
fn parse_project_length(name: &str, input: &str, units: MeasurementSystem) -> Result<f64> {
    let mm = parse_length(input, units)
        .map_err(|e| anyhow::anyhow!("Invalid --{name} '{input}': {e}"))?;
    Ok(from_mm(mm, units))
}

impl Overrides {
    pub fn apply(&self, config: &mut Config) -> Result<()> {
        let units = config.units;
        let shelf = &mut config.shelf;

        if let Some(num) = self.num {
            shelf.num = num;
        }
        if let Some(angle) = self.angle {
            shelf.angle = angle;
        }
        if let Some(thickness) = &self.thickness {
            shelf.thickness = parse_project_length("thickness", thickness, units)?;
        }
        if let Some(height) = &self.front_wall_height {
            shelf.front_wall_height = parse_project_length("front-wall-height", height, units)?;
        }
        if let Some(include_back) = self.include_back {
            shelf.include_back = include_back;
        }
        if let Some(slope_top) = self.slope_top {
            shelf.slope_top = slope_top;
        }
        Ok(())
    }
}

/// Load `path`, or the default project file if it exists, or defaults.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    if let Some(path) = path {
        return Config::load_from_file(path)
            .with_context(|| format!("Failed to load project file {}", path.display()));
    }

    match Config::default_path() {
        Ok(default) if default.exists() => Config::load_from_file(&default)
            .with_context(|| format!("Failed to load project file {}", default.display())),
        _ => Ok(Config::default()),
    }
}

/// Format requested explicitly, else implied by the output file, else the project's.
pub fn resolve_format(
    requested: Option<OutputFormat>,
    output: Option<&Path>,
    config: &Config,
) -> OutputFormat {
    requested
        .or_else(|| {
            output
                .and_then(|p| p.extension())
                .and_then(|ext| ext.to_str())
                .and_then(|ext| ext.parse().ok())
        })
        .unwrap_or(config.output.format)
}

pub fn build(config: &Config) -> Result<DisplayShelfMaker> {
    let mut maker = DisplayShelfMaker::new(config.shelf_parameters())
        .context("Invalid shelf parameters")?;
    maker.generate().context("Failed to generate panels")?;
    Ok(maker)
}

/// Cut file contents for `maker` in `format`.
pub fn render(maker: &DisplayShelfMaker, format: OutputFormat) -> Result<Vec<u8>> {
    Ok(match format {
        OutputFormat::Gcode => {
            let mut gcode = format!("; Generated by shelfkit {VERSION} ({BUILD_DATE})\n");
            gcode.push_str(&maker.to_gcode());
            gcode.into_bytes()
        }
        OutputFormat::Svg => maker.to_svg().into_bytes(),
        OutputFormat::Dxf => {
            let mut buf = Vec::new();
            maker.write_dxf(&mut buf)?;
            buf
        }
    })
}

pub fn generate(
    config_path: Option<&Path>,
    format: Option<OutputFormat>,
    output: Option<&Path>,
    overrides: &Overrides,
) -> Result<()> {
    let mut config = load_config(config_path)?;
    overrides.apply(&mut config)?;

    let format = resolve_format(format, output, &config);
    let maker = build(&config)?;
    let bytes = render(&maker, format)?;

    match output {
        Some(path) => {
            std::fs::write(path, &bytes)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(
                "Wrote {} panels as {} to {}",
                maker.panels().len(),
                format,
                path.display()
            );
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&bytes).context("Failed to write to stdout")?;
            stdout.flush()?;
        }
    }

    Ok(())
}

/// Write a default project file and return where it went.
pub fn init(output: Option<&Path>, force: bool) -> Result<PathBuf> {
    let path = match output {
        Some(path) => path.to_path_buf(),
        None => Config::default_path()?,
    };

    if path.exists() && !force {
        warn!("{} already exists", path.display());
        anyhow::bail!("{} already exists (use --force to overwrite)", path.display());
    }

    Config::default()
        .save_to_file(&path)
        .with_context(|| format!("Failed to write project file {}", path.display()))?;
    info!("Wrote default project file to {}", path.display());
    Ok(path)
}

pub fn summary(config_path: Option<&Path>, overrides: &Overrides) -> Result<String> {
    let mut config = load_config(config_path)?;
    overrides.apply(&mut config)?;
    let maker = build(&config)?;
    Ok(maker.summary())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_overrides_applied() {
        let mut config = Config::default();
        let overrides = Overrides {
            num: Some(5),
            angle: Some(-10.0),
            include_back: Some(true),
            ..Default::default()
        };
        overrides.apply(&mut config).unwrap();
        assert_eq!(config.shelf.num, 5);
        assert_eq!(config.shelf.angle, -10.0);
        assert!(config.shelf.include_back);
        assert!(!config.shelf.slope_top);
        assert_eq!(config.shelf.front_wall_height, 20.0);
    }

    #[test]
    fn test_overrides_can_switch_options_off() {
        let mut config = Config::default();
        config.shelf.include_back = true;
        config.shelf.slope_top = true;

        Overrides::default().apply(&mut config).unwrap();
        assert!(config.shelf.include_back);
        assert!(config.shelf.slope_top);

        let overrides = Overrides {
            include_back: Some(false),
            slope_top: Some(false),
            ..Default::default()
        };
        overrides.apply(&mut config).unwrap();
        assert!(!config.shelf.include_back);
        assert!(!config.shelf.slope_top);
    }

    #[test]
    fn test_length_overrides_use_project_units() {
        let mut config = Config::default();
        let overrides = Overrides {
            front_wall_height: Some("12.5".to_string()),
            ..Default::default()
        };
        overrides.apply(&mut config).unwrap();
        assert!((config.shelf.front_wall_height - 12.5).abs() < 1e-9);

        config.units = MeasurementSystem::Imperial;
        let overrides = Overrides {
            thickness: Some("1/8".to_string()),
            front_wall_height: Some("3/4".to_string()),
            ..Default::default()
        };
        overrides.apply(&mut config).unwrap();
        assert!((config.shelf.thickness - 0.125).abs() < 1e-9);
        assert!((config.shelf.front_wall_height - 0.75).abs() < 1e-9);
        assert!((config.shelf_parameters().front_wall_height - 19.05).abs() < 1e-9);
    }

    #[test]
    fn test_bad_length_override_rejected() {
        let mut config = Config::default();
        config.units = MeasurementSystem::Imperial;
        let overrides = Overrides {
            front_wall_height: Some("3/0".to_string()),
            ..Default::default()
        };
        let err = overrides.apply(&mut config).unwrap_err();
        assert!(err.to_string().contains("--front-wall-height"));
    }

    #[test]
    fn test_format_resolution_order() {
        let config = Config::default();
        assert_eq!(
            resolve_format(Some(OutputFormat::Dxf), Some(Path::new("a.svg")), &config),
            OutputFormat::Dxf
        );
        assert_eq!(
            resolve_format(None, Some(Path::new("a.svg")), &config),
            OutputFormat::Svg
        );
        assert_eq!(
            resolve_format(None, Some(Path::new("a.txt")), &config),
            OutputFormat::Gcode
        );
    }

    #[test]
    fn test_generate_writes_svg_file() {
        let dir = TempDir::new().unwrap();
        let project = dir.path().join("shelf.toml");
        let output = dir.path().join("shelf.svg");

        init(Some(&project), false).unwrap();
        generate(Some(&project), None, Some(&output), &Overrides::default()).unwrap();

        let svg = std::fs::read_to_string(&output).unwrap();
        assert!(svg.contains("<g id=\"left side\">"));
        assert!(svg.contains("<g id=\"front lip 3\">"));
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let project = dir.path().join("shelf.json");
        init(Some(&project), false).unwrap();
        assert!(init(Some(&project), false).is_err());
        assert!(init(Some(&project), true).is_ok());
    }

    #[test]
    fn test_render_gcode_header() {
        let maker = build(&Config::default()).unwrap();
        let gcode = String::from_utf8(render(&maker, OutputFormat::Gcode).unwrap()).unwrap();
        assert!(gcode.starts_with("; Generated by shelfkit"));
        assert!(gcode.contains("; Panel 1: left side"));
    }
}
