//! # ShelfKit
//!
//! Generates cut files for a slanted display shelf: two side panels carrying
//! the shelf seats, one board and optional front lip per shelf, and an
//! optional back panel, all finger-jointed together.
//!
//! ## Architecture
//!
//! ShelfKit is organized as a workspace with multiple crates:
//!
//! 1. **shelfkit-core** - Points, frames, turtle tracing, units
//! 2. **shelfkit-camtools** - Display shelf generator, finger joints, G-code/SVG/DXF output
//! 3. **shelfkit-settings** - Project files (JSON/TOML)
//! 4. **shelfkit** - Command line binary that integrates all crates

pub mod commands;

pub use shelfkit_camtools::{
    CamToolError, DisplayShelfMaker, FingerJointSettings, Panel, ShelfGeometry, ShelfParameters,
};
pub use shelfkit_core::units::MeasurementSystem;
pub use shelfkit_settings::{Config, OutputFormat, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Filter directive used when `RUST_LOG` is unset or invalid.
fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "info"
    }
}

/// Initialize logging with the default configuration
///
/// Logs go to stderr so cut files can be written to stdout. A valid
/// `RUST_LOG` takes precedence; otherwise `verbose` picks debug over info.
pub fn init_logging(verbose: bool) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_follows_verbose() {
        assert_eq!(default_filter(true), "debug");
        assert_eq!(default_filter(false), "info");
    }
}
