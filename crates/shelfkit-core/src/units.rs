//! Unit conversion utilities
//!
//! Panels are always generated in millimetres. Project files and command
//! line overrides may be written in inches; these helpers convert at the
//! boundary. Imperial input accepts decimal and fractional inches
//! (`"0.75"`, `"3/4"`, `"1 1/2"`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const MM_PER_INCH: f64 = 25.4;

/// Measurement system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementSystem {
    /// Metric system (mm)
    #[default]
    Metric,
    /// Imperial system (inches)
    Imperial,
}

impl fmt::Display for MeasurementSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Metric => write!(f, "Metric"),
            Self::Imperial => write!(f, "Imperial"),
        }
    }
}

impl FromStr for MeasurementSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "metric" | "mm" => Ok(Self::Metric),
            "imperial" | "inch" | "in" => Ok(Self::Imperial),
            _ => Err(format!("Unknown measurement system: {}", s)),
        }
    }
}

/// Convert a length expressed in `system` to millimetres.
pub fn to_mm(value: f64, system: MeasurementSystem) -> f64 {
    match system {
        MeasurementSystem::Metric => value,
        MeasurementSystem::Imperial => value * MM_PER_INCH,
    }
}

/// Convert a length in millimetres to `system`.
pub fn from_mm(value_mm: f64, system: MeasurementSystem) -> f64 {
    match system {
        MeasurementSystem::Metric => value_mm,
        MeasurementSystem::Imperial => value_mm / MM_PER_INCH,
    }
}

/// Parse a length string in `system` to millimetres.
pub fn parse_length(input: &str, system: MeasurementSystem) -> Result<f64, String> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(0.0);
    }

    match system {
        MeasurementSystem::Metric => input.parse::<f64>().map_err(|e| e.to_string()),
        MeasurementSystem::Imperial => {
            if !input.contains('/') {
                let inches = input.parse::<f64>().map_err(|e| e.to_string())?;
                return Ok(inches * MM_PER_INCH);
            }

            let mut total_inches = 0.0;
            for part in input.split_whitespace() {
                if let Some((num, den)) = part.split_once('/') {
                    if den.contains('/') {
                        return Err("Invalid fraction format".to_string());
                    }
                    let num = num.parse::<f64>().map_err(|_| "Invalid numerator")?;
                    let den = den.parse::<f64>().map_err(|_| "Invalid denominator")?;
                    if den == 0.0 {
                        return Err("Division by zero".to_string());
                    }
                    total_inches += num / den;
                } else {
                    total_inches += part.parse::<f64>().map_err(|_| "Invalid number part")?;
                }
            }
            Ok(total_inches * MM_PER_INCH)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_metric_conversion() {
        assert_close(from_mm(10.5, MeasurementSystem::Metric), 10.5);
        assert_close(parse_length("10.5", MeasurementSystem::Metric).unwrap(), 10.5);
    }

    #[test]
    fn test_imperial_decimal() {
        assert_close(from_mm(25.4, MeasurementSystem::Imperial), 1.0);
        assert_close(parse_length("1", MeasurementSystem::Imperial).unwrap(), 25.4);
        assert_close(from_mm(12.7, MeasurementSystem::Imperial), 0.5);
    }

    #[test]
    fn test_imperial_fraction() {
        assert_close(
            parse_length("1 1/2", MeasurementSystem::Imperial).unwrap(),
            38.1,
        );
        assert_close(
            parse_length("1/8", MeasurementSystem::Imperial).unwrap(),
            3.175,
        );
        assert_close(
            parse_length("-1/2", MeasurementSystem::Imperial).unwrap(),
            -12.7,
        );
    }

    #[test]
    fn test_round_trip_conversion() {
        let mm = to_mm(0.75, MeasurementSystem::Imperial);
        assert_close(from_mm(mm, MeasurementSystem::Imperial), 0.75);
        assert_close(to_mm(3.0, MeasurementSystem::Metric), 3.0);
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert_close(parse_length("", MeasurementSystem::Metric).unwrap(), 0.0);
        assert_close(
            parse_length("  1  1/2  ", MeasurementSystem::Imperial).unwrap(),
            38.1,
        );
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(parse_length("abc", MeasurementSystem::Metric).is_err());
        assert!(parse_length("1/0", MeasurementSystem::Imperial).is_err());
        assert!(parse_length("1/2/3", MeasurementSystem::Imperial).is_err());
    }

    #[test]
    fn test_measurement_system_parsing() {
        assert_eq!("mm".parse::<MeasurementSystem>(), Ok(MeasurementSystem::Metric));
        assert_eq!("Inch".parse::<MeasurementSystem>(), Ok(MeasurementSystem::Imperial));
        assert!("furlong".parse::<MeasurementSystem>().is_err());
    }
}
