//! Type definitions for the Display Shelf Maker

use crate::error::{ParameterError, ParameterResult};
use crate::finger_joint::FingerJointSettings;
use serde::{Deserialize, Serialize};

/// `|cos(angle)|` below this is treated as a vertical shelf.
pub const COS_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShelfParameters {
    /// Width of the unit (shelf width)
    pub x: f64,
    /// Depth of the unit
    pub y: f64,
    /// Height of the unit
    pub h: f64,
    /// Material thickness
    pub thickness: f64,
    /// Number of shelves
    pub num: u32,
    /// Height of the lip at the front of every shelf (0 for none)
    pub front_wall_height: f64,
    /// Incline of the shelves in degrees; negative values slant backwards
    pub angle: f64,
    /// Add a back panel joined to both sides
    pub include_back: bool,
    /// Cut the top-front corner of the sides along the shelf incline
    pub slope_top: bool,
    /// `x`/`y` are outside measurements
    pub outside: bool,
    pub finger_joint: FingerJointSettings,
    /// Beam / tool width compensated on finger joints
    pub burn: f64,
    pub laser_passes: u32,
    pub laser_power: u32,
    pub feed_rate: f64,
    pub z_step_down: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    /// Gap between panels on the sheet
    pub spacing: f64,
}

impl Default for ShelfParameters {
    fn default() -> Self {
        Self {
            x: 400.0,
            y: 100.0,
            h: 300.0,
            thickness: 3.0,
            num: 3,
            front_wall_height: 20.0,
            angle: 30.0,
            include_back: false,
            slope_top: false,
            outside: true,
            finger_joint: FingerJointSettings::default(),
            burn: 0.1,
            laser_passes: 3,
            laser_power: 1000,
            feed_rate: 500.0,
            z_step_down: 0.5,
            offset_x: 10.0,
            offset_y: 10.0,
            spacing: 5.0,
        }
    }
}

impl ShelfParameters {
    pub fn radians(&self) -> f64 {
        self.angle.to_radians()
    }

    pub fn has_front_lip(&self) -> bool {
        self.front_wall_height > 0.0
    }

    /// Check everything that can be checked before any geometry is derived.
    pub fn validate(&self) -> ParameterResult<()> {
        if self.num < 1 {
            return Err(ParameterError::invalid_value(
                "num",
                "at least one shelf is required",
            ));
        }

        for (name, value) in [("x", self.x), ("y", self.y), ("h", self.h)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ParameterError::InvalidDimensions(format!(
                    "{name} must be positive (got {value})"
                )));
            }
        }

        if !self.thickness.is_finite() || self.thickness <= 0.0 {
            return Err(ParameterError::invalid_value(
                "thickness",
                format!("must be positive (got {})", self.thickness),
            ));
        }

        if !self.front_wall_height.is_finite() || self.front_wall_height < 0.0 {
            return Err(ParameterError::invalid_value(
                "front_wall_height",
                format!("must be zero or positive (got {})", self.front_wall_height),
            ));
        }

        if !self.angle.is_finite() {
            return Err(ParameterError::invalid_value("angle", "must be finite"));
        }
        if self.radians().cos().abs() < COS_EPSILON {
            return Err(ParameterError::invalid_value(
                "angle",
                format!("{} degrees leaves no horizontal shelf depth", self.angle),
            ));
        }

        if !self.burn.is_finite() || self.burn < 0.0 {
            return Err(ParameterError::invalid_value(
                "burn",
                format!("must be zero or positive (got {})", self.burn),
            ));
        }

        if self.laser_passes < 1 {
            return Err(ParameterError::invalid_value(
                "laser_passes",
                "at least one pass is required",
            ));
        }

        if !self.feed_rate.is_finite() || self.feed_rate <= 0.0 {
            return Err(ParameterError::invalid_value(
                "feed_rate",
                format!("must be positive (got {})", self.feed_rate),
            ));
        }

        for (name, value) in [
            ("z_step_down", self.z_step_down),
            ("spacing", self.spacing),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ParameterError::invalid_value(
                    name,
                    format!("must be zero or positive (got {value})"),
                ));
            }
        }

        if !self.offset_x.is_finite() || !self.offset_y.is_finite() {
            return Err(ParameterError::invalid_value("offset", "must be finite"));
        }

        self.finger_joint.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let params = ShelfParameters::default();
        assert!(params.validate().is_ok());
        assert!(params.has_front_lip());
        assert!(params.outside);
        assert_eq!(params.num, 3);
    }

    #[test]
    fn test_zero_shelves_rejected() {
        let params = ShelfParameters {
            num: 0,
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ParameterError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_many_shelves_accepted() {
        let params = ShelfParameters {
            num: 150,
            h: 6000.0,
            ..Default::default()
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_vertical_angle_rejected() {
        for angle in [90.0, -90.0, 270.0] {
            let params = ShelfParameters {
                angle,
                ..Default::default()
            };
            assert!(params.validate().is_err(), "angle {angle} accepted");
        }
    }

    #[test]
    fn test_negative_front_wall_rejected() {
        let params = ShelfParameters {
            front_wall_height: -1.0,
            ..Default::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let params: ShelfParameters =
            serde_json::from_str(r#"{"num": 5, "angle": -20.0}"#).expect("parse");
        assert_eq!(params.num, 5);
        assert_eq!(params.angle, -20.0);
        assert_eq!(params.x, 400.0);
        assert_eq!(params.finger_joint, FingerJointSettings::default());
    }
}
