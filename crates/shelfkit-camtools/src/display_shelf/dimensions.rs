//! Derived shelf geometry
//!
//! Resolves the requested box measurements into the lengths every other
//! builder works from, most importantly the slant length of a shelf board.

use super::types::{ShelfParameters, COS_EPSILON};
use crate::error::{ParameterError, ParameterResult};
use serde::Serialize;

/// Geometry shared by all panels of one layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShelfGeometry {
    /// Inner width, the width of every shelf board
    pub width: f64,
    /// Depth available to the shelves, the width of the side panels
    pub depth: f64,
    /// Side panel height
    pub height: f64,
    pub thickness: f64,
    /// Shelf incline in degrees
    pub angle: f64,
    pub radians: f64,
    /// Length of each slanted shelf board
    pub slant_length: f64,
}

impl ShelfGeometry {
    pub fn resolve(params: &ShelfParameters) -> ParameterResult<Self> {
        let t = params.thickness;
        let mut width = params.x;
        let mut depth = params.y;

        if params.outside {
            width = adjust_size(width, t);
            // Without a back panel nothing sits behind the shelves
            if params.include_back {
                depth = adjust_size(depth, t);
            }
        }

        if width <= 0.0 || depth <= 0.0 {
            return Err(ParameterError::InvalidDimensions(format!(
                "inner size {width:.3} x {depth:.3} leaves no room for the shelves"
            )));
        }

        let radians = params.radians();
        let slant_length = slant_length(depth, t, radians, params.front_wall_height)?;

        Ok(Self {
            width,
            depth,
            height: params.h,
            thickness: t,
            angle: params.angle,
            radians,
            slant_length,
        })
    }

    /// Vertical rise of a shelf board over its slant length.
    pub fn rise(&self) -> f64 {
        self.radians.sin() * self.slant_length
    }
}

/// Inner size of an outside measurement walled on both ends.
pub fn adjust_size(size: f64, thickness: f64) -> f64 {
    size - 2.0 * thickness
}

/// True length of a slanted shelf fitting into `depth`.
///
/// The depth loses the material of the angled joints at both ends and, when
/// the shelf leans forward, the horizontal reach of the front lip that shares
/// the shelf's front corner.
pub fn slant_length(
    depth: f64,
    thickness: f64,
    radians: f64,
    front_wall_height: f64,
) -> ParameterResult<f64> {
    let (sin, cos) = radians.sin_cos();
    if cos.abs() < COS_EPSILON {
        return Err(ParameterError::invalid_value(
            "angle",
            "shelves cannot be vertical",
        ));
    }

    let sl = (depth - thickness * (cos + sin.abs()) - (sin * front_wall_height).max(0.0)) / cos;
    if !sl.is_finite() || sl <= 0.0 {
        return Err(ParameterError::InvalidDimensions(format!(
            "slant length {sl:.3} is not positive; increase the depth or reduce the angle"
        )));
    }
    Ok(sl)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario(angle: f64) -> ShelfParameters {
        ShelfParameters {
            x: 400.0,
            y: 100.0,
            h: 300.0,
            thickness: 3.0,
            num: 3,
            angle,
            front_wall_height: 20.0,
            include_back: false,
            slope_top: false,
            ..Default::default()
        }
    }

    #[test]
    fn test_slant_length_forward_lean() {
        let g = ShelfGeometry::resolve(&scenario(30.0)).unwrap();
        let a = 30.0_f64.to_radians();
        let expected = (100.0 - 3.0 * (a.cos() + a.sin()) - a.sin() * 20.0) / a.cos();
        assert!((g.slant_length - expected).abs() < 1e-9);
        assert!((g.slant_length - 99.1910).abs() < 1e-3);
    }

    #[test]
    fn test_slant_length_backward_lean_ignores_lip() {
        let g = ShelfGeometry::resolve(&scenario(-30.0)).unwrap();
        let a = 30.0_f64.to_radians();
        let expected = (100.0 - 3.0 * (a.cos() + a.sin())) / a.cos();
        assert!((g.slant_length - expected).abs() < 1e-9);
    }

    #[test]
    fn test_outside_adjusts_width_only_without_back() {
        let g = ShelfGeometry::resolve(&scenario(30.0)).unwrap();
        assert_eq!(g.width, 394.0);
        assert_eq!(g.depth, 100.0);
        assert_eq!(g.height, 300.0);

        let with_back = ShelfParameters {
            include_back: true,
            ..scenario(30.0)
        };
        let g = ShelfGeometry::resolve(&with_back).unwrap();
        assert_eq!(g.depth, 94.0);
    }

    #[test]
    fn test_inside_dimensions_unchanged() {
        let params = ShelfParameters {
            outside: false,
            include_back: true,
            ..scenario(30.0)
        };
        let g = ShelfGeometry::resolve(&params).unwrap();
        assert_eq!(g.width, 400.0);
        assert_eq!(g.depth, 100.0);
    }

    #[test]
    fn test_vertical_angle_is_invalid_configuration() {
        assert!(slant_length(100.0, 3.0, 90.0_f64.to_radians(), 0.0).is_err());
        assert!(slant_length(100.0, 3.0, (-90.0_f64).to_radians(), 0.0).is_err());
    }

    #[test]
    fn test_over_constrained_depth_rejected() {
        let params = ShelfParameters {
            y: 10.0,
            front_wall_height: 50.0,
            ..scenario(60.0)
        };
        assert!(matches!(
            ShelfGeometry::resolve(&params),
            Err(ParameterError::InvalidDimensions(_))
        ));
    }
}
