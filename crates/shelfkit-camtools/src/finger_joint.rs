//! Finger joint edge system
//!
//! Based on the finger layout used by https://github.com/florianfesti/boxes:
//! finger and space widths are multiples of the material thickness and the
//! leftover length is split evenly between both ends of an edge.
//!
//! Profiles are produced in the local frame of an edge: X runs along the
//! edge from its start corner, Y points into the panel. Fingers therefore
//! protrude towards negative Y and notches cut towards positive Y.

use crate::error::{ParameterError, ParameterResult};
use serde::{Deserialize, Serialize};
use shelfkit_core::geometry::{push_unique_point, Frame, Point};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FingerJointSettings {
    /// Width of fingers in multiples of thickness
    pub finger: f64,
    /// Space between fingers in multiples of thickness
    pub space: f64,
    /// Space at start and end in multiples of normal spaces
    pub surrounding_spaces: f64,
    /// Extra space to allow fingers to move in/out (multiples of thickness)
    pub play: f64,
    /// Extra material for burn marks (multiples of thickness)
    pub extra_length: f64,
}

impl Default for FingerJointSettings {
    fn default() -> Self {
        Self {
            finger: 2.0,
            space: 2.0,
            surrounding_spaces: 2.0,
            play: 0.0,
            extra_length: 0.0,
        }
    }
}

impl FingerJointSettings {
    pub fn validate(&self) -> ParameterResult<()> {
        let values = [
            ("finger", self.finger),
            ("space", self.space),
            ("surrounding_spaces", self.surrounding_spaces),
            ("play", self.play),
            ("extra_length", self.extra_length),
        ];
        for (name, value) in values {
            if !value.is_finite() || value < 0.0 {
                return Err(ParameterError::invalid_value(
                    name,
                    format!("must be a finite, non-negative multiple of thickness (got {value})"),
                ));
            }
        }

        if (self.space + self.finger).abs() < 0.1 {
            return Err(ParameterError::Incompatible(
                "finger + space must not be close to zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Number of fingers and leftover length for an edge of `length`.
    pub fn calc_fingers(&self, length: f64, thickness: f64) -> (usize, f64) {
        let space = self.space * thickness;
        let finger = self.finger * thickness;

        if finger == 0.0 || length <= 0.0 {
            return (0, length.max(0.0));
        }

        let mut fingers = ((length - (self.surrounding_spaces - 1.0) * space) / (space + finger))
            .floor()
            .max(0.0) as usize;

        // Short edges still get a single finger when there is room for it
        if fingers == 0 && length > finger + thickness {
            fingers = 1;
        }

        let leftover = if fingers > 0 {
            length - (fingers as f64) * (space + finger) + space
        } else {
            length
        };

        (fingers, leftover)
    }
}

/// Tooth profile of a finger-jointed edge in the edge's local frame.
///
/// `positive` draws fingers sticking out of the panel, otherwise notches
/// are cut into it. `burn` widens fingers and narrows notches by the beam
/// width so the parts press-fit after cutting.
pub fn finger_edge_profile(
    length: f64,
    positive: bool,
    thickness: f64,
    settings: &FingerJointSettings,
    burn: f64,
) -> Vec<Point> {
    let mut path = Vec::new();
    let (fingers, leftover) = settings.calc_fingers(length, thickness);

    let mut finger = settings.finger * thickness;
    let mut space = settings.space * thickness;
    let mut leftover = leftover;
    let play = settings.play * thickness;

    if !positive {
        finger += play;
        space -= play;
        leftover -= play;
    }

    let (finger_draw, space_draw, leftover_draw, tip_y) = if positive {
        (
            finger + burn,
            space - burn,
            leftover - burn,
            -thickness - settings.extra_length * thickness,
        )
    } else {
        (finger - burn, space + burn, leftover + burn, thickness)
    };

    let base_y = 0.0;
    let mut x = 0.0;
    path.push(Point::new(x, base_y));

    if fingers == 0 {
        path.push(Point::new(length, base_y));
        return path;
    }

    x += leftover_draw / 2.0;
    push_unique_point(&mut path, Point::new(x, base_y));

    for i in 0..fingers {
        path.push(Point::new(x, tip_y));
        x += finger_draw;
        path.push(Point::new(x, tip_y));
        path.push(Point::new(x, base_y));

        if i + 1 < fingers {
            x += space_draw;
            path.push(Point::new(x, base_y));
        }
    }

    push_unique_point(&mut path, Point::new(length, base_y));
    path
}

/// Rectangular cut-outs receiving the fingers of a mating edge.
///
/// The holes are centred on the line starting at `frame.origin` and running
/// along `frame.heading` for `length`; each hole is `thickness` deep. Returns
/// one closed path per hole, in the coordinates of `frame`'s parent.
pub fn finger_hole_cutouts(
    frame: &Frame,
    length: f64,
    thickness: f64,
    settings: &FingerJointSettings,
    burn: f64,
) -> Vec<Vec<Point>> {
    let (fingers, leftover) = settings.calc_fingers(length, thickness);
    if fingers == 0 {
        return Vec::new();
    }

    let finger = settings.finger * thickness + settings.play * thickness;
    let space = settings.space * thickness - settings.play * thickness;
    let half_kerf = burn / 2.0;
    let half_depth = (thickness / 2.0 - half_kerf).max(0.0);
    let width = (finger - burn).max(0.0);

    let mut x = (leftover - settings.play * thickness) / 2.0 + half_kerf;
    let mut holes = Vec::with_capacity(fingers);
    for _ in 0..fingers {
        let corners = [
            Point::new(x, -half_depth),
            Point::new(x + width, -half_depth),
            Point::new(x + width, half_depth),
            Point::new(x, half_depth),
            Point::new(x, -half_depth),
        ];
        holes.push(corners.iter().map(|p| frame.to_world(*p)).collect());
        x += finger + space;
    }
    holes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calc_fingers_default_settings() {
        let settings = FingerJointSettings::default();
        // finger = space = 6mm at 3mm thickness
        let (fingers, leftover) = settings.calc_fingers(100.0, 3.0);
        assert_eq!(fingers, 7);
        assert!((leftover - 22.0).abs() < 1e-9);
    }

    #[test]
    fn test_calc_fingers_short_edge() {
        let settings = FingerJointSettings::default();
        let (fingers, leftover) = settings.calc_fingers(10.0, 3.0);
        assert_eq!(fingers, 1);
        assert!((leftover - 4.0).abs() < 1e-9);

        let (fingers, leftover) = settings.calc_fingers(0.0, 3.0);
        assert_eq!(fingers, 0);
        assert_eq!(leftover, 0.0);
    }

    #[test]
    fn test_positive_profile_spans_edge_and_protrudes() {
        let settings = FingerJointSettings::default();
        let profile = finger_edge_profile(100.0, true, 3.0, &settings, 0.0);
        let first = profile.first().expect("profile");
        let last = profile.last().expect("profile");
        assert_eq!(*first, Point::new(0.0, 0.0));
        assert!((last.x - 100.0).abs() < 1e-9);
        let min_y = profile.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
        assert!((min_y + 3.0).abs() < 1e-9);
        assert!(profile.iter().all(|p| p.y <= 0.0));
    }

    #[test]
    fn test_negative_profile_cuts_inward() {
        let settings = FingerJointSettings::default();
        let profile = finger_edge_profile(100.0, false, 3.0, &settings, 0.0);
        let max_y = profile.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);
        assert!((max_y - 3.0).abs() < 1e-9);
        assert!(profile.iter().all(|p| p.y >= 0.0));
    }

    #[test]
    fn test_hole_cutouts_follow_frame() {
        let settings = FingerJointSettings::default();
        let frame = Frame::new(Point::new(10.0, 20.0), 90.0);
        let holes = finger_hole_cutouts(&frame, 100.0, 3.0, &settings, 0.0);
        assert_eq!(holes.len(), 7);
        for hole in &holes {
            assert_eq!(hole.len(), 5);
            assert!(hole[0].approx_eq(&hole[4], 1e-9));
            // Vertical seat: every hole straddles x = 10 by half a thickness
            for p in hole {
                assert!((p.x - 10.0).abs() <= 1.5 + 1e-9);
                assert!(p.y >= 20.0 - 1e-9 && p.y <= 120.0 + 1e-9);
            }
        }
    }

    #[test]
    fn test_zero_length_seat_has_no_holes() {
        let settings = FingerJointSettings::default();
        let holes = finger_hole_cutouts(&Frame::identity(), 0.0, 3.0, &settings, 0.1);
        assert!(holes.is_empty());
    }

    #[test]
    fn test_settings_validation() {
        assert!(FingerJointSettings::default().validate().is_ok());
        let bad = FingerJointSettings {
            finger: 0.0,
            space: 0.0,
            ..Default::default()
        };
        assert!(matches!(bad.validate(), Err(ParameterError::Incompatible(_))));
        let negative = FingerJointSettings {
            play: -1.0,
            ..Default::default()
        };
        assert!(negative.validate().is_err());
    }
}
