//! Side panels
//!
//! Both sides share one outline: a `depth × height` rectangle, or with a
//! sloped top the same rectangle with its top-front corner cut along the
//! shelf incline. The outline is fixed first, then the shelf and lip seats
//! are placed on it.

use super::dimensions::ShelfGeometry;
use super::holes::place_seat_holes;
use super::types::ShelfParameters;
use crate::error::{ParameterError, ParameterResult};
use crate::panel::{Panel, PanelBoundary};
use serde::Serialize;
use tracing::debug;

pub const SIDE_LABELS: [&str; 2] = ["left side", "right side"];

/// Top edge kept when the nominal sloped cut would swallow the whole top.
pub const FALLBACK_TOP_EDGE: f64 = 1.0;

/// Corner removed from a side panel with a sloped top.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SlopeCut {
    pub horizontal: f64,
    pub vertical: f64,
    pub hypotenuse: f64,
    /// The nominal cut was wider than the panel and has been shrunk
    pub clamped: bool,
}

impl SlopeCut {
    /// Cut for a panel of `width × height` carrying `num` tiers.
    ///
    /// Nominally the cut drops one tier minus the lip height. If that would
    /// reach past the back of the panel the cut is narrowed to leave a
    /// [`FALLBACK_TOP_EDGE`] top edge and its drop recomputed from the angle.
    pub fn compute(
        width: f64,
        height: f64,
        num: u32,
        front_wall_height: f64,
        angle: f64,
    ) -> ParameterResult<Self> {
        if angle <= 0.0 {
            return Err(ParameterError::Incompatible(format!(
                "a sloped top needs shelves leaning forward (angle {angle})"
            )));
        }

        let a = angle.to_radians();
        let top_segment_height = height / f64::from(num);

        let mut vertical = top_segment_height - front_wall_height;
        if vertical <= 0.0 {
            return Err(ParameterError::InvalidDimensions(format!(
                "front wall height {front_wall_height} leaves no room for a sloped top \
                 in a {top_segment_height:.3} tier"
            )));
        }
        let mut hypotenuse = vertical / a.sin();
        let mut horizontal = (hypotenuse.powi(2) - vertical.powi(2)).max(0.0).sqrt();
        let mut clamped = false;

        if horizontal > width {
            if width <= FALLBACK_TOP_EDGE {
                return Err(ParameterError::InvalidDimensions(format!(
                    "side panel width {width} is too narrow for a sloped top"
                )));
            }
            debug!(
                "Sloped top cut {:.3} exceeds side width {:.3}; keeping a {} top edge",
                horizontal, width, FALLBACK_TOP_EDGE
            );
            horizontal = width - FALLBACK_TOP_EDGE;
            vertical = horizontal * a.tan();
            hypotenuse = horizontal.hypot(vertical);
            clamped = true;
        }

        Ok(Self {
            horizontal,
            vertical,
            hypotenuse,
            clamped,
        })
    }

    /// Length of the top edge left after the cut.
    pub fn top(&self, width: f64) -> f64 {
        width - self.horizontal
    }

    /// Length of the front edge left after the cut.
    pub fn front(&self, height: f64) -> f64 {
        height - self.vertical
    }
}

/// Outline shared by both side panels, plus the cut if the top is sloped.
pub fn side_boundary(
    params: &ShelfParameters,
    geometry: &ShelfGeometry,
) -> ParameterResult<(PanelBoundary, Option<SlopeCut>)> {
    let width = geometry.depth;
    let height = geometry.height;

    if !params.slope_top {
        let codes = if params.include_back { "eeef" } else { "eeee" };
        return Ok((PanelBoundary::rectangle(width, height, codes)?, None));
    }

    let cut = SlopeCut::compute(
        width,
        height,
        params.num,
        params.front_wall_height,
        params.angle,
    )?;
    let borders = [
        width,
        90.0,
        cut.front(height),
        90.0 - params.angle,
        cut.hypotenuse,
        params.angle,
        cut.top(width),
        90.0,
        height,
        90.0,
    ];
    let codes = if params.include_back { "eeeef" } else { "e" };

    Ok((PanelBoundary::polygon(&borders, codes)?, Some(cut)))
}

/// Left and right side panels with their seats.
pub fn build_side_panels(
    params: &ShelfParameters,
    geometry: &ShelfGeometry,
) -> ParameterResult<(Vec<Panel>, Option<SlopeCut>)> {
    let (boundary, cut) = side_boundary(params, geometry)?;

    let panels = SIDE_LABELS
        .iter()
        .map(|label| {
            let holes =
                place_seat_holes(&boundary, geometry, params.num, params.front_wall_height);
            Panel::new(*label, boundary.clone()).with_holes(holes)
        })
        .collect();

    Ok((panels, cut))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::EdgeKind;

    #[test]
    fn test_nominal_cut() {
        let cut = SlopeCut::compute(200.0, 300.0, 3, 20.0, 30.0).unwrap();
        assert!(!cut.clamped);
        assert!((cut.vertical - 80.0).abs() < 1e-9);
        assert!((cut.hypotenuse - 160.0).abs() < 1e-9);
        assert!((cut.horizontal - 80.0 * 3.0_f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_fallback_keeps_one_unit_top_edge() {
        let cut = SlopeCut::compute(100.0, 300.0, 1, 20.0, 10.0).unwrap();
        assert!(cut.clamped);
        assert!((cut.top(100.0) - FALLBACK_TOP_EDGE).abs() < 1e-9);
        assert!((cut.vertical - 99.0 * 10.0_f64.to_radians().tan()).abs() < 1e-9);
        assert!((cut.hypotenuse - 99.0_f64.hypot(cut.vertical)).abs() < 1e-9);
    }

    #[test]
    fn test_sloped_top_rejects_backward_lean() {
        assert!(SlopeCut::compute(100.0, 300.0, 3, 20.0, -30.0).is_err());
    }

    #[test]
    fn test_sloped_top_rejects_tall_lip() {
        assert!(SlopeCut::compute(100.0, 300.0, 3, 100.0, 30.0).is_err());
    }

    #[test]
    fn test_rectangular_back_edge_marked() {
        let params = ShelfParameters {
            include_back: true,
            ..Default::default()
        };
        let geometry = ShelfGeometry::resolve(&params).unwrap();
        let (boundary, cut) = side_boundary(&params, &geometry).unwrap();
        assert!(cut.is_none());
        assert_eq!(boundary.edge_codes(), "eeef");
        assert_eq!(boundary.count_edges(EdgeKind::Fingers), 1);
    }

    #[test]
    fn test_sloped_boundary_closes() {
        let params = ShelfParameters {
            slope_top: true,
            include_back: true,
            ..Default::default()
        };
        let geometry = ShelfGeometry::resolve(&params).unwrap();
        let (boundary, cut) = side_boundary(&params, &geometry).unwrap();
        assert!(cut.is_some());
        assert!(boundary.is_closed());
        assert_eq!(boundary.edge_codes(), "eeeef");
        assert_eq!(boundary.edges().len(), 5);
    }
}
