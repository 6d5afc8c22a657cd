//! Shelf and lip seats on the side panels
//!
//! Every shelf index gets a seat for the shelf board and, when the shelves
//! have front lips, a second seat for the lip. Seat coordinates are measured
//! in the frame of the side panel's bottom edge: origin at the back-bottom
//! corner, X towards the front, Y up.

use super::dimensions::ShelfGeometry;
use crate::panel::{FingerHole, PanelBoundary};
use serde::Serialize;
use shelfkit_core::geometry::Point;
use tracing::debug;

/// Slack allowed before a seat is reported as leaving its panel.
const BOUNDS_TOLERANCE: f64 = 1e-6;

/// Seats cut for one shelf index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShelfSeats {
    pub shelf: FingerHole,
    pub lip: Option<FingerHole>,
}

/// Start of the shelf seat for shelf `index`, in bottom-edge coordinates.
///
/// Tiers are spaced over `num - 0.5` rather than `num` so the top shelf stops
/// half a tier below the top edge, clear of a sloped top cut. Backward-leaning
/// shelves are anchored at their low back end, hence the extra rise term.
pub fn shelf_seat_anchor(geometry: &ShelfGeometry, num: u32, index: u32) -> Point {
    let t = geometry.thickness;
    let a = geometry.radians;
    let sl = geometry.slant_length;
    let (sin, cos) = a.sin_cos();

    let hs = (sl + t) * sin + cos * t;
    let pos_x = (0.5 * t * sin).abs();
    let mut pos_y =
        hs - cos * 0.5 * t + f64::from(index) * (geometry.height - hs.abs()) / (f64::from(num) - 0.5);
    if a < 0.0 {
        pos_y += -sin * sl;
    }

    Point::new(pos_x, pos_y)
}

/// Start of the lip seat following a shelf seat starting at `shelf_anchor`.
///
/// Steps past the end of the shelf board and half a thickness across it.
pub fn lip_seat_anchor(geometry: &ShelfGeometry, shelf_anchor: Point) -> Point {
    let t = geometry.thickness;
    let a = geometry.radians;
    let sl = geometry.slant_length;

    Point::new(
        shelf_anchor.x + (-a).cos() * (sl + 0.5 * t) + a.sin() * 0.5 * t,
        shelf_anchor.y + (-a).sin() * (sl + 0.5 * t) + a.cos() * 0.5 * t,
    )
}

/// Seats for shelf `index`, in bottom-edge coordinates.
pub fn shelf_seats(
    geometry: &ShelfGeometry,
    num: u32,
    front_wall_height: f64,
    index: u32,
) -> ShelfSeats {
    let anchor = shelf_seat_anchor(geometry, num, index);
    let shelf = FingerHole::new(anchor, geometry.slant_length, -geometry.angle);

    // A zero-height lip has nothing to seat
    let lip = (front_wall_height > 0.0).then(|| {
        FingerHole::new(
            lip_seat_anchor(geometry, anchor),
            front_wall_height,
            90.0 - geometry.angle,
        )
    });

    ShelfSeats { shelf, lip }
}

/// Place every seat on a finalised side panel boundary.
///
/// Runs after the boundary is fixed (including any sloped-top fallback) and
/// maps the seats through the frame of the boundary's first edge.
pub fn place_seat_holes(
    boundary: &PanelBoundary,
    geometry: &ShelfGeometry,
    num: u32,
    front_wall_height: f64,
) -> Vec<FingerHole> {
    let Some(frame) = boundary.edge_frames().first().copied() else {
        return Vec::new();
    };
    let bounds = boundary.bounds();

    let mut holes = Vec::with_capacity(num as usize * 2);
    for index in 0..num {
        let seats = shelf_seats(geometry, num, front_wall_height, index);
        for seat in std::iter::once(seats.shelf).chain(seats.lip) {
            let placed = FingerHole::new(
                frame.to_world(seat.anchor),
                seat.length,
                frame.heading + seat.angle,
            );

            if let Some(bounds) = &bounds {
                let inside = bounds.contains(&placed.anchor, BOUNDS_TOLERANCE)
                    && bounds.contains(&placed.end(), BOUNDS_TOLERANCE);
                if !inside {
                    debug!(
                        "Seat for shelf {} extends past the side panel: {:?} -> {:?}",
                        index + 1,
                        placed.anchor,
                        placed.end()
                    );
                }
            }

            holes.push(placed);
        }
    }

    holes
}
