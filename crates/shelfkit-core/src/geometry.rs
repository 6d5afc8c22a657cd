//! Planar geometry helpers
//!
//! Pure, stateless helpers for working with flat panels: points, local
//! coordinate frames and a turtle-style pen for walking polygon outlines
//! given as `(length, turn)` pairs. All angles at the public surface are in
//! degrees, counter-clockwise from the +X axis.

use serde::{Deserialize, Serialize};
use std::ops::Add;

/// Tolerance used when comparing traced coordinates.
pub const EPSILON: f64 = 1e-6;

/// Points closer than this are collapsed by [`push_unique_point`].
pub const DEDUP_TOLERANCE: f64 = 0.01;

/// A point (or displacement) in the panel plane, in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Rotate about the origin by `degrees`.
    pub fn rotate(self, degrees: f64) -> Point {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Point::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    pub fn translate(self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }

    pub fn approx_eq(&self, other: &Point, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance && (self.y - other.y).abs() <= tolerance
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// Vector of `length` pointing at `degrees`.
pub fn polar(degrees: f64, length: f64) -> Point {
    let (sin, cos) = degrees.to_radians().sin_cos();
    Point::new(length * cos, length * sin)
}

/// A local coordinate frame: an origin plus the direction of its X axis.
///
/// Panel edges are described in their own frame (X along the edge, Y towards
/// the panel interior) and mapped into panel coordinates with
/// [`Frame::to_world`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Frame {
    pub origin: Point,
    /// Direction of the local X axis in degrees.
    pub heading: f64,
}

impl Frame {
    pub fn new(origin: Point, heading: f64) -> Self {
        Self { origin, heading }
    }

    pub fn identity() -> Self {
        Self::default()
    }

    /// Map a point given in this frame into the parent coordinate system.
    pub fn to_world(&self, local: Point) -> Point {
        self.origin + local.rotate(self.heading)
    }
}

/// A pen that walks a polygon edge by edge.
///
/// The pen only moves forward and turns left (negative turns go right), the
/// same vocabulary panel outlines are described in.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Turtle {
    position: Point,
    heading: f64,
}

impl Turtle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn forward(&mut self, length: f64) -> Point {
        self.position = self.position + polar(self.heading, length);
        self.position
    }

    pub fn turn(&mut self, degrees: f64) {
        self.heading += degrees;
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn heading(&self) -> f64 {
        self.heading
    }

    pub fn frame(&self) -> Frame {
        Frame::new(self.position, self.heading)
    }
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    /// Bounding box of `points`, or `None` if there are no finite points.
    pub fn of<'a>(points: impl IntoIterator<Item = &'a Point>) -> Option<Bounds> {
        let mut bounds: Option<Bounds> = None;
        for p in points.into_iter().filter(|p| p.is_finite()) {
            bounds = Some(match bounds {
                None => Bounds { min: *p, max: *p },
                Some(b) => Bounds {
                    min: Point::new(b.min.x.min(p.x), b.min.y.min(p.y)),
                    max: Point::new(b.max.x.max(p.x), b.max.y.max(p.y)),
                },
            });
        }
        bounds
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn contains(&self, p: &Point, tolerance: f64) -> bool {
        p.x >= self.min.x - tolerance
            && p.x <= self.max.x + tolerance
            && p.y >= self.min.y - tolerance
            && p.y <= self.max.y + tolerance
    }

    pub fn union(&self, other: &Bounds) -> Bounds {
        Bounds {
            min: Point::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Point::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }
}

/// Append `point` unless it duplicates the last point of `path`.
pub fn push_unique_point(path: &mut Vec<Point>, point: Point) {
    if let Some(last) = path.last() {
        if last.approx_eq(&point, DEDUP_TOLERANCE) {
            return;
        }
    }
    path.push(point);
}
