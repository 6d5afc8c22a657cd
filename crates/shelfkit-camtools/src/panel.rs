//! Flat panel boundaries
//!
//! A panel outline is described the way it would be walked with a pen: an
//! ordered list of edges, each with a length, the left turn taken at its end
//! and the joint style of the edge. Walking starts at the origin heading
//! along +X, so the first edge is the panel's bottom edge and the interior
//! lies to the left of every edge.
//!
//! Edge styles use the single-character codes of the boxes.py generators:
//! `e` plain, `E` outset, `f` fingers, `F` finger slots.

use crate::error::{ParameterError, ParameterResult};
use crate::finger_joint::{finger_edge_profile, finger_hole_cutouts, FingerJointSettings};
use serde::{Deserialize, Serialize};
use shelfkit_core::geometry::{push_unique_point, Bounds, Frame, Point, Turtle};

/// Angular tolerance (degrees) for the closure check.
const TURN_TOLERANCE: f64 = 1e-6;

/// Positional tolerance (mm) for the closure check.
const CLOSE_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EdgeKind {
    /// Straight cut, no joint
    Plain,
    /// Straight cut pushed out by one material thickness
    Outset,
    /// Fingers protruding from the panel
    Fingers,
    /// Notches receiving the fingers of a mating panel
    FingerSlots,
}

impl EdgeKind {
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'e' => Some(Self::Plain),
            'E' => Some(Self::Outset),
            'f' => Some(Self::Fingers),
            'F' => Some(Self::FingerSlots),
            _ => None,
        }
    }

    pub fn code(self) -> char {
        match self {
            Self::Plain => 'e',
            Self::Outset => 'E',
            Self::Fingers => 'f',
            Self::FingerSlots => 'F',
        }
    }

    pub fn is_jointed(self) -> bool {
        matches!(self, Self::Fingers | Self::FingerSlots)
    }

    /// Expand an edge code string for a panel with `edge_count` edges.
    ///
    /// A single code applies to every edge; otherwise there must be exactly
    /// one code per edge.
    pub fn parse_codes(codes: &str, edge_count: usize) -> ParameterResult<Vec<EdgeKind>> {
        let kinds = codes
            .chars()
            .map(|c| {
                EdgeKind::from_code(c).ok_or_else(|| {
                    ParameterError::invalid_value("edges", format!("unknown edge code '{c}'"))
                })
            })
            .collect::<ParameterResult<Vec<_>>>()?;

        match kinds.len() {
            1 => Ok(vec![kinds[0]; edge_count]),
            n if n == edge_count => Ok(kinds),
            n => Err(ParameterError::invalid_value(
                "edges",
                format!("expected 1 or {edge_count} edge codes, got {n}"),
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeSegment {
    pub length: f64,
    /// Left turn in degrees taken at the end of this edge.
    pub turn: f64,
    pub kind: EdgeKind,
}

/// Closed outline of a flat panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelBoundary {
    edges: Vec<EdgeSegment>,
}

impl PanelBoundary {
    /// `width × height` rectangle; codes are bottom, right, top, left.
    pub fn rectangle(width: f64, height: f64, codes: &str) -> ParameterResult<Self> {
        Self::polygon(&[width, 90.0, height, 90.0, width, 90.0, height, 90.0], codes)
    }

    /// Polygon from alternating `length, turn` values.
    pub fn polygon(borders: &[f64], codes: &str) -> ParameterResult<Self> {
        if borders.is_empty() || borders.len() % 2 != 0 {
            return Err(ParameterError::invalid_value(
                "borders",
                "expected alternating length and turn values",
            ));
        }

        let edge_count = borders.len() / 2;
        let kinds = EdgeKind::parse_codes(codes, edge_count)?;
        let mut edges = Vec::with_capacity(edge_count);
        for (pair, kind) in borders.chunks_exact(2).zip(kinds) {
            let (length, turn) = (pair[0], pair[1]);
            if !length.is_finite() || length <= 0.0 {
                return Err(ParameterError::InvalidDimensions(format!(
                    "panel edge length must be positive (got {length})"
                )));
            }
            if !turn.is_finite() {
                return Err(ParameterError::invalid_value("borders", "turn angle is not finite"));
            }
            edges.push(EdgeSegment { length, turn, kind });
        }

        Ok(Self { edges })
    }

    pub fn edges(&self) -> &[EdgeSegment] {
        &self.edges
    }

    /// Edge codes in tracing order, e.g. `"eeef"`.
    pub fn edge_codes(&self) -> String {
        self.edges.iter().map(|e| e.kind.code()).collect()
    }

    pub fn count_edges(&self, kind: EdgeKind) -> usize {
        self.edges.iter().filter(|e| e.kind == kind).count()
    }

    pub fn turn_sum(&self) -> f64 {
        self.edges.iter().map(|e| e.turn).sum()
    }

    /// Start frame of every edge: its first corner and its direction.
    pub fn edge_frames(&self) -> Vec<Frame> {
        let mut turtle = Turtle::new();
        let mut frames = Vec::with_capacity(self.edges.len());
        for edge in &self.edges {
            frames.push(turtle.frame());
            turtle.forward(edge.length);
            turtle.turn(edge.turn);
        }
        frames
    }

    /// Corner points in tracing order (one per edge, first is the origin).
    pub fn vertices(&self) -> Vec<Point> {
        self.edge_frames().into_iter().map(|f| f.origin).collect()
    }

    /// Where the pen ends after walking every edge.
    pub fn end_point(&self) -> Point {
        let mut turtle = Turtle::new();
        for edge in &self.edges {
            turtle.forward(edge.length);
            turtle.turn(edge.turn);
        }
        turtle.position()
    }

    /// Turns add up to a full revolution and the walk returns to its start.
    pub fn is_closed(&self) -> bool {
        (self.turn_sum() - 360.0).abs() < TURN_TOLERANCE
            && self.end_point().approx_eq(&Point::ORIGIN, CLOSE_TOLERANCE)
    }

    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::of(self.vertices().iter())
    }

    /// Cut path of the outline including joint teeth, closed.
    pub fn outline(&self, thickness: f64, settings: &FingerJointSettings, burn: f64) -> Vec<Point> {
        let mut path = Vec::new();
        for (edge, frame) in self.edges.iter().zip(self.edge_frames()) {
            let profile = match edge.kind {
                EdgeKind::Plain => vec![Point::ORIGIN, Point::new(edge.length, 0.0)],
                EdgeKind::Outset => vec![
                    Point::ORIGIN,
                    Point::new(0.0, -thickness),
                    Point::new(edge.length, -thickness),
                    Point::new(edge.length, 0.0),
                ],
                EdgeKind::Fingers => {
                    finger_edge_profile(edge.length, true, thickness, settings, burn)
                }
                EdgeKind::FingerSlots => {
                    finger_edge_profile(edge.length, false, thickness, settings, burn)
                }
            };
            for p in profile {
                push_unique_point(&mut path, frame.to_world(p));
            }
        }

        if let Some(first) = path.first().copied() {
            if path.len() > 1 && path.last().is_some_and(|p| p.approx_eq(&first, CLOSE_TOLERANCE)) {
                path.pop();
            }
            path.push(first);
        }
        path
    }
}

/// Request for a row of finger holes on a panel.
///
/// The holes are centred on the line from `anchor` running `length` along
/// `angle` degrees, in the coordinates of the panel they belong to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FingerHole {
    pub anchor: Point,
    pub length: f64,
    pub angle: f64,
}

impl FingerHole {
    pub fn new(anchor: Point, length: f64, angle: f64) -> Self {
        Self {
            anchor,
            length,
            angle,
        }
    }

    pub fn frame(&self) -> Frame {
        Frame::new(self.anchor, self.angle)
    }

    /// Far end of the seat line.
    pub fn end(&self) -> Point {
        self.frame().to_world(Point::new(self.length, 0.0))
    }

    pub fn cutouts(
        &self,
        thickness: f64,
        settings: &FingerJointSettings,
        burn: f64,
    ) -> Vec<Vec<Point>> {
        finger_hole_cutouts(&self.frame(), self.length, thickness, settings, burn)
    }
}

/// One labelled part of the layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    pub label: String,
    pub boundary: PanelBoundary,
    pub holes: Vec<FingerHole>,
}

impl Panel {
    pub fn new(label: impl Into<String>, boundary: PanelBoundary) -> Self {
        Self {
            label: label.into(),
            boundary,
            holes: Vec::new(),
        }
    }

    pub fn with_holes(mut self, holes: Vec<FingerHole>) -> Self {
        self.holes = holes;
        self
    }
}
