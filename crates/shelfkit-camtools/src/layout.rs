//! Sheet layout
//!
//! Turns generated panels into cut paths and stacks them on a single sheet,
//! bottom to top in generation order.

use crate::finger_joint::FingerJointSettings;
use crate::panel::Panel;
use serde::Serialize;
use shelfkit_core::geometry::{Bounds, Point};

#[derive(Clone, Copy, Debug)]
struct LayoutCursor {
    y: f64,
    spacing: f64,
}

impl LayoutCursor {
    fn new(spacing: f64) -> Self {
        Self { y: 0.0, spacing }
    }

    /// Reserve a row of `height` and return its bottom.
    fn place(&mut self, height: f64) -> f64 {
        let position = self.y;
        self.y += height + self.spacing;
        position
    }
}

/// Cut paths of one panel in sheet coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedPanel {
    pub label: String,
    /// Finger holes, cut before the outline frees the part
    pub holes: Vec<Vec<Point>>,
    pub outline: Vec<Point>,
}

impl PlacedPanel {
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::of(self.outline.iter().chain(self.holes.iter().flatten()))
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        for p in self.outline.iter_mut().chain(self.holes.iter_mut().flatten()) {
            *p = p.translate(dx, dy);
        }
    }

    /// Every path of the panel, holes first.
    pub fn paths(&self) -> impl Iterator<Item = &Vec<Point>> {
        self.holes.iter().chain(std::iter::once(&self.outline))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Sheet {
    pub panels: Vec<PlacedPanel>,
}

impl Sheet {
    /// Trace `panels` and stack them `spacing` apart.
    pub fn layout(
        panels: &[Panel],
        thickness: f64,
        settings: &FingerJointSettings,
        burn: f64,
        spacing: f64,
    ) -> Sheet {
        let mut cursor = LayoutCursor::new(spacing);
        let mut placed = Vec::with_capacity(panels.len());

        for panel in panels {
            let mut part = PlacedPanel {
                label: panel.label.clone(),
                holes: panel
                    .holes
                    .iter()
                    .flat_map(|hole| hole.cutouts(thickness, settings, burn))
                    .collect(),
                outline: panel.boundary.outline(thickness, settings, burn),
            };

            if let Some(bounds) = part.bounds() {
                let row = cursor.place(bounds.height());
                part.translate(-bounds.min.x, row - bounds.min.y);
            }
            placed.push(part);
        }

        Sheet { panels: placed }
    }

    pub fn bounds(&self) -> Option<Bounds> {
        self.panels
            .iter()
            .filter_map(PlacedPanel::bounds)
            .reduce(|a, b| a.union(&b))
    }

    /// Shift everything so the sheet's minimum corner sits at `(x, y)`.
    pub fn move_to(&mut self, x: f64, y: f64) {
        if let Some(bounds) = self.bounds() {
            let (dx, dy) = (x - bounds.min.x, y - bounds.min.y);
            for panel in &mut self.panels {
                panel.translate(dx, dy);
            }
        }
    }

    pub fn path_count(&self) -> usize {
        self.panels.iter().map(|p| p.holes.len() + 1).sum()
    }
}
