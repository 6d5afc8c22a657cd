//! Shelf boards, front lips and the back panel

use super::dimensions::ShelfGeometry;
use super::types::ShelfParameters;
use crate::error::ParameterResult;
use crate::panel::{Panel, PanelBoundary};

/// Shelf joined to a front lip: front fingers into the lip, sides into the
/// side panels, plain back edge.
pub const SHELF_EDGES: &str = "ffef";
/// Shelf without a lip: outset free front edge.
pub const SHELF_EDGES_FREE_FRONT: &str = "Efef";
/// Lip: slots for the shelf fingers along its bottom, sides into the side panels.
pub const LIP_EDGES: &str = "Ffef";
/// Back panel: slots for the side panels' back fingers on both sides.
pub const BACK_EDGES: &str = "eFeF";

/// Shelf boards, each followed by its front lip when lips are enabled.
pub fn build_shelf_boards(
    params: &ShelfParameters,
    geometry: &ShelfGeometry,
) -> ParameterResult<Vec<Panel>> {
    let mut panels = Vec::new();

    if params.has_front_lip() {
        for i in 1..=params.num {
            panels.push(Panel::new(
                format!("shelf {i}"),
                PanelBoundary::rectangle(geometry.width, geometry.slant_length, SHELF_EDGES)?,
            ));
            panels.push(Panel::new(
                format!("front lip {i}"),
                PanelBoundary::rectangle(geometry.width, params.front_wall_height, LIP_EDGES)?,
            ));
        }
    } else {
        for i in 1..=params.num {
            panels.push(Panel::new(
                format!("shelf {i}"),
                PanelBoundary::rectangle(
                    geometry.width,
                    geometry.slant_length,
                    SHELF_EDGES_FREE_FRONT,
                )?,
            ));
        }
    }

    Ok(panels)
}

pub fn build_back_panel(
    params: &ShelfParameters,
    geometry: &ShelfGeometry,
) -> ParameterResult<Option<Panel>> {
    if !params.include_back {
        return Ok(None);
    }

    Ok(Some(Panel::new(
        "back wall",
        PanelBoundary::rectangle(geometry.width, geometry.height, BACK_EDGES)?,
    )))
}
