//! DXF export of a laid-out sheet
//!
//! Every cut is written as LINE entities on a layer named after its panel.

use crate::error::{CamToolError, CamToolResult};
use crate::layout::Sheet;
use dxf::entities::{Entity, EntityType, Line};
use dxf::Drawing;
use std::io::Write;

fn layer_name(label: &str) -> String {
    label
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_uppercase() } else { '_' })
        .collect()
}

pub fn sheet_to_dxf(sheet: &Sheet) -> Drawing {
    let mut drawing = Drawing::new();

    for panel in &sheet.panels {
        let layer = layer_name(&panel.label);
        for path in panel.paths() {
            for segment in path.windows(2) {
                let line = Line::new(
                    dxf::Point::new(segment[0].x, segment[0].y, 0.0),
                    dxf::Point::new(segment[1].x, segment[1].y, 0.0),
                );
                let mut entity = Entity::new(EntityType::Line(line));
                entity.common.layer = layer.clone();
                drawing.add_entity(entity);
            }
        }
    }

    drawing
}

pub fn write_sheet_dxf<W: Write>(sheet: &Sheet, writer: &mut W) -> CamToolResult<()> {
    sheet_to_dxf(sheet)
        .save(writer)
        .map_err(|e| CamToolError::GenerationFailed(format!("DXF export failed: {e}")))
}
