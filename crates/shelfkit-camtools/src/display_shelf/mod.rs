//! Display Shelf Maker
//!
//! Based on the DisplayShelf generator from https://github.com/florianfesti/boxes:
//! a box whose shelves are inclined towards the viewer, optionally with a lip
//! at the front of every shelf, a back panel and side panels whose top
//! follows the shelf slope.
//!
//! Generation runs in a fixed order: derived geometry, the two side panels
//! (outline first, then their shelf and lip seats), the shelf boards with
//! their lips, and finally the back panel.

pub mod boards;
pub mod dimensions;
pub mod holes;
pub mod sides;
pub mod types;

pub use boards::{build_back_panel, build_shelf_boards};
pub use dimensions::{adjust_size, slant_length, ShelfGeometry};
pub use holes::{place_seat_holes, shelf_seat_anchor, shelf_seats, ShelfSeats};
pub use sides::{build_side_panels, side_boundary, SlopeCut, FALLBACK_TOP_EDGE};
pub use types::ShelfParameters;

use crate::dxf_export::write_sheet_dxf;
use crate::error::{CamToolError, CamToolResult};
use crate::gcode::{sheet_to_gcode, LaserSettings};
use crate::layout::Sheet;
use crate::panel::Panel;
use crate::svg::sheet_to_svg;
use std::io::Write;
use tracing::{debug, info};

pub struct DisplayShelfMaker {
    params: ShelfParameters,
    geometry: ShelfGeometry,
    slope_cut: Option<SlopeCut>,
    panels: Vec<Panel>,
}

impl DisplayShelfMaker {
    pub fn new(params: ShelfParameters) -> CamToolResult<Self> {
        params.validate()?;
        let geometry = ShelfGeometry::resolve(&params)?;

        debug!(
            "Display shelf geometry: {:.3} x {:.3} x {:.3}, angle {} ({:.4} rad), slant length {:.3}",
            geometry.width,
            geometry.depth,
            geometry.height,
            geometry.angle,
            geometry.radians,
            geometry.slant_length
        );

        Ok(Self {
            params,
            geometry,
            slope_cut: None,
            panels: Vec::new(),
        })
    }

    /// Build every panel. Either all panels are produced or none are.
    pub fn generate(&mut self) -> CamToolResult<()> {
        let params = &self.params;
        let geometry = &self.geometry;

        info!(
            "Generating display shelf: {} shelves, angle {}, lip {}, back {}, sloped top {}",
            params.num,
            params.angle,
            params.front_wall_height,
            params.include_back,
            params.slope_top
        );

        let (mut panels, slope_cut) = build_side_panels(params, geometry)?;
        if let Some(cut) = &slope_cut {
            debug!(
                "Sloped top cut: horizontal {:.3}, vertical {:.3}, hypotenuse {:.3}, clamped {}",
                cut.horizontal, cut.vertical, cut.hypotenuse, cut.clamped
            );
        }
        panels.extend(build_shelf_boards(params, geometry)?);
        panels.extend(build_back_panel(params, geometry)?);

        if let Some(open) = panels.iter().find(|p| !p.boundary.is_closed()) {
            return Err(CamToolError::Geometry(format!(
                "outline of {} does not close",
                open.label
            )));
        }

        info!("Generated {} panels", panels.len());

        self.slope_cut = slope_cut;
        self.panels = panels;
        Ok(())
    }

    pub fn params(&self) -> &ShelfParameters {
        &self.params
    }

    pub fn geometry(&self) -> &ShelfGeometry {
        &self.geometry
    }

    /// Cut applied to the side panels, if they have a sloped top.
    pub fn slope_cut(&self) -> Option<&SlopeCut> {
        self.slope_cut.as_ref()
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn panel(&self, label: &str) -> Option<&Panel> {
        self.panels.iter().find(|p| p.label == label)
    }

    /// Panels traced with joints and stacked on a sheet at the configured offset.
    pub fn sheet(&self) -> Sheet {
        let mut sheet = Sheet::layout(
            &self.panels,
            self.params.thickness,
            &self.params.finger_joint,
            self.params.burn,
            self.params.spacing,
        );
        sheet.move_to(self.params.offset_x, self.params.offset_y);
        sheet
    }

    pub fn laser_settings(&self) -> LaserSettings {
        LaserSettings {
            passes: self.params.laser_passes,
            power: self.params.laser_power,
            feed_rate: self.params.feed_rate,
            z_step_down: self.params.z_step_down,
        }
    }

    fn header(&self) -> Vec<String> {
        let p = &self.params;
        let g = &self.geometry;
        vec![
            "Display Shelf G-code".to_string(),
            "Based on https://github.com/florianfesti/boxes".to_string(),
            String::new(),
            "--- Shelf Dimensions ---".to_string(),
            format!("Dimensions: {}x{}x{} mm", p.x, p.y, p.h),
            format!("Outside Dimensions: {}", p.outside),
            format!("Shelves: {}", p.num),
            format!("Angle: {} deg", p.angle),
            format!("Front wall height: {} mm", p.front_wall_height),
            format!("Back panel: {}", p.include_back),
            format!("Sloped top: {}", p.slope_top),
            format!("Slant length: {:.3} mm", g.slant_length),
            String::new(),
            "--- Material Settings ---".to_string(),
            format!("Material thickness: {} mm", p.thickness),
            format!("Burn / Tool Dia: {} mm", p.burn),
            format!(
                "Finger width: {} * thickness = {} mm",
                p.finger_joint.finger,
                p.finger_joint.finger * p.thickness
            ),
            format!(
                "Space width: {} * thickness = {} mm",
                p.finger_joint.space,
                p.finger_joint.space * p.thickness
            ),
        ]
    }

    pub fn to_gcode(&self) -> String {
        sheet_to_gcode(&self.sheet(), &self.laser_settings(), &self.header())
    }

    pub fn to_svg(&self) -> String {
        sheet_to_svg(&self.sheet())
    }

    pub fn write_dxf<W: Write>(&self, writer: &mut W) -> CamToolResult<()> {
        write_sheet_dxf(&self.sheet(), writer)
    }

    /// Human-readable summary of the derived geometry and panel list.
    pub fn summary(&self) -> String {
        let g = &self.geometry;
        let mut out = String::new();
        out.push_str(&format!(
            "Inner size: {:.3} x {:.3} x {:.3} mm\n",
            g.width, g.depth, g.height
        ));
        out.push_str(&format!(
            "Angle: {} deg ({:.6} rad)\n",
            g.angle, g.radians
        ));
        out.push_str(&format!("Slant length: {:.3} mm\n", g.slant_length));
        if let Some(cut) = &self.slope_cut {
            out.push_str(&format!(
                "Sloped top: {:.3} x {:.3} mm cut{}\n",
                cut.horizontal,
                cut.vertical,
                if cut.clamped { " (narrowed to fit)" } else { "" }
            ));
        }
        for panel in &self.panels {
            let (w, h) = panel
                .boundary
                .bounds()
                .map(|b| (b.width(), b.height()))
                .unwrap_or_default();
            out.push_str(&format!(
                "{:<12} {:>9.3} x {:>9.3}  edges {}  holes {}\n",
                panel.label,
                w,
                h,
                panel.boundary.edge_codes(),
                panel.holes.len()
            ));
        }
        out
    }
}
