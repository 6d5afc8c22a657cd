//! # ShelfKit CAM Tools
//!
//! Generates the flat panels of a slanted display shelf and turns them into
//! cut files.
//!
//! ## Tools Included
//!
//! - **Display Shelf Maker**: side panels with shelf and lip seats, shelf
//!   boards, front lips and an optional back panel
//! - **Finger Joints**: finger edges, matching slots and seat cutouts
//!
//! ## Output
//!
//! - **Layout**: panels stacked on a single sheet
//! - **G-Code**: multi-pass laser program
//! - **SVG** and **DXF** export

pub mod display_shelf;
pub mod dxf_export;
pub mod error;
pub mod finger_joint;
pub mod gcode;
pub mod layout;
pub mod panel;
pub mod svg;

// Re-export commonly used items
pub use display_shelf::{DisplayShelfMaker, ShelfGeometry, ShelfParameters, SlopeCut};
pub use dxf_export::{sheet_to_dxf, write_sheet_dxf};
pub use error::{CamToolError, CamToolResult, ParameterError, ParameterResult};
pub use finger_joint::FingerJointSettings;
pub use gcode::{sheet_to_gcode, LaserSettings};
pub use layout::{PlacedPanel, Sheet};
pub use panel::{EdgeKind, FingerHole, Panel, PanelBoundary};
pub use svg::sheet_to_svg;

/// Validate `params` and generate every panel of the shelf.
pub fn generate_panels(params: &ShelfParameters) -> CamToolResult<Vec<Panel>> {
    let mut maker = DisplayShelfMaker::new(params.clone())?;
    maker.generate()?;
    Ok(maker.panels().to_vec())
}
