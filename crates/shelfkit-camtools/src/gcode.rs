//! Laser G-code emission for a laid-out sheet.

use crate::layout::Sheet;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaserSettings {
    pub passes: u32,
    /// Spindle / laser power (S word)
    pub power: u32,
    /// Cutting feed rate in mm/min
    pub feed_rate: f64,
    /// Z lowered between passes
    pub z_step_down: f64,
}

impl Default for LaserSettings {
    fn default() -> Self {
        Self {
            passes: 3,
            power: 1000,
            feed_rate: 500.0,
            z_step_down: 0.5,
        }
    }
}

/// Emit G-code cutting every path of `sheet`.
///
/// `header` lines are written as comments at the top of the program. Holes
/// of a panel are cut before its outline.
pub fn sheet_to_gcode(sheet: &Sheet, laser: &LaserSettings, header: &[String]) -> String {
    let mut gcode = String::new();

    for line in header {
        gcode.push_str(&format!("; {}\n", line));
    }
    gcode.push_str(";\n");
    gcode.push_str("; --- Laser Settings ---\n");
    gcode.push_str(&format!("; Laser passes: {}\n", laser.passes));
    gcode.push_str(&format!("; Laser power: S{}\n", laser.power));
    gcode.push_str(&format!("; Feed rate: {:.0} mm/min\n", laser.feed_rate));
    gcode.push_str(";\n");

    gcode.push_str("; Initialization\n");
    gcode.push_str("G21 ; Set units to millimeters\n");
    gcode.push_str("G90 ; Absolute positioning\n");
    gcode.push_str("G17 ; XY plane selection\n");
    gcode.push_str(&format!(
        "G0 Z{:.2} F{:.0} ; Move to safe height\n\n",
        5.0, laser.feed_rate
    ));

    for (i, panel) in sheet.panels.iter().enumerate() {
        gcode.push_str(&format!("; Panel {}: {}\n", i + 1, panel.label));

        for path in panel.paths() {
            let Some(first_point) = path.first() else {
                continue;
            };
            gcode.push_str(&format!(
                "G0 X{:.2} Y{:.2} ; Rapid to start\n",
                first_point.x, first_point.y
            ));

            for pass_num in 1..=laser.passes {
                let z_depth = -(f64::from(pass_num) - 1.0) * laser.z_step_down;
                if laser.passes > 1 {
                    gcode.push_str(&format!(
                        "; Pass {}/{} at Z{:.2}\n",
                        pass_num, laser.passes, z_depth
                    ));
                }
                if pass_num > 1 {
                    gcode.push_str(&format!("G0 Z{:.2} ; Move to pass depth\n", z_depth));
                }

                gcode.push_str(&format!("M3 S{} ; Laser on\n", laser.power));
                for (idx, point) in path.iter().skip(1).enumerate() {
                    if idx == 0 {
                        gcode.push_str(&format!(
                            "G1 X{:.2} Y{:.2} F{:.0}\n",
                            point.x, point.y, laser.feed_rate
                        ));
                    } else {
                        gcode.push_str(&format!("G1 X{:.2} Y{:.2}\n", point.x, point.y));
                    }
                }
                gcode.push_str("M5 ; Laser off\n");

                if pass_num < laser.passes {
                    gcode.push_str(&format!(
                        "G0 X{:.2} Y{:.2} ; Return to start\n",
                        first_point.x, first_point.y
                    ));
                }
            }
        }

        gcode.push('\n');
    }

    gcode.push_str("M5 ; Ensure laser off\n");
    gcode.push_str("G0 Z10.0 ; Move to safe height\n");
    gcode.push_str("G0 X0 Y0 ; Return to origin\n");
    gcode.push_str("M2 ; Program end\n");

    gcode
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::PlacedPanel;
    use shelfkit_core::geometry::Point;

    fn square_sheet() -> Sheet {
        let outline = vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
            Point::new(0.0, 0.0),
        ];
        Sheet {
            panels: vec![PlacedPanel {
                label: "left side".to_string(),
                holes: Vec::new(),
                outline,
            }],
        }
    }

    #[test]
    fn test_program_structure() {
        let laser = LaserSettings {
            passes: 2,
            ..Default::default()
        };
        let gcode = sheet_to_gcode(&square_sheet(), &laser, &["Display Shelf".to_string()]);
        assert!(gcode.starts_with("; Display Shelf\n"));
        assert!(gcode.contains("; Panel 1: left side"));
        assert!(gcode.contains("G1 X10.00 Y0.00 F500"));
        assert_eq!(gcode.matches("M3 S1000").count(), 2);
        assert!(gcode.contains("G0 Z-0.50 ; Move to pass depth"));
        assert!(gcode.trim_end().ends_with("M2 ; Program end"));
    }

    #[test]
    fn test_single_pass_has_no_return_move() {
        let laser = LaserSettings {
            passes: 1,
            ..Default::default()
        };
        let gcode = sheet_to_gcode(&square_sheet(), &laser, &[]);
        assert!(!gcode.contains("Return to start"));
        assert_eq!(gcode.matches("M3 ").count(), 1);
    }
}
