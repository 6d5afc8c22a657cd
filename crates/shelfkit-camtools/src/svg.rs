//! SVG export of a laid-out sheet
//!
//! One group per panel, one path per cut. Coordinates are millimetres with
//! the sheet's Y axis flipped to SVG's downward Y.

use crate::layout::Sheet;
use shelfkit_core::geometry::Point;

const MARGIN: f64 = 5.0;
const STROKE_WIDTH: f64 = 0.1;

fn path_data(path: &[Point], flip: impl Fn(&Point) -> (f64, f64)) -> String {
    let mut data = String::new();
    for (i, p) in path.iter().enumerate() {
        let (x, y) = flip(p);
        let cmd = if i == 0 { 'M' } else { 'L' };
        data.push_str(&format!("{} {:.3} {:.3} ", cmd, x, y));
    }
    data.push('Z');
    data
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

pub fn sheet_to_svg(sheet: &Sheet) -> String {
    let (min, max) = match sheet.bounds() {
        Some(b) => (b.min, b.max),
        None => (Point::ORIGIN, Point::ORIGIN),
    };
    let width = max.x - min.x + 2.0 * MARGIN;
    let height = max.y - min.y + 2.0 * MARGIN;
    let flip = |p: &Point| (p.x - min.x + MARGIN, max.y - p.y + MARGIN);

    let mut svg = String::new();
    svg.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w:.3}mm\" height=\"{h:.3}mm\" viewBox=\"0 0 {w:.3} {h:.3}\">\n",
        w = width,
        h = height
    ));

    for panel in &sheet.panels {
        svg.push_str(&format!("  <g id=\"{}\">\n", escape(&panel.label)));
        svg.push_str(&format!("    <title>{}</title>\n", escape(&panel.label)));
        for path in panel.paths() {
            svg.push_str(&format!(
                "    <path d=\"{}\" fill=\"none\" stroke=\"black\" stroke-width=\"{}\"/>\n",
                path_data(path, &flip),
                STROKE_WIDTH
            ));
        }
        svg.push_str("  </g>\n");
    }

    svg.push_str("</svg>\n");
    svg
}
