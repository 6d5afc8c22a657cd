use shelfkit_core::geometry::{polar, EPSILON};
use shelfkit_core::{Bounds, Frame, Point, Turtle};

#[test]
fn test_turtle_traces_slanted_pentagon() {
    // Rectangle with its top-front corner cut at 30 degrees.
    let angle: f64 = 30.0;
    let vertical_cut = 20.0;
    let horizontal_cut = vertical_cut / angle.to_radians().tan();
    let hypotenuse = (horizontal_cut.powi(2) + vertical_cut.powi(2)).sqrt();
    let width = 100.0;
    let height = 300.0;

    let edges = [
        (width, 90.0),
        (height - vertical_cut, 90.0 - angle),
        (hypotenuse, angle),
        (width - horizontal_cut, 90.0),
        (height, 90.0),
    ];

    let mut turtle = Turtle::new();
    let mut corners = vec![turtle.position()];
    for (length, turn) in edges {
        corners.push(turtle.forward(length));
        turtle.turn(turn);
    }

    assert!(turtle.position().approx_eq(&Point::ORIGIN, 1e-9));
    assert!((turtle.heading() - 360.0).abs() < EPSILON);

    let bounds = Bounds::of(corners.iter()).expect("corners");
    assert!((bounds.width() - width).abs() < 1e-9);
    assert!((bounds.height() - height).abs() < 1e-9);
}

#[test]
fn test_frame_maps_local_edge_offsets() {
    let frame = Frame::new(Point::new(100.0, 0.0), 90.0);
    // One unit along the edge and one unit towards the interior.
    let p = frame.to_world(Point::new(1.0, 1.0));
    assert!(p.approx_eq(&Point::new(99.0, 1.0), 1e-9));
    assert!(polar(180.0, 1.0).approx_eq(&Point::new(-1.0, 0.0), 1e-9));
}

#[test]
fn test_point_serializes_as_object() {
    let json = serde_json::to_string(&Point::new(1.5, -2.0)).expect("serialize");
    assert_eq!(json, r#"{"x":1.5,"y":-2.0}"#);
    let back: Point = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, Point::new(1.5, -2.0));
}
