use kurbo::PathEl;

use super::*;

fn curve_points(path: &BezPath) -> Vec<(Point, Point, Point)> {
    path.elements()
        .iter()
        .filter_map(|el| match *el {
            PathEl::CurveTo(a, b, p) => Some((a, b, p)),
            _ => None,
        })
        .collect()
}

#[test]
fn short_inputs_degrade_to_move_and_line() {
    assert!(monotone_x(&[]).elements().is_empty());

    let one = monotone_x(&[Point::new(1.0, 2.0)]);
    assert_eq!(one.elements(), &[PathEl::MoveTo(Point::new(1.0, 2.0))]);

    let two = monotone_x(&[Point::new(0.0, 0.0), Point::new(4.0, 4.0)]);
    assert_eq!(
        two.elements(),
        &[
            PathEl::MoveTo(Point::new(0.0, 0.0)),
            PathEl::LineTo(Point::new(4.0, 4.0))
        ]
    );
}

#[test]
fn passes_through_every_point() {
    let pts = [
        Point::new(0.0, 0.0),
        Point::new(1.0, 1.0),
        Point::new(2.0, 4.0),
        Point::new(3.0, 9.0),
    ];
    let path = monotone_x(&pts);
    assert_eq!(path.elements()[0], PathEl::MoveTo(pts[0]));
    let ends: Vec<Point> = curve_points(&path).into_iter().map(|(_, _, p)| p).collect();
    assert_eq!(ends, pts[1..].to_vec());
}

#[test]
fn flat_series_stays_flat() {
    let pts: Vec<Point> = (0..5).map(|i| Point::new(f64::from(i), 7.0)).collect();
    for (a, b, _) in curve_points(&monotone_x(&pts)) {
        assert_eq!(a.y, 7.0);
        assert_eq!(b.y, 7.0);
    }
}

#[test]
fn peak_is_not_overshot() {
    let pts = [
        Point::new(0.0, 0.0),
        Point::new(1.0, 10.0),
        Point::new(2.0, 0.0),
    ];
    let segments = curve_points(&monotone_x(&pts));
    assert_eq!(segments.len(), 2);
    for (a, b, _) in segments {
        assert!(a.y <= 10.0 && a.y >= 0.0, "{a:?}");
        assert!(b.y <= 10.0 && b.y >= 0.0, "{b:?}");
    }
}

#[test]
fn increasing_series_keeps_controls_inside_each_segment() {
    let pts = [
        Point::new(0.0, 0.0),
        Point::new(1.0, 1.0),
        Point::new(2.0, 4.0),
        Point::new(3.0, 9.0),
    ];
    let segments = curve_points(&monotone_x(&pts));
    for (i, (a, b, _)) in segments.into_iter().enumerate() {
        let (lo, hi) = (pts[i].y, pts[i + 1].y);
        assert!(a.y >= lo && a.y <= hi, "segment {i}: {a:?}");
        assert!(b.y >= lo && b.y <= hi, "segment {i}: {b:?}");
    }
}

#[test]
fn straight_series_puts_controls_on_thirds() {
    let pts = [
        Point::new(0.0, 0.0),
        Point::new(3.0, 3.0),
        Point::new(6.0, 6.0),
    ];
    let segments = curve_points(&monotone_x(&pts));
    assert_eq!(
        segments,
        vec![
            (Point::new(1.0, 1.0), Point::new(2.0, 2.0), pts[1]),
            (Point::new(4.0, 4.0), Point::new(5.0, 5.0), pts[2]),
        ]
    );
}
