use crate::foundation::core::{BezPath, Point};

/// Monotone cubic interpolation in x (Steffen's method).
///
/// The curve passes through every point and never overshoots between neighbours, so a series
/// of non-negative values never dips below zero. Points must be sorted by x.
pub fn monotone_x(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    let Some((&first, rest)) = points.split_first() else {
        return path;
    };
    path.move_to(first);
    match rest {
        [] => return path,
        [only] => {
            path.line_to(*only);
            return path;
        }
        _ => {}
    }

    let tangents = tangents(points);
    for (i, pair) in points.windows(2).enumerate() {
        let (p0, p1) = (pair[0], pair[1]);
        let dx = (p1.x - p0.x) / 3.0;
        path.curve_to(
            Point::new(p0.x + dx, p0.y + dx * tangents[i]),
            Point::new(p1.x - dx, p1.y - dx * tangents[i + 1]),
            p1,
        );
    }
    path
}

fn tangents(points: &[Point]) -> Vec<f64> {
    let n = points.len();
    let mut t = vec![0.0; n];
    for i in 1..n - 1 {
        t[i] = interior_slope(points[i - 1], points[i], points[i + 1]);
    }
    t[0] = endpoint_slope(points[0], points[1], t[1]);
    t[n - 1] = endpoint_slope(points[n - 2], points[n - 1], t[n - 2]);
    t
}

fn interior_slope(p0: Point, p1: Point, p2: Point) -> f64 {
    let h0 = p1.x - p0.x;
    let h1 = p2.x - p1.x;
    let s0 = (p1.y - p0.y) / h0;
    let s1 = (p2.y - p1.y) / h1;
    let p = (s0 * h1 + s1 * h0) / (h0 + h1);
    let t = (sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
    // Coincident x values leave the tangent flat.
    if t.is_finite() { t } else { 0.0 }
}

fn endpoint_slope(p0: Point, p1: Point, neighbour: f64) -> f64 {
    let h = p1.x - p0.x;
    if h != 0.0 {
        (3.0 * (p1.y - p0.y) / h - neighbour) / 2.0
    } else {
        neighbour
    }
}

fn sign(v: f64) -> f64 {
    if v < 0.0 {
        -1.0
    } else if v > 0.0 {
        1.0
    } else {
        0.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/curve.rs"]
mod tests;
