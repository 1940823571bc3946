//--------------------------------------------------------------------
// measure.rs
//--------------------------------------------------------------------
// Distances, angles and areas between pairs and triples of vectors
//--------------------------------------------------------------------

use super::*;
use crate::predicates::primitives;

pub fn distance(v1: Vec2, v2: Vec2) -> Coord { distance_squared(v1, v2).sqrt() }

pub fn distance_squared(v1: Vec2, v2: Vec2) -> Coord {
    let dx = v1.x - v2.x;
    let dy = v1.y - v2.y;
    dx * dx + dy * dy
}

pub fn distance_max(v1: Vec2, v2: Vec2) -> Coord { (v1 - v2).normax() }

// [0, pi], 0 for null vectors
pub fn angle_between(v1: Vec2, v2: Vec2) -> Coord {
    let (x1, y1) = (v1.x as f64, v1.y as f64);
    let (x2, y2) = (v2.x as f64, v2.y as f64);

    let n = (x1 * x1 + y1 * y1).sqrt() * (x2 * x2 + y2 * y2).sqrt();
    if n == 0.0 { return 0.0; }

    // Rounding may push the cosine slightly out of [-1, 1]
    let c = ((x1 * x2 + y1 * y2) / n).max(-1.0).min(1.0);
    c.acos() as Coord
}

// Inputs must be unit vectors
pub fn angle_between_normalized(v1: Vec2, v2: Vec2) -> Coord {
    v1.dot(v2).max(-1.0).min(1.0).acos()
}

// (-pi, pi], counterclockwise is positive
pub fn oriented_angle(v1: Vec2, v2: Vec2) -> Coord {
    let theta1 = (v1.y as f64).atan2(v1.x as f64);
    let theta2 = (v2.y as f64).atan2(v2.x as f64);
    ((theta2 - theta1) as Coord).wrap_angle()
}

// [0, 4]
pub fn angmax_delta(v1: Vec2, v2: Vec2) -> Coord {
    let a = (v1.angmax() - v2.angmax()).abs();
    if a > ANGMAX_HALF_PERIOD { ANGMAX_PERIOD - a } else { a }
}

// (-4, 4]
pub fn oriented_angmax_delta(v1: Vec2, v2: Vec2) -> Coord {
    (v2.angmax() - v1.angmax()).wrap_angmax()
}

pub fn ccw(p1: Vec2, p2: Vec2, p3: Vec2) -> f64 {
    primitives::ccw(p1.x as f64, p1.y as f64, p2.x as f64, p2.y as f64, p3.x as f64, p3.y as f64)
}

fn det3(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64, g: f64, h: f64, i: f64) -> f64 {
    a * e * i + b * f * g + d * h * c - c * e * g - b * d * i - a * f * h
}

/// Barycentric coordinates `(u, v, w)` of `p` relative to the triangle
/// `(p1, p2, p3)`, such that `p = u*p1 + v*p2 + w*p3`.
///
/// The triangle must not be degenerate: with zero area the result is
/// made of infinities or NaNs.
pub fn barycentric(p1: Vec2, p2: Vec2, p3: Vec2, p: Vec2) -> (Coord, Coord, Coord) {
    let (x1, y1) = (p1.x as f64, p1.y as f64);
    let (x2, y2) = (p2.x as f64, p2.y as f64);
    let (x3, y3) = (p3.x as f64, p3.y as f64);
    let (x, y) = (p.x as f64, p.y as f64);

    let a = det3(x1, x2, x3, y1, y2, y3, 1.0, 1.0, 1.0);
    let a1 = det3(x, x2, x3, y, y2, y3, 1.0, 1.0, 1.0);
    let a2 = det3(x1, x, x3, y1, y, y3, 1.0, 1.0, 1.0);

    let u = a1 / a;
    let v = a2 / a;
    (u as Coord, v as Coord, (1.0 - u - v) as Coord)
}

// Top row of the window maps to y = 1
pub fn window_to_normalized(p: Vec2, width: u32, height: u32) -> Vec2 {
    let x = p.x * 2.0 / width as Coord - 1.0;
    let y = 1.0 - p.y * 2.0 / height as Coord;
    Vec2::new(x, y)
}
