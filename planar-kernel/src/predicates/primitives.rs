//--------------------------------------------------------------------
// primitives.rs
//--------------------------------------------------------------------
// Double precision routines on raw coordinates that every predicate
// reduces to
//--------------------------------------------------------------------

use crate::geometry::{inside01_eps, WidePoint};

// Twice the signed area
pub fn ccw(ax: f64, ay: f64, bx: f64, by: f64, cx: f64, cy: f64) -> f64 {
    (bx - ax) * (cy - ay) - (by - ay) * (cx - ax)
}

fn ccw_pts(a: WidePoint, b: WidePoint, c: WidePoint) -> f64 { ccw(a.0, a.1, b.0, b.1, c.0, c.1) }

fn cross(u: WidePoint, v: WidePoint) -> f64 { u.0 * v.1 - u.1 * v.0 }
fn dot(u: WidePoint, v: WidePoint) -> f64 { u.0 * v.0 + u.1 * v.1 }
fn sub(u: WidePoint, v: WidePoint) -> WidePoint { (u.0 - v.0, u.1 - v.1) }
fn along(a: WidePoint, d: WidePoint, t: f64) -> WidePoint { (a.0 + t * d.0, a.1 + t * d.1) }

fn opposite_signs(a: f64, b: f64) -> bool { (a > 0.0 && b < 0.0) || (a < 0.0 && b > 0.0) }

// p is known to be collinear with a and b
fn within_box(a: WidePoint, b: WidePoint, p: WidePoint) -> bool {
    p.0 >= a.0.min(b.0) && p.0 <= a.0.max(b.0) && p.1 >= a.1.min(b.1) && p.1 <= a.1.max(b.1)
}

// Touching or overlapping segments give the first of p1, p2, p3, p4 lying
// on the other segment
pub fn segments_intersection(p1: WidePoint, p2: WidePoint, p3: WidePoint, p4: WidePoint) -> Option<WidePoint> {
    let d1 = ccw_pts(p3, p4, p1);
    let d2 = ccw_pts(p3, p4, p2);
    let d3 = ccw_pts(p1, p2, p3);
    let d4 = ccw_pts(p1, p2, p4);

    if opposite_signs(d1, d2) && opposite_signs(d3, d4) {
        let t = d1 / (d1 - d2);
        return Some(along(p1, sub(p2, p1), t));
    }

    // Touching and collinear cases reduce to interval checks on the common line
    if d1 == 0.0 && within_box(p3, p4, p1) { return Some(p1); }
    if d2 == 0.0 && within_box(p3, p4, p2) { return Some(p2); }
    if d3 == 0.0 && within_box(p1, p2, p3) { return Some(p3); }
    if d4 == 0.0 && within_box(p1, p2, p4) { return Some(p4); }

    None
}

pub fn segments_intersect(p1: WidePoint, p2: WidePoint, p3: WidePoint, p4: WidePoint) -> bool {
    segments_intersection(p1, p2, p3, p4).is_some()
}

pub fn lines_intersection(p1: WidePoint, p2: WidePoint, p3: WidePoint, p4: WidePoint) -> Option<WidePoint> {
    let r = sub(p2, p1);
    let s = sub(p4, p3);
    let k = cross(r, s);

    // Parallel up to the rounding of the cross product itself
    if k.abs() <= f64::EPSILON * dot(r, r).sqrt() * dot(s, s).sqrt() { return None; }

    match roots::find_roots_linear(k, cross(sub(p1, p3), s)) {
        roots::Roots::One([t]) => Some(along(p1, r, t)),
        _ => None
    }
}

pub fn lines_intersect(p1: WidePoint, p2: WidePoint, p3: WidePoint, p4: WidePoint) -> bool {
    lines_intersection(p1, p2, p3, p4).is_some()
}

// Parameter of the orthogonal projection of p along p1 + t(p2 - p1)
fn projection_param(p1: WidePoint, d: WidePoint, p: WidePoint) -> f64 {
    dot(sub(p, p1), d) / dot(d, d)
}

// p1 != p2
pub fn line_projection(p1: WidePoint, p2: WidePoint, p: WidePoint) -> WidePoint {
    let d = sub(p2, p1);
    along(p1, d, projection_param(p1, d, p))
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ProjectionStatus { Interior, ClampedToFirst, ClampedToSecond }

// epsilon is a distance past either endpoint
pub fn segment_projection(p1: WidePoint, p2: WidePoint, p: WidePoint, epsilon: f64) -> (ProjectionStatus, WidePoint) {
    let d = sub(p2, p1);
    let len2 = dot(d, d);
    if len2 == 0.0 { return (ProjectionStatus::ClampedToFirst, p1); }

    let t = projection_param(p1, d, p);
    let tol = epsilon / len2.sqrt();

    if t < -tol { (ProjectionStatus::ClampedToFirst, p1) }
    else if t > 1.0 + tol { (ProjectionStatus::ClampedToSecond, p2) }
    else { (ProjectionStatus::Interior, along(p1, d, t)) }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SegmentQuery {
    pub inside: bool,
    // squared distance to the line
    pub dist_sq: f64,
    pub t: f64
}

pub fn segment_query(p1: WidePoint, p2: WidePoint, p: WidePoint, epsilon: f64) -> SegmentQuery {
    let d = sub(p2, p1);
    let len2 = dot(d, d);

    if len2 == 0.0 {
        let w = sub(p, p1);
        let dist_sq = dot(w, w);
        return SegmentQuery { inside: dist_sq <= epsilon * epsilon, dist_sq, t: 0.0 };
    }

    let t = projection_param(p1, d, p);
    let w = sub(p, along(p1, d, t));
    let dist_sq = dot(w, w);
    let inside = dist_sq <= epsilon * epsilon && inside01_eps(t, epsilon / len2.sqrt());
    SegmentQuery { inside, dist_sq, t }
}

pub fn in_segment(p1: WidePoint, p2: WidePoint, p: WidePoint, epsilon: f64) -> bool {
    segment_query(p1, p2, p, epsilon).inside
}

// Either winding; a collinear triangle holds its hull segment
pub fn in_triangle(p1: WidePoint, p2: WidePoint, p3: WidePoint, p: WidePoint) -> bool {
    let c1 = ccw_pts(p1, p2, p);
    let c2 = ccw_pts(p2, p3, p);
    let c3 = ccw_pts(p3, p1, p);

    if c1 == 0.0 && c2 == 0.0 && c3 == 0.0 {
        return within_box(p1, p2, p) || within_box(p2, p3, p) || within_box(p3, p1, p);
    }

    (c1 >= 0.0 && c2 >= 0.0 && c3 >= 0.0) || (c1 <= 0.0 && c2 <= 0.0 && c3 <= 0.0)
}
