//--------------------------------------------------------------------
// polygon.rs
//--------------------------------------------------------------------
// Provides various utility functions for polygons, built on top of
// the geometric predicates
//--------------------------------------------------------------------

use crate::geometry::*;
use crate::predicates::*;
use std::cmp::Ordering;

// Shoelace, positive for counterclockwise
pub fn polygon_signed_area(poly: &[Vec2]) -> f64 {
    let mut winding = 0.0;

    for i in 0..poly.len() {
        let (x0, y0) = poly[i].to_wide();
        let (x1, y1) = poly[(i+1) % poly.len()].to_wide();
        winding += x0 * y1 - y0 * x1;
    }

    winding / 2.0
}

// Consecutive edges a-b and b-c fold back over each other
fn edges_fold_back(a: Vec2, b: Vec2, c: Vec2) -> bool {
    ccw(a, b, c) == 0.0 && (b - a).dot(c - b) < 0.0
}

pub fn polygon_is_simple(poly: &[Vec2], closed: bool) -> bool {
    let n = poly.len();
    if n < 3 { return true; }
    let edges = if closed { n } else { n-1 };
    let edge = |i: usize| (poly[i], poly[(i+1) % n]);

    for i in 0..edges {
        let (a, b) = edge(i);
        if (closed || i+1 < edges) && edges_fold_back(a, b, edge((i+1) % n).1) { return false; }

        for j in i+2..edges {
            // The first and last edges share a vertex on closed polygons
            if closed && i == 0 && j == edges-1 { continue; }
            let (c, d) = edge(j);
            if segments_intersect(a, b, c, d) { return false; }
        }
    }

    true
}

// Even-odd rule, the boundary counts as inside
pub fn polygon_contains_point(poly: &[Vec2], p: Vec2, epsilon: f64) -> bool {
    let mut contains = false;

    for i in 0..poly.len() {
        let mut p0 = poly[i];
        let mut p1 = poly[if i == 0 { poly.len()-1 } else { i-1 }];

        if in_segment(p0, p1, p, epsilon) { return true; }

        // If the two points are equal, skip
        if p0 == p1 { continue; }

        if p0.x < p.x && p1.x < p.x { continue; }
        if p0.x < p.x { p0 = p1 + (p.x - p1.x) / (p0.x - p1.x) * (p0 - p1); }
        if p1.x < p.x { p1 = p0 + (p.x - p0.x) / (p1.x - p0.x) * (p1 - p0); }
        if (p0.y >= p.y) != (p1.y >= p.y) { contains = !contains; }
    }

    contains
}

// Graham scan, counterclockwise from the lexicographically smallest point
pub fn convex_hull(points: &[Vec2]) -> Vec<Vec2> {
    let pivot = match points.iter().min_by(|a, b| lexicographic_compare(a, b)) {
        Some(&pivot) => pivot,
        None => return Vec::new()
    };

    // Every other point is to the right of or straight above the pivot,
    // so a quarter turn brings all directions into (0, pi]
    let key = |p: Vec2| AngmaxKey::of((p - pivot).ortho());

    let mut rest: Vec<_> = points.iter().copied().filter(|&p| p != pivot).collect();
    rest.sort_by(|&a, &b| key(a).cmp(&key(b)).then_with(|| {
        distance_squared(pivot, a).partial_cmp(&distance_squared(pivot, b)).unwrap_or(Ordering::Equal)
    }));
    rest.dedup();

    let mut hull = vec![pivot];
    for p in rest {
        while hull.len() >= 2 && ccw(hull[hull.len()-2], hull[hull.len()-1], p) <= 0.0 {
            hull.pop();
        }
        hull.push(p);
    }

    hull
}

#[cfg(test)]
mod test {
    use super::*;

    fn v(x: Coord, y: Coord) -> Vec2 { Vec2::new(x, y) }

    fn square() -> Vec<Vec2> { vec![v(0.0, 0.0), v(2.0, 0.0), v(2.0, 2.0), v(0.0, 2.0)] }

    #[test]
    fn test_signed_area() {
        assert_eq!(polygon_signed_area(&square()), 4.0);
        let mut cw = square();
        cw.reverse();
        assert_eq!(polygon_signed_area(&cw), -4.0);
        assert_eq!(polygon_signed_area(&[]), 0.0);
    }

    #[test]
    fn test_simple() {
        assert!(polygon_is_simple(&square(), true));

        let bowtie = [v(0.0, 0.0), v(2.0, 2.0), v(2.0, 0.0), v(0.0, 2.0)];
        assert!(!polygon_is_simple(&bowtie, true));
        assert!(!polygon_is_simple(&bowtie, false));

        // The default control polygon of the demo
        let zigzag = [v(-2.0, -2.0), v(-1.0, 1.0), v(1.0, 0.0), v(2.0, -2.0)];
        assert!(polygon_is_simple(&zigzag, false));

        let spike = [v(0.0, 0.0), v(2.0, 0.0), v(1.0, 0.0)];
        assert!(!polygon_is_simple(&spike, false));
    }

    #[test]
    fn test_contains_point() {
        let sq = square();
        assert!(polygon_contains_point(&sq, v(1.0, 1.0), 1e-6));
        assert!(!polygon_contains_point(&sq, v(3.0, 1.0), 1e-6));
        assert!(!polygon_contains_point(&sq, v(-1.0, 1.0), 1e-6));
        assert!(polygon_contains_point(&sq, v(2.0, 1.0), 1e-6));
        assert!(polygon_contains_point(&sq, v(2.005, 1.0), 0.01));
        assert!(!polygon_contains_point(&sq, v(2.005, 1.0), 0.001));
    }

    #[test]
    fn test_convex_hull() {
        let pts = [v(1.0, 1.0), v(2.0, 2.0), v(0.0, 2.0), v(2.0, 0.0), v(0.0, 0.0), v(1.0, 0.0), v(0.5, 1.5)];
        assert_eq!(convex_hull(&pts), square());

        let line = [v(0.0, 0.0), v(3.0, 3.0), v(1.0, 1.0)];
        assert_eq!(convex_hull(&line), vec![v(0.0, 0.0), v(3.0, 3.0)]);

        assert!(convex_hull(&[]).is_empty());
        assert_eq!(convex_hull(&[v(1.0, 1.0), v(1.0, 1.0)]), vec![v(1.0, 1.0)]);
    }
}
