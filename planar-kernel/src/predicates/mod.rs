//--------------------------------------------------------------------
// predicates.rs
//--------------------------------------------------------------------
// Intersection, projection and containment tests between points,
// segments, lines and triangles
//--------------------------------------------------------------------
// Inputs are widened to f64 before any arithmetic; output points are
// truncated back to the storage precision of Vec2. Every boundary
// sensitive test takes its tolerance explicitly.
//--------------------------------------------------------------------

pub mod primitives;

pub use primitives::{ProjectionStatus, SegmentQuery};

use crate::geometry::*;

pub fn segments_intersect(p1: Vec2, p2: Vec2, p3: Vec2, p4: Vec2) -> bool {
    primitives::segments_intersect(p1.to_wide(), p2.to_wide(), p3.to_wide(), p4.to_wide())
}

pub fn segments_intersection(p1: Vec2, p2: Vec2, p3: Vec2, p4: Vec2) -> Option<Vec2> {
    primitives::segments_intersection(p1.to_wide(), p2.to_wide(), p3.to_wide(), p4.to_wide())
        .map(Vec2::from_wide)
}

pub fn lines_intersect(p1: Vec2, p2: Vec2, p3: Vec2, p4: Vec2) -> bool {
    primitives::lines_intersect(p1.to_wide(), p2.to_wide(), p3.to_wide(), p4.to_wide())
}

pub fn lines_intersection(p1: Vec2, p2: Vec2, p3: Vec2, p4: Vec2) -> Option<Vec2> {
    primitives::lines_intersection(p1.to_wide(), p2.to_wide(), p3.to_wide(), p4.to_wide())
        .map(Vec2::from_wide)
}

pub fn line_projection(p1: Vec2, p2: Vec2, p: Vec2) -> Vec2 {
    Vec2::from_wide(primitives::line_projection(p1.to_wide(), p2.to_wide(), p.to_wide()))
}

pub fn segment_projection(p1: Vec2, p2: Vec2, p: Vec2, epsilon: f64) -> (ProjectionStatus, Vec2) {
    let (status, q) = primitives::segment_projection(p1.to_wide(), p2.to_wide(), p.to_wide(), epsilon);
    (status, Vec2::from_wide(q))
}

pub fn in_segment(p1: Vec2, p2: Vec2, p: Vec2, epsilon: f64) -> bool {
    primitives::in_segment(p1.to_wide(), p2.to_wide(), p.to_wide(), epsilon)
}

pub fn segment_query(p1: Vec2, p2: Vec2, p: Vec2, epsilon: f64) -> SegmentQuery {
    primitives::segment_query(p1.to_wide(), p2.to_wide(), p.to_wide(), epsilon)
}

pub fn in_triangle(p1: Vec2, p2: Vec2, p3: Vec2, p: Vec2) -> bool {
    primitives::in_triangle(p1.to_wide(), p2.to_wide(), p3.to_wide(), p.to_wide())
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;

    fn v(x: Coord, y: Coord) -> Vec2 { Vec2::new(x, y) }

    #[test]
    fn test_crossing_diagonals() {
        let (p1, p2, p3, p4) = (v(0.0, 0.0), v(2.0, 2.0), v(0.0, 2.0), v(2.0, 0.0));
        assert!(segments_intersect(p1, p2, p3, p4));
        assert_eq!(segments_intersection(p1, p2, p3, p4), Some(v(1.0, 1.0)));
    }

    #[test]
    fn test_collinear_disjoint() {
        assert!(!segments_intersect(v(0.0, 0.0), v(1.0, 0.0), v(2.0, 0.0), v(3.0, 0.0)));
        assert_eq!(segments_intersection(v(0.0, 0.0), v(1.0, 0.0), v(2.0, 0.0), v(3.0, 0.0)), None);
    }

    #[test]
    fn test_in_segment_tolerance() {
        let (p1, p2, p) = (v(0.0, 0.0), v(10.0, 0.0), v(5.0, 0.001));
        assert!(in_segment(p1, p2, p, 0.01));
        assert!(!in_segment(p1, p2, p, 0.0001));

        let q = segment_query(p1, p2, p, 0.01);
        assert!((q.t - 0.5).abs() < 1e-9);
        assert!((q.dist_sq - 1e-6).abs() < 1e-9);
    }

    #[test]
    fn test_lines_and_projection() {
        assert_eq!(lines_intersection(v(0.0, 0.0), v(1.0, 1.0), v(0.0, 4.0), v(1.0, 3.0)), Some(v(2.0, 2.0)));
        assert!(!lines_intersect(v(0.0, 0.0), v(1.0, 1.0), v(1.0, 0.0), v(2.0, 1.0)));
        assert_eq!(line_projection(v(0.0, 0.0), v(0.0, 3.0), v(-4.0, 9.0)), v(0.0, 9.0));

        let (status, q) = segment_projection(v(0.0, 0.0), v(0.0, 3.0), v(-4.0, 9.0), 0.01);
        assert_eq!(status, ProjectionStatus::ClampedToSecond);
        assert_eq!(q, v(0.0, 3.0));
    }

    fn point() -> impl Strategy<Value = Vec2> {
        (-50.0f32..50.0, -50.0f32..50.0).prop_map(|(x, y)| Vec2::new(x, y))
    }

    proptest! {
        #[test]
        fn triangle_contains_centroid_but_not_far_points(p1 in point(), p2 in point(), p3 in point(),
            dx in 1.0f32..100.0, dy in -100.0f32..100.0) {
            prop_assume!(ccw(p1, p2, p3).abs() > 1.0);
            let centroid = (1.0 / 3.0) * (p1 + p2 + p3);
            prop_assert!(in_triangle(p1, p2, p3, centroid));
            prop_assert!(in_triangle(p3, p2, p1, centroid));

            let max_x = p1.x.max(p2.x).max(p3.x);
            prop_assert!(!in_triangle(p1, p2, p3, Vec2::new(max_x + dx, dy)));
        }

        #[test]
        fn intersection_is_symmetric(p1 in point(), p2 in point(), p3 in point(), p4 in point()) {
            prop_assert_eq!(segments_intersect(p1, p2, p3, p4), segments_intersect(p3, p4, p1, p2));
        }
    }
}
