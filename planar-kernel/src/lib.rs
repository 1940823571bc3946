//--------------------------------------------------------------------
// lib.rs
//--------------------------------------------------------------------
// Declaration of all modules occurs here
//--------------------------------------------------------------------

extern crate approx;
extern crate derive_more;
extern crate ordered_float;
extern crate roots;

mod geometry;
mod polygon;
pub mod predicates;

pub use geometry::*;
pub use polygon::*;
pub use predicates::{in_segment, in_triangle, line_projection, lines_intersect, lines_intersection,
    segment_projection, segment_query, segments_intersect, segments_intersection,
    ProjectionStatus, SegmentQuery};
