//--------------------------------------------------------------------
// geometry.rs
//--------------------------------------------------------------------
// Provides the two-dimensional vector and the scalar geometry built
// around it
//--------------------------------------------------------------------

mod coord_utils;
mod vec2;
mod measure;
mod ordering;

// Storage precision of Vec2; all orientation arithmetic widens to f64
pub type Coord = f32;
pub use std::f32 as CoordM;

// Double precision point handed to the predicate primitives
pub type WidePoint = (f64, f64);

pub use coord_utils::*;
pub use vec2::*;
pub use measure::*;
pub use ordering::*;
