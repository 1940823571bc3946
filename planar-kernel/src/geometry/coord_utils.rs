//--------------------------------------------------------------------
// coord_utils.rs
//--------------------------------------------------------------------
// Provides utilities to work with the coordinate class
//--------------------------------------------------------------------

use super::*;

pub const PI: Coord = CoordM::consts::PI;
pub const TWO_PI: Coord = 2.0 * PI;
pub const HALF_PI: Coord = CoordM::consts::FRAC_PI_2;

// The angmax surrogate walks 2 units per quadrant
pub const ANGMAX_PERIOD: Coord = 8.0;
pub const ANGMAX_HALF_PERIOD: Coord = 4.0;

// Some utility functions for Coord
// trait used only for implementation
pub trait Geometry where Self: Sized {
    fn wrap_angle(self) -> Self;
    fn wrap_angle_positive(self) -> Self;
    fn wrap_angmax(self) -> Self;
}

impl Geometry for Coord {
    // (-pi, pi]
    fn wrap_angle(self) -> Coord {
        let mut a = self;
        while a > PI { a -= TWO_PI; }
        while a <= -PI { a += TWO_PI; }
        a
    }

    // [0, 2pi)
    fn wrap_angle_positive(self) -> Coord {
        if self < 0.0 { self + TWO_PI } else { self }
    }

    // (-4, 4]
    fn wrap_angmax(self) -> Coord {
        let mut a = self;
        if a > ANGMAX_HALF_PERIOD { a -= ANGMAX_PERIOD; }
        if a <= -ANGMAX_HALF_PERIOD { a += ANGMAX_PERIOD; }
        a
    }
}

pub fn inside01_eps(t: f64, tol: f64) -> bool { t >= -tol && t <= 1.0 + tol }
