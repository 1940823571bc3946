//--------------------------------------------------------------------
// vec2.rs
//--------------------------------------------------------------------
// Provides a two-element vector class
//--------------------------------------------------------------------

use crate::derive_more::*;
use crate::approx::{AbsDiffEq, RelativeEq};

use super::*;

// Vec2
#[derive(Copy, Clone, Default, Add, Sub, Mul, Div, AddAssign, SubAssign, Neg, PartialEq,
    MulAssign, DivAssign, From, Into, Display, Constructor)]
#[display(fmt = "({},{})", x, y)]
pub struct Vec2 { pub x: Coord, pub y: Coord }

impl Vec2 {
    pub const NULL: Vec2 = Vec2 { x: 0.0, y: 0.0 };
    pub const I: Vec2 = Vec2 { x: 1.0, y: 0.0 };
    pub const J: Vec2 = Vec2 { x: 0.0, y: 1.0 };
    pub const ONE: Vec2 = Vec2 { x: 1.0, y: 1.0 };
    pub const MINUS_ONE: Vec2 = Vec2 { x: -1.0, y: -1.0 };

    pub fn from_angle(angle: Coord) -> Vec2 { Vec2::new(angle.cos(), angle.sin()) }

    pub fn set(&mut self, x: Coord, y: Coord) { self.x = x; self.y = y; }

    pub fn to_wide(&self) -> WidePoint { (self.x as f64, self.y as f64) }
    pub fn from_wide(p: WidePoint) -> Vec2 { Vec2::new(p.0 as Coord, p.1 as Coord) }

    pub fn dot(&self, other: Vec2) -> Coord { self.x * other.x + self.y * other.y }
    pub fn cross(&self, other: Vec2) -> Coord { self.x * other.y - self.y * other.x }

    pub fn length_sq(&self) -> Coord { self.dot(*self) }
    pub fn length(&self) -> Coord { self.length_sq().sqrt() }
    pub fn is_null(&self) -> bool { self.x == 0.0 && self.y == 0.0 }

    pub fn ortho(&self) -> Vec2 { Vec2 { x: -self.y, y: self.x } }
    pub fn lerp(a: Vec2, b: Vec2, t: Coord) -> Vec2 { (1.0 - t) * a + t * b }

    pub fn rotate_sin_cos(&mut self, sa: Coord, ca: Coord) {
        let x = self.x * ca - self.y * sa;
        let y = self.x * sa + self.y * ca;
        self.set(x, y);
    }

    pub fn rotate(&mut self, radians: Coord) { self.rotate_sin_cos(radians.sin(), radians.cos()); }

    pub fn rotate_about_sin_cos(&mut self, center: Vec2, sa: Coord, ca: Coord) {
        *self -= center;
        self.rotate_sin_cos(sa, ca);
        *self += center;
    }

    pub fn rotate_about(&mut self, center: Vec2, radians: Coord) {
        self.rotate_about_sin_cos(center, radians.sin(), radians.cos());
    }

    pub fn rotated(&self, radians: Coord) -> Vec2 {
        let mut v = *self;
        v.rotate(radians);
        v
    }

    // Squared norms of exactly 0 or 1 are left untouched
    pub fn normalize(&mut self) {
        let f = self.length_sq();
        if f == 1.0 || f == 0.0 { return; }
        let f = f.sqrt();
        self.x /= f;
        self.y /= f;
    }

    pub fn normalized(&self) -> Vec2 {
        let mut v = *self;
        v.normalize();
        v
    }

    // Returns the previous length
    pub fn set_length(&mut self, n: Coord) -> Coord {
        let f = self.length();
        if f > 0.0 {
            let n = n / f;
            self.x *= n;
            self.y *= n;
        }
        f
    }

    // No sqrt when the squared norm is exactly 0 or 1
    pub fn norm(&self) -> Coord {
        let f = self.length_sq();
        if f == 1.0 || f == 0.0 { f } else { f.sqrt() }
    }

    // Chebyshev norm
    pub fn normax(&self) -> Coord { self.x.abs().max(self.y.abs()) }

    // [0, 2pi), though a tiny negative y rounds up to exactly TWO_PI,
    // the same place where angmax gives 8
    pub fn angle(&self) -> Coord { self.y.atan2(self.x).wrap_angle_positive() }

    /// Fast angular key in [0, 8], two units per quadrant and monotonic with
    /// `angle`. Not radians: only good for ordering directions.
    pub fn angmax(&self) -> Coord {
        let a = self.x.abs();
        let b = self.y.abs();
        if b == 0.0 && self.x >= 0.0 { return 0.0; }

        let mut comp = if b >= a { 2.0 - a / b } else { b / a };
        if self.x < 0.0 { comp = 4.0 - comp; }
        if self.y < 0.0 { comp = ANGMAX_PERIOD - comp; }
        comp
    }
}

// Implement scalar * mul as required
impl core::ops::Mul<Vec2> for Coord {
    type Output = Vec2;
    fn mul(self, rhs: Vec2) -> Vec2 { Vec2::new(self * rhs.x, self * rhs.y) }
}

impl std::fmt::Debug for Vec2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}

impl AbsDiffEq for Vec2 {
    type Epsilon = Coord;

    fn default_epsilon() -> Coord { Coord::default_epsilon() }

    fn abs_diff_eq(&self, other: &Vec2, epsilon: Coord) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

impl RelativeEq for Vec2 {
    fn default_max_relative() -> Coord { Coord::default_max_relative() }

    fn relative_eq(&self, other: &Vec2, epsilon: Coord, max_relative: Coord) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
    }
}
