//--------------------------------------------------------------------
// ordering.rs
//--------------------------------------------------------------------
// Comparators and sort keys used to put point sets in canonical or
// angular order
//--------------------------------------------------------------------

use crate::ordered_float::OrderedFloat;

use super::*;
use std::cmp::Ordering;

pub fn lexicographic_compare(v1: &Vec2, v2: &Vec2) -> Ordering {
    if v1.x > v2.x { Ordering::Greater }
    else if v1.x < v2.x { Ordering::Less }
    else if v1.y > v2.y { Ordering::Greater }
    else if v1.y < v2.y { Ordering::Less }
    else { Ordering::Equal }
}

// Mirrored directions across the x axis compare equal
pub fn polar_compare(v1: &Vec2, v2: &Vec2) -> Ordering {
    PolarKey::of(*v1).cmp(&PolarKey::of(*v2))
}

// Sort key equivalent to polar_compare
#[derive(Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub struct PolarKey(OrderedFloat<Coord>);

impl PolarKey {
    pub fn of(v: Vec2) -> PolarKey { PolarKey(angmax_delta(v, Vec2::I).into()) }
    pub fn value(&self) -> Coord { self.0.into_inner() }
}

// Sort key going counterclockwise around the full circle
#[derive(Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub struct AngmaxKey(OrderedFloat<Coord>);

impl AngmaxKey {
    pub fn of(v: Vec2) -> AngmaxKey { AngmaxKey(v.angmax().into()) }
    pub fn value(&self) -> Coord { self.0.into_inner() }
}

impl std::fmt::Debug for PolarKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PolarKey({})", self.0)
    }
}

impl std::fmt::Debug for AngmaxKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AngmaxKey({})", self.0)
    }
}

pub fn sort_lexicographic(points: &mut [Vec2]) { points.sort_by(lexicographic_compare); }
pub fn sort_polar(points: &mut [Vec2]) { points.sort_by_key(|&p| PolarKey::of(p)); }

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_lexicographic() {
        let mut pts = vec![Vec2::new(1.0, 2.0), Vec2::new(0.0, 5.0), Vec2::new(1.0, -1.0), Vec2::new(0.0, 5.0)];
        sort_lexicographic(&mut pts);
        assert_eq!(pts, vec![Vec2::new(0.0, 5.0), Vec2::new(0.0, 5.0), Vec2::new(1.0, -1.0), Vec2::new(1.0, 2.0)]);
        assert_eq!(lexicographic_compare(&Vec2::ONE, &Vec2::ONE), Ordering::Equal);
    }

    #[test]
    fn test_polar() {
        let mut pts = vec![-Vec2::I, Vec2::new(1.0, 1.0), Vec2::I * 3.0, Vec2::J];
        sort_polar(&mut pts);
        assert_eq!(pts, vec![Vec2::I * 3.0, Vec2::new(1.0, 1.0), Vec2::J, -Vec2::I]);

        // Mirrored directions are the same distance away from the x axis
        assert_eq!(polar_compare(&Vec2::J, &-Vec2::J), Ordering::Equal);
        assert_eq!(polar_compare(&Vec2::new(1.0, -1.0), &Vec2::J), Ordering::Less);
    }

    #[test]
    fn test_angmax_key() {
        let mut pts = vec![Vec2::new(1.0, -1.0), -Vec2::I, Vec2::J, Vec2::I];
        pts.sort_by_key(|&p| AngmaxKey::of(p));
        assert_eq!(pts, vec![Vec2::I, Vec2::J, -Vec2::I, Vec2::new(1.0, -1.0)]);
        assert_eq!(AngmaxKey::of(-Vec2::J).value(), 6.0);
        assert_eq!(PolarKey::of(-Vec2::J).value(), 2.0);
    }
}
