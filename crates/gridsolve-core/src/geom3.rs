//! 3D counterparts of the 2D geometry: [`Point3`] and [`Dimension3`].

use std::fmt;
use std::ops::{Add, Sub};

/// A 3D integer point.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point3 {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Point3 {
    pub const ZERO: Self = Self::new(0, 0, 0);
    pub const UP: Self = Self::new(0, 1, 0);
    pub const DOWN: Self = Self::new(0, -1, 0);
    pub const LEFT: Self = Self::new(-1, 0, 0);
    pub const RIGHT: Self = Self::new(1, 0, 0);
    pub const FORWARD: Self = Self::new(0, 0, 1);
    pub const BACK: Self = Self::new(0, 0, -1);

    /// The six face-adjacent unit moves.
    pub const CARDINAL: [Self; 6] = [
        Self::UP,
        Self::DOWN,
        Self::LEFT,
        Self::RIGHT,
        Self::FORWARD,
        Self::BACK,
    ];

    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn manhattan_distance(self, other: Point3) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs() + (self.z - other.z).abs()
    }

    #[inline]
    pub fn squared_distance(self, other: Point3) -> i64 {
        let dx = i64::from(self.x - other.x);
        let dy = i64::from(self.y - other.y);
        let dz = i64::from(self.z - other.z);
        dx * dx + dy * dy + dz * dz
    }

    #[inline]
    pub fn euclidean_distance(self, other: Point3) -> f64 {
        (self.squared_distance(other) as f64).sqrt()
    }

    /// Whether the point lies in the inclusive box `[min, max]`; `min`
    /// defaults to the origin.
    #[inline]
    pub fn in_bounds(self, max: Point3, min: Option<Point3>) -> bool {
        let min = min.unwrap_or(Self::ZERO);
        (min.x..=max.x).contains(&self.x)
            && (min.y..=max.y).contains(&self.y)
            && (min.z..=max.z).contains(&self.z)
    }

    /// Neighbours along `directions` inside `[ZERO, max]`.
    pub fn neighbors(self, max: Point3, directions: &[Point3]) -> Vec<Point3> {
        directions
            .iter()
            .map(|&d| self + d)
            .filter(|n| n.in_bounds(max, None))
            .collect()
    }
}

impl fmt::Display for Point3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl Add for Point3 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Point3 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

/// Extents of a 3D grid along x, y and z.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimension3 {
    pub width: usize,
    pub height: usize,
    pub depth: usize,
}

impl Dimension3 {
    #[inline]
    pub const fn new(width: usize, height: usize, depth: usize) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    #[inline]
    pub const fn volume(self) -> usize {
        self.width * self.height * self.depth
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_and_distance() {
        let a = Point3::new(1, 2, 3);
        let b = Point3::new(4, 6, 3);
        assert_eq!(a + b, Point3::new(5, 8, 6));
        assert_eq!(b - a, Point3::new(3, 4, 0));
        assert_eq!(a.manhattan_distance(b), 7);
        assert_eq!(a.squared_distance(b), 25);
        assert!((a.euclidean_distance(b) - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn six_neighbors_in_the_middle() {
        let max = Point3::new(2, 2, 2);
        let n = Point3::new(1, 1, 1).neighbors(max, &Point3::CARDINAL);
        assert_eq!(n.len(), 6);
        let corner = Point3::ZERO.neighbors(max, &Point3::CARDINAL);
        assert_eq!(
            corner,
            vec![Point3::UP, Point3::RIGHT, Point3::FORWARD]
        );
    }

    #[test]
    fn in_bounds_with_min() {
        let max = Point3::new(1, 1, 1);
        assert!(!Point3::new(-1, 0, 0).in_bounds(max, None));
        assert!(Point3::new(-1, 0, 0).in_bounds(max, Some(Point3::new(-1, -1, -1))));
    }
}
