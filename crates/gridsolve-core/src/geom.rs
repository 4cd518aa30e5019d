//! Geometry primitives: [`Point`], [`Dimension`] and [`Range`].
//!
//! Points use screen coordinates: `x` is the column and grows right, `y` is
//! the row and grows down. Puzzle input is usually read row by row, so
//! [`Point::from_rc`] and [`Point::row`]/[`Point::col`] are provided for code
//! that thinks in `(row, col)` order.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D integer point. X grows right, Y grows down (screen coordinates).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self::new(0, 0);
    pub const UP: Self = Self::new(0, -1);
    pub const RIGHT: Self = Self::new(1, 0);
    pub const DOWN: Self = Self::new(0, 1);
    pub const LEFT: Self = Self::new(-1, 0);
    pub const UP_LEFT: Self = Self::new(-1, -1);
    pub const UP_RIGHT: Self = Self::new(1, -1);
    pub const DOWN_LEFT: Self = Self::new(-1, 1);
    pub const DOWN_RIGHT: Self = Self::new(1, 1);

    /// The four cardinal directions, clockwise from up.
    pub const CARDINAL: [Self; 4] = [Self::UP, Self::RIGHT, Self::DOWN, Self::LEFT];

    /// The four diagonal directions.
    pub const INTERCARDINAL: [Self; 4] = [
        Self::UP_LEFT,
        Self::UP_RIGHT,
        Self::DOWN_LEFT,
        Self::DOWN_RIGHT,
    ];

    /// Cardinal directions followed by the diagonals.
    pub const ALL: [Self; 8] = [
        Self::UP,
        Self::RIGHT,
        Self::DOWN,
        Self::LEFT,
        Self::UP_LEFT,
        Self::UP_RIGHT,
        Self::DOWN_LEFT,
        Self::DOWN_RIGHT,
    ];

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Create a point from `(row, col)` order.
    #[inline]
    pub const fn from_rc(row: i32, col: i32) -> Self {
        Self { x: col, y: row }
    }

    /// Row index (same as `y`).
    #[inline]
    pub const fn row(self) -> i32 {
        self.y
    }

    /// Column index (same as `x`).
    #[inline]
    pub const fn col(self) -> i32 {
        self.x
    }

    /// Manhattan (L1) distance.
    #[inline]
    pub fn manhattan_distance(self, other: Point) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Chebyshev (L∞) distance.
    #[inline]
    pub fn chebyshev_distance(self, other: Point) -> i32 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }

    /// Squared Euclidean distance. Exact, so prefer it for comparisons.
    #[inline]
    pub fn squared_distance(self, other: Point) -> i64 {
        let dx = i64::from(self.x - other.x);
        let dy = i64::from(self.y - other.y);
        dx * dx + dy * dy
    }

    /// Euclidean distance.
    #[inline]
    pub fn euclidean_distance(self, other: Point) -> f64 {
        (self.squared_distance(other) as f64).sqrt()
    }

    /// Whether the point lies in the **inclusive** rectangle `[min, max]`.
    ///
    /// `min` defaults to the origin.
    #[inline]
    pub fn in_bounds(self, max: Point, min: Option<Point>) -> bool {
        let min = min.unwrap_or(Self::ZERO);
        (min.x..=max.x).contains(&self.x) && (min.y..=max.y).contains(&self.y)
    }

    /// Neighbours of `self` along `directions` that lie within
    /// `[ZERO, max]`, in the order of `directions`.
    pub fn neighbors(self, max: Point, directions: &[Point]) -> Vec<Point> {
        directions
            .iter()
            .map(|&d| self + d)
            .filter(|n| n.in_bounds(max, None))
            .collect()
    }

    /// The four cardinal neighbours (up, right, down, left), unbounded.
    #[inline]
    pub fn neighbors_4(self) -> [Point; 4] {
        Self::CARDINAL.map(|d| self + d)
    }

    /// Rotate this vector a quarter turn clockwise (on screen).
    #[inline]
    pub const fn turn_clockwise(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Rotate this vector a quarter turn counter-clockwise (on screen).
    #[inline]
    pub const fn turn_counter_clockwise(self) -> Self {
        Self::new(self.y, -self.x)
    }
}

/// Cardinal direction → its clockwise neighbour.
pub const TURN_CLOCKWISE: [(Point, Point); 4] = [
    (Point::UP, Point::RIGHT),
    (Point::RIGHT, Point::DOWN),
    (Point::DOWN, Point::LEFT),
    (Point::LEFT, Point::UP),
];

/// Cardinal direction → its counter-clockwise neighbour.
pub const TURN_COUNTER_CLOCKWISE: [(Point, Point); 4] = [
    (Point::UP, Point::LEFT),
    (Point::LEFT, Point::DOWN),
    (Point::DOWN, Point::RIGHT),
    (Point::RIGHT, Point::UP),
];

/// Keep only the points inside the inclusive rectangle `[min, max]`.
pub fn filter_in_bounds(points: &[Point], max: Point, min: Option<Point>) -> Vec<Point> {
    points
        .iter()
        .copied()
        .filter(|p| p.in_bounds(max, min))
        .collect()
}

// --- trait impls for Point ---

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<i32> for Point {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: i32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Point {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

// ---------------------------------------------------------------------------
// Dimension
// ---------------------------------------------------------------------------

/// Width (columns) and height (rows) of a 2D grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimension {
    pub width: usize,
    pub height: usize,
}

impl Dimension {
    #[inline]
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Number of cells.
    #[inline]
    pub const fn area(self) -> usize {
        self.width * self.height
    }
}

// ---------------------------------------------------------------------------
// Range
// ---------------------------------------------------------------------------

/// A half-open rectangle \[min, max). `min` is inclusive, `max` is exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Point,
    pub max: Point,
}

impl Range {
    /// Create a new range from two corners and auto-canonicalize so that
    /// `min` ≤ `max` on each axis.
    #[inline]
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: Point::new(x0.min(x1), y0.min(y1)),
            max: Point::new(x0.max(x1), y0.max(y1)),
        }
    }

    /// Size as a `Point` (width = max.x - min.x, height = max.y - min.y).
    #[inline]
    pub fn size(self) -> Point {
        Point::new(self.width(), self.height())
    }

    #[inline]
    pub fn width(self) -> i32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(self) -> i32 {
        self.max.y - self.min.y
    }

    /// Total number of cells in the range.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.width() as usize) * (self.height() as usize)
    }

    /// Whether the range has zero or negative area.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    /// Whether `p` is inside the half-open range.
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        p.x >= self.min.x && p.x < self.max.x && p.y >= self.min.y && p.y < self.max.y
    }

    /// Row-major iterator over every point in the range.
    #[inline]
    pub fn iter(self) -> RangeIter {
        RangeIter {
            range: self,
            cur: self.min,
        }
    }
}

impl IntoIterator for Range {
    type Item = Point;
    type IntoIter = RangeIter;
    #[inline]
    fn into_iter(self) -> RangeIter {
        self.iter()
    }
}

// ---------------------------------------------------------------------------
// RangeIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the points in a [`Range`].
#[derive(Clone, Debug)]
pub struct RangeIter {
    range: Range,
    cur: Point,
}

impl Iterator for RangeIter {
    type Item = Point;

    #[inline]
    fn next(&mut self) -> Option<Point> {
        if self.cur.y >= self.range.max.y || self.range.is_empty() {
            return None;
        }
        let p = self.cur;
        self.cur.x += 1;
        if self.cur.x >= self.range.max.x {
            self.cur.x = self.range.min.x;
            self.cur.y += 1;
        }
        Some(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.range.is_empty() || self.cur.y >= self.range.max.y {
            return (0, Some(0));
        }
        let w = self.range.width() as usize;
        let remaining_in_row = (self.range.max.x - self.cur.x) as usize;
        let remaining_rows = (self.range.max.y - self.cur.y - 1) as usize;
        let total = remaining_in_row + remaining_rows * w;
        (total, Some(total))
    }
}

impl ExactSizeIterator for RangeIter {}
