//! The [`Grid`] type — a rectangular 2D grid of values indexed by [`Point`].
//!
//! Unlike a nested `Vec<Vec<T>>`, a `Grid` is always rectangular: the
//! constructors reject ragged rows, and indexing with a point outside the
//! grid panics instead of silently returning a default.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use crate::geom::{Dimension, Point, Range};

// ---------------------------------------------------------------------------
// GridError
// ---------------------------------------------------------------------------

/// Errors that can occur when building a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A row (or plane) has a different length than the first one.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Stored cells do not match the declared dimensions.
    CellCount { expected: usize, found: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid: row {row} has length {found}, expected {expected}"
            ),
            Self::CellCount { expected, found } => {
                write!(f, "grid: {found} cells stored, dimensions need {expected}")
            }
        }
    }
}

impl std::error::Error for GridError {}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A rectangular grid of `T` stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGrid<T>"))]
pub struct Grid<T> {
    cells: Vec<T>,
    width: usize,
    height: usize,
}

/// Unchecked wire form of a [`Grid`]; validated on the way in.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGrid<T> {
    cells: Vec<T>,
    width: usize,
    height: usize,
}

#[cfg(feature = "serde")]
impl<T> TryFrom<RawGrid<T>> for Grid<T> {
    type Error = GridError;

    fn try_from(raw: RawGrid<T>) -> Result<Self, GridError> {
        let expected = raw.width.saturating_mul(raw.height);
        if raw.cells.len() != expected {
            return Err(GridError::CellCount {
                expected,
                found: raw.cells.len(),
            });
        }
        Ok(Self {
            cells: raw.cells,
            width: raw.width,
            height: raw.height,
        })
    }
}

impl<T> Grid<T> {
    /// Build a grid from rows. Every row must have the same length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let mut cells = Vec::with_capacity(width * height);
        for (row, data) in rows.into_iter().enumerate() {
            if data.len() != width {
                return Err(GridError::Ragged {
                    row,
                    expected: width,
                    found: data.len(),
                });
            }
            cells.extend(data);
        }
        Ok(Self {
            cells,
            width,
            height,
        })
    }

    /// Create a grid of the given size with every cell set to `value`.
    pub fn filled(size: Dimension, value: T) -> Self
    where
        T: Clone,
    {
        Self {
            cells: vec![value; size.area()],
            width: size.width,
            height: size.height,
        }
    }

    /// Width and height.
    #[inline]
    pub fn size(&self) -> Dimension {
        Dimension::new(self.width, self.height)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Largest valid point, i.e. `(width - 1, height - 1)`.
    #[inline]
    pub fn max_bounds(&self) -> Point {
        Point::new(self.width as i32 - 1, self.height as i32 - 1)
    }

    /// The half-open range covered by the grid.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width as i32, self.height as i32)
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.width && (p.y as usize) < self.height
    }

    #[inline]
    fn index_of(&self, p: Point) -> Option<usize> {
        if self.contains(p) {
            Some(p.y as usize * self.width + p.x as usize)
        } else {
            None
        }
    }

    #[inline]
    fn expect_index(&self, p: Point) -> usize {
        match self.index_of(p) {
            Some(i) => i,
            None => panic!(
                "point {p} out of bounds for {}x{} grid",
                self.width, self.height
            ),
        }
    }

    /// The value at `p`, or `None` if `p` is outside the grid.
    #[inline]
    pub fn get(&self, p: Point) -> Option<&T> {
        self.index_of(p).map(|i| &self.cells[i])
    }

    #[inline]
    pub fn get_mut(&mut self, p: Point) -> Option<&mut T> {
        self.index_of(p).map(|i| &mut self.cells[i])
    }

    /// Replace the value at `p`, returning the previous one.
    ///
    /// # Panics
    ///
    /// Panics if `p` is outside the grid.
    pub fn set(&mut self, p: Point, value: T) -> T {
        let i = self.expect_index(p);
        std::mem::replace(&mut self.cells[i], value)
    }

    /// Row-major iterator over `(Point, &T)` pairs.
    pub fn iter(&self) -> GridIter<'_, T> {
        GridIter {
            grid: self,
            inner: self.bounds().iter(),
        }
    }

    /// Row-major iterator over every point of the grid.
    pub fn points(&self) -> crate::geom::RangeIter {
        self.bounds().iter()
    }

    /// The rows of the grid as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // chunks panics on 0; an empty-width grid has no cells anyway
        self.cells.chunks(self.width.max(1)).take(self.height)
    }

    /// A grid of the same shape with `f` applied to every cell.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            cells: self.cells.iter().map(f).collect(),
            width: self.width,
            height: self.height,
        }
    }

    /// First point (row-major) holding `value`.
    pub fn find_first(&self, value: &T) -> Option<Point>
    where
        T: PartialEq,
    {
        self.iter().find(|(_, v)| *v == value).map(|(p, _)| p)
    }

    /// Every point holding `value`, row-major.
    pub fn find_all(&self, value: &T) -> Vec<Point>
    where
        T: PartialEq,
    {
        self.iter()
            .filter(|(_, v)| *v == value)
            .map(|(p, _)| p)
            .collect()
    }

    /// Group points by cell value, skipping cells equal to `exclude`.
    ///
    /// Each list is in row-major order.
    pub fn group_by_value(&self, exclude: Option<&T>) -> HashMap<T, Vec<Point>>
    where
        T: Eq + Hash + Clone,
    {
        let mut groups: HashMap<T, Vec<Point>> = HashMap::new();
        for (p, v) in self.iter() {
            if exclude == Some(v) {
                continue;
            }
            groups.entry(v.clone()).or_default().push(p);
        }
        groups
    }
}

impl Grid<char> {
    /// Whether `target` can be read starting at `start` and stepping by
    /// `direction`, staying inside the grid.
    pub fn search_in_direction(&self, start: Point, direction: Point, target: &str) -> bool {
        let mut p = start;
        for ch in target.chars() {
            if self.get(p) != Some(&ch) {
                return false;
            }
            p = p + direction;
        }
        true
    }
}

impl<T> Index<Point> for Grid<T> {
    type Output = T;

    fn index(&self, p: Point) -> &T {
        &self.cells[self.expect_index(p)]
    }
}

impl<T> IndexMut<Point> for Grid<T> {
    fn index_mut(&mut self, p: Point) -> &mut T {
        let i = self.expect_index(p);
        &mut self.cells[i]
    }
}

/// Parses one row per non-empty line.
impl FromStr for Grid<char> {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<Vec<char>> = s
            .lines()
            .map(str::trim_end)
            .filter(|l| !l.is_empty())
            .map(|l| l.chars().collect())
            .collect();
        Self::from_rows(rows)
    }
}

impl fmt::Display for Grid<char> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for ch in row {
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// GridIter
// ---------------------------------------------------------------------------

/// Iterator over `(Point, &T)` pairs in a [`Grid`].
pub struct GridIter<'a, T> {
    grid: &'a Grid<T>,
    inner: crate::geom::RangeIter,
}

impl<'a, T> Iterator for GridIter<'a, T> {
    type Item = (Point, &'a T);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let p = self.inner.next()?;
        let grid = self.grid;
        Some((p, &grid[p]))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
