//! [`Grid3`] — a box-shaped 3D grid indexed by [`Point3`].

use std::collections::HashMap;
use std::hash::Hash;
use std::ops::{Index, IndexMut};

use crate::geom3::{Dimension3, Point3};
use crate::grid::GridError;

/// A 3D grid stored x-major: `data[x][y][z]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGrid3<T>"))]
pub struct Grid3<T> {
    cells: Vec<T>,
    size: Dimension3,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGrid3<T> {
    cells: Vec<T>,
    size: Dimension3,
}

#[cfg(feature = "serde")]
impl<T> TryFrom<RawGrid3<T>> for Grid3<T> {
    type Error = GridError;

    fn try_from(raw: RawGrid3<T>) -> Result<Self, GridError> {
        let expected = raw
            .size
            .width
            .saturating_mul(raw.size.height)
            .saturating_mul(raw.size.depth);
        if raw.cells.len() != expected {
            return Err(GridError::CellCount {
                expected,
                found: raw.cells.len(),
            });
        }
        Ok(Self {
            cells: raw.cells,
            size: raw.size,
        })
    }
}

impl<T> Grid3<T> {
    /// Build a grid from `layers[x][y][z]`. All planes must have the same
    /// number of rows and all rows the same length.
    ///
    /// A ragged plane or row is reported with the flat index of the
    /// offending plane (for plane height) or row (`x * height + y`).
    pub fn from_layers(layers: Vec<Vec<Vec<T>>>) -> Result<Self, GridError> {
        let width = layers.len();
        let height = layers.first().map_or(0, Vec::len);
        let depth = layers
            .first()
            .and_then(|plane| plane.first())
            .map_or(0, Vec::len);
        let mut cells = Vec::with_capacity(width * height * depth);
        for (x, plane) in layers.into_iter().enumerate() {
            if plane.len() != height {
                return Err(GridError::Ragged {
                    row: x,
                    expected: height,
                    found: plane.len(),
                });
            }
            for (y, row) in plane.into_iter().enumerate() {
                if row.len() != depth {
                    return Err(GridError::Ragged {
                        row: x * height + y,
                        expected: depth,
                        found: row.len(),
                    });
                }
                cells.extend(row);
            }
        }
        Ok(Self {
            cells,
            size: Dimension3::new(width, height, depth),
        })
    }

    /// Create a grid of the given size with every cell set to `value`.
    pub fn filled(size: Dimension3, value: T) -> Self
    where
        T: Clone,
    {
        Self {
            cells: vec![value; size.volume()],
            size,
        }
    }

    #[inline]
    pub fn size(&self) -> Dimension3 {
        self.size
    }

    /// Largest valid point.
    #[inline]
    pub fn max_bounds(&self) -> Point3 {
        Point3::new(
            self.size.width as i32 - 1,
            self.size.height as i32 - 1,
            self.size.depth as i32 - 1,
        )
    }

    #[inline]
    pub fn contains(&self, p: Point3) -> bool {
        p.in_bounds(self.max_bounds(), None)
    }

    #[inline]
    fn index_of(&self, p: Point3) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        let Dimension3 { height, depth, .. } = self.size;
        Some((p.x as usize * height + p.y as usize) * depth + p.z as usize)
    }

    #[inline]
    fn point_of(&self, i: usize) -> Point3 {
        let Dimension3 { height, depth, .. } = self.size;
        Point3::new(
            (i / (height * depth)) as i32,
            ((i / depth) % height) as i32,
            (i % depth) as i32,
        )
    }

    #[inline]
    fn expect_index(&self, p: Point3) -> usize {
        match self.index_of(p) {
            Some(i) => i,
            None => panic!(
                "point {p} out of bounds for {}x{}x{} grid",
                self.size.width, self.size.height, self.size.depth
            ),
        }
    }

    #[inline]
    pub fn get(&self, p: Point3) -> Option<&T> {
        self.index_of(p).map(|i| &self.cells[i])
    }

    /// Replace the value at `p`, returning the previous one.
    ///
    /// # Panics
    ///
    /// Panics if `p` is outside the grid.
    pub fn set(&mut self, p: Point3, value: T) -> T {
        let i = self.expect_index(p);
        std::mem::replace(&mut self.cells[i], value)
    }

    /// Iterate `(Point3, &T)` in x, then y, then z order.
    pub fn iter(&self) -> impl Iterator<Item = (Point3, &T)> {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, v)| (self.point_of(i), v))
    }

    pub fn find_first(&self, value: &T) -> Option<Point3>
    where
        T: PartialEq,
    {
        self.iter().find(|(_, v)| *v == value).map(|(p, _)| p)
    }

    pub fn find_all(&self, value: &T) -> Vec<Point3>
    where
        T: PartialEq,
    {
        self.iter()
            .filter(|(_, v)| *v == value)
            .map(|(p, _)| p)
            .collect()
    }

    /// Group points by cell value, skipping cells equal to `exclude`.
    pub fn group_by_value(&self, exclude: Option<&T>) -> HashMap<T, Vec<Point3>>
    where
        T: Eq + Hash + Clone,
    {
        let mut groups: HashMap<T, Vec<Point3>> = HashMap::new();
        for (p, v) in self.iter() {
            if exclude != Some(v) {
                groups.entry(v.clone()).or_default().push(p);
            }
        }
        groups
    }
}

impl<T> Index<Point3> for Grid3<T> {
    type Output = T;

    fn index(&self, p: Point3) -> &T {
        &self.cells[self.expect_index(p)]
    }
}

impl<T> IndexMut<Point3> for Grid3<T> {
    fn index_mut(&mut self, p: Point3) -> &mut T {
        let i = self.expect_index(p);
        &mut self.cells[i]
    }
}
