use std::collections::HashSet;
use std::hash::Hash;

use gridsolve_core::{Grid, Point};

/// Neighbour enumeration over a [`Grid`] restricted to walkable cells.
///
/// A cell is walkable when its value is a member of the walkable set. From
/// any point, [`neighbors`](Self::neighbors) yields the cardinal neighbours
/// (up, right, down, left) that are inside the grid and walkable.
#[derive(Debug)]
pub struct Walkable<'a, T> {
    grid: &'a Grid<T>,
    walkable: &'a HashSet<T>,
}

impl<T> Clone for Walkable<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Walkable<'_, T> {}

impl<'a, T: Eq + Hash> Walkable<'a, T> {
    pub fn new(grid: &'a Grid<T>, walkable: &'a HashSet<T>) -> Self {
        Self { grid, walkable }
    }

    /// Whether `p` is inside the grid and holds a walkable value.
    #[inline]
    pub fn is_walkable(&self, p: Point) -> bool {
        self.grid.get(p).is_some_and(|v| self.walkable.contains(v))
    }

    /// Walkable cardinal neighbours of `p`, in up, right, down, left order.
    pub fn neighbors(&self, p: Point) -> impl Iterator<Item = Point> + use<'a, T> {
        let this = *self;
        Point::CARDINAL
            .into_iter()
            .map(move |d| p + d)
            .filter(move |&n| this.is_walkable(n))
    }
}
