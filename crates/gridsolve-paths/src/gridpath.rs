//! Path finding through grid mazes.
//!
//! These adapters build a [`Walkable`] neighbour function and delegate to the
//! generic searches. Both path adapters report "no path" as `None`.
//! The start cell itself need not be walkable; every move must enter a
//! walkable cell.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use gridsolve_core::{Grid, Point};

use crate::bfs::{bfs, bfs_path};
use crate::dfs::dfs_path;
use crate::neighbors::Walkable;

/// Shortest path from `start` to `end` through walkable cells.
pub fn bfs_grid_path<T: Eq + Hash>(
    grid: &Grid<T>,
    start: Point,
    end: Point,
    walkable: &HashSet<T>,
) -> Option<Vec<Point>> {
    let walk = Walkable::new(grid, walkable);
    let path = bfs_path(start, |&p| walk.neighbors(p), |&p| p == end);
    (!path.is_empty()).then_some(path)
}

/// Some path (not necessarily shortest) from `start` to `end` through
/// walkable cells.
pub fn dfs_grid_path<T: Eq + Hash>(
    grid: &Grid<T>,
    start: Point,
    end: Point,
    walkable: &HashSet<T>,
) -> Option<Vec<Point>> {
    let walk = Walkable::new(grid, walkable);
    dfs_path(start, |&p| walk.neighbors(p), |&p| p == end)
}

/// Distance from `start` to every cell reachable through walkable cells.
pub fn bfs_grid_distances<T: Eq + Hash>(
    grid: &Grid<T>,
    start: Point,
    walkable: &HashSet<T>,
) -> HashMap<Point, usize> {
    let walk = Walkable::new(grid, walkable);
    bfs(start, |&p| walk.neighbors(p))
}
