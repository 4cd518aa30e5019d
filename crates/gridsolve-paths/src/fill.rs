//! Flood fill over grid regions.

use std::collections::HashSet;
use std::hash::Hash;

use gridsolve_core::{Grid, Point};

use crate::neighbors::Walkable;

/// Collect the region reachable from `start` by cardinal moves through
/// walkable cells.
///
/// `start` is part of the region when it is walkable; if it is outside the
/// grid or not walkable the region is empty. The grid is not modified.
pub fn flood_fill<T: Eq + Hash>(
    grid: &Grid<T>,
    start: Point,
    walkable: &HashSet<T>,
) -> HashSet<Point> {
    let walk = Walkable::new(grid, walkable);
    let mut region = HashSet::new();
    if !walk.is_walkable(start) {
        return region;
    }

    // Iterative DFS from `start`.
    let mut stack = vec![start];
    region.insert(start);
    while let Some(p) = stack.pop() {
        for n in walk.neighbors(p) {
            if region.insert(n) {
                stack.push(n);
            }
        }
    }

    log::debug!("flood_fill: region of {} cells from {start}", region.len());
    region
}

/// Flood fill from `start`, overwriting every reached cell with `mark`.
///
/// Reachability is the same as [`flood_fill`], except that a cell already
/// holding `mark` is never entered. Cells are marked as they are
/// discovered, so the fill terminates even if `mark` is itself walkable,
/// and repeating the call with the same `mark` changes nothing.
///
/// Returns the number of cells marked.
pub fn flood_fill_mark<T: Eq + Hash + Clone>(
    grid: &mut Grid<T>,
    start: Point,
    mark: T,
    walkable: &HashSet<T>,
) -> usize {
    let enterable = |grid: &Grid<T>, p: Point| {
        grid.get(p)
            .is_some_and(|v| *v != mark && walkable.contains(v))
    };

    if !enterable(grid, start) {
        return 0;
    }

    let mut stack = vec![start];
    grid[start] = mark.clone();
    let mut marked = 1;

    while let Some(p) = stack.pop() {
        for n in p.neighbors_4() {
            if enterable(grid, n) {
                log::trace!("flood_fill_mark: marking {n}");
                grid[n] = mark.clone();
                marked += 1;
                stack.push(n);
            }
        }
    }

    log::debug!("flood_fill_mark: marked {marked} cells from {start}");
    marked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gridpath::bfs_grid_distances;
    use gridsolve_core::Dimension;
    use proptest::prelude::*;

    fn open() -> HashSet<char> {
        HashSet::from(['.'])
    }

    #[test]
    fn region_stops_at_walls() {
        let grid: Grid<char> = "..#.\n.##.\n...#\n".parse().unwrap();
        let region = flood_fill(&grid, Point::from_rc(0, 0), &open());
        assert!(region.contains(&Point::from_rc(0, 0)));
        assert!(region.contains(&Point::from_rc(0, 1)));
        assert!(region.contains(&Point::from_rc(1, 0)));
        assert!(region.contains(&Point::from_rc(2, 2)));
        assert!(!region.contains(&Point::from_rc(0, 3)));
        assert_eq!(region.len(), 6);
    }

    #[test]
    fn non_walkable_start_is_empty() {
        let grid: Grid<char> = ".#\n".parse().unwrap();
        assert!(flood_fill(&grid, Point::new(1, 0), &open()).is_empty());
        assert!(flood_fill(&grid, Point::new(5, 5), &open()).is_empty());
    }

    #[test]
    fn mark_overwrites_region_in_place() {
        let mut grid: Grid<char> = "..#\n.#.\n...\n".parse().unwrap();
        let n = flood_fill_mark(&mut grid, Point::from_rc(0, 0), 'X', &open());
        assert_eq!(n, 7);
        assert_eq!(grid[Point::from_rc(0, 0)], 'X');
        assert_eq!(grid[Point::from_rc(0, 1)], 'X');
        assert_eq!(grid[Point::from_rc(1, 0)], 'X');
        assert_eq!(grid[Point::from_rc(0, 2)], '#');
        assert_eq!(grid[Point::from_rc(2, 2)], 'X');
        assert_eq!(grid[Point::from_rc(1, 2)], 'X');
    }

    #[test]
    fn mark_twice_is_idempotent() {
        let mut grid: Grid<char> = "..#\n.#.\n...\n".parse().unwrap();
        flood_fill_mark(&mut grid, Point::ZERO, 'X', &open());
        let once = grid.clone();
        assert_eq!(flood_fill_mark(&mut grid, Point::ZERO, 'X', &open()), 0);
        assert_eq!(grid, once);
    }

    #[test]
    fn walkable_mark_still_terminates() {
        let mut grid = Grid::filled(Dimension::new(4, 4), '.');
        let walkable = HashSet::from(['.', 'o']);
        assert_eq!(flood_fill_mark(&mut grid, Point::ZERO, 'o', &walkable), 16);
        assert_eq!(flood_fill_mark(&mut grid, Point::ZERO, 'o', &walkable), 0);
        assert!(grid.iter().all(|(_, v)| *v == 'o'));
    }

    fn arb_maze() -> impl Strategy<Value = Grid<char>> {
        (1usize..8, 1usize..8).prop_flat_map(|(w, h)| {
            proptest::collection::vec(prop_oneof![Just('.'), Just('#')], w * h).prop_map(
                move |cells| {
                    Grid::from_rows(cells.chunks(w).map(<[char]>::to_vec).collect()).unwrap()
                },
            )
        })
    }

    proptest! {
        #[test]
        fn fill_equals_bfs_reachable_set(grid in arb_maze()) {
            let start = Point::ZERO;
            let region = flood_fill(&grid, start, &open());
            if grid[start] == '.' {
                let reach: HashSet<Point> =
                    bfs_grid_distances(&grid, start, &open()).into_keys().collect();
                prop_assert_eq!(&region, &reach);
            } else {
                prop_assert!(region.is_empty());
            }

            let mut marked = grid.clone();
            let n = flood_fill_mark(&mut marked, start, 'X', &open());
            prop_assert_eq!(n, region.len());
            prop_assert_eq!(marked.find_all(&'X').len(), region.len());
        }
    }
}
