//! Counting distinct paths between states.
//!
//! In both counters a goal state ends a path: it contributes one path and
//! its own neighbours are not explored. Counts are `u128` and saturate at
//! `u128::MAX` rather than wrapping.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

enum Frame<S> {
    Enter(S),
    Exit(S, Vec<S>),
}

enum Step<S> {
    Enter(S),
    Leave(S),
}

/// Count the paths from `start` to any goal state in a directed acyclic
/// graph.
///
/// The number of paths from a state to the goals does not depend on how the
/// state was reached, so it is memoized per state and each state is expanded
/// once.
///
/// The graph must be acyclic. On a graph with a cycle the result is
/// unspecified (the search still terminates: a state met again while it is
/// being expanded contributes nothing).
pub fn count_paths_dag<S, F, I, G>(start: S, mut neighbors: F, mut goal: G) -> u128
where
    S: Clone + Eq + Hash,
    F: FnMut(&S) -> I,
    I: IntoIterator<Item = S>,
    G: FnMut(&S) -> bool,
{
    let mut memo: HashMap<S, u128> = HashMap::new();
    let mut expanding: HashSet<S> = HashSet::new();
    let mut stack = vec![Frame::Enter(start.clone())];

    while let Some(frame) = stack.pop() {
        match frame {
            Frame::Enter(s) => {
                if memo.contains_key(&s) || expanding.contains(&s) {
                    continue;
                }
                if goal(&s) {
                    memo.insert(s, 1);
                    continue;
                }
                let children: Vec<S> = neighbors(&s).into_iter().collect();
                let pending: Vec<Frame<S>> = children
                    .iter()
                    .filter(|c| !memo.contains_key(*c))
                    .cloned()
                    .map(Frame::Enter)
                    .collect();
                expanding.insert(s.clone());
                // Exit sits below the children so it runs after all of them.
                stack.push(Frame::Exit(s, children));
                stack.extend(pending);
            }
            Frame::Exit(s, children) => {
                let total = children
                    .iter()
                    .map(|c| memo.get(c).copied().unwrap_or(0))
                    .fold(0u128, u128::saturating_add);
                expanding.remove(&s);
                memo.insert(s, total);
            }
        }
    }

    log::debug!("count_paths_dag: memoized {} states", memo.len());
    memo.get(&start).copied().unwrap_or(0)
}

/// Count the simple paths (no repeated state) from `start` to any goal state
/// in a graph that may contain cycles.
///
/// The set of states on the current path is kept per branch, so a state may
/// appear on many different paths. Nothing is memoized because the count
/// from a state depends on the path that led there; the running time is
/// exponential in the worst case. The walk uses an explicit stack, so path
/// length is bounded by memory, not by the call stack.
pub fn count_paths_cyclic<S, F, I, G>(start: S, mut neighbors: F, mut goal: G) -> u128
where
    S: Clone + Eq + Hash,
    F: FnMut(&S) -> I,
    I: IntoIterator<Item = S>,
    G: FnMut(&S) -> bool,
{
    let mut on_path: HashSet<S> = HashSet::new();
    let mut stack = vec![Step::Enter(start)];
    let mut total: u128 = 0;

    while let Some(step) = stack.pop() {
        match step {
            Step::Enter(s) => {
                if goal(&s) {
                    total = total.saturating_add(1);
                    continue;
                }
                // The path is unchanged by the time each child is popped.
                on_path.insert(s.clone());
                let next: Vec<Step<S>> = neighbors(&s)
                    .into_iter()
                    .filter(|n| !on_path.contains(n))
                    .map(Step::Enter)
                    .collect();
                stack.push(Step::Leave(s));
                stack.extend(next);
            }
            Step::Leave(s) => {
                on_path.remove(&s);
            }
        }
    }

    log::debug!("count_paths_cyclic: {total} paths");
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridsolve_core::{Grid, Point};

    fn dag(n: &u32) -> Vec<u32> {
        match n {
            0 => vec![1, 2],
            1 => vec![3],
            2 => vec![3],
            3 => vec![4],
            _ => vec![],
        }
    }

    #[test]
    fn dag_two_routes() {
        assert_eq!(count_paths_dag(0u32, dag, |&n| n == 4), 2);
        assert_eq!(count_paths_cyclic(0u32, dag, |&n| n == 4), 2);
    }

    #[test]
    fn unreachable_goal_counts_zero() {
        assert_eq!(count_paths_dag(0u32, dag, |&n| n == 9), 0);
        assert_eq!(count_paths_cyclic(0u32, dag, |&n| n == 9), 0);
    }

    #[test]
    fn start_is_goal() {
        assert_eq!(count_paths_dag(4u32, dag, |&n| n == 4), 1);
        assert_eq!(count_paths_cyclic(4u32, dag, |&n| n == 4), 1);
    }

    #[test]
    fn grid_lattice_paths() {
        // Right/down moves across a 5x5 lattice: C(8, 4) = 70 paths.
        let n = 4;
        let moves = |&p: &Point| {
            [Point::RIGHT, Point::DOWN]
                .into_iter()
                .map(move |d| p + d)
                .filter(move |q| q.x <= n && q.y <= n)
        };
        let corner = Point::new(n, n);
        assert_eq!(count_paths_dag(Point::ZERO, moves, |&p| p == corner), 70);
    }

    #[test]
    fn lattice_count_beyond_u64() {
        // C(68, 34) paths across a 35x35 lattice.
        let n = 34;
        let moves = |&p: &Point| {
            [Point::RIGHT, Point::DOWN]
                .into_iter()
                .map(move |d| p + d)
                .filter(move |q| q.x <= n && q.y <= n)
        };
        let corner = Point::new(n, n);
        let count = count_paths_dag(Point::ZERO, moves, |&p| p == corner);
        assert_eq!(count, 28_453_041_475_240_576_740);
        assert!(count > u128::from(u64::MAX));
    }

    #[test]
    fn long_chain_does_not_recurse() {
        // 100k states in a line.
        let next = |&i: &u32| (i < 100_000).then_some(i + 1);
        assert_eq!(count_paths_cyclic(0u32, next, |&i| i == 100_000), 1);
        assert_eq!(count_paths_dag(0u32, next, |&i| i == 100_000), 1);
    }

    #[test]
    fn trailheads_on_height_map() {
        // Climb by exactly one each step; count routes to any 9.
        let grid = Grid::from_rows(vec![
            vec![0, 1, 2, 3],
            vec![1, 2, 3, 4],
            vec![8, 7, 6, 5],
            vec![9, 8, 7, 6],
        ])
        .unwrap();
        let up = |p: &Point| {
            let h = grid[*p];
            p.neighbors_4()
                .into_iter()
                .filter(|q| grid.get(*q) == Some(&(h + 1)))
                .collect::<Vec<_>>()
        };
        let peak = |p: &Point| grid[*p] == 9;
        assert_eq!(count_paths_dag(Point::ZERO, up, peak), 16);
    }

    #[test]
    fn cycle_only_counts_simple_paths() {
        let graph = |n: &u32| match n {
            0 => vec![1],
            1 => vec![2],
            2 => vec![3, 0],
            _ => vec![],
        };
        assert_eq!(count_paths_cyclic(0u32, graph, |&n| n == 3), 1);
    }

    #[test]
    fn revisiting_on_other_branches_is_allowed() {
        // Complete graph on 4 nodes: simple paths 0 -> 3 are
        // 0-3, 0-1-3, 0-2-3, 0-1-2-3, 0-2-1-3.
        let k4 = |&n: &u32| (0..4).filter(|&m| m != n).collect::<Vec<_>>();
        assert_eq!(count_paths_cyclic(0u32, k4, |&n| n == 3), 5);
    }

    #[test]
    fn dag_counter_terminates_on_cycle() {
        let ring = |&n: &u32| vec![(n + 1) % 3];
        let _ = count_paths_dag(0u32, ring, |&n| n == 7);
    }
}
