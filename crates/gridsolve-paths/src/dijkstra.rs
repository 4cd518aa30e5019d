use std::collections::{BinaryHeap, HashMap, HashSet};
use std::hash::Hash;
use std::ops::Add;

use crate::bfs::unwind;

// ---------------------------------------------------------------------------
// Frontier entry
// ---------------------------------------------------------------------------

/// Frontier entry ordered by `(cost, seq)` for use in `BinaryHeap`.
///
/// The state itself never takes part in the ordering, so states need not be
/// `Ord`. `seq` is the insertion counter: among equal costs the entry pushed
/// first is popped first.
struct Entry<S, C> {
    cost: C,
    seq: u64,
    state: S,
}

impl<S, C: Ord> Ord for Entry<S, C> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest cost first.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<S, C: Ord> PartialOrd for Entry<S, C> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<S, C: Ord> PartialEq for Entry<S, C> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl<S, C: Ord> Eq for Entry<S, C> {}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

struct Search<S, C> {
    dist: HashMap<S, C>,
    parents: HashMap<S, Option<S>>,
    /// The state that stopped the search early, if any.
    reached: Option<S>,
}

fn search<S, C, F, I, G>(start: S, mut neighbors: F, mut stop: G) -> Search<S, C>
where
    S: Clone + Eq + Hash,
    C: Copy + Ord + Add<Output = C> + Default,
    F: FnMut(&S) -> I,
    I: IntoIterator<Item = (S, C)>,
    G: FnMut(&S) -> bool,
{
    let mut dist: HashMap<S, C> = HashMap::new();
    let mut parents: HashMap<S, Option<S>> = HashMap::new();
    let mut closed: HashSet<S> = HashSet::new();
    let mut open: BinaryHeap<Entry<S, C>> = BinaryHeap::new();
    let mut seq = 0u64;

    dist.insert(start.clone(), C::default());
    parents.insert(start.clone(), None);
    open.push(Entry {
        cost: C::default(),
        seq,
        state: start,
    });

    while let Some(Entry { cost, state, .. }) = open.pop() {
        // Stale entry: a cheaper one for this state was already expanded.
        if !closed.insert(state.clone()) {
            continue;
        }

        if stop(&state) {
            log::debug!("dijkstra: goal settled after {} states", closed.len());
            return Search {
                dist,
                parents,
                reached: Some(state),
            };
        }

        for (next, step) in neighbors(&state) {
            let tentative = cost + step;
            if dist.get(&next).is_some_and(|&d| tentative >= d) {
                continue;
            }
            dist.insert(next.clone(), tentative);
            parents.insert(next.clone(), Some(state.clone()));
            seq += 1;
            open.push(Entry {
                cost: tentative,
                seq,
                state: next,
            });
        }
    }

    log::debug!("dijkstra: settled {} states", closed.len());
    Search {
        dist,
        parents,
        reached: None,
    }
}

/// Compute single-source shortest-path costs with Dijkstra's algorithm.
///
/// `neighbors` yields `(state, step cost)` pairs; `C::default()` is the zero
/// cost. All step costs must be non-negative: this is not checked, and
/// negative costs give meaningless results.
///
/// If `goal` is given, the search stops as soon as that state is settled
/// and the map computed so far is returned. Entries for states not yet
/// settled at that point are upper bounds, not final costs.
pub fn dijkstra<S, C, F, I>(start: S, neighbors: F, goal: Option<&S>) -> HashMap<S, C>
where
    S: Clone + Eq + Hash,
    C: Copy + Ord + Add<Output = C> + Default,
    F: FnMut(&S) -> I,
    I: IntoIterator<Item = (S, C)>,
{
    search(start, neighbors, |s| goal == Some(s)).dist
}

/// Cheapest path from `start` to the first settled state satisfying `goal`.
///
/// Returns the total cost and the path (start and goal inclusive), or `None`
/// if no reachable state satisfies `goal`.
pub fn dijkstra_path<S, C, F, I, G>(start: S, neighbors: F, goal: G) -> Option<(C, Vec<S>)>
where
    S: Clone + Eq + Hash,
    C: Copy + Ord + Add<Output = C> + Default,
    F: FnMut(&S) -> I,
    I: IntoIterator<Item = (S, C)>,
    G: FnMut(&S) -> bool,
{
    let Search {
        dist,
        parents,
        reached,
    } = search(start, neighbors, goal);
    let end = reached?;
    let cost = dist[&end];
    Some((cost, unwind(&parents, end)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bfs::bfs;
    use proptest::prelude::*;

    fn weighted(n: &u32) -> Vec<(u32, u32)> {
        match n {
            0 => vec![(1, 1), (2, 4)],
            1 => vec![(2, 2), (3, 5)],
            2 => vec![(3, 1)],
            _ => vec![],
        }
    }

    #[test]
    fn weighted_distances() {
        let dist = dijkstra(0u32, weighted, None);
        let expected: HashMap<u32, u32> = [(0, 0), (1, 1), (2, 3), (3, 4)].into();
        assert_eq!(dist, expected);
    }

    #[test]
    fn goal_stops_early_with_final_goal_cost() {
        let dist = dijkstra(0u32, weighted, Some(&3));
        assert_eq!(dist[&3], 4);
    }

    #[test]
    fn goal_returns_before_expanding_further() {
        // 1 is settled before 2 is ever expanded, so 3 is never discovered
        // and 2 keeps its first (upper bound) cost.
        let dist = dijkstra(0u32, weighted, Some(&1));
        assert_eq!(dist[&1], 1);
        assert_eq!(dist[&2], 4);
        assert!(!dist.contains_key(&3));

        let line = |&n: &u32| if n < 5 { vec![(n + 1, 1u32)] } else { vec![] };
        let dist = dijkstra(0u32, line, Some(&2));
        assert_eq!(dist.len(), 3);
    }

    #[test]
    fn zero_weight_edges() {
        let dist = dijkstra(
            'a',
            |&c: &char| match c {
                'a' => vec![('b', 0u64), ('c', 3)],
                'b' => vec![('c', 0)],
                _ => vec![],
            },
            None,
        );
        assert_eq!(dist[&'c'], 0);
    }

    #[test]
    fn path_reconstruction() {
        let (cost, path) = dijkstra_path(0u32, weighted, |&n| n == 3).unwrap();
        assert_eq!(cost, 4);
        assert_eq!(path, vec![0, 1, 2, 3]);
        assert_eq!(dijkstra_path(0u32, weighted, |&n| n == 9), None);
    }

    #[test]
    fn equal_costs_pop_in_insertion_order() {
        // Both 1 and 2 cost 1; 1 was pushed first, so it is settled first and
        // becomes the parent of 3.
        let (_, path) = dijkstra_path(
            0u32,
            |&n: &u32| match n {
                0 => vec![(1, 1u32), (2, 1)],
                1 | 2 => vec![(3, 1)],
                _ => vec![],
            },
            |&n| n == 3,
        )
        .unwrap();
        assert_eq!(path, vec![0, 1, 3]);
    }

    proptest! {
        #[test]
        fn unit_weights_match_bfs(
            edges in proptest::collection::vec((0usize..10, 0usize..10), 0..25)
        ) {
            let mut adj = vec![Vec::new(); 10];
            for (a, b) in edges {
                adj[a].push(b);
                adj[b].push(a);
            }
            let d = dijkstra(
                0usize,
                |&u| adj[u].iter().map(|&v| (v, 1usize)).collect::<Vec<_>>(),
                None,
            );
            let b = bfs(0usize, |&u| adj[u].clone());
            prop_assert_eq!(d, b);
        }
    }
}
