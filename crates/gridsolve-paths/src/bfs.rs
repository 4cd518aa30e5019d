use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

/// Compute a breadth-first distance map from `start`.
///
/// Every step has cost 1. The returned map holds each reachable state with
/// its exact distance (`start` maps to 0); unreachable states are absent.
pub fn bfs<S, F, I>(start: S, mut neighbors: F) -> HashMap<S, usize>
where
    S: Clone + Eq + Hash,
    F: FnMut(&S) -> I,
    I: IntoIterator<Item = S>,
{
    let mut dist: HashMap<S, usize> = HashMap::new();
    let mut queue: VecDeque<S> = VecDeque::new();

    dist.insert(start.clone(), 0);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        let nd = dist[&current] + 1;
        for next in neighbors(&current) {
            if dist.contains_key(&next) {
                continue;
            }
            dist.insert(next.clone(), nd);
            queue.push_back(next);
        }
    }

    log::debug!("bfs: reached {} states", dist.len());
    dist
}

/// Find one shortest path from `start` to the first state satisfying `goal`.
///
/// States are tested against `goal` as they leave the queue, so ties are
/// broken by discovery order, i.e. the order in which `neighbors` yields
/// them. The path runs from `start` to the goal state inclusive. Returns an
/// empty `Vec` when no reachable state satisfies `goal`.
pub fn bfs_path<S, F, I, G>(start: S, mut neighbors: F, mut goal: G) -> Vec<S>
where
    S: Clone + Eq + Hash,
    F: FnMut(&S) -> I,
    I: IntoIterator<Item = S>,
    G: FnMut(&S) -> bool,
{
    let mut parents: HashMap<S, Option<S>> = HashMap::new();
    let mut queue: VecDeque<S> = VecDeque::new();

    parents.insert(start.clone(), None);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        if goal(&current) {
            let path = unwind(&parents, current);
            log::debug!(
                "bfs_path: found path of {} states after discovering {}",
                path.len(),
                parents.len()
            );
            return path;
        }
        for next in neighbors(&current) {
            if parents.contains_key(&next) {
                continue;
            }
            parents.insert(next.clone(), Some(current.clone()));
            queue.push_back(next);
        }
    }

    log::debug!("bfs_path: no goal among {} states", parents.len());
    Vec::new()
}

/// Follow parent back-pointers from `end` to the root and return the path
/// root-first.
pub(crate) fn unwind<S>(parents: &HashMap<S, Option<S>>, end: S) -> Vec<S>
where
    S: Clone + Eq + Hash,
{
    let mut path = vec![end];
    while let Some(Some(parent)) = path.last().and_then(|s| parents.get(s)) {
        path.push(parent.clone());
    }
    path.reverse();
    path
}
