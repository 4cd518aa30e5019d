use std::collections::HashMap;
use std::hash::Hash;

use crate::bfs::unwind;

/// Depth-first search for any path from `start` to a state satisfying `goal`.
///
/// The frontier is a stack of `(state, parent)` entries. A state is settled
/// the first time it is popped, which is also when its parent back-pointer is
/// recorded; later entries for it are skipped. Neighbours pushed in
/// enumeration order are therefore explored last-first.
///
/// The path is not necessarily the shortest. Returns `None` when no
/// reachable state satisfies `goal`.
pub fn dfs_path<S, F, I, G>(start: S, mut neighbors: F, mut goal: G) -> Option<Vec<S>>
where
    S: Clone + Eq + Hash,
    F: FnMut(&S) -> I,
    I: IntoIterator<Item = S>,
    G: FnMut(&S) -> bool,
{
    let mut parents: HashMap<S, Option<S>> = HashMap::new();
    let mut stack: Vec<(S, Option<S>)> = vec![(start, None)];

    while let Some((current, parent)) = stack.pop() {
        if parents.contains_key(&current) {
            continue;
        }
        parents.insert(current.clone(), parent);

        if goal(&current) {
            let path = unwind(&parents, current);
            log::debug!(
                "dfs_path: found path of {} states after visiting {}",
                path.len(),
                parents.len()
            );
            return Some(path);
        }

        for next in neighbors(&current) {
            if !parents.contains_key(&next) {
                stack.push((next, Some(current.clone())));
            }
        }
    }

    log::debug!("dfs_path: no goal among {} states", parents.len());
    None
}
