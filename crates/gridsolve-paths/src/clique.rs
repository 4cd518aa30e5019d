//! Maximal-clique enumeration (Bron-Kerbosch with pivoting).
//!
//! Graphs are adjacency maps `node -> set of neighbours`. Undirected edges
//! must be mirrored in both directions; the algorithm assumes symmetry and
//! does not check it. [`adjacency_from_edges`] builds a mirrored map.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Adjacency-set representation of a graph.
pub type Adjacency<N> = HashMap<N, HashSet<N>>;

/// Build an undirected adjacency map, inserting each edge both ways.
pub fn adjacency_from_edges<N, E>(edges: E) -> Adjacency<N>
where
    N: Clone + Eq + Hash,
    E: IntoIterator<Item = (N, N)>,
{
    let mut graph: Adjacency<N> = HashMap::new();
    for (a, b) in edges {
        graph.entry(a.clone()).or_default().insert(b.clone());
        graph.entry(b).or_default().insert(a);
    }
    graph
}

/// Whether every pair of distinct nodes in `nodes` is adjacent.
pub fn is_clique<N: Eq + Hash>(graph: &Adjacency<N>, nodes: &HashSet<N>) -> bool {
    nodes.iter().all(|a| {
        nodes
            .iter()
            .all(|b| a == b || graph.get(a).is_some_and(|n| n.contains(b)))
    })
}

/// Enumerate every maximal clique of `graph`.
///
/// An empty graph has no cliques.
pub fn maximal_cliques<N: Clone + Eq + Hash>(graph: &Adjacency<N>) -> Vec<HashSet<N>> {
    let mut cliques = Vec::new();
    if graph.is_empty() {
        return cliques;
    }
    let candidates: HashSet<N> = graph.keys().cloned().collect();
    bron_kerbosch(
        graph,
        &mut Vec::new(),
        candidates,
        HashSet::new(),
        &mut cliques,
    );
    log::debug!(
        "maximal_cliques: {} cliques over {} nodes",
        cliques.len(),
        graph.len()
    );
    cliques
}

/// The largest clique of `graph`.
///
/// Ties go to the first maximum in enumeration order. An empty graph gives
/// an empty set.
pub fn find_max_clique<N: Clone + Eq + Hash>(graph: &Adjacency<N>) -> HashSet<N> {
    let mut best = HashSet::new();
    for clique in maximal_cliques(graph) {
        if clique.len() > best.len() {
            best = clique;
        }
    }
    best
}

/// `r`: current clique, `p`: candidates that extend it, `x`: excluded
/// vertices already covered by an earlier branch.
fn bron_kerbosch<N: Clone + Eq + Hash>(
    graph: &Adjacency<N>,
    r: &mut Vec<N>,
    mut p: HashSet<N>,
    mut x: HashSet<N>,
    out: &mut Vec<HashSet<N>>,
) {
    if p.is_empty() {
        if x.is_empty() {
            out.push(r.iter().cloned().collect());
        }
        return;
    }

    let empty = HashSet::new();
    let adj = |v: &N| graph.get(v).unwrap_or(&empty);

    // Pivot on the vertex covering the most candidates; its neighbours are
    // reached through some other branch.
    let pivot = p
        .iter()
        .chain(x.iter())
        .max_by_key(|&u| adj(u).iter().filter(|v| p.contains(*v)).count())
        .cloned();
    let branches: Vec<N> = match &pivot {
        Some(u) => p.iter().filter(|v| !adj(u).contains(*v)).cloned().collect(),
        None => Vec::new(),
    };

    for v in branches {
        let nv = adj(&v);
        let p_next = p.iter().filter(|w| nv.contains(*w)).cloned().collect();
        let x_next = x.iter().filter(|w| nv.contains(*w)).cloned().collect();
        r.push(v.clone());
        bron_kerbosch(graph, r, p_next, x_next, out);
        r.pop();
        p.remove(&v);
        x.insert(v);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set<const K: usize>(items: [&'static str; K]) -> HashSet<&'static str> {
        items.into_iter().collect()
    }

    #[test]
    fn triangle_with_pendant() {
        let graph: Adjacency<&str> = HashMap::from([
            ("A", set(["B", "C"])),
            ("B", set(["A", "C"])),
            ("C", set(["A", "B"])),
            ("D", set(["A"])),
        ]);
        assert_eq!(find_max_clique(&graph), set(["A", "B", "C"]));
    }

    #[test]
    fn empty_graph() {
        let graph: Adjacency<u32> = HashMap::new();
        assert!(find_max_clique(&graph).is_empty());
        assert!(maximal_cliques(&graph).is_empty());
        assert!(adjacency_from_edges(std::iter::empty::<(u32, u32)>()).is_empty());
    }

    #[test]
    fn path_graph_cliques_are_its_edges() {
        let graph = adjacency_from_edges([(1u32, 2), (2, 3)]);
        let cliques = maximal_cliques(&graph);
        assert_eq!(cliques.len(), 2);
        assert!(cliques.iter().all(|c| !c.is_empty()));
    }

    #[test]
    fn isolated_nodes_are_singleton_cliques() {
        let graph: Adjacency<u32> = HashMap::from([(1, HashSet::new()), (2, HashSet::new())]);
        let mut cliques = maximal_cliques(&graph);
        cliques.sort_by_key(|c| c.iter().copied().max());
        assert_eq!(cliques, vec![HashSet::from([1]), HashSet::from([2])]);
        assert_eq!(find_max_clique(&graph).len(), 1);
    }

    #[test]
    fn every_maximal_clique_found() {
        // Two triangles sharing the edge b-c, plus a tail d-e.
        let graph = adjacency_from_edges([
            ("a", "b"),
            ("a", "c"),
            ("b", "c"),
            ("b", "d"),
            ("c", "d"),
            ("d", "e"),
        ]);
        let cliques = maximal_cliques(&graph);
        assert_eq!(cliques.len(), 3);
        assert!(cliques.contains(&set(["a", "b", "c"])));
        assert!(cliques.contains(&set(["b", "c", "d"])));
        assert!(cliques.contains(&set(["d", "e"])));
    }

    #[test]
    fn lan_party() {
        // Computers linked pairwise; the largest fully linked group is a K4.
        let graph = adjacency_from_edges(
            [
                ("ka", "co"),
                ("ka", "de"),
                ("ka", "ta"),
                ("co", "de"),
                ("co", "ta"),
                ("de", "ta"),
                ("ta", "yn"),
                ("yn", "aq"),
                ("aq", "cg"),
                ("cg", "yn"),
                ("wh", "tc"),
            ]
            .into_iter(),
        );
        let best = find_max_clique(&graph);
        assert_eq!(best, set(["co", "de", "ka", "ta"]));
        assert!(is_clique(&graph, &best));
    }

    #[test]
    fn result_is_valid_and_maximal() {
        let graph = adjacency_from_edges((0u32..7).flat_map(|i| {
            (i + 1..7)
                .filter(move |j| (i * j) % 3 != 1)
                .map(move |j| (i, j))
        }));
        let best = find_max_clique(&graph);
        assert!(is_clique(&graph, &best));
        for extra in graph.keys() {
            if best.contains(extra) {
                continue;
            }
            let mut bigger = best.clone();
            bigger.insert(*extra);
            assert!(!is_clique(&graph, &bigger));
        }
        for c in maximal_cliques(&graph) {
            assert!(c.len() <= best.len());
        }
    }
}
