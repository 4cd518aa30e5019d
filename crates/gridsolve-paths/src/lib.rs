//! Graph search and grid algorithms for puzzle solving.
//!
//! The generic searches work on any state type `S: Clone + Eq + Hash` and take
//! the graph as a neighbour closure `FnMut(&S) -> impl IntoIterator<Item = S>`,
//! so graphs never have to be materialised:
//!
//! - **BFS** unweighted distances and shortest paths ([`bfs`], [`bfs_path`])
//! - **DFS** any path to a goal ([`dfs_path`])
//! - **Dijkstra** weighted distances and cheapest paths ([`dijkstra`],
//!   [`dijkstra_path`])
//! - **Path counting** on DAGs (memoized) and on cyclic graphs (simple paths
//!   only) ([`count_paths_dag`], [`count_paths_cyclic`])
//!
//! Grid adapters specialise these to a [`Grid`](gridsolve_core::Grid) whose
//! walkable cells are given by a value set ([`Walkable`], [`bfs_grid_path`],
//! [`dfs_grid_path`], [`bfs_grid_distances`], [`flood_fill`],
//! [`flood_fill_mark`]).
//!
//! Graph utilities on explicit adjacency maps:
//!
//! | Item | Purpose |
//! |---|---|
//! | [`maximal_cliques`], [`find_max_clique`] | Bron-Kerbosch clique search |
//! | [`DisjointSet`] | union-find component tracking |

mod bfs;
mod clique;
mod count;
mod dfs;
mod dijkstra;
mod fill;
mod gridpath;
mod neighbors;
mod union_find;

pub use bfs::{bfs, bfs_path};
pub use clique::{Adjacency, adjacency_from_edges, find_max_clique, is_clique, maximal_cliques};
pub use count::{count_paths_cyclic, count_paths_dag};
pub use dfs::dfs_path;
pub use dijkstra::{dijkstra, dijkstra_path};
pub use fill::{flood_fill, flood_fill_mark};
pub use gridpath::{bfs_grid_distances, bfs_grid_path, dfs_grid_path};
pub use neighbors::Walkable;
pub use union_find::DisjointSet;
