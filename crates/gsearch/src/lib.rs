//! Generic graph-search algorithms over caller-defined graphs.
//!
//! The library never owns graph storage. Callers describe a graph through
//! small capability traits (usually just closures) and every entry point
//! runs a fresh, self-contained traversal:
//!
//! - **A\*** shortest path ([`astar`])
//! - **Dijkstra** shortest path ([`dijkstra`]) and distance maps ([`dijkstra_map`])
//! - **BFS** fewest-steps path ([`bfs`]) and step maps ([`bfs_map`])
//! - **DFS** reachability ([`dfs`], [`reachable`])
//! - **Longest path** on DAGs ([`longest_path_dag`]) and general graphs ([`longest_path`])
//! - **Topological sort** with cycle detection ([`topological_sort`], [`try_topological_sort`])
//!
//! "No path" and "cyclic" are reported as empty results, never as panics.
//!
//! # Capability traits
//!
//! | Trait | Required by | Closure form |
//! |---|---|---|
//! | [`Neighbors`] | BFS, DFS, reachability | `Fn(&N) -> impl IntoIterator<Item = N>` |
//! | [`WeightedNeighbors`] | A*, Dijkstra, longest path | `Fn(&N) -> impl IntoIterator<Item = (N, Cost)>` |
//! | [`Heuristic`] | A* | `Fn(&N) -> Cost` |
//! | [`Goal`] | BFS, DFS | `Fn(&N) -> bool` |
//!
//! Edge weights must be non-negative for A* and Dijkstra, which skip any
//! negative edge they are handed. Costs saturate at `Cost::MAX`.

mod astar;
mod bfs;
mod dfs;
mod dijkstra;
mod frontier;
pub mod grid;
mod longest;
mod path;
mod topo;
mod traits;

#[cfg(test)]
mod testutil;

pub use astar::astar;
pub use bfs::{bfs, bfs_map};
pub use dfs::{dfs, reachable};
pub use dijkstra::{dijkstra, dijkstra_map};
pub use frontier::PathNode;
pub use longest::{longest_path, longest_path_dag};
pub use path::{path_cost, reconstruct_path};
pub use topo::{CycleError, topological_sort, try_topological_sort};
pub use traits::{Cost, Goal, Graph, Heuristic, Neighbors, Node, WeightedNeighbors};
