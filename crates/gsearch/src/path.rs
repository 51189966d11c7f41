use std::collections::HashMap;

use crate::{Cost, Node, WeightedNeighbors};

/// Walk predecessor links back from `goal` and return the forward path.
///
/// The walk stops at the first node without a predecessor, which is taken to
/// be the start. A goal with no entry yields `[goal]`, so check reachability
/// before relying on the result. A predecessor cycle in a hand-built map is
/// cut after every recorded node has been visited once.
pub fn reconstruct_path<N: Node>(came_from: &HashMap<N, N>, goal: N) -> Vec<N> {
    let mut path = vec![goal];
    while path.len() <= came_from.len() {
        let Some(prev) = path.last().and_then(|n| came_from.get(n)) else {
            break;
        };
        path.push(prev.clone());
    }
    path.reverse();
    path
}

/// Total weight of `path` under `graph`.
///
/// Returns `None` if two consecutive nodes are not joined by an edge. When
/// the neighbour function lists the same successor twice the cheaper edge
/// counts. Empty and single-node paths cost 0.
pub fn path_cost<N, G>(path: &[N], graph: &G) -> Option<Cost>
where
    N: Node,
    G: WeightedNeighbors<N> + ?Sized,
{
    let mut buf = Vec::new();
    let mut total: Cost = 0;
    for step in path.windows(2) {
        buf.clear();
        graph.weighted_neighbors(&step[0], &mut buf);
        let w = buf
            .iter()
            .filter(|(n, _)| *n == step[1])
            .map(|&(_, w)| w)
            .min()?;
        total = total.saturating_add(w);
    }
    Some(total)
}
