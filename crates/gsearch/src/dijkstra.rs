use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::astar::best_first;
use crate::frontier::{FrontierEntry, PathNode};
use crate::{Cost, Node, WeightedNeighbors};

/// Compute a minimum-weight path from `start` to `goal` using Dijkstra's
/// algorithm.
///
/// Equivalent to [`astar`](crate::astar) with a zero heuristic. Returns the
/// full path, or an empty vector if `goal` is unreachable.
pub fn dijkstra<N, G>(start: N, goal: &N, graph: &G) -> Vec<N>
where
    N: Node,
    G: WeightedNeighbors<N> + ?Sized,
{
    best_first(start, goal, graph, |_: &N| 0)
}

/// Compute a multi-source Dijkstra distance map.
///
/// Every source starts at cost 0. Expansion stops when the cumulative cost
/// exceeds `max_cost`. Each reached node is reported once with its final
/// cost, in non-decreasing cost order.
pub fn dijkstra_map<N, G>(sources: &[N], graph: &G, max_cost: Cost) -> Vec<PathNode<N>>
where
    N: Node,
    G: WeightedNeighbors<N> + ?Sized,
{
    let mut g_costs: HashMap<N, Cost> = HashMap::new();
    let mut closed: HashSet<N> = HashSet::new();
    let mut open: BinaryHeap<FrontierEntry<N>> = BinaryHeap::new();
    let mut results = Vec::new();

    // Seed sources.
    for src in sources {
        if g_costs.insert(src.clone(), 0).is_none() {
            open.push(FrontierEntry {
                node: src.clone(),
                g: 0,
                f: 0,
            });
        }
    }

    let mut nbuf = Vec::new();

    while let Some(current) = open.pop() {
        if closed.contains(&current.node) {
            continue;
        }
        closed.insert(current.node.clone());

        nbuf.clear();
        graph.weighted_neighbors(&current.node, &mut nbuf);

        for (next, w) in nbuf.drain(..) {
            let tentative = current.g.saturating_add(w);
            if w < 0 || tentative > max_cost || closed.contains(&next) {
                continue;
            }
            if g_costs.get(&next).is_some_and(|&best| tentative >= best) {
                continue;
            }
            g_costs.insert(next.clone(), tentative);
            open.push(FrontierEntry {
                node: next,
                g: tentative,
                f: tentative,
            });
        }

        results.push(PathNode {
            node: current.node,
            cost: current.g,
        });
    }

    log::debug!("dijkstra map reached {} nodes", results.len());
    results
}
