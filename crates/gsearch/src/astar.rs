use std::collections::{BinaryHeap, HashMap};

use crate::frontier::FrontierEntry;
use crate::path::reconstruct_path;
use crate::{Cost, Heuristic, Node, WeightedNeighbors};

/// Compute a minimum-weight path from `start` to `goal` using A*.
///
/// Returns the full path (including both endpoints), or an empty vector if
/// `goal` is unreachable. The path is optimal when `heuristic` never
/// overestimates the remaining cost; an inadmissible heuristic silently
/// yields a possibly longer path.
pub fn astar<N, G, H>(start: N, goal: &N, graph: &G, heuristic: &H) -> Vec<N>
where
    N: Node,
    G: WeightedNeighbors<N> + ?Sized,
    H: Heuristic<N> + ?Sized,
{
    best_first(start, goal, graph, |n: &N| heuristic.estimate(n))
}

/// Frontier relaxation shared by A* and Dijkstra.
///
/// Every strict improvement of a node's cost pushes a fresh frontier entry.
/// Entries whose cost snapshot is worse than the node's current best are
/// stale and skipped when popped. The search stops as soon as `goal` is
/// popped. Edges with negative weight are ignored.
pub(crate) fn best_first<N, G, E>(start: N, goal: &N, graph: &G, estimate: E) -> Vec<N>
where
    N: Node,
    G: WeightedNeighbors<N> + ?Sized,
    E: Fn(&N) -> Cost,
{
    let mut g_costs: HashMap<N, Cost> = HashMap::new();
    let mut came_from: HashMap<N, N> = HashMap::new();
    let mut open: BinaryHeap<FrontierEntry<N>> = BinaryHeap::new();
    let mut nbuf = Vec::new();
    let mut expanded = 0usize;

    g_costs.insert(start.clone(), 0);
    open.push(FrontierEntry {
        f: estimate(&start),
        g: 0,
        node: start,
    });

    while let Some(current) = open.pop() {
        if g_costs.get(&current.node).is_some_and(|&best| current.g > best) {
            continue;
        }

        if current.node == *goal {
            log::debug!(
                "goal reached at cost {} after {} expansions",
                current.g,
                expanded
            );
            return reconstruct_path(&came_from, current.node);
        }
        expanded += 1;

        nbuf.clear();
        graph.weighted_neighbors(&current.node, &mut nbuf);

        for (next, w) in nbuf.drain(..) {
            if w < 0 {
                log::trace!("skipping negative edge weight {w}");
                continue;
            }
            let tentative = current.g.saturating_add(w);
            if g_costs.get(&next).is_some_and(|&best| tentative >= best) {
                continue;
            }
            log::trace!("relax edge at cost {tentative}");

            let f = tentative.saturating_add(estimate(&next));
            g_costs.insert(next.clone(), tentative);
            came_from.insert(next.clone(), current.node.clone());
            open.push(FrontierEntry {
                node: next,
                g: tentative,
                f,
            });
        }
    }

    log::debug!("frontier exhausted after {expanded} expansions, goal unreachable");
    Vec::new()
}
