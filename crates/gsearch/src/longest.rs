//! Maximum-weight paths.
//!
//! [`longest_path_dag`] runs in linear time over a whole acyclic graph.
//! [`longest_path`] works on any graph, cyclic or undirected, by exhaustive
//! backtracking over simple paths. Its cost is exponential in the worst
//! case; keep it to small graphs.

use std::collections::{HashMap, HashSet};

use crate::path::reconstruct_path;
use crate::topo::topological_sort;
use crate::{Cost, Graph, Node, WeightedNeighbors};

/// Find a maximum-weight path from `start` to `goal` in a directed acyclic
/// graph.
///
/// Returns an empty vector if `graph` has a cycle, if `goal` is not a node
/// of `graph`, or if `goal` is unreachable from `start`.
pub fn longest_path_dag<N: Node>(start: N, goal: &N, graph: &Graph<N>) -> Vec<N> {
    let order = topological_sort(graph);
    if order.is_empty() || !order.contains(goal) {
        log::debug!("longest path: graph is cyclic or lacks the goal");
        return Vec::new();
    }

    // Absent = not reached from start.
    let mut dist: HashMap<N, Cost> = HashMap::from([(start, 0)]);
    let mut came_from: HashMap<N, N> = HashMap::new();

    for node in &order {
        let Some(&d) = dist.get(node) else {
            continue;
        };
        let Some(adj) = graph.get(node) else {
            continue;
        };
        for (next, &w) in adj {
            let candidate = d.saturating_add(w);
            if dist.get(next).is_none_or(|&cur| candidate > cur) {
                dist.insert(next.clone(), candidate);
                came_from.insert(next.clone(), node.clone());
            }
        }
    }

    if !dist.contains_key(goal) {
        return Vec::new();
    }
    reconstruct_path(&came_from, goal.clone())
}

/// One level of the backtracking stack.
struct Frame<N> {
    weight: Cost,
    rest: std::vec::IntoIter<(N, Cost)>,
}

/// Find a maximum-weight simple path from `start` to `goal` in any graph.
///
/// Every simple path is explored: a node is marked while it sits on the
/// current path and unmarked once all of its branches are exhausted, so
/// sibling branches may reuse it. Among equally heavy paths the one found
/// last wins. Returns an empty vector if `goal` is unreachable.
pub fn longest_path<N, G>(start: N, goal: &N, graph: &G) -> Vec<N>
where
    N: Node,
    G: WeightedNeighbors<N> + ?Sized,
{
    if start == *goal {
        return vec![start];
    }

    let mut best: Option<(Cost, Vec<N>)> = None;
    let mut visited: HashSet<N> = HashSet::from([start.clone()]);
    let mut nbuf = Vec::new();
    let mut explored = 0usize;

    graph.weighted_neighbors(&start, &mut nbuf);
    let mut path = vec![start];
    let mut stack = vec![Frame {
        weight: 0,
        rest: std::mem::take(&mut nbuf).into_iter(),
    }];

    while let Some(frame) = stack.last_mut() {
        let weight = frame.weight;
        let Some((next, w)) = frame.rest.next() else {
            stack.pop();
            if let Some(node) = path.pop() {
                visited.remove(&node);
            }
            continue;
        };
        if visited.contains(&next) {
            continue;
        }
        let total = weight.saturating_add(w);

        if next == *goal {
            explored += 1;
            if best.as_ref().is_none_or(|(b, _)| total >= *b) {
                let mut found = path.clone();
                found.push(next);
                best = Some((total, found));
            }
            continue;
        }

        graph.weighted_neighbors(&next, &mut nbuf);
        visited.insert(next.clone());
        path.push(next);
        stack.push(Frame {
            weight: total,
            rest: std::mem::take(&mut nbuf).into_iter(),
        });
    }

    log::debug!("longest path: {explored} complete paths examined");
    best.map(|(_, p)| p).unwrap_or_default()
}
