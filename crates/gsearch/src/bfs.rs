use std::collections::{HashMap, HashSet, VecDeque};

use crate::frontier::PathNode;
use crate::path::reconstruct_path;
use crate::{Cost, Goal, Neighbors, Node};

/// Find a fewest-edges path from `start` to the first node satisfying `goal`.
///
/// Nodes are tested against `goal` in breadth-first order, `start` included,
/// so the returned path has minimal length among all paths to any goal node.
/// Returns an empty vector if no goal node is reachable.
pub fn bfs<N, P, G>(start: N, goal: &P, graph: &G) -> Vec<N>
where
    N: Node,
    P: Goal<N> + ?Sized,
    G: Neighbors<N> + ?Sized,
{
    let mut came_from: HashMap<N, N> = HashMap::new();
    let mut visited: HashSet<N> = HashSet::from([start.clone()]);
    let mut queue: VecDeque<N> = VecDeque::from([start]);
    let mut nbuf = Vec::new();

    while let Some(current) = queue.pop_front() {
        if goal.is_goal(&current) {
            log::debug!("bfs goal found after visiting {} nodes", visited.len());
            return reconstruct_path(&came_from, current);
        }

        nbuf.clear();
        graph.neighbors(&current, &mut nbuf);

        for next in nbuf.drain(..) {
            if visited.insert(next.clone()) {
                came_from.insert(next.clone(), current.clone());
                queue.push_back(next);
            }
        }
    }

    log::debug!("bfs exhausted {} nodes without a goal", visited.len());
    Vec::new()
}

/// Compute a multi-source breadth-first search distance map.
///
/// Each step has cost 1. Expansion stops when the distance exceeds
/// `max_dist`. Nodes are reported once, in non-decreasing distance order.
pub fn bfs_map<N, G>(sources: &[N], graph: &G, max_dist: Cost) -> Vec<PathNode<N>>
where
    N: Node,
    G: Neighbors<N> + ?Sized,
{
    let mut dist: HashMap<N, Cost> = HashMap::new();
    let mut queue: VecDeque<N> = VecDeque::new();
    let mut results = Vec::new();

    for src in sources {
        if dist.insert(src.clone(), 0).is_none() {
            queue.push_back(src.clone());
            results.push(PathNode {
                node: src.clone(),
                cost: 0,
            });
        }
    }

    let mut nbuf = Vec::new();

    while let Some(current) = queue.pop_front() {
        let nd = dist[&current] + 1;
        if nd > max_dist {
            continue;
        }

        nbuf.clear();
        graph.neighbors(&current, &mut nbuf);

        for next in nbuf.drain(..) {
            if dist.contains_key(&next) {
                continue;
            }
            dist.insert(next.clone(), nd);
            queue.push_back(next.clone());
            results.push(PathNode {
                node: next,
                cost: nd,
            });
        }
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{random_graph, rng, simple_paths, unweighted};

    fn adjacency(edges: &[(char, char)]) -> impl Fn(&char) -> Vec<char> + '_ {
        move |n: &char| edges.iter().filter(|(a, _)| a == n).map(|&(_, b)| b).collect()
    }

    #[test]
    fn finds_fewest_steps_not_first_discovered() {
        let g = adjacency(&[('a', 'b'), ('b', 'c'), ('c', 'z'), ('a', 'd'), ('d', 'z')]);
        assert_eq!(bfs('a', &|n: &char| *n == 'z', &g), vec!['a', 'd', 'z']);
    }

    #[test]
    fn start_satisfying_goal_is_singleton() {
        let g = adjacency(&[('a', 'b')]);
        assert_eq!(bfs('a', &|_: &char| true, &g), vec!['a']);
    }

    #[test]
    fn stops_at_nearest_of_several_goals() {
        let g = adjacency(&[('a', 'b'), ('b', 'x'), ('a', 'c'), ('c', 'd'), ('d', 'y')]);
        let path = bfs('a', &|n: &char| *n == 'x' || *n == 'y', &g);
        assert_eq!(path, vec!['a', 'b', 'x']);
    }

    #[test]
    fn no_goal_reachable_is_empty() {
        let g = adjacency(&[('a', 'b'), ('b', 'a'), ('c', 'z')]);
        assert!(bfs('a', &|n: &char| *n == 'z', &g).is_empty());
    }

    #[test]
    fn self_loops_are_harmless() {
        let g = adjacency(&[('a', 'a'), ('a', 'b'), ('b', 'b')]);
        assert_eq!(bfs('a', &|n: &char| *n == 'b', &g), vec!['a', 'b']);
    }

    #[test]
    fn length_matches_brute_force() {
        let mut r = rng(11);
        for _ in 0..200 {
            let g = random_graph(&mut r, 8, 25, 1, false);
            let goal = |n: &u8| *n >= 6;
            let shortest = (6..8)
                .flat_map(|t| simple_paths(&g, 0, t))
                .filter(|p| p[..p.len() - 1].iter().all(|n| !goal(n)))
                .map(|p| p.len())
                .min();
            let path = bfs(0u8, &goal, &unweighted(&g));
            assert_eq!((!path.is_empty()).then_some(path.len()), shortest);
            if let Some(last) = path.last() {
                assert!(goal(last));
            }
        }
    }

    #[test]
    fn map_counts_steps() {
        let line = |n: &i32| [n - 1, n + 1];
        let map = bfs_map(&[0], &line, 3);
        assert_eq!(map.len(), 7);
        assert_eq!(map[0], PathNode { node: 0, cost: 0 });
        assert!(map.iter().all(|p| p.cost == p.node.abs()));
        assert!(map.windows(2).all(|w| w[0].cost <= w[1].cost));
    }

    #[test]
    fn map_deduplicates_sources() {
        let g = adjacency(&[('a', 'b')]);
        let map = bfs_map(&['a', 'a'], &g, 5);
        assert_eq!(map.len(), 2);
        assert_eq!(map[1], PathNode { node: 'b', cost: 1 });
    }
}
