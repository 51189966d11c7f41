//! Depth-first reachability.

use std::collections::HashSet;

use crate::{Goal, Neighbors, Node};

/// Report whether any node satisfying `goal` is reachable from `start`.
///
/// Iterative depth-first traversal: a node already visited when popped is
/// skipped rather than expanded again.
pub fn dfs<N, P, G>(start: N, goal: &P, graph: &G) -> bool
where
    N: Node,
    P: Goal<N> + ?Sized,
    G: Neighbors<N> + ?Sized,
{
    let mut visited: HashSet<N> = HashSet::new();
    let mut stack = vec![start];
    let mut nbuf = Vec::new();

    while let Some(current) = stack.pop() {
        if !visited.insert(current.clone()) {
            continue;
        }
        if goal.is_goal(&current) {
            log::debug!("dfs goal found after visiting {} nodes", visited.len());
            return true;
        }

        nbuf.clear();
        graph.neighbors(&current, &mut nbuf);
        stack.extend(nbuf.drain(..).filter(|n| !visited.contains(n)));
    }

    false
}

/// Flood-fill from `start` and return every reachable node.
///
/// `start` comes first; the order of the rest is unspecified.
pub fn reachable<N, G>(start: N, graph: &G) -> Vec<N>
where
    N: Node,
    G: Neighbors<N> + ?Sized,
{
    let mut seen: HashSet<N> = HashSet::from([start.clone()]);
    let mut result = vec![start.clone()];
    let mut stack = vec![start];
    let mut nbuf = Vec::new();

    while let Some(current) = stack.pop() {
        nbuf.clear();
        graph.neighbors(&current, &mut nbuf);

        for next in nbuf.drain(..) {
            if seen.insert(next.clone()) {
                result.push(next.clone());
                stack.push(next);
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{random_graph, rng, simple_paths, unweighted};

    #[test]
    fn finds_goal_through_branches() {
        let g = |n: &u32| if *n < 20 { vec![n * 2, n * 3] } else { vec![] };
        assert!(dfs(1, &|n: &u32| *n == 18, &g));
        assert!(!dfs(1, &|n: &u32| *n == 5, &g));
    }

    #[test]
    fn start_can_be_goal() {
        let none = |_: &u8| Vec::<u8>::new();
        assert!(dfs(4, &|n: &u8| *n == 4, &none));
    }

    #[test]
    fn self_loop_and_cycle_terminate() {
        let g = |n: &u8| match *n {
            0 => vec![0, 1],
            1 => vec![2],
            2 => vec![0],
            _ => vec![],
        };
        assert!(!dfs(0, &|n: &u8| *n == 9, &g));
        assert!(dfs(0, &|n: &u8| *n == 2, &g));
    }

    #[test]
    fn disconnected_component_is_unreachable() {
        let g = |n: &u8| match *n {
            0 => vec![1],
            1 => vec![0],
            5 => vec![6],
            _ => vec![],
        };
        assert!(!dfs(0, &|n: &u8| *n == 6, &g));
        assert!(dfs(5, &|n: &u8| *n == 6, &g));
    }

    #[test]
    fn agrees_with_path_enumeration() {
        let mut r = rng(5);
        for _ in 0..200 {
            let g = random_graph(&mut r, 7, 20, 1, false);
            let expected = !simple_paths(&g, 0, 6).is_empty();
            assert_eq!(dfs(0u8, &|n: &u8| *n == 6, &unweighted(&g)), expected);
        }
    }

    #[test]
    fn reachable_lists_component_once() {
        let g = |n: &u8| match *n {
            0 => vec![1, 2],
            1 => vec![2, 0],
            2 => vec![3],
            7 => vec![0],
            _ => vec![],
        };
        let mut nodes = reachable(0, &g);
        assert_eq!(nodes[0], 0);
        nodes.sort();
        assert_eq!(nodes, vec![0, 1, 2, 3]);
    }
}
