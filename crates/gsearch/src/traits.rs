use std::collections::HashMap;
use std::hash::Hash;

/// Path and edge cost.
pub type Cost = i32;

/// Full directed weighted graph: node → (successor → edge weight).
///
/// A node that only appears as a successor has no outgoing edges.
pub type Graph<N> = HashMap<N, HashMap<N, Cost>>;

/// Bound shared by every node type: identity comparison plus hashing.
pub trait Node: Clone + Eq + Hash {}

impl<T: Clone + Eq + Hash> Node for T {}

/// Unweighted neighbour enumeration.
pub trait Neighbors<N> {
    /// Append the neighbours of `node` into `buf`. The caller clears `buf`
    /// before calling.
    fn neighbors(&self, node: &N, buf: &mut Vec<N>);
}

/// Neighbour enumeration with edge weights.
pub trait WeightedNeighbors<N> {
    /// Append `(neighbour, weight)` pairs for `node` into `buf`. The caller
    /// clears `buf` before calling.
    fn weighted_neighbors(&self, node: &N, buf: &mut Vec<(N, Cost)>);
}

/// Remaining-cost estimate for A*.
pub trait Heuristic<N> {
    /// Estimated cost from `node` to the goal. Must never overestimate the
    /// true remaining cost for A* to return optimal paths.
    fn estimate(&self, node: &N) -> Cost;
}

/// Termination test for BFS / DFS.
pub trait Goal<N> {
    fn is_goal(&self, node: &N) -> bool;
}

impl<N, F, I> Neighbors<N> for F
where
    F: Fn(&N) -> I,
    I: IntoIterator<Item = N>,
{
    fn neighbors(&self, node: &N, buf: &mut Vec<N>) {
        buf.extend(self(node));
    }
}

impl<N, F, I> WeightedNeighbors<N> for F
where
    F: Fn(&N) -> I,
    I: IntoIterator<Item = (N, Cost)>,
{
    fn weighted_neighbors(&self, node: &N, buf: &mut Vec<(N, Cost)>) {
        buf.extend(self(node));
    }
}

impl<N: Node> WeightedNeighbors<N> for Graph<N> {
    fn weighted_neighbors(&self, node: &N, buf: &mut Vec<(N, Cost)>) {
        if let Some(adj) = self.get(node) {
            buf.extend(adj.iter().map(|(n, &w)| (n.clone(), w)));
        }
    }
}

impl<N, F> Heuristic<N> for F
where
    F: Fn(&N) -> Cost,
{
    fn estimate(&self, node: &N) -> Cost {
        self(node)
    }
}

impl<N, F> Goal<N> for F
where
    F: Fn(&N) -> bool,
{
    fn is_goal(&self, node: &N) -> bool {
        self(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_fill_buffers() {
        let succ = |n: &u32| vec![n + 1, n + 2];
        let mut buf = Vec::new();
        succ.neighbors(&3, &mut buf);
        assert_eq!(buf, vec![4, 5]);

        let weighted = |n: &u32| [(n * 2, 7)];
        let mut wbuf = Vec::new();
        weighted.weighted_neighbors(&3, &mut wbuf);
        assert_eq!(wbuf, vec![(6, 7)]);
    }

    #[test]
    fn graph_without_entry_has_no_neighbours() {
        let mut g: Graph<char> = Graph::new();
        g.entry('a').or_default().insert('b', 4);
        let mut buf = Vec::new();
        g.weighted_neighbors(&'a', &mut buf);
        assert_eq!(buf, vec![('b', 4)]);
        buf.clear();
        g.weighted_neighbors(&'b', &mut buf);
        assert!(buf.is_empty());
    }

    #[test]
    fn heuristic_and_goal_closures() {
        let h = |n: &i32| (10 - n).abs();
        assert_eq!(h.estimate(&4), 6);
        let g = |n: &i32| n % 5 == 0;
        assert!(g.is_goal(&15));
        assert!(!g.is_goal(&16));
    }
}
