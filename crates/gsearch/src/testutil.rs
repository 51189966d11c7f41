//! Graph builders and brute-force oracles shared by the unit tests.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

use crate::{Cost, Graph, Node};

/// Build a graph from `(from, to, weight)` triples.
pub(crate) fn graph<N: Node + Copy>(edges: &[(N, N, Cost)]) -> Graph<N> {
    let mut g = Graph::new();
    for &(a, b, w) in edges {
        g.entry(a).or_default().insert(b, w);
    }
    g
}

/// Deterministic generator for small random graphs.
pub(crate) fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Random graph on nodes `0..n`, every node present as a key.
///
/// With `acyclic` set, edges only run from lower to higher labels.
/// Weights fall in `0..=max_w`; zero-weight edges are deliberate.
pub(crate) fn random_graph(rng: &mut StdRng, n: u8, density: u32, max_w: Cost, acyclic: bool) -> Graph<u8> {
    let mut g = Graph::new();
    for a in 0..n {
        let adj = g.entry(a).or_default();
        for b in 0..n {
            if a == b || (acyclic && b < a) {
                continue;
            }
            if rng.random_range(0..100) < density {
                adj.insert(b, rng.random_range(0..=max_w));
            }
        }
    }
    g
}

/// Every simple path from `start` to `goal`, by exhaustive enumeration.
pub(crate) fn simple_paths(g: &Graph<u8>, start: u8, goal: u8) -> Vec<Vec<u8>> {
    fn walk(g: &Graph<u8>, goal: u8, path: &mut Vec<u8>, seen: &mut HashSet<u8>, out: &mut Vec<Vec<u8>>) {
        let Some(&cur) = path.last() else {
            return;
        };
        if cur == goal {
            out.push(path.clone());
            return;
        }
        let Some(adj) = g.get(&cur) else {
            return;
        };
        for &next in adj.keys() {
            if seen.insert(next) {
                path.push(next);
                walk(g, goal, path, seen, out);
                path.pop();
                seen.remove(&next);
            }
        }
    }

    let mut out = Vec::new();
    walk(g, goal, &mut vec![start], &mut HashSet::from([start]), &mut out);
    out
}

/// Total weight of a path known to follow edges of `g`.
pub(crate) fn weight(g: &Graph<u8>, path: &[u8]) -> Cost {
    path.windows(2).map(|s| g[&s[0]][&s[1]]).sum()
}

/// Successor lists of `g` without weights.
pub(crate) fn unweighted(g: &Graph<u8>) -> impl Fn(&u8) -> Vec<u8> + '_ {
    move |n: &u8| g.get(n).map(|adj| adj.keys().copied().collect()).unwrap_or_default()
}
