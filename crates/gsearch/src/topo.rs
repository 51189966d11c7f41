//! Topological ordering with cycle detection.

use std::collections::HashMap;
use std::fmt;

use crate::{Graph, Node};

/// The graph handed to [`try_topological_sort`] contains a cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CycleError<N> {
    /// Target of the back edge that closed the cycle.
    pub node: N,
}

impl<N: fmt::Debug> fmt::Display for CycleError<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "graph contains a cycle through {:?}", self.node)
    }
}

impl<N: fmt::Debug> std::error::Error for CycleError<N> {}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    OnPath,
    Done,
}

/// One level of the explicit DFS stack: a node and its unexplored successors.
struct Frame<N> {
    node: N,
    rest: std::vec::IntoIter<N>,
}

impl<N: Node> Frame<N> {
    fn new(graph: &Graph<N>, node: N) -> Self {
        let succ: Vec<N> = graph
            .get(&node)
            .map(|adj| adj.keys().cloned().collect())
            .unwrap_or_default();
        Self {
            node,
            rest: succ.into_iter(),
        }
    }
}

/// Order every node of `graph` so that each edge points forward.
///
/// Nodes that only appear as successors are included. Returns the order in
/// reverse post-order of a depth-first walk, or a [`CycleError`] as soon as
/// an edge back onto the current walk is found (self-loops included).
pub fn try_topological_sort<N: Node>(graph: &Graph<N>) -> Result<Vec<N>, CycleError<N>> {
    let mut marks: HashMap<N, Mark> = HashMap::new();
    let mut post: Vec<N> = Vec::new();
    let mut stack: Vec<Frame<N>> = Vec::new();

    for root in graph.keys() {
        if marks.contains_key(root) {
            continue;
        }
        marks.insert(root.clone(), Mark::OnPath);
        stack.push(Frame::new(graph, root.clone()));

        while let Some(frame) = stack.last_mut() {
            let next = frame.rest.next();
            match next {
                Some(succ) => match marks.get(&succ) {
                    Some(Mark::OnPath) => {
                        log::debug!("cycle detected at depth {}", stack.len());
                        return Err(CycleError { node: succ });
                    }
                    Some(Mark::Done) => {}
                    None => {
                        marks.insert(succ.clone(), Mark::OnPath);
                        stack.push(Frame::new(graph, succ));
                    }
                },
                None => {
                    if let Some(done) = stack.pop() {
                        marks.insert(done.node.clone(), Mark::Done);
                        post.push(done.node);
                    }
                }
            }
        }
    }

    post.reverse();
    Ok(post)
}

/// Like [`try_topological_sort`], but reports a cycle as an empty order.
pub fn topological_sort<N: Node>(graph: &Graph<N>) -> Vec<N> {
    try_topological_sort(graph).unwrap_or_default()
}
