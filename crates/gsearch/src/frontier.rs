use crate::Cost;

/// A node with an associated cost, returned from Dijkstra / BFS map queries.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode<N> {
    pub node: N,
    pub cost: Cost,
}

// ---------------------------------------------------------------------------
// Priority-queue entry for A*/Dijkstra searches
// ---------------------------------------------------------------------------

/// Frontier entry: a node with the cost snapshot it was pushed with.
///
/// `g` is the accumulated cost from the start, `f` the priority key
/// (`g + estimate`, or just `g` for Dijkstra). Ordered by `f` only, so a
/// `BinaryHeap` of entries pops the smallest `f` first. Ties pop in
/// unspecified order.
pub(crate) struct FrontierEntry<N> {
    pub(crate) node: N,
    pub(crate) g: Cost,
    pub(crate) f: Cost,
}

impl<N> PartialEq for FrontierEntry<N> {
    fn eq(&self, other: &Self) -> bool {
        self.f == other.f
    }
}

impl<N> Eq for FrontierEntry<N> {}

impl<N> Ord for FrontierEntry<N> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first.
        other.f.cmp(&self.f)
    }
}

impl<N> PartialOrd for FrontierEntry<N> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
