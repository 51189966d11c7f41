//! Adapter exposing a rectangular grid as a searchable graph.
//!
//! ```
//! use gsearch::grid::{GridGraph, Manhattan};
//! use gsearch_grid::{Point, Range};
//!
//! let walls = [Point::new(1, 0), Point::new(1, 1)];
//! let grid = GridGraph::new(Range::new(0, 0, 3, 3), |p| !walls.contains(&p));
//! let goal = Point::new(2, 0);
//! let path = gsearch::astar(Point::new(0, 0), &goal, &grid, &Manhattan(goal));
//! assert_eq!(path.len(), 7);
//! ```

use gsearch_grid::{Point, Range, chebyshev, manhattan};

use crate::{Cost, Heuristic, Neighbors, WeightedNeighbors};

/// Grid cells inside `range` for which `passable` holds, joined to their
/// 4 (or 8, with diagonals) neighbours. Every step costs 1.
pub struct GridGraph<F> {
    range: Range,
    passable: F,
    diagonals: bool,
}

impl<F: Fn(Point) -> bool> GridGraph<F> {
    /// A 4-directional grid.
    pub fn new(range: Range, passable: F) -> Self {
        Self {
            range,
            passable,
            diagonals: false,
        }
    }

    /// Enable or disable diagonal moves.
    pub fn with_diagonals(mut self, diagonals: bool) -> Self {
        self.diagonals = diagonals;
        self
    }

    #[inline]
    pub fn range(&self) -> Range {
        self.range
    }

    /// Whether `p` is inside the range and passable.
    #[inline]
    pub fn is_open(&self, p: Point) -> bool {
        self.range.contains(p) && (self.passable)(p)
    }

    fn push_open(&self, p: Point, mut push: impl FnMut(Point)) {
        if self.diagonals {
            p.neighbors_8().into_iter().filter(|&n| self.is_open(n)).for_each(&mut push);
        } else {
            p.neighbors_4().into_iter().filter(|&n| self.is_open(n)).for_each(&mut push);
        }
    }
}

impl<F: Fn(Point) -> bool> Neighbors<Point> for GridGraph<F> {
    fn neighbors(&self, node: &Point, buf: &mut Vec<Point>) {
        self.push_open(*node, |n| buf.push(n));
    }
}

impl<F: Fn(Point) -> bool> WeightedNeighbors<Point> for GridGraph<F> {
    fn weighted_neighbors(&self, node: &Point, buf: &mut Vec<(Point, Cost)>) {
        self.push_open(*node, |n| buf.push((n, 1)));
    }
}

/// Manhattan distance to a fixed goal; admissible for 4-way grids.
#[derive(Debug, Clone, Copy)]
pub struct Manhattan(pub Point);

impl Heuristic<Point> for Manhattan {
    fn estimate(&self, node: &Point) -> Cost {
        manhattan(*node, self.0)
    }
}

/// Chebyshev distance to a fixed goal; admissible for 8-way grids.
#[derive(Debug, Clone, Copy)]
pub struct Chebyshev(pub Point);

impl Heuristic<Point> for Chebyshev {
    fn estimate(&self, node: &Point) -> Cost {
        chebyshev(*node, self.0)
    }
}
