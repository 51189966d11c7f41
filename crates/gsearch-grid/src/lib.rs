//! Grid geometry used by the gsearch grid adapter.
//!
//! [`Point`] doubles as a ready-made node type for the search algorithms:
//! it is `Copy`, hashable and totally ordered. [`Range`] bounds a
//! rectangular area of points, and [`manhattan`] / [`chebyshev`] are the
//! usual admissible heuristics for 4- and 8-directional movement.

mod distance;
mod geom;

pub use distance::{chebyshev, manhattan};
pub use geom::{Point, Range, RangeIter};
