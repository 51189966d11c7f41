//! Shared model for the gsearch demos.
//!
//! Demonstrates: seeded maze generation, A* / Dijkstra / BFS on a grid,
//! DFS reachability, and critical-path analysis of a build plan with
//! topological sort and DAG longest path.

use std::collections::HashSet;
use std::fmt::Write as _;

use gsearch::grid::{GridGraph, Manhattan};
use gsearch::{Cost, Graph, path_cost};
use gsearch_grid::{Point, Range};
use rand::{RngExt, SeedableRng};

pub const WIDTH: i32 = 40;
pub const HEIGHT: i32 = 12;
/// Percentage of cells turned into walls.
const WALL_DENSITY: u32 = 28;

// ---------------------------------------------------------------------------
// Maze
// ---------------------------------------------------------------------------

pub struct Maze {
    range: Range,
    walls: HashSet<Point>,
}

impl Maze {
    /// Random maze with the two opposite corners kept open.
    pub fn generate(seed: u64) -> Self {
        let range = Range::new(0, 0, WIDTH, HEIGHT);
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        let (start, goal) = (Self::start(), Self::goal());
        let walls: HashSet<Point> = range
            .iter()
            .filter(|&p| p != start && p != goal)
            .filter(|_| rng.random_range(0..100) < WALL_DENSITY)
            .collect();
        Self { range, walls }
    }

    pub fn start() -> Point {
        Point::ZERO
    }

    pub fn goal() -> Point {
        Point::new(WIDTH - 1, HEIGHT - 1)
    }

    pub fn graph(&self) -> GridGraph<impl Fn(Point) -> bool + '_> {
        GridGraph::new(self.range, move |p| !self.walls.contains(&p))
    }

    /// ASCII rendering with `path` drawn over the floor.
    pub fn render(&self, path: &[Point]) -> String {
        let on_path: HashSet<Point> = path.iter().copied().collect();
        let mut out = String::with_capacity(self.range.len() + HEIGHT as usize);
        for p in self.range {
            let ch = if p == Self::start() {
                '@'
            } else if p == Self::goal() {
                '>'
            } else if self.walls.contains(&p) {
                '#'
            } else if on_path.contains(&p) {
                '*'
            } else {
                '.'
            };
            out.push(ch);
            if p.x == self.range.max.x - 1 {
                out.push('\n');
            }
        }
        out
    }
}

// ---------------------------------------------------------------------------
// Build plan
// ---------------------------------------------------------------------------

/// Build steps with the minutes each dependency edge takes.
pub fn build_plan() -> Graph<&'static str> {
    let steps: [(&str, &str, Cost); 9] = [
        ("fetch", "configure", 2),
        ("fetch", "codegen", 4),
        ("configure", "compile", 3),
        ("codegen", "compile", 6),
        ("compile", "link", 5),
        ("compile", "docs", 2),
        ("link", "test", 7),
        ("docs", "package", 1),
        ("test", "package", 2),
    ];
    let mut plan = Graph::new();
    for (from, to, minutes) in steps {
        plan.entry(from).or_default().insert(to, minutes);
    }
    plan
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

fn describe(name: &str, path: &[Point], cost: Option<Cost>) -> String {
    match (path.is_empty(), cost) {
        (false, Some(c)) => format!("{name:<9} {} nodes, cost {c}", path.len()),
        _ => format!("{name:<9} no path"),
    }
}

/// Run every search over a maze generated from `seed` and describe the
/// outcome.
pub fn report(seed: u64) -> String {
    let maze = Maze::generate(seed);
    let graph = maze.graph();
    let (start, goal) = (Maze::start(), Maze::goal());

    let astar = gsearch::astar(start, &goal, &graph, &Manhattan(goal));
    let dijkstra = gsearch::dijkstra(start, &goal, &graph);
    let bfs = gsearch::bfs(start, &|p: &Point| *p == goal, &graph);
    let reachable = gsearch::dfs(start, &|p: &Point| *p == goal, &graph);
    let component = gsearch::reachable(start, &graph).len();

    let mut out = String::new();
    let _ = writeln!(out, "seed {seed}: {start} to {goal}");
    out.push_str(&maze.render(&astar));
    let _ = writeln!(out, "{}", describe("A*", &astar, path_cost(&astar, &graph)));
    let _ = writeln!(out, "{}", describe("Dijkstra", &dijkstra, path_cost(&dijkstra, &graph)));
    let _ = writeln!(out, "{}", describe("BFS", &bfs, path_cost(&bfs, &graph)));
    let _ = writeln!(out, "DFS       goal reachable: {reachable}, component size {component}");

    let plan = build_plan();
    let order = gsearch::topological_sort(&plan);
    let critical = gsearch::longest_path_dag("fetch", &"package", &plan);
    let _ = writeln!(out, "build order: {}", order.join(" -> "));
    let _ = writeln!(
        out,
        "critical path: {} ({} min)",
        critical.join(" -> "),
        path_cost(&critical, &plan).unwrap_or_default()
    );
    out
}
