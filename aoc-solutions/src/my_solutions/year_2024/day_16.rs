use std::cmp::Reverse;
use std::collections::BinaryHeap;

use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::{Direction, Grid, Point};
use crate::utils::input::invalid;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 16, tags = ["grid", "dijkstra"], expect = [73432, 496], example = [7036, 45])]
pub struct Solver;

const STEP_COST: u64 = 1;
const TURN_COST: u64 = 1000;

/// Lowest score and the number of tiles on any lowest-score route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Routes {
    best: u64,
    tiles: usize,
}

#[derive(Debug)]
pub struct Maze {
    walls: Grid<bool>,
    start: Point,
    end: Point,
    routes: Option<Routes>,
}

impl AocParser for Solver {
    type SharedData<'a> = Maze;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let grid = Grid::parse(input).map_err(invalid)?;
        let find = |marker: u8| {
            grid.position(|&c| c == marker)
                .ok_or_else(|| invalid(anyhow!("maze has no {:?} tile", marker as char)))
        };
        let (start, end) = (find(b'S')?, find(b'E')?);
        let mut walls = grid.same_shape(false);
        for (p, &c) in grid.iter() {
            walls[p] = c == b'#';
        }
        Ok(Maze {
            walls,
            start,
            end,
            routes: None,
        })
    }
}

impl Maze {
    fn open(&self, p: Point) -> bool {
        self.walls.get(p).is_some_and(|&wall| !wall)
    }

    /// Lowest score to reach every `(tile, heading)` from the start facing east
    fn scores(&self) -> Grid<[u64; 4]> {
        let mut dist = self.walls.same_shape([u64::MAX; 4]);
        let mut queue = BinaryHeap::new();
        dist[self.start][Direction::Right.index()] = 0;
        queue.push(Reverse((0, self.start, Direction::Right)));

        while let Some(Reverse((cost, p, facing))) = queue.pop() {
            if cost > dist[p][facing.index()] {
                continue;
            }
            let forward = p + facing.delta();
            let moves = [
                (forward, facing, cost + STEP_COST),
                (p, facing.turn_left(), cost + TURN_COST),
                (p, facing.turn_right(), cost + TURN_COST),
            ];
            for (next, heading, next_cost) in moves {
                if self.open(next) && next_cost < dist[next][heading.index()] {
                    dist[next][heading.index()] = next_cost;
                    queue.push(Reverse((next_cost, next, heading)));
                }
            }
        }
        dist
    }

    fn routes(&mut self) -> Result<Routes, SolveError> {
        if let Some(routes) = self.routes {
            return Ok(routes);
        }

        let dist = self.scores();
        let best = dist[self.end].iter().copied().min().unwrap_or(u64::MAX);
        if best == u64::MAX {
            return Err(SolveError::NoSolution("end tile is unreachable".into()));
        }

        // Walk back along every move that was tight in the forward search
        let mut on_route = self.walls.same_shape([false; 4]);
        let mut stack: Vec<(Point, Direction)> = Direction::ALL
            .into_iter()
            .filter(|d| dist[self.end][d.index()] == best)
            .map(|d| (self.end, d))
            .collect();
        while let Some((p, facing)) = stack.pop() {
            if std::mem::replace(&mut on_route[p][facing.index()], true) {
                continue;
            }
            let cost = dist[p][facing.index()];
            let back = p - facing.delta();
            let previous = [
                (back, facing, STEP_COST),
                (p, facing.turn_right(), TURN_COST),
                (p, facing.turn_left(), TURN_COST),
            ];
            for (prev, heading, step) in previous {
                if self.open(prev)
                    && cost >= step
                    && dist[prev][heading.index()] == cost - step
                {
                    stack.push((prev, heading));
                }
            }
        }

        let tiles = on_route.iter().filter(|(_, h)| h.contains(&true)).count();
        let routes = Routes { best, tiles };
        self.routes = Some(routes);
        Ok(routes)
    }
}

impl PartSolver<1> for Solver {
    fn solve(maze: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(maze.routes()?.best.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(maze: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(maze.routes()?.tiles.to_string())
    }
}
