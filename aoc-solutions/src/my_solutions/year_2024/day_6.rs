use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use rayon::prelude::*;

use crate::utils::grid::{Direction, Grid, Point};
use crate::utils::input::invalid;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 6, tags = ["grid", "simulation"], expect = [4696, 1443], example = [41, 6])]
pub struct Solver;

#[derive(Debug)]
pub struct Lab {
    obstacles: Grid<bool>,
    start: Point,
    facing: Direction,
    /// Cells on the unobstructed patrol, filled by the first part that needs them
    patrol: Option<Vec<Point>>,
}

impl AocParser for Solver {
    type SharedData<'a> = Lab;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let grid = Grid::parse(input).map_err(invalid)?;
        let (start, facing) = grid
            .iter()
            .find_map(|(p, &c)| Direction::from_arrow(c).map(|d| (p, d)))
            .ok_or_else(|| invalid(anyhow!("no guard on the map")))?;

        let mut obstacles = grid.same_shape(false);
        for (p, &c) in grid.iter() {
            obstacles[p] = c == b'#';
        }

        Ok(Lab {
            obstacles,
            start,
            facing,
            patrol: None,
        })
    }
}

impl Lab {
    fn blocked(&self, p: Point, extra: Option<Point>) -> bool {
        extra == Some(p) || self.obstacles.get(p).copied().unwrap_or(false)
    }

    /// Distinct cells visited before the guard walks off the map
    fn patrol(&mut self) -> &[Point] {
        if self.patrol.is_none() {
            let mut seen = self.obstacles.same_shape(false);
            let mut cells = Vec::new();
            let (mut pos, mut facing) = (self.start, self.facing);
            while self.obstacles.contains(pos) {
                if !seen[pos] {
                    seen[pos] = true;
                    cells.push(pos);
                }
                let next = pos + facing.delta();
                if self.blocked(next, None) {
                    facing = facing.turn_right();
                } else {
                    pos = next;
                }
            }
            self.patrol = Some(cells);
        }
        self.patrol.as_deref().unwrap_or_default()
    }

    /// Whether an extra obstruction at `extra` traps the guard in a loop.
    ///
    /// Only turns are recorded; revisiting a turn with the same heading
    /// means the path repeats.
    fn loops_with(&self, extra: Point) -> bool {
        let mut turns = self.obstacles.same_shape(0u8);
        let (mut pos, mut facing) = (self.start, self.facing);
        loop {
            let next = pos + facing.delta();
            if !self.obstacles.contains(next) {
                return false;
            }
            if self.blocked(next, Some(extra)) {
                let mark = 1 << facing.index();
                if turns[pos] & mark != 0 {
                    return true;
                }
                turns[pos] |= mark;
                facing = facing.turn_right();
            } else {
                pos = next;
            }
        }
    }
}

impl PartSolver<1> for Solver {
    fn solve(lab: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(lab.patrol().len().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(lab: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let start = lab.start;
        let candidates: Vec<Point> = lab
            .patrol()
            .iter()
            .copied()
            .filter(|&p| p != start)
            .collect();
        let lab = &*lab;
        let loops = candidates
            .par_iter()
            .filter(|&&p| lab.loops_with(p))
            .count();
        Ok(loops.to_string())
    }
}
