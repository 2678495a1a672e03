use std::collections::VecDeque;

use anyhow::bail;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::{Grid, Point};
use crate::utils::input::{numbers, parse_lines};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 18, tags = ["grid", "bfs", "binary-search"], expect = [310, "16,46"], example = [22, "6,1"])]
pub struct Solver;

/// `(side length, bytes fallen before part 1 starts walking)`
const FULL_SPACE: (usize, usize) = (71, 1024);
const EXAMPLE_SPACE: (usize, usize) = (7, 12);

#[derive(Debug)]
pub struct MemorySpace {
    size: usize,
    fallen: usize,
    /// Falling bytes in order, as `(x, y)`
    bytes: Vec<(i64, i64)>,
}

impl AocParser for Solver {
    type SharedData<'a> = MemorySpace;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let bytes = parse_lines(input, |line| match numbers::<i64>(line)?[..] {
            [x, y] if x >= 0 && y >= 0 => Ok((x, y)),
            _ => bail!("expected `x,y` with non-negative coordinates"),
        })?;

        let small = bytes
            .iter()
            .all(|&(x, y)| x < EXAMPLE_SPACE.0 as i64 && y < EXAMPLE_SPACE.0 as i64);
        let (size, fallen) = if small { EXAMPLE_SPACE } else { FULL_SPACE };
        if let Some((x, y)) = bytes
            .iter()
            .find(|&&(x, y)| x >= size as i64 || y >= size as i64)
        {
            return Err(ParseError::InvalidFormat(format!(
                "byte {x},{y} lies outside the {size}x{size} space"
            )));
        }

        Ok(MemorySpace {
            size,
            fallen: fallen.min(bytes.len()),
            bytes,
        })
    }
}

impl MemorySpace {
    /// Fewest steps from the top-left to the bottom-right corner once
    /// `count` bytes have fallen
    fn shortest_path(&self, count: usize) -> Option<usize> {
        let mut corrupted = Grid::new(self.size, self.size, false);
        for &(x, y) in &self.bytes[..count] {
            corrupted[Point::new(y, x)] = true;
        }

        let start = Point::new(0, 0);
        let goal = Point::new(self.size as i64 - 1, self.size as i64 - 1);
        let mut steps = corrupted.same_shape(None);
        steps[start] = Some(0);
        let mut queue = VecDeque::from([start]);
        while let Some(p) = queue.pop_front() {
            let here = steps[p]?;
            if p == goal {
                return Some(here);
            }
            for n in corrupted.neighbors(p) {
                if !corrupted[n] && steps[n].is_none() {
                    steps[n] = Some(here + 1);
                    queue.push_back(n);
                }
            }
        }
        None
    }
}

impl PartSolver<1> for Solver {
    fn solve(space: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        space
            .shortest_path(space.fallen)
            .map(|steps| steps.to_string())
            .ok_or_else(|| SolveError::NoSolution("exit is already cut off".into()))
    }
}

impl PartSolver<2> for Solver {
    fn solve(space: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        // Reachability only gets worse as bytes fall, so binary search the count
        let counts: Vec<usize> = (0..=space.bytes.len()).collect();
        let blocked_at = counts.partition_point(|&n| space.shortest_path(n).is_some());
        match blocked_at.checked_sub(1).and_then(|i| space.bytes.get(i)) {
            Some((x, y)) => Ok(format!("{x},{y}")),
            None => Err(SolveError::NoSolution("no byte cuts off the exit".into())),
        }
    }
}
