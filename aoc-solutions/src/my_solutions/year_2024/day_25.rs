use anyhow::{anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

use crate::utils::grid::{Grid, Point};
use crate::utils::input::invalid;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2024, day = 25, tags = ["parsing"], expect = [3065], example = [3])]
pub struct Solver;

/// Column heights of locks and keys, plus the room left between them
#[derive(Debug, Default)]
pub struct Schematics {
    locks: Vec<Vec<usize>>,
    keys: Vec<Vec<usize>>,
    space: usize,
}

impl AocParser for Solver {
    type SharedData<'a> = Schematics;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let mut schematics = Schematics::default();
        let blocks = input
            .lines()
            .map(str::trim_end)
            .chunk_by(|line| line.is_empty());
        for (index, (_, mut block)) in blocks.into_iter().filter(|(blank, _)| !blank).enumerate() {
            let text = block.join("\n");
            let parsed = parse_schematic(&text)
                .map_err(|e| invalid(anyhow!("(schematic {}) {e:#}", index + 1)))?;
            let (is_lock, heights, space) = parsed;
            if schematics.space != 0 && schematics.space != space {
                return Err(invalid(anyhow!(
                    "(schematic {}) height differs from earlier schematics",
                    index + 1
                )));
            }
            schematics.space = space;
            if is_lock {
                schematics.locks.push(heights);
            } else {
                schematics.keys.push(heights);
            }
        }
        Ok(schematics)
    }
}

/// `(is_lock, column heights, usable rows)`
fn parse_schematic(text: &str) -> anyhow::Result<(bool, Vec<usize>, usize)> {
    let grid = Grid::parse(text)?;
    if grid.height() < 2 {
        bail!("too short to be a lock or key");
    }
    let row_filled = |row: usize| grid.rows().nth(row).is_some_and(|r| r.iter().all(|&c| c == b'#'));
    let is_lock = row_filled(0);
    if !is_lock && !row_filled(grid.height() - 1) {
        bail!("neither the top nor the bottom row is solid");
    }
    let heights = (0..grid.width() as i64)
        .map(|col| {
            (0..grid.height() as i64)
                .filter(|&row| grid[Point::new(row, col)] == b'#')
                .count()
                - 1
        })
        .collect();
    Ok((is_lock, heights, grid.height() - 2))
}

impl PartSolver<1> for Solver {
    fn solve(schematics: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let fitting = schematics
            .locks
            .iter()
            .cartesian_product(&schematics.keys)
            .filter(|(lock, key)| lock.iter().zip(key.iter()).all(|(l, k)| l + k <= schematics.space))
            .count();
        Ok(fitting.to_string())
    }
}
