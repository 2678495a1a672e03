use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::{Grid, Point};
use crate::utils::input::invalid;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 4, tags = ["grid"], expect = [2557, 1854], example = [18, 9])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Grid<u8>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Grid::parse(input).map_err(invalid)
    }
}

/// Whether `word` is spelled from `start` stepping by `step`
fn spells(grid: &Grid<u8>, start: Point, step: Point, word: &[u8]) -> bool {
    word.iter()
        .enumerate()
        .all(|(i, &c)| grid.get(start + step * i as i64) == Some(&c))
}

impl PartSolver<1> for Solver {
    fn solve(grid: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let grid = &*grid;
        let steps: Vec<Point> = (-1..=1)
            .flat_map(|dr| (-1..=1).map(move |dc| Point::new(dr, dc)))
            .filter(|&step| step != Point::default())
            .collect();

        let count = grid
            .points()
            .filter(|&p| grid[p] == b'X')
            .map(|p| steps.iter().filter(|&&step| spells(grid, p, step, b"XMAS")).count())
            .sum::<usize>();
        Ok(count.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(grid: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let grid = &*grid;
        let diagonal = |p: Point, step: Point| {
            spells(grid, p - step, step, b"MAS") || spells(grid, p - step, step, b"SAM")
        };

        let count = grid
            .points()
            .filter(|&p| grid[p] == b'A')
            .filter(|&p| diagonal(p, Point::new(1, 1)) && diagonal(p, Point::new(1, -1)))
            .count();
        Ok(count.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "\
MMMSXXMASM
MSAMXMSMSA
AMXSXMAAMM
MSAMASMSMX
XMASAMXAMM
XXAMMXXAMA
SMSMSASXSS
SAXAMASAAA
MAMMMXMMMM
MXMXAXMASX
";

    #[test]
    fn test_example() {
        let mut grid = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut grid, 1).unwrap(), "18");
        assert_eq!(Solver::solve_part(&mut grid, 2).unwrap(), "9");
    }

    #[test]
    fn test_word_at_edges() {
        let mut grid = Solver::parse("SAMX\n....\n").unwrap();
        assert_eq!(Solver::solve_part(&mut grid, 1).unwrap(), "1");
    }
}
