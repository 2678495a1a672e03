use std::collections::HashSet;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::{Grid, Point};
use crate::utils::input::invalid;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 10, tags = ["grid", "search"], expect = [778, 1925], example = [36, 81])]
pub struct Solver;

/// Heights 0 to 9; anything else in the input becomes impassable
#[derive(Debug)]
pub struct TopoMap {
    heights: Grid<u8>,
}

const IMPASSABLE: u8 = u8::MAX;

impl AocParser for Solver {
    type SharedData<'a> = TopoMap;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let raw = Grid::parse(input).map_err(invalid)?;
        let mut heights = raw.same_shape(IMPASSABLE);
        for (p, &c) in raw.iter() {
            if c.is_ascii_digit() {
                heights[p] = c - b'0';
            }
        }
        Ok(TopoMap { heights })
    }
}

impl TopoMap {
    fn trailheads(&self) -> impl Iterator<Item = Point> + '_ {
        self.heights.iter().filter(|&(_, &h)| h == 0).map(|(p, _)| p)
    }

    /// Walk every uphill path from `p`, recording the peaks reached; returns
    /// the number of distinct paths.
    fn climb(&self, p: Point, peaks: &mut HashSet<Point>) -> usize {
        let height = self.heights[p];
        if height == 9 {
            peaks.insert(p);
            return 1;
        }
        self.heights
            .neighbors(p)
            .filter(|&n| self.heights[n] == height + 1)
            .map(|n| self.climb(n, peaks))
            .sum()
    }
}

impl PartSolver<1> for Solver {
    fn solve(map: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let score: usize = map
            .trailheads()
            .map(|head| {
                let mut peaks = HashSet::new();
                map.climb(head, &mut peaks);
                peaks.len()
            })
            .sum();
        Ok(score.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(map: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let rating: usize = map
            .trailheads()
            .map(|head| map.climb(head, &mut HashSet::new()))
            .sum();
        Ok(rating.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "\
89010123
78121874
87430965
96549874
45678903
32019012
01329801
10456732
";

    #[test]
    fn test_example() {
        let mut map = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut map, 1).unwrap(), "36");
        assert_eq!(Solver::solve_part(&mut map, 2).unwrap(), "81");
    }

    #[test]
    fn test_impassable_cells() {
        let mut map = Solver::parse("...0...\n...1...\n...2...\n6543456\n7.....7\n8.....8\n9.....9\n")
            .unwrap();
        assert_eq!(Solver::solve_part(&mut map, 1).unwrap(), "2");
        assert_eq!(Solver::solve_part(&mut map, 2).unwrap(), "2");
    }
}
