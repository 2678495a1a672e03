use std::collections::{HashMap, HashSet};

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

use crate::utils::grid::{Grid, Point};
use crate::utils::input::invalid;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc(year = 2024, day = 8, tags = ["grid", "geometry"], expect = [394, 1277], example = [14, 34])]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

#[derive(Debug)]
pub struct Roof {
    map: Grid<u8>,
    antennas: HashMap<u8, Vec<Point>>,
}

impl AocParser for Solver {
    type SharedData<'a> = Roof;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let map = Grid::parse(input).map_err(invalid)?;
        let mut antennas: HashMap<u8, Vec<Point>> = HashMap::new();
        for (p, &c) in map.iter() {
            if c != b'.' {
                antennas.entry(c).or_default().push(p);
            }
        }
        Ok(Roof { map, antennas })
    }
}

impl Roof {
    /// Distinct in-bounds antinodes; `harmonics` extends each pair's line to the map edge
    fn antinodes(&self, harmonics: bool) -> usize {
        let mut found = HashSet::new();
        for points in self.antennas.values() {
            for (&a, &b) in points.iter().tuple_combinations() {
                let step = a - b;
                for (origin, delta) in [(a, step), (b, step * -1)] {
                    if harmonics {
                        let mut p = origin;
                        while self.map.contains(p) {
                            found.insert(p);
                            p += delta;
                        }
                    } else if self.map.contains(origin + delta) {
                        found.insert(origin + delta);
                    }
                }
            }
        }
        found.len()
    }
}

impl PartSolver<1> for Solver {
    fn solve(roof: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(roof.antinodes(false).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(roof: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(roof.antinodes(true).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "\
............
........0...
.....0......
.......0....
....0.......
......A.....
............
............
........A...
.........A..
............
............
";

    #[test]
    fn test_example() {
        let mut roof = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut roof, 1).unwrap(), "14");
        assert_eq!(Solver::solve_part(&mut roof, 2).unwrap(), "34");
    }

    #[test]
    fn test_harmonics_include_antennas() {
        let mut roof = Solver::parse("T....\n.....\n.T...\n.....\n.....\n").unwrap();
        assert_eq!(Solver::solve_part(&mut roof, 1).unwrap(), "1");
        assert_eq!(Solver::solve_part(&mut roof, 2).unwrap(), "3");
    }
}
