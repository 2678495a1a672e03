use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::{Direction, Grid, Point};
use crate::utils::input::invalid;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 12, tags = ["grid", "flood-fill"], expect = [1363682, 787680], example = [1930, 1206])]
pub struct Solver;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    area: usize,
    perimeter: usize,
    /// A polygon has as many sides as corners
    corners: usize,
}

#[derive(Debug)]
pub struct Garden {
    plots: Grid<u8>,
    regions: Option<Vec<Region>>,
}

impl AocParser for Solver {
    type SharedData<'a> = Garden;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let plots = Grid::parse(input).map_err(invalid)?;
        Ok(Garden {
            plots,
            regions: None,
        })
    }
}

impl Garden {
    fn same(&self, p: Point, plant: u8) -> bool {
        self.plots.get(p) == Some(&plant)
    }

    fn corners_at(&self, p: Point, plant: u8) -> usize {
        Direction::ALL
            .into_iter()
            .filter(|&d| {
                let a = self.same(p + d.delta(), plant);
                let b = self.same(p + d.turn_right().delta(), plant);
                let diagonal = self.same(p + d.delta() + d.turn_right().delta(), plant);
                (!a && !b) || (a && b && !diagonal)
            })
            .count()
    }

    fn regions(&mut self) -> &[Region] {
        if self.regions.is_none() {
            let mut seen = self.plots.same_shape(false);
            let mut regions = Vec::new();
            for start in self.plots.points() {
                if seen[start] {
                    continue;
                }
                let plant = self.plots[start];
                let mut region = Region::default();
                let mut stack = vec![start];
                seen[start] = true;
                while let Some(p) = stack.pop() {
                    region.area += 1;
                    region.corners += self.corners_at(p, plant);
                    for n in p.neighbors() {
                        if !self.same(n, plant) {
                            region.perimeter += 1;
                        } else if !seen[n] {
                            seen[n] = true;
                            stack.push(n);
                        }
                    }
                }
                regions.push(region);
            }
            self.regions = Some(regions);
        }
        self.regions.as_deref().unwrap_or_default()
    }
}

impl PartSolver<1> for Solver {
    fn solve(garden: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let price: usize = garden
            .regions()
            .iter()
            .map(|r| r.area * r.perimeter)
            .sum();
        Ok(price.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(garden: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let price: usize = garden.regions().iter().map(|r| r.area * r.corners).sum();
        Ok(price.to_string())
    }
}
