use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::dp_cache::{DpCache, VecBackend};
use crate::utils::input::{invalid, sections};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 19, tags = ["dp", "strings"], expect = [300, 624802218898092], example = [6, 16])]
pub struct Solver;

#[derive(Debug)]
pub struct Onsen<'a> {
    towels: Vec<&'a str>,
    designs: Vec<&'a str>,
    /// Arrangement count per design, filled on first use
    ways: Option<Vec<u64>>,
}

impl AocParser for Solver {
    type SharedData<'a> = Onsen<'a>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let (towels, designs) = sections(input).map_err(invalid)?;
        let towels: Vec<&str> = towels
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect();
        if towels.is_empty() {
            return Err(invalid(anyhow!("no towel patterns")));
        }
        let designs = designs
            .lines()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .collect();
        Ok(Onsen {
            towels,
            designs,
            ways: None,
        })
    }
}

/// Number of towel sequences that spell out `design` exactly
fn arrangements(towels: &[&str], design: &str) -> u64 {
    let end = design.len();
    let cache = DpCache::new(
        VecBackend::with_capacity(end + 1),
        |&at: &usize| {
            towels
                .iter()
                .filter(|t| design[at..].starts_with(**t))
                .map(|t| at + t.len())
                .collect()
        },
        |&at: &usize, rest: Vec<u64>| if at == end { 1 } else { rest.iter().sum() },
    );
    cache.get(&0)
}

impl Onsen<'_> {
    fn ways(&mut self) -> &[u64] {
        if self.ways.is_none() {
            let ways = self
                .designs
                .iter()
                .map(|d| arrangements(&self.towels, d))
                .collect();
            self.ways = Some(ways);
        }
        self.ways.as_deref().unwrap_or_default()
    }
}

impl PartSolver<1> for Solver {
    fn solve(onsen: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let possible = onsen.ways().iter().filter(|&&w| w > 0).count();
        Ok(possible.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(onsen: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(onsen.ways().iter().sum::<u64>().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "\
r, wr, b, g, bwu, rb, gb, br

brwrr
bggr
gbbr
rrbgbr
ubwu
bwurrg
brgr
bbrgwb
";

    #[test]
    fn test_example() {
        let mut onsen = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut onsen, 1).unwrap(), "6");
        assert_eq!(Solver::solve_part(&mut onsen, 2).unwrap(), "16");
    }

    #[test]
    fn test_individual_designs() {
        let onsen = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(arrangements(&onsen.towels, "gbbr"), 4);
        assert_eq!(arrangements(&onsen.towels, "rrbgbr"), 6);
        assert_eq!(arrangements(&onsen.towels, "ubwu"), 0);
    }

    #[test]
    fn test_missing_towels() {
        assert!(Solver::parse("\n\nabc\n").is_err());
    }
}
