use std::collections::HashMap;

use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::input::parse_lines;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 1, tags = ["lists"], expect = [2344935, 27647262], example = [11, 31])]
pub struct Solver;

/// Both location lists, each sorted ascending
#[derive(Debug)]
pub struct Lists {
    left: Vec<i64>,
    right: Vec<i64>,
}

impl AocParser for Solver {
    type SharedData<'a> = Lists;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let pairs = parse_lines(input, |line| {
            let mut ids = line.split_whitespace();
            let (Some(a), Some(b), None) = (ids.next(), ids.next(), ids.next()) else {
                return Err(anyhow!("expected two location ids"));
            };
            Ok((
                a.parse::<i64>().with_context(|| format!("bad id {a:?}"))?,
                b.parse::<i64>().with_context(|| format!("bad id {b:?}"))?,
            ))
        })?;

        let (mut left, mut right): (Vec<_>, Vec<_>) = pairs.into_iter().unzip();
        left.sort_unstable();
        right.sort_unstable();
        Ok(Lists { left, right })
    }
}

impl PartSolver<1> for Solver {
    fn solve(lists: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let distance: i64 = lists
            .left
            .iter()
            .zip(&lists.right)
            .map(|(a, b)| (a - b).abs())
            .sum();
        Ok(distance.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(lists: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut occurrences: HashMap<i64, i64> = HashMap::new();
        for &id in &lists.right {
            *occurrences.entry(id).or_default() += 1;
        }
        let similarity: i64 = lists
            .left
            .iter()
            .map(|id| id * occurrences.get(id).copied().unwrap_or(0))
            .sum();
        Ok(similarity.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "\
3   4
4   3
2   5
1   3
3   9
3   3
";

    #[test]
    fn test_example() {
        let mut lists = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut lists, 1).unwrap(), "11");
        assert_eq!(Solver::solve_part(&mut lists, 2).unwrap(), "31");
    }

    #[test]
    fn test_rejects_three_columns() {
        let err = Solver::parse("1 2\n3 4 5\n").unwrap_err();
        assert!(err.to_string().contains("line 2"), "{err}");
    }
}
