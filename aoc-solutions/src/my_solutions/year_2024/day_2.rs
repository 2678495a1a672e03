use anyhow::Context;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

use crate::utils::input::parse_lines;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 2, tags = ["lists"], expect = [686, 717], example = [2, 4])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<Vec<i32>>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse_lines(input, |line| {
            line.split_whitespace()
                .map(|level| level.parse().with_context(|| format!("bad level {level:?}")))
                .collect()
        })
    }
}

/// Strictly increasing or decreasing, with every step between 1 and 3
fn is_safe(report: impl Iterator<Item = i32>) -> bool {
    let mut increasing = false;
    let mut decreasing = false;
    for (a, b) in report.tuple_windows() {
        if !(1..=3).contains(&(a - b).abs()) {
            return false;
        }
        if a < b {
            increasing = true;
        } else {
            decreasing = true;
        }
    }
    increasing ^ decreasing
}

fn is_safe_dampened(report: &[i32]) -> bool {
    is_safe(report.iter().copied())
        || (0..report.len()).any(|skip| {
            is_safe(
                report
                    .iter()
                    .enumerate()
                    .filter(|&(i, _)| i != skip)
                    .map(|(_, &level)| level),
            )
        })
}

impl PartSolver<1> for Solver {
    fn solve(reports: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let safe = reports
            .iter()
            .filter(|r| is_safe(r.iter().copied()))
            .count();
        Ok(safe.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(reports: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let safe = reports.iter().filter(|r| is_safe_dampened(r)).count();
        Ok(safe.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "\
7 6 4 2 1
1 2 7 8 9
9 7 6 2 1
1 3 2 4 5
8 6 4 4 1
1 3 6 7 9
";

    #[test]
    fn test_example() {
        let mut reports = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut reports, 1).unwrap(), "2");
        assert_eq!(Solver::solve_part(&mut reports, 2).unwrap(), "4");
    }

    #[test]
    fn test_safety_rules() {
        assert!(is_safe([1, 2, 5].into_iter()));
        assert!(!is_safe([1, 5].into_iter()));
        assert!(!is_safe([3, 3].into_iter()));
        assert!(!is_safe([7].into_iter()));
        assert!(is_safe_dampened(&[1, 9, 2, 3]));
        assert!(is_safe_dampened(&[9, 1, 2, 3]));
        assert!(!is_safe_dampened(&[1, 9, 2, 10]));
    }
}
