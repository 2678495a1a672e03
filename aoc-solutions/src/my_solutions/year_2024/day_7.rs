use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use rayon::prelude::*;

use crate::utils::input::parse_lines;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 7, tags = ["search"], expect = [882304362421, 145149066755184], example = [3749, 11387])]
pub struct Solver;

#[derive(Debug)]
pub struct Equation {
    target: u64,
    numbers: Vec<u64>,
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Equation>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse_lines(input, |line| {
            let (target, rest) = line
                .split_once(':')
                .ok_or_else(|| anyhow!("expected `target: numbers`"))?;
            let target = target.trim().parse().context("bad target")?;
            let numbers = rest
                .split_whitespace()
                .map(|n| n.parse().with_context(|| format!("bad operand {n:?}")))
                .collect::<anyhow::Result<Vec<u64>>>()?;
            if numbers.is_empty() {
                return Err(anyhow!("equation has no operands"));
            }
            Ok(Equation { target, numbers })
        })
    }
}

/// `target` with the decimal digits of `suffix` removed from its end
fn strip_digits(target: u64, suffix: u64) -> Option<u64> {
    let mut scale = 10;
    while scale <= suffix {
        scale *= 10;
    }
    (target % scale == suffix).then_some(target / scale)
}

/// Works backwards from the last operand, undoing each operator.
///
/// Evaluation is strictly left to right, so the last operator applied is
/// always the one between the final two operands.
fn solvable(target: u64, numbers: &[u64], concat: bool) -> bool {
    match numbers {
        [] => false,
        [only] => *only == target,
        [rest @ .., last] => {
            let last = *last;
            (target >= last && solvable(target - last, rest, concat))
                || (last != 0 && target % last == 0 && solvable(target / last, rest, concat))
                || (concat
                    && strip_digits(target, last).is_some_and(|t| solvable(t, rest, concat)))
        }
    }
}

fn calibration(equations: &[Equation], concat: bool) -> u64 {
    equations
        .par_iter()
        .filter(|eq| solvable(eq.target, &eq.numbers, concat))
        .map(|eq| eq.target)
        .sum()
}

impl PartSolver<1> for Solver {
    fn solve(equations: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(calibration(equations, false).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(equations: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(calibration(equations, true).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "\
190: 10 19
3267: 81 40 27
83: 17 5
156: 15 6
7290: 6 8 6 15
161011: 16 10 13
192: 17 8 14
21037: 9 7 18 13
292: 11 6 16 20
";

    #[test]
    fn test_example() {
        let mut equations = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut equations, 1).unwrap(), "3749");
        assert_eq!(Solver::solve_part(&mut equations, 2).unwrap(), "11387");
    }

    #[test]
    fn test_strip_digits() {
        assert_eq!(strip_digits(156, 6), Some(15));
        assert_eq!(strip_digits(1510, 10), Some(15));
        assert_eq!(strip_digits(156, 56), Some(1));
        assert_eq!(strip_digits(156, 7), None);
    }

    #[test]
    fn test_single_operand() {
        assert!(solvable(5, &[5], false));
        assert!(!solvable(5, &[4], true));
    }

    #[test]
    fn test_missing_colon() {
        let err = Solver::parse("190 10 19\n").unwrap_err();
        assert!(err.to_string().contains("line 1"), "{err}");
    }
}
