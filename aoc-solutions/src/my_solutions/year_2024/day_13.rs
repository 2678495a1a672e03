use anyhow::{anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::input::{invalid, numbers};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 13, tags = ["math"], expect = [36954, 79352015273424], example = [480, 875318608908])]
pub struct Solver;

const PRIZE_OFFSET: i64 = 10_000_000_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Machine {
    a: (i64, i64),
    b: (i64, i64),
    prize: (i64, i64),
}

impl Machine {
    /// Tokens for the unique whole-press solution, if there is one.
    ///
    /// Solves the 2x2 system with Cramer's rule in integers, so a
    /// non-divisible numerator means no exact solution exists.
    fn cost(&self, offset: i64) -> Option<i64> {
        let (px, py) = (self.prize.0 + offset, self.prize.1 + offset);
        let det = self.a.0 * self.b.1 - self.a.1 * self.b.0;
        if det == 0 {
            return None;
        }
        let a = px * self.b.1 - py * self.b.0;
        let b = self.a.0 * py - self.a.1 * px;
        if a % det != 0 || b % det != 0 {
            return None;
        }
        let (a, b) = (a / det, b / det);
        (a >= 0 && b >= 0).then_some(3 * a + b)
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Machine>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let lines: Vec<&str> = input.lines().filter(|l| !l.trim().is_empty()).collect();
        let chunks = lines.chunks_exact(3);
        if !chunks.remainder().is_empty() {
            return Err(invalid(anyhow!(
                "expected blocks of three lines, {} left over",
                chunks.remainder().len()
            )));
        }
        chunks
            .enumerate()
            .map(|(i, block)| {
                let pair = |line: &str| -> anyhow::Result<(i64, i64)> {
                    match numbers::<i64>(line)?[..] {
                        [x, y] => Ok((x, y)),
                        _ => bail!("(machine {}) expected two numbers in {line:?}", i + 1),
                    }
                };
                Ok(Machine {
                    a: pair(block[0])?,
                    b: pair(block[1])?,
                    prize: pair(block[2])?,
                })
            })
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(invalid)
    }
}

fn total_cost(machines: &[Machine], offset: i64) -> i64 {
    machines.iter().filter_map(|m| m.cost(offset)).sum()
}

impl PartSolver<1> for Solver {
    fn solve(machines: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(total_cost(machines, 0).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(machines: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(total_cost(machines, PRIZE_OFFSET).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "\
Button A: X+94, Y+34
Button B: X+22, Y+67
Prize: X=8400, Y=5400

Button A: X+26, Y+66
Button B: X+67, Y+21
Prize: X=12748, Y=12176

Button A: X+17, Y+86
Button B: X+84, Y+37
Prize: X=7870, Y=6450

Button A: X+69, Y+23
Button B: X+27, Y+71
Prize: X=18641, Y=10279
";

    #[test]
    fn test_example() {
        let mut machines = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(machines.len(), 4);
        assert_eq!(Solver::solve_part(&mut machines, 1).unwrap(), "480");
        assert_eq!(Solver::solve_part(&mut machines, 2).unwrap(), "875318608908");
    }

    #[test]
    fn test_single_machine_costs() {
        let machines = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(machines[0].cost(0), Some(280));
        assert_eq!(machines[1].cost(0), None);
        assert!(machines[1].cost(PRIZE_OFFSET).is_some());
    }

    #[test]
    fn test_truncated_block() {
        assert!(Solver::parse("Button A: X+1, Y+2\nButton B: X+3, Y+4\n").is_err());
    }
}
