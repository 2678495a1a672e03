use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 3, tags = ["parsing"], expect = [174960292, 56275602], example = [161, 48])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Mul(u64, u64),
    Do,
    Dont,
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Instruction>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let pattern = Regex::new(r"mul\((\d{1,3}),(\d{1,3})\)|do\(\)|don't\(\)")
            .map_err(|e| ParseError::Other(e.to_string()))?;

        pattern
            .captures_iter(input)
            .map(|caps| match &caps[0] {
                "do()" => Ok(Instruction::Do),
                "don't()" => Ok(Instruction::Dont),
                _ => {
                    let operand = |i: usize| {
                        caps[i]
                            .parse::<u64>()
                            .map_err(|e| ParseError::InvalidFormat(format!("{}: {e}", &caps[0])))
                    };
                    Ok(Instruction::Mul(operand(1)?, operand(2)?))
                }
            })
            .collect()
    }
}

fn run(program: &[Instruction], honour_switches: bool) -> u64 {
    let mut enabled = true;
    let mut total = 0;
    for instruction in program {
        match *instruction {
            Instruction::Do => enabled = true,
            Instruction::Dont => enabled = !honour_switches,
            Instruction::Mul(a, b) if enabled => total += a * b,
            Instruction::Mul(..) => {}
        }
    }
    total
}

impl PartSolver<1> for Solver {
    fn solve(program: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(run(program, false).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(program: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(run(program, true).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE_1: &str = "xmul(2,4)%&mul[3,7]!@^do_not_mul(5,5)+mul(32,64]then(mul(11,8)mul(8,5))";
    const EXAMPLE_2: &str = "xmul(2,4)&mul[3,7]!^don't()_mul(5,5)+mul(32,64](mul(11,8)undo()?mul(8,5))";

    #[test]
    fn test_examples() {
        let mut memory = Solver::parse(EXAMPLE_1).unwrap();
        assert_eq!(Solver::solve_part(&mut memory, 1).unwrap(), "161");

        let mut memory = Solver::parse(EXAMPLE_2).unwrap();
        assert_eq!(Solver::solve_part(&mut memory, 2).unwrap(), "48");
    }

    #[test]
    fn test_operands_limited_to_three_digits() {
        let memory = Solver::parse("mul(1234,2)mul(123,2)").unwrap();
        assert_eq!(memory, vec![Instruction::Mul(123, 2)]);
    }
}
