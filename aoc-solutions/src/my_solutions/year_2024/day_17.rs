use anyhow::{anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

use crate::utils::input::{invalid, numbers};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 17, tags = ["vm", "reverse-engineering"], expect = ["6,5,7,4,5,7,3,1,0", 105875099912602], example = ["5,7,3,0", 117440])]
pub struct Solver;

/// Guards against programs that never halt
const MAX_STEPS: usize = 1_000_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Computer {
    a: u64,
    b: u64,
    c: u64,
    program: Vec<u8>,
}

impl AocParser for Solver {
    type SharedData<'a> = Computer;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let parse = || -> anyhow::Result<Computer> {
            let mut lines = input.lines().filter(|l| !l.trim().is_empty());
            let mut register = |name: &str| -> anyhow::Result<u64> {
                let line = lines
                    .next()
                    .ok_or_else(|| anyhow!("missing register {name}"))?;
                match numbers::<u64>(line)?[..] {
                    [value] if line.starts_with(&format!("Register {name}")) => Ok(value),
                    _ => bail!("expected `Register {name}: <value>`, found {line:?}"),
                }
            };
            let (a, b, c) = (register("A")?, register("B")?, register("C")?);
            let program = lines
                .next()
                .and_then(|l| l.strip_prefix("Program:"))
                .ok_or_else(|| anyhow!("missing program"))?;
            let program = numbers::<u8>(program)?;
            if let Some(bad) = program.iter().find(|&&op| op > 7) {
                bail!("{bad} is not a 3-bit value");
            }
            Ok(Computer { a, b, c, program })
        };
        parse().map_err(invalid)
    }
}

impl Computer {
    fn combo(&self, operand: u8) -> Result<u64, SolveError> {
        match operand {
            0..=3 => Ok(u64::from(operand)),
            4 => Ok(self.a),
            5 => Ok(self.b),
            6 => Ok(self.c),
            _ => Err(SolveError::failed(format!("invalid combo operand {operand}"))),
        }
    }

    /// `A >> combo(operand)`, where shifting out every bit leaves zero
    fn divide(&self, operand: u8) -> Result<u64, SolveError> {
        let shift = self.combo(operand)?;
        Ok(u32::try_from(shift)
            .ok()
            .and_then(|s| self.a.checked_shr(s))
            .unwrap_or(0))
    }

    /// Run until the instruction pointer leaves the program
    fn run(&mut self) -> Result<Vec<u8>, SolveError> {
        let mut out = Vec::new();
        let mut ip = 0;
        for _ in 0..MAX_STEPS {
            let (Some(&opcode), Some(&operand)) = (self.program.get(ip), self.program.get(ip + 1))
            else {
                return Ok(out);
            };
            ip += 2;
            match opcode {
                0 => self.a = self.divide(operand)?,
                1 => self.b ^= u64::from(operand),
                2 => self.b = self.combo(operand)? % 8,
                3 if self.a != 0 => ip = usize::from(operand),
                3 => {}
                4 => self.b ^= self.c,
                5 => out.push((self.combo(operand)? % 8) as u8),
                6 => self.b = self.divide(operand)?,
                7 => self.c = self.divide(operand)?,
                _ => return Err(SolveError::failed(format!("invalid opcode {opcode}"))),
            }
        }
        Err(SolveError::failed(format!("program did not halt within {MAX_STEPS} steps")))
    }

    fn output_for(&self, a: u64) -> Result<Vec<u8>, SolveError> {
        let mut computer = self.clone();
        computer.a = a;
        computer.run()
    }

    /// Smallest register A value that makes the program print itself.
    ///
    /// The program is assumed to consume three bits of A per output and
    /// loop until A is zero, so A is built three bits at a time from the
    /// last output backwards.
    fn quine_seed(&self) -> Result<Option<u64>, SolveError> {
        let mut candidates = vec![0u64];
        for start in (0..self.program.len()).rev() {
            let wanted = &self.program[start..];
            let mut next = Vec::new();
            for &prefix in &candidates {
                for bits in 0..8 {
                    let a = prefix << 3 | bits;
                    if self.output_for(a)? == wanted {
                        next.push(a);
                    }
                }
            }
            candidates = next;
        }
        Ok(candidates.into_iter().filter(|&a| a != 0).min())
    }
}

impl PartSolver<1> for Solver {
    fn solve(computer: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let out = computer.clone().run()?;
        Ok(out.iter().join(","))
    }
}

impl PartSolver<2> for Solver {
    fn solve(computer: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        computer
            .quine_seed()?
            .map(|a| a.to_string())
            .ok_or_else(|| SolveError::NoSolution("no register A value reproduces the program".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "\
Register A: 729
Register B: 0
Register C: 0

Program: 0,1,5,4,3,0
";

    fn computer(a: u64, b: u64, c: u64, program: &[u8]) -> Computer {
        Computer {
            a,
            b,
            c,
            program: program.to_vec(),
        }
    }

    #[test]
    fn test_example() {
        let mut computer = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(
            Solver::solve_part(&mut computer, 1).unwrap(),
            "4,6,3,5,6,3,5,2,1,0"
        );
    }

    #[test]
    fn test_instructions() {
        let mut c = computer(0, 0, 9, &[2, 6]);
        c.run().unwrap();
        assert_eq!(c.b, 1);

        assert_eq!(computer(10, 0, 0, &[5, 0, 5, 1, 5, 4]).run().unwrap(), vec![0, 1, 2]);

        let mut c = computer(2024, 0, 0, &[0, 1, 5, 4, 3, 0]);
        assert_eq!(c.run().unwrap(), vec![4, 2, 5, 6, 7, 7, 7, 7, 3, 1, 0]);
        assert_eq!(c.a, 0);

        let mut c = computer(0, 29, 0, &[1, 7]);
        c.run().unwrap();
        assert_eq!(c.b, 26);

        let mut c = computer(0, 2024, 43690, &[4, 0]);
        c.run().unwrap();
        assert_eq!(c.b, 44354);
    }

    #[test]
    fn test_quine() {
        let mut computer = Solver::parse(
            "Register A: 2024\nRegister B: 0\nRegister C: 0\n\nProgram: 0,3,5,4,3,0\n",
        )
        .unwrap();
        assert_eq!(Solver::solve_part(&mut computer, 1).unwrap(), "5,7,3,0");
        assert_eq!(Solver::solve_part(&mut computer, 2).unwrap(), "117440");
    }

    #[test]
    fn test_endless_program_fails() {
        let mut c = computer(1, 0, 0, &[3, 0]);
        assert!(matches!(c.run(), Err(SolveError::SolveFailed(_))));
    }

    #[test]
    fn test_rejects_wide_opcode() {
        assert!(Solver::parse("Register A: 1\nRegister B: 0\nRegister C: 0\n\nProgram: 0,8\n").is_err());
    }
}
