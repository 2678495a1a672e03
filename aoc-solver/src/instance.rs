//! Parsed, timed solver instances behind a type-erased interface

use crate::error::{ParseError, SolveError};
use crate::expect::{Expectations, InputVariant, Verdict, verify};
use crate::solver::{Solver, SolverExt};
use chrono::{DateTime, TimeDelta, Utc};

/// Result from solving a puzzle part, including timing information
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// The answer string
    pub answer: String,
    /// When solving started (UTC)
    pub solve_start: DateTime<Utc>,
    /// When solving completed (UTC)
    pub solve_end: DateTime<Utc>,
}

impl SolveResult {
    pub fn duration(&self) -> TimeDelta {
        self.solve_end - self.solve_start
    }
}

/// One parsed day, ready to solve its parts.
///
/// Holds the shared data produced by the parser together with the parse
/// timestamps and the answers recorded for the day.
pub struct SolverInstance<'a, S: Solver> {
    year: u16,
    day: u8,
    shared: S::SharedData<'a>,
    expected: Expectations,
    parse_start: DateTime<Utc>,
    parse_end: DateTime<Utc>,
}

impl<'a, S: Solver> SolverInstance<'a, S> {
    /// Parse `input` and record how long it took
    pub fn new(year: u16, day: u8, input: &'a str) -> Result<Self, ParseError> {
        let parse_start = Utc::now();
        let shared = S::parse(input)?;
        let parse_end = Utc::now();

        Ok(Self {
            year,
            day,
            shared,
            expected: Expectations::NONE,
            parse_start,
            parse_end,
        })
    }

    /// Attach the answers recorded for this day
    pub fn with_expectations(mut self, expected: Expectations) -> Self {
        self.expected = expected;
        self
    }

    pub fn shared(&self) -> &S::SharedData<'a> {
        &self.shared
    }
}

/// Type-erased interface over [`SolverInstance`], used by the registry and
/// the runner.
///
/// # Example
///
/// ```no_run
/// use aoc_solver::{DynSolver, InputVariant};
///
/// fn run(mut solver: Box<dyn DynSolver>) -> Result<(), Box<dyn std::error::Error>> {
///     println!("parse took {}", solver.parse_duration());
///     for part in 1..=solver.parts() {
///         let (result, verdict) = solver.check(part, InputVariant::Full)?;
///         println!("part {part}: {} ({verdict:?})", result.answer);
///     }
///     Ok(())
/// }
/// ```
pub trait DynSolver {
    /// Solve the specified part with timing.
    ///
    /// Parts outside `1..=parts()` fail with [`SolveError::PartOutOfRange`].
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError>;

    fn parse_start(&self) -> DateTime<Utc>;

    fn parse_end(&self) -> DateTime<Utc>;

    fn year(&self) -> u16;

    fn day(&self) -> u8;

    /// Number of parts this day has
    fn parts(&self) -> u8;

    /// Answers recorded for this day
    fn expectations(&self) -> Expectations;

    fn parse_duration(&self) -> TimeDelta {
        self.parse_end() - self.parse_start()
    }

    /// Solve `part` and compare the answer with the one recorded for
    /// `variant`.
    fn check(
        &mut self,
        part: u8,
        variant: InputVariant,
    ) -> Result<(SolveResult, Verdict), SolveError> {
        let result = self.solve(part)?;
        let verdict = verify(self.expectations().get(variant, part), &result.answer);
        Ok((result, verdict))
    }
}

impl<'a, S: SolverExt> DynSolver for SolverInstance<'a, S> {
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError> {
        let solve_start = Utc::now();
        let answer = S::solve_part_checked_range(&mut self.shared, part)?;
        let solve_end = Utc::now();

        Ok(SolveResult {
            answer,
            solve_start,
            solve_end,
        })
    }

    fn parse_start(&self) -> DateTime<Utc> {
        self.parse_start
    }

    fn parse_end(&self) -> DateTime<Utc> {
        self.parse_end
    }

    fn year(&self) -> u16 {
        self.year
    }

    fn day(&self) -> u8 {
        self.day
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }

    fn expectations(&self) -> Expectations {
        self.expected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{AocParser, PartSolver};

    struct Sum;

    impl AocParser for Sum {
        type SharedData<'a> = (Vec<i64>, Option<i64>);

        fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
            let numbers = input
                .split_whitespace()
                .map(|n| n.parse().map_err(|_| ParseError::InvalidFormat(n.to_string())))
                .collect::<Result<_, _>>()?;
            Ok((numbers, None))
        }
    }

    impl PartSolver<1> for Sum {
        fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
            let total = shared.0.iter().sum::<i64>();
            shared.1 = Some(total);
            Ok(total.to_string())
        }
    }

    impl PartSolver<2> for Sum {
        fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
            let total = shared.1.unwrap_or_else(|| shared.0.iter().sum());
            Ok((total * 2).to_string())
        }
    }

    impl Solver for Sum {
        const PARTS: u8 = 2;

        fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
            match part {
                1 => <Self as PartSolver<1>>::solve(shared),
                2 => <Self as PartSolver<2>>::solve(shared),
                _ => Err(SolveError::PartNotImplemented(part)),
            }
        }
    }

    const SUM_EXPECTED: Expectations = Expectations {
        full: &["6", "13"],
        example: &[],
    };

    #[test]
    fn test_parse_failure_surfaces() {
        let result = SolverInstance::<Sum>::new(2024, 1, "1 two 3");
        assert!(matches!(result, Err(ParseError::InvalidFormat(s)) if s == "two"));
    }

    #[test]
    fn test_part_two_runs_without_part_one() {
        let mut instance = SolverInstance::<Sum>::new(2024, 1, "1 2 3").unwrap();
        assert_eq!(instance.solve(2).unwrap().answer, "12");
    }

    #[test]
    fn test_out_of_range_parts() {
        let mut instance = SolverInstance::<Sum>::new(2024, 1, "1").unwrap();
        assert!(matches!(instance.solve(0), Err(SolveError::PartOutOfRange(0))));
        assert!(matches!(instance.solve(3), Err(SolveError::PartOutOfRange(3))));
    }

    #[test]
    fn test_check_against_expectations() {
        let mut instance = SolverInstance::<Sum>::new(2024, 1, "1 2 3")
            .unwrap()
            .with_expectations(SUM_EXPECTED);

        let (result, verdict) = instance.check(1, InputVariant::Full).unwrap();
        assert_eq!(result.answer, "6");
        assert_eq!(verdict, Verdict::Verified);
        assert!(result.duration() >= TimeDelta::zero());

        let (_, verdict) = instance.check(2, InputVariant::Full).unwrap();
        assert_eq!(
            verdict,
            Verdict::Mismatch {
                expected: "13".to_string()
            }
        );

        let (_, verdict) = instance.check(1, InputVariant::Example).unwrap();
        assert_eq!(verdict, Verdict::Unverified);
    }

    #[test]
    fn test_metadata() {
        let instance = SolverInstance::<Sum>::new(2024, 9, "").unwrap();
        assert_eq!(instance.year(), 2024);
        assert_eq!(instance.day(), 9);
        assert_eq!(instance.parts(), 2);
        assert!(instance.parse_duration() >= TimeDelta::zero());
        assert!(instance.shared().0.is_empty());
    }
}
