//! Property-based tests for part range checks

use aoc_solver::{
    AocParser, DynSolver, ParseError, SolveError, Solver, SolverExt, SolverInstance,
};
use proptest::prelude::*;

/// Solver with `N` parts that echoes the part number
struct Parts<const N: u8>;

impl<const N: u8> AocParser for Parts<N> {
    type SharedData<'a> = ();

    fn parse(_input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(())
    }
}

impl<const N: u8> Solver for Parts<N> {
    const PARTS: u8 = N;

    fn solve_part(_shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        Ok(format!("part{}", part))
    }
}

fn checked(parts: u8, part: u8) -> (u8, Result<String, SolveError>) {
    match parts {
        1 => (1, Parts::<1>::solve_part_checked_range(&mut (), part)),
        2 => (2, Parts::<2>::solve_part_checked_range(&mut (), part)),
        _ => (3, Parts::<3>::solve_part_checked_range(&mut (), part)),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_out_of_range_rejected(parts in 1u8..=3, part in 0u8..=255) {
        let (max, result) = checked(parts, part);

        if part == 0 || part > max {
            match result {
                Err(SolveError::PartOutOfRange(p)) => prop_assert_eq!(p, part),
                other => prop_assert!(false, "expected PartOutOfRange, got {:?}", other),
            }
        } else {
            prop_assert_eq!(result.unwrap(), format!("part{}", part));
        }
    }

    #[test]
    fn prop_instance_checks_range(part in 0u8..=255) {
        let mut instance = SolverInstance::<Parts<2>>::new(2024, 25, "").unwrap();
        let result = instance.solve(part);

        if (1..=2).contains(&part) {
            prop_assert_eq!(result.unwrap().answer, format!("part{}", part));
        } else {
            prop_assert!(matches!(result, Err(SolveError::PartOutOfRange(p)) if p == part));
        }
    }
}

#[test]
fn single_part_day() {
    let mut instance = SolverInstance::<Parts<1>>::new(2024, 25, "").unwrap();
    assert_eq!(instance.parts(), 1);
    assert!(instance.solve(1).is_ok());
    assert!(matches!(instance.solve(2), Err(SolveError::PartOutOfRange(2))));
}
