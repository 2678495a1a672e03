//! Every 2024 day registers itself and runs through the registry

use aoc_solutions as _;
use aoc_solver::{InputVariant, SolveError, SolverRegistryBuilder, Verdict};
use proptest::prelude::*;

fn registry() -> aoc_solver::SolverRegistry {
    SolverRegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.year == 2024)
        .unwrap()
        .build()
}

#[test]
fn all_days_registered() {
    let registry = registry();
    let days: Vec<(u8, u8)> = registry
        .storage()
        .iter_info()
        .map(|info| (info.day, info.parts))
        .collect();
    let expected: Vec<(u8, u8)> = (1..=25).map(|d| (d, if d == 25 { 1 } else { 2 })).collect();
    assert_eq!(days, expected);
}

#[test]
fn every_day_records_full_answers() {
    let registry = registry();
    for info in registry.storage().iter_info() {
        for part in 1..=info.parts {
            assert!(
                info.expected.get(InputVariant::Full, part).is_some(),
                "day {} part {part} has no recorded answer",
                info.day
            );
        }
    }
}

#[test]
fn example_verifies_through_registry() {
    let registry = registry();
    let mut solver = registry
        .create_solver(2024, 9, "2333133121414131402\n")
        .unwrap();
    for part in 1..=solver.parts() {
        let (result, verdict) = solver.check(part, InputVariant::Example).unwrap();
        assert_eq!(verdict, Verdict::Verified, "part {part} gave {}", result.answer);
    }
}

#[test]
fn wrong_answer_is_a_mismatch() {
    let registry = registry();
    // A different disk map gives a different checksum than the recorded example
    let mut solver = registry.create_solver(2024, 9, "12345\n").unwrap();
    let (result, verdict) = solver.check(1, InputVariant::Example).unwrap();
    assert_eq!(result.answer, "60");
    assert_eq!(
        verdict,
        Verdict::Mismatch {
            expected: "1928".to_string()
        }
    );
}

#[test]
fn parse_errors_surface_before_solving() {
    let registry = registry();
    assert!(registry.create_solver(2024, 1, "1 2 3\n").is_err());
    assert!(registry.create_solver(2023, 1, "1 2\n").is_err());
}

#[test]
fn day_25_has_no_second_part() {
    let registry = registry();
    let mut solver = registry
        .create_solver(2024, 25, "#####\n.####\n.....\n\n.....\n#....\n#####\n")
        .unwrap();
    assert_eq!(solver.solve(1).unwrap().answer, "1");
    assert!(matches!(solver.solve(2), Err(SolveError::PartOutOfRange(2))));
}

proptest! {
    #[test]
    fn prop_unregistered_days_are_rejected(day in 26u8..=255) {
        let registry = registry();
        prop_assert!(registry.create_solver(2024, day, "").is_err());
    }

    #[test]
    fn prop_stones_count_is_order_independent(a in 0u64..1000, b in 0u64..1000) {
        let registry = registry();
        let forward_input = format!("{a} {b}");
        let backward_input = format!("{b} {a}");
        let mut forward = registry.create_solver(2024, 11, &forward_input).unwrap();
        let mut backward = registry.create_solver(2024, 11, &backward_input).unwrap();
        prop_assert_eq!(
            forward.solve(1).unwrap().answer,
            backward.solve(1).unwrap().answer
        );
    }
}
