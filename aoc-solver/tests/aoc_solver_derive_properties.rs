//! Property-based tests for the AocSolver derive macro

use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver};
use proptest::prelude::*;

/// Reports of levels, one report per line
#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct Reports;

fn parse_rows(input: &str) -> Result<Vec<Vec<i32>>, ParseError> {
    input
        .lines()
        .filter(|l| !l.is_empty())
        .map(|l| {
            l.split_whitespace()
                .map(|n| n.parse().map_err(|_| ParseError::InvalidFormat(l.to_string())))
                .collect()
        })
        .collect()
}

impl AocParser for Reports {
    type SharedData<'a> = Vec<Vec<i32>>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse_rows(input)
    }
}

impl PartSolver<1> for Reports {
    fn solve(rows: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(rows.iter().map(|r| r.len()).sum::<usize>().to_string())
    }
}

impl PartSolver<2> for Reports {
    fn solve(rows: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(rows.iter().flatten().sum::<i32>().to_string())
    }
}

fn render(rows: &[Vec<i32>]) -> String {
    rows.iter()
        .map(|r| r.iter().map(|n| n.to_string()).collect::<Vec<_>>().join(" "))
        .collect::<Vec<_>>()
        .join("\n")
}

mod dispatch {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn solve_part_matches_direct_part_solver(
            rows in prop::collection::vec(prop::collection::vec(1i32..100, 1..6), 1..6),
            part in 1u8..=2
        ) {
            let input = render(&rows);
            let mut via_dispatch = Reports::parse(&input).unwrap();
            let mut direct = Reports::parse(&input).unwrap();

            let dispatched = Reports::solve_part(&mut via_dispatch, part).unwrap();
            let expected = match part {
                1 => <Reports as PartSolver<1>>::solve(&mut direct).unwrap(),
                2 => <Reports as PartSolver<2>>::solve(&mut direct).unwrap(),
                _ => unreachable!(),
            };

            prop_assert_eq!(dispatched, expected);
        }

        #[test]
        fn unknown_part_is_not_implemented(part in prop_oneof![Just(0u8), 3u8..=255]) {
            let mut rows = Reports::parse("1 2\n3").unwrap();

            match Reports::solve_part(&mut rows, part) {
                Err(SolveError::PartNotImplemented(p)) => prop_assert_eq!(p, part),
                other => prop_assert!(false, "expected PartNotImplemented, got {:?}", other),
            }
        }
    }

    #[test]
    fn parts_constant_follows_max_parts() {
        assert_eq!(Reports::PARTS, 2);
    }
}

/// Part 2 reuses what part 1 stored, and still works when run alone
mod shared_state {
    use super::*;

    struct Scan {
        rows: Vec<Vec<i32>>,
        longest: Option<usize>,
    }

    #[derive(AocSolver)]
    #[aoc_solver(max_parts = 2)]
    struct Longest;

    impl AocParser for Longest {
        type SharedData<'a> = Scan;

        fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
            Ok(Scan {
                rows: parse_rows(input)?,
                longest: None,
            })
        }
    }

    fn longest(scan: &Scan) -> usize {
        scan.rows.iter().map(|r| r.len()).max().unwrap_or(0)
    }

    impl PartSolver<1> for Longest {
        fn solve(scan: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
            let n = longest(scan);
            scan.longest = Some(n);
            Ok(n.to_string())
        }
    }

    impl PartSolver<2> for Longest {
        fn solve(scan: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
            let n = scan.longest.unwrap_or_else(|| longest(scan));
            Ok((n * 2).to_string())
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn part_two_agrees_with_or_without_part_one(
            rows in prop::collection::vec(prop::collection::vec(1i32..100, 1..8), 1..6)
        ) {
            let input = render(&rows);
            let expected = rows.iter().map(|r| r.len()).max().unwrap() * 2;

            let mut after_part_one = Longest::parse(&input).unwrap();
            Longest::solve_part(&mut after_part_one, 1).unwrap();
            prop_assert!(after_part_one.longest.is_some());
            let with_cache = Longest::solve_part(&mut after_part_one, 2).unwrap();

            let mut fresh = Longest::parse(&input).unwrap();
            let without_cache = Longest::solve_part(&mut fresh, 2).unwrap();

            prop_assert_eq!(&with_cache, &expected.to_string());
            prop_assert_eq!(with_cache, without_cache);
        }
    }
}

/// Shared data may borrow from the input
mod borrowed {
    use super::*;

    #[derive(AocSolver)]
    #[aoc_solver(max_parts = 1)]
    struct Words;

    impl AocParser for Words {
        type SharedData<'a> = Vec<&'a str>;

        fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
            Ok(input.split_whitespace().collect())
        }
    }

    impl PartSolver<1> for Words {
        fn solve(words: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
            words.sort_unstable();
            Ok(words.join(","))
        }
    }

    proptest! {
        #[test]
        fn words_are_sorted(words in prop::collection::vec("[a-z]{1,5}", 1..8)) {
            let input = words.join(" ");
            let mut sorted = words.clone();
            sorted.sort_unstable();

            let mut shared = Words::parse(&input).unwrap();
            prop_assert_eq!(Words::solve_part(&mut shared, 1).unwrap(), sorted.join(","));
        }
    }
}
