use anyhow::Context;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::dp_cache::{DpCache, DpProblem, HashMapBackend};
use crate::utils::input::invalid;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 11, tags = ["dp"], expect = [193899, 229682160383225], example = [55312, 65601038650482])]
pub struct Solver;

/// Engraved numbers are widened from the `u64` input. An odd-length stone
/// gains at most 7 digits before it splits, so `u128` never overflows.
type Stone = u128;

/// How many stones one stone becomes after some number of blinks
pub struct Blink;

impl Blink {
    fn next(stone: Stone) -> Vec<Stone> {
        if stone == 0 {
            return vec![1];
        }
        let digits = stone.ilog10() + 1;
        if digits % 2 == 0 {
            let half = Stone::pow(10, digits / 2);
            vec![stone / half, stone % half]
        } else {
            vec![stone * 2024]
        }
    }
}

impl DpProblem<(Stone, u8), u64> for Blink {
    fn deps(&self, &(stone, blinks): &(Stone, u8)) -> Vec<(Stone, u8)> {
        if blinks == 0 {
            return Vec::new();
        }
        Blink::next(stone)
            .into_iter()
            .map(|s| (s, blinks - 1))
            .collect()
    }

    fn compute(&self, &(_, blinks): &(Stone, u8), deps: Vec<u64>) -> u64 {
        if blinks == 0 { 1 } else { deps.iter().sum() }
    }
}

pub type StoneCounts = DpCache<(Stone, u8), u64, HashMapBackend<(Stone, u8), u64>, Blink>;

pub struct Stones {
    initial: Vec<Stone>,
    /// Shared by both parts; part 2 reuses every count part 1 computed
    counts: StoneCounts,
}

impl Stones {
    fn after(&self, blinks: u8) -> u64 {
        self.initial
            .iter()
            .map(|&stone| self.counts.get(&(stone, blinks)))
            .sum()
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Stones;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let initial = input
            .split_whitespace()
            .map(|s| {
                s.parse::<u64>()
                    .map(Stone::from)
                    .with_context(|| format!("bad stone {s:?}"))
            })
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(invalid)?;
        if initial.is_empty() {
            return Err(ParseError::MissingData("no stones".into()));
        }
        Ok(Stones {
            initial,
            counts: DpCache::builder()
                .backend(HashMapBackend::new())
                .problem(Blink)
                .build(),
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(stones: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(stones.after(25).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(stones: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(stones.after(75).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    #[test]
    fn test_example() {
        let mut stones = Solver::parse("125 17\n").unwrap();
        assert_eq!(Solver::solve_part(&mut stones, 1).unwrap(), "55312");
        assert_eq!(Solver::solve_part(&mut stones, 2).unwrap(), "65601038650482");
    }

    #[test]
    fn test_blink_rules() {
        assert_eq!(Blink::next(0), vec![1]);
        assert_eq!(Blink::next(1000), vec![10, 0]);
        assert_eq!(Blink::next(99), vec![9, 9]);
        assert_eq!(Blink::next(999), vec![2021976]);
    }

    #[test]
    fn test_short_runs() {
        let stones = Solver::parse("125 17").unwrap();
        assert_eq!(stones.after(1), 3);
        assert_eq!(stones.after(6), 22);
        assert!(!stones.counts.is_empty());
    }

    #[test]
    fn test_stone_past_u64_range() {
        let big = 10_000_000_000_000_000;
        assert_eq!(Blink::next(big), vec![20_240_000_000_000_000_000]);
        assert!(Blink::next(big)[0] > u64::MAX as Stone);

        let mut stones = Solver::parse("10000000000000000").unwrap();
        assert_eq!(stones.after(1), 1);
        assert_eq!(stones.after(2), 2);
        assert!(Solver::solve_part(&mut stones, 1).is_ok());
        assert_eq!(Blink::next(u64::MAX as Stone).len(), 2);
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(Solver::parse(" \n"), Err(ParseError::MissingData(_))));
    }
}
