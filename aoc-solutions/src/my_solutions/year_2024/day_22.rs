use anyhow::Context;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use rayon::prelude::*;

use crate::utils::input::parse_lines;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 22, tags = ["prng"], expect = [17965282217, 2152])]
pub struct Solver;

const PRUNE: u64 = 16_777_216;
const ROUNDS: usize = 2000;
/// Price changes lie in -9..=9, so four of them pack into base 19
const SEQUENCES: usize = 19 * 19 * 19 * 19;

pub fn next_secret(mut secret: u64) -> u64 {
    secret = (secret ^ (secret * 64)) % PRUNE;
    secret = (secret ^ (secret / 32)) % PRUNE;
    (secret ^ (secret * 2048)) % PRUNE
}

fn secrets(seed: u64) -> impl Iterator<Item = u64> {
    std::iter::successors(Some(seed), |&s| Some(next_secret(s)))
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<u64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse_lines(input, |line| {
            line.trim()
                .parse()
                .with_context(|| format!("bad secret {line:?}"))
        })
    }
}

/// Bananas each four-change sequence would earn from one buyer
fn add_offers(seed: u64, totals: &mut [u32]) {
    let mut seen = vec![false; SEQUENCES];
    let prices: Vec<i32> = secrets(seed).take(ROUNDS + 1).map(|s| (s % 10) as i32).collect();
    let mut key = 0usize;
    for (i, pair) in prices.windows(2).enumerate() {
        let change = (pair[1] - pair[0] + 9) as usize;
        key = (key * 19 + change) % SEQUENCES;
        if i >= 3 && !std::mem::replace(&mut seen[key], true) {
            totals[key] += pair[1] as u32;
        }
    }
}

impl PartSolver<1> for Solver {
    fn solve(seeds: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sum: u64 = seeds
            .par_iter()
            .map(|&seed| secrets(seed).nth(ROUNDS).unwrap_or(seed))
            .sum();
        Ok(sum.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(seeds: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let totals = seeds
            .par_iter()
            .fold(
                || vec![0u32; SEQUENCES],
                |mut totals, &seed| {
                    add_offers(seed, &mut totals);
                    totals
                },
            )
            .reduce(
                || vec![0u32; SEQUENCES],
                |mut a, b| {
                    a.iter_mut().zip(b).for_each(|(x, y)| *x += y);
                    a
                },
            );
        Ok(totals.iter().max().copied().unwrap_or(0).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    #[test]
    fn test_secret_sequence() {
        let next: Vec<u64> = secrets(123).skip(1).take(10).collect();
        assert_eq!(
            next,
            vec![
                15887950, 16495136, 527345, 704524, 1553684, 12683156, 11100544, 12249484,
                7753432, 5908254
            ]
        );
    }

    #[test]
    fn test_part_one_example() {
        let mut seeds = Solver::parse("1\n10\n100\n2024\n").unwrap();
        assert_eq!(Solver::solve_part(&mut seeds, 1).unwrap(), "37327623");
    }

    #[test]
    fn test_part_two_example() {
        let mut seeds = Solver::parse("1\n2\n3\n2024\n").unwrap();
        assert_eq!(Solver::solve_part(&mut seeds, 2).unwrap(), "23");
    }

    #[test]
    fn test_first_sequence_occurrence_wins() {
        let mut totals = vec![0; SEQUENCES];
        add_offers(123, &mut totals);
        // -1,-1,0,2 first appears when the price reaches 6
        let key = [8usize, 8, 9, 11].iter().fold(0, |k, &c| k * 19 + c);
        assert_eq!(totals[key], 6);
    }
}
