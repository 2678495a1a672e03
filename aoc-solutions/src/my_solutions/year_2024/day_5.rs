use std::cmp::Ordering;
use std::collections::HashSet;

use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::input::{invalid, parse_lines, sections};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 5, tags = ["sorting"], expect = [3608, 4922], example = [143, 123])]
pub struct Solver;

#[derive(Debug)]
pub struct Manual {
    /// `(before, after)` page pairs
    rules: HashSet<(u32, u32)>,
    updates: Vec<Vec<u32>>,
}

impl Manual {
    fn order(&self, a: u32, b: u32) -> Ordering {
        if self.rules.contains(&(a, b)) {
            Ordering::Less
        } else if self.rules.contains(&(b, a)) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    fn is_ordered(&self, update: &[u32]) -> bool {
        update.is_sorted_by(|&a, &b| self.order(a, b) != Ordering::Greater)
    }
}

fn middle(update: &[u32]) -> u32 {
    update[update.len() / 2]
}

fn page(s: &str) -> anyhow::Result<u32> {
    s.trim().parse().with_context(|| format!("bad page {s:?}"))
}

impl AocParser for Solver {
    type SharedData<'a> = Manual;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let (rules, updates) = sections(input).map_err(invalid)?;
        let rules = parse_lines(rules, |line| {
            let (before, after) = line
                .split_once('|')
                .ok_or_else(|| anyhow!("expected `before|after`"))?;
            Ok((page(before)?, page(after)?))
        })?;
        let updates = parse_lines(updates, |line| {
            let pages = line.split(',').map(page).collect::<anyhow::Result<Vec<_>>>()?;
            if pages.len() % 2 == 0 {
                return Err(anyhow!("update has no middle page"));
            }
            Ok(pages)
        })?;

        Ok(Manual {
            rules: rules.into_iter().collect(),
            updates,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(manual: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sum: u32 = manual
            .updates
            .iter()
            .filter(|u| manual.is_ordered(u))
            .map(|u| middle(u))
            .sum();
        Ok(sum.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(manual: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sum: u32 = manual
            .updates
            .iter()
            .filter(|u| !manual.is_ordered(u))
            .map(|u| {
                let mut fixed = u.clone();
                fixed.sort_by(|&a, &b| manual.order(a, b));
                middle(&fixed)
            })
            .sum();
        Ok(sum.to_string())
    }
}
