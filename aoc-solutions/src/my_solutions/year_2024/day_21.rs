use anyhow::{Context, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::dp_cache::{DpCache, DpProblem, HashMapBackend};
use crate::utils::grid::Point;
use crate::utils::input::parse_lines;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 21, tags = ["dp", "keypads"], expect = [152942, 189235298434780], example = [126384, 154115708116294])]
pub struct Solver;

const NUMPAD: [&[u8]; 4] = [b"789", b"456", b"123", b" 0A"];
const DIRPAD: [&[u8]; 2] = [b" ^A", b"<v>"];

fn key_position(pad: &[&[u8]], key: u8) -> Option<Point> {
    pad.iter().enumerate().find_map(|(row, keys)| {
        keys.iter()
            .position(|&k| k == key)
            .map(|col| Point::new(row as i64, col as i64))
    })
}

/// Button presses on the next pad out that make a robot on `pad` type `keys`.
///
/// Every move runs in at most two straight legs. Going left first is
/// cheapest for whoever drives the robot, unless that would cross the gap;
/// otherwise vertical comes first, again unless that crosses the gap.
fn expand(pad: &[&[u8]], keys: &[u8]) -> Option<Vec<u8>> {
    let gap = key_position(pad, b' ')?;
    let mut at = key_position(pad, b'A')?;
    let mut presses = Vec::with_capacity(keys.len() * 4);
    for &key in keys {
        let to = key_position(pad, key)?;
        let (dr, dc) = (to.row - at.row, to.col - at.col);
        let vertical = std::iter::repeat_n(if dr < 0 { b'^' } else { b'v' }, dr.unsigned_abs() as usize);
        let horizontal = std::iter::repeat_n(if dc < 0 { b'<' } else { b'>' }, dc.unsigned_abs() as usize);

        let horizontal_first = (dc < 0 && Point::new(at.row, to.col) != gap)
            || Point::new(to.row, at.col) == gap;
        if horizontal_first {
            presses.extend(horizontal.chain(vertical));
        } else {
            presses.extend(vertical.chain(horizontal));
        }
        presses.push(b'A');
        at = to;
    }
    Some(presses)
}

/// Each chunk ends in `A`, so every robot starts and finishes it on `A`
/// and chunks can be costed independently.
fn chunks(presses: &[u8]) -> impl Iterator<Item = &[u8]> {
    presses.split_inclusive(|&k| k == b'A')
}

/// Presses needed at the outermost pad for a chunk typed `depth` directional
/// keypads away
pub struct ChainedKeypads;

impl DpProblem<(Vec<u8>, u8), u64> for ChainedKeypads {
    fn deps(&self, (chunk, depth): &(Vec<u8>, u8)) -> Vec<(Vec<u8>, u8)> {
        if *depth == 0 {
            return Vec::new();
        }
        expand(&DIRPAD, chunk)
            .map(|presses| chunks(&presses).map(|c| (c.to_vec(), depth - 1)).collect())
            .unwrap_or_default()
    }

    fn compute(&self, (chunk, depth): &(Vec<u8>, u8), deps: Vec<u64>) -> u64 {
        if *depth == 0 {
            chunk.len() as u64
        } else {
            deps.iter().sum()
        }
    }
}

pub type PressCounts = DpCache<(Vec<u8>, u8), u64, HashMapBackend<(Vec<u8>, u8), u64>, ChainedKeypads>;

pub struct DoorCodes {
    /// `(code, numeric part)`
    codes: Vec<(Vec<u8>, u64)>,
    presses: PressCounts,
}

impl AocParser for Solver {
    type SharedData<'a> = DoorCodes;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let codes = parse_lines(input, |line| {
            let code = line.trim();
            if let Some(bad) = code.bytes().find(|&b| key_position(&NUMPAD, b).is_none() || b == b' ') {
                bail!("{:?} is not on the numeric keypad", bad as char);
            }
            let value = code
                .trim_end_matches('A')
                .parse()
                .with_context(|| format!("code {code:?} has no numeric part"))?;
            Ok((code.as_bytes().to_vec(), value))
        })?;
        Ok(DoorCodes {
            codes,
            presses: DpCache::with_problem(HashMapBackend::new(), ChainedKeypads),
        })
    }
}

impl DoorCodes {
    fn complexity(&self, robots: u8) -> Result<u64, SolveError> {
        self.codes.iter().try_fold(0, |total, (code, value)| {
            let presses = expand(&NUMPAD, code)
                .ok_or_else(|| SolveError::failed("code is not on the numeric keypad"))?;
            let len: u64 = chunks(&presses)
                .map(|chunk| self.presses.get(&(chunk.to_vec(), robots)))
                .sum();
            Ok(total + len * value)
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(codes: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(codes.complexity(2)?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(codes: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(codes.complexity(25)?.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "029A\n980A\n179A\n456A\n379A\n";

    #[test]
    fn test_example() {
        let mut codes = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut codes, 1).unwrap(), "126384");
        assert_eq!(Solver::solve_part(&mut codes, 2).unwrap(), "154115708116294");
    }

    #[test]
    fn test_numeric_parts() {
        let codes = Solver::parse(EXAMPLE).unwrap();
        let values: Vec<u64> = codes.codes.iter().map(|(_, v)| *v).collect();
        assert_eq!(values, vec![29, 980, 179, 456, 379]);
    }

    #[test]
    fn test_expansion_lengths() {
        let first = expand(&NUMPAD, b"029A").unwrap();
        assert_eq!(first.len(), "<A^A>^^AvvvA".len());
        let codes = Solver::parse("029A\n").unwrap();
        assert_eq!(codes.complexity(2).unwrap(), 68 * 29);
    }

    #[test]
    fn test_never_crosses_gap() {
        assert_eq!(expand(&NUMPAD, b"1").unwrap(), b"^<<A");
        assert_eq!(expand(&DIRPAD, b"<").unwrap(), b"v<<A");
    }

    #[test]
    fn test_rejects_foreign_keys() {
        assert!(Solver::parse("02BA\n").is_err());
    }
}
