use std::collections::VecDeque;

use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use rayon::prelude::*;

use crate::utils::grid::{Grid, Point};
use crate::utils::input::invalid;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 20, tags = ["grid", "bfs"], expect = [1367, 1006850], example = [0, 0])]
pub struct Solver;

const MIN_SAVING: usize = 100;

#[derive(Debug)]
pub struct RaceTrack {
    /// Steps from the start along the track; `None` for walls and unreachable tiles
    dist: Grid<Option<usize>>,
    /// Reachable track tiles, ordered by distance from the start
    track: Vec<Point>,
}

impl AocParser for Solver {
    type SharedData<'a> = RaceTrack;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let grid = Grid::parse(input).map_err(invalid)?;
        let find = |marker: u8| {
            grid.position(|&c| c == marker)
                .ok_or_else(|| invalid(anyhow!("track has no {:?} tile", marker as char)))
        };
        let (start, end) = (find(b'S')?, find(b'E')?);

        let mut dist = grid.same_shape(None);
        let mut track = Vec::new();
        dist[start] = Some(0);
        let mut queue = VecDeque::from([(start, 0)]);
        while let Some((p, d)) = queue.pop_front() {
            track.push(p);
            for n in grid.neighbors(p) {
                if grid[n] != b'#' && dist[n].is_none() {
                    dist[n] = Some(d + 1);
                    queue.push_back((n, d + 1));
                }
            }
        }
        if dist[end].is_none() {
            return Err(invalid(anyhow!("end {end} is not reachable from the start")));
        }

        Ok(RaceTrack { dist, track })
    }
}

impl RaceTrack {
    /// Cheats of at most `max_len` picoseconds that save at least `min_saving`
    fn cheats(&self, max_len: i64, min_saving: usize) -> usize {
        self.track
            .par_iter()
            .map(|&from| {
                let Some(start) = self.dist[from] else {
                    return 0;
                };
                let mut count = 0;
                for dr in -max_len..=max_len {
                    let reach = max_len - dr.abs();
                    for dc in -reach..=reach {
                        let to = from + Point::new(dr, dc);
                        let Some(&Some(end)) = self.dist.get(to) else {
                            continue;
                        };
                        let len = (dr.abs() + dc.abs()) as usize;
                        if end >= start + len + min_saving {
                            count += 1;
                        }
                    }
                }
                count
            })
            .sum()
    }
}

impl PartSolver<1> for Solver {
    fn solve(track: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(track.cheats(2, MIN_SAVING).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(track: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(track.cheats(20, MIN_SAVING).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "\
###############
#...#...#.....#
#.#.#.#.#.###.#
#S#...#.#.#...#
#######.#.#.###
#######.#.#...#
#######.#.###.#
###..E#...#...#
###.#######.###
#...###...#...#
#.#####.#.###.#
#.#...#.#.#...#
#.#.#.#.#.#.###
#...#...#...###
###############
";

    #[test]
    fn test_example() {
        let mut track = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut track, 1).unwrap(), "0");
        assert_eq!(Solver::solve_part(&mut track, 2).unwrap(), "0");
    }

    #[test]
    fn test_smaller_thresholds() {
        let track = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(track.track.len(), 85);
        assert_eq!(track.cheats(2, 64), 1);
        assert_eq!(track.cheats(2, 20), 5);
        assert_eq!(track.cheats(2, 2), 44);
        assert_eq!(track.cheats(20, 76), 3);
        assert_eq!(track.cheats(20, 74), 7);
    }

    #[test]
    fn test_unreachable_end() {
        assert!(Solver::parse("#####\n#S#E#\n#####\n").is_err());
    }
}
