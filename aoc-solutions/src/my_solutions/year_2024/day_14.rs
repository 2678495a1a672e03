use std::collections::HashSet;

use anyhow::bail;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::input::{numbers, parse_lines};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 14, tags = ["simulation"], expect = [229069152, 7383], example = [12])]
pub struct Solver;

const FULL_SIZE: (i64, i64) = (101, 103);
const EXAMPLE_SIZE: (i64, i64) = (11, 7);

/// Robots with at least one orthogonal neighbour needed to call it a picture
const PICTURE_THRESHOLD: usize = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Robot {
    pos: (i64, i64),
    vel: (i64, i64),
}

#[derive(Debug)]
pub struct Bathroom {
    width: i64,
    height: i64,
    robots: Vec<Robot>,
}

impl AocParser for Solver {
    type SharedData<'a> = Bathroom;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let robots = parse_lines(input, |line| match numbers::<i64>(line)?[..] {
            [px, py, vx, vy] if px >= 0 && py >= 0 => Ok(Robot {
                pos: (px, py),
                vel: (vx, vy),
            }),
            _ => bail!("expected `p=x,y v=dx,dy` with a non-negative position"),
        })?;

        // The example uses a smaller room than the real puzzle
        let fits_example = robots
            .iter()
            .all(|r| r.pos.0 < EXAMPLE_SIZE.0 && r.pos.1 < EXAMPLE_SIZE.1);
        let (width, height) = if fits_example { EXAMPLE_SIZE } else { FULL_SIZE };
        if robots.iter().any(|r| r.pos.0 >= width || r.pos.1 >= height) {
            return Err(ParseError::InvalidFormat(format!(
                "robot outside the {width}x{height} room"
            )));
        }

        Ok(Bathroom {
            width,
            height,
            robots,
        })
    }
}

impl Bathroom {
    fn positions(&self, seconds: i64) -> impl Iterator<Item = (i64, i64)> + '_ {
        self.robots.iter().map(move |r| {
            (
                (r.pos.0 + r.vel.0 * seconds).rem_euclid(self.width),
                (r.pos.1 + r.vel.1 * seconds).rem_euclid(self.height),
            )
        })
    }

    fn safety_factor(&self, seconds: i64) -> usize {
        let (mid_x, mid_y) = (self.width / 2, self.height / 2);
        let mut quadrants = [0; 4];
        for (x, y) in self.positions(seconds) {
            if x == mid_x || y == mid_y {
                continue;
            }
            quadrants[usize::from(x > mid_x) + 2 * usize::from(y > mid_y)] += 1;
        }
        quadrants.iter().product()
    }

    fn clustered(&self, seconds: i64) -> usize {
        let occupied: HashSet<(i64, i64)> = self.positions(seconds).collect();
        self.positions(seconds)
            .filter(|&(x, y)| {
                [(0, 1), (0, -1), (1, 0), (-1, 0)]
                    .iter()
                    .any(|(dx, dy)| occupied.contains(&(x + dx, y + dy)))
            })
            .count()
    }
}

impl PartSolver<1> for Solver {
    fn solve(room: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(room.safety_factor(100).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(room: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        // Positions repeat after width * height seconds
        (1..=room.width * room.height)
            .find(|&t| room.clustered(t) > PICTURE_THRESHOLD)
            .map(|t| t.to_string())
            .ok_or_else(|| SolveError::NoSolution("robots never form a picture".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "\
p=0,4 v=3,-3
p=6,3 v=-1,-3
p=10,3 v=-1,2
p=2,0 v=2,-1
p=0,0 v=1,3
p=3,0 v=-2,-2
p=7,6 v=-1,-3
p=3,0 v=-1,-2
p=9,3 v=2,3
p=7,3 v=-1,2
p=2,4 v=2,-3
p=9,5 v=-3,-3
";

    #[test]
    fn test_example() {
        let mut room = Solver::parse(EXAMPLE).unwrap();
        assert_eq!((room.width, room.height), EXAMPLE_SIZE);
        assert_eq!(Solver::solve_part(&mut room, 1).unwrap(), "12");
    }

    #[test]
    fn test_example_has_no_picture() {
        let mut room = Solver::parse(EXAMPLE).unwrap();
        assert!(matches!(
            Solver::solve_part(&mut room, 2),
            Err(SolveError::NoSolution(_))
        ));
    }

    #[test]
    fn test_wrapping() {
        let room = Solver::parse("p=2,4 v=2,-3\n").unwrap();
        let after: Vec<_> = (1..=5).map(|t| room.positions(t).next().unwrap()).collect();
        assert_eq!(after, vec![(4, 1), (6, 5), (8, 2), (10, 6), (1, 3)]);
    }

    #[test]
    fn test_large_positions_pick_full_room() {
        let room = Solver::parse("p=50,80 v=1,1\n").unwrap();
        assert_eq!((room.width, room.height), FULL_SIZE);
    }
}
