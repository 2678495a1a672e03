use std::collections::HashSet;

use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::{Direction, Grid, Point};
use crate::utils::input::{invalid, sections};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 15, tags = ["grid", "simulation"], expect = [1294459, 1319212], example = [10092, 9021])]
pub struct Solver;

#[derive(Debug)]
pub struct Warehouse {
    map: Grid<u8>,
    moves: Vec<Direction>,
}

impl AocParser for Solver {
    type SharedData<'a> = Warehouse;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let (map, moves) = sections(input).map_err(invalid)?;
        let map = Grid::parse(map).map_err(invalid)?;
        if map.position(|&c| c == b'@').is_none() {
            return Err(invalid(anyhow!("no robot in the warehouse")));
        }
        let moves = moves
            .bytes()
            .filter(|c| !c.is_ascii_whitespace())
            .map(|c| {
                Direction::from_arrow(c)
                    .ok_or_else(|| invalid(anyhow!("unknown move {:?}", c as char)))
            })
            .collect::<Result<_, _>>()?;
        Ok(Warehouse { map, moves })
    }
}

/// Everything double width except the robot, which gains empty floor to its right
fn widen(map: &Grid<u8>) -> Result<Grid<u8>, SolveError> {
    let mut text = String::with_capacity(map.width() * map.height() * 2 + map.height());
    for row in map.rows() {
        for &c in row {
            text.push_str(match c {
                b'#' => "##",
                b'O' => "[]",
                b'@' => "@.",
                _ => "..",
            });
        }
        text.push('\n');
    }
    Grid::parse(&text).map_err(|e| SolveError::failed(format!("{e:#}")))
}

/// Try to move the robot at `robot`; returns where it ends up
fn step(map: &mut Grid<u8>, robot: Point, dir: Direction) -> Point {
    let delta = dir.delta();
    let mut pushed = vec![robot];
    let mut seen = HashSet::from([robot]);
    let mut i = 0;
    while i < pushed.len() {
        let next = pushed[i] + delta;
        i += 1;
        let mut enqueue = |p: Point| {
            if seen.insert(p) {
                pushed.push(p);
            }
        };
        match map.get(next).copied() {
            None | Some(b'#') => return robot,
            Some(b'O') => enqueue(next),
            Some(b'[') => {
                enqueue(next);
                if dir.is_vertical() {
                    enqueue(next + Direction::Right.delta());
                }
            }
            Some(b']') => {
                enqueue(next);
                if dir.is_vertical() {
                    enqueue(next + Direction::Left.delta());
                }
            }
            _ => {}
        }
    }

    let contents: Vec<u8> = pushed.iter().map(|&p| map[p]).collect();
    for &p in &pushed {
        map[p] = b'.';
    }
    for (&p, c) in pushed.iter().zip(contents) {
        map[p + delta] = c;
    }
    robot + delta
}

fn run(mut map: Grid<u8>, moves: &[Direction]) -> i64 {
    if let Some(mut robot) = map.position(|&c| c == b'@') {
        for &dir in moves {
            robot = step(&mut map, robot, dir);
        }
    }
    map.iter()
        .filter(|&(_, &c)| c == b'O' || c == b'[')
        .map(|(p, _)| 100 * p.row + p.col)
        .sum()
}

impl PartSolver<1> for Solver {
    fn solve(warehouse: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(run(warehouse.map.clone(), &warehouse.moves).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(warehouse: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let wide = widen(&warehouse.map)?;
        Ok(run(wide, &warehouse.moves).to_string())
    }
}
