use std::collections::{HashMap, HashSet};

use anyhow::{Context, anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

use crate::utils::input::{invalid, sections};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 24, tags = ["circuits"], expect = [69201640933606, "dhq,hbs,jcp,kfp,pdg,z18,z22,z27"], example = [2024])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    And,
    Or,
    Xor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gate<'a> {
    left: &'a str,
    op: Op,
    right: &'a str,
    out: &'a str,
}

impl Gate<'_> {
    fn has_input(&self, wire: &str) -> bool {
        self.left == wire || self.right == wire
    }

    /// Both inputs are primary `x`/`y` wires
    fn reads_inputs(&self) -> bool {
        [self.left, self.right]
            .iter()
            .all(|w| w.starts_with('x') || w.starts_with('y'))
    }

    fn reads_bit_zero(&self) -> bool {
        self.has_input("x00") && self.has_input("y00")
    }
}

/// Output pairs swapped in the puzzle's broken adder
const SWAPPED_PAIRS: usize = 4;

#[derive(Debug)]
pub struct Circuit<'a> {
    initial: HashMap<&'a str, bool>,
    gates: Vec<Gate<'a>>,
}

impl AocParser for Solver {
    type SharedData<'a> = Circuit<'a>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse_circuit(input).map_err(invalid)
    }
}

fn parse_circuit(input: &str) -> anyhow::Result<Circuit<'_>> {
    let (wires, gates) = sections(input)?;
    let initial = wires
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|line| {
            let (name, value) = line
                .split_once(':')
                .ok_or_else(|| anyhow!("expected `wire: value`, found {line:?}"))?;
            match value.trim() {
                "0" => Ok((name.trim(), false)),
                "1" => Ok((name.trim(), true)),
                other => bail!("wire {name} has value {other:?}"),
            }
        })
        .collect::<anyhow::Result<_>>()?;

    let gates = gates
        .lines()
        .filter(|l| !l.trim().is_empty())
        .enumerate()
        .map(|(i, line)| {
            let fields: Vec<&str> = line.split_whitespace().collect();
            let [left, op, right, "->", out] = fields[..] else {
                bail!("(gate {}) expected `a OP b -> c`, found {line:?}", i + 1);
            };
            let op = match op {
                "AND" => Op::And,
                "OR" => Op::Or,
                "XOR" => Op::Xor,
                other => bail!("(gate {}) unknown operator {other:?}", i + 1),
            };
            Ok(Gate { left, op, right, out })
        })
        .collect::<anyhow::Result<Vec<_>>>()
        .context("in gate list")?;
    Ok(Circuit { initial, gates })
}

impl<'a> Circuit<'a> {
    fn value(
        &self,
        wire: &'a str,
        drivers: &HashMap<&'a str, Gate<'a>>,
        known: &mut HashMap<&'a str, bool>,
        pending: &mut HashSet<&'a str>,
    ) -> Result<bool, SolveError> {
        if let Some(&v) = known.get(wire) {
            return Ok(v);
        }
        let gate = drivers
            .get(wire)
            .ok_or_else(|| SolveError::failed(format!("wire {wire} is never driven")))?;
        if !pending.insert(wire) {
            return Err(SolveError::failed(format!("wire {wire} feeds back into itself")));
        }
        let left = self.value(gate.left, drivers, known, pending)?;
        let right = self.value(gate.right, drivers, known, pending)?;
        let v = match gate.op {
            Op::And => left & right,
            Op::Or => left | right,
            Op::Xor => left ^ right,
        };
        pending.remove(wire);
        known.insert(wire, v);
        Ok(v)
    }

    /// The number formed by the `z` wires, `z00` least significant
    fn output(&self) -> Result<u64, SolveError> {
        let drivers: HashMap<&str, Gate> = self.gates.iter().map(|g| (g.out, *g)).collect();
        let mut known = self.initial.clone();
        let mut pending = HashSet::new();
        let z_wires = self
            .gates
            .iter()
            .map(|g| g.out)
            .filter(|w| w.starts_with('z'))
            .sorted_unstable()
            .rev();
        let mut number = 0;
        for wire in z_wires {
            number = number << 1 | u64::from(self.value(wire, &drivers, &mut known, &mut pending)?);
        }
        Ok(number)
    }

    /// Outputs that break the shape of a ripple-carry adder.
    ///
    /// In a correct adder every `z` except the final carry comes from an
    /// XOR, the carry-out comes from an OR, an XOR of carries writes a `z`,
    /// each `x ^ y` half sum feeds another XOR and each AND feeds an OR.
    /// Bit zero is a half adder and is exempt from the last two rules.
    fn miswired(&self) -> Vec<&'a str> {
        let last_z = self
            .gates
            .iter()
            .map(|g| g.out)
            .filter(|w| w.starts_with('z'))
            .max()
            .unwrap_or("");
        let feeds = |wire: &str, op: Op| self.gates.iter().any(|g| g.op == op && g.has_input(wire));

        self.gates
            .iter()
            .filter(|g| {
                let writes_z = g.out.starts_with('z');
                match g.op {
                    _ if g.out == last_z => g.op != Op::Or,
                    Op::Xor if !g.reads_inputs() => !writes_z,
                    Op::Xor => !g.reads_bit_zero() && !feeds(g.out, Op::Xor),
                    Op::And => writes_z || (!g.reads_bit_zero() && !feeds(g.out, Op::Or)),
                    Op::Or => writes_z,
                }
            })
            .map(|g| g.out)
            .sorted_unstable()
            .dedup()
            .collect()
    }

    /// The miswired outputs, provided there are exactly `pairs` swaps' worth
    fn swapped_outputs(&self, pairs: usize) -> Result<Vec<&'a str>, SolveError> {
        let wrong = self.miswired();
        if wrong.len() != pairs * 2 {
            return Err(SolveError::NoSolution(format!(
                "found {} miswired outputs, expected {}",
                wrong.len(),
                pairs * 2
            )));
        }
        Ok(wrong)
    }
}

impl PartSolver<1> for Solver {
    fn solve(circuit: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(circuit.output()?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(circuit: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(circuit.swapped_outputs(SWAPPED_PAIRS)?.join(","))
    }
}
