use std::collections::HashMap;

use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

use crate::utils::input::parse_lines;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 23, tags = ["graph", "clique"], expect = [1046, "de,id,ke,ls,po,sn,tf,tl,tm,uj,un,xw,yz"], example = [7, "co,de,ka,ta"])]
pub struct Solver;

#[derive(Debug)]
pub struct Network<'a> {
    names: Vec<&'a str>,
    /// Sorted neighbour indices per computer
    links: Vec<Vec<usize>>,
    connected: Vec<Vec<bool>>,
}

impl AocParser for Solver {
    type SharedData<'a> = Network<'a>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let pairs = parse_lines(input, |line| {
            line.trim()
                .split_once('-')
                .filter(|(a, b)| !a.is_empty() && !b.is_empty() && a != b)
                .ok_or_else(|| anyhow!("expected `name-name`"))
        })?;

        let mut ids: HashMap<&str, usize> = HashMap::new();
        let mut names = Vec::new();
        let mut intern = |name| {
            *ids.entry(name).or_insert_with(|| {
                names.push(name);
                names.len() - 1
            })
        };
        let edges: Vec<(usize, usize)> = pairs
            .into_iter()
            .map(|(a, b)| (intern(a), intern(b)))
            .collect();

        let n = names.len();
        let mut links = vec![Vec::new(); n];
        let mut connected = vec![vec![false; n]; n];
        for (a, b) in edges {
            if !connected[a][b] {
                connected[a][b] = true;
                connected[b][a] = true;
                links[a].push(b);
                links[b].push(a);
            }
        }
        links.iter_mut().for_each(|l| l.sort_unstable());

        Ok(Network {
            names,
            links,
            connected,
        })
    }
}

impl Network<'_> {
    fn triangles(&self) -> impl Iterator<Item = [usize; 3]> + '_ {
        (0..self.names.len()).flat_map(move |a| {
            self.links[a]
                .iter()
                .filter(move |&&b| b > a)
                .flat_map(move |&b| {
                    self.links[b]
                        .iter()
                        .filter(move |&&c| c > b && self.connected[a][c])
                        .map(move |&c| [a, b, c])
                })
        })
    }

    /// Bron–Kerbosch with pivoting; keeps the largest clique seen in `best`
    fn grow(&self, clique: &mut Vec<usize>, mut candidates: Vec<usize>, mut excluded: Vec<usize>, best: &mut Vec<usize>) {
        if candidates.is_empty() {
            if excluded.is_empty() && clique.len() > best.len() {
                best.clone_from(clique);
            }
            return;
        }
        if clique.len() + candidates.len() <= best.len() {
            return;
        }

        let pivot = candidates
            .iter()
            .chain(&excluded)
            .copied()
            .max_by_key(|&p| candidates.iter().filter(|&&c| self.connected[p][c]).count())
            .unwrap_or(candidates[0]);
        let branches: Vec<usize> = candidates
            .iter()
            .copied()
            .filter(|&v| !self.connected[pivot][v])
            .collect();

        for v in branches {
            let keep = |set: &[usize]| set.iter().copied().filter(|&u| self.connected[v][u]).collect();
            clique.push(v);
            self.grow(clique, keep(&candidates), keep(&excluded), best);
            clique.pop();
            candidates.retain(|&u| u != v);
            excluded.push(v);
        }
    }

    fn largest_clique(&self) -> Vec<usize> {
        let mut best = Vec::new();
        self.grow(&mut Vec::new(), (0..self.names.len()).collect(), Vec::new(), &mut best);
        best
    }
}

impl PartSolver<1> for Solver {
    fn solve(network: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let count = network
            .triangles()
            .filter(|t| t.iter().any(|&i| network.names[i].starts_with('t')))
            .count();
        Ok(count.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(network: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let clique = network.largest_clique();
        if clique.is_empty() {
            return Err(SolveError::NoSolution("network has no computers".into()));
        }
        Ok(clique.iter().map(|&i| network.names[i]).sorted_unstable().join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "\
kh-tc
qp-kh
de-cg
ka-co
yn-aq
qp-ub
cg-tb
vc-aq
tb-ka
wh-tc
yn-cg
kh-ub
ta-co
de-co
tc-td
tb-wq
wh-td
ta-ka
td-qp
aq-cg
wq-ub
ub-vc
de-ta
wq-aq
wq-vc
wh-yn
ka-de
kh-ta
co-tc
wh-qp
tb-vc
td-yn
";

    #[test]
    fn test_example() {
        let mut network = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut network, 1).unwrap(), "7");
        assert_eq!(Solver::solve_part(&mut network, 2).unwrap(), "co,de,ka,ta");
    }

    #[test]
    fn test_all_triangles() {
        let network = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(network.triangles().count(), 12);
    }

    #[test]
    fn test_duplicate_links_collapse() {
        let network = Solver::parse("a-b\nb-a\nb-c\n").unwrap();
        assert_eq!(network.links[1].len(), 2);
        assert_eq!(network.largest_clique().len(), 2);
    }

    #[test]
    fn test_rejects_self_link() {
        assert!(Solver::parse("aa-aa\n").is_err());
    }
}
