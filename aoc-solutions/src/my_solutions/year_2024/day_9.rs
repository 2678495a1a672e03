use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::input::invalid;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 9, tags = ["simulation"], expect = [6211348208140, 6239783302560], example = [1928, 2858])]
pub struct Solver;

/// A contiguous run of blocks on the disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    start: usize,
    len: usize,
}

#[derive(Debug)]
pub struct Disk {
    /// Indexed by file id
    files: Vec<Span>,
    gaps: Vec<Span>,
}

impl AocParser for Solver {
    type SharedData<'a> = Disk;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let map = input.trim();
        if map.is_empty() {
            return Err(invalid(anyhow!("empty disk map")));
        }

        let mut disk = Disk {
            files: Vec::new(),
            gaps: Vec::new(),
        };
        let mut offset = 0;
        for (i, c) in map.bytes().enumerate() {
            if !c.is_ascii_digit() {
                return Err(invalid(anyhow!("unexpected {:?} at offset {i}", c as char)));
            }
            let span = Span {
                start: offset,
                len: usize::from(c - b'0'),
            };
            if i % 2 == 0 {
                disk.files.push(span);
            } else {
                disk.gaps.push(span);
            }
            offset += span.len;
        }
        Ok(disk)
    }
}

fn checksum(id: usize, span: Span) -> usize {
    (span.start..span.start + span.len).map(|pos| pos * id).sum()
}

impl PartSolver<1> for Solver {
    fn solve(disk: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: usize = disk.files.iter().map(|f| f.len).sum();
        let mut blocks: Vec<Option<usize>> = Vec::with_capacity(total * 2);
        for (id, file) in disk.files.iter().enumerate() {
            blocks.resize(file.start, None);
            blocks.extend(std::iter::repeat_n(Some(id), file.len));
        }

        let (mut front, mut back) = (0, blocks.len());
        let mut sum = 0;
        while front < back {
            match blocks[front] {
                Some(id) => sum += front * id,
                None => {
                    back -= 1;
                    while back > front && blocks[back].is_none() {
                        back -= 1;
                    }
                    if let Some(id) = blocks[back] {
                        sum += front * id;
                        blocks[back] = None;
                    }
                }
            }
            front += 1;
        }
        Ok(sum.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(disk: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut gaps = disk.gaps.clone();
        let mut sum = 0;
        for (id, &file) in disk.files.iter().enumerate().rev() {
            let mut placed = file;
            if let Some(gap) = gaps
                .iter_mut()
                .take_while(|g| g.start < file.start)
                .find(|g| g.len >= file.len)
            {
                placed.start = gap.start;
                gap.start += file.len;
                gap.len -= file.len;
            }
            sum += checksum(id, placed);
        }
        Ok(sum.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "2333133121414131402\n";

    #[test]
    fn test_example() {
        let mut disk = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut disk, 1).unwrap(), "1928");
        assert_eq!(Solver::solve_part(&mut disk, 2).unwrap(), "2858");
    }

    #[test]
    fn test_small_map() {
        // 0..111....22222 compacts to 022111222
        let mut disk = Solver::parse("12345").unwrap();
        assert_eq!(Solver::solve_part(&mut disk, 1).unwrap(), "60");
        assert_eq!(disk.files[2], Span { start: 10, len: 5 });
    }

    #[test]
    fn test_rejects_non_digits() {
        assert!(Solver::parse("12x4").is_err());
        assert!(Solver::parse("\n").is_err());
    }
}
