//! CLI argument parsing using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Parallelization level for solver execution
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum ParallelizeBy {
    /// Run every day one after another, in order (default)
    #[default]
    Sequential,
    /// Parallelize across years; days run in order within each year
    Year,
    /// Parallelize across days; parts of a day run in order
    Day,
    /// Parallelize across every day and part
    Part,
}

/// Advent of Code solver runner
#[derive(Parser, Debug)]
#[command(name = "aoc", about = "Run, time and verify Advent of Code solvers", version)]
pub struct Args {
    /// Year to run (runs all years if omitted)
    #[arg(short, long)]
    pub year: Option<u16>,

    /// Day to run (runs all days if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: Option<u8>,

    /// Part to run (runs all parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Tags to filter solvers (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Directory holding `{year}/dayDD.txt` inputs
    #[arg(long, default_value = "inputs")]
    pub input_dir: PathBuf,

    /// Read this file instead of the input directory; needs a single selected day
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Use the example fixtures (`dayDD.example.txt`) and their answers
    #[arg(short, long)]
    pub example: bool,

    /// Number of threads for parallel execution
    #[arg(long)]
    pub threads: Option<usize>,

    /// Parallelization level: sequential, year, day, or part
    #[arg(long, value_enum, default_value = "sequential")]
    pub parallelize_by: ParallelizeBy,

    /// Quiet mode - only output answers
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log progress to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["aoc"]).unwrap();
        assert_eq!(args.parallelize_by, ParallelizeBy::Sequential);
        assert_eq!(args.input_dir, PathBuf::from("inputs"));
        assert!(!args.example && !args.quiet);
    }

    #[test]
    fn test_filters_and_tags() {
        let args =
            Args::try_parse_from(["aoc", "-y", "2024", "-d", "7", "-p", "2", "-t", "grid,dp"]).unwrap();
        assert_eq!((args.year, args.day, args.part), (Some(2024), Some(7), Some(2)));
        assert_eq!(args.tags, vec!["grid", "dp"]);
    }

    #[test]
    fn test_rejects_out_of_range_day_and_part() {
        assert!(Args::try_parse_from(["aoc", "-d", "26"]).is_err());
        assert!(Args::try_parse_from(["aoc", "-p", "3"]).is_err());
        assert!(Args::try_parse_from(["aoc", "-q", "-v"]).is_err());
    }
}
