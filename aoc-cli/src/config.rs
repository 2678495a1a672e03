//! Configuration resolution from CLI args

use crate::cli::{Args, ParallelizeBy};
use aoc_solver::InputVariant;
use std::path::{Path, PathBuf};

/// Resolved runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Year filter (None = all years)
    pub year_filter: Option<u16>,
    /// Day filter (None = all days)
    pub day_filter: Option<u8>,
    /// Part filter (None = all parts)
    pub part_filter: Option<u8>,
    /// Tags to filter solvers
    pub tags: Vec<String>,
    /// Root of the input store
    pub input_dir: PathBuf,
    /// Single input file replacing the store lookup
    pub input_override: Option<PathBuf>,
    pub variant: InputVariant,
    /// Number of threads for parallel execution
    pub thread_count: usize,
    pub parallelize_by: ParallelizeBy,
    pub quiet: bool,
    pub verbose: bool,
}

impl Config {
    pub fn from_args(args: Args) -> Self {
        Config {
            year_filter: args.year,
            day_filter: args.day,
            part_filter: args.part,
            tags: args.tags,
            input_dir: expand_tilde(&args.input_dir),
            input_override: args.input.as_deref().map(expand_tilde),
            variant: if args.example {
                InputVariant::Example
            } else {
                InputVariant::Full
            },
            thread_count: args.threads.unwrap_or_else(num_cpus).max(1),
            parallelize_by: args.parallelize_by,
            quiet: args.quiet,
            verbose: args.verbose,
        }
    }

    /// Default log filter when `RUST_LOG` is unset
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && (path_str.starts_with("~/") || path_str == "~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path_str.trim_start_matches('~').trim_start_matches('/'));
    }
    path.to_path_buf()
}

fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}
