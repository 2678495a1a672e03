//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;
use thiserror_ext::Arc as ArcDerive;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Registration error: {0}")]
    Registration(#[from] aoc_solver::RegistrationError),

    #[error("Logging setup failed: {0}")]
    Logging(String),

    /// Error rows were printed; the message carries the count
    #[error("{0} phase(s) failed")]
    Failed(usize),

    /// Executor error (wraps Arc for cheap cloning)
    #[error("{0}")]
    Executor(#[from] ArcExecutorError),
}

/// Executor-specific errors
#[derive(Error, Debug, ArcDerive)]
#[thiserror_ext(newtype(name = ArcExecutorError))]
pub enum ExecutorError {
    #[error("Cannot read input for {year}/{day:02} at {}: {source}", path.display())]
    Input {
        year: u16,
        day: u8,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{year}/{day:02}: {source}")]
    Solver {
        year: u16,
        day: u8,
        #[source]
        source: aoc_solver::SolverError,
    },

    /// The answer disagrees with the recorded one
    #[error("For Part {part} of {year}/{day:02}, expected {expected} but got {actual}")]
    Mismatch {
        year: u16,
        day: u8,
        part: u8,
        expected: String,
        actual: String,
    },

    #[error("Channel send error")]
    ChannelSend,

    #[error("Thread pool creation failed: {0}")]
    ThreadPool(String),

    /// Multiple errors collected during parallel execution
    #[error("Multiple errors occurred ({} total): {}", .0.len(), .0.iter().map(ToString::to_string).collect::<Vec<_>>().join("; "))]
    Multiple(Vec<ArcExecutorError>),
}

impl ExecutorError {
    pub fn solver(year: u16, day: u8, source: impl Into<aoc_solver::SolverError>) -> Self {
        ExecutorError::Solver {
            year,
            day,
            source: source.into(),
        }
    }
}

impl ArcExecutorError {
    /// Combine two errors, flattening nested `Multiple`s so the list stays
    /// in submission order
    pub fn combine(first: ArcExecutorError, second: ArcExecutorError) -> ArcExecutorError {
        let errors = match (first.inner(), second.inner()) {
            (ExecutorError::Multiple(v1), ExecutorError::Multiple(v2)) => {
                v1.iter().chain(v2).cloned().collect()
            }
            (_, ExecutorError::Multiple(v)) => {
                std::iter::once(first.clone()).chain(v.iter().cloned()).collect()
            }
            (ExecutorError::Multiple(v), _) => {
                v.iter().cloned().chain(std::iter::once(second.clone())).collect()
            }
            _ => vec![first, second],
        };
        ExecutorError::Multiple(errors).into()
    }

    /// Combine an optional error with a new error
    pub fn combine_opt(
        existing: Option<ArcExecutorError>,
        new: ArcExecutorError,
    ) -> ArcExecutorError {
        match existing {
            Some(e) => Self::combine(e, new),
            None => new,
        }
    }

    /// Whether this is, or contains, an answer mismatch
    pub fn is_mismatch(&self) -> bool {
        match self.inner() {
            ExecutorError::Mismatch { .. } => true,
            ExecutorError::Multiple(errors) => errors.iter().any(Self::is_mismatch),
            _ => false,
        }
    }
}
